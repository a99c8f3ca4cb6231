//! テスト用ユーティリティ
//!
//! ブラウザ無しでページのロジックを検証するためのインメモリ実装を提供します。
#![cfg(test)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::FutureExt as _;
use futures::future::LocalBoxFuture;

use crate::contact::{
    Transport,
    TransportError,
};
use crate::dom::{
    BindingScope,
    Element,
    FormElement,
    Mutation,
};
use crate::i18n::BindingKind;
use crate::storage::{
    PreferenceStore,
    StorageError,
};
use crate::types::{
    Layout,
    Point,
};

/// 要素の状態
#[derive(Debug, Default)]
struct ElementState {
    /// 属性
    attributes: HashMap<String, String>,
    /// `textContent`
    text: String,
    /// `innerHTML`
    markup: String,
    /// `placeholder`
    placeholder: String,
    /// `value`
    value: String,
    /// クラス一覧（追加順）
    classes: Vec<String>,
    /// `style.left` / `style.top`
    position: Option<Point>,
    /// 最後に開始したアニメーション
    animation: Option<(Point, u32)>,
    /// レイアウト
    layout: Layout,
    /// 適用された書き込みの数
    writes: usize,
}

/// インメモリの要素（クローンは同じ要素を指す）
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryElement(Rc<RefCell<ElementState>>);

impl MemoryElement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub(crate) fn with_markup(self, markup: &str) -> Self {
        self.0.borrow_mut().markup = markup.to_string();
        self
    }

    pub(crate) fn with_layout(self, top: i32, height: i32) -> Self {
        self.0.borrow_mut().layout = Layout { top, height };
        self
    }

    pub(crate) fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub(crate) fn markup(&self) -> String {
        self.0.borrow().markup.clone()
    }

    pub(crate) fn placeholder(&self) -> String {
        self.0.borrow().placeholder.clone()
    }

    pub(crate) fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub(crate) fn has_class(&self, name: &str) -> bool {
        self.0.borrow().classes.iter().any(|class| class == name)
    }

    pub(crate) fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    pub(crate) fn position(&self) -> Option<Point> {
        self.0.borrow().position
    }

    pub(crate) fn animation(&self) -> Option<(Point, u32)> {
        self.0.borrow().animation
    }

    pub(crate) fn writes(&self) -> usize {
        self.0.borrow().writes
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn apply(&self, mutation: &Mutation) {
        let mut state = self.0.borrow_mut();
        state.writes += 1;
        match mutation {
            Mutation::Text(text) => state.text.clone_from(text),
            Mutation::Markup(markup) => state.markup.clone_from(markup),
            Mutation::Placeholder(placeholder) => state.placeholder.clone_from(placeholder),
            Mutation::Value(value) => state.value.clone_from(value),
            Mutation::Class { name, enabled: true } => {
                if !state.classes.iter().any(|class| class == *name) {
                    state.classes.push((*name).to_string());
                }
            }
            Mutation::Class { name, enabled: false } => {
                state.classes.retain(|class| class != *name);
            }
            Mutation::ClassName(class_name) => {
                state.classes = class_name.split_whitespace().map(str::to_string).collect();
            }
            Mutation::Position(point) => state.position = Some(*point),
            Mutation::AnimatePosition { target, duration_ms } => {
                state.animation = Some((*target, *duration_ms));
            }
        }
    }

    fn layout(&self) -> Layout {
        self.0.borrow().layout
    }
}

/// インメモリのドキュメント
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryScope {
    /// ドキュメント順の要素
    elements: Rc<RefCell<Vec<MemoryElement>>>,
}

impl MemoryScope {
    pub(crate) fn new(elements: Vec<MemoryElement>) -> Self {
        Self { elements: Rc::new(RefCell::new(elements)) }
    }

    /// 後から描画された要素を追加する
    pub(crate) fn push(&self, element: MemoryElement) {
        self.elements.borrow_mut().push(element);
    }
}

impl BindingScope for MemoryScope {
    type Element = MemoryElement;

    fn bound_elements(&self, kind: BindingKind) -> Vec<MemoryElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|element| element.attribute(kind.attribute()).is_some())
            .cloned()
            .collect()
    }
}

/// インメモリのフォーム
#[derive(Debug, Clone)]
pub(crate) struct MemoryForm {
    /// 送信先 URL
    action: String,
    /// フィールド
    fields: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryForm {
    pub(crate) fn new(action: &str, fields: &[(&str, &str)]) -> Self {
        let fields =
            fields.iter().map(|(name, value)| ((*name).to_string(), (*value).to_string())).collect();
        Self { action: action.to_string(), fields: Rc::new(RefCell::new(fields)) }
    }

    pub(crate) fn values(&self) -> Vec<String> {
        self.fields.borrow().iter().map(|(_, value)| value.clone()).collect()
    }
}

impl FormElement for MemoryForm {
    fn action(&self) -> String {
        self.action.clone()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.fields.borrow().clone()
    }

    fn reset(&self) {
        for (_, value) in self.fields.borrow_mut().iter_mut() {
            value.clear();
        }
    }
}

/// インメモリの設定ストレージ
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore {
    /// 保存された値
    values: Rc<RefCell<HashMap<String, String>>>,
    /// 書き込み時に返すエラー
    failure: Option<StorageError>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing(error: StorageError) -> Self {
        Self { failure: Some(error), ..Self::default() }
    }

    pub(crate) fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 送信内容（URL、フィールド）
pub(crate) type SentRequest = (String, Vec<(String, String)>);

/// 固定の応答を返すモック通信
#[derive(Debug, Clone)]
pub(crate) struct MockTransport {
    /// 返す応答
    response: Result<u16, TransportError>,
    /// 受け取ったリクエスト
    calls: Rc<RefCell<Vec<SentRequest>>>,
}

impl MockTransport {
    pub(crate) fn responding(status: u16) -> Self {
        Self { response: Ok(status), calls: Rc::default() }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self { response: Err(TransportError::Failed(message.to_string())), calls: Rc::default() }
    }

    pub(crate) fn calls(&self) -> Vec<SentRequest> {
        self.calls.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        fields: &'a [(String, String)],
    ) -> LocalBoxFuture<'a, Result<u16, TransportError>> {
        self.calls.borrow_mut().push((url.to_string(), fields.to_vec()));
        let response = self.response.clone();
        async move { response }.boxed_local()
    }
}
