//! `web-sys` による DOM 境界の実装

use js_sys::{
    Array,
    Object,
    Reflect,
};
use wasm_bindgen::{
    JsCast as _,
    JsValue,
};
use web_sys::{
    Document,
    EventTarget,
    FillMode,
    FormData,
    HtmlElement,
    HtmlFormElement,
    HtmlInputElement,
    HtmlTextAreaElement,
    KeyframeAnimationOptions,
};

use super::js_error;
use crate::dom::{
    BindingScope,
    Element,
    FormElement,
    Mutation,
};
use crate::error::PageError;
use crate::i18n::BindingKind;
use crate::types::Layout;

/// CSS のピクセル値
fn px(value: i32) -> String {
    format!("{value}px")
}

/// ブラウザ上の要素
#[derive(Debug, Clone)]
pub(crate) struct DomElement(HtmlElement);

impl DomElement {
    /// イベントの登録先
    pub(crate) fn event_target(&self) -> &EventTarget {
        &self.0
    }

    /// 書き込みを適用する（ブラウザ API の失敗はそのまま返す）
    fn try_apply(&self, mutation: &Mutation) -> Result<(), JsValue> {
        let element = &self.0;
        match mutation {
            Mutation::Text(text) => element.set_text_content(Some(text.as_str())),
            Mutation::Markup(markup) => element.set_inner_html(markup),
            Mutation::Placeholder(placeholder) => {
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    input.set_placeholder(placeholder);
                } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
                    textarea.set_placeholder(placeholder);
                } else {
                    element.set_attribute("placeholder", placeholder)?;
                }
            }
            Mutation::Value(value) => {
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    input.set_value(value);
                } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
                    textarea.set_value(value);
                } else {
                    element.set_attribute("value", value)?;
                }
            }
            Mutation::Class { name, enabled } => {
                element.class_list().toggle_with_force(name, *enabled)?;
            }
            Mutation::ClassName(class_name) => element.set_class_name(class_name),
            Mutation::Position(point) => {
                let style = element.style();
                style.set_property("left", &px(point.x))?;
                style.set_property("top", &px(point.y))?;
            }
            Mutation::AnimatePosition { target, duration_ms } => {
                let keyframe = Object::new();
                Reflect::set(&keyframe, &JsValue::from_str("left"), &JsValue::from(px(target.x)))?;
                Reflect::set(&keyframe, &JsValue::from_str("top"), &JsValue::from(px(target.y)))?;

                let options = KeyframeAnimationOptions::new();
                options.set_duration(&JsValue::from(*duration_ms));
                options.set_fill(FillMode::Forwards);
                element.animate_with_keyframe_animation_options(Some(&keyframe), &options)?;
            }
        }
        Ok(())
    }
}

impl Element for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn apply(&self, mutation: &Mutation) {
        if let Err(e) = self.try_apply(mutation) {
            tracing::warn!("Failed to apply {mutation:?}: {}", js_error(&e));
        }
    }

    fn layout(&self) -> Layout {
        Layout { top: self.0.offset_top(), height: self.0.offset_height() }
    }
}

/// お問い合わせフォーム
#[derive(Debug, Clone)]
pub(crate) struct DomForm(HtmlFormElement);

impl DomForm {
    /// イベントの登録先
    pub(crate) fn event_target(&self) -> &EventTarget {
        &self.0
    }

    /// `FormData` の文字列エントリ（ファイルは送信対象外）
    fn try_entries(&self) -> Result<Vec<(String, String)>, JsValue> {
        let data = FormData::new_with_form(&self.0)?;
        let Some(iter) = js_sys::try_iter(&data)? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for entry in iter {
            let pair = Array::from(&entry?);
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                entries.push((name, value));
            }
        }
        Ok(entries)
    }
}

impl FormElement for DomForm {
    fn action(&self) -> String {
        self.0.action()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.try_entries().unwrap_or_else(|e| {
            tracing::warn!("Failed to read form data: {}", js_error(&e));
            Vec::new()
        })
    }

    fn reset(&self) {
        self.0.reset();
    }
}

/// ドキュメント全体を検索範囲とするスコープ
#[derive(Debug, Clone)]
pub(crate) struct DomScope(Document);

impl DomScope {
    pub(crate) const fn new(document: Document) -> Self {
        Self(document)
    }

    /// セレクタに一致する最初の要素
    ///
    /// # Errors
    /// - 一致する要素が無い
    pub(crate) fn find(&self, selector: &str) -> Result<DomElement, PageError> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
            .ok_or_else(|| PageError::missing(selector))
    }

    /// セレクタに一致するフォーム（無ければ `None`）
    pub(crate) fn find_form(&self, selector: &str) -> Option<DomForm> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
            .map(DomForm)
    }

    /// セレクタに一致する全要素（ドキュメント順）
    pub(crate) fn find_all(&self, selector: &str) -> Vec<DomElement> {
        let nodes = match self.0.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!("Invalid selector '{selector}': {}", js_error(&e));
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
            .collect()
    }
}

impl BindingScope for DomScope {
    type Element = DomElement;

    fn bound_elements(&self, kind: BindingKind) -> Vec<DomElement> {
        self.find_all(&format!("[{}]", kind.attribute()))
    }
}
