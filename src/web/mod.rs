//! ブラウザへの組み込み
//!
//! DOM 要素を探してページコントローラーを組み立て、イベントを接続する。

/// DOM adapters
mod dom;
/// Console logging
mod logging;
/// Local storage
mod storage;

use std::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document,
    Event,
    EventTarget,
    MouseEvent,
    Window,
};

use self::dom::{
    DomForm,
    DomScope,
};
use self::storage::LocalPreferenceStore;
use crate::config::{
    ConfigError,
    ConfigManager,
    PageSettings,
};
use crate::contact::HttpTransport;
use crate::error::PageError;
use crate::page::{
    ContactElements,
    PageController,
    PageElements,
};
use crate::types::Point;

/// ブラウザ上のページ
type WebPage = PageController<DomScope, DomForm, LocalPreferenceStore, HttpTransport>;

/// 設定 JSON を埋め込む `<script type="application/json">` の id
const CONFIG_ELEMENT_ID: &str = "page-config";

/// JavaScript の例外を文字列にする
fn js_error(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{error:?}"))
}

/// 埋め込まれた設定を読み込む（無ければ既定値）
fn load_settings(document: &Document) -> Result<PageSettings, ConfigError> {
    let source = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|e| e.text_content());

    let mut manager = ConfigManager::new();
    manager.load_settings(source.as_deref())?;
    Ok(manager.into_settings())
}

/// 現在の縦スクロール量
fn scroll_position(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

/// イベントリスナーを登録する（ページが存在する間ずっと有効）
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), PageError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| PageError::Browser(js_error(&e)))?;
    closure.forget();
    Ok(())
}

/// 要素を探してページを起動し、イベントを接続する
///
/// # Errors
/// - 必須要素が見つからない（お問い合わせフォームは任意）
/// - イベントリスナーの登録に失敗した
fn mount(window: &Window, document: &Document, settings: &PageSettings) -> Result<(), PageError> {
    let scope = DomScope::new(document.clone());
    let selectors = &settings.selectors;

    let contact = match scope.find_form(&selectors.contact_form) {
        Some(form) => Some(ContactElements { form, status: scope.find(&selectors.form_status)? }),
        None => {
            tracing::debug!("No contact form matches '{}'", selectors.contact_form);
            None
        }
    };
    let form = contact.as_ref().map(|contact| contact.form.clone());
    let toggle = scope.find(&selectors.language_toggle)?;

    let elements = PageElements {
        cursor_dot: scope.find(&selectors.cursor_dot)?,
        cursor_outline: scope.find(&selectors.cursor_outline)?,
        blog_container: scope.find(&selectors.blog_container)?,
        sections: scope.find_all(&selectors.sections),
        nav_links: scope.find_all(&selectors.nav_links),
        header: scope.find(&selectors.header)?,
        language_toggle: toggle.clone(),
        contact,
        scope,
    };

    let page: Rc<WebPage> =
        Rc::new(PageController::new(elements, settings, LocalPreferenceStore, HttpTransport::new()));
    page.start();
    page.on_scroll(scroll_position(window));

    {
        let page = Rc::clone(&page);
        listen(document, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                page.on_pointer_move(Point::new(mouse.client_x(), mouse.client_y()));
            }
        })?;
    }
    {
        let page = Rc::clone(&page);
        let scrolled = window.clone();
        listen(window, "scroll", move |_| page.on_scroll(scroll_position(&scrolled)))?;
    }
    {
        let page = Rc::clone(&page);
        listen(toggle.event_target(), "click", move |_| {
            page.toggle_language();
        })?;
    }
    if let Some(form) = form {
        let page = Rc::clone(&page);
        listen(form.event_target(), "submit", move |event| {
            event.prevent_default();
            let page = Rc::clone(&page);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = page.submit().await;
            });
        })?;
    }

    Ok(())
}

/// 起動を試み、失敗を記録する
fn run(window: &Window, document: &Document, settings: &PageSettings) -> Result<(), PageError> {
    mount(window, document, settings).inspect_err(|e| tracing::error!("Failed to start the page: {e}"))
}

/// WebAssembly モジュールの読み込み時に呼ばれる
///
/// ドキュメントの解析が終わっていなければ `DOMContentLoaded` まで待つ。
#[allow(unsafe_code)]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let document =
        window.document().ok_or_else(|| JsValue::from_str("document is not available"))?;

    let settings = match load_settings(&document) {
        Ok(settings) => {
            logging::init(&settings.log_level);
            settings
        }
        Err(e) => {
            logging::init("info");
            tracing::error!("Ignoring invalid page configuration: {e}");
            PageSettings::default()
        }
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        let callback = Closure::once_into_js(move || {
            let _ = run(&window, &document, &settings);
        });
        target
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
        return Ok(());
    }

    run(&window, &document, &settings).map_err(|e| JsValue::from_str(&e.to_string()))
}
