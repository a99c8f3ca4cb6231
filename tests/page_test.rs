//! 公開 API だけを使ったページ全体のテスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::FutureExt as _;
use futures::future::LocalBoxFuture;
use googletest::prelude::*;
use portfolio_page::blog::{
    BLOG_POSTS,
    posts_markup,
};
use portfolio_page::config::{
    ConfigError,
    ConfigManager,
    PageSettings,
};
use portfolio_page::contact::{
    SubmitError,
    Transport,
    TransportError,
};
use portfolio_page::dom::{
    BindingScope,
    Element,
    FormElement,
    Mutation,
};
use portfolio_page::i18n::{
    BindingKind,
    Locale,
};
use portfolio_page::storage::{
    PreferenceStore,
    StorageError,
};
use portfolio_page::types::{
    Layout,
    Point,
};
use portfolio_page::{
    ContactElements,
    PageController,
    PageElements,
};
use rstest::rstest;

/// 要素の状態
#[derive(Debug, Default)]
struct NodeState {
    attributes: HashMap<String, String>,
    text: String,
    markup: String,
    classes: Vec<&'static str>,
    class_name: String,
    position: Option<Point>,
    layout: Layout,
}

/// 最小限のインメモリ要素
#[derive(Debug, Clone, Default)]
struct Node(Rc<RefCell<NodeState>>);

impl Node {
    fn with(attribute: &str, value: &str) -> Self {
        let node = Self::default();
        node.0.borrow_mut().attributes.insert(attribute.to_string(), value.to_string());
        node
    }

    fn section(id: &str, top: i32, height: i32) -> Self {
        let node = Self::with("id", id);
        node.0.borrow_mut().layout = Layout { top, height };
        node
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }
}

impl Element for Node {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn apply(&self, mutation: &Mutation) {
        let mut state = self.0.borrow_mut();
        match mutation {
            Mutation::Text(text) => state.text.clone_from(text),
            Mutation::Markup(markup) => state.markup.clone_from(markup),
            Mutation::Class { name, enabled } => {
                state.classes.retain(|class| class != name);
                if *enabled {
                    state.classes.push(*name);
                }
            }
            Mutation::ClassName(class_name) => state.class_name.clone_from(class_name),
            Mutation::Position(point) => state.position = Some(*point),
            Mutation::Placeholder(_) | Mutation::Value(_) | Mutation::AnimatePosition { .. } => {}
        }
    }

    fn layout(&self) -> Layout {
        self.0.borrow().layout
    }
}

#[derive(Debug, Clone, Default)]
struct Document(Rc<RefCell<Vec<Node>>>);

impl BindingScope for Document {
    type Element = Node;

    fn bound_elements(&self, kind: BindingKind) -> Vec<Node> {
        self.0.borrow().iter().filter(|node| node.attribute(kind.attribute()).is_some()).cloned().collect()
    }
}

#[derive(Debug, Clone)]
struct Form(Rc<RefCell<Vec<(String, String)>>>);

impl FormElement for Form {
    fn action(&self) -> String {
        "https://formspree.io/f/portfolio".to_string()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.0.borrow().clone()
    }

    fn reset(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug, Clone, Default)]
struct Store(Rc<RefCell<HashMap<String, String>>>);

impl PreferenceStore for Store {
    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 常に同じステータスを返す通信
#[derive(Debug, Clone, Copy)]
struct FixedStatus(u16);

impl Transport for FixedStatus {
    fn post_form<'a>(
        &'a self,
        _url: &'a str,
        _fields: &'a [(String, String)],
    ) -> LocalBoxFuture<'a, std::result::Result<u16, TransportError>> {
        let status = self.0;
        async move { Ok(status) }.boxed_local()
    }
}

struct Page {
    controller: PageController<Document, Form, Store, FixedStatus>,
    document: Document,
    blog: Node,
    links: Vec<Node>,
    header: Node,
    toggle: Node,
    status: Node,
    store: Store,
}

fn page(settings: &PageSettings, fields: &[(&str, &str)], status: u16) -> Page {
    let document = Document::default();
    document.0.borrow_mut().extend([
        Node::with("data-i18n", "nav.home"),
        Node::with("data-i18n", "hero.title"),
        Node::with("data-i18n", "footer.text"),
    ]);
    let blog = Node::default();
    let links: Vec<_> =
        ["#home", "#about", "#contact"].into_iter().map(|href| Node::with("href", href)).collect();
    let header = Node::default();
    let toggle = Node::default();
    let status_node = Node::default();
    let store = Store::default();
    let form = Form(Rc::new(RefCell::new(
        fields.iter().map(|(name, value)| ((*name).to_string(), (*value).to_string())).collect(),
    )));

    let elements = PageElements {
        scope: document.clone(),
        cursor_dot: Node::default(),
        cursor_outline: Node::default(),
        blog_container: blog.clone(),
        sections: vec![
            Node::section("home", 0, 900),
            Node::section("about", 900, 700),
            Node::section("contact", 1600, 600),
        ],
        nav_links: links.clone(),
        header: header.clone(),
        language_toggle: toggle.clone(),
        contact: Some(ContactElements { form, status: status_node.clone() }),
    };
    let controller = PageController::new(elements, settings, store.clone(), FixedStatus(status));

    Page { controller, document, blog, links, header, toggle, status: status_node, store }
}

const FILLED: [(&str, &str); 3] = [("name", "Deniz"), ("email", "deniz@example.com"), ("message", "Merhaba")];

fn active_hrefs(links: &[Node]) -> Vec<String> {
    links
        .iter()
        .filter(|link| link.0.borrow().classes.contains(&"active"))
        .filter_map(|link| link.attribute("href"))
        .collect()
}

#[rstest]
fn first_visit_shows_turkish_and_renders_the_blog() {
    let page = page(&PageSettings::default(), &FILLED, 200);

    page.controller.start();

    let expected = posts_markup(&BLOG_POSTS);
    let rendered = page.blog.0.borrow().markup.clone();
    assert_that!(rendered, eq(&expected));
    assert_that!(page.controller.locale(), eq(Locale::Tr));
    assert_that!(page.toggle.text(), eq("EN"));
    let home = page.document.0.borrow()[0].text();
    assert_that!(home, eq("Ana Sayfa"));
}

#[rstest]
fn language_choice_survives_a_reload() {
    let first = page(&PageSettings::default(), &FILLED, 200);
    first.controller.start();
    first.controller.toggle_language();

    let reloaded = page(&PageSettings::default(), &FILLED, 200);
    for (key, value) in first.store.0.borrow().iter() {
        reloaded.store.save(key, value).unwrap();
    }
    reloaded.controller.start();

    assert_that!(reloaded.controller.locale(), eq(Locale::En));
    assert_that!(reloaded.toggle.text(), eq("TR"));
    let home = reloaded.document.0.borrow()[0].text();
    assert_that!(home, eq("Home"));
}

#[rstest]
fn hero_title_is_written_as_markup() {
    let page = page(&PageSettings::default(), &FILLED, 200);

    page.controller.set_language(Locale::En);

    let hero = page.document.0.borrow()[1].0.borrow().markup.clone();
    assert_that!(hero, eq("AI and <span>Robotics</span> Engineer"));
}

#[rstest]
#[case::top(0.0, vec!["#home"])]
#[case::about(800.0, vec!["#about"])]
#[case::contact(1500.0, vec!["#contact"])]
fn scrolling_highlights_one_link(#[case] scroll_y: f64, #[case] expected: Vec<&str>) {
    let page = page(&PageSettings::default(), &FILLED, 200);

    page.controller.on_scroll(scroll_y);

    assert_that!(active_hrefs(&page.links), eq(&expected));
}

#[rstest]
fn configured_threshold_controls_the_sticky_header() {
    let mut manager = ConfigManager::new();
    manager.load_settings(Some(r#"{"scroll": {"stickyThreshold": 300}}"#)).unwrap();
    let page = page(manager.get_settings(), &FILLED, 200);

    page.controller.on_scroll(300.0);
    let sticky_at_300 = page.header.0.borrow().classes.contains(&"sticky");
    page.controller.on_scroll(300.5);
    let sticky_past_300 = page.header.0.borrow().classes.contains(&"sticky");

    assert_that!(sticky_at_300, eq(false));
    assert_that!(sticky_past_300, eq(true));
}

#[rstest]
fn invalid_configuration_is_rejected() {
    let mut manager = ConfigManager::new();

    let result = manager.load_settings(Some(r#"{"language": {"storageKey": ""}}"#));

    assert!(matches!(result, Err(ConfigError::ValidationErrors(ref errors)) if errors.len() == 1));
    assert_that!(manager.get_settings().language.storage_key, eq("language"));
}

#[tokio::test]
async fn successful_submission_in_english() {
    let page = page(&PageSettings::default(), &FILLED, 200);
    page.controller.start();
    page.controller.toggle_language();

    let result = page.controller.submit().await;

    assert_that!(result, some(ok(anything())));
    assert_that!(page.status.text(), eq("Your message has been sent successfully! Thank you."));
    let class_name = page.status.0.borrow().class_name.clone();
    assert_that!(class_name, eq("form-status success"));
}

#[tokio::test]
async fn incomplete_form_is_not_sent() {
    let page = page(&PageSettings::default(), &[("name", "Deniz")], 200);
    page.controller.start();

    let result = page.controller.submit().await;

    let expected = SubmitError::MissingFields(vec!["email", "message"]);
    assert_that!(result, some(err(eq(&expected))));
    assert_that!(page.status.text(), eq("Lütfen tüm zorunlu alanları doldurun."));
}

#[tokio::test]
async fn rejected_submission_shows_an_error() {
    let page = page(&PageSettings::default(), &FILLED, 422);
    page.controller.start();

    let result = page.controller.submit().await;

    let expected = SubmitError::Rejected { status: 422 };
    assert_that!(result, some(err(eq(&expected))));
    let class_name = page.status.0.borrow().class_name.clone();
    assert_that!(class_name, eq("form-status error"));
}
