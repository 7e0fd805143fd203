use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::Renderer;

use a11y_prefs::{PREF_KEY, PreferenceSet, Toggle};
use a11y_web::components::widget::{AccessibilityWidget, Props};
use a11y_web::dom;

fn ensure_widget_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("widget-root") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create widget root");
    root.set_id("widget-root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append widget root");
    root
}

fn reset_environment() {
    if let Ok(storage) = dom::local_storage() {
        let _ = storage.remove_item(PREF_KEY);
    }
    let html = dom::document().document_element().expect("document element");
    for toggle in Toggle::ALL {
        let _ = html.class_list().remove_1(toggle.root_class());
    }
}

fn render_widget(initial: PreferenceSet) {
    reset_environment();
    Renderer::<AccessibilityWidget>::with_root_and_props(ensure_widget_root(), Props { initial })
        .render();
}

fn element(selector: &str) -> HtmlElement {
    dom::document()
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("missing element {selector}"))
        .dyn_into()
        .expect("cast to HtmlElement")
}

fn panel_hidden() -> bool {
    element("#a11y-panel").has_attribute("hidden")
}

fn stored_record() -> Option<String> {
    dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(PREF_KEY).ok().flatten())
}

fn active_element_id() -> String {
    dom::document()
        .active_element()
        .map(|el| el.id())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn launcher_click_opens_panel_and_moves_focus() {
    render_widget(PreferenceSet::default());
    let launcher = element("#a11y-launcher");
    assert!(panel_hidden());

    launcher.click();
    assert!(!panel_hidden());
    assert_eq!(
        launcher.get_attribute("aria-expanded").unwrap_or_default(),
        "true"
    );
    let first = element("#a11y-panel [data-action]");
    let active = dom::document().active_element().expect("active element");
    assert_eq!(
        active.get_attribute("data-action"),
        first.get_attribute("data-action"),
        "focus must land on the first action button"
    );
}

#[wasm_bindgen_test]
fn launcher_click_closes_an_open_panel() {
    render_widget(PreferenceSet::default());
    let launcher = element("#a11y-launcher");
    launcher.click();
    launcher.click();
    assert!(panel_hidden());
    assert_eq!(
        launcher.get_attribute("aria-expanded").unwrap_or_default(),
        "false"
    );
}

#[wasm_bindgen_test]
fn escape_closes_panel_and_returns_focus_to_launcher() {
    render_widget(PreferenceSet::default());
    element("#a11y-launcher").click();
    assert!(!panel_hidden());

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keydown event");
    dom::document()
        .dispatch_event(&event)
        .expect("dispatch keydown");

    assert!(panel_hidden());
    assert_eq!(
        element("#a11y-launcher")
            .get_attribute("aria-expanded")
            .unwrap_or_default(),
        "false"
    );
    assert_eq!(active_element_id(), "a11y-launcher");
}

#[wasm_bindgen_test]
fn outside_click_closes_panel_but_inside_click_does_not() {
    render_widget(PreferenceSet::default());
    element("#a11y-launcher").click();

    // A click on a toggle stays inside the widget subtree.
    element(r#"[data-action="contrast"]"#).click();
    assert!(!panel_hidden());

    dom::document().body().expect("document body").click();
    assert!(panel_hidden());
}

#[wasm_bindgen_test]
fn toggling_large_flips_only_large_and_persists() {
    render_widget(PreferenceSet::default());
    element("#a11y-launcher").click();
    element(r#"[data-action="large"]"#).click();

    let html = dom::document().document_element().expect("document element");
    assert!(html.class_list().contains("a11y-large-text"));
    assert!(!html.class_list().contains("a11y-high-contrast"));
    assert!(!html.class_list().contains("a11y-highlight-links"));
    assert!(!html.class_list().contains("a11y-reduce-motion"));

    let record = stored_record().expect("record persisted");
    assert!(record.contains(r#""large":true"#));
    assert!(record.contains(r#""contrast":false"#));

    element(r#"[data-action="large"]"#).click();
    assert!(!html.class_list().contains("a11y-large-text"));
    let record = stored_record().expect("record persisted");
    assert!(record.contains(r#""large":false"#));
}

#[wasm_bindgen_test]
fn reset_clears_every_option_and_persists() {
    render_widget(PreferenceSet {
        large: true,
        links: true,
        ..PreferenceSet::default()
    });
    element("#a11y-launcher").click();
    element(r#"[data-action="reset"]"#).click();

    let html = dom::document().document_element().expect("document element");
    for toggle in Toggle::ALL {
        assert!(!html.class_list().contains(toggle.root_class()));
    }
    let record = stored_record().expect("record persisted");
    for key in ["large", "contrast", "links", "motion"] {
        assert!(record.contains(&format!(r#""{key}":false"#)), "{key} not reset");
    }
}
