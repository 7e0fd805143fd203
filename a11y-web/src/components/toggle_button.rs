use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `data-action` token carried by the button.
    pub action: AttrValue,
    pub label: AttrValue,
    /// Pressed state. `None` renders a plain action button without
    /// `aria-pressed` (the reset control).
    #[prop_or_default]
    pub pressed: Option<bool>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ToggleButton)]
pub fn toggle_button(p: &Props) -> Html {
    let mut class = p.class.clone();
    if p.pressed == Some(true) {
        class.push("active");
    }
    let aria_pressed = p.pressed.map(|on| if on { "true" } else { "false" });

    html! {
        <button
            type="button"
            class={class}
            data-action={p.action.clone()}
            aria-pressed={aria_pressed}
            onclick={p.onclick.clone()}
        >
            { p.label.clone() }
        </button>
    }
}
