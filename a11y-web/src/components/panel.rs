use a11y_prefs::{PreferenceSet, Toggle};
use yew::prelude::*;

use super::toggle_button::ToggleButton;

/// Element id the launcher's `aria-controls` points at.
pub const PANEL_ID: &str = "a11y-panel";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub prefs: PreferenceSet,
    pub on_toggle: Callback<Toggle>,
    pub on_reset: Callback<()>,
}

/// The dismissible dialog holding the four toggles and the reset control.
///
/// Button state is a pure function of the preference set, so re-rendering
/// with unchanged preferences produces identical markup.
#[function_component(Panel)]
pub fn panel(p: &Props) -> Html {
    html! {
        <div
            id={PANEL_ID}
            class="a11y-panel"
            role="dialog"
            aria-label="Accessibility options"
            hidden={!p.open}
        >
            <p class="a11y-panel-title">{ "Accessibility adjustments" }</p>
            <div class="a11y-actions" role="group" aria-label="Accessibility adjustments">
                { for Toggle::ALL.into_iter().map(|toggle| {
                    let on_toggle = p.on_toggle.clone();
                    html! {
                        <ToggleButton
                            action={toggle.action()}
                            label={toggle.label()}
                            pressed={p.prefs.is_enabled(toggle)}
                            onclick={Callback::from(move |_| on_toggle.emit(toggle))}
                        />
                    }
                }) }
                // Reset is an action, not a state toggle: no pressed state.
                <ToggleButton
                    action="reset"
                    label="Reset"
                    class={classes!("a11y-reset")}
                    onclick={{
                        let on_reset = p.on_reset.clone();
                        Callback::from(move |_| on_reset.emit(()))
                    }}
                />
            </div>
            <p class="a11y-note">{ "Your settings are kept for your next visit." }</p>
        </div>
    }
}
