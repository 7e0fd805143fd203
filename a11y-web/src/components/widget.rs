use a11y_prefs::{PreferenceSet, Toggle};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::panel::{PANEL_ID, Panel};
use crate::apply::apply_root_classes;
use crate::{dom, storage};

/// Element id used to return focus to the launcher on Escape.
pub const LAUNCHER_ID: &str = "a11y-launcher";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Preferences restored from storage before the first render.
    #[prop_or_default]
    pub initial: PreferenceSet,
}

/// The floating widget: launcher plus panel.
///
/// Owns the in-memory [`PreferenceSet`] and the transient open/closed
/// state. Every toggle mutation re-renders and persists the full set;
/// the open state is never persisted and starts closed on each load.
#[function_component(AccessibilityWidget)]
pub fn accessibility_widget(p: &Props) -> Html {
    let prefs = use_state(|| p.initial.clone());
    let open = use_state(|| false);
    let container_ref = use_node_ref();

    // Root classes follow the preference set.
    use_effect_with((*prefs).clone(), |prefs| {
        apply_root_classes(prefs);
    });

    // Opening moves focus to the first action button inside the panel.
    {
        let container_ref = container_ref.clone();
        use_effect_with(*open, move |is_open| {
            if *is_open
                && let Some(container) = container_ref.cast::<web_sys::Element>()
                && let Ok(Some(first)) =
                    container.query_selector(&format!("#{PANEL_ID} [data-action]"))
                && let Ok(button) = first.dyn_into::<web_sys::HtmlElement>()
            {
                let _ = button.focus();
            }
        });
    }

    // Document-level dismissal: outside clicks close the panel without
    // touching focus; Escape closes it and returns focus to the launcher.
    // Listeners exist only while the panel is open.
    {
        let open_handle = open.clone();
        let container_ref = container_ref.clone();
        use_effect_with(*open, move |is_open| {
            let mut cleanup: Option<Box<dyn FnOnce()>> = None;
            if *is_open {
                let doc = dom::document();

                let click_open = open_handle.clone();
                let click_container = container_ref.clone();
                let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(
                    move |event: web_sys::Event| {
                        let inside = event
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                            .is_some_and(|node| {
                                click_container
                                    .get()
                                    .is_some_and(|container| container.contains(Some(&node)))
                            });
                        if !inside {
                            click_open.set(false);
                        }
                    },
                );

                let esc_open = open_handle.clone();
                let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                    move |event: web_sys::KeyboardEvent| {
                        if event.key() == "Escape" {
                            esc_open.set(false);
                            dom::focus_by_id(LAUNCHER_ID);
                        }
                    },
                );

                let _ = doc
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
                let _ = doc.add_event_listener_with_callback(
                    "keydown",
                    on_keydown.as_ref().unchecked_ref(),
                );

                cleanup = Some(Box::new(move || {
                    let _ = doc.remove_event_listener_with_callback(
                        "click",
                        on_click.as_ref().unchecked_ref(),
                    );
                    let _ = doc.remove_event_listener_with_callback(
                        "keydown",
                        on_keydown.as_ref().unchecked_ref(),
                    );
                }));
            }
            move || {
                if let Some(remove) = cleanup {
                    remove();
                }
            }
        });
    }

    let on_launcher_click = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    let on_toggle = {
        let prefs = prefs.clone();
        Callback::from(move |toggle: Toggle| {
            let mut next = (*prefs).clone();
            next.toggle(toggle);
            storage::save_prefs(&next);
            prefs.set(next);
        })
    };

    let on_reset = {
        let prefs = prefs.clone();
        Callback::from(move |()| {
            let mut next = (*prefs).clone();
            next.reset();
            storage::save_prefs(&next);
            prefs.set(next);
        })
    };

    html! {
        <div class="a11y-widget" ref={container_ref}>
            <button
                type="button"
                id={LAUNCHER_ID}
                class="a11y-launcher"
                aria-expanded={if *open { "true" } else { "false" }}
                aria-controls={PANEL_ID}
                onclick={on_launcher_click}
            >
                <i class="fas fa-universal-access" aria-hidden="true"></i>
                <span>{ "Accessibility options" }</span>
            </button>
            <Panel
                open={*open}
                prefs={(*prefs).clone()}
                on_toggle={on_toggle}
                on_reset={on_reset}
            />
        </div>
    }
}
