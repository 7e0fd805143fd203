#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod apply;
pub mod components;
pub mod dom;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Restored preferences take effect before the widget mounts, so the
    // page reflects them without waiting for the first render.
    let prefs = storage::load_prefs();
    apply::apply_root_classes(&prefs);

    yew::Renderer::<components::widget::AccessibilityWidget>::with_props(
        components::widget::Props { initial: prefs },
    )
    .render();
}
