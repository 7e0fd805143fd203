//! Application of the preference set to the document root.

use a11y_prefs::{PreferenceSet, Toggle};

/// Toggle the four presentation classes on `document.documentElement` to
/// match `prefs`. Idempotent: each class is added or removed according to
/// its flag, so repeated calls with equal state leave the root unchanged.
pub fn apply_root_classes(prefs: &PreferenceSet) {
    let Some(html) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };

    for toggle in Toggle::ALL {
        let class = toggle.root_class();
        let _ = if prefs.is_enabled(toggle) {
            html.class_list().add_1(class)
        } else {
            html.class_list().remove_1(class)
        };
    }
}
