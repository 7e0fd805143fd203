use wasm_bindgen_test::*;

use a11y_prefs::{PREF_KEY, PreferenceSet};
use a11y_web::{dom, storage};

fn seed_record(value: &str) {
    dom::local_storage()
        .expect("localStorage")
        .set_item(PREF_KEY, value)
        .expect("seed record");
}

fn clear_record() {
    dom::local_storage()
        .expect("localStorage")
        .remove_item(PREF_KEY)
        .expect("clear record");
}

#[wasm_bindgen_test]
fn absent_record_restores_defaults() {
    clear_record();
    assert_eq!(storage::load_prefs(), PreferenceSet::default());
}

#[wasm_bindgen_test]
fn malformed_record_restores_defaults_without_panicking() {
    seed_record("not json {");
    assert_eq!(storage::load_prefs(), PreferenceSet::default());
}

#[wasm_bindgen_test]
fn partial_record_merges_over_defaults() {
    seed_record(r#"{"contrast":true}"#);
    let prefs = storage::load_prefs();
    assert!(prefs.contrast);
    assert!(!prefs.large);
    assert!(!prefs.links);
    assert!(!prefs.motion);
}

#[wasm_bindgen_test]
fn save_then_load_round_trips() {
    clear_record();
    let prefs = PreferenceSet {
        large: true,
        motion: true,
        ..PreferenceSet::default()
    };
    storage::save_prefs(&prefs);
    assert_eq!(storage::load_prefs(), prefs);
}
