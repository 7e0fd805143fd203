pub mod panel;
pub mod toggle_button;
pub mod widget;
