//! UI-Layer mit egui: Slider-Widget, Host-Bildschirm, Status-Bar, Optionen.

pub mod host_screen;
pub mod options_dialog;
pub mod slider_widget;
pub mod status;

pub use host_screen::{render_menu, render_slider_screen};
pub use options_dialog::show_options_dialog;
pub use slider_widget::show_curved_slider;
pub use status::render_status_bar;
