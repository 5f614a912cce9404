//! egui as the embedded immediate-mode GUI.

pub mod frame;
pub mod gui;
pub mod widgets;

pub use frame::EguiFrame;
pub use gui::EguiGui;
pub use widgets::Panel;
