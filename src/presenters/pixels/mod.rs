//! Render backend over pixels, compositing egui with egui-wgpu.

pub mod backend;
pub mod open;

pub use backend::PixelsBackend;
pub use open::{EguiWindow, open_window};
