//! Port definitions for the window controller.
//!
//! Trait seams between the per-frame orchestration and the native window,
//! the render backend and the embedded immediate-mode GUI.

pub mod embedded_gui;
pub mod platform;
pub mod render_backend;

pub use embedded_gui::EmbeddedGuiPort;
pub use platform::{NativeEvent, PlatformEvent, PlatformPort};
pub use render_backend::{ImageBuffer, RenderBackendPort};
