//! Native window and event source backed by winit.

pub mod platform;
pub mod translate;

pub use platform::WinitPlatform;
