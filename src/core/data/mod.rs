pub mod window_config;

pub use window_config::{BackendSelector, WindowConfig};
