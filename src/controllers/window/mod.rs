pub mod controller;
pub mod ports;

pub use controller::Window;
