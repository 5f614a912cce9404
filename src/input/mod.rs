//! Input adapters: native windows and the events they produce.

pub mod winit;
