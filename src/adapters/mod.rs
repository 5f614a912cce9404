#[cfg(feature = "gui")]
pub mod egui;
pub mod pixel_format;
