use std::path::Path;

use crate::core::errors::BackendError;

/// Framebuffer contents as packed RGBA8 pixels (`u32::from_le_bytes([r, g, b, a])`), row-major from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub pixels: Vec<u32>,
    pub width: u32,
    pub height: u32,
}

pub trait RenderBackendPort {
    /// What the embedded GUI hands over to be painted on top of the frame.
    type Frame;

    fn draw(&mut self, frame: Self::Frame) -> Result<(), BackendError>;
    fn present(&mut self) -> Result<(), BackendError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), BackendError>;
    fn size(&self) -> (u32, u32);
    fn dump_image_buffer(&mut self) -> Result<ImageBuffer, BackendError>;
    fn write_image(&mut self, path: &Path) -> Result<(), BackendError>;
    fn copy_depth_buffer_to(&mut self, target: &mut [f32]) -> Result<(), BackendError>;
    fn prepare_for_next_frame(&mut self);
}
