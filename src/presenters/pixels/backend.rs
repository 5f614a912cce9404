use std::path::Path;

use egui_wgpu::{Renderer as EguiRenderer, ScreenDescriptor};
use log::{debug, error};
use pixels::wgpu;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::window::Window as NativeWindow;

use crate::adapters::egui::EguiFrame;
use crate::adapters::pixel_format::{fill_rgba, pack_rgba};
use crate::controllers::window::ports::{ImageBuffer, RenderBackendPort};
use crate::core::data::{BackendSelector, WindowConfig};
use crate::core::errors::BackendError;
use crate::storage::write_ppm;

const CLEAR_COLOUR: [u8; 4] = [0, 0, 0, 255];
const CLEAR_DEPTH: f32 = 1.0;

#[must_use]
pub fn wgpu_backends(selector: BackendSelector) -> wgpu::Backends {
    match selector {
        BackendSelector::Auto => wgpu::Backends::PRIMARY,
        BackendSelector::Vulkan => wgpu::Backends::VULKAN,
        BackendSelector::Metal => wgpu::Backends::METAL,
        BackendSelector::Dx12 => wgpu::Backends::DX12,
        BackendSelector::Gl => wgpu::Backends::GL,
    }
}

/// A CPU canvas scaled onto the window by pixels, with egui composited on top.
pub struct PixelsBackend {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
    clear_colour: [u8; 4],
    depth: Vec<f32>,
    pending: Option<EguiFrame>,
}

impl PixelsBackend {
    pub fn new(window: &'static NativeWindow, config: &WindowConfig) -> Result<Self, BackendError> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let surface_texture = SurfaceTexture::new(width, height, window);

        let pixels = PixelsBuilder::new(width, height, surface_texture)
            .enable_vsync(config.vsync)
            .wgpu_backend(wgpu_backends(config.backend))
            .build()
            .map_err(|err| BackendError::Surface(err.to_string()))?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        debug!(
            "Created pixels backend {width}x{height} ({}, vsync {})",
            config.backend, config.vsync
        );

        let mut backend = Self {
            pixels,
            egui_renderer,
            width,
            height,
            clear_colour: CLEAR_COLOUR,
            depth: vec![CLEAR_DEPTH; (width * height) as usize],
            pending: None,
        };
        backend.prepare_for_next_frame();

        Ok(backend)
    }

    /// RGBA8 canvas under the GUI, cleared at every frame boundary.
    pub fn canvas_mut(&mut self) -> &mut [u8] {
        self.pixels.frame_mut()
    }

    /// Depth values for the canvas, cleared to 1.0 at every frame boundary.
    pub fn depth_mut(&mut self) -> &mut [f32] {
        &mut self.depth
    }

    pub fn set_clear_colour(&mut self, colour: [u8; 4]) {
        self.clear_colour = colour;
    }

    fn render(&mut self, frame: Option<EguiFrame>) -> Result<(), pixels::Error> {
        let Some(frame) = frame else {
            return self.pixels.render();
        };

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [self.width, self.height],
            pixels_per_point: frame.pixels_per_point,
        };
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &frame.textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &frame.primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep the canvas underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &frame.primitives, &screen_descriptor);
            }

            for id in &frame.textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl RenderBackendPort for PixelsBackend {
    type Frame = EguiFrame;

    fn draw(&mut self, frame: EguiFrame) -> Result<(), BackendError> {
        match &mut self.pending {
            Some(pending) => pending.merge(frame),
            None => self.pending = Some(frame),
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), BackendError> {
        let frame = self.pending.take();
        self.render(frame).map_err(|err| {
            error!("Failed to present frame: {err}");
            BackendError::Surface(err.to_string())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), BackendError> {
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(|err| BackendError::Surface(err.to_string()))?;
        self.pixels
            .resize_buffer(width, height)
            .map_err(|err| BackendError::Texture(err.to_string()))?;

        self.width = width;
        self.height = height;
        self.depth = vec![CLEAR_DEPTH; (width * height) as usize];
        fill_rgba(self.pixels.frame_mut(), self.clear_colour);

        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn dump_image_buffer(&mut self) -> Result<ImageBuffer, BackendError> {
        Ok(ImageBuffer {
            pixels: pack_rgba(self.pixels.frame()),
            width: self.width,
            height: self.height,
        })
    }

    fn write_image(&mut self, path: &Path) -> Result<(), BackendError> {
        let image = self.dump_image_buffer()?;
        write_ppm(&image, path)?;
        debug!("Wrote {}x{} image to {}", image.width, image.height, path.display());
        Ok(())
    }

    fn copy_depth_buffer_to(&mut self, target: &mut [f32]) -> Result<(), BackendError> {
        if target.len() != self.depth.len() {
            return Err(BackendError::DepthBufferSize {
                expected: self.depth.len(),
                actual: target.len(),
            });
        }
        target.copy_from_slice(&self.depth);
        Ok(())
    }

    fn prepare_for_next_frame(&mut self) {
        fill_rgba(self.pixels.frame_mut(), self.clear_colour);
        self.depth.fill(CLEAR_DEPTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_selector_maps_to_a_backend_set() {
        for &selector in BackendSelector::ALL {
            assert!(!wgpu_backends(selector).is_empty(), "{selector}");
        }
        assert_eq!(wgpu_backends(BackendSelector::Gl), wgpu::Backends::GL);
    }
}
