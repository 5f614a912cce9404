use crate::adapters::egui::EguiGui;
use crate::controllers::window::Window;
use crate::core::data::WindowConfig;
use crate::core::errors::WindowError;
use crate::input::winit::WinitPlatform;
use crate::presenters::pixels::PixelsBackend;

/// A native window rendering through pixels with egui on top.
pub type EguiWindow = Window<WinitPlatform, PixelsBackend, EguiGui>;

/// Opens a native window and wires the winit, pixels and egui adapters into it.
pub fn open_window(config: WindowConfig) -> Result<EguiWindow, WindowError> {
    config.validate()?;

    let platform = WinitPlatform::new(&config)?;
    let backend = PixelsBackend::new(platform.window(), &config)?;
    let gui = EguiGui::new(platform.window(), platform.event_loop());

    Window::new(config, platform, backend, gui)
}
