mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use adapters::pixel_format;
pub use controllers::window::Window;
pub use controllers::window::ports::{
    EmbeddedGuiPort, ImageBuffer, NativeEvent, PlatformEvent, PlatformPort, RenderBackendPort,
};
pub use crate::core::cursor::{
    AppliedCursorState, CURSOR_DEFAULT, CURSOR_NONE, CursorChoice, CursorRequest, CursorShape,
    CursorSink, GuiCursor,
};
pub use crate::core::data::{BackendSelector, WindowConfig};
pub use crate::core::errors::{BackendError, UnrecognizedButton, WindowError};
pub use crate::core::events::{Event, EventQueue, EventType};
pub use crate::core::gui::LabelCache;
pub use crate::core::input::{Action, ButtonCode, button_name, name_to_button_codes};
pub use crate::core::pacing::{Clock, FramePacer, PaceOutcome, SystemClock};
pub use input::winit::WinitPlatform;
pub use storage::write_ppm;

#[cfg(feature = "gui")]
pub use adapters::egui::{EguiFrame, EguiGui, Panel};
#[cfg(feature = "gui")]
pub use presenters::pixels::{EguiWindow, PixelsBackend, open_window};
