use std::time::Duration;

use log::{debug, info};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as NativeWindow, WindowBuilder};

use crate::controllers::window::ports::{PlatformEvent, PlatformPort};
use crate::core::cursor::{CursorShape, CursorSink};
use crate::core::data::WindowConfig;
use crate::core::errors::WindowError;
use crate::input::winit::translate::{cursor_icon, translate_window_event};

/// A native window plus the event loop that feeds it, pumped on demand
/// instead of handing control to `EventLoop::run`.
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    window: &'static NativeWindow,
    close_requested: bool,
}

impl WinitPlatform {
    pub fn new(config: &WindowConfig) -> Result<Self, WindowError> {
        let event_loop = EventLoop::new()?;

        let (x, y) = config.position;
        // Leaked so renderers and the GUI can borrow it for the program's lifetime.
        let window: &'static NativeWindow = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(config.name.as_str())
                .with_inner_size(PhysicalSize::new(config.width, config.height))
                .with_position(PhysicalPosition::new(x, y))
                .with_visible(config.show_window)
                .build(&event_loop)?,
        ));

        info!(
            "Opened window \"{}\" at {}x{}{}",
            config.name,
            config.width,
            config.height,
            if config.show_window { "" } else { " (hidden)" }
        );

        Ok(Self {
            event_loop,
            window,
            close_requested: false,
        })
    }

    #[must_use]
    pub fn window(&self) -> &'static NativeWindow {
        self.window
    }

    #[must_use]
    pub fn event_loop(&self) -> &EventLoop<()> {
        &self.event_loop
    }

    fn pump(&mut self, timeout: Option<Duration>) -> Vec<PlatformEvent<WindowEvent>> {
        let window_id = self.window.id();
        let mut collected = Vec::new();
        let mut close_requested = false;

        let status = self.event_loop.pump_events(timeout, |event, _| {
            if let Event::WindowEvent { window_id: id, event } = event {
                if id != window_id {
                    return;
                }
                if matches!(event, WindowEvent::CloseRequested) {
                    close_requested = true;
                }
                collected.push(PlatformEvent {
                    native: translate_window_event(&event),
                    raw: Some(event),
                });
            }
        });

        if close_requested {
            debug!("close requested by the platform");
            self.close_requested = true;
        }
        if let PumpStatus::Exit(code) = status {
            debug!("event loop exited with code {code}");
            self.close_requested = true;
        }

        collected
    }
}

impl CursorSink for WinitPlatform {
    fn set_cursor_visible(&mut self, visible: bool) {
        self.window.set_cursor_visible(visible);
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) -> bool {
        self.window.set_cursor_icon(cursor_icon(shape));
        true
    }
}

impl PlatformPort for WinitPlatform {
    type RawEvent = WindowEvent;

    fn poll_events(&mut self) -> Vec<PlatformEvent<WindowEvent>> {
        self.pump(Some(Duration::ZERO))
    }

    fn wait_events(&mut self) -> Vec<PlatformEvent<WindowEvent>> {
        self.pump(None)
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }

    fn set_close_requested(&mut self, value: bool) {
        self.close_requested = value;
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}
