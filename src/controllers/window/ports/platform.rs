use crate::core::cursor::CursorSink;
use crate::core::input::{Action, ButtonCode};

/// Platform input, reduced to what the window runtime consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeEvent {
    Key { code: ButtonCode, action: Action },
    MouseButton { code: ButtonCode, action: Action },
    /// Cursor position in physical pixels, origin top-left.
    CursorMoved { x: f64, y: f64 },
    Scroll { dx: f64, dy: f64 },
    FramebufferResized { width: u32, height: u32 },
}

/// One polled platform event: the translated form (if the runtime cares about
/// it) and the raw form (forwarded untouched to the embedded GUI).
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformEvent<R> {
    pub native: Option<NativeEvent>,
    pub raw: Option<R>,
}

impl<R> PlatformEvent<R> {
    pub fn native(event: NativeEvent) -> Self {
        Self {
            native: Some(event),
            raw: None,
        }
    }
}

pub trait PlatformPort: CursorSink {
    type RawEvent;

    /// Drains pending native events without blocking.
    fn poll_events(&mut self) -> Vec<PlatformEvent<Self::RawEvent>>;

    /// Blocks until at least one native event arrives.
    fn wait_events(&mut self) -> Vec<PlatformEvent<Self::RawEvent>>;

    fn framebuffer_size(&self) -> (u32, u32);
    fn close_requested(&self) -> bool;
    fn set_close_requested(&mut self, value: bool);
    fn set_title(&mut self, title: &str);
}
