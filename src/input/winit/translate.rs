//! Conversions between winit events/cursors and the window runtime's own types.

use winit::event::{MouseScrollDelta, WindowEvent};
use winit::window::CursorIcon;

use crate::controllers::window::ports::NativeEvent;
use crate::core::cursor::CursorShape;
use crate::core::input::{Action, ButtonCode};

/// Pixel-precise scroll (touchpads) is reported in lines of this many pixels.
pub const PIXELS_PER_SCROLL_LINE: f64 = 50.0;

/// Reduces a winit window event to the subset the window runtime reacts to.
#[must_use]
pub fn translate_window_event(event: &WindowEvent) -> Option<NativeEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => Some(NativeEvent::Key {
            code: ButtonCode::from(event.physical_key),
            action: Action::from_element_state(event.state, event.repeat),
        }),
        WindowEvent::MouseInput { state, button, .. } => Some(NativeEvent::MouseButton {
            code: ButtonCode::from(*button),
            action: Action::from_element_state(*state, false),
        }),
        WindowEvent::CursorMoved { position, .. } => Some(NativeEvent::CursorMoved {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy) = scroll_lines(*delta);
            Some(NativeEvent::Scroll { dx, dy })
        }
        WindowEvent::Resized(size) => Some(NativeEvent::FramebufferResized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}

#[must_use]
pub fn scroll_lines(delta: MouseScrollDelta) -> (f64, f64) {
    match delta {
        MouseScrollDelta::LineDelta(dx, dy) => (f64::from(dx), f64::from(dy)),
        MouseScrollDelta::PixelDelta(position) => (
            position.x / PIXELS_PER_SCROLL_LINE,
            position.y / PIXELS_PER_SCROLL_LINE,
        ),
    }
}

#[must_use]
pub fn cursor_icon(shape: CursorShape) -> CursorIcon {
    match shape {
        CursorShape::Arrow => CursorIcon::Default,
        CursorShape::IBeam => CursorIcon::Text,
        CursorShape::Crosshair => CursorIcon::Crosshair,
        CursorShape::Hand => CursorIcon::Pointer,
        CursorShape::ResizeEW => CursorIcon::EwResize,
        CursorShape::ResizeNS => CursorIcon::NsResize,
        CursorShape::ResizeNWSE => CursorIcon::NwseResize,
        CursorShape::ResizeNESW => CursorIcon::NeswResize,
        CursorShape::ResizeAll => CursorIcon::Move,
        CursorShape::NotAllowed => CursorIcon::NotAllowed,
    }
}
