use egui::{Context, CursorIcon, RichText};
use egui_winit::State as EguiWinitState;
use log::trace;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::{CursorIcon as NativeCursorIcon, Window as NativeWindow};

use crate::adapters::egui::frame::EguiFrame;
use crate::adapters::egui::widgets::Panel;
use crate::controllers::window::ports::EmbeddedGuiPort;
use crate::core::cursor::GuiCursor;
use crate::core::gui::LabelCache;

pub(crate) type WidgetCache = LabelCache<Vec<RichText>>;

/// How egui's requested cursor icon reads to the cursor arbiter.
#[must_use]
pub fn gui_cursor(icon: CursorIcon) -> GuiCursor {
    match icon {
        CursorIcon::None => GuiCursor::None,
        CursorIcon::Default => GuiCursor::Default,
        _ => GuiCursor::Special,
    }
}

/// Native cursor for an egui icon; `None` means hide the cursor.
#[must_use]
pub fn native_cursor_icon(icon: CursorIcon) -> Option<NativeCursorIcon> {
    let native = match icon {
        CursorIcon::None => return None,
        CursorIcon::Default => NativeCursorIcon::Default,
        CursorIcon::ContextMenu => NativeCursorIcon::ContextMenu,
        CursorIcon::Help => NativeCursorIcon::Help,
        CursorIcon::PointingHand => NativeCursorIcon::Pointer,
        CursorIcon::Progress => NativeCursorIcon::Progress,
        CursorIcon::Wait => NativeCursorIcon::Wait,
        CursorIcon::Cell => NativeCursorIcon::Cell,
        CursorIcon::Crosshair => NativeCursorIcon::Crosshair,
        CursorIcon::Text => NativeCursorIcon::Text,
        CursorIcon::VerticalText => NativeCursorIcon::VerticalText,
        CursorIcon::Alias => NativeCursorIcon::Alias,
        CursorIcon::Copy => NativeCursorIcon::Copy,
        CursorIcon::Move => NativeCursorIcon::Move,
        CursorIcon::NoDrop => NativeCursorIcon::NoDrop,
        CursorIcon::NotAllowed => NativeCursorIcon::NotAllowed,
        CursorIcon::Grab => NativeCursorIcon::Grab,
        CursorIcon::Grabbing => NativeCursorIcon::Grabbing,
        CursorIcon::AllScroll => NativeCursorIcon::AllScroll,
        CursorIcon::ResizeHorizontal => NativeCursorIcon::EwResize,
        CursorIcon::ResizeNeSw => NativeCursorIcon::NeswResize,
        CursorIcon::ResizeNwSe => NativeCursorIcon::NwseResize,
        CursorIcon::ResizeVertical => NativeCursorIcon::NsResize,
        CursorIcon::ResizeEast => NativeCursorIcon::EResize,
        CursorIcon::ResizeSouthEast => NativeCursorIcon::SeResize,
        CursorIcon::ResizeSouth => NativeCursorIcon::SResize,
        CursorIcon::ResizeSouthWest => NativeCursorIcon::SwResize,
        CursorIcon::ResizeWest => NativeCursorIcon::WResize,
        CursorIcon::ResizeNorthWest => NativeCursorIcon::NwResize,
        CursorIcon::ResizeNorth => NativeCursorIcon::NResize,
        CursorIcon::ResizeNorthEast => NativeCursorIcon::NeResize,
        CursorIcon::ResizeColumn => NativeCursorIcon::ColResize,
        CursorIcon::ResizeRow => NativeCursorIcon::RowResize,
        CursorIcon::ZoomIn => NativeCursorIcon::ZoomIn,
        CursorIcon::ZoomOut => NativeCursorIcon::ZoomOut,
    };
    Some(native)
}

/// Tracks the last icon handed to egui-winit so suppressed frames can
/// repeat it; egui-winit skips cursor writes when the icon is unchanged.
///
/// After the host hands the cursor back, that skip would leave the host's
/// cursor on screen, so the first unsuppressed frame writes it directly.
#[derive(Debug, Clone, Copy)]
pub struct CursorForwarding {
    last_forwarded: CursorIcon,
    reclaim_pending: bool,
}

impl Default for CursorForwarding {
    fn default() -> Self {
        Self {
            last_forwarded: CursorIcon::Default,
            reclaim_pending: false,
        }
    }
}

impl CursorForwarding {
    pub fn forward(&mut self, requested: CursorIcon, suppressed: bool) -> CursorIcon {
        if !suppressed {
            self.last_forwarded = requested;
        }
        self.last_forwarded
    }

    pub fn reclaim(&mut self) {
        self.reclaim_pending = true;
    }

    /// True once, on the first unsuppressed frame after `reclaim`.
    pub fn take_reclaim(&mut self, suppressed: bool) -> bool {
        if suppressed || !self.reclaim_pending {
            return false;
        }
        self.reclaim_pending = false;
        true
    }
}

/// egui embedded in a winit window.
pub struct EguiGui {
    window: &'static NativeWindow,
    ctx: Context,
    state: EguiWinitState,
    cache: WidgetCache,
    cursor: CursorForwarding,
    desired: GuiCursor,
    suppressed: bool,
    frame_open: bool,
}

impl EguiGui {
    pub fn new(window: &'static NativeWindow, event_loop: &EventLoop<()>) -> Self {
        let ctx = Context::default();
        let state = EguiWinitState::new(
            ctx.clone(),
            ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            ctx,
            state,
            cache: WidgetCache::new(),
            cursor: CursorForwarding::default(),
            desired: GuiCursor::Default,
            suppressed: false,
            frame_open: false,
        }
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Declares a floating sub-window for this frame. Position and size are
    /// fractions of the window's extent.
    pub fn sub_window<R>(
        &mut self,
        name: &str,
        (x, y): (f32, f32),
        (width, height): (f32, f32),
        add_contents: impl FnOnce(&mut Panel<'_>) -> R,
    ) -> Option<R> {
        self.ensure_frame_open();

        let screen = self.ctx.screen_rect().size();
        let cache = &mut self.cache;

        egui::Window::new(name)
            .default_pos([x * screen.x, y * screen.y])
            .default_size([width * screen.x, height * screen.y])
            .show(&self.ctx, |ui| add_contents(&mut Panel::new(ui, cache)))
            .and_then(|response| response.inner)
    }

    fn ensure_frame_open(&mut self) {
        if !self.frame_open {
            let input = self.state.take_egui_input(self.window);
            self.ctx.begin_frame(input);
            self.frame_open = true;
        }
    }
}

impl EmbeddedGuiPort for EguiGui {
    type RawEvent = WindowEvent;
    type Frame = EguiFrame;

    fn on_raw_event(&mut self, event: &WindowEvent) {
        // Consumption is ignored: the runtime still sees every event.
        let _ = self.state.on_window_event(self.window, event);
    }

    fn end_frame(&mut self) -> EguiFrame {
        self.ensure_frame_open();
        let mut output = self.ctx.end_frame();
        self.frame_open = false;

        let requested = output.platform_output.cursor_icon;
        self.desired = gui_cursor(requested);
        output.platform_output.cursor_icon = self.cursor.forward(requested, self.suppressed);
        self.state
            .handle_platform_output(self.window, output.platform_output);
        if self.cursor.take_reclaim(self.suppressed) {
            trace!("GUI reclaims the cursor: {requested:?}");
            match native_cursor_icon(requested) {
                Some(icon) => {
                    self.window.set_cursor_visible(true);
                    self.window.set_cursor_icon(icon);
                }
                None => self.window.set_cursor_visible(false),
            }
        }

        EguiFrame {
            primitives: self.ctx.tessellate(output.shapes, output.pixels_per_point),
            textures_delta: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        }
    }

    fn desired_cursor(&self) -> GuiCursor {
        self.desired
    }

    fn wants_mouse_capture(&self) -> bool {
        self.ctx.wants_pointer_input()
    }

    fn wants_keyboard_capture(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }

    fn set_cursor_changes_suppressed(&mut self, suppressed: bool) {
        if suppressed != self.suppressed {
            trace!("GUI cursor changes suppressed: {suppressed}");
        }
        self.suppressed = suppressed;
    }

    fn reclaim_cursor(&mut self) {
        self.cursor.reclaim();
    }

    fn prepare_for_next_frame(&mut self) {
        if self.frame_open {
            // Nothing drew the open frame; close it so egui's pass bookkeeping stays balanced.
            let _ = self.ctx.end_frame();
            self.frame_open = false;
        }
        self.cache.end_frame();
        self.ensure_frame_open();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gui_cursor_classification() {
        assert_eq!(gui_cursor(CursorIcon::None), GuiCursor::None);
        assert_eq!(gui_cursor(CursorIcon::Default), GuiCursor::Default);
        assert_eq!(gui_cursor(CursorIcon::Text), GuiCursor::Special);
        assert_eq!(gui_cursor(CursorIcon::ResizeHorizontal), GuiCursor::Special);
    }

    #[test]
    fn test_forwarding_follows_gui_when_not_suppressed() {
        let mut forwarding = CursorForwarding::default();

        assert_eq!(forwarding.forward(CursorIcon::Text, false), CursorIcon::Text);
        assert_eq!(forwarding.forward(CursorIcon::Grab, false), CursorIcon::Grab);
    }

    #[test]
    fn test_forwarding_repeats_last_icon_while_suppressed() {
        let mut forwarding = CursorForwarding::default();
        forwarding.forward(CursorIcon::Text, false);

        assert_eq!(forwarding.forward(CursorIcon::Grab, true), CursorIcon::Text);
        assert_eq!(forwarding.forward(CursorIcon::None, true), CursorIcon::Text);
        assert_eq!(forwarding.forward(CursorIcon::Default, false), CursorIcon::Default);
    }

    #[test]
    fn test_reclaim_waits_for_first_unsuppressed_frame() {
        let mut forwarding = CursorForwarding::default();
        assert!(!forwarding.take_reclaim(false));

        forwarding.reclaim();

        assert!(!forwarding.take_reclaim(true));
        assert!(forwarding.take_reclaim(false));
        assert!(!forwarding.take_reclaim(false));
    }

    #[test]
    fn test_native_cursor_icons() {
        assert_eq!(native_cursor_icon(CursorIcon::None), None);
        assert_eq!(
            native_cursor_icon(CursorIcon::Default),
            Some(NativeCursorIcon::Default)
        );
        assert_eq!(
            native_cursor_icon(CursorIcon::Text),
            Some(NativeCursorIcon::Text)
        );
        assert_eq!(
            native_cursor_icon(CursorIcon::ResizeHorizontal),
            Some(NativeCursorIcon::EwResize)
        );
    }
}
