//! Per-frame arbitration of who owns the native cursor: the host, the
//! embedded GUI, or nobody (hidden).
//!
//! The arbiter is fed last frame's outcome when deciding whether the GUI may
//! touch the cursor during its own update. That one-frame lag is intentional:
//! computing suppression from the current frame makes the cursor flicker
//! between the host shape and the GUI shape.

use log::debug;

use crate::core::cursor::cursor_shape::{CursorChoice, CursorRequest, CursorShape};

/// The cursor the embedded GUI would like to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuiCursor {
    /// GUI wants no cursor at all.
    None,
    /// GUI draws its own cursor in software.
    DrawsOwn,
    /// GUI wants a specific non-default shape (text beam, resize handle, ...).
    Special,
    #[default]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuiCursorSignal {
    pub desired: GuiCursor,
    pub wants_mouse_capture: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppliedCursorState {
    #[default]
    GuiControlled,
    UserShape(CursorShape),
    UserHidden,
}

/// Native cursor operations the arbiter needs.
pub trait CursorSink {
    fn set_cursor_visible(&mut self, visible: bool);

    /// Returns `false` when the platform has no cursor for `shape`.
    fn set_cursor_shape(&mut self, shape: CursorShape) -> bool;
}

#[derive(Debug, Default)]
pub struct CursorArbiter {
    request: CursorRequest,
    applied: AppliedCursorState,
}

impl CursorArbiter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_request(&mut self, request: CursorRequest) {
        self.request = request;
    }

    #[must_use]
    pub fn request(&self) -> CursorRequest {
        self.request
    }

    #[must_use]
    pub fn applied(&self) -> AppliedCursorState {
        self.applied
    }

    /// Whether the GUI must leave the native cursor alone during its next update.
    /// Decided from the previous frame's outcome, before the GUI runs: the host
    /// shape was applied, or the host asked for a hidden cursor. Hiding driven
    /// by the GUI's own signal leaves the GUI free.
    #[must_use]
    pub fn gui_cursor_suppressed(&self) -> bool {
        matches!(self.applied, AppliedCursorState::UserShape(_))
            || self.request.choice == CursorChoice::Hidden
    }

    pub fn arbitrate(
        &mut self,
        gui: GuiCursorSignal,
        sink: &mut impl CursorSink,
    ) -> AppliedCursorState {
        let next = match self.request.choice {
            CursorChoice::Default => AppliedCursorState::GuiControlled,
            CursorChoice::Hidden => AppliedCursorState::UserHidden,
            CursorChoice::Shape(_)
                if matches!(gui.desired, GuiCursor::None | GuiCursor::DrawsOwn) =>
            {
                AppliedCursorState::UserHidden
            }
            CursorChoice::Shape(_)
                if !self.request.force
                    && (gui.desired == GuiCursor::Special || gui.wants_mouse_capture) =>
            {
                AppliedCursorState::GuiControlled
            }
            CursorChoice::Shape(shape) => AppliedCursorState::UserShape(shape),
        };

        self.apply(next, sink);
        next
    }

    fn apply(&mut self, next: AppliedCursorState, sink: &mut impl CursorSink) {
        let previous = self.applied;
        self.applied = next;

        if previous == next {
            return;
        }

        match next {
            AppliedCursorState::UserHidden => sink.set_cursor_visible(false),
            AppliedCursorState::UserShape(shape) => {
                sink.set_cursor_visible(true);
                if !sink.set_cursor_shape(shape) {
                    debug!("cursor shape {shape:?} unavailable, falling back to arrow");
                    sink.set_cursor_shape(CursorShape::Arrow);
                }
            }
            AppliedCursorState::GuiControlled => {
                // The GUI re-applies its own shape; visibility is ours to restore.
                if previous == AppliedCursorState::UserHidden {
                    sink.set_cursor_visible(true);
                }
            }
        }
    }
}
