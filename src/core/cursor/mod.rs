pub mod arbiter;
pub mod cursor_shape;

pub use arbiter::{AppliedCursorState, CursorArbiter, CursorSink, GuiCursor, GuiCursorSignal};
pub use cursor_shape::{CURSOR_DEFAULT, CURSOR_NONE, CursorChoice, CursorRequest, CursorShape};
