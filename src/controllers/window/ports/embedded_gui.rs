use crate::core::cursor::GuiCursor;

pub trait EmbeddedGuiPort {
    type RawEvent;
    type Frame;

    fn on_raw_event(&mut self, event: &Self::RawEvent);

    /// Closes the widget frame opened by `prepare_for_next_frame` and returns its paint output.
    fn end_frame(&mut self) -> Self::Frame;

    fn desired_cursor(&self) -> GuiCursor;
    fn wants_mouse_capture(&self) -> bool;
    fn wants_keyboard_capture(&self) -> bool;

    /// While set, the GUI must not change the native cursor.
    fn set_cursor_changes_suppressed(&mut self, suppressed: bool);

    /// The host stopped driving the native cursor. The GUI must write its
    /// cursor on its next unsuppressed frame even if the shape is unchanged.
    fn reclaim_cursor(&mut self);

    fn prepare_for_next_frame(&mut self);
}
