use std::collections::HashSet;

use crate::core::input::button_code::{Action, ButtonCode};

/// Receives raw button transitions, synchronously, in registration order.
pub trait InputListener {
    fn notify(&mut self, code: ButtonCode, action: Action);
}

impl<F> InputListener for F
where
    F: FnMut(ButtonCode, Action),
{
    #[inline]
    fn notify(&mut self, code: ButtonCode, action: Action) {
        self(code, action);
    }
}

/// Folds native input callbacks into pressed state, cursor position and a
/// scroll accumulator, and fans button transitions out to listeners.
#[derive(Default)]
pub struct InputHandler {
    key_listeners: Vec<Box<dyn InputListener>>,
    mouse_button_listeners: Vec<Box<dyn InputListener>>,
    pressed: HashSet<ButtonCode>,
    last_x: f32,
    last_y: f32,
    scroll_dx: f64,
    scroll_dy: f64,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_key_listener(&mut self, listener: impl InputListener + 'static) {
        self.key_listeners.push(Box::new(listener));
    }

    pub fn add_mouse_button_listener(&mut self, listener: impl InputListener + 'static) {
        self.mouse_button_listeners.push(Box::new(listener));
    }

    pub fn key_callback(&mut self, code: ButtonCode, action: Action) {
        self.record_transition(code, action);
        for listener in &mut self.key_listeners {
            listener.notify(code, action);
        }
    }

    pub fn mouse_button_callback(&mut self, code: ButtonCode, action: Action) {
        self.record_transition(code, action);
        for listener in &mut self.mouse_button_listeners {
            listener.notify(code, action);
        }
    }

    /// Stores the cursor position normalized against the window size, origin top-left.
    pub fn cursor_pos_callback(&mut self, x: f64, y: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.last_x = (x / f64::from(width)) as f32;
        self.last_y = (y / f64::from(height)) as f32;
    }

    pub fn scroll_callback(&mut self, dx: f64, dy: f64) {
        self.scroll_dx += dx;
        self.scroll_dy += dy;
    }

    #[must_use]
    pub fn is_pressed(&self, code: ButtonCode) -> bool {
        self.pressed.contains(&code)
    }

    #[must_use]
    pub fn last_x(&self) -> f32 {
        self.last_x
    }

    #[must_use]
    pub fn last_y(&self) -> f32 {
        self.last_y
    }

    /// Returns the scroll accumulated since the previous call and resets it.
    pub fn take_scroll_delta(&mut self) -> (f64, f64) {
        let delta = (self.scroll_dx, self.scroll_dy);
        self.scroll_dx = 0.0;
        self.scroll_dy = 0.0;
        delta
    }

    fn record_transition(&mut self, code: ButtonCode, action: Action) {
        match action {
            Action::Press | Action::Repeat => {
                self.pressed.insert(code);
            }
            Action::Release => {
                self.pressed.remove(&code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    const W: ButtonCode = ButtonCode::Key(KeyCode::KeyW);

    #[test]
    fn pressed_state_follows_last_transition() {
        let mut input = InputHandler::new();

        input.key_callback(W, Action::Press);
        assert!(input.is_pressed(W));

        input.key_callback(W, Action::Release);
        assert!(!input.is_pressed(W));
    }

    #[test]
    fn redelivered_actions_do_not_toggle() {
        let mut input = InputHandler::new();

        input.key_callback(W, Action::Press);
        input.key_callback(W, Action::Press);
        assert!(input.is_pressed(W));

        input.key_callback(W, Action::Release);
        input.key_callback(W, Action::Release);
        assert!(!input.is_pressed(W));
    }

    #[test]
    fn repeat_keeps_key_pressed() {
        let mut input = InputHandler::new();

        input.key_callback(W, Action::Press);
        input.key_callback(W, Action::Repeat);

        assert!(input.is_pressed(W));
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut input = InputHandler::new();

        let first = Rc::clone(&log);
        input.add_key_listener(move |_: ButtonCode, _: Action| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        input.add_key_listener(move |_: ButtonCode, _: Action| second.borrow_mut().push("second"));

        input.key_callback(W, Action::Press);

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn mouse_listeners_do_not_receive_keys() {
        let hits = Rc::new(RefCell::new(0));
        let mut input = InputHandler::new();
        let counter = Rc::clone(&hits);
        input.add_mouse_button_listener(move |_: ButtonCode, _: Action| *counter.borrow_mut() += 1);

        input.key_callback(W, Action::Press);
        input.mouse_button_callback(ButtonCode::Mouse(MouseButton::Left), Action::Press);

        assert_eq!(*hits.borrow(), 1);
        assert!(input.is_pressed(ButtonCode::Mouse(MouseButton::Left)));
    }

    #[test]
    fn scroll_accumulates_until_taken() {
        let mut input = InputHandler::new();

        input.scroll_callback(1.0, 2.0);
        input.scroll_callback(3.0, -1.0);

        assert_eq!(input.take_scroll_delta(), (4.0, 1.0));
        assert_eq!(input.take_scroll_delta(), (0.0, 0.0));
    }

    #[test]
    fn cursor_position_is_normalized() {
        let mut input = InputHandler::new();

        input.cursor_pos_callback(200.0, 150.0, 800, 600);

        assert!((input.last_x() - 0.25).abs() < f32::EPSILON);
        assert!((input.last_y() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_sized_window_keeps_previous_cursor_position() {
        let mut input = InputHandler::new();
        input.cursor_pos_callback(400.0, 300.0, 800, 600);

        input.cursor_pos_callback(10.0, 10.0, 0, 0);

        assert!((input.last_x() - 0.5).abs() < f32::EPSILON);
    }
}
