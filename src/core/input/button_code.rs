use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, NativeKeyCode, PhysicalKey};

/// A raw, platform-level button identity: a keyboard key or a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonCode {
    Key(KeyCode),
    Mouse(MouseButton),
    Native(NativeKeyCode),
}

impl From<PhysicalKey> for ButtonCode {
    fn from(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(code) => Self::Key(code),
            PhysicalKey::Unidentified(native) => Self::Native(native),
        }
    }
}

impl From<MouseButton> for ButtonCode {
    fn from(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Press,
    Release,
    Repeat,
}

impl Action {
    #[must_use]
    pub fn from_element_state(state: ElementState, repeat: bool) -> Self {
        match state {
            ElementState::Pressed if repeat => Self::Repeat,
            ElementState::Pressed => Self::Press,
            ElementState::Released => Self::Release,
        }
    }
}
