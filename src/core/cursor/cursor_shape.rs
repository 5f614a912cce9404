use crate::core::errors::WindowError;

pub const CURSOR_DEFAULT: i32 = -2;
pub const CURSOR_NONE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    #[default]
    Arrow,
    IBeam,
    Crosshair,
    Hand,
    ResizeEW,
    ResizeNS,
    ResizeNWSE,
    ResizeNESW,
    ResizeAll,
    NotAllowed,
}

impl CursorShape {
    pub const ALL: [Self; 10] = [
        Self::Arrow,
        Self::IBeam,
        Self::Crosshair,
        Self::Hand,
        Self::ResizeEW,
        Self::ResizeNS,
        Self::ResizeNWSE,
        Self::ResizeNESW,
        Self::ResizeAll,
        Self::NotAllowed,
    ];

    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    #[must_use]
    pub fn index(self) -> i32 {
        Self::ALL
            .iter()
            .position(|&shape| shape == self)
            .map_or(0, |i| i as i32)
    }
}

/// What the host asked for: leave the cursor to the GUI, hide it, or show a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorChoice {
    #[default]
    Default,
    Hidden,
    Shape(CursorShape),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorRequest {
    pub choice: CursorChoice,
    pub force: bool,
}

impl CursorRequest {
    /// Builds a request from the integer convention: -2 default, -1 hidden, 0-9 shapes.
    pub fn from_index(index: i32, force: bool) -> Result<Self, WindowError> {
        let choice = match index {
            CURSOR_DEFAULT => CursorChoice::Default,
            CURSOR_NONE => CursorChoice::Hidden,
            _ => CursorChoice::Shape(
                CursorShape::from_index(index).ok_or(WindowError::InvalidCursorShape(index))?,
            ),
        };

        Ok(Self { choice, force })
    }
}
