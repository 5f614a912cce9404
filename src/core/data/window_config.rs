use crate::core::errors::WindowError;

const DEFAULT_NAME: &str = "Window";
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_POSITION: (i32, i32) = (100, 100);
const DEFAULT_FPS_LIMIT: u32 = 1000;

/// Graphics API the render backend should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendSelector {
    #[default]
    Auto,
    Vulkan,
    Metal,
    Dx12,
    Gl,
}

impl BackendSelector {
    pub const ALL: &'static [Self] = &[Self::Auto, Self::Vulkan, Self::Metal, Self::Dx12, Self::Gl];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Vulkan => "Vulkan",
            Self::Metal => "Metal",
            Self::Dx12 => "DirectX 12",
            Self::Gl => "OpenGL",
        }
    }
}

impl std::fmt::Display for BackendSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Per-window settings captured at construction. Only `width` and `height`
/// change afterwards, once per completed resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub position: (i32, i32),
    pub vsync: bool,
    pub show_window: bool,
    pub fps_limit: u32,
    pub backend: BackendSelector,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            position: DEFAULT_POSITION,
            vsync: false,
            show_window: true,
            fps_limit: DEFAULT_FPS_LIMIT,
            backend: BackendSelector::default(),
        }
    }
}

impl WindowConfig {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = (x, y);
        self
    }

    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    #[must_use]
    pub fn with_show_window(mut self, show_window: bool) -> Self {
        self.show_window = show_window;
        self
    }

    #[must_use]
    pub fn with_fps_limit(mut self, fps_limit: u32) -> Self {
        self.fps_limit = fps_limit;
        self
    }

    #[must_use]
    pub fn with_backend(mut self, backend: BackendSelector) -> Self {
        self.backend = backend;
        self
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        if self.width == 0 || self.height == 0 {
            return Err(WindowError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        if self.fps_limit == 0 {
            return Err(WindowError::InvalidConfig(
                "fps_limit must be greater than zero".to_owned(),
            ));
        }

        Ok(())
    }
}
