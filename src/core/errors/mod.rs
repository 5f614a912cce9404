pub mod backend;
pub mod input;
pub mod window;

pub use backend::BackendError;
pub use input::UnrecognizedButton;
pub use window::WindowError;
