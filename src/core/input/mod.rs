pub mod button_code;
pub mod input_handler;
pub mod key_names;

pub use button_code::{Action, ButtonCode};
pub use input_handler::{InputHandler, InputListener};
pub use key_names::{button_code_to_name, button_name, name_to_button_codes};
