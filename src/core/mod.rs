pub mod cursor;
pub mod data;
pub mod errors;
pub mod events;
pub mod gui;
pub mod input;
pub mod pacing;
