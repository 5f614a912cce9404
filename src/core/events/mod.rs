pub mod event;
pub mod event_queue;

pub use event::{Event, EventType};
pub use event_queue::EventQueue;
