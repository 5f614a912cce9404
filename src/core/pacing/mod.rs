pub mod clock;
pub mod fps_counter;
pub mod frame_pacer;

pub use clock::{Clock, SystemClock};
pub use fps_counter::FpsCounter;
pub use frame_pacer::{FramePacer, PaceOutcome};
