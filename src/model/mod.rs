mod match_event;
mod standings;

pub use match_event::*;
pub use standings::*;
