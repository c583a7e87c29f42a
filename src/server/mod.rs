mod replay;
mod structures;

pub use replay::run_replay;
pub use structures::{Frame, FrameReport};
