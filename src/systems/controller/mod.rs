mod keyboard;

pub use keyboard::{map_input, map_input_with};
