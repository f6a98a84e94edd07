//! Semantic action IDs for Fuel Jam click targets.

pub const RESTART: u16 = 1;
pub const NEXT_LEVEL: u16 = 2;
pub const PREVIOUS_LEVEL: u16 = 3;
