//! CLI command implementations

pub mod play;
pub mod render;
pub mod setup;
pub mod simulate;
