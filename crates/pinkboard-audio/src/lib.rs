//! Pinkboard Audio - background music with a single play/pause toggle
//!
//! - `MusicToggle` - two-state toggle that rolls back when playback is rejected
//! - `Playback` - the seam between the toggle and an audio backend
//! - `MusicPlayer` - Kira-backed looping track, silent when no device exists
//! - `MusicConfig` - the `[audio]` section of the config file

pub mod config;
pub mod engine;
pub mod toggle;

pub use config::MusicConfig;
pub use engine::MusicPlayer;
pub use toggle::{MusicToggle, Playback};
