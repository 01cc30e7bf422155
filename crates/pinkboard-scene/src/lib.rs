//! Pinkboard Scene - the per-frame driver
//!
//! Ties the particle system to everything else drawn each frame:
//! - `FrameClock` - wall-clock or synthetic frame deltas
//! - `FlyingTexts` - short-lived drifting messages
//! - `HeartPhoto` - a photo clipped to the heart outline
//! - `HeartScene` - `step(dt) -> Frame`, called once per display refresh

pub mod clock;
pub mod compositor;
pub mod config;
pub mod scene;
pub mod sprite;
pub mod text;

pub use clock::FrameClock;
pub use compositor::HeartPhoto;
pub use config::{PhotoConfig, SceneConfig, SurfaceConfig, TextConfig};
pub use scene::{HeartScene, SceneStats};
pub use sprite::heart_sprite_frame;
pub use text::{FlyingText, FlyingTexts};
