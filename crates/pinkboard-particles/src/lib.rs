//! Pinkboard Particles - heart-outline particle system
//!
//! Provides the particle stream that traces the heart:
//! - Heart parametric curve and ease-out cubic sizing
//! - Ring-buffer particle pool with fixed capacity and oldest-first overwrite
//! - Semi-implicit Euler integration with velocity-proportional damping
//! - Rate-controlled emission from random points on the curve

pub mod curves;
pub mod emitter;
pub mod particle;
pub mod rand;

pub use curves::{ease_out_cubic, heart_outline, point_on_heart};
pub use emitter::{EmissionMode, EmitterConfig, HeartEmitter};
pub use particle::{Particle, ParticlePool, Sprite};
pub use rand::{ParticleRng, RandomSource, ScriptedRng};
