//! Emitter configuration (parsed from TOML) and per-frame emission

use crate::curves::point_on_heart;
use crate::particle::{ParticlePool, DEFAULT_EFFECT};
use crate::rand::RandomSource;
use pinkboard_core::Point;
use std::f32::consts::PI;

/// Upper bound on `length` accepted from config files
pub const MAX_PARTICLES: usize = 100_000;

/// How the per-frame particle count is derived from `rate * dt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmissionMode {
    /// `floor(rate * dt)` each frame; remainders are dropped
    #[default]
    Floor,
    /// Carry the fractional remainder into the next frame
    Accumulate,
}

/// Configuration parsed from the `[particles]` TOML table
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    /// Pool capacity
    pub length: usize,
    /// Particle lifetime in seconds
    pub duration: f32,
    /// Launch speed in pixels per second
    pub velocity: f32,
    /// Acceleration as a multiple of launch velocity
    pub effect: f32,
    /// Sprite side length in pixels
    pub size: u32,
    pub emission: EmissionMode,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            length: 600,
            duration: 3.5,
            velocity: 20.0,
            effect: DEFAULT_EFFECT,
            size: 30,
            emission: EmissionMode::Floor,
        }
    }
}

impl EmitterConfig {
    /// Parse an EmitterConfig from a TOML table. Missing or mistyped keys
    /// keep their defaults.
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("length") {
            let n = v.as_integer().unwrap_or(config.length as i64).max(0) as usize;
            config.length = n.min(MAX_PARTICLES);
        }
        if let Some(v) = table.get("duration") {
            let d = toml_f32(v, config.duration);
            if d > 0.0 && (config.length as f32 / d).is_finite() {
                config.duration = d;
            } else {
                log::warn!(
                    "particles.duration must be positive with a finite emission rate, keeping {}",
                    config.duration
                );
            }
        }
        if let Some(v) = table.get("velocity") {
            config.velocity = toml_f32(v, config.velocity);
        }
        if let Some(v) = table.get("effect") {
            config.effect = toml_f32(v, config.effect);
        }
        if let Some(v) = table.get("size") {
            match v.as_integer().and_then(|n| u32::try_from(n).ok()).filter(|&n| n > 0) {
                Some(n) => config.size = n,
                None => log::warn!(
                    "particles.size must be a positive 32-bit integer, keeping {}",
                    config.size
                ),
            }
        }
        if let Some(v) = table.get("emission") {
            config.emission = match v.as_str().unwrap_or("floor") {
                "accumulate" => EmissionMode::Accumulate,
                _ => EmissionMode::Floor,
            };
        }

        config
    }

    /// Particles per second that keep the pool roughly saturated
    pub fn emission_rate(&self) -> f32 {
        self.length as f32 / self.duration
    }

    /// Empty pool sized and tuned for this config
    pub fn create_pool(&self) -> ParticlePool {
        ParticlePool::new(self.length, self.duration).with_effect(self.effect)
    }
}

/// Launches particles from random points on the heart outline
pub struct HeartEmitter {
    pub config: EmitterConfig,
    /// Fractional particle carry for `EmissionMode::Accumulate`
    accumulator: f32,
}

impl HeartEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
        }
    }

    pub fn emission_rate(&self) -> f32 {
        self.config.emission_rate()
    }

    /// Number of particles to launch for a frame of `dt` seconds, at most
    /// `length`. Negative or NaN deltas count as zero.
    pub fn emit_count(&mut self, dt: f32) -> usize {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let amount = self.emission_rate() * dt;
        let count = match self.config.emission {
            EmissionMode::Floor => amount.floor() as usize,
            EmissionMode::Accumulate => {
                self.accumulator += amount;
                let whole = self.accumulator.floor();
                self.accumulator = if whole.is_finite() {
                    self.accumulator - whole
                } else {
                    0.0
                };
                whole as usize
            }
        };
        // Launches past the pool size would overwrite each other in the same burst
        count.min(self.config.length)
    }

    /// Launch this frame's particles into `pool` around `center` (surface
    /// coordinates, y down). Returns how many were launched.
    pub fn emit<R: RandomSource>(
        &mut self,
        pool: &mut ParticlePool,
        rng: &mut R,
        dt: f32,
        center: Point,
    ) -> usize {
        let count = self.emit_count(dt).min(pool.capacity());
        for _ in 0..count {
            let pos = point_on_heart(PI - 2.0 * PI * rng.next_f32());
            let mut dir = pos;
            let velocity = dir.set_length(self.config.velocity).flip_y();
            pool.add(center.x + pos.x, center.y - pos.y, velocity.x, velocity.y);
        }
        count
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}
