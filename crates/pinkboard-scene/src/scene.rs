//! The per-frame scene: photo, particle stream, floating text

use crate::clock::FrameClock;
use crate::compositor::HeartPhoto;
use crate::config::SceneConfig;
use crate::text::FlyingTexts;
use pinkboard_core::{Color, DrawCommand, Frame, ImageId};
use pinkboard_particles::{HeartEmitter, ParticlePool, RandomSource, Sprite};
use serde::Serialize;

/// Counters reported after each step
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SceneStats {
    pub frame: u64,
    pub live_particles: usize,
    pub emitted: usize,
    pub texts: usize,
}

/// Everything drawn on the board. Owns all cross-frame state.
pub struct HeartScene {
    pool: ParticlePool,
    emitter: HeartEmitter,
    texts: FlyingTexts,
    photo: HeartPhoto,
    sprite: Sprite,
    clock: FrameClock,
    width: u32,
    height: u32,
    background: Color,
    stats: SceneStats,
}

impl HeartScene {
    /// Build the scene. `sprite` must already be registered with whatever
    /// backend will execute the frames.
    pub fn new(config: SceneConfig, sprite: Sprite) -> Self {
        let pool = config.particles.create_pool();
        log::info!(
            "Heart scene {}x{}: {} particles, {:.1}s lifetime, {:.1}/s",
            config.surface.width,
            config.surface.height,
            pool.capacity(),
            pool.duration(),
            config.particles.emission_rate()
        );
        Self {
            pool,
            emitter: HeartEmitter::new(config.particles),
            texts: FlyingTexts::new(config.text),
            photo: HeartPhoto::new(config.photo),
            sprite,
            clock: FrameClock::new(),
            width: config.surface.width,
            height: config.surface.height,
            background: config.surface.background,
            stats: SceneStats::default(),
        }
    }

    /// Surface size changed. Particle state is left untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Photo finished loading; composite it from the next frame on
    pub fn set_photo(&mut self, image: ImageId) {
        self.photo.mark_ready(image);
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn texts(&self) -> &FlyingTexts {
        &self.texts
    }

    pub fn stats(&self) -> SceneStats {
        self.stats
    }

    /// Advance by `dt` seconds and return the frame to paint.
    ///
    /// Order: clear, photo, emission, particle update, particle draw, text
    /// spawn roll, text update and draw.
    pub fn step<R: RandomSource>(&mut self, dt: f64, rng: &mut R) -> Frame {
        let dt = if dt.is_finite() { dt.max(0.0) as f32 } else { 0.0 };
        let mut frame = Frame::new(self.width, self.height);
        frame.push(DrawCommand::Clear(self.background));

        self.photo.draw(&mut frame);

        let emitted = self.emitter.emit(&mut self.pool, rng, dt, frame.center());
        self.pool.update(dt);
        self.pool.draw(&mut frame, &self.sprite);

        self.texts.maybe_spawn(rng, self.width, self.height);
        self.texts.update_and_draw(&mut frame);

        self.stats = SceneStats {
            frame: self.stats.frame + 1,
            live_particles: self.pool.live_count(),
            emitted: self.stats.emitted + emitted,
            texts: self.texts.len(),
        };
        frame
    }

    /// Step using the wall clock (the first call steps by zero)
    pub fn tick<R: RandomSource>(&mut self, rng: &mut R) -> Frame {
        let dt = self.clock.tick();
        self.step(dt, rng)
    }

    /// Step to an externally supplied timestamp in seconds
    pub fn tick_at<R: RandomSource>(&mut self, now: f64, rng: &mut R) -> Frame {
        let dt = self.clock.tick_at(now);
        self.step(dt, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinkboard_particles::{ParticleRng, ScriptedRng};

    const SPRITE: ImageId = ImageId(1);

    fn scene() -> HeartScene {
        let sprite = Sprite {
            image: SPRITE,
            width: 30.0,
        };
        HeartScene::new(SceneConfig::default(), sprite)
    }

    #[test]
    fn first_tick_emits_nothing() {
        let mut scene = scene();
        let mut rng = ParticleRng::new(1);
        let frame = scene.tick_at(100.0, &mut rng);
        assert_eq!(scene.pool().live_count(), 0);
        assert_eq!(frame.count_images(SPRITE), 0);
        assert!(matches!(frame.commands[0], DrawCommand::Clear(_)));
    }

    #[test]
    fn step_draws_every_live_particle() {
        let mut scene = scene();
        let mut rng = ParticleRng::new(5);
        let frame = scene.step(0.1, &mut rng);
        assert_eq!(scene.pool().live_count(), 17);
        assert_eq!(frame.count_images(SPRITE), 17);
        assert_eq!(scene.stats().emitted, 17);
    }

    #[test]
    fn photo_appears_once_ready() {
        let mut scene = scene();
        let mut rng = ScriptedRng::constant(0.9);
        let photo = ImageId(2);
        let before = scene.step(0.0, &mut rng);
        assert_eq!(before.count_images(photo), 0);
        scene.set_photo(photo);
        let after = scene.step(0.0, &mut rng);
        assert_eq!(after.count_images(photo), 1);
        // Photo sits beneath the particles
        assert!(matches!(after.commands[1], DrawCommand::Save));
    }

    #[test]
    fn resize_recentres_new_particles_only() {
        let mut scene = scene();
        let mut rng = ScriptedRng::constant(0.5);
        scene.step(1.0 / 60.0, &mut rng);
        scene.resize(200, 200);
        let frame = scene.step(1.0 / 60.0, &mut rng);
        assert_eq!((frame.width, frame.height), (200, 200));
        let xs: Vec<f32> = scene.pool().iter().map(|p| p.position.x).collect();
        assert!((xs[0] - 640.0).abs() < 1.0);
        assert!((xs[xs.len() - 1] - 100.0).abs() < 1.0);
    }

    #[test]
    fn negative_dt_is_treated_as_zero() {
        let mut scene = scene();
        let mut rng = ParticleRng::new(2);
        scene.step(-5.0, &mut rng);
        assert_eq!(scene.pool().live_count(), 0);
        scene.step(f64::NAN, &mut rng);
        assert_eq!(scene.pool().live_count(), 0);
    }
}
