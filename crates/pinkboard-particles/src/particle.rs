//! Particle state and the ring-buffer pool that owns it

use crate::curves::ease_out_cubic;
use pinkboard_core::{DrawCommand, Frame, ImageId, Point, Rect};

/// Damping coefficient applied to the launch velocity to get acceleration
pub const DEFAULT_EFFECT: f32 = -0.2;

/// The image every particle is drawn with, square at `width` when full grown
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub image: ImageId,
    pub width: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub acceleration: Point,
    pub age: f32,
}

impl Particle {
    /// Relaunch this particle from `(x, y)` with velocity `(dx, dy)`.
    ///
    /// Acceleration is the velocity scaled by `effect`; a negative effect
    /// slows the particle, then pulls it back the way it came.
    pub fn initialize(&mut self, x: f32, y: f32, dx: f32, dy: f32, effect: f32) {
        self.position = Point::new(x, y);
        self.velocity = Point::new(dx, dy);
        self.acceleration = Point::new(dx * effect, dy * effect);
        self.age = 0.0;
    }

    /// Semi-implicit Euler step. `dt` must be non-negative.
    pub fn advance(&mut self, dt: f32) {
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        self.velocity.x += self.acceleration.x * dt;
        self.velocity.y += self.acceleration.y * dt;
        self.age += dt;
    }

    /// Side length of the drawn sprite: grows with ease-out over the lifetime
    pub fn size(&self, sprite: &Sprite, max_duration: f32) -> f32 {
        sprite.width * ease_out_cubic(self.age / max_duration)
    }

    /// `1 - age / max_duration`; negative once the particle has outlived it
    pub fn opacity(&self, max_duration: f32) -> f32 {
        1.0 - self.age / max_duration
    }

    /// Emit one sprite draw centred on the particle
    pub fn render(&self, frame: &mut Frame, sprite: &Sprite, max_duration: f32) {
        let size = self.size(sprite, max_duration);
        frame.push(DrawCommand::DrawImage {
            image: sprite.image,
            dest: Rect::centered(self.position, size, size),
            alpha: self.opacity(max_duration),
        });
    }
}

/// Fixed-capacity ring buffer of reusable particles.
///
/// Live particles occupy the circular range `[first_active, first_free)`.
/// Storage holds one slot more than `capacity` so a full pool is
/// distinguishable from an empty one by the two cursors alone.
pub struct ParticlePool {
    particles: Vec<Particle>,
    first_active: usize,
    first_free: usize,
    duration: f32,
    effect: f32,
}

impl ParticlePool {
    /// Pool holding up to `capacity` live particles that retire at
    /// `duration` seconds of age.
    pub fn new(capacity: usize, duration: f32) -> Self {
        Self {
            particles: vec![Particle::default(); capacity + 1],
            first_active: 0,
            first_free: 0,
            duration,
            effect: DEFAULT_EFFECT,
        }
    }

    pub fn with_effect(mut self, effect: f32) -> Self {
        self.effect = effect;
        self
    }

    /// Maximum number of live particles
    pub fn capacity(&self) -> usize {
        self.particles.len() - 1
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn effect(&self) -> f32 {
        self.effect
    }

    pub fn first_active(&self) -> usize {
        self.first_active
    }

    pub fn first_free(&self) -> usize {
        self.first_free
    }

    pub fn live_count(&self) -> usize {
        let slots = self.particles.len();
        (self.first_free + slots - self.first_active) % slots
    }

    pub fn is_empty(&self) -> bool {
        self.first_active == self.first_free
    }

    /// Launch a particle in the next free slot. When that fills the buffer
    /// the oldest live particle is dropped to make room.
    pub fn add(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        let slots = self.particles.len();
        self.particles[self.first_free].initialize(x, y, dx, dy, self.effect);
        self.first_free = (self.first_free + 1) % slots;
        if self.first_free == self.first_active {
            self.first_active = (self.first_active + 1) % slots;
        }
    }

    /// Advance every live particle, then retire aged-out ones from the head.
    pub fn update(&mut self, dt: f32) {
        let slots = self.particles.len();
        let mut i = self.first_active;
        while i != self.first_free {
            self.particles[i].advance(dt);
            i = (i + 1) % slots;
        }
        while self.first_active != self.first_free
            && self.particles[self.first_active].age >= self.duration
        {
            self.first_active = (self.first_active + 1) % slots;
        }
    }

    /// Draw live particles oldest first
    pub fn draw(&self, frame: &mut Frame, sprite: &Sprite) {
        for p in self.iter() {
            p.render(frame, sprite, self.duration);
        }
    }

    /// Live particles, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Particle> + '_ {
        let slots = self.particles.len();
        (0..self.live_count()).map(move |i| &self.particles[(self.first_active + i) % slots])
    }

    /// Retire every live particle without touching storage
    pub fn clear(&mut self) {
        self.first_active = self.first_free;
    }
}
