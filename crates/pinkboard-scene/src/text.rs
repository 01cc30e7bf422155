//! Floating text messages that drift and fade out

use crate::config::TextConfig;
use pinkboard_core::{DrawCommand, Frame, Point, TextAlign, TextBaseline, TextStyle};
use pinkboard_particles::RandomSource;

/// One drifting message. Position and velocity are in pixels and pixels per
/// tick.
#[derive(Clone, Debug, PartialEq)]
pub struct FlyingText {
    pub message: String,
    pub position: Point,
    pub velocity: Point,
    pub remaining_life: u32,
}

/// Bounded list of active messages
pub struct FlyingTexts {
    config: TextConfig,
    style: TextStyle,
    texts: Vec<FlyingText>,
}

impl FlyingTexts {
    pub fn new(config: TextConfig) -> Self {
        let style = TextStyle {
            size: config.font_size,
            family: config.font_family.clone(),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        };
        Self {
            config,
            style,
            texts: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlyingText> {
        self.texts.iter()
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// Alpha for a message with `remaining` ticks left
    pub fn alpha(&self, remaining: u32) -> f32 {
        (remaining as f32 / self.config.fade_ticks as f32).clamp(0.0, 1.0)
    }

    /// Roll the per-frame spawn chance. Returns true if a message spawned.
    pub fn maybe_spawn<R: RandomSource>(&mut self, rng: &mut R, width: u32, height: u32) -> bool {
        if !rng.chance(self.config.spawn_chance) || self.texts.len() >= self.config.max_texts {
            return false;
        }
        self.spawn(rng, width, height)
    }

    /// Spawn a random message anywhere on a `width × height` surface,
    /// ignoring the spawn chance but not the concurrency cap.
    pub fn spawn<R: RandomSource>(&mut self, rng: &mut R, width: u32, height: u32) -> bool {
        if self.config.messages.is_empty() || self.texts.len() >= self.config.max_texts {
            return false;
        }
        let message = self.config.messages[rng.index(self.config.messages.len())].clone();
        let position = Point::new(
            rng.next_f32() * width as f32,
            rng.next_f32() * height as f32,
        );
        let velocity = Point::new(
            (rng.next_f32() - 0.5) * self.config.speed,
            (rng.next_f32() - 0.5) * self.config.speed,
        );
        let span = self.config.max_life.saturating_sub(self.config.min_life);
        let life = self.config.min_life + (rng.next_f32() * span as f32) as u32;
        self.push(FlyingText {
            message,
            position,
            velocity,
            remaining_life: life.max(1),
        });
        true
    }

    /// Add a message as-is. Ignored once the cap is reached.
    pub fn push(&mut self, text: FlyingText) {
        if self.texts.len() < self.config.max_texts {
            self.texts.push(text);
        }
    }

    /// One tick: drift, age, draw, and drop expired messages.
    ///
    /// A message spawned with life `L` is drawn on its `L`-th tick (at zero
    /// alpha) and removed at the end of that tick.
    pub fn update_and_draw(&mut self, frame: &mut Frame) {
        // Back to front so removal never skips an entry
        for i in (0..self.texts.len()).rev() {
            let text = &mut self.texts[i];
            text.position = text.position + text.velocity;
            text.remaining_life = text.remaining_life.saturating_sub(1);
            let remaining = text.remaining_life;
            let alpha = self.alpha(remaining);

            let text = &self.texts[i];
            frame.push(DrawCommand::FillText {
                text: text.message.clone(),
                position: text.position,
                color: self.config.color.with_alpha(self.config.color.a * alpha),
                style: self.style.clone(),
            });

            if remaining == 0 {
                self.texts.remove(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinkboard_particles::{ParticleRng, ScriptedRng};

    fn texts(max: usize) -> FlyingTexts {
        FlyingTexts::new(TextConfig {
            max_texts: max,
            ..Default::default()
        })
    }

    fn entry(life: u32) -> FlyingText {
        FlyingText {
            message: "hi".into(),
            position: Point::new(10.0, 10.0),
            velocity: Point::new(1.0, -0.5),
            remaining_life: life,
        }
    }

    fn alpha_of(frame: &Frame) -> Vec<f32> {
        frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { color, .. } => Some(color.a),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn removed_after_exactly_life_ticks() {
        let mut list = texts(15);
        list.push(entry(7));
        for tick in 1..=7 {
            assert_eq!(list.len(), 1, "gone early at tick {tick}");
            let mut frame = Frame::new(100, 100);
            list.update_and_draw(&mut frame);
            assert_eq!(frame.count_texts(), 1);
        }
        assert!(list.is_empty());
    }

    #[test]
    fn alpha_never_increases() {
        let mut list = texts(15);
        list.push(entry(450));
        let mut prev = f32::INFINITY;
        while !list.is_empty() {
            let mut frame = Frame::new(100, 100);
            list.update_and_draw(&mut frame);
            let a = alpha_of(&frame)[0];
            assert!(a <= prev);
            assert!((0.0..=1.0).contains(&a));
            prev = a;
        }
        assert_eq!(prev, 0.0);
    }

    #[test]
    fn alpha_is_full_until_fade_window() {
        let list = texts(15);
        assert_eq!(list.alpha(599), 1.0);
        assert_eq!(list.alpha(300), 1.0);
        assert!((list.alpha(150) - 0.5).abs() < 1e-6);
        assert_eq!(list.alpha(0), 0.0);
    }

    #[test]
    fn drifts_by_velocity_each_tick() {
        let mut list = texts(15);
        list.push(entry(10));
        let mut frame = Frame::new(100, 100);
        list.update_and_draw(&mut frame);
        list.update_and_draw(&mut frame);
        let t = list.iter().next().unwrap();
        assert_eq!(t.position, Point::new(12.0, 9.0));
        assert_eq!(t.remaining_life, 8);
    }

    #[test]
    fn removal_mid_list_keeps_others() {
        let mut list = texts(15);
        list.push(entry(5));
        list.push(entry(1));
        list.push(entry(3));
        let mut frame = Frame::new(100, 100);
        list.update_and_draw(&mut frame);
        // Every entry processed exactly once
        assert_eq!(frame.count_texts(), 3);
        let lives: Vec<u32> = list.iter().map(|t| t.remaining_life).collect();
        assert_eq!(lives, vec![4, 2]);
    }

    #[test]
    fn spawn_respects_cap_and_chance() {
        let mut list = texts(2);
        let mut never = ScriptedRng::constant(0.9);
        assert!(!list.maybe_spawn(&mut never, 800, 600));

        let mut always = ScriptedRng::constant(0.01);
        assert!(list.maybe_spawn(&mut always, 800, 600));
        assert!(list.maybe_spawn(&mut always, 800, 600));
        assert!(!list.maybe_spawn(&mut always, 800, 600));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn spawned_values_in_range() {
        let mut list = texts(1000);
        let mut rng = ParticleRng::new(3);
        for _ in 0..500 {
            list.spawn(&mut rng, 800, 600);
        }
        for t in list.iter() {
            assert!((0.0..800.0).contains(&t.position.x));
            assert!((0.0..600.0).contains(&t.position.y));
            assert!(t.velocity.x.abs() <= 0.3 && t.velocity.y.abs() <= 0.3);
            assert!((400..600).contains(&t.remaining_life));
            assert!(list.config().messages.contains(&t.message));
        }
    }

    #[test]
    fn no_messages_no_spawn() {
        let mut list = FlyingTexts::new(TextConfig {
            messages: Vec::new(),
            ..Default::default()
        });
        let mut rng = ScriptedRng::constant(0.0);
        assert!(!list.spawn(&mut rng, 10, 10));
    }
}
