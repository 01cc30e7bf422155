//! The heart sprite every particle is drawn with

use pinkboard_core::{Color, DrawCommand, Frame, Path, Point, Shadow};
use pinkboard_particles::heart_outline;
use std::f32::consts::PI;

/// Outline units mapped onto the sprite's side length
const CURVE_SPAN: f32 = 350.0;
const SPRITE_STEP: f32 = 0.01;
const SPRITE_FILL: u32 = 0xFF7EB9;
const SPRITE_GLOW: u32 = 0xFF99CC;
const SPRITE_GLOW_BLUR: f32 = 15.0;

/// Frame that paints a filled, glowing heart onto a `size × size` surface.
/// Rasterize it once at startup and register the result as the sprite.
pub fn heart_sprite_frame(size: u32) -> Frame {
    let half = size as f32 / 2.0;
    let scale = size as f32 / CURVE_SPAN;
    let points = heart_outline(-PI, PI, SPRITE_STEP)
        .into_iter()
        .map(|p| Point::new(half + p.x * scale, half - p.y * scale))
        .collect();

    let mut frame = Frame::new(size, size);
    frame.push(DrawCommand::Clear(Color::TRANSPARENT));
    frame.push(DrawCommand::FillPath {
        path: Path::from_points(points),
        color: Color::from_hex(SPRITE_FILL),
        shadow: Some(Shadow {
            color: Color::from_hex(SPRITE_GLOW),
            blur: SPRITE_GLOW_BLUR,
        }),
    });
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_heart_fits_surface() {
        let frame = heart_sprite_frame(30);
        assert_eq!((frame.width, frame.height), (30, 30));
        let DrawCommand::FillPath { path, shadow, .. } = &frame.commands[1] else {
            panic!("expected a fill");
        };
        assert!(shadow.is_some());
        let b = path.bounds().unwrap();
        assert!(b.x >= 0.0 && b.y >= 0.0);
        assert!(b.x + b.width <= 30.0 && b.y + b.height <= 30.0);
        // 320 curve units wide at 30/350 px per unit
        assert!((b.width - 320.0 * 30.0 / 350.0).abs() < 0.05);
    }
}
