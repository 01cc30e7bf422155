//! Photo clipped to the heart outline

use crate::config::PhotoConfig;
use pinkboard_core::{DrawCommand, Filter, Frame, ImageId, Path, Point, Rect};
use pinkboard_particles::heart_outline;
use std::f32::consts::TAU;

/// Parameter step for the clip outline
const CLIP_STEP: f32 = 0.02;

/// Composites an image inside the heart. Draws nothing until an image has
/// been attached with [`HeartPhoto::mark_ready`].
pub struct HeartPhoto {
    config: PhotoConfig,
    image: Option<ImageId>,
    /// Curve samples relative to the heart centre, y up
    outline: Vec<Point>,
}

impl HeartPhoto {
    pub fn new(config: PhotoConfig) -> Self {
        Self {
            config,
            image: None,
            outline: heart_outline(0.0, TAU, CLIP_STEP),
        }
    }

    /// The image has finished loading and may be drawn from the next frame on
    pub fn mark_ready(&mut self, image: ImageId) {
        self.image = Some(image);
    }

    pub fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<ImageId> {
        self.image
    }

    /// Heart outline centred on `center` in surface coordinates
    pub fn clip_path(&self, center: Point) -> Path {
        Path::from_points(
            self.outline
                .iter()
                .map(|p| Point::new(center.x + p.x, center.y - p.y))
                .collect(),
        )
    }

    pub fn filter(&self) -> Filter {
        Filter {
            brightness: self.config.brightness,
            contrast: self.config.contrast,
        }
    }

    /// Append the clipped photo to `frame`; no-op while not ready
    pub fn draw(&self, frame: &mut Frame) {
        let Some(image) = self.image else {
            return;
        };
        let center = frame.center();
        frame.push(DrawCommand::Save);
        frame.push(DrawCommand::Clip(self.clip_path(center)));
        frame.push(DrawCommand::SetFilter(self.filter()));
        frame.push(DrawCommand::DrawImage {
            image,
            dest: Rect::centered(center, self.config.width, self.config.height),
            alpha: 1.0,
        });
        frame.push(DrawCommand::SetFilter(Filter::NONE));
        frame.push(DrawCommand::Restore);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ready_draws_nothing() {
        let photo = HeartPhoto::new(PhotoConfig::default());
        let mut frame = Frame::new(800, 600);
        photo.draw(&mut frame);
        assert!(frame.commands.is_empty());
        assert!(!photo.is_ready());
    }

    #[test]
    fn ready_draws_clipped_and_balanced() {
        let mut photo = HeartPhoto::new(PhotoConfig::default());
        photo.mark_ready(ImageId(4));
        let mut frame = Frame::new(800, 600);
        photo.draw(&mut frame);

        assert_eq!(frame.commands.first(), Some(&DrawCommand::Save));
        assert_eq!(frame.commands.last(), Some(&DrawCommand::Restore));
        assert_eq!(frame.count_images(ImageId(4)), 1);

        let dest = frame.commands.iter().find_map(|c| match c {
            DrawCommand::DrawImage { dest, .. } => Some(*dest),
            _ => None,
        });
        assert_eq!(dest, Some(Rect::new(220.0, 135.0, 360.0, 330.0)));
    }

    #[test]
    fn clip_path_is_centred_and_flipped() {
        let photo = HeartPhoto::new(PhotoConfig::default());
        let path = photo.clip_path(Point::new(400.0, 300.0));
        // t = 0 is the top cusp, 75 above centre on screen
        let first = path.points()[0];
        assert!((first.x - 400.0).abs() < 1e-3);
        assert!((first.y - 225.0).abs() < 1e-3);

        let bounds = path.bounds().unwrap();
        assert!((bounds.x - 240.0).abs() < 0.5);
        assert!((bounds.width - 320.0).abs() < 1.0);
        // Bottom tip is 145 below centre
        assert!((bounds.y + bounds.height - 445.0).abs() < 0.5);
    }
}
