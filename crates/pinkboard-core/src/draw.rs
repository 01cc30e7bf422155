//! 2D draw commands produced once per frame and executed by a backend

use crate::id::ImageId;
use crate::types::{Color, Point, Rect};

/// A closed polygon; the last point joins back to the first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Axis-aligned bounds, or `None` for an empty path
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }
}

/// CSS-style `brightness() contrast()` image filter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Filter {
    pub brightness: f32,
    pub contrast: f32,
}

impl Filter {
    pub const NONE: Self = Self {
        brightness: 1.0,
        contrast: 1.0,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::NONE
    }
}

/// Blurred drop shadow drawn beneath a fill (no offset)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Alphabetic,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    /// Font family hint; backends may ignore it
    pub family: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 24.0,
            family: "'Dancing Script', cursive".to_string(),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        }
    }
}

/// One drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Replace every pixel with `color`
    Clear(Color),
    /// Push alpha, filter, and clip state
    Save,
    /// Pop the state pushed by the matching `Save`
    Restore,
    /// Intersect the current clip with a polygon
    Clip(Path),
    SetFilter(Filter),
    FillPath {
        path: Path,
        color: Color,
        shadow: Option<Shadow>,
    },
    /// Draw an image stretched into `dest`. `alpha` is not clamped here.
    DrawImage {
        image: ImageId,
        dest: Rect,
        alpha: f32,
    },
    FillText {
        text: String,
        position: Point,
        color: Color,
        style: TextStyle,
    },
}

/// Everything needed to paint one frame onto a `width × height` surface
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Centre of the surface in pixels
    pub fn center(&self) -> Point {
        Point::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Number of image draws targeting `image`
    pub fn count_images(&self, image: ImageId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawImage { image: id, .. } if *id == image))
            .count()
    }

    /// Number of text draws
    pub fn count_texts(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillText { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_bounds() {
        assert!(Path::default().bounds().is_none());
        let path = Path::from_points(vec![
            Point::new(1.0, 5.0),
            Point::new(-3.0, 2.0),
            Point::new(4.0, 9.0),
        ]);
        assert_eq!(path.bounds(), Some(Rect::new(-3.0, 2.0, 7.0, 7.0)));
    }

    #[test]
    fn frame_counts() {
        let sprite = ImageId(1);
        let mut frame = Frame::new(100, 50);
        frame.push(DrawCommand::Clear(Color::TRANSPARENT));
        for _ in 0..3 {
            frame.push(DrawCommand::DrawImage {
                image: sprite,
                dest: Rect::new(0.0, 0.0, 1.0, 1.0),
                alpha: 1.0,
            });
        }
        frame.push(DrawCommand::FillText {
            text: "hi".into(),
            position: frame.center(),
            color: Color::WHITE,
            style: TextStyle::default(),
        });
        assert_eq!(frame.count_images(sprite), 3);
        assert_eq!(frame.count_images(ImageId(2)), 0);
        assert_eq!(frame.count_texts(), 1);
        assert_eq!(frame.center(), Point::new(50.0, 25.0));
    }
}
