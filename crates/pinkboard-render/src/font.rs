//! TrueType face used for the floating messages

use pinkboard_core::{PinkboardError, Result, TextAlign, TextBaseline};
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::Path;

pub struct FontFace {
    font: Font<'static>,
}

impl FontFace {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            PinkboardError::FontError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let face = Self::from_bytes(bytes)?;
        log::info!("Loaded font {}", path.display());
        Ok(face)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| PinkboardError::FontError("not a TrueType/OpenType font".into()))?;
        Ok(Self { font })
    }

    /// Advance width of `text` at `size` pixels
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        let scale = Scale::uniform(size);
        self.font
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map_or(0.0, |g| {
                g.position().x + g.unpositioned().h_metrics().advance_width
            })
    }

    /// Glyphs for `text` anchored at `(x, y)` with canvas-style alignment
    pub fn layout(
        &self,
        text: &str,
        size: f32,
        x: f32,
        y: f32,
        align: TextAlign,
        baseline: TextBaseline,
    ) -> Vec<PositionedGlyph<'static>> {
        let scale = Scale::uniform(size);
        let v = self.font.v_metrics(scale);
        let width = self.measure(text, size);

        let start_x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        let baseline_y = match baseline {
            TextBaseline::Top => y + v.ascent,
            // Centre of the ascent..descent box
            TextBaseline::Middle => y + (v.ascent + v.descent) / 2.0,
            TextBaseline::Alphabetic => y,
        };

        self.font
            .layout(text, scale, point(start_x, baseline_y))
            .collect()
    }
}
