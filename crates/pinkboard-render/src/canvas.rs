//! Software canvas executing a `Frame`

use crate::filter::apply_filter;
use crate::font::FontFace;
use crate::raster::Mask;
use crate::store::ImageStore;
use image::{Rgba, RgbaImage};
use pinkboard_core::{
    Color, DrawCommand, Filter, Frame, ImageId, PinkboardError, Point, Rect, Result, Shadow,
    TextStyle,
};
use std::path::Path;

/// Largest surface side the canvas will allocate
const MAX_SIDE: u32 = 16_384;

#[derive(Clone, Default)]
struct State {
    filter: Filter,
    clip: Option<Mask>,
}

/// Straight-alpha RGBA surface plus a save/restore state stack
pub struct Canvas {
    image: RgbaImage,
    state: State,
    stack: Vec<State>,
    warned_no_font: bool,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_size(width, height)?;
        Ok(Self {
            image: RgbaImage::new(width, height),
            state: State::default(),
            stack: Vec::new(),
            warned_no_font: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Reallocate the surface. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        check_size(width, height)?;
        if self.image.dimensions() != (width, height) {
            self.image = RgbaImage::new(width, height);
        }
        Ok(())
    }

    /// Paint every command of `frame`, resizing first if the frame's surface
    /// size changed. Images missing from `store` are skipped; text is skipped
    /// without a font.
    pub fn execute(
        &mut self,
        frame: &Frame,
        store: &ImageStore,
        font: Option<&FontFace>,
    ) -> Result<()> {
        self.resize(frame.width, frame.height)?;
        self.state = State::default();
        self.stack.clear();

        for command in &frame.commands {
            match command {
                DrawCommand::Clear(color) => self.clear(*color),
                DrawCommand::Save => self.stack.push(self.state.clone()),
                DrawCommand::Restore => {
                    if let Some(state) = self.stack.pop() {
                        self.state = state;
                    }
                }
                DrawCommand::Clip(path) => {
                    let mask = Mask::fill_polygon(self.width(), self.height(), path.points());
                    self.state.clip = Some(match self.state.clip.take() {
                        Some(mut clip) => {
                            clip.intersect(&mask);
                            clip
                        }
                        None => mask,
                    });
                }
                DrawCommand::SetFilter(filter) => self.state.filter = *filter,
                DrawCommand::FillPath {
                    path,
                    color,
                    shadow,
                } => self.fill_path(path.points(), *color, *shadow),
                DrawCommand::DrawImage { image, dest, alpha } => {
                    self.draw_image(store, *image, *dest, *alpha)
                }
                DrawCommand::FillText {
                    text,
                    position,
                    color,
                    style,
                } => self.fill_text(font, text, *position, *color, style),
            }
        }
        Ok(())
    }

    /// Render `frame` onto a fresh canvas of its own size
    pub fn render(frame: &Frame, store: &ImageStore, font: Option<&FontFace>) -> Result<RgbaImage> {
        let mut canvas = Self::new(frame.width, frame.height)?;
        canvas.execute(frame, store, font)?;
        Ok(canvas.into_image())
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image.save(path).map_err(|e| {
            PinkboardError::ImageError(format!("Failed to save '{}': {}", path.display(), e))
        })
    }

    fn clear(&mut self, color: Color) {
        let px = Rgba(color.to_rgba8());
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    fn clip_at(&self, x: u32, y: u32) -> f32 {
        self.state.clip.as_ref().map_or(1.0, |m| m.get(x, y))
    }

    fn fill_path(&mut self, points: &[Point], color: Color, shadow: Option<Shadow>) {
        let coverage = Mask::fill_polygon(self.width(), self.height(), points);
        if let Some(shadow) = shadow {
            let glow = coverage.blurred(shadow.blur);
            self.fill_mask(&glow, shadow.color);
        }
        self.fill_mask(&coverage, color);
    }

    fn fill_mask(&mut self, mask: &Mask, color: Color) {
        let rgb = [color.r, color.g, color.b];
        for y in 0..self.height() {
            for x in 0..self.width() {
                let a = color.a * mask.get(x, y) * self.clip_at(x, y);
                if a > 0.0 {
                    blend(self.image.get_pixel_mut(x, y), rgb, a);
                }
            }
        }
    }

    fn draw_image(&mut self, store: &ImageStore, id: ImageId, dest: Rect, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 || dest.width <= 0.0 || dest.height <= 0.0 {
            return;
        }
        let Some(src) = store.get(id) else {
            log::debug!("Skipping draw of unloaded {id}");
            return;
        };
        let (sw, sh) = src.dimensions();
        if sw == 0 || sh == 0 {
            return;
        }

        let x0 = dest.x.floor().max(0.0) as u32;
        let y0 = dest.y.floor().max(0.0) as u32;
        let x1 = ((dest.x + dest.width).ceil().max(0.0) as u32).min(self.width());
        let y1 = ((dest.y + dest.height).ceil().max(0.0) as u32).min(self.height());
        let filter = self.state.filter;

        for y in y0..y1 {
            let cy = y as f32 + 0.5;
            if cy < dest.y || cy >= dest.y + dest.height {
                continue;
            }
            let v = (((cy - dest.y) / dest.height * sh as f32) as u32).min(sh - 1);
            for x in x0..x1 {
                let cx = x as f32 + 0.5;
                if cx < dest.x || cx >= dest.x + dest.width {
                    continue;
                }
                let u = (((cx - dest.x) / dest.width * sw as f32) as u32).min(sw - 1);
                let [r, g, b, a] = src.get_pixel(u, v).0;
                let a = a as f32 / 255.0 * alpha * self.clip_at(x, y);
                if a <= 0.0 {
                    continue;
                }
                let rgb = apply_filter(
                    filter,
                    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0],
                );
                blend(self.image.get_pixel_mut(x, y), rgb, a);
            }
        }
    }

    fn fill_text(
        &mut self,
        font: Option<&FontFace>,
        text: &str,
        position: Point,
        color: Color,
        style: &TextStyle,
    ) {
        let Some(font) = font else {
            if !self.warned_no_font {
                log::info!("No font loaded, floating text will not be painted");
                self.warned_no_font = true;
            }
            return;
        };
        if color.a <= 0.0 {
            return;
        }

        let glyphs = font.layout(
            text,
            style.size,
            position.x,
            position.y,
            style.align,
            style.baseline,
        );
        let (w, h) = (self.width() as i32, self.height() as i32);
        let rgb = [color.r, color.g, color.b];
        let clip = self.state.clip.as_ref();
        let image = &mut self.image;

        for glyph in glyphs {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px >= w || py >= h {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                let a = color.a * coverage * clip.map_or(1.0, |m| m.get(px, py));
                if a > 0.0 {
                    blend(image.get_pixel_mut(px, py), rgb, a);
                }
            });
        }
    }
}

fn check_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
        return Err(PinkboardError::RenderError(format!(
            "surface size {width}x{height} outside 1..={MAX_SIDE}"
        )));
    }
    Ok(())
}

/// Source-over onto a straight-alpha pixel
fn blend(dst: &mut Rgba<u8>, rgb: [f32; 3], alpha: f32) {
    let sa = alpha.clamp(0.0, 1.0);
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        dst.0 = [0, 0, 0, 0];
        return;
    }
    for i in 0..3 {
        let dc = dst.0[i] as f32 / 255.0;
        let c = (rgb[i] * sa + dc * da * (1.0 - sa)) / out_a;
        dst.0[i] = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    dst.0[3] = (out_a * 255.0).round() as u8;
}
