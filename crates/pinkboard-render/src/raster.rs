//! Polygon coverage and blur
//!
//! Coverage is sampled on a few sub-scanlines per pixel row with exact
//! horizontal span coverage, which is enough to keep the heart edges smooth
//! at sprite sizes.

use pinkboard_core::Point;

/// Sub-scanlines per pixel row
const SUBSAMPLES: usize = 4;

/// Per-pixel coverage in `[0, 1]`
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Mask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.data[(y * self.width + x) as usize]
    }

    /// Sum of coverage over every pixel
    pub fn total(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Multiply by another mask of the same size
    pub fn intersect(&mut self, other: &Mask) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a *= b;
        }
    }

    /// Rasterize a closed polygon with the non-zero winding rule
    pub fn fill_polygon(width: u32, height: u32, points: &[Point]) -> Self {
        let mut mask = Self::new(width, height);
        if points.len() < 3 || width == 0 || height == 0 {
            return mask;
        }

        let w = width as f32;
        let weight = 1.0 / SUBSAMPLES as f32;
        let mut crossings: Vec<(f32, i32)> = Vec::new();

        for row in 0..height {
            let row_start = (row * width) as usize;
            for sub in 0..SUBSAMPLES {
                let sy = row as f32 + (sub as f32 + 0.5) / SUBSAMPLES as f32;
                crossings.clear();
                for (i, a) in points.iter().enumerate() {
                    let b = &points[(i + 1) % points.len()];
                    if a.y == b.y {
                        continue;
                    }
                    let (lo, hi, dir) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
                    if sy < lo.y || sy >= hi.y {
                        continue;
                    }
                    let x = lo.x + (sy - lo.y) * (hi.x - lo.x) / (hi.y - lo.y);
                    crossings.push((x, dir));
                }
                if crossings.is_empty() {
                    continue;
                }
                crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

                let mut winding = 0;
                for pair in crossings.windows(2) {
                    winding += pair[0].1;
                    if winding == 0 {
                        continue;
                    }
                    let x0 = pair[0].0.clamp(0.0, w);
                    let x1 = pair[1].0.clamp(0.0, w);
                    if x1 <= x0 {
                        continue;
                    }
                    let first = x0.floor() as u32;
                    let last = (x1.ceil() as u32).min(width);
                    for px in first..last {
                        let left = (px as f32).max(x0);
                        let right = (px as f32 + 1.0).min(x1);
                        if right > left {
                            mask.data[row_start + px as usize] += (right - left) * weight;
                        }
                    }
                }
            }
        }

        for v in &mut mask.data {
            *v = v.min(1.0);
        }
        mask
    }

    /// Approximate a Gaussian of standard deviation `blur / 2` with three box
    /// passes in each direction
    pub fn blurred(&self, blur: f32) -> Self {
        let radius = (blur / 2.0).round().max(0.0) as usize;
        if radius == 0 {
            return self.clone();
        }
        let mut out = self.clone();
        let mut scratch = vec![0.0; out.data.len()];
        let (w, h) = (self.width as usize, self.height as usize);
        for _ in 0..3 {
            box_pass(&out.data, &mut scratch, w, h, radius, true);
            box_pass(&scratch, &mut out.data, w, h, radius, false);
        }
        out
    }
}

/// One box blur pass along rows (`horizontal`) or columns, with zero padding
fn box_pass(src: &[f32], dst: &mut [f32], w: usize, h: usize, radius: usize, horizontal: bool) {
    let (lines, len) = if horizontal { (h, w) } else { (w, h) };
    let at = |line: usize, i: usize| {
        if horizontal {
            line * w + i
        } else {
            i * w + line
        }
    };
    let norm = 1.0 / (2 * radius + 1) as f32;

    for line in 0..lines {
        let mut sum: f32 = (0..=radius.min(len.saturating_sub(1)))
            .map(|i| src[at(line, i)])
            .sum();
        for i in 0..len {
            dst[at(line, i)] = sum * norm;
            let add = i + radius + 1;
            if add < len {
                sum += src[at(line, add)];
            }
            if i >= radius {
                sum -= src[at(line, i - radius)];
            }
        }
    }
}
