//! Pinkboard Render - CPU rasterizer for Pinkboard frames
//!
//! Executes the `DrawCommand` list of a `Frame` into an `image::RgbaImage`:
//! polygon fills with blurred shadows, clip masks, filtered image blits, and
//! TrueType text through rusttype.

mod canvas;
mod filter;
mod font;
mod loader;
mod raster;
mod store;

pub use canvas::Canvas;
pub use filter::apply_filter;
pub use font::FontFace;
pub use loader::{ImageLoader, LoadState};
pub use raster::Mask;
pub use store::ImageStore;
