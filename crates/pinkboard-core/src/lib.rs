//! Pinkboard Core - Foundational types for the Pinkboard scene
//!
//! This crate provides the types that all other Pinkboard crates depend on:
//! - `Point`, `Rect`, `Color` - 2D geometry and colour
//! - `ImageId` - Handles for images owned by the renderer
//! - `Frame`, `DrawCommand` - The per-frame list of 2D drawing operations
//! - Error types and Result alias

mod draw;
mod error;
mod id;
mod types;

pub use draw::{DrawCommand, Filter, Frame, Path, Shadow, TextAlign, TextBaseline, TextStyle};
pub use error::{PinkboardError, Result};
pub use id::ImageId;
pub use types::{Color, Point, Rect};
