//! Thumbsprite Core Library
//!
//! This library provides the data structures and algorithms behind sprite-sheet
//! seek previews: validating sprite descriptors, resolving a hover position to a
//! sprite cell, and computing the background geometry that crops that cell.

pub mod config;
pub mod geometry;
pub mod resolver;
pub mod sprite;
pub mod style;
pub mod time;
pub mod validate;

pub use config::{PreviewConfig, UncoveredPolicy};
pub use geometry::{compute_style, scale_factor, CellGeometry, NaturalSize, TooltipLayout};
pub use resolver::{hover_point, resolve, resolve_at, ResolvedCell};
pub use sprite::{SpriteDescriptor, SpriteSet, SpriteSpec};
pub use style::StyleMap;
pub use time::format_timestamp;
pub use validate::validate;

/// Result type for thumbsprite-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for thumbsprite-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No sprites configured")]
    NoSpritesConfigured,

    #[error("Sprite {index} is missing required field `{field}`")]
    IncompleteDescriptor { index: usize, field: &'static str },

    #[error("Sprite {index} has invalid `{field}`: {value}")]
    InvalidDescriptor {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error(
        "Sprite {first_index} ({first_url}) ends at {first_end}s, after sprite {second_index} ({second_url}) starts at {second_start}s"
    )]
    Overlap {
        first_index: usize,
        first_url: String,
        first_end: f64,
        second_index: usize,
        second_url: String,
        second_start: f64,
    },

    #[cfg(feature = "serde")]
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
