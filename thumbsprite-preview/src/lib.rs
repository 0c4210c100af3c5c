//! Thumbsprite Preview Library
//!
//! This library attaches sprite-sheet seek previews to a host player: it reacts
//! to pointer movement over the progress track and pushes the computed tooltip
//! style back to the host.

pub mod controller;
pub mod host;
pub mod metadata;

pub use controller::{PreviewController, PreviewOutcome, ACTIVE_CLASS};
pub use host::{HostUi, PointerEventKind, PointerMove, Surface};
pub use metadata::{CachedMetadata, FileImageMetadata, ImageMetadataProvider, StaticImageMetadata};

/// Result type for thumbsprite-preview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for thumbsprite-preview operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Thumbsprite core error: {0}")]
    Core(#[from] thumbsprite_core::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Remote sprite sheet not available locally: {0}")]
    RemoteSheet(String),
}
