//! Hover position to sprite cell resolution

use crate::{SpriteDescriptor, SpriteSet, UncoveredPolicy};

/// A sprite cell selected for a hover position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCell<'a> {
    /// Sheet holding the cell
    pub sprite: &'a SpriteDescriptor,
    /// Cell offset within the sheet's grid, possibly fractional
    pub sprite_index: f64,
    /// Hovered timestamp in seconds
    pub hover_point: f64,
    /// False when no sheet covered the timestamp and a fallback was used
    pub covered: bool,
}

/// Maps a pixel offset along the track to a media timestamp.
///
/// A non-finite result (zero-width track, unknown duration) falls back to 0.
pub fn hover_point(offset: f64, track_width: f64, media_duration: f64) -> f64 {
    let point = media_duration * (offset / track_width);
    if point.is_finite() {
        point
    } else {
        0.0
    }
}

/// Resolves a pixel offset along the track to a sprite cell
pub fn resolve(
    offset: f64,
    track_width: f64,
    media_duration: f64,
    sprites: &SpriteSet,
    policy: UncoveredPolicy,
) -> ResolvedCell<'_> {
    resolve_at(hover_point(offset, track_width, media_duration), sprites, policy)
}

/// Resolves a timestamp to a sprite cell
pub fn resolve_at(
    hover_point: f64,
    sprites: &SpriteSet,
    policy: UncoveredPolicy,
) -> ResolvedCell<'_> {
    if let Some(sprite) = sprites.find_covering(hover_point) {
        return ResolvedCell {
            sprite,
            sprite_index: (hover_point - sprite.start) / sprite.interval,
            hover_point,
            covered: true,
        };
    }

    match policy {
        UncoveredPolicy::FirstSprite => ResolvedCell {
            sprite: sprites.first(),
            sprite_index: hover_point,
            hover_point,
            covered: false,
        },
        UncoveredPolicy::Nearest => {
            let sprite = sprites.last();
            let last_cell = sprite.cell_count().saturating_sub(1) as f64;
            let index = (hover_point - sprite.start) / sprite.interval;
            ResolvedCell {
                sprite,
                sprite_index: index.clamp(0.0, last_cell),
                hover_point,
                covered: false,
            }
        }
    }
}
