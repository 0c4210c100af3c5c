//! Sprite configuration validation

use crate::{Error, Result, SpriteDescriptor, SpriteSet, SpriteSpec};
use tracing::debug;

/// Validates raw sprite entries and returns a normalized [`SpriteSet`].
///
/// Entries are checked for completeness first, then sorted by `start` (stable)
/// and checked for overlapping coverage. The caller's slice is left untouched.
pub fn validate(specs: &[SpriteSpec]) -> Result<SpriteSet> {
    if specs.is_empty() {
        return Err(Error::NoSpritesConfigured);
    }

    let mut sprites = specs
        .iter()
        .enumerate()
        .map(|(index, spec)| complete(index, spec))
        .collect::<Result<Vec<_>>>()?;

    sprites.sort_by(|a, b| a.start.total_cmp(&b.start));
    check_overlap(&sprites)?;

    debug!(count = sprites.len(), "validated sprite configuration");
    Ok(SpriteSet::from_validated(sprites))
}

/// Converts one raw entry into a descriptor, rejecting absent or out-of-range fields
fn complete(index: usize, spec: &SpriteSpec) -> Result<SpriteDescriptor> {
    let url = spec
        .url
        .clone()
        .ok_or(Error::IncompleteDescriptor { index, field: "url" })?;
    let start = required(index, "start", spec.start)?;
    let duration = required(index, "duration", spec.duration)?;
    let width = required(index, "width", spec.width)?;
    let height = required(index, "height", spec.height)?;
    let interval = required(index, "interval", spec.interval)?;

    check_range(index, "start", start, false)?;
    check_range(index, "duration", duration, true)?;
    check_range(index, "width", width, true)?;
    check_range(index, "height", height, true)?;
    check_range(index, "interval", interval, true)?;

    Ok(SpriteDescriptor::new(url, start, duration, width, height, interval))
}

fn required(index: usize, field: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or(Error::IncompleteDescriptor { index, field })
}

fn check_range(index: usize, field: &'static str, value: f64, positive: bool) -> Result<()> {
    let in_range = value.is_finite() && if positive { value > 0.0 } else { value >= 0.0 };
    if in_range {
        Ok(())
    } else {
        Err(Error::InvalidDescriptor {
            index,
            field,
            value,
        })
    }
}

/// Checks adjacent pairs of sorted sprites for overlapping coverage
fn check_overlap(sprites: &[SpriteDescriptor]) -> Result<()> {
    for (i, pair) in sprites.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        if a.end() > b.start {
            return Err(Error::Overlap {
                first_index: i,
                first_url: a.url.clone(),
                first_end: a.end(),
                second_index: i + 1,
                second_url: b.url.clone(),
                second_start: b.start,
            });
        }
    }
    Ok(())
}
