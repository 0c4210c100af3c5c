//! Sprite sheet descriptors

/// Raw sprite sheet entry as supplied by configuration.
///
/// Every field is optional so that an incomplete entry can be reported by the
/// validator instead of being rejected by the parser.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpriteSpec {
    /// Sheet image url
    pub url: Option<String>,
    /// Start of coverage in seconds
    pub start: Option<f64>,
    /// Length of coverage in seconds
    pub duration: Option<f64>,
    /// Width of one cell in pixels
    pub width: Option<f64>,
    /// Height of one cell in pixels
    pub height: Option<f64>,
    /// Seconds covered by each cell
    pub interval: Option<f64>,
}

impl From<SpriteDescriptor> for SpriteSpec {
    fn from(sprite: SpriteDescriptor) -> Self {
        Self {
            url: Some(sprite.url),
            start: Some(sprite.start),
            duration: Some(sprite.duration),
            width: Some(sprite.width),
            height: Some(sprite.height),
            interval: Some(sprite.interval),
        }
    }
}

/// A complete sprite sheet descriptor covering `[start, start + duration)`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpriteDescriptor {
    /// Sheet image url
    pub url: String,
    /// Start of coverage in seconds
    pub start: f64,
    /// Length of coverage in seconds
    pub duration: f64,
    /// Width of one cell in pixels
    pub width: f64,
    /// Height of one cell in pixels
    pub height: f64,
    /// Seconds covered by each cell
    pub interval: f64,
}

impl SpriteDescriptor {
    /// Creates a new sprite descriptor
    pub fn new(
        url: impl Into<String>,
        start: f64,
        duration: f64,
        width: f64,
        height: f64,
        interval: f64,
    ) -> Self {
        Self {
            url: url.into(),
            start,
            duration,
            width,
            height,
            interval,
        }
    }

    /// Returns the exclusive end of this sheet's coverage in seconds
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Checks if this sheet covers the given timestamp
    pub fn covers(&self, timestamp: f64) -> bool {
        timestamp >= self.start && timestamp < self.end()
    }

    /// Returns the number of cells in the sheet.
    ///
    /// A trailing partial interval still occupies a cell.
    pub fn cell_count(&self) -> u64 {
        (self.duration / self.interval).ceil() as u64
    }
}

/// Validated, non-empty list of sprite descriptors sorted by `start` with no
/// overlapping coverage. Built by [`crate::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSet {
    sprites: Vec<SpriteDescriptor>,
}

impl SpriteSet {
    pub(crate) fn from_validated(sprites: Vec<SpriteDescriptor>) -> Self {
        debug_assert!(!sprites.is_empty());
        Self { sprites }
    }

    /// Returns the sprites in ascending `start` order
    pub fn as_slice(&self) -> &[SpriteDescriptor] {
        &self.sprites
    }

    /// Iterates the sprites in ascending `start` order
    pub fn iter(&self) -> std::slice::Iter<'_, SpriteDescriptor> {
        self.sprites.iter()
    }

    /// Returns the number of sprites
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Returns the sprite with the earliest start
    pub fn first(&self) -> &SpriteDescriptor {
        &self.sprites[0]
    }

    /// Returns the sprite with the latest start
    pub fn last(&self) -> &SpriteDescriptor {
        &self.sprites[self.sprites.len() - 1]
    }

    /// Finds the first sprite whose coverage ends after `timestamp`.
    ///
    /// Relies on ascending order: the scan stops at the first sheet ending past
    /// the timestamp, which is the covering one for non-overlapping sheets.
    pub fn find_covering(&self, timestamp: f64) -> Option<&SpriteDescriptor> {
        self.sprites.iter().find(|s| timestamp < s.end())
    }
}

impl<'a> IntoIterator for &'a SpriteSet {
    type Item = &'a SpriteDescriptor;
    type IntoIter = std::slice::Iter<'a, SpriteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sprites.iter()
    }
}
