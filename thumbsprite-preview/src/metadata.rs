//! Sprite sheet image metadata lookup and caching

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thumbsprite_core::NaturalSize;
use tracing::debug;

/// Source of sprite sheet natural sizes.
///
/// `None` means the size is not known yet (image still loading, unreadable).
pub trait ImageMetadataProvider {
    fn natural_size(&mut self, url: &str) -> Option<NaturalSize>;
}

impl<P: ImageMetadataProvider + ?Sized> ImageMetadataProvider for Box<P> {
    fn natural_size(&mut self, url: &str) -> Option<NaturalSize> {
        (**self).natural_size(url)
    }
}

/// Natural sizes supplied up front by the host
#[derive(Debug, Clone, Default)]
pub struct StaticImageMetadata {
    sizes: HashMap<String, NaturalSize>,
}

impl StaticImageMetadata {
    /// Creates an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the natural size of a sheet
    pub fn insert(&mut self, url: impl Into<String>, size: NaturalSize) {
        self.sizes.insert(url.into(), size);
    }

    /// Builder-style variant of [`Self::insert`]
    pub fn with(mut self, url: impl Into<String>, size: NaturalSize) -> Self {
        self.insert(url, size);
        self
    }
}

impl ImageMetadataProvider for StaticImageMetadata {
    fn natural_size(&mut self, url: &str) -> Option<NaturalSize> {
        self.sizes.get(url).copied()
    }
}

/// Reads natural sizes from image headers on disk, resolving urls against a root
#[derive(Debug, Clone)]
pub struct FileImageMetadata {
    root: PathBuf,
}

impl FileImageMetadata {
    /// Creates a provider resolving relative urls against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads the dimensions of the sheet at `url`
    pub fn dimensions(&self, url: &str) -> Result<NaturalSize> {
        if url.contains("://") {
            return Err(Error::RemoteSheet(url.to_string()));
        }
        let (width, height) = image::image_dimensions(self.root.join(url))?;
        Ok(NaturalSize::new(width, height))
    }
}

impl ImageMetadataProvider for FileImageMetadata {
    fn natural_size(&mut self, url: &str) -> Option<NaturalSize> {
        match self.dimensions(url) {
            Ok(size) => Some(size),
            Err(e) => {
                debug!(url, error = %e, "sprite sheet size unavailable");
                None
            }
        }
    }
}

/// Caches sizes from an inner provider by url.
///
/// Only known sizes are cached; a pending lookup is retried on the next request.
#[derive(Debug)]
pub struct CachedMetadata<P> {
    inner: P,
    sizes: HashMap<String, NaturalSize>,
}

impl<P: ImageMetadataProvider> CachedMetadata<P> {
    /// Wraps a provider with an empty cache
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            sizes: HashMap::new(),
        }
    }

    /// Number of cached sheets
    pub fn cached(&self) -> usize {
        self.sizes.len()
    }

    /// Gets a reference to the wrapped provider
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: ImageMetadataProvider> ImageMetadataProvider for CachedMetadata<P> {
    fn natural_size(&mut self, url: &str) -> Option<NaturalSize> {
        if let Some(size) = self.sizes.get(url) {
            return Some(*size);
        }

        let size = self.inner.natural_size(url).filter(|s| !s.is_empty())?;
        self.sizes.insert(url.to_string(), size);
        Some(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    /// Counts lookups and reports a size only after `ready_after` attempts
    struct CountingProvider {
        calls: usize,
        ready_after: usize,
    }

    impl ImageMetadataProvider for CountingProvider {
        fn natural_size(&mut self, _url: &str) -> Option<NaturalSize> {
            self.calls += 1;
            (self.calls > self.ready_after).then_some(NaturalSize::new(500, 300))
        }
    }

    #[test]
    fn test_static_lookup() {
        let mut provider = StaticImageMetadata::new().with("a.jpg", NaturalSize::new(500, 300));

        assert_eq!(provider.natural_size("a.jpg"), Some(NaturalSize::new(500, 300)));
        assert_eq!(provider.natural_size("b.jpg"), None);
    }

    #[test]
    fn test_cache_avoids_repeat_lookups() {
        let mut cache = CachedMetadata::new(CountingProvider {
            calls: 0,
            ready_after: 0,
        });

        assert!(cache.natural_size("a.jpg").is_some());
        assert!(cache.natural_size("a.jpg").is_some());

        assert_eq!(cache.inner().calls, 1);
        assert_eq!(cache.cached(), 1);
    }

    #[test]
    fn test_cache_retries_pending_lookups() {
        let mut cache = CachedMetadata::new(CountingProvider {
            calls: 0,
            ready_after: 1,
        });

        assert_eq!(cache.natural_size("a.jpg"), None);
        assert_eq!(cache.cached(), 0);
        assert_eq!(cache.natural_size("a.jpg"), Some(NaturalSize::new(500, 300)));
        assert_eq!(cache.inner().calls, 2);
    }

    #[test]
    fn test_cache_ignores_empty_sizes() {
        let mut cache =
            CachedMetadata::new(StaticImageMetadata::new().with("a.jpg", NaturalSize::new(0, 0)));

        assert_eq!(cache.natural_size("a.jpg"), None);
        assert_eq!(cache.cached(), 0);
    }

    #[test]
    fn test_file_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::new(500, 300)
            .save(dir.path().join("sheet.png"))
            .unwrap();

        let mut provider = FileImageMetadata::new(dir.path());

        assert_eq!(provider.natural_size("sheet.png"), Some(NaturalSize::new(500, 300)));
        assert_eq!(provider.natural_size("missing.png"), None);
    }

    #[test]
    fn test_file_rejects_remote_urls() {
        let provider = FileImageMetadata::new(".");

        assert!(matches!(
            provider.dimensions("https://cdn.example.com/sheet.jpg"),
            Err(Error::RemoteSheet(_))
        ));
    }
}
