//! Preview controller wiring pointer movement to tooltip styles

use crate::host::{HostUi, PointerEventKind, PointerMove, Surface};
use crate::metadata::{CachedMetadata, ImageMetadataProvider};
use crate::Result;
use thumbsprite_core::{
    compute_style, format_timestamp, resolve, PreviewConfig, SpriteSet, UncoveredPolicy,
};
use tracing::{debug, warn};

/// Class marker added to the player once previews are active
pub const ACTIVE_CLASS: &str = "vjs-sprite-thumbnails";

/// Result of handling one pointer move
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewOutcome {
    /// A style was pushed to the tooltip
    Applied {
        /// Sheet the preview was cropped from
        url: String,
        /// Hovered timestamp in seconds
        hover_point: f64,
        /// Hovered timestamp formatted for display
        label: String,
    },
    /// The sheet's natural size is not known yet; nothing was applied
    Pending {
        /// Sheet awaiting metadata
        url: String,
    },
}

/// Seek bar preview controller for one player
pub struct PreviewController<M> {
    sprites: SpriteSet,
    responsive_width_limit: f64,
    uncovered: UncoveredPolicy,
    images: CachedMetadata<M>,
}

impl<M: ImageMetadataProvider> PreviewController<M> {
    /// Creates a controller from a configuration, validating its sprites
    pub fn new(config: &PreviewConfig, images: M) -> Result<Self> {
        Ok(Self {
            sprites: config.sprite_set()?,
            responsive_width_limit: config.responsive_width_limit,
            uncovered: config.uncovered,
            images: CachedMetadata::new(images),
        })
    }

    /// Activates previews on a host player.
    ///
    /// Returns `Ok(None)` without touching the host when a required surface is
    /// missing. Invalid configuration is logged and returned; the host is left
    /// unchanged in that case too.
    pub fn attach<H: HostUi>(
        config: &PreviewConfig,
        host: &mut H,
        images: M,
    ) -> Result<Option<Self>> {
        if let Some(missing) = Surface::REQUIRED.into_iter().find(|s| !host.has_surface(*s)) {
            debug!(?missing, "host surface missing, sprite previews inactive");
            return Ok(None);
        }

        let controller = Self::new(config, images).map_err(|e| {
            warn!(error = %e, "invalid sprite configuration, sprite previews disabled");
            e
        })?;

        for kind in PointerEventKind::ALL {
            host.listen(kind);
        }
        host.add_class(ACTIVE_CLASS);

        debug!(sprites = controller.sprites.len(), "sprite previews active");
        Ok(Some(controller))
    }

    /// Resolves the hovered cell and replaces the tooltip style
    pub fn on_pointer_move<H: HostUi>(
        &mut self,
        host: &mut H,
        event: PointerMove,
    ) -> PreviewOutcome {
        let cell = resolve(
            event.offset,
            event.track_width,
            host.duration(),
            &self.sprites,
            self.uncovered,
        );
        let url = cell.sprite.url.clone();

        let Some(natural) = self.images.natural_size(&url) else {
            debug!(url = %url, "sprite sheet size pending, preview skipped");
            return PreviewOutcome::Pending { url };
        };

        let style = compute_style(
            &cell,
            natural,
            host.viewport_width(),
            self.responsive_width_limit,
            host.tooltip_layout(),
        );
        host.set_tooltip_style(&style);

        PreviewOutcome::Applied {
            url,
            hover_point: cell.hover_point,
            label: format_timestamp(cell.hover_point),
        }
    }

    /// Stops listening for pointer movement on the host
    pub fn detach<H: HostUi>(self, host: &mut H) {
        for kind in PointerEventKind::ALL {
            host.unlisten(kind);
        }
    }

    /// Returns the validated sprites
    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    /// Returns the responsive width limit (0 when disabled)
    pub fn responsive_width_limit(&self) -> f64 {
        self.responsive_width_limit
    }
}
