//! Background geometry for cropping a sprite cell

use crate::style::px;
use crate::{ResolvedCell, StyleMap};

/// Intrinsic pixel size of a sprite sheet image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

impl NaturalSize {
    /// Creates a new natural size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero, e.g. for an image that has not loaded
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Vertical layout of the host controls, in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TooltipLayout {
    /// Top edge of the control bar
    pub controls_top: f64,
    /// Top edge of the seek bar
    pub seek_bar_top: f64,
}

/// Returns the preview scale for a viewport width.
///
/// Previews shrink proportionally below `responsive_width_limit` and are never
/// enlarged. A limit of 0 disables scaling.
pub fn scale_factor(viewport_width: f64, responsive_width_limit: f64) -> f64 {
    if responsive_width_limit > 0.0 && viewport_width < responsive_width_limit {
        viewport_width / responsive_width_limit
    } else {
        1.0
    }
}

/// Computed crop and placement of one sprite cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    /// Scaled cell width
    pub width: f64,
    /// Scaled cell height
    pub height: f64,
    /// Grid row of the cell
    pub row: f64,
    /// Grid column of the cell
    pub column: f64,
    /// Horizontal background offset (non-positive)
    pub position_x: f64,
    /// Vertical background offset (non-positive)
    pub position_y: f64,
    /// Scaled sheet width
    pub background_width: f64,
    /// Scaled sheet height
    pub background_height: f64,
    /// Offset placing the preview above the track
    pub top: f64,
}

impl CellGeometry {
    /// Computes the geometry of a resolved cell on a sheet of the given size
    pub fn compute(
        cell: &ResolvedCell<'_>,
        natural: NaturalSize,
        scale: f64,
        layout: TooltipLayout,
    ) -> Self {
        let sprite = cell.sprite;
        let width = sprite.width * scale;
        let height = sprite.height * scale;

        let columns = f64::from(natural.width) / sprite.width;
        let row = (cell.sprite_index / columns).floor();
        let column = (cell.sprite_index % columns).floor();

        let nested = (layout.seek_bar_top - layout.controls_top).max(0.0);

        Self {
            width,
            height,
            row,
            column,
            position_x: -column * width,
            position_y: -row * height,
            background_width: f64::from(natural.width) * scale,
            background_height: f64::from(natural.height) * scale,
            top: -height - nested,
        }
    }

    /// Builds the full tooltip style for this geometry
    pub fn to_style(&self, url: &str) -> StyleMap {
        let mut style = StyleMap::new();
        style.set("width", px(self.width));
        style.set("height", px(self.height));
        style.set("background-image", format!("url({url})"));
        style.set("background-repeat", "no-repeat");
        style.set(
            "background-position",
            format!("{} {}", px(self.position_x), px(self.position_y)),
        );
        style.set(
            "background-size",
            format!("{} {}", px(self.background_width), px(self.background_height)),
        );
        style.set("top", px(self.top));
        style.set("color", "#ffffff");
        style.set("text-shadow", "1px 1px #000000");
        style.set("border", "1px solid #000000");
        style.set("margin", "0 1px");
        style
    }
}

/// Computes the tooltip style for a resolved cell
pub fn compute_style(
    cell: &ResolvedCell<'_>,
    natural: NaturalSize,
    viewport_width: f64,
    responsive_width_limit: f64,
    layout: TooltipLayout,
) -> StyleMap {
    let scale = scale_factor(viewport_width, responsive_width_limit);
    CellGeometry::compute(cell, natural, scale, layout).to_style(&cell.sprite.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpriteDescriptor;

    const STYLE_KEYS: [&str; 11] = [
        "width",
        "height",
        "background-image",
        "background-repeat",
        "background-position",
        "background-size",
        "top",
        "color",
        "text-shadow",
        "border",
        "margin",
    ];

    fn sheet() -> SpriteDescriptor {
        SpriteDescriptor::new("sheet.jpg", 0.0, 60.0, 100.0, 60.0, 2.0)
    }

    fn cell(sprite: &SpriteDescriptor, index: f64) -> ResolvedCell<'_> {
        ResolvedCell {
            sprite,
            sprite_index: index,
            hover_point: index * sprite.interval,
            covered: true,
        }
    }

    #[test]
    fn test_scale_factor_only_shrinks() {
        assert_eq!(scale_factor(400.0, 800.0), 0.5);
        assert_eq!(scale_factor(1000.0, 800.0), 1.0);
        assert_eq!(scale_factor(800.0, 800.0), 1.0);
        assert_eq!(scale_factor(400.0, 0.0), 1.0);
    }

    #[test]
    fn test_grid_position() {
        let sprite = sheet();
        let geometry = CellGeometry::compute(
            &cell(&sprite, 7.0),
            NaturalSize::new(500, 300),
            1.0,
            TooltipLayout::default(),
        );

        assert_eq!(geometry.row, 1.0);
        assert_eq!(geometry.column, 2.0);
        assert_eq!(geometry.position_x, -200.0);
        assert_eq!(geometry.position_y, -60.0);
        assert_eq!(geometry.top, -60.0);
    }

    #[test]
    fn test_grid_position_scaled() {
        let sprite = sheet();
        let geometry = CellGeometry::compute(
            &cell(&sprite, 7.0),
            NaturalSize::new(500, 300),
            0.5,
            TooltipLayout::default(),
        );

        assert_eq!(geometry.width, 50.0);
        assert_eq!(geometry.height, 30.0);
        assert_eq!(geometry.position_x, -100.0);
        assert_eq!(geometry.position_y, -30.0);
        assert_eq!(geometry.background_width, 250.0);
        assert_eq!(geometry.background_height, 150.0);
    }

    #[test]
    fn test_fractional_index_is_floored() {
        let sprite = sheet();
        let geometry = CellGeometry::compute(
            &cell(&sprite, 2.5),
            NaturalSize::new(500, 300),
            1.0,
            TooltipLayout::default(),
        );

        assert_eq!(geometry.row, 0.0);
        assert_eq!(geometry.column, 2.0);
    }

    #[test]
    fn test_nested_seek_bar_raises_preview() {
        let sprite = sheet();
        let raised = TooltipLayout {
            controls_top: 100.0,
            seek_bar_top: 110.0,
        };
        let flush = TooltipLayout {
            controls_top: 110.0,
            seek_bar_top: 100.0,
        };

        let size = NaturalSize::new(500, 300);
        let nested = CellGeometry::compute(&cell(&sprite, 0.0), size, 1.0, raised);
        let above = CellGeometry::compute(&cell(&sprite, 0.0), size, 1.0, flush);

        assert_eq!(nested.top, -70.0);
        assert_eq!(above.top, -60.0);
    }

    #[test]
    fn test_style_has_every_property() {
        let sprite = sheet();
        let style = compute_style(
            &cell(&sprite, 7.0),
            NaturalSize::new(500, 300),
            400.0,
            800.0,
            TooltipLayout::default(),
        );

        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, STYLE_KEYS);
        assert_eq!(style.get("width"), Some("50px"));
        assert_eq!(style.get("height"), Some("30px"));
        assert_eq!(style.get("background-image"), Some("url(sheet.jpg)"));
        assert_eq!(style.get("background-repeat"), Some("no-repeat"));
        assert_eq!(style.get("background-position"), Some("-100px -30px"));
        assert_eq!(style.get("background-size"), Some("250px 150px"));
        assert_eq!(style.get("top"), Some("-30px"));
    }

    #[test]
    fn test_first_cell_has_zero_offsets() {
        let sprite = sheet();
        let style = compute_style(
            &cell(&sprite, 0.0),
            NaturalSize::new(500, 300),
            1000.0,
            0.0,
            TooltipLayout::default(),
        );

        assert_eq!(style.get("background-position"), Some("0px 0px"));
    }

    #[test]
    fn test_empty_natural_size() {
        assert!(NaturalSize::new(0, 0).is_empty());
        assert!(NaturalSize::new(500, 0).is_empty());
        assert!(!NaturalSize::new(500, 300).is_empty());
    }
}
