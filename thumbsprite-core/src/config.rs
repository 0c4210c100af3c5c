//! Preview configuration

use crate::{validate, Result, SpriteSet, SpriteSpec};

/// What to show when the hovered timestamp lies outside every sheet's coverage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum UncoveredPolicy {
    /// Use the first sheet and treat the raw timestamp as the cell index
    #[default]
    FirstSprite,
    /// Use the last sheet and clamp to its final cell
    Nearest,
}

/// Preview configuration supplied by the host
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PreviewConfig {
    /// Sprite sheets, in any order
    pub sprites: Vec<SpriteSpec>,
    /// Player width below which previews shrink proportionally (0 disables)
    pub responsive_width_limit: f64,
    /// Fallback for timestamps no sheet covers
    pub uncovered: UncoveredPolicy,
}

impl PreviewConfig {
    /// Creates a configuration with the default fallback policy
    pub fn new(sprites: Vec<SpriteSpec>, responsive_width_limit: f64) -> Self {
        Self {
            sprites,
            responsive_width_limit,
            uncovered: UncoveredPolicy::default(),
        }
    }

    /// Parses a configuration from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the configured sprites
    pub fn sprite_set(&self) -> Result<SpriteSet> {
        validate(&self.sprites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SpriteDescriptor};

    #[test]
    fn test_default_disables_scaling_and_has_no_sprites() {
        let config = PreviewConfig::default();

        assert_eq!(config.responsive_width_limit, 0.0);
        assert_eq!(config.uncovered, UncoveredPolicy::FirstSprite);
        assert!(matches!(config.sprite_set(), Err(Error::NoSpritesConfigured)));
    }

    #[test]
    fn test_sprite_set_validates() {
        let config = PreviewConfig::new(
            vec![SpriteDescriptor::new("a.jpg", 0.0, 10.0, 160.0, 90.0, 2.0).into()],
            800.0,
        );

        assert_eq!(config.sprite_set().unwrap().len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_accepts_camel_case_options() {
        let json = r#"{
            "sprites": [
                { "url": "b.jpg", "start": 10, "duration": 10, "width": 160, "height": 90, "interval": 2 },
                { "url": "a.jpg", "start": 0, "duration": 10, "width": 160, "height": 90, "interval": 2 }
            ],
            "responsiveWidthLimit": 640,
            "uncovered": "nearest"
        }"#;

        let config = PreviewConfig::from_json(json).unwrap();

        assert_eq!(config.responsive_width_limit, 640.0);
        assert_eq!(config.uncovered, UncoveredPolicy::Nearest);
        assert_eq!(config.sprite_set().unwrap().first().url, "a.jpg");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_leaves_missing_fields_to_validation() {
        let json = r#"{ "sprites": [{ "url": "a.jpg", "start": 0, "duration": 10 }] }"#;

        let config = PreviewConfig::from_json(json).unwrap();

        assert!(matches!(
            config.sprite_set(),
            Err(Error::IncompleteDescriptor { field: "width", .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            PreviewConfig::from_json("{ sprites: "),
            Err(Error::Json(_))
        ));
    }
}
