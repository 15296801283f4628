//! GridConfig - tunables for the panning canvas, loadable from JSON.
//!
//! Every field has a default, so a host can send a partial object such as
//! `{"max_rectangles": 50}` and inherit the rest.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CELL_SIZE: f64 = 80.0;
pub const DEFAULT_CELL_MARGIN: f64 = 4.0;
pub const DEFAULT_MAX_RECTANGLES: usize = 30;
pub const DEFAULT_MAX_BATCH: usize = 3;
pub const DEFAULT_INTERVAL_MS: f64 = 250.0;
pub const DEFAULT_FADE_IN_MS: u32 = 10;
pub const DEFAULT_FADE_OUT_MS: u32 = 300;
pub const DEFAULT_CLICK_THRESHOLD: f64 = 20.0;
pub const DEFAULT_TEXT_PROBABILITY: f64 = 0.7;
/// Longest side of an aspect ratio, in cells.
pub const MAX_ASPECT_CELLS: i32 = 16;

/// Rectangle shape in grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub height: i32,
    pub width: i32,
}

impl AspectRatio {
    pub const SQUARE: AspectRatio = AspectRatio::new(1, 1);

    pub const fn new(height: i32, width: i32) -> Self {
        Self { height, width }
    }

    /// Both sides within `1..=MAX_ASPECT_CELLS`.
    pub fn fits_grid(&self) -> bool {
        (1..=MAX_ASPECT_CELLS).contains(&self.height) && (1..=MAX_ASPECT_CELLS).contains(&self.width)
    }
}

const DEFAULT_ASPECT_RATIOS: [AspectRatio; 6] = [
    AspectRatio::new(1, 1),
    AspectRatio::new(1, 2),
    AspectRatio::new(1, 3),
    AspectRatio::new(2, 3),
    AspectRatio::new(4, 3),
    AspectRatio::new(3, 4),
];

const DEFAULT_COLORS: [&str; 16] = [
    "#FF5252", "#FF4081", "#E040FB", "#7C4DFF", "#536DFE", "#448AFF", "#40C4FF", "#18FFFF",
    "#64FFDA", "#69F0AE", "#B2FF59", "#EEFF41", "#FFFF00", "#FFD740", "#FFAB40", "#FF6E40",
];

const DEFAULT_LABELS: [&str; 10] = [
    "Grid", "Tile", "Box", "Cell", "Unit", "Block", "Piece", "Element", "Item", "Part",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cell_size must be positive and finite, got {0}")]
    CellSize(f64),
    #[error("cell_margin must be non-negative and finite, got {0}")]
    CellMargin(f64),
    #[error("max_rectangles must be at least 1")]
    NoCapacity,
    #[error("max_batch must be at least 1")]
    EmptyBatch,
    #[error("interval_ms must be non-negative and finite, got {0}")]
    Interval(f64),
    #[error("click_threshold must be non-negative and finite, got {0}")]
    ClickThreshold(f64),
    #[error("text_probability must lie in [0, 1], got {0}")]
    TextProbability(f64),
    #[error("aspect ratio {height}x{width} must lie between 1x1 and {max}x{max}", max = MAX_ASPECT_CELLS)]
    AspectRatio { height: i32, width: i32 },
    #[error("{0} palette is empty")]
    EmptyPalette(&'static str),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Visible side of one cell in pixels.
    pub cell_size: f64,
    /// Gutter on each side of a cell in pixels.
    pub cell_margin: f64,
    /// Live rectangle ceiling; the oldest is evicted past it.
    pub max_rectangles: usize,
    /// Upper bound of rectangles attempted per cycle (drawn from `1..=max_batch`).
    pub max_batch: usize,
    /// Minimum time between placement cycles while dragging.
    pub interval_ms: f64,
    pub fade_in_ms: u32,
    pub fade_out_ms: u32,
    /// Drag distance (|dx| + |dy| since the last press) above which clicks are ignored.
    pub click_threshold: f64,
    /// Chance a rectangle shows a text label rather than an image.
    pub text_probability: f64,
    pub aspect_ratios: Vec<AspectRatio>,
    pub colors: Vec<String>,
    pub labels: Vec<String>,
    pub image_urls: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            cell_margin: DEFAULT_CELL_MARGIN,
            max_rectangles: DEFAULT_MAX_RECTANGLES,
            max_batch: DEFAULT_MAX_BATCH,
            interval_ms: DEFAULT_INTERVAL_MS,
            fade_in_ms: DEFAULT_FADE_IN_MS,
            fade_out_ms: DEFAULT_FADE_OUT_MS,
            click_threshold: DEFAULT_CLICK_THRESHOLD,
            text_probability: DEFAULT_TEXT_PROBABILITY,
            aspect_ratios: DEFAULT_ASPECT_RATIOS.to_vec(),
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            labels: DEFAULT_LABELS.iter().map(|l| l.to_string()).collect(),
            image_urls: Vec::new(),
        }
    }
}

impl GridConfig {
    /// Parse and validate a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn effective_cell_size(&self) -> f64 {
        self.cell_size + self.cell_margin * 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.cell_margin.is_finite() && self.cell_margin >= 0.0) {
            return Err(ConfigError::CellMargin(self.cell_margin));
        }
        if self.max_rectangles == 0 {
            return Err(ConfigError::NoCapacity);
        }
        if self.max_batch == 0 {
            return Err(ConfigError::EmptyBatch);
        }
        if !is_non_negative(self.interval_ms) {
            return Err(ConfigError::Interval(self.interval_ms));
        }
        if !is_non_negative(self.click_threshold) {
            return Err(ConfigError::ClickThreshold(self.click_threshold));
        }
        if !(0.0..=1.0).contains(&self.text_probability) {
            return Err(ConfigError::TextProbability(self.text_probability));
        }
        if self.aspect_ratios.is_empty() {
            return Err(ConfigError::EmptyPalette("aspect ratio"));
        }
        if let Some(bad) = self.aspect_ratios.iter().find(|a| !a.fits_grid()) {
            return Err(ConfigError::AspectRatio {
                height: bad.height,
                width: bad.width,
            });
        }
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette("color"));
        }
        if self.labels.is_empty() && self.image_urls.is_empty() {
            return Err(ConfigError::EmptyPalette("content"));
        }
        Ok(())
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_cell_size(), 88.0);
        assert_eq!(config.aspect_ratios.len(), 6);
        assert_eq!(config.max_rectangles, 30);
    }

    #[test]
    fn partial_json_inherits_defaults() {
        let config = GridConfig::from_json(r#"{"max_rectangles": 12, "cell_margin": 0}"#)
            .expect("partial config should parse");
        assert_eq!(config.max_rectangles, 12);
        assert_eq!(config.cell_margin, 0.0);
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(config.labels.len(), 10);
    }

    #[test]
    fn aspect_ratios_parse_from_objects() {
        let config =
            GridConfig::from_json(r#"{"aspect_ratios": [{"height": 2, "width": 5}]}"#).unwrap();
        assert_eq!(config.aspect_ratios, vec![AspectRatio::new(2, 5)]);
    }

    #[test]
    fn json_dump_parses_back_to_the_same_config() {
        let config = GridConfig {
            image_urls: vec!["a.png".into()],
            ..GridConfig::default()
        };
        assert_eq!(GridConfig::from_json(&config.to_json()).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            GridConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            GridConfig::from_json(r#"{"cell_size": 0}"#),
            Err(ConfigError::CellSize(_))
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"cell_margin": -1}"#),
            Err(ConfigError::CellMargin(_))
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"max_rectangles": 0}"#),
            Err(ConfigError::NoCapacity)
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"max_batch": 0}"#),
            Err(ConfigError::EmptyBatch)
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"text_probability": 1.5}"#),
            Err(ConfigError::TextProbability(_))
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"aspect_ratios": [{"height": 0, "width": 2}]}"#),
            Err(ConfigError::AspectRatio { height: 0, width: 2 })
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"aspect_ratios": [{"height": 100000, "width": 100000}]}"#),
            Err(ConfigError::AspectRatio { height: 100000, width: 100000 })
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"colors": []}"#),
            Err(ConfigError::EmptyPalette("color"))
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"labels": [], "image_urls": []}"#),
            Err(ConfigError::EmptyPalette("content"))
        ));
    }

    #[test]
    fn aspect_ratio_bounds_are_inclusive() {
        assert!(AspectRatio::new(1, MAX_ASPECT_CELLS).fits_grid());
        assert!(AspectRatio::new(MAX_ASPECT_CELLS, MAX_ASPECT_CELLS).fits_grid());
        assert!(!AspectRatio::new(MAX_ASPECT_CELLS + 1, 1).fits_grid());
        assert!(!AspectRatio::new(1, 0).fits_grid());
    }

    #[test]
    fn labels_may_be_empty_when_images_exist() {
        let config = GridConfig::from_json(r#"{"labels": [], "image_urls": ["x.png"]}"#);
        assert!(config.is_ok());
    }
}
