//! ContentPalette - the random choices that dress a placed rectangle.

use crate::domain::config::{AspectRatio, GridConfig};
use crate::domain::random::RandomSource;
use crate::domain::rectangle::Content;

const FALLBACK_COLOR: &str = "#448AFF";
const FALLBACK_LABEL: &str = "Cell";

#[derive(Clone, Debug)]
pub struct ContentPalette {
    aspect_ratios: Vec<AspectRatio>,
    colors: Vec<String>,
    labels: Vec<String>,
    image_urls: Vec<String>,
    text_probability: f64,
}

impl ContentPalette {
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            aspect_ratios: config.aspect_ratios.clone(),
            colors: config.colors.clone(),
            labels: config.labels.clone(),
            image_urls: config.image_urls.clone(),
            text_probability: config.text_probability,
        }
    }

    pub fn aspect<G: RandomSource>(&self, rng: &mut G) -> AspectRatio {
        rng.pick(&self.aspect_ratios)
            .copied()
            .unwrap_or(AspectRatio::SQUARE)
    }

    pub fn color<G: RandomSource>(&self, rng: &mut G) -> String {
        rng.pick(&self.colors)
            .cloned()
            .unwrap_or_else(|| FALLBACK_COLOR.to_string())
    }

    /// Text with `text_probability`, otherwise an image. A missing list
    /// forces the other kind, and the coin is only tossed when both exist.
    pub fn content<G: RandomSource>(&self, rng: &mut G) -> Content {
        let wants_text = match (self.labels.is_empty(), self.image_urls.is_empty()) {
            (false, false) => rng.unit() < self.text_probability,
            (true, false) => false,
            _ => true,
        };

        if wants_text {
            let label = rng.pick(&self.labels).map(String::as_str).unwrap_or(FALLBACK_LABEL);
            Content::Text(label.to_string())
        } else {
            // image_urls is non-empty on this branch
            let url = rng.pick(&self.image_urls).cloned().unwrap_or_default();
            Content::Image(url)
        }
    }
}
