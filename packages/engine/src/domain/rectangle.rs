use serde::Serialize;

use crate::spatial::grid::Footprint;

/// Opaque handle tying a rectangle record to its visual in the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RectId(u32);

impl RectId {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Content {
    Text(String),
    Image(String),
}

/// A placed rectangle. Position and size are world pixels; `footprint` is
/// the block of grid cells it holds in the occupancy set.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub id: RectId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub footprint: Footprint,
    pub color: String,
    pub content: Content,
}

impl Rectangle {
    pub fn grid_width(&self) -> i32 {
        self.footprint.width
    }

    pub fn grid_height(&self) -> i32 {
        self.footprint.height
    }

    pub fn details(&self) -> RectangleDetails {
        let content = match &self.content {
            Content::Text(label) => format!("Text Content: {}", label),
            Content::Image(_) => "Image Content".to_string(),
        };
        RectangleDetails {
            id: self.id.raw(),
            content,
            size: format!("Size: {}x{}", self.grid_width(), self.grid_height()),
            grid_width: self.grid_width(),
            grid_height: self.grid_height(),
            color: self.color.clone(),
        }
    }
}

/// What the detail popup shows for a clicked rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RectangleDetails {
    pub id: u32,
    pub content: String,
    pub size: String,
    pub grid_width: i32,
    pub grid_height: i32,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(content: Content) -> Rectangle {
        Rectangle {
            id: RectId::from_raw(4),
            x: 4.0,
            y: 92.0,
            width: 256.0,
            height: 80.0,
            footprint: Footprint::new(0, 1, 3, 1),
            color: "#FF5252".into(),
            content,
        }
    }

    #[test]
    fn text_details_name_the_label_and_grid_size() {
        let details = rect(Content::Text("Tile".into())).details();
        assert_eq!(details.content, "Text Content: Tile");
        assert_eq!(details.size, "Size: 3x1");
        assert_eq!(details.id, 4);
    }

    #[test]
    fn image_details_hide_the_url() {
        let details = rect(Content::Image("cat.png".into())).details();
        assert_eq!(details.content, "Image Content");
    }

    #[test]
    fn details_serialize_for_the_host() {
        let json = serde_json::to_string(&rect(Content::Text("Box".into())).details()).unwrap();
        assert!(json.contains(r#""size":"Size: 3x1""#));
        assert!(json.contains(r#""grid_width":3"#));
    }

    #[test]
    fn content_serializes_tagged() {
        let json = serde_json::to_string(&Content::Image("a.png".into())).unwrap();
        assert_eq!(json, r#"{"kind":"image","value":"a.png"}"#);
    }
}
