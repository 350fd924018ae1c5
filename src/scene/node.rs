//! Scene nodes deserialized from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{FontName, Mixed, NodeKind, NodeView, Paint};

/// Node types that own children.
const CONTAINER_TYPES: &[&str] = &[
    "FRAME",
    "GROUP",
    "COMPONENT",
    "COMPONENT_SET",
    "INSTANCE",
    "SECTION",
    "PAGE",
    "BOOLEAN_OPERATION",
];

const IDENTITY_TRANSFORM: [[f64; 3]; 2] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

fn identity_transform() -> [[f64; 3]; 2] {
    IDENTITY_TRANSFORM
}

fn default_font_name() -> Mixed<FontName> {
    Mixed::Uniform(FontName::new("Inter", "Regular"))
}

/// A font weight as written in a scene: numeric or a named style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightValue {
    /// Numeric weight, e.g. `700`
    Numeric(f64),
    /// Named weight, e.g. `"Bold"`; not thresholded
    Named(String),
}

/// Font of a character range within a mixed text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontRange {
    /// First character index
    pub start: usize,
    /// One past the last character index
    pub end: usize,
    /// Font applied to the range
    pub font: FontName,
}

/// One node of a scene tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Stable identifier, e.g. `1:2`
    #[serde(default)]
    pub id: String,

    /// Layer name
    #[serde(default)]
    pub name: String,

    /// Node type tag, e.g. `FRAME` or `TEXT`
    #[serde(rename = "type")]
    pub node_type: String,

    /// 2x3 affine transform to document space
    #[serde(default = "identity_transform")]
    pub absolute_transform: [[f64; 3]; 2],

    /// Width in document units
    #[serde(default)]
    pub width: f64,

    /// Height in document units
    #[serde(default)]
    pub height: f64,

    /// Overrides raster export capability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exportable: Option<bool>,

    /// Child nodes in paint order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,

    /// Text content
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub characters: String,

    /// Font size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Mixed<f64>>,

    /// Font weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Mixed<WeightValue>>,

    /// Font of the whole run
    #[serde(default = "default_font_name")]
    pub font_name: Mixed<FontName>,

    /// Per-range fonts of a mixed run
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub range_fonts: Vec<FontRange>,

    /// Fill list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Mixed<Vec<Paint>>>,
}

impl SceneNode {
    /// Create a node of the given type.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            node_type: node_type.into(),
            absolute_transform: IDENTITY_TRANSFORM,
            width: 0.0,
            height: 0.0,
            exportable: None,
            children: Vec::new(),
            characters: String::new(),
            font_size: None,
            font_weight: None,
            font_name: default_font_name(),
            range_fonts: Vec::new(),
            fills: None,
        }
    }

    /// Create a text node.
    pub fn text(characters: impl Into<String>) -> Self {
        Self {
            characters: characters.into(),
            ..Self::new("TEXT")
        }
    }

    /// Create a frame with children.
    pub fn frame(children: Vec<SceneNode>) -> Self {
        Self {
            children,
            ..Self::new("FRAME")
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the absolute position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.absolute_transform[0][2] = x;
        self.absolute_transform[1][2] = y;
        self
    }

    /// Set the size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set a uniform font size and numeric weight.
    pub fn with_font(mut self, size: f64, weight: f64) -> Self {
        self.font_size = Some(Mixed::Uniform(size));
        self.font_weight = Some(Mixed::Uniform(WeightValue::Numeric(weight)));
        self
    }

    /// Set a uniform font name.
    pub fn with_font_name(mut self, family: &str, style: &str) -> Self {
        self.font_name = Mixed::Uniform(FontName::new(family, style));
        self
    }

    /// Set the fill list.
    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = Some(Mixed::Uniform(fills));
        self
    }

    /// Find a node by id in this subtree, depth first.
    pub fn find(&self, id: &str) -> Option<&SceneNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Count nodes of the given kind in this subtree.
    pub fn count(&self, kind: NodeKind) -> usize {
        let own = usize::from(self.kind() == kind);
        own + self.children.iter().map(|c| c.count(kind)).sum::<usize>()
    }
}

impl NodeView for SceneNode {
    fn kind(&self) -> NodeKind {
        match self.node_type.as_str() {
            "TEXT" => NodeKind::Text,
            t if CONTAINER_TYPES.contains(&t) => NodeKind::Container,
            _ => NodeKind::Other,
        }
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_exportable(&self) -> bool {
        self.exportable.unwrap_or(self.node_type != "PAGE")
    }

    fn absolute_position(&self) -> (f64, f64) {
        (self.absolute_transform[0][2], self.absolute_transform[1][2])
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn characters(&self) -> &str {
        &self.characters
    }

    fn font_size(&self) -> Option<Mixed<f64>> {
        self.font_size
    }

    fn font_weight(&self) -> Option<Mixed<f64>> {
        match self.font_weight.as_ref()? {
            Mixed::Uniform(WeightValue::Numeric(weight)) => Some(Mixed::Uniform(*weight)),
            Mixed::Uniform(WeightValue::Named(_)) => None,
            Mixed::Mixed => Some(Mixed::Mixed),
        }
    }

    fn font_name(&self) -> Mixed<FontName> {
        self.font_name.clone()
    }

    fn range_font_name(&self, start: usize, end: usize) -> Result<FontName> {
        let len = self.characters.chars().count();
        if start >= end || end > len {
            return Err(Error::TextExtract(format!(
                "range {}..{} out of bounds for {} characters",
                start, end, len
            )));
        }

        if let Mixed::Uniform(font) = &self.font_name {
            return Ok(font.clone());
        }

        self.range_fonts
            .iter()
            .find(|r| r.start <= start && end <= r.end)
            .map(|r| r.font.clone())
            .ok_or_else(|| Error::TextExtract(format!("no font for range {}..{}", start, end)))
    }

    fn fills(&self) -> Option<Mixed<&[Paint]>> {
        self.fills
            .as_ref()
            .map(|fills| fills.as_ref().map(Vec::as_slice))
    }
}
