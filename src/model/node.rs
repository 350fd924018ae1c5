//! Read-only view over a host's visual tree.
//!
//! The extraction engine never depends on a concrete tree type; hosts
//! implement [`NodeView`] for their own nodes (see [`crate::scene`] for the
//! JSON scene host).

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An attribute that is either uniform across a text run or varies per
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mixed<T> {
    /// The same value applies to every character.
    Uniform(T),
    /// Different characters carry different values.
    Mixed,
}

impl<T> Mixed<T> {
    /// The uniform value, if any.
    pub fn as_uniform(&self) -> Option<&T> {
        match self {
            Mixed::Uniform(value) => Some(value),
            Mixed::Mixed => None,
        }
    }

    /// Consume and return the uniform value, if any.
    pub fn into_uniform(self) -> Option<T> {
        match self {
            Mixed::Uniform(value) => Some(value),
            Mixed::Mixed => None,
        }
    }

    /// Check if the attribute varies across characters.
    pub fn is_mixed(&self) -> bool {
        matches!(self, Mixed::Mixed)
    }

    /// Borrow the inner value.
    pub fn as_ref(&self) -> Mixed<&T> {
        match self {
            Mixed::Uniform(value) => Mixed::Uniform(value),
            Mixed::Mixed => Mixed::Mixed,
        }
    }

    /// Map the uniform value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Mixed<U> {
        match self {
            Mixed::Uniform(value) => Mixed::Uniform(f(value)),
            Mixed::Mixed => Mixed::Mixed,
        }
    }
}

/// Marker used on the wire for mixed attributes: the string `"mixed"`.
const MIXED_MARKER: &str = "mixed";

#[derive(Deserialize)]
enum MixedMarker {
    #[serde(rename = "mixed")]
    Mixed,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MixedRepr<T> {
    Marker(MixedMarker),
    Value(T),
}

impl<T: Serialize> Serialize for Mixed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Mixed::Uniform(value) => value.serialize(serializer),
            Mixed::Mixed => serializer.serialize_str(MIXED_MARKER),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Mixed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match MixedRepr::<T>::deserialize(deserializer)? {
            MixedRepr::Marker(MixedMarker::Mixed) => Mixed::Mixed,
            MixedRepr::Value(value) => Mixed::Uniform(value),
        })
    }
}

/// Coarse node category as seen by the extraction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A text leaf
    Text,
    /// A node owning an ordered list of children
    Container,
    /// Anything else (shapes, vectors, images); skipped during extraction
    Other,
}

/// A font family and style pair, e.g. `Inter` / `Bold Italic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    /// Font family
    pub family: String,
    /// Style name within the family
    pub style: String,
}

impl FontName {
    /// Create a font name.
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// Check if the style name denotes an italic face.
    pub fn is_italic(&self) -> bool {
        self.style.to_lowercase().contains("italic")
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Rgb {
    /// Create a color from components.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// A fill entry of a node's paint list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    /// Flat color fill
    Solid {
        /// Fill color
        color: Rgb,
        /// Paint opacity; fully opaque when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opacity: Option<f32>,
    },
    /// Linear gradient
    GradientLinear,
    /// Radial gradient
    GradientRadial,
    /// Angular gradient
    GradientAngular,
    /// Diamond gradient
    GradientDiamond,
    /// Image fill
    Image,
    /// Video fill
    Video,
    /// Unrecognized paint type
    #[serde(other)]
    Other,
}

impl Paint {
    /// Create a solid paint.
    pub fn solid(color: Rgb, opacity: Option<f32>) -> Self {
        Paint::Solid { color, opacity }
    }
}

/// Read-only capability over one node of a host's visual tree.
///
/// Text attribute accessors are only consulted for nodes whose
/// [`kind`](NodeView::kind) is [`NodeKind::Text`].
pub trait NodeView: Sized {
    /// Node category.
    fn kind(&self) -> NodeKind;

    /// Children in paint order. Empty for leaves.
    fn children(&self) -> &[Self];

    /// Human-readable node name, used in diagnostics.
    fn name(&self) -> &str {
        ""
    }

    /// Whether the host can rasterize this node.
    fn is_exportable(&self) -> bool;

    /// Top-left translation of the absolute transform, in document units.
    fn absolute_position(&self) -> (f64, f64);

    /// Width and height, in document units.
    fn size(&self) -> (f64, f64);

    /// Character content of a text node.
    fn characters(&self) -> &str;

    /// Font size; `None` when the host does not expose one.
    fn font_size(&self) -> Option<Mixed<f64>>;

    /// Numeric font weight; `None` when unavailable or categorical.
    fn font_weight(&self) -> Option<Mixed<f64>>;

    /// Font of the run.
    fn font_name(&self) -> Mixed<FontName>;

    /// Font of the characters in `start..end`.
    fn range_font_name(&self, start: usize, end: usize) -> Result<FontName>;

    /// Fill list; `None` when the node has no fills attribute.
    fn fills(&self) -> Option<Mixed<&[Paint]>>;
}
