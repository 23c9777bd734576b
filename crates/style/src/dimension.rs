//! Defines primitives for size and spacing, plus the loose-typed input
//! wrappers that chart descriptions carry before normalization.
use crate::align::Axis;
use crate::parsers::{self, ValueParseError};
use chartgrid_types::Rect;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};

/// A resolved size specification for one axis.
///
/// `Auto` stands in for "absent": the layout passes fall through to fill
/// shares or intrinsic sizes when they meet it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    Px(f32),
    Percent(f32),
    #[default]
    Auto,
}

impl Dimension {
    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }

    pub fn as_px(&self) -> Option<f32> {
        match self {
            Dimension::Px(v) => Some(*v),
            _ => None,
        }
    }

    /// Resolves against a concrete available extent. `Auto` stays
    /// unresolved; percent is relative to `available`.
    pub fn resolve(&self, available: f32) -> Option<f32> {
        match self {
            Dimension::Px(v) => Some(*v),
            Dimension::Percent(p) => Some(p / 100.0 * available),
            Dimension::Auto => None,
        }
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Dimension::Px(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Percent(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Auto => {
                2u8.hash(state);
            }
        }
    }
}

impl Eq for Dimension {}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Dimension::Px(v) => serializer.serialize_str(&format!("{}px", v)),
            Dimension::Percent(v) => serializer.serialize_str(&format!("{}%", v)),
            Dimension::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DimensionVisitor;

        impl Visitor<'_> for DimensionVisitor {
            type Value = Dimension;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number or a string like \"120px\", \"35%\", or \"auto\"")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Dimension::Px(value as f32))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Dimension::Px(value as f32))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Dimension::Px(value as f32))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                // Unparseable strings degrade to Auto, matching the engine's
                // tolerance for loose inputs elsewhere.
                Ok(parsers::run_parser(parsers::parse_dimension, value)
                    .unwrap_or(Dimension::Auto))
            }
        }

        deserializer.deserialize_any(DimensionVisitor)
    }
}

/// A size as it arrives from the caller: a bare number (pixels) or a
/// unit-suffixed string like `"120px"` or `"35%"`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SizeInput {
    Number(f32),
    Text(String),
}

impl SizeInput {
    /// Parses the loose value into a `Dimension`. Bare numbers are pixels.
    pub fn parse(&self) -> Result<Dimension, ValueParseError> {
        match self {
            SizeInput::Number(v) => Ok(Dimension::Px(*v)),
            SizeInput::Text(s) => parsers::run_parser(parsers::parse_dimension, s),
        }
    }
}

impl From<f32> for SizeInput {
    fn from(value: f32) -> Self {
        SizeInput::Number(value)
    }
}

impl From<&str> for SizeInput {
    fn from(value: &str) -> Self {
        SizeInput::Text(value.to_string())
    }
}

/// Per-side spacing, used for both margins and padding. Unset sides are 0.
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Edges {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub left: f32,
}

impl Hash for Edges {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.top.to_bits().hash(state);
        self.right.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
        self.left.to_bits().hash(state);
    }
}

impl Eq for Edges {}

impl Edges {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn x(value: f32) -> Self {
        Self {
            top: 0.0,
            right: value,
            bottom: 0.0,
            left: value,
        }
    }

    pub fn y(value: f32) -> Self {
        Self {
            top: value,
            right: 0.0,
            bottom: value,
            left: 0.0,
        }
    }

    /// The leading edge along `axis` (left for horizontal, top for vertical).
    pub fn before(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// The trailing edge along `axis` (right for horizontal, bottom for vertical).
    pub fn after(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Total consumed extent along `axis`.
    pub fn sum(&self, axis: Axis) -> f32 {
        self.before(axis) + self.after(axis)
    }

    /// Insets a rectangle by these edges, clamping width and height so
    /// oversized edges never produce negative extents.
    pub fn deflate(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x + self.left,
            y: rect.y + self.top,
            width: (rect.width - self.left - self.right).max(0.0),
            height: (rect.height - self.top - self.bottom).max(0.0),
        }
    }
}

/// Margin/padding as it arrives from the caller: a single number applied to
/// all four sides, a shorthand string (1, 2, or 4 lengths), or a per-side
/// map with each side defaulting to 0.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EdgesInput {
    Uniform(f32),
    Shorthand(String),
    Sides(Edges),
}

impl EdgesInput {
    /// Normalizes the loose value into concrete `Edges`.
    pub fn normalize(&self) -> Result<Edges, ValueParseError> {
        match self {
            EdgesInput::Uniform(v) => Ok(Edges::all(*v)),
            EdgesInput::Shorthand(s) => parsers::parse_edges_shorthand(s),
            EdgesInput::Sides(edges) => Ok(*edges),
        }
    }

    /// Infallible variant for standalone callers that want the engine's
    /// degrade-to-default behavior (e.g. insetting a label background box).
    pub fn normalize_or_default(&self) -> Edges {
        self.normalize().unwrap_or_default()
    }
}

impl From<f32> for EdgesInput {
    fn from(value: f32) -> Self {
        EdgesInput::Uniform(value)
    }
}

impl From<Edges> for EdgesInput {
    fn from(value: Edges) -> Self {
        EdgesInput::Sides(value)
    }
}

impl From<&str> for EdgesInput {
    fn from(value: &str) -> Self {
        EdgesInput::Shorthand(value.to_string())
    }
}
