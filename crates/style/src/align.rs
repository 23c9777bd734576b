//! Defines enums for container axes and child justification.
use serde::{Deserialize, Serialize};

/// The axis along which a container arranges its children in sequence.
/// A row lays its columns out horizontally; a column lays its rows out
/// vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Axis-neutral placement rule for a sibling group along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justify {
    #[default]
    Start,
    End,
    Center,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum HorizontalJustify {
    #[default]
    Left,
    Right,
    Center,
}

impl From<HorizontalJustify> for Justify {
    fn from(value: HorizontalJustify) -> Self {
        match value {
            HorizontalJustify::Left => Justify::Start,
            HorizontalJustify::Right => Justify::End,
            HorizontalJustify::Center => Justify::Center,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum VerticalJustify {
    #[default]
    Top,
    Bottom,
    Center,
}

impl From<VerticalJustify> for Justify {
    fn from(value: VerticalJustify) -> Self {
        match value {
            VerticalJustify::Top => Justify::Start,
            VerticalJustify::Bottom => Justify::End,
            VerticalJustify::Center => Justify::Center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn justify_conversions() {
        assert_eq!(Justify::from(HorizontalJustify::Left), Justify::Start);
        assert_eq!(Justify::from(HorizontalJustify::Right), Justify::End);
        assert_eq!(Justify::from(VerticalJustify::Top), Justify::Start);
        assert_eq!(Justify::from(VerticalJustify::Bottom), Justify::End);
        assert_eq!(Justify::from(VerticalJustify::Center), Justify::Center);
    }

    #[test]
    fn axis_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }
}
