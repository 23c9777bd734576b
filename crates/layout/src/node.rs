//! The normalized, fully-owned layout tree.
//!
//! Built once by the normalizer from a raw def tree; read-only during the
//! render pass except for the bounding fields the intrinsic pass fills in.

use crate::def::RenderFn;
use chartgrid_style::{Axis, Dimension, Edges, Justify};

/// Represents the orientation of a layout node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Row,
    Column,
}

impl NodeKind {
    /// The axis along which this node arranges its children.
    pub fn main_axis(self) -> Axis {
        match self {
            NodeKind::Row => Axis::Horizontal,
            NodeKind::Column => Axis::Vertical,
        }
    }

    /// Lowercase name for log messages.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Row => "row",
            NodeKind::Column => "column",
        }
    }
}

/// The children of a normalized node: an explicit list or a single template
/// repeated `count` times. An empty list is the childless case.
#[derive(Debug, Clone)]
pub enum Children {
    List(Vec<LayoutNode>),
    Template { node: Box<LayoutNode>, count: usize },
}

impl Children {
    pub fn is_empty(&self) -> bool {
        match self {
            Children::List(children) => children.is_empty(),
            Children::Template { count, .. } => *count == 0,
        }
    }
}

/// A normalized row or column. Parent exclusively owns children, so the
/// tree is acyclic by construction.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub kind: NodeKind,
    pub id: Option<String>,
    pub width: Dimension,
    pub height: Dimension,
    /// Affects this node's placement within its parent, never its content.
    pub margin: Edges,
    /// Shrinks the rect made available to children, never the node's own rect.
    pub padding: Edges,
    /// Fill-eligible along the parent's main axis when no explicit size applies.
    pub fill: bool,
    /// Placement of the child group along this node's main axis.
    pub justify: Justify,
    pub children: Children,
    pub render: Option<RenderFn>,
    /// Intrinsic width, filled in by the bottom-up bounding pass. `None`
    /// means deferred to render time (percent sizes, size-less templates).
    pub bounding_width: Option<f32>,
    /// Intrinsic height; see `bounding_width`.
    pub bounding_height: Option<f32>,
}

impl LayoutNode {
    pub fn main_axis(&self) -> Axis {
        self.kind.main_axis()
    }

    /// The explicit size specification along `axis`.
    pub fn size(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn bounding(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.bounding_width,
            Axis::Vertical => self.bounding_height,
        }
    }

    pub(crate) fn set_bounding(&mut self, axis: Axis, value: Option<f32>) {
        match axis {
            Axis::Horizontal => self.bounding_width = value,
            Axis::Vertical => self.bounding_height = value,
        }
    }
}
