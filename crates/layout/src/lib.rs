//! Constraint-based box layout for chart regions.
//!
//! A declarative tree of nested rows and columns goes through three stages:
//! raw defs ([`def`]) are normalized into a canonical tree ([`normalize`]),
//! a bottom-up pass attaches intrinsic sizes ([`intrinsic`]), and a top-down
//! render pass ([`resolve`]) turns a concrete root rectangle into the flat
//! id → rect map, firing per-node callbacks along the way.

pub mod def;
pub mod intrinsic;
pub mod node;
pub mod normalize;
pub mod resolve;

pub use self::def::{ColumnDef, RenderFn, RowDef};
pub use self::intrinsic::resolve_intrinsic_size;
pub use self::node::{Children, LayoutNode, NodeKind};
pub use self::normalize::{normalize, normalize_row};
pub use self::resolve::{layout, layout_opt};

// Re-export geometry types used throughout to prevent type mismatches
pub use chartgrid_types::{Rect, Size};
