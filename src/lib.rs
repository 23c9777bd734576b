//! chartgrid — constraint-based row/column box layout for chart regions.
//!
//! Converts a declarative tree of nested horizontal/vertical containers with
//! fixed, percent, or fill sizing, margins, padding, and optional repeated
//! child templates into a flat map of absolute rectangles. Every visual
//! region of a chart (title, axis labels, plot area, legend, navigator
//! strip) can be positioned from one such tree.
//!
//! ```
//! use chartgrid::{layout, normalize, ColumnDef, Rect, RowDef};
//!
//! let chart = ColumnDef::new().with_rows(vec![
//!     RowDef::new().with_id("title").with_height(40.0),
//!     RowDef::new().with_id("plot").fill_available_height(),
//! ]);
//!
//! let tree = normalize(&chart);
//! let rects = layout(Rect::new(0.0, 0.0, 800.0, 600.0), &tree);
//!
//! assert_eq!(rects["plot"], Rect::new(0.0, 40.0, 800.0, 560.0));
//! ```

pub use chartgrid_layout::{
    Children, ColumnDef, LayoutNode, NodeKind, RenderFn, RowDef, layout, layout_opt, normalize,
    normalize_row, resolve_intrinsic_size,
};
pub use chartgrid_style::{
    Axis, Dimension, Edges, EdgesInput, HorizontalJustify, Justify, SizeInput, ValueParseError,
    VerticalJustify,
};
pub use chartgrid_types::{Rect, Size};

/// Re-exported so callers can build JSON values for [`from_json`] without
/// pinning their own copy of the crate.
pub use serde_json;

/// Deserializes a column-rooted chart description from JSON.
///
/// Loose value forms are kept as-is here; parsing and degradation happen in
/// [`normalize`].
pub fn from_json(json: &str) -> Result<ColumnDef, serde_json::Error> {
    serde_json::from_str(json)
}

/// Row-rooted variant of [`from_json`].
pub fn row_from_json(json: &str) -> Result<RowDef, serde_json::Error> {
    serde_json::from_str(json)
}
