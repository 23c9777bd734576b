//! The raw, loosely-typed description of a row/column tree as supplied by
//! the chart-composition layer.
//!
//! Sizes may be bare numbers or unit-suffixed strings, margins and padding
//! may be numbers, shorthand strings, or per-side maps. Nothing here is
//! validated; the normalizer turns these defs into the canonical
//! [`LayoutNode`](crate::node::LayoutNode) tree, degrading malformed values
//! to their defaults.

use chartgrid_style::{EdgesInput, HorizontalJustify, SizeInput, VerticalJustify};
use chartgrid_types::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Per-node render callback, invoked with the node's resolved rectangle and
/// its index among siblings (the repetition index for template children).
///
/// `Send + Sync` so an already-normalized tree can be laid out from multiple
/// threads when the callbacks themselves are reentrant.
#[derive(Clone)]
pub struct RenderFn(Arc<dyn Fn(Rect, usize) + Send + Sync>);

impl RenderFn {
    pub fn new(f: impl Fn(Rect, usize) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, rect: Rect, index: usize) {
        (self.0)(rect, index)
    }
}

impl fmt::Debug for RenderFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderFn")
    }
}

/// A vertical container arranging child rows top to bottom.
///
/// Children come either from `rows` or from `row_template` repeated
/// `num_rows` times; when both are present the template wins.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub width: Option<SizeInput>,
    #[serde(default)]
    pub height: Option<SizeInput>,
    #[serde(default)]
    pub margin: Option<EdgesInput>,
    #[serde(default)]
    pub padding: Option<EdgesInput>,
    #[serde(default)]
    pub rows: Option<Vec<RowDef>>,
    #[serde(default)]
    pub row_template: Option<Box<RowDef>>,
    #[serde(default)]
    pub num_rows: Option<usize>,
    #[serde(default)]
    pub row_justification: Option<VerticalJustify>,
    /// Marks this column as fill-eligible along its parent row's width.
    #[serde(default)]
    pub evenly_fill_available_width: bool,
    #[serde(skip)]
    pub render: Option<RenderFn>,
}

impl ColumnDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<SizeInput>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<SizeInput>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_margin(mut self, margin: impl Into<EdgesInput>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn with_padding(mut self, padding: impl Into<EdgesInput>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn with_rows(mut self, rows: Vec<RowDef>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_row_template(mut self, template: RowDef, count: usize) -> Self {
        self.row_template = Some(Box::new(template));
        self.num_rows = Some(count);
        self
    }

    pub fn with_row_justification(mut self, justification: VerticalJustify) -> Self {
        self.row_justification = Some(justification);
        self
    }

    pub fn fill_available_width(mut self) -> Self {
        self.evenly_fill_available_width = true;
        self
    }

    pub fn with_render(mut self, f: impl Fn(Rect, usize) + Send + Sync + 'static) -> Self {
        self.render = Some(RenderFn::new(f));
        self
    }
}

/// A horizontal container arranging child columns left to right.
/// The transpose of [`ColumnDef`].
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RowDef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub width: Option<SizeInput>,
    #[serde(default)]
    pub height: Option<SizeInput>,
    #[serde(default)]
    pub margin: Option<EdgesInput>,
    #[serde(default)]
    pub padding: Option<EdgesInput>,
    #[serde(default)]
    pub columns: Option<Vec<ColumnDef>>,
    #[serde(default)]
    pub column_template: Option<Box<ColumnDef>>,
    #[serde(default)]
    pub num_columns: Option<usize>,
    #[serde(default)]
    pub column_justification: Option<HorizontalJustify>,
    /// Marks this row as fill-eligible along its parent column's height.
    #[serde(default)]
    pub evenly_fill_available_height: bool,
    #[serde(skip)]
    pub render: Option<RenderFn>,
}

impl RowDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<SizeInput>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<SizeInput>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_margin(mut self, margin: impl Into<EdgesInput>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn with_padding(mut self, padding: impl Into<EdgesInput>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn with_columns(mut self, columns: Vec<ColumnDef>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_column_template(mut self, template: ColumnDef, count: usize) -> Self {
        self.column_template = Some(Box::new(template));
        self.num_columns = Some(count);
        self
    }

    pub fn with_column_justification(mut self, justification: HorizontalJustify) -> Self {
        self.column_justification = Some(justification);
        self
    }

    pub fn fill_available_height(mut self) -> Self {
        self.evenly_fill_available_height = true;
        self
    }

    pub fn with_render(mut self, f: impl Fn(Rect, usize) + Send + Sync + 'static) -> Self {
        self.render = Some(RenderFn::new(f));
        self
    }
}
