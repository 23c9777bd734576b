//! Turns raw def trees into canonical [`LayoutNode`] trees.
//!
//! Parsing of loose size and spacing values happens here; malformed values
//! never fail the normalization, they degrade to absent/default with a
//! warning. After building the tree the intrinsic-size pass is run on the
//! root, so a normalized tree is always ready for layout.

use crate::def::{ColumnDef, RowDef};
use crate::intrinsic::resolve_intrinsic_size;
use crate::node::{Children, LayoutNode, NodeKind};
use chartgrid_style::{Dimension, Edges, EdgesInput, Justify, SizeInput};
use log::warn;

/// Normalizes a column def tree. The input is never mutated; the returned
/// tree is fully owned and already carries intrinsic sizes.
pub fn normalize(def: &ColumnDef) -> LayoutNode {
    let mut root = build_column(def);
    resolve_intrinsic_size(&mut root);
    root
}

/// Row-rooted variant of [`normalize`].
pub fn normalize_row(def: &RowDef) -> LayoutNode {
    let mut root = build_row(def);
    resolve_intrinsic_size(&mut root);
    root
}

fn build_column(def: &ColumnDef) -> LayoutNode {
    let children = if let Some(template) = &def.row_template {
        if def.rows.is_some() {
            warn_dual_children(NodeKind::Column, def.id.as_deref());
        }
        Children::Template {
            node: Box::new(build_row(template)),
            count: def.num_rows.unwrap_or(0),
        }
    } else {
        Children::List(
            def.rows
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(build_row)
                .collect(),
        )
    };

    let width = parse_size(def.width.as_ref(), "width", def.id.as_deref());
    if def.evenly_fill_available_width && !width.is_auto() {
        warn_fill_conflict(NodeKind::Column, def.id.as_deref(), "width");
    }

    LayoutNode {
        kind: NodeKind::Column,
        id: def.id.clone(),
        width,
        height: parse_size(def.height.as_ref(), "height", def.id.as_deref()),
        margin: parse_edges(def.margin.as_ref(), "margin", def.id.as_deref()),
        padding: parse_edges(def.padding.as_ref(), "padding", def.id.as_deref()),
        fill: def.evenly_fill_available_width,
        justify: def
            .row_justification
            .clone()
            .map(Justify::from)
            .unwrap_or_default(),
        children,
        render: def.render.clone(),
        bounding_width: None,
        bounding_height: None,
    }
}

fn build_row(def: &RowDef) -> LayoutNode {
    let children = if let Some(template) = &def.column_template {
        if def.columns.is_some() {
            warn_dual_children(NodeKind::Row, def.id.as_deref());
        }
        Children::Template {
            node: Box::new(build_column(template)),
            count: def.num_columns.unwrap_or(0),
        }
    } else {
        Children::List(
            def.columns
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(build_column)
                .collect(),
        )
    };

    let height = parse_size(def.height.as_ref(), "height", def.id.as_deref());
    if def.evenly_fill_available_height && !height.is_auto() {
        warn_fill_conflict(NodeKind::Row, def.id.as_deref(), "height");
    }

    LayoutNode {
        kind: NodeKind::Row,
        id: def.id.clone(),
        width: parse_size(def.width.as_ref(), "width", def.id.as_deref()),
        height,
        margin: parse_edges(def.margin.as_ref(), "margin", def.id.as_deref()),
        padding: parse_edges(def.padding.as_ref(), "padding", def.id.as_deref()),
        fill: def.evenly_fill_available_height,
        justify: def
            .column_justification
            .clone()
            .map(Justify::from)
            .unwrap_or_default(),
        children,
        render: def.render.clone(),
        bounding_width: None,
        bounding_height: None,
    }
}

fn warn_dual_children(kind: NodeKind, id: Option<&str>) {
    warn!(
        "{} {:?} specifies both an explicit child list and a template; the template wins",
        kind.as_str(),
        id
    );
}

fn warn_fill_conflict(kind: NodeKind, id: Option<&str>, field: &str) {
    warn!(
        "{} {:?} has both an explicit {field} and a fill flag; the explicit {field} wins",
        kind.as_str(),
        id
    );
}

fn parse_size(input: Option<&SizeInput>, field: &str, id: Option<&str>) -> Dimension {
    match input {
        None => Dimension::Auto,
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("ignoring unparseable {} on node {:?}: {}", field, id, e);
            Dimension::Auto
        }),
    }
}

fn parse_edges(input: Option<&EdgesInput>, field: &str, id: Option<&str>) -> Edges {
    match input {
        None => Edges::default(),
        Some(value) => value.normalize().unwrap_or_else(|e| {
            warn!("ignoring unparseable {} on node {:?}: {}", field, id, e);
            Edges::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartgrid_style::VerticalJustify;

    #[test]
    fn normalizes_sizes_and_edges() {
        let def = ColumnDef::new()
            .with_id("root")
            .with_width("50%")
            .with_height(300.0)
            .with_margin("4 8")
            .with_padding(10.0);

        let node = normalize(&def);
        assert_eq!(node.kind, NodeKind::Column);
        assert_eq!(node.width, Dimension::Percent(50.0));
        assert_eq!(node.height, Dimension::Px(300.0));
        assert_eq!(node.margin, Edges {
            top: 4.0,
            right: 8.0,
            bottom: 4.0,
            left: 8.0
        });
        assert_eq!(node.padding, Edges::all(10.0));
    }

    #[test]
    fn malformed_size_degrades_to_auto() {
        let def = ColumnDef::new().with_width("wide");
        let node = normalize(&def);
        assert!(node.width.is_auto());
    }

    #[test]
    fn malformed_edges_degrade_to_zero() {
        let def = ColumnDef::new().with_margin("1 2 3");
        let node = normalize(&def);
        assert_eq!(node.margin, Edges::default());
    }

    #[test]
    fn template_wins_over_explicit_children() {
        let def = ColumnDef::new()
            .with_rows(vec![RowDef::new().with_id("listed")])
            .with_row_template(RowDef::new().with_id("templated"), 2);

        let node = normalize(&def);
        match &node.children {
            Children::Template { node: t, count } => {
                assert_eq!(*count, 2);
                assert_eq!(t.id.as_deref(), Some("templated"));
            }
            Children::List(_) => panic!("expected template children"),
        }
    }

    #[test]
    fn justification_defaults_to_start() {
        let node = normalize(&ColumnDef::new());
        assert_eq!(node.justify, Justify::Start);

        let node = normalize(
            &ColumnDef::new().with_row_justification(VerticalJustify::Bottom),
        );
        assert_eq!(node.justify, Justify::End);
    }

    #[test]
    fn recurses_depth_first_into_children() {
        let def = ColumnDef::new().with_rows(vec![
            RowDef::new().with_columns(vec![ColumnDef::new().with_id("inner")]),
        ]);

        let node = normalize(&def);
        let Children::List(rows) = &node.children else {
            panic!("expected list children");
        };
        let Children::List(columns) = &rows[0].children else {
            panic!("expected list children");
        };
        assert_eq!(columns[0].id.as_deref(), Some("inner"));
        assert_eq!(columns[0].kind, NodeKind::Column);
    }

    #[test]
    fn template_without_count_produces_no_children() {
        let def = ColumnDef::new().with_row_template(RowDef::new(), 0);
        let node = normalize(&def);
        assert!(node.children.is_empty());
    }
}
