//! Top-down render pass.
//!
//! Given a concrete rectangle for the root, computes every descendant's
//! rectangle, fires render callbacks in depth-first sibling order, and
//! accumulates the flat id → rect map. The pass is pure apart from the
//! caller-supplied callbacks: no state survives between invocations, and
//! identical inputs produce identical maps and callback sequences.
//!
//! Main-axis size priority for explicit children: pixels, percent of the
//! parent's content rect, an even share of leftover space for fill-eligible
//! children, then the intrinsic bounding size. The cross axis resolves
//! independently to pixels, percent, bounding, or the full available extent.

use crate::node::{Children, LayoutNode};
use chartgrid_style::{Axis, Dimension, Justify};
use chartgrid_types::Rect;
use std::collections::HashMap;

/// Lays out `node` within `rect`, returning the id → rect map.
///
/// The node's own id is not added; the caller already holds the root rect.
pub fn layout(rect: Rect, node: &LayoutNode) -> HashMap<String, Rect> {
    let mut out = HashMap::new();
    layout_into(rect, node, 0, &mut out);
    out
}

/// Null-tolerant entry: an absent root yields an empty map and no callbacks.
pub fn layout_opt(rect: Rect, node: Option<&LayoutNode>) -> HashMap<String, Rect> {
    match node {
        Some(node) => layout(rect, node),
        None => HashMap::new(),
    }
}

fn layout_into(rect: Rect, node: &LayoutNode, index: usize, out: &mut HashMap<String, Rect>) {
    if let Some(render) = &node.render {
        render.call(rect, index);
    }

    let inner = node.padding.deflate(rect);
    match &node.children {
        Children::Template { node: template, count } if *count > 0 => {
            layout_template(inner, node, template, *count, out);
        }
        Children::Template { .. } => {}
        Children::List(children) => layout_list(inner, node, children, out),
    }
}

fn layout_list(inner: Rect, node: &LayoutNode, children: &[LayoutNode], out: &mut HashMap<String, Rect>) {
    let main = node.main_axis();
    let cross = main.cross();
    let inner_main = extent(inner, main);
    let inner_cross = extent(inner, cross);

    // First sweep: resolve main-axis sizes. `None` marks a fill-eligible
    // child whose share is only known once the explicit total is.
    let mut sizes: Vec<Option<f32>> = Vec::with_capacity(children.len());
    let mut total = 0.0;
    let mut fill_count = 0usize;
    for child in children {
        let explicit = match child.size(main) {
            Dimension::Px(w) => Some(w),
            Dimension::Percent(p) => {
                Some((p / 100.0 * inner_main - child.margin.sum(main)).max(0.0))
            }
            Dimension::Auto => None,
        };
        let resolved = match explicit {
            Some(size) => Some(size),
            None if child.fill => None,
            None => Some(child.bounding(main).unwrap_or(0.0)),
        };
        total += resolved.unwrap_or(0.0) + child.margin.sum(main);
        if resolved.is_none() {
            fill_count += 1;
        }
        sizes.push(resolved);
    }

    let leftover = (inner_main - total).max(0.0);
    let fill_share = if fill_count > 0 {
        leftover / fill_count as f32
    } else {
        0.0
    };

    // Fill consumes all leftover, so justification only applies without it.
    let start = if fill_count > 0 {
        0.0
    } else {
        match node.justify {
            Justify::Start => 0.0,
            Justify::End => leftover,
            Justify::Center => leftover / 2.0,
        }
    };

    let mut cursor = origin(inner, main) + start;
    for (i, child) in children.iter().enumerate() {
        let main_size = sizes[i].unwrap_or(fill_share).max(0.0);
        let cross_size = resolve_cross(child, cross, inner_cross);

        cursor += child.margin.before(main);
        let cross_pos = origin(inner, cross) + child.margin.before(cross);
        let child_rect = axis_rect(main, cursor, cross_pos, main_size, cross_size);

        layout_into(child_rect, child, i, out);
        if let Some(id) = &child.id {
            out.insert(id.clone(), child_rect);
        }
        cursor += main_size + child.margin.after(main);
    }
}

fn layout_template(
    inner: Rect,
    node: &LayoutNode,
    template: &LayoutNode,
    count: usize,
    out: &mut HashMap<String, Rect>,
) {
    let main = node.main_axis();
    let cross = main.cross();
    let inner_main = extent(inner, main);
    let inner_cross = extent(inner, cross);
    let margin_sum = template.margin.sum(main);

    let main_size = match template.size(main) {
        Dimension::Px(w) => w.max(0.0),
        Dimension::Percent(p) => (p / 100.0 * inner_main - margin_sum).max(0.0),
        Dimension::Auto => {
            let available = inner_main - margin_sum * count as f32;
            available.max(0.0) / count as f32
        }
    };
    // Repetitions stack along one axis only, so the cross extent is fully
    // available to each of them.
    let cross_size = resolve_cross(template, cross, inner_cross);
    let cross_pos = origin(inner, cross) + template.margin.before(cross);

    let mut cursor = origin(inner, main);
    for i in 0..count {
        cursor += template.margin.before(main);
        let child_rect = axis_rect(main, cursor, cross_pos, main_size, cross_size);

        layout_into(child_rect, template, i, out);
        if let Some(id) = &template.id {
            out.insert(format!("{}-{}", id, i), child_rect);
        }
        cursor += main_size + template.margin.after(main);
    }
}

fn resolve_cross(child: &LayoutNode, cross: Axis, inner_cross: f32) -> f32 {
    match child.size(cross) {
        Dimension::Px(w) => w.max(0.0),
        Dimension::Percent(p) => (p / 100.0 * inner_cross - child.margin.sum(cross)).max(0.0),
        Dimension::Auto => child
            .bounding(cross)
            .unwrap_or_else(|| inner_cross - child.margin.sum(cross))
            .max(0.0),
    }
}

fn origin(rect: Rect, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => rect.x,
        Axis::Vertical => rect.y,
    }
}

fn extent(rect: Rect, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => rect.width,
        Axis::Vertical => rect.height,
    }
}

fn axis_rect(main: Axis, main_pos: f32, cross_pos: f32, main_size: f32, cross_size: f32) -> Rect {
    match main {
        Axis::Horizontal => Rect::new(main_pos, cross_pos, main_size, cross_size),
        Axis::Vertical => Rect::new(cross_pos, main_pos, cross_size, main_size),
    }
}
