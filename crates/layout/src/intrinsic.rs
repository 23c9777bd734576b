//! Bottom-up intrinsic ("bounding") size pass.
//!
//! For every node this computes the natural size used as a fallback when no
//! explicit, percent, or fill sizing applies at render time. Percent sizes
//! and size-less templates stay unresolved (`None`): they are only
//! meaningful against a concrete parent rect, which exists in the render
//! pass alone. A node's stored bounding size excludes its own margins;
//! parents add child margins when summing.

use crate::node::{Children, LayoutNode};
use chartgrid_style::Axis;

/// Resolves bounding sizes in place for `node` and all descendants.
/// Children are resolved before their parents.
pub fn resolve_intrinsic_size(node: &mut LayoutNode) {
    match &mut node.children {
        Children::List(children) => {
            for child in children {
                resolve_intrinsic_size(child);
            }
        }
        Children::Template { node: template, .. } => {
            resolve_intrinsic_size(template);
        }
    }

    let width = axis_bounding(node, Axis::Horizontal);
    let height = axis_bounding(node, Axis::Vertical);
    node.set_bounding(Axis::Horizontal, width);
    node.set_bounding(Axis::Vertical, height);
}

fn axis_bounding(node: &LayoutNode, axis: Axis) -> Option<f32> {
    if let Some(px) = node.size(axis).as_px() {
        return Some(px);
    }
    // Percent stays deferred to render time.
    if !node.size(axis).is_auto() {
        return None;
    }

    let main = node.main_axis();
    match &node.children {
        Children::Template { node: template, count } => {
            if axis == main {
                // Repetitions stack along the main axis. Without an explicit
                // template size the extent depends on the available rect.
                template
                    .size(axis)
                    .as_px()
                    .map(|size| (size + template.margin.sum(axis)) * *count as f32)
            } else {
                template
                    .bounding(axis)
                    .map(|size| size + template.margin.sum(axis))
            }
        }
        Children::List(children) => {
            if children.is_empty() {
                // A childless node has no natural size; the render pass
                // falls back to the available extent on the cross axis.
                return None;
            }
            if axis == main {
                // A sum over nothing but deferred children is itself
                // deferred; otherwise deferred children contribute only
                // their margins.
                if children.iter().all(|c| c.bounding(axis).is_none()) {
                    return None;
                }
                Some(
                    children
                        .iter()
                        .map(|c| c.bounding(axis).unwrap_or(0.0) + c.margin.sum(axis))
                        .sum(),
                )
            } else {
                children
                    .iter()
                    .filter_map(|c| c.bounding(axis).map(|b| b + c.margin.sum(axis)))
                    .fold(None, |acc, v| Some(acc.map_or(v, |a: f32| a.max(v))))
            }
        }
    }
}
