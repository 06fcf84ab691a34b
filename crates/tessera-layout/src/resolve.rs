//! Frame resolution for compiled view trees.
//!
//! Stands in for the host's layout engine so that compiled items can be
//! measured and inspected. Stacks arrange their children along the main axis
//! with per-child spacing, distribute any extra main-axis space to flexible
//! fillers, and align children on the cross axis. Constraint-positioned
//! children of plain containers follow their edge constraints.

use tessera_core::{Alignment, Axis, Size};

use crate::text::measure_text;
use crate::tree::{Bounds, StackStyle, ViewConstraint, ViewKind, ViewNodeId, ViewTree};

/// Resolve frames below `root` for a given width. Returns the resolved height.
pub fn resolve_frames(tree: &mut ViewTree, root: ViewNodeId, width: f64) -> f64 {
    let size = measure(tree, root, width);
    place(tree, root, Bounds::new(0.0, 0.0, width, size.height));
    tree.compute_absolute_bounds(root);
    size.height
}

/// Size a view wants when offered `width`.
fn measure(tree: &ViewTree, id: ViewNodeId, width: f64) -> Size {
    let Some(node) = tree.get(id) else {
        return Size::default();
    };
    let intrinsic = match &node.kind {
        ViewKind::Stack(style) => {
            let arranged = arrange(tree, &node.children, style, width);
            stack_size(style, &arranged, width)
        }
        ViewKind::Container => {
            let height = node
                .children
                .iter()
                .map(|child| {
                    let inset = edge_inset(tree, *child).unwrap_or(0.0);
                    measure(tree, *child, (width - 2.0 * inset).max(0.0)).height + 2.0 * inset
                })
                .fold(0.0_f64, f64::max);
            Size::new(width, height)
        }
        ViewKind::Label(style) => {
            let metrics = measure_text(&style.text, &style.font, Some(width), style.max_lines);
            Size::new(metrics.width.min(width), metrics.height)
        }
        ViewKind::Image(_) | ViewKind::Blur { .. } | ViewKind::Overlay => Size::new(width, 0.0),
        ViewKind::Spacer => Size::default(),
    };
    apply_constraints(intrinsic, &node.constraints)
}

fn apply_constraints(mut size: Size, constraints: &[ViewConstraint]) -> Size {
    for constraint in constraints {
        match *constraint {
            ViewConstraint::FixedSize(fixed) => size = fixed,
            ViewConstraint::Height(height) => size.height = height,
            ViewConstraint::MinHeight(min) => size.height = size.height.max(min),
            ViewConstraint::AspectRatio(ratio) => size.height = size.width / ratio,
            ViewConstraint::EdgesToSuperview { .. } | ViewConstraint::LeadingEdges => {}
        }
    }
    size
}

fn edge_inset(tree: &ViewTree, id: ViewNodeId) -> Option<f64> {
    tree.get(id)?.constraints.iter().find_map(|c| match c {
        ViewConstraint::EdgesToSuperview { inset } => Some(*inset),
        _ => None,
    })
}

/// Whether a child keeps its own main-axis width in a horizontal stack.
fn has_fixed_width(tree: &ViewTree, id: ViewNodeId) -> bool {
    tree.get(id).is_some_and(|n| {
        n.kind == ViewKind::Spacer || n.constraints.iter().any(|c| matches!(c, ViewConstraint::FixedSize(_)))
    })
}

fn is_flexible_space(tree: &ViewTree, id: ViewNodeId) -> bool {
    tree.get(id).is_some_and(|n| {
        n.kind == ViewKind::Spacer && n.constraints.iter().any(|c| matches!(c, ViewConstraint::MinHeight(_)))
    })
}

/// Measured size of each arranged child.
fn arrange(tree: &ViewTree, children: &[ViewNodeId], style: &StackStyle, width: f64) -> Vec<(ViewNodeId, Size)> {
    let content_width = (width - style.padding.horizontal()).max(0.0);
    match style.axis {
        Axis::Vertical => children
            .iter()
            .map(|child| (*child, measure(tree, *child, content_width)))
            .collect(),
        Axis::Horizontal => {
            let total_gap = total_gap(style, children);
            let fixed: Vec<Option<Size>> = children
                .iter()
                .map(|child| has_fixed_width(tree, *child).then(|| measure(tree, *child, content_width)))
                .collect();
            let total_fixed: f64 = fixed.iter().flatten().map(|s| s.width).sum();
            let flexible = fixed.iter().filter(|s| s.is_none()).count();
            let flex_width = if flexible > 0 {
                (content_width - total_fixed - total_gap).max(0.0) / flexible as f64
            } else {
                0.0
            };
            children
                .iter()
                .zip(fixed)
                .map(|(child, fixed)| {
                    let size = fixed.unwrap_or_else(|| {
                        let measured = measure(tree, *child, flex_width);
                        Size::new(flex_width, measured.height)
                    });
                    (*child, size)
                })
                .collect()
        }
    }
}

fn total_gap(style: &StackStyle, children: &[ViewNodeId]) -> f64 {
    match children.split_last() {
        Some((_, leading)) => leading.iter().map(|c| style.spacing_after(*c)).sum(),
        None => 0.0,
    }
}

fn stack_size(style: &StackStyle, arranged: &[(ViewNodeId, Size)], width: f64) -> Size {
    let children: Vec<ViewNodeId> = arranged.iter().map(|(id, _)| *id).collect();
    let gap = total_gap(style, &children);
    let height = match style.axis {
        Axis::Vertical => arranged.iter().map(|(_, s)| s.height).sum::<f64>() + gap,
        Axis::Horizontal => arranged.iter().map(|(_, s)| s.height).fold(0.0_f64, f64::max),
    };
    Size::new(width, height + style.padding.vertical())
}

/// Cross-axis offset and extent for a child.
fn align(alignment: Alignment, available: f64, wanted: f64) -> (f64, f64) {
    let extent = wanted.min(available);
    match alignment {
        Alignment::Fill => (0.0, available),
        Alignment::Leading => (0.0, extent),
        Alignment::Center => ((available - extent) / 2.0, extent),
        Alignment::Trailing => (available - extent, extent),
    }
}

/// Assign `bounds` to `id` and lay out its children inside it.
fn place(tree: &mut ViewTree, id: ViewNodeId, bounds: Bounds) {
    let Some(node) = tree.get_mut(id) else {
        return;
    };
    node.bounds = bounds;
    let children = node.children.to_vec();
    let kind = node.kind.clone();

    match kind {
        ViewKind::Stack(style) => place_stack(tree, &style, &children, bounds),
        ViewKind::Container | ViewKind::Overlay => {
            for child in children {
                let frame = match tree.get(child).map(|n| n.constraints.clone()) {
                    Some(constraints) if constraints.contains(&ViewConstraint::LeadingEdges) => {
                        let wanted = measure(tree, child, bounds.width);
                        Bounds::new(0.0, 0.0, wanted.width.min(bounds.width), bounds.height)
                    }
                    _ => {
                        let inset = edge_inset(tree, child).unwrap_or(0.0);
                        Bounds::new(0.0, 0.0, bounds.width, bounds.height).inset(inset)
                    }
                };
                place(tree, child, frame);
            }
        }
        _ => {}
    }
}

fn place_stack(tree: &mut ViewTree, style: &StackStyle, children: &[ViewNodeId], bounds: Bounds) {
    let arranged = arrange(tree, children, style, bounds.width);
    let content_width = (bounds.width - style.padding.horizontal()).max(0.0);
    let content_height = (bounds.height - style.padding.vertical()).max(0.0);
    let Some((&(last, _), _)) = arranged.split_last() else {
        return;
    };

    match style.axis {
        Axis::Vertical => {
            let used = stack_size(style, &arranged, bounds.width).height - style.padding.vertical();
            let flexible = children.iter().filter(|c| is_flexible_space(tree, **c)).count();
            let extra = if flexible > 0 {
                (content_height - used).max(0.0) / flexible as f64
            } else {
                0.0
            };

            let mut y = style.padding.top;
            for (child, size) in arranged {
                let height = if is_flexible_space(tree, child) { size.height + extra } else { size.height };
                let (dx, width) = align(style.alignment, content_width, size.width);
                place(tree, child, Bounds::new(style.padding.left + dx, y, width, height));
                if child != last {
                    y += height + style.spacing_after(child);
                }
            }
        }
        Axis::Horizontal => {
            let mut x = style.padding.left;
            for (child, size) in arranged {
                let (dy, height) = align(style.alignment, content_height, size.height);
                place(tree, child, Bounds::new(x, style.padding.top + dy, size.width, height));
                x += size.width + style.spacing_after(child);
            }
        }
    }
}
