//! Compile layout descriptions into views.

use indexmap::IndexMap;
use tessera_core::{ImageSizing, LayoutNode, Typography};
use tracing::trace;

use crate::slots::{SlotRole, Slots};
use crate::tree::{StackStyle, ViewConstraint, ViewKind, ViewNode, ViewNodeId, ViewTree};

/// Builds views for layout nodes, reusing an item's shared slot views.
///
/// Stacks and fillers are created fresh on every call. Thumbnail, title,
/// date and brand nodes resolve to the item's single instance of that view,
/// reconfigured for the node and moved to its new position.
pub struct LayoutCompiler<'a> {
    tree: &'a mut ViewTree,
    slots: &'a mut Slots,
    typography: &'a Typography,
}

impl<'a> LayoutCompiler<'a> {
    pub fn new(tree: &'a mut ViewTree, slots: &'a mut Slots, typography: &'a Typography) -> Self {
        Self { tree, slots, typography }
    }

    /// Compile `node` and return its view. The view is detached if it is new;
    /// a slot view keeps its current parent until the caller attaches it.
    ///
    /// # Panics
    ///
    /// Panics when a thumbnail has an aspect ratio of zero.
    pub fn compile(&mut self, node: &LayoutNode) -> ViewNodeId {
        trace!(kind = node.kind(), "compiling layout node");
        match node {
            LayoutNode::Stack(stack) => {
                let id = self.tree.insert_with(|id| {
                    let mut view = ViewNode::new(
                        id,
                        ViewKind::Stack(StackStyle {
                            axis: stack.axis,
                            spacing: stack.spacing,
                            padding: stack.padding,
                            alignment: stack.alignment,
                            custom_spacing: IndexMap::new(),
                        }),
                    );
                    view.interactive = false;
                    view
                });
                for child in &stack.children {
                    if let LayoutNode::CustomSpace { size } = child {
                        if self.set_spacing_after_last(id, *size) {
                            continue;
                        }
                    }
                    let child_id = self.compile(child);
                    self.tree.attach(id, child_id);
                }
                id
            }
            LayoutNode::CustomSpace { size } => self.tree.insert_with(|id| {
                ViewNode::new(id, ViewKind::Spacer)
                    .with_constraint(ViewConstraint::Height(*size))
                    .decorative()
            }),
            LayoutNode::FlexibleSpace { min_size } => self.tree.insert_with(|id| {
                ViewNode::new(id, ViewKind::Spacer)
                    .with_constraint(ViewConstraint::MinHeight(*min_size))
                    .decorative()
            }),
            LayoutNode::Thumbnail { sizing } => {
                let constraint = match *sizing {
                    ImageSizing::AspectRatio(ratio) => {
                        assert!(
                            ratio != 0.0,
                            "Invalid aspect ratio of 0 for thumbnail in feed item layout"
                        );
                        ViewConstraint::AspectRatio(ratio)
                    }
                    ImageSizing::FixedSize(size) => ViewConstraint::FixedSize(size),
                };
                let id = self.slot(SlotRole::Thumbnail);
                if let Some(view) = self.tree.get_mut(id) {
                    view.constraints = vec![constraint];
                }
                id
            }
            LayoutNode::Title { max_lines } => {
                let id = self.slot(SlotRole::Title);
                if let Some(ViewKind::Label(style)) = self.tree.get_mut(id).map(|v| &mut v.kind) {
                    style.max_lines = *max_lines;
                }
                id
            }
            LayoutNode::Date => self.slot(SlotRole::Date),
            LayoutNode::BrandImage => self.slot(SlotRole::BrandContainer),
            LayoutNode::BrandText => self.slot(SlotRole::BrandText),
        }
    }

    fn slot(&mut self, role: SlotRole) -> ViewNodeId {
        self.slots.ensure(role, self.tree, self.typography)
    }

    /// Record custom spacing after the stack's last arranged view. Returns
    /// false when the stack has no arranged views yet.
    fn set_spacing_after_last(&mut self, stack_id: ViewNodeId, size: f64) -> bool {
        let Some(view) = self.tree.get_mut(stack_id) else {
            return false;
        };
        let Some(&last) = view.children.last() else {
            return false;
        };
        if let ViewKind::Stack(style) = &mut view.kind {
            style.custom_spacing.insert(last, size);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{Layout, Stack};

    fn compile(node: &LayoutNode) -> (ViewTree, Slots, ViewNodeId) {
        let mut tree = ViewTree::new();
        let mut slots = Slots::default();
        let typography = Typography::default();
        let id = LayoutCompiler::new(&mut tree, &mut slots, &typography).compile(node);
        (tree, slots, id)
    }

    #[test]
    fn test_stack_copies_arrangement() {
        let layout = Layout::horizontal();
        let (tree, _, root) = compile(&layout.root_node());

        let view = tree.get(root).unwrap();
        let style = view.stack().unwrap();
        assert_eq!(style.axis, layout.root().axis);
        assert_eq!(style.alignment, layout.root().alignment);
        assert!((style.spacing - 10.0).abs() < 0.001);
        assert!(!view.interactive);
        assert_eq!(view.children.len(), 2);
    }

    #[test]
    fn test_custom_space_folds_into_previous_sibling() {
        let (tree, slots, root) = compile(&Layout::vertical().root_node());

        let view = tree.get(root).unwrap();
        // thumbnail, title, date
        assert_eq!(view.children.len(), 3);
        let title = slots.get(SlotRole::Title).unwrap();
        let style = view.stack().unwrap();
        assert!((style.spacing_after(title) - 4.0).abs() < 0.001);
        let thumbnail = slots.get(SlotRole::Thumbnail).unwrap();
        assert!((style.spacing_after(thumbnail) - 10.0).abs() < 0.001);
        assert_eq!(tree.count_in(root, |n| n.kind == ViewKind::Spacer), 0);
    }

    #[test]
    fn test_leading_custom_space_becomes_filler() {
        let node = LayoutNode::Stack(
            Stack::vertical().with_children(vec![LayoutNode::custom_space(8.0), LayoutNode::Date]),
        );
        let (tree, _, root) = compile(&node);

        let first = tree.children(root).next().unwrap();
        assert_eq!(first.kind, ViewKind::Spacer);
        assert_eq!(first.constraints, vec![ViewConstraint::Height(8.0)]);
        assert!(!first.accessible);
        assert!(!first.interactive);
    }

    #[test]
    fn test_flexible_space_minimum() {
        let (tree, _, id) = compile(&LayoutNode::flexible_space(16.0));
        assert_eq!(tree.get(id).unwrap().constraints, vec![ViewConstraint::MinHeight(16.0)]);
    }

    #[test]
    fn test_thumbnail_constraints_replaced() {
        let mut tree = ViewTree::new();
        let mut slots = Slots::default();
        let typography = Typography::default();
        let mut compiler = LayoutCompiler::new(&mut tree, &mut slots, &typography);

        let first = compiler.compile(&LayoutNode::aspect_thumbnail(1.5));
        let second = compiler.compile(&LayoutNode::fixed_thumbnail(98.0, 98.0));

        assert_eq!(first, second);
        assert_eq!(
            tree.get(first).unwrap().constraints,
            vec![ViewConstraint::FixedSize(tessera_core::Size::new(98.0, 98.0))]
        );
    }

    #[test]
    fn test_title_line_count() {
        let (tree, _, id) = compile(&LayoutNode::title(4));
        assert_eq!(tree.get(id).unwrap().label().unwrap().max_lines, 4);
    }

    #[test]
    fn test_brand_image_resolves_to_container() {
        let (tree, slots, id) = compile(&LayoutNode::BrandImage);
        assert_eq!(Some(id), slots.get(SlotRole::BrandContainer));
        assert_eq!(tree.get(id).unwrap().children.len(), 1);
    }

    #[test]
    #[should_panic(expected = "Invalid aspect ratio of 0")]
    fn test_zero_aspect_ratio_panics() {
        compile(&LayoutNode::Stack(
            Stack::vertical().with_child(LayoutNode::aspect_thumbnail(0.0)),
        ));
    }
}
