//! Retained view tree.
//!
//! Views live in an arena owned by a [`ViewTree`] and refer to each other by
//! [`ViewNodeId`]. A view has at most one parent; attaching it somewhere else
//! moves it.

use glam::DVec2;
use indexmap::IndexMap;
use smallvec::SmallVec;
use tessera_core::{Alignment, Axis, EdgeInsets, Size, TextStyle};

/// Unique identifier for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewNodeId(pub u64);

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    /// Position relative to parent (or absolute if root)
    pub x: f64,
    pub y: f64,
    /// Size of the view
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from an origin and a size.
    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inset bounds by a uniform amount, never below zero size.
    pub fn inset(&self, amount: f64) -> Bounds {
        let edge = DVec2::splat(amount);
        Bounds::from_origin_size(self.origin() + edge, (self.size() - 2.0 * edge).max(DVec2::ZERO))
    }
}

/// How an image view scales its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// Fill the bounds, cropping overflow
    AspectFill,
    /// Fit inside the bounds
    AspectFit,
}

/// Styling of an image view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageStyle {
    pub content_mode: ContentMode,
    /// Placeholder background opacity (white), 0 for transparent
    pub placeholder_opacity: f64,
}

/// Styling and content of a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub text: String,
    pub font: TextStyle,
    /// Maximum visible lines, 0 for unlimited
    pub max_lines: u32,
    /// Text color opacity (white)
    pub text_opacity: f64,
    pub centered: bool,
}

impl LabelStyle {
    pub fn new(font: TextStyle) -> Self {
        Self {
            text: String::new(),
            font,
            max_lines: 1,
            text_opacity: 1.0,
            centered: false,
        }
    }
}

/// Arrangement settings of a stack view.
#[derive(Debug, Clone, PartialEq)]
pub struct StackStyle {
    pub axis: Axis,
    pub spacing: f64,
    /// Margins applied around arranged children
    pub padding: EdgeInsets,
    pub alignment: Alignment,
    /// Spacing overrides after a specific arranged child
    pub custom_spacing: IndexMap<ViewNodeId, f64>,
}

impl StackStyle {
    /// Space between `child` and the next arranged view.
    pub fn spacing_after(&self, child: ViewNodeId) -> f64 {
        self.custom_spacing.get(&child).copied().unwrap_or(self.spacing)
    }
}

/// What a view is.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewKind {
    /// Plain container whose children are positioned by constraints
    Container,
    Stack(StackStyle),
    /// Empty filler
    Spacer,
    Image(ImageStyle),
    Label(LabelStyle),
    /// Blurred, rounded backdrop
    Blur { corner_radius: f64 },
    /// Cover shown over hidden content, always matching its parent's bounds
    Overlay,
}

/// Sizing and positioning rules attached to a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewConstraint {
    /// Width and height equal to a size
    FixedSize(Size),
    /// Height equal to a value
    Height(f64),
    /// Height at least a value
    MinHeight(f64),
    /// Height equal to width divided by the ratio
    AspectRatio(f64),
    /// All edges equal to the superview's, inset by an amount
    EdgesToSuperview { inset: f64 },
    /// Leading, top and bottom pinned to the superview; trailing at most the
    /// superview's
    LeadingEdges,
}

/// A view in the tree.
#[derive(Debug, Clone)]
pub struct ViewNode {
    /// Unique ID for this view
    pub id: ViewNodeId,
    pub kind: ViewKind,
    /// Optional name for debugging
    pub name: Option<String>,
    pub constraints: Vec<ViewConstraint>,
    /// Resolved bounds (position relative to parent)
    pub bounds: Bounds,
    /// Resolved bounds in item coordinates
    pub absolute_bounds: Bounds,
    /// Parent view ID (None when detached or root)
    pub parent: Option<ViewNodeId>,
    /// Child view IDs, in arrangement order
    pub children: SmallVec<[ViewNodeId; 4]>,
    pub clips_children: bool,
    pub interactive: bool,
    /// Whether accessibility traversal visits this view
    pub accessible: bool,
}

impl ViewNode {
    /// Create a new view.
    pub fn new(id: ViewNodeId, kind: ViewKind) -> Self {
        Self {
            id,
            kind,
            name: None,
            constraints: Vec::new(),
            bounds: Bounds::default(),
            absolute_bounds: Bounds::default(),
            parent: None,
            children: SmallVec::new(),
            clips_children: false,
            interactive: true,
            accessible: true,
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_constraint(mut self, constraint: ViewConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Mark as a non-interactive view hidden from accessibility.
    pub fn decorative(mut self) -> Self {
        self.interactive = false;
        self.accessible = false;
        self
    }

    pub fn clipping(mut self) -> Self {
        self.clips_children = true;
        self
    }

    /// Stack style, if this is a stack.
    pub fn stack(&self) -> Option<&StackStyle> {
        match &self.kind {
            ViewKind::Stack(style) => Some(style),
            _ => None,
        }
    }

    /// Label style, if this is a label.
    pub fn label(&self) -> Option<&LabelStyle> {
        match &self.kind {
            ViewKind::Label(style) => Some(style),
            _ => None,
        }
    }
}

/// Arena of views.
#[derive(Debug, Clone)]
pub struct ViewTree {
    /// All views, indexed by ID in creation order
    nodes: IndexMap<ViewNodeId, ViewNode>,
    /// Counter for generating unique IDs
    next_id: u64,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTree {
    /// Create an empty view tree.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Generate a new unique view ID.
    pub fn next_id(&mut self) -> ViewNodeId {
        let id = ViewNodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a detached view, built from a fresh ID.
    pub fn insert_with(&mut self, build: impl FnOnce(ViewNodeId) -> ViewNode) -> ViewNodeId {
        let id = self.next_id();
        let node = build(id);
        debug_assert_eq!(node.id, id);
        self.nodes.insert(id, node);
        id
    }

    /// Insert a detached view of the given kind.
    pub fn insert(&mut self, kind: ViewKind) -> ViewNodeId {
        self.insert_with(|id| ViewNode::new(id, kind))
    }

    /// Append `child` to `parent`'s children, moving it out of any previous
    /// parent.
    pub fn attach(&mut self, parent_id: ViewNodeId, child_id: ViewNodeId) {
        if parent_id == child_id || !self.nodes.contains_key(&parent_id) {
            return;
        }
        self.detach(child_id);
        let Some(child) = self.nodes.get_mut(&child_id) else {
            return;
        };
        child.parent = Some(parent_id);
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(child_id);
        }
    }

    /// Remove `id` from its parent, keeping the view and its subtree.
    pub fn detach(&mut self, id: ViewNodeId) {
        let Some(parent_id) = self.nodes.get_mut(&id).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.retain(|c| *c != id);
            if let ViewKind::Stack(style) = &mut parent.kind {
                style.custom_spacing.shift_remove(&id);
            }
        }
    }

    /// Delete `id` and its descendants, except views for which `keep` holds.
    /// Kept views are detached with their own subtree intact.
    pub fn remove_subtree(&mut self, id: ViewNodeId, keep: &impl Fn(ViewNodeId) -> bool) {
        if keep(id) {
            self.detach(id);
            return;
        }
        self.detach(id);
        let Some(node) = self.nodes.shift_remove(&id) else {
            return;
        };
        for child_id in node.children {
            if let Some(child) = self.nodes.get_mut(&child_id) {
                child.parent = None;
            }
            self.remove_subtree(child_id, keep);
        }
    }

    /// Get a view by ID.
    pub fn get(&self, id: ViewNodeId) -> Option<&ViewNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable view by ID.
    pub fn get_mut(&mut self, id: ViewNodeId) -> Option<&mut ViewNode> {
        self.nodes.get_mut(&id)
    }

    pub fn contains(&self, id: ViewNodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of views in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all views.
    pub fn nodes(&self) -> impl Iterator<Item = &ViewNode> {
        self.nodes.values()
    }

    /// Get children of a view.
    pub fn children(&self, id: ViewNodeId) -> impl Iterator<Item = &ViewNode> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|child_id| self.nodes.get(child_id))
    }

    /// `id` and every view below it, depth first.
    pub fn descendants(&self, id: ViewNodeId) -> Vec<ViewNodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(&current) else {
                continue;
            };
            out.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// Count views under `id` (inclusive) matching a predicate.
    pub fn count_in(&self, id: ViewNodeId, predicate: impl Fn(&ViewNode) -> bool) -> usize {
        self.descendants(id)
            .into_iter()
            .filter_map(|d| self.nodes.get(&d))
            .filter(|n| predicate(n))
            .count()
    }

    /// Compute absolute bounds below `root`.
    pub fn compute_absolute_bounds(&mut self, root: ViewNodeId) {
        self.compute_absolute_bounds_recursive(root, DVec2::ZERO);
    }

    fn compute_absolute_bounds_recursive(&mut self, id: ViewNodeId, parent_origin: DVec2) {
        let (origin, children) = {
            let node = match self.nodes.get_mut(&id) {
                Some(n) => n,
                None => return,
            };
            let origin = parent_origin + node.bounds.origin();
            node.absolute_bounds = Bounds::from_origin_size(origin, node.bounds.size());
            (origin, node.children.clone())
        };

        for child_id in children {
            self.compute_absolute_bounds_recursive(child_id, origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_style() -> StackStyle {
        StackStyle {
            axis: Axis::Vertical,
            spacing: 4.0,
            padding: EdgeInsets::ZERO,
            alignment: Alignment::Fill,
            custom_spacing: IndexMap::new(),
        }
    }

    #[test]
    fn test_bounds_inset() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 50.0).inset(16.0);
        assert!((bounds.x - 16.0).abs() < 0.001);
        assert!((bounds.width - 68.0).abs() < 0.001);
        assert!((bounds.height - 18.0).abs() < 0.001);
        assert!(Bounds::new(0.0, 0.0, 10.0, 10.0).inset(16.0).width.abs() < 0.001);
    }

    #[test]
    fn test_attach_moves_view() {
        let mut tree = ViewTree::new();
        let a = tree.insert(ViewKind::Container);
        let b = tree.insert(ViewKind::Container);
        let child = tree.insert(ViewKind::Spacer);

        tree.attach(a, child);
        tree.attach(b, child);

        assert_eq!(tree.children(a).count(), 0);
        assert_eq!(tree.children(b).count(), 1);
        assert_eq!(tree.get(child).unwrap().parent, Some(b));
    }

    #[test]
    fn test_reattach_does_not_duplicate() {
        let mut tree = ViewTree::new();
        let parent = tree.insert(ViewKind::Container);
        let child = tree.insert(ViewKind::Spacer);
        tree.attach(parent, child);
        tree.attach(parent, child);
        assert_eq!(tree.get(parent).unwrap().children.len(), 1);
    }

    #[test]
    fn test_detach_drops_custom_spacing() {
        let mut tree = ViewTree::new();
        let stack = tree.insert(ViewKind::Stack(stack_style()));
        let child = tree.insert(ViewKind::Spacer);
        tree.attach(stack, child);
        if let Some(ViewKind::Stack(style)) = tree.get_mut(stack).map(|n| &mut n.kind) {
            style.custom_spacing.insert(child, 12.0);
        }

        tree.detach(child);

        let style = tree.get(stack).unwrap().stack().unwrap();
        assert!(style.custom_spacing.is_empty());
        assert!(tree.get(child).unwrap().parent.is_none());
    }

    #[test]
    fn test_remove_subtree_keeps_marked_views() {
        let mut tree = ViewTree::new();
        let root = tree.insert(ViewKind::Stack(stack_style()));
        let inner = tree.insert(ViewKind::Stack(stack_style()));
        let kept = tree.insert(ViewKind::Container);
        let kept_child = tree.insert(ViewKind::Spacer);
        let dropped = tree.insert(ViewKind::Spacer);
        tree.attach(root, inner);
        tree.attach(inner, kept);
        tree.attach(inner, dropped);
        tree.attach(kept, kept_child);

        tree.remove_subtree(root, &|id| id == kept);

        assert!(!tree.contains(root));
        assert!(!tree.contains(inner));
        assert!(!tree.contains(dropped));
        assert!(tree.get(kept).unwrap().parent.is_none());
        assert_eq!(tree.get(kept_child).unwrap().parent, Some(kept));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_descendants_depth_first() {
        let mut tree = ViewTree::new();
        let root = tree.insert(ViewKind::Container);
        let a = tree.insert(ViewKind::Container);
        let a1 = tree.insert(ViewKind::Spacer);
        let b = tree.insert(ViewKind::Spacer);
        tree.attach(root, a);
        tree.attach(a, a1);
        tree.attach(root, b);

        assert_eq!(tree.descendants(root), vec![root, a, a1, b]);
        assert_eq!(tree.count_in(root, |n| n.kind == ViewKind::Spacer), 2);
    }

    #[test]
    fn test_absolute_bounds() {
        let mut tree = ViewTree::new();
        let root = tree.insert(ViewKind::Container);
        let child = tree.insert(ViewKind::Spacer);
        tree.attach(root, child);
        tree.get_mut(root).unwrap().bounds = Bounds::new(5.0, 5.0, 800.0, 600.0);
        tree.get_mut(child).unwrap().bounds = Bounds::new(10.0, 10.0, 100.0, 50.0);

        tree.compute_absolute_bounds(root);

        let child_node = tree.get(child).unwrap();
        assert!((child_node.absolute_bounds.x - 15.0).abs() < 0.001);
        assert!((child_node.absolute_bounds.y - 15.0).abs() < 0.001);
        assert_eq!(child_node.absolute_bounds.size(), DVec2::new(100.0, 50.0));
        assert_eq!(child_node.bounds.origin(), DVec2::new(10.0, 10.0));
    }
}
