//! The reusable feed item view.

use tessera_core::{Layout, LayoutNode, Typography};
use tracing::debug;

use crate::compile::LayoutCompiler;
use crate::estimate::HeightEstimator;
use crate::resolve::resolve_frames;
use crate::slots::{SlotRole, Slots};
use crate::tree::{ViewConstraint, ViewKind, ViewNode, ViewNodeId, ViewTree};

/// A feed item: a root container holding the compiled layout and, while the
/// item is hidden, a cover overlay.
///
/// Items are meant to be recycled. [`FeedItemView::set_layout`] rebuilds the
/// layout's stacks and fillers but keeps one instance of each shared view
/// (thumbnail, title, date, brand) across any number of layouts.
#[derive(Debug, Clone)]
pub struct FeedItemView {
    tree: ViewTree,
    root: ViewNodeId,
    content: Option<ViewNodeId>,
    slots: Slots,
    layout: Layout,
    estimator: HeightEstimator,
    content_hidden: bool,
}

impl FeedItemView {
    /// Create an item laid out with `layout`.
    pub fn new(layout: Layout) -> Self {
        Self::with_typography(layout, Typography::default())
    }

    /// Create an item with custom fonts and fixed heights.
    pub fn with_typography(layout: Layout, typography: Typography) -> Self {
        let mut tree = ViewTree::new();
        let root = tree.insert_with(|id| ViewNode::new(id, ViewKind::Container).with_name("feed_item"));
        let mut item = Self {
            tree,
            root,
            content: None,
            slots: Slots::default(),
            layout,
            estimator: HeightEstimator::with_typography(typography),
            content_hidden: false,
        };
        item.rebuild();
        item
    }

    /// Switch to a different layout, reconfiguring the shared views.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        if let Some(old) = self.content.take() {
            let slots = &self.slots;
            self.tree.remove_subtree(old, &|id| slots.contains(id));
        }

        let root_node = LayoutNode::Stack(self.layout.root().clone());
        let content = LayoutCompiler::new(&mut self.tree, &mut self.slots, self.estimator.typography()).compile(&root_node);
        if let Some(view) = self.tree.get_mut(content) {
            view.constraints.push(ViewConstraint::EdgesToSuperview { inset: 0.0 });
        }
        self.tree.attach(self.root, content);
        self.content = Some(content);

        // Keep the cover above freshly attached content
        if self.content_hidden {
            self.attach_overlay();
        }
        debug!(views = self.tree.len(), "compiled feed item layout");
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn typography(&self) -> &Typography {
        self.estimator.typography()
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    /// The item's root container.
    pub fn root(&self) -> ViewNodeId {
        self.root
    }

    /// The root view of the compiled layout.
    pub fn content(&self) -> Option<ViewNodeId> {
        self.content
    }

    /// The shared view for a role, if the item has created it.
    pub fn slot(&self, role: SlotRole) -> Option<ViewNodeId> {
        self.slots.get(role)
    }

    /// Whether the user has hidden this item's content.
    pub fn is_content_hidden(&self) -> bool {
        self.content_hidden
    }

    /// Show or remove the hidden-content cover.
    pub fn set_content_hidden(&mut self, hidden: bool) {
        self.content_hidden = hidden;
        if hidden {
            self.attach_overlay();
        } else if let Some(overlay) = self.slots.get(SlotRole::HiddenOverlay) {
            self.tree.detach(overlay);
        }
        debug!(hidden, "toggled feed item content");
    }

    fn attach_overlay(&mut self) {
        let overlay = self.slots
            .ensure(SlotRole::HiddenOverlay, &mut self.tree, self.estimator.typography());
        self.tree.attach(self.root, overlay);
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.set_text(SlotRole::Title, text.into());
    }

    pub fn set_date(&mut self, text: impl Into<String>) {
        self.set_text(SlotRole::Date, text.into());
    }

    pub fn set_brand_text(&mut self, text: impl Into<String>) {
        self.set_text(SlotRole::BrandText, text.into());
    }

    fn set_text(&mut self, role: SlotRole, text: String) {
        let id = self.slots.ensure(role, &mut self.tree, self.estimator.typography());
        if let Some(ViewKind::Label(style)) = self.tree.get_mut(id).map(|v| &mut v.kind) {
            style.text = text;
        }
    }

    /// Quick height estimate for the current layout at `width`.
    pub fn estimated_height(&self, width: f64) -> f64 {
        self.estimator.estimate_layout(&self.layout, width)
    }

    /// Resolve frames for every attached view at `width` and return the
    /// item's height.
    pub fn resolve(&mut self, width: f64) -> f64 {
        resolve_frames(&mut self.tree, self.root, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Bounds;
    use tessera_core::Preset;

    fn count_role(item: &FeedItemView, role: SlotRole) -> usize {
        let Some(slot) = item.slot(role) else {
            return 0;
        };
        item.tree()
            .descendants(item.root())
            .into_iter()
            .filter(|id| *id == slot)
            .count()
    }

    fn label_count(item: &FeedItemView) -> usize {
        item.tree().count_in(item.root(), |n| n.label().is_some())
    }

    #[test]
    fn test_relayout_reuses_slots() {
        let mut item = FeedItemView::new(Layout::vertical());
        let title = item.slot(SlotRole::Title).unwrap();
        let date = item.slot(SlotRole::Date).unwrap();

        item.set_layout(Layout::basic());

        assert_eq!(item.slot(SlotRole::Title), Some(title));
        assert_eq!(item.slot(SlotRole::Date), Some(date));
        assert_eq!(count_role(&item, SlotRole::Title), 1);
        assert_eq!(count_role(&item, SlotRole::Date), 1);
        assert_eq!(label_count(&item), 2);
        assert_eq!(item.tree().get(title).unwrap().label().unwrap().max_lines, 2);
    }

    #[test]
    fn test_relayout_detaches_unused_slots() {
        let mut item = FeedItemView::new(Layout::vertical());
        let thumbnail = item.slot(SlotRole::Thumbnail).unwrap();

        item.set_layout(Layout::basic());

        assert!(item.tree().contains(thumbnail));
        assert!(item.tree().get(thumbnail).unwrap().parent.is_none());
        assert_eq!(count_role(&item, SlotRole::Thumbnail), 0);
    }

    #[test]
    fn test_relayout_discards_old_stacks() {
        let mut item = FeedItemView::new(Layout::branded_headline());
        for preset in Preset::ALL {
            item.set_layout(preset.layout());
        }
        item.set_layout(Layout::basic());

        // root, content stack, title, date plus detached slots
        let attached = item.tree().descendants(item.root()).len();
        assert_eq!(attached, 4);
        let stacks = item.tree().nodes().filter(|n| n.stack().is_some()).count();
        assert_eq!(stacks, 1);
    }

    #[test]
    fn test_overlay_toggle() {
        let mut item = FeedItemView::new(Layout::basic());
        let overlays = |item: &FeedItemView| {
            item.tree()
                .children(item.root())
                .filter(|n| n.kind == ViewKind::Overlay)
                .count()
        };

        item.set_content_hidden(true);
        assert_eq!(overlays(&item), 1);
        item.set_content_hidden(false);
        assert_eq!(overlays(&item), 0);
        item.set_content_hidden(true);
        item.set_content_hidden(true);
        assert_eq!(overlays(&item), 1);
        assert!(item.is_content_hidden());
        assert_eq!(item.tree().children(item.root()).last().unwrap().kind, ViewKind::Overlay);
    }

    #[test]
    fn test_overlay_stays_on_top_after_relayout() {
        let mut item = FeedItemView::new(Layout::basic());
        item.set_content_hidden(true);
        item.set_layout(Layout::vertical());

        let kinds: Vec<_> = item.tree().children(item.root()).map(|n| n.kind.clone()).collect();
        assert_eq!(kinds.len(), 2);
        assert_eq!(kinds[1], ViewKind::Overlay);
    }

    #[test]
    fn test_resolve_basic_with_text() {
        let mut item = FeedItemView::new(Layout::basic());
        item.set_title("The quick brown fox jumps over the lazy dog again and again");
        item.set_date("2 hours ago");

        let height = item.resolve(100.0);

        let typography = item.typography().clone();
        let expected = 2.0 * typography.title.line_height() + 6.0 + typography.date.line_height();
        assert!((height - expected).abs() < 0.001);
        // the estimate leaves out stack spacing
        assert!((height - item.estimated_height(100.0) - 6.0).abs() < 0.001);

        let date = item.slot(SlotRole::Date).unwrap();
        let date_bounds = item.tree().get(date).unwrap().absolute_bounds;
        assert!((date_bounds.y - (2.0 * typography.title.line_height() + 6.0)).abs() < 0.001);
    }

    #[test]
    fn test_resolve_banner_matches_estimate() {
        let mut item = FeedItemView::new(Layout::banner_thumbnail());
        let height = item.resolve(320.0);
        assert!((height - 160.0).abs() < 0.001);
        assert!((item.estimated_height(320.0) - height).abs() < 0.001);
    }

    #[test]
    fn test_resolve_horizontal_thumbnail_frame() {
        let mut item = FeedItemView::new(Layout::horizontal());
        item.resolve(300.0);

        let thumbnail = item.slot(SlotRole::Thumbnail).unwrap();
        let bounds = item.tree().get(thumbnail).unwrap().absolute_bounds;
        assert_eq!(bounds, Bounds::new(202.0, 0.0, 98.0, 98.0));
    }

    #[test]
    fn test_resolve_branded_headline_brand_pinned_to_bottom() {
        let mut item = FeedItemView::new(Layout::branded_headline());
        item.set_title("Headline");
        item.set_date("Today");
        let height = item.resolve(300.0);

        let container = item.slot(SlotRole::BrandContainer).unwrap();
        let bounds = item.tree().get(container).unwrap().absolute_bounds;
        assert!((bounds.bottom() - (height - 12.0)).abs() < 0.001);
        assert!((bounds.height - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_overlay_covers_item() {
        let mut item = FeedItemView::new(Layout::banner_thumbnail());
        item.set_content_hidden(true);
        let height = item.resolve(320.0);

        let overlay = item.slot(SlotRole::HiddenOverlay).unwrap();
        let bounds = item.tree().get(overlay).unwrap().absolute_bounds;
        assert_eq!(bounds, Bounds::new(0.0, 0.0, 320.0, height));
    }

    #[test]
    fn test_custom_typography_flows_to_slots_and_estimate() {
        let typography = Typography {
            date: tessera_core::TextStyle::semibold(20.0),
            ..Typography::default()
        };
        let mut item = FeedItemView::with_typography(Layout::basic(), typography.clone());
        item.set_date("Today");

        let date = item.slot(SlotRole::Date).unwrap();
        let font = item.tree().get(date).unwrap().label().unwrap().font;
        assert_eq!(font, typography.date);

        let expected = 2.0 * typography.title.line_height() + typography.date.line_height();
        assert!((item.estimated_height(300.0) - expected).abs() < 0.001);
    }
}
