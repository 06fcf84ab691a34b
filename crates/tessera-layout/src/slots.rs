//! Shared per-item views reused across layout changes.

use tessera_core::Typography;
use tracing::trace;

use crate::tree::{ContentMode, ImageStyle, LabelStyle, ViewConstraint, ViewKind, ViewNode, ViewNodeId, ViewTree};

/// Text shown on the cover of a hidden item.
pub const HIDDEN_CONTENT_TEXT: &str = "Content Hidden";

const OVERLAY_CORNER_RADIUS: f64 = 4.0;
const OVERLAY_TEXT_INSET: f64 = 16.0;

/// Role of a shared view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRole {
    Thumbnail,
    Title,
    Date,
    BrandText,
    BrandImage,
    /// Fixed-height wrapper around the brand image
    BrandContainer,
    HiddenOverlay,
}

impl SlotRole {
    pub const ALL: [SlotRole; 7] = [
        SlotRole::Thumbnail,
        SlotRole::Title,
        SlotRole::Date,
        SlotRole::BrandText,
        SlotRole::BrandImage,
        SlotRole::BrandContainer,
        SlotRole::HiddenOverlay,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SlotRole::Thumbnail => "thumbnail",
            SlotRole::Title => "title",
            SlotRole::Date => "date",
            SlotRole::BrandText => "brand_text",
            SlotRole::BrandImage => "brand_image",
            SlotRole::BrandContainer => "brand_container",
            SlotRole::HiddenOverlay => "hidden_overlay",
        }
    }
}

/// The shared views of one feed item, created on first use.
#[derive(Debug, Clone, Default)]
pub struct Slots {
    thumbnail: Option<ViewNodeId>,
    title: Option<ViewNodeId>,
    date: Option<ViewNodeId>,
    brand_text: Option<ViewNodeId>,
    brand_image: Option<ViewNodeId>,
    brand_container: Option<ViewNodeId>,
    hidden_overlay: Option<ViewNodeId>,
}

impl Slots {
    /// The view filling a role, if it has been created.
    pub fn get(&self, role: SlotRole) -> Option<ViewNodeId> {
        *self.entry(role)
    }

    /// Whether a view is one of the shared views.
    pub fn contains(&self, id: ViewNodeId) -> bool {
        SlotRole::ALL.iter().any(|role| self.get(*role) == Some(id))
    }

    /// The view filling a role, creating and styling it in `tree` if needed.
    pub fn ensure(&mut self, role: SlotRole, tree: &mut ViewTree, typography: &Typography) -> ViewNodeId {
        if let Some(id) = self.get(role) {
            return id;
        }
        let id = match role {
            SlotRole::Thumbnail => tree.insert_with(|id| {
                ViewNode::new(
                    id,
                    ViewKind::Image(ImageStyle {
                        content_mode: ContentMode::AspectFill,
                        placeholder_opacity: 0.1,
                    }),
                )
                .with_name(role.name())
                .clipping()
            }),
            SlotRole::Title => {
                let mut style = LabelStyle::new(typography.title);
                style.max_lines = tessera_core::DEFAULT_TITLE_LINES;
                label(tree, role, style)
            }
            SlotRole::Date => {
                let mut style = LabelStyle::new(typography.date);
                style.text_opacity = 0.6;
                label(tree, role, style)
            }
            SlotRole::BrandText => label(tree, role, LabelStyle::new(typography.brand_text)),
            SlotRole::BrandImage => {
                let height = typography.brand_image_height;
                tree.insert_with(|id| {
                    ViewNode::new(
                        id,
                        ViewKind::Image(ImageStyle {
                            content_mode: ContentMode::AspectFit,
                            placeholder_opacity: 0.0,
                        }),
                    )
                    .with_name(role.name())
                    .with_constraint(ViewConstraint::LeadingEdges)
                    .with_constraint(ViewConstraint::Height(height))
                    .clipping()
                })
            }
            SlotRole::BrandContainer => {
                let height = typography.brand_image_height;
                let container = tree.insert_with(|id| {
                    ViewNode::new(id, ViewKind::Container)
                        .with_name(role.name())
                        .with_constraint(ViewConstraint::Height(height))
                });
                let image = self.ensure(SlotRole::BrandImage, tree, typography);
                tree.attach(container, image);
                container
            }
            SlotRole::HiddenOverlay => hidden_overlay(tree, typography),
        };
        trace!(slot = role.name(), id = id.0, "created slot view");
        *self.entry_mut(role) = Some(id);
        id
    }

    fn entry(&self, role: SlotRole) -> &Option<ViewNodeId> {
        match role {
            SlotRole::Thumbnail => &self.thumbnail,
            SlotRole::Title => &self.title,
            SlotRole::Date => &self.date,
            SlotRole::BrandText => &self.brand_text,
            SlotRole::BrandImage => &self.brand_image,
            SlotRole::BrandContainer => &self.brand_container,
            SlotRole::HiddenOverlay => &self.hidden_overlay,
        }
    }

    fn entry_mut(&mut self, role: SlotRole) -> &mut Option<ViewNodeId> {
        match role {
            SlotRole::Thumbnail => &mut self.thumbnail,
            SlotRole::Title => &mut self.title,
            SlotRole::Date => &mut self.date,
            SlotRole::BrandText => &mut self.brand_text,
            SlotRole::BrandImage => &mut self.brand_image,
            SlotRole::BrandContainer => &mut self.brand_container,
            SlotRole::HiddenOverlay => &mut self.hidden_overlay,
        }
    }
}

fn label(tree: &mut ViewTree, role: SlotRole, style: LabelStyle) -> ViewNodeId {
    tree.insert_with(|id| ViewNode::new(id, ViewKind::Label(style)).with_name(role.name()))
}

/// Blurred backdrop with a centered, wrapping notice.
fn hidden_overlay(tree: &mut ViewTree, typography: &Typography) -> ViewNodeId {
    let overlay = tree.insert_with(|id| {
        ViewNode::new(id, ViewKind::Overlay)
            .with_name(SlotRole::HiddenOverlay.name())
            .with_constraint(ViewConstraint::EdgesToSuperview { inset: 0.0 })
    });
    let backdrop = tree.insert_with(|id| {
        ViewNode::new(id, ViewKind::Blur { corner_radius: OVERLAY_CORNER_RADIUS })
            .with_constraint(ViewConstraint::EdgesToSuperview { inset: 0.0 })
            .clipping()
    });
    let mut style = LabelStyle::new(typography.overlay);
    style.text = HIDDEN_CONTENT_TEXT.to_string();
    style.max_lines = 0;
    style.text_opacity = 0.5;
    style.centered = true;
    let notice = tree.insert_with(|id| {
        ViewNode::new(id, ViewKind::Label(style))
            .with_constraint(ViewConstraint::EdgesToSuperview { inset: OVERLAY_TEXT_INSET })
    });
    tree.attach(overlay, backdrop);
    tree.attach(overlay, notice);
    overlay
}
