use compact_str::CompactString;

use crate::layout::{self, ItemId, Layout, LayoutConfig, LayoutError, LayoutItem};
use crate::selection::SelectionState;

/// One registered image: its source plus the measured natural dimensions
/// (zero until the caller's load detection reports a size).
#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub id: ItemId,
    /// Image source (URL or path), kept for the caller's rendering
    pub source: CompactString,
    pub natural_width: f64,
    pub natural_height: f64,
}

impl GalleryItem {
    /// Whether the image has reported usable dimensions yet.
    pub fn is_measured(&self) -> bool {
        self.natural_width.is_finite()
            && self.natural_height.is_finite()
            && self.natural_width > 0.0
            && self.natural_height > 0.0
    }
}

/// Caller-owned layout session for one gallery.
///
/// Holds the item registry, the layout configuration, and the selection
/// state — everything a layout pass needs, with no hidden globals. Layout is
/// recomputed wholesale on every call; the session only gates on readiness
/// (all items measured) and applies the margin arithmetic before handing the
/// pure core an adjusted container width.
pub struct Gallery {
    items: Vec<GalleryItem>,
    selection: SelectionState,
    pub config: LayoutConfig,
}

impl Gallery {
    pub fn new(config: LayoutConfig, single_select: bool) -> Self {
        Self {
            items: Vec::new(),
            selection: SelectionState::new(single_select),
            config,
        }
    }

    /// Register an image with unknown natural size. Returns its handle.
    pub fn add_item(&mut self, source: &str) -> ItemId {
        let id = ItemId(self.items.len() as u32);
        self.items.push(GalleryItem {
            id,
            source: CompactString::new(source),
            natural_width: 0.0,
            natural_height: 0.0,
        });
        id
    }

    /// Record an image's measured natural dimensions.
    pub fn set_natural_size(&mut self, id: ItemId, width: f64, height: f64) {
        let item = &mut self.items[id.index()];
        item.natural_width = width;
        item.natural_height = height;
    }

    pub fn get(&self, id: ItemId) -> &GalleryItem {
        &self.items[id.index()]
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Readiness predicate: every item has reported a nonzero natural size.
    /// This replaces load-event polling — callers re-check after each
    /// measurement and invoke `layout` once it flips to true.
    pub fn is_ready(&self) -> bool {
        self.items.iter().all(GalleryItem::is_measured)
    }

    /// Width available to rows: the measured container minus the configured
    /// margin on both sides. The extra -1 absorbs a rounding glitch where
    /// images wrap when a scrollbar appears.
    pub fn content_width(&self, measured_width: u32) -> u32 {
        measured_width
            .saturating_sub(2 * self.config.margin)
            .saturating_sub(1)
    }

    /// Run one layout pass for a container measured at `measured_width`.
    pub fn layout(&self, measured_width: u32) -> Result<Layout, LayoutError> {
        let layout_items: Vec<LayoutItem> = self
            .items
            .iter()
            .map(|item| LayoutItem {
                id: item.id,
                natural_width: item.natural_width,
                natural_height: item.natural_height,
            })
            .collect();

        layout::compute_layout(
            &layout_items,
            self.content_width(measured_width),
            &self.config,
        )
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }
}
