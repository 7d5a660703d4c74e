pub mod pack;
pub mod scale;

use std::collections::HashMap;
use std::ops::Range;

use thiserror::Error;

use self::pack::pack_rows;
use self::scale::scale_row;

/// Opaque handle for a layout item. Uses u32 to stay copyable and cheap to
/// key a lookup map with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One item as supplied by the caller: identity plus natural (pre-layout)
/// dimensions. The aspect ratio is taken from these once per pass and never
/// from a previous pass's scaled output, so repeated layouts cannot drift.
#[derive(Debug, Clone, Copy)]
pub struct LayoutItem {
    pub id: ItemId,
    pub natural_width: f64,
    pub natural_height: f64,
}

/// Final pixel dimensions for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledItem {
    pub id: ItemId,
    pub width: u32,
    pub height: u32,
}

/// One row of the final layout: a contiguous span over `Layout::items`, the
/// shared rendered height, and the row's total pixel width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSpan {
    pub range: Range<usize>,
    pub height: u32,
    pub width: u32,
    /// False only for a trailing under-full row left at natural size.
    pub scaled: bool,
}

/// The full layout result (items in input order + row spans + fast lookup).
#[derive(Debug, Clone)]
pub struct Layout {
    /// Computed sizes, in the same order the items were supplied.
    pub items: Vec<ScaledItem>,
    /// Row boundaries over `items`, top to bottom.
    pub rows: Vec<RowSpan>,
    /// item id → index into `items` (O(1) hit-testing, selection highlight)
    pub item_to_slot: HashMap<ItemId, usize>,
}

/// Configuration for justified row layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Height every item is normalized to before packing (px)
    pub default_height: f64,
    /// Seed for the row's minimum-height reduction; rows whose computed
    /// heights all exceed it render at exactly this height (px)
    pub max_height: u32,
    /// Horizontal margin the session subtracts from the measured container
    /// width on each side (px)
    pub margin: u32,
    /// Whether the trailing under-full row is stretched to fill the
    /// container like every other row
    pub adjust_last_row: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_height: 100.0,
            max_height: 500,
            margin: 2,
            adjust_last_row: false,
        }
    }
}

/// Layout failures. The core is a pure function: every error aborts the
/// whole call, there is never a partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The item has not reported usable natural dimensions yet. The caller
    /// is expected to gate on readiness and re-invoke once measured.
    #[error("item {0:?} has no measured dimensions yet")]
    ItemNotReady(ItemId),
}

/// Lay out `items` into justified rows filling `container_width` pixels.
///
/// Every row except a trailing under-full one is scaled so its item widths
/// sum to exactly the container width; all items in a row share one final
/// height. With `adjust_last_row` unset, the trailing row keeps its
/// normalized dimensions (left-aligned, possibly narrower than the
/// container). A trailing row that is itself wider than the container is
/// treated as full and scaled regardless of the flag.
pub fn compute_layout(
    items: &[LayoutItem],
    container_width: u32,
    config: &LayoutConfig,
) -> Result<Layout, LayoutError> {
    if container_width == 0 {
        return Err(LayoutError::InvalidConfiguration(
            "container width must be positive",
        ));
    }
    if !config.default_height.is_finite() || config.default_height <= 0.0 {
        return Err(LayoutError::InvalidConfiguration(
            "default height must be positive",
        ));
    }
    if config.max_height == 0 {
        return Err(LayoutError::InvalidConfiguration(
            "max height must be positive",
        ));
    }

    for item in items {
        if !item.natural_width.is_finite()
            || !item.natural_height.is_finite()
            || item.natural_width <= 0.0
            || item.natural_height <= 0.0
        {
            tracing::debug!("Layout deferred: item {:?} not measured yet", item.id);
            return Err(LayoutError::ItemNotReady(item.id));
        }
    }

    // Normalize to a common height baseline so packing reasons about every
    // item's width at the same scale.
    let widths: Vec<f64> = items
        .iter()
        .map(|item| item.natural_width / item.natural_height * config.default_height)
        .collect();

    let packed = pack_rows(&widths, container_width);

    let mut scaled_items = Vec::with_capacity(items.len());
    let mut rows = Vec::with_capacity(packed.len());
    let cw = container_width as f64;

    for (row_idx, row) in packed.iter().enumerate() {
        let is_last = row_idx + 1 == packed.len();
        let stretch = !is_last || config.adjust_last_row || row.natural_width >= cw;

        if stretch {
            let scaled = scale_row(
                &widths[row.range.clone()],
                container_width,
                config.default_height,
                config.max_height,
            );
            let mut total = 0u32;
            for (offset, &(width, _)) in scaled.items.iter().enumerate() {
                scaled_items.push(ScaledItem {
                    id: items[row.range.start + offset].id,
                    width,
                    height: scaled.row_height,
                });
                total += width;
            }
            rows.push(RowSpan {
                range: row.range.clone(),
                height: scaled.row_height,
                width: total,
                scaled: true,
            });
        } else {
            let height = config.default_height.ceil() as u32;
            let mut total = 0u32;
            for idx in row.range.clone() {
                let width = widths[idx].floor() as u32;
                scaled_items.push(ScaledItem {
                    id: items[idx].id,
                    width,
                    height,
                });
                total += width;
            }
            rows.push(RowSpan {
                range: row.range.clone(),
                height,
                width: total,
                scaled: false,
            });
        }
    }

    let item_to_slot = scaled_items
        .iter()
        .enumerate()
        .map(|(slot, item)| (item.id, slot))
        .collect();

    tracing::debug!(
        "Laid out {} items into {} rows at {}px",
        items.len(),
        rows.len(),
        container_width
    );

    Ok(Layout {
        items: scaled_items,
        rows,
        item_to_slot,
    })
}
