use std::ops::Range;

/// A row produced by packing: a contiguous span of item indices plus the
/// accumulated natural width of those items at close time.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedRow {
    pub range: Range<usize>,
    pub natural_width: f64,
}

impl PackedRow {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Greedily partition items (given as their normalized widths, in display
/// order) into rows for a container of `container_width` pixels.
///
/// A row closes as soon as the running width plus the next item's width
/// reaches the container width; the crossing item starts the next row, it is
/// never split. Because packing is order-preserving, every row is a
/// contiguous index range over the input. The leftover buffer is always
/// emitted as a final row, so no item is ever dropped — whether that last
/// row gets scaled is the driver's call.
pub fn pack_rows(widths: &[f64], container_width: u32) -> Vec<PackedRow> {
    let cw = container_width as f64;
    let mut rows = Vec::new();
    let mut start = 0usize;
    let mut acc = 0.0f64;

    for (i, &width) in widths.iter().enumerate() {
        // The non-empty guard keeps a lone oversized item in its own row
        // instead of closing an empty one.
        if acc + width >= cw && i > start {
            rows.push(PackedRow {
                range: start..i,
                natural_width: acc,
            });
            start = i;
            acc = 0.0;
        }
        acc += width;
    }

    if start < widths.len() {
        rows.push(PackedRow {
            range: start..widths.len(),
            natural_width: acc,
        });
    }

    rows
}
