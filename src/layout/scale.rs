/// Result of scaling one row to the container width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledRow {
    /// Per-item `(width, height)` in row order. Heights here are each
    /// item's own aspect-scaled height; the driver overrides them with
    /// `row_height` so the row renders at one uniform height.
    pub items: Vec<(u32, u32)>,
    /// Shared rendered height: the minimum per-item height, seeded with the
    /// configured maximum.
    pub row_height: u32,
}

/// Scale one row's items so their pixel widths sum to exactly
/// `container_width`.
///
/// Each item receives the same absolute width correction (the shortfall
/// split evenly across the row); corrected widths are floored to whole
/// pixels and the accumulated fractional remainder lands on the last item.
/// Widths floor while heights ceil: a 1px vertical overshoot is invisible,
/// a horizontal gap is not.
///
/// The correction is negative only for a lone item wider than the
/// container; every other closed row is narrower than the container by
/// construction.
pub fn scale_row(
    widths: &[f64],
    container_width: u32,
    default_height: f64,
    max_height: u32,
) -> ScaledRow {
    debug_assert!(!widths.is_empty(), "scale_row on an empty row");

    let cw = container_width as f64;
    let natural: f64 = widths.iter().sum();
    let add = (cw - natural) / widths.len() as f64;

    let mut items = Vec::with_capacity(widths.len());
    let mut overlap = 0.0f64;
    let mut row_height = max_height;

    for (i, &width) in widths.iter().enumerate() {
        debug_assert!(width.is_finite() && width > 0.0);

        let raw = width + add;
        let mut pixel = raw.floor();
        overlap += raw - pixel;

        if i + 1 == widths.len() {
            // The fractional parts sum to a whole number of pixels; the
            // epsilon keeps f64 slop just under an integer from dropping
            // one of them.
            pixel += (overlap + 1e-6).floor();
        }

        let scale = pixel / width;
        let height = (default_height * scale).ceil();

        let pw = pixel.max(0.0) as u32;
        let ph = height.max(0.0) as u32;
        row_height = row_height.min(ph);
        items.push((pw, ph));
    }

    ScaledRow { items, row_height }
}

#[cfg(test)]
mod tests {
    use super::scale_row;

    #[test]
    fn remainder_lands_on_the_last_item() {
        // 350 - 300 = 50 split three ways: 116 + 116 + 118.
        let row = scale_row(&[100.0, 100.0, 100.0], 350, 100.0, 500);
        let widths: Vec<u32> = row.items.iter().map(|&(w, _)| w).collect();
        assert_eq!(widths, vec![116, 116, 118]);
        assert_eq!(widths.iter().sum::<u32>(), 350);
    }

    #[test]
    fn widths_fill_the_container_exactly() {
        let cases: [&[f64]; 4] = [
            &[120.0, 80.0, 95.0],
            &[33.3, 210.0, 95.5],
            &[349.9],
            &[100.0, 100.0, 100.0, 49.0],
        ];
        for widths in cases {
            let row = scale_row(widths, 350, 100.0, 500);
            let total: u32 = row.items.iter().map(|&(w, _)| w).sum();
            assert_eq!(total, 350, "row {widths:?} must fill 350px");
        }
    }

    #[test]
    fn oversized_single_item_shrinks_to_fit() {
        let row = scale_row(&[500.0], 300, 100.0, 500);
        assert_eq!(row.items, vec![(300, 60)]);
        assert_eq!(row.row_height, 60);
    }

    #[test]
    fn heights_preserve_aspect_within_rounding() {
        let widths = [120.0, 80.0, 95.0, 42.0];
        let row = scale_row(&widths, 350, 100.0, 500);
        for (&natural, &(pw, ph)) in widths.iter().zip(&row.items) {
            let got = ph as f64 / pw as f64;
            let want = 100.0 / natural;
            assert!(
                (got - want).abs() <= 1.0 / pw as f64,
                "aspect drift for natural width {natural}: got {got}, want {want}"
            );
        }
    }

    #[test]
    fn row_height_is_the_minimum_item_height() {
        // Wider items scale by a smaller factor and end up shorter.
        let row = scale_row(&[50.0, 200.0], 350, 100.0, 500);
        let min = row.items.iter().map(|&(_, h)| h).min().unwrap();
        assert_eq!(row.row_height, min);
    }

    #[test]
    fn max_height_caps_the_row_height() {
        // A lone 20px-wide item stretched to 300px would be 1500px tall.
        let row = scale_row(&[20.0], 300, 100.0, 500);
        assert_eq!(row.items[0].0, 300);
        assert_eq!(row.items[0].1, 1500);
        assert_eq!(row.row_height, 500);
    }

    #[test]
    fn near_integral_fractions_do_not_underfill() {
        // 50/3 gives fractional parts that sum to 2 only up to f64 slop.
        let row = scale_row(&[100.0, 100.0, 100.0], 350, 100.0, 500);
        let total: u32 = row.items.iter().map(|&(w, _)| w).sum();
        assert_eq!(total, 350);

        // And a denser case with sevenths.
        let row = scale_row(&[50.0; 7], 400, 100.0, 500);
        let total: u32 = row.items.iter().map(|&(w, _)| w).sum();
        assert_eq!(total, 400);
    }
}
