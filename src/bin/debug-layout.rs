/// Diagnostic tool to verify gallery → pack → scale pipeline
use rowgrid_rs::gallery::Gallery;
use rowgrid_rs::layout::LayoutConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rowgrid_rs=debug".parse().unwrap()),
        )
        .init();

    let measured_width: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1280);

    println!("=== DIAGNOSTIC: Gallery → Layout Pipeline ===");
    println!("Container width: {}px", measured_width);

    // Build a synthetic gallery with a spread of aspect ratios
    let sizes: &[(f64, f64)] = &[
        (1920.0, 1080.0),
        (800.0, 1200.0),
        (640.0, 640.0),
        (3000.0, 1000.0),
        (400.0, 500.0),
        (1024.0, 768.0),
        (2048.0, 878.0),
        (600.0, 900.0),
        (1600.0, 900.0),
        (500.0, 500.0),
        (1200.0, 1600.0),
        (350.0, 150.0),
    ];

    let mut gallery = Gallery::new(LayoutConfig::default(), true);
    for (i, &(w, h)) in sizes.iter().enumerate() {
        let id = gallery.add_item(&format!("img-{:03}.jpg", i));
        gallery.set_natural_size(id, w, h);
    }
    println!(
        "\n[1] Gallery built: {} items, ready={}",
        gallery.len(),
        gallery.is_ready()
    );

    // Compute layout
    let content_width = gallery.content_width(measured_width);
    let layout = gallery.layout(measured_width)?;
    println!(
        "\n[2] Layout computed: {} rows, {} items, content width {}px",
        layout.rows.len(),
        layout.items.len(),
        content_width
    );

    // Show every row with its items
    println!("\n[3] Rows:");
    for (r, row) in layout.rows.iter().enumerate() {
        println!(
            "    row[{}] {} items - {}x{}px (scaled={})",
            r,
            row.range.len(),
            row.width,
            row.height,
            row.scaled
        );
        for item in &layout.items[row.range.clone()] {
            let source = &gallery.get(item.id).source;
            println!("        '{}' - {}x{}", source, item.width, item.height);
        }
    }

    // Check for anomalies
    println!("\n[4] Checking invariants:");

    let mut gap_rows = 0;
    for (r, row) in layout.rows.iter().enumerate() {
        let total: u32 = layout.items[row.range.clone()]
            .iter()
            .map(|item| item.width)
            .sum();
        if row.scaled && total != content_width {
            println!(
                "    MISMATCH: row[{}] sums to {}px, expected {}px",
                r, total, content_width
            );
            gap_rows += 1;
        }
        let uniform = layout.items[row.range.clone()]
            .iter()
            .all(|item| item.height == row.height);
        if !uniform {
            println!("    MISMATCH: row[{}] has non-uniform item heights", r);
            gap_rows += 1;
        }
    }
    if gap_rows == 0 {
        println!("    All scaled rows fill exactly; all row heights uniform");
    }

    // Aspect drift summary across scaled rows
    println!("\n[5] Aspect drift (output vs natural ratio):");
    let mut worst = 0.0f64;
    for (item, &(w, h)) in layout.items.iter().zip(sizes) {
        let natural = h / w;
        let out = item.height as f64 / item.width as f64;
        let drift = (out - natural).abs();
        if drift > worst {
            worst = drift;
        }
    }
    println!(
        "    Worst drift: {:.4} (row-height clamping accounts for anything above 1/width)",
        worst
    );

    Ok(())
}
