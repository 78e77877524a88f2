// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and checks determinism and key pixels instead.

use chart_core::{Axis, Chart, RenderOptions, Series, Theme};

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        "Y",
        vec![(0.0, 0.0), (1.0, 1.0), (2.0, f64::NAN), (3.0, 1.5), (4.0, 1.0)],
    ));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_basic_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Without a golden, pin the properties a golden would: repeatable pixels, background, line and gap.
        let again = image::load_from_memory(&render_bytes()).expect("decode again").to_rgba8();
        let got = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        assert_eq!(got.as_raw(), again.as_raw(), "rendering is not deterministic");
        check_basic_chart_pixels(&got);
    }
}

#[test]
fn basic_chart_pixels() {
    let img = image::load_from_memory(&render_bytes()).expect("decode").to_rgba8();
    check_basic_chart_pixels(&img);
}

/// Plot area 96..992 x 56..568 maps x 0..4, y 0..4 (224 px per unit x, 128 px per unit y).
fn check_basic_chart_pixels(img: &image::RgbaImage) {
    assert_eq!((img.width(), img.height()), (1024, 640));
    let bg = Theme::light().background;
    let stroke = Theme::light().line_stroke;
    let is_stroke = |x: u32, y: u32| {
        let p = img.get_pixel(x, y).0;
        p[..3] == [stroke.r(), stroke.g(), stroke.b()]
    };
    let near_stroke = |x: u32, y: f32| (-2..=2).any(|dy| is_stroke(x, (y as i32 + dy) as u32));

    // Corner in the inset is plain background.
    assert_eq!(img.get_pixel(2, 2).0, [bg.r(), bg.g(), bg.b(), 255]);
    // Segment (0,0)-(1,1): at x=0.5 the line sits at y=0.5.
    assert!(near_stroke(96 + 112, 568.0 - 64.0), "first segment missing");
    // Segment (3,1.5)-(4,1.0): at x=3.5 the line sits at y=1.25.
    assert!(near_stroke(96 + 784, 568.0 - 160.0), "last segment missing");
    // NaN at x=2 breaks the line: nothing drawn between x=1 and x=3.
    for x in [96 + 448, 96 + 500] {
        assert!((56..568).all(|y| !is_stroke(x, y)), "gap at NaN was bridged (x={x})");
    }
}
