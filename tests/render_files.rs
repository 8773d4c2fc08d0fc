use prettyplot::viz::fonts;
use prettyplot::{
    CategoryValues, Figure, FontConfig, GrayBarsOptions, Orientation, Spines, gray_bars,
};
use std::fs;
use tempfile::tempdir;

// ab_glyph needs a font file; machines without one skip the drawing tests.
fn font_available() -> bool {
    match fonts::ensure_default_font() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("skipping render test: {e}");
            false
        }
    }
}

fn sample() -> CategoryValues {
    CategoryValues::from([
        ("Germany", 83_200_000.0),
        ("France", 67_800_000.0),
        ("Italy", 59_000_000.0),
        ("Spain", 47_400_000.0),
    ])
}

#[test]
fn svg_contains_ramp_colors() {
    if !font_available() {
        return;
    }
    let fig = gray_bars(&sample(), &GrayBarsOptions::default()).unwrap();
    let svg = fig.to_svg_string().unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("#D9D9D9"), "first bar uses the first stop");
    assert!(svg.contains("#969696"), "last bar uses the second stop");
    assert!(svg.contains("Germany"));
}

#[test]
fn save_writes_svg_and_png() {
    if !font_available() {
        return;
    }
    let dir = tempdir().unwrap();
    let fig = gray_bars(
        &sample(),
        &GrayBarsOptions::new().order(false).max_height(6.0).size(640, 480),
    )
    .unwrap();
    for name in ["bars.svg", "bars.png"] {
        let path = dir.path().join(name);
        fig.save(&path).unwrap();
        let meta = fs::metadata(&path).expect("file created");
        assert!(meta.len() > 0, "{name} has content");
    }
}

#[test]
fn vertical_bars_and_titles_render() {
    if !font_available() {
        return;
    }
    let opts = GrayBarsOptions::new()
        .orientation(Orientation::Vertical)
        .title("Population")
        .locale("de")
        .size(800, 600);
    let svg = gray_bars(&sample(), &opts).unwrap().to_svg_string().unwrap();
    assert!(svg.contains("Population"));
}

#[test]
fn subplot_grid_renders_empty_and_filled_axes() {
    if !font_available() {
        return;
    }
    let mut fig = Figure::subplots(1, 2, (900, 400))
        .unwrap()
        .with_font(FontConfig::new("sans-serif", 12.0));
    let layout = prettyplot::BarLayout::compute(&sample(), true).unwrap();
    fig.axes_mut(0, 1)
        .unwrap()
        .barh(layout)
        .set_spines(Spines {
            top: false,
            right: false,
            bottom: true,
            left: true,
        })
        .xaxis_grid();
    let svg = fig.to_svg_string().unwrap();
    assert!(svg.contains("Spain"));
}

#[test]
fn unregistered_family_falls_back_to_the_default_face() {
    if !font_available() {
        return;
    }
    let opts = GrayBarsOptions::new().font(FontConfig::new("Some Missing Face", 14.0));
    let svg = gray_bars(&sample(), &opts).unwrap().to_svg_string().unwrap();
    assert!(svg.contains("France"));
    assert!(fonts::is_registered("Some Missing Face"));
}
