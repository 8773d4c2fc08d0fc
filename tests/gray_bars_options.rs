use prettyplot::{
    BAR_STEP, CategoryValues, FontConfig, GrayBarsOptions, Orientation, PlotError, Spines,
    gray_bars, gray_bars_json,
};
use serde_json::json;

fn data() -> CategoryValues {
    CategoryValues::from([("a", 3.0), ("b", 1.0), ("c", 2.0)])
}

#[test]
fn defaults_give_sorted_horizontal_bars_without_spines() {
    let fig = gray_bars(&data(), &GrayBarsOptions::default()).unwrap();
    assert_eq!(fig.grid(), (1, 1));
    assert_eq!(fig.size(), (1200, 1000));
    assert_eq!(fig.font(), &FontConfig::default());

    let ax = fig.ax();
    let bars = ax.bars().expect("bars attached");
    assert_eq!(bars.orientation, Orientation::Horizontal);
    assert_eq!(bars.layout.labels, ["a", "c", "b"]);
    assert_eq!(ax.spines(), Spines::none());
    assert!(ax.x_grid());
    assert!(!ax.y_grid());
    assert_eq!(ax.y_limits(), None);
}

#[test]
fn order_false_sorts_ascending() {
    let fig = gray_bars(&data(), &GrayBarsOptions::new().order(false)).unwrap();
    assert_eq!(fig.ax().bars().unwrap().layout.labels, ["b", "c", "a"]);
}

#[test]
fn max_height_fixes_category_limits() {
    let fig = gray_bars(&data(), &GrayBarsOptions::new().max_height(10.0)).unwrap();
    let (lo, hi) = fig.ax().y_limits().unwrap();
    assert_eq!(lo, -1.0);
    assert!((hi - (10.0 * BAR_STEP + 1.0)).abs() < 1e-12);
}

#[test]
fn zero_max_height_leaves_limits_unset() {
    let data = CategoryValues::from([("a", 3.0), ("b", 1.0)]);
    let fig = gray_bars(&data, &GrayBarsOptions::new().max_height(0.0)).unwrap();
    assert_eq!(fig.ax().y_limits(), None);
    let fig = gray_bars_json(&data, &json!({ "max_height": 0 })).unwrap();
    assert_eq!(fig.ax().y_limits(), None);
}

#[test]
fn vertical_bars_grid_the_value_axis() {
    let opts = GrayBarsOptions::new()
        .orientation(Orientation::Vertical)
        .max_height(4.0);
    let fig = gray_bars(&data(), &opts).unwrap();
    let ax = fig.ax();
    assert_eq!(ax.bars().unwrap().orientation, Orientation::Vertical);
    assert!(ax.y_grid());
    assert!(!ax.x_grid());
    assert!(ax.x_limits().is_some());
    assert!(ax.y_limits().is_none());
}

#[test]
fn custom_font_is_carried_by_the_figure() {
    let opts = GrayBarsOptions::new().font(FontConfig::new("serif", 12.0));
    let fig = gray_bars(&data(), &opts).unwrap();
    assert_eq!(fig.font().family, "serif");
    assert_eq!(fig.font().size_px(), 12);
}

#[test]
fn non_boolean_order_is_rejected_by_name() {
    let err = gray_bars_json(&data(), &json!({ "order": "yes" })).unwrap_err();
    match &err {
        PlotError::InvalidOption { param, .. } => assert_eq!(param, "order"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("order"));
}

#[test]
fn order_is_checked_before_layout() {
    // Empty data would fail layout; the option error must win.
    let err = gray_bars_json(&CategoryValues::new(), &json!({ "order": 1 })).unwrap_err();
    assert!(matches!(err, PlotError::InvalidOption { ref param, .. } if param == "order"));
}

#[test]
fn json_options_are_applied() {
    let fig = gray_bars_json(
        &data(),
        &json!({ "order": false, "max_height": 5, "font": { "family": "serif", "size": 10 } }),
    )
    .unwrap();
    assert_eq!(fig.ax().bars().unwrap().layout.labels, ["b", "c", "a"]);
    assert_eq!(fig.font().family, "serif");
    assert!(fig.ax().y_limits().is_some());
}

#[test]
fn bad_json_options_are_rejected() {
    for bad in [
        json!({ "max_height": "tall" }),
        json!({ "max_height": -1 }),
        json!({ "font": 12 }),
        json!({ "font": { "family": 3 } }),
        json!({ "font": { "size": 0 } }),
        json!({ "colour": "red" }),
        json!([1, 2]),
    ] {
        assert!(
            matches!(
                gray_bars_json(&data(), &bad),
                Err(PlotError::InvalidOption { .. })
            ),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn unknown_font_property_names_font() {
    let err = gray_bars_json(&data(), &json!({ "font": { "weight": "bold" } })).unwrap_err();
    match err {
        PlotError::InvalidOption { param, reason } => {
            assert_eq!(param, "font");
            assert!(reason.contains("weight"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_data_is_an_error() {
    assert!(matches!(
        gray_bars(&CategoryValues::new(), &GrayBarsOptions::default()),
        Err(PlotError::EmptyData)
    ));
}
