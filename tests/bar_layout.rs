use prettyplot::{BAR_STEP, BarLayout, CategoryValues, PlotError};

fn abc() -> CategoryValues {
    CategoryValues::from([("a", 3.0), ("b", 1.0), ("c", 2.0)])
}

#[test]
fn descending_puts_highest_first() {
    let l = BarLayout::compute(&abc(), true).unwrap();
    assert_eq!(l.labels, ["a", "c", "b"]);
    assert_eq!(l.values, [3.0, 2.0, 1.0]);
}

#[test]
fn ascending_puts_lowest_first() {
    let l = BarLayout::compute(&abc(), false).unwrap();
    assert_eq!(l.labels, ["b", "c", "a"]);
    assert_eq!(l.values, [1.0, 2.0, 3.0]);
}

#[test]
fn positions_step_by_bar_plus_padding() {
    let data: CategoryValues = (0..12).map(|i| (format!("k{i}"), i as f64)).collect();
    let l = BarLayout::compute(&data, true).unwrap();
    assert!((BAR_STEP - 0.30).abs() < 1e-12);
    assert_eq!(l.positions[0], 0.0);
    for pair in l.positions.windows(2) {
        assert!(pair[1] > pair[0]);
        assert!((pair[1] - pair[0] - 0.30).abs() < 1e-9);
    }
    assert!((l.width - 0.25).abs() < 1e-12);
    assert_eq!(l.step, BAR_STEP);
}

#[test]
fn one_color_per_category() {
    for n in 1..8 {
        let data: CategoryValues = (0..n).map(|i| (format!("k{i}"), i as f64)).collect();
        let l = BarLayout::compute(&data, false).unwrap();
        assert_eq!(l.colors.len(), n);
        assert_eq!(l.positions.len(), n);
    }
}

#[test]
fn ties_keep_insertion_order_both_ways() {
    let data = CategoryValues::from([("x", 1.0), ("y", 2.0), ("z", 1.0), ("w", 2.0)]);
    let desc = BarLayout::compute(&data, true).unwrap();
    assert_eq!(desc.labels, ["y", "w", "x", "z"]);
    let asc = BarLayout::compute(&data, false).unwrap();
    assert_eq!(asc.labels, ["x", "z", "y", "w"]);

    // signed zeros compare equal
    let zeros = CategoryValues::from([("a", 0.0), ("b", -0.0)]);
    assert_eq!(BarLayout::compute(&zeros, false).unwrap().labels, ["a", "b"]);
    assert_eq!(BarLayout::compute(&zeros, true).unwrap().labels, ["a", "b"]);
}

#[test]
fn empty_mapping_is_rejected() {
    assert!(matches!(
        BarLayout::compute(&CategoryValues::new(), true),
        Err(PlotError::EmptyData)
    ));
}

#[test]
fn colors_follow_sorted_order_not_input_order() {
    let l = BarLayout::compute(&abc(), true).unwrap();
    // first bar gets the lightest ramp color regardless of which label it is
    assert_eq!(l.colors[0].hex(), "#D9D9D9");
    assert_eq!(l.colors[2].hex(), "#969696");
}
