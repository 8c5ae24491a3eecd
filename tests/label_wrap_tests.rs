use cartesian_rs::labels::{
    HeuristicTextMeasurer, LabelWrapOptions, MIN_WRAPPED_LINE_HEIGHT_PX, truncate_label,
    wrap_axis_labels, wrap_words,
};

#[test]
fn short_label_is_kept_in_tooltip_mode() {
    let outcome = wrap_axis_labels(
        &["Alpha"],
        10,
        true,
        &HeuristicTextMeasurer,
        &LabelWrapOptions::default(),
    );

    let label = &outcome.labels[0];
    assert_eq!(label.lines.as_slice(), ["Alpha".to_owned()]);
    assert!(!label.truncated);
    assert_eq!(label.tooltip, None);
    assert_eq!(outcome.extra_height, 0.0);
}

#[test]
fn long_label_is_truncated_with_ellipsis_and_tooltip() {
    let outcome = wrap_axis_labels(
        &["Quarterly sales"],
        10,
        true,
        &HeuristicTextMeasurer,
        &LabelWrapOptions::default(),
    );

    let label = &outcome.labels[0];
    assert_eq!(label.lines.as_slice(), ["Quarterly ...".to_owned()]);
    assert!(label.truncated);
    assert_eq!(label.tooltip.as_deref(), Some("Quarterly sales"));
    assert_eq!(outcome.extra_height, 0.0);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    assert_eq!(truncate_label("äöüäöü", 3), ("äöü...".to_owned(), true));
    assert_eq!(truncate_label("äöü", 3), ("äöü".to_owned(), false));
}

#[test]
fn word_wrap_breaks_when_budget_is_exceeded() {
    let options = LabelWrapOptions {
        width_budget_px: 60.0,
        font_size_px: 10.0,
    };
    let lines = wrap_words("New York City Hall", &HeuristicTextMeasurer, &options);
    assert_eq!(lines.as_slice(), ["New York".to_owned(), "City Hall".to_owned()]);
}

#[test]
fn single_long_word_is_never_split() {
    let lines = wrap_words(
        "Supercalifragilistic",
        &HeuristicTextMeasurer,
        &LabelWrapOptions::default(),
    );
    assert_eq!(lines.len(), 1);
}

#[test]
fn wrapped_labels_reserve_height_for_extra_words() {
    let outcome = wrap_axis_labels(
        &["alpha beta gamma delta epsilon", "one"],
        10,
        false,
        &HeuristicTextMeasurer,
        &LabelWrapOptions::default(),
    );

    assert_eq!(outcome.labels[0].lines.len(), 5);
    assert!(outcome.labels[0].is_wrapped());
    assert!(!outcome.labels[1].is_wrapped());
    assert_eq!(outcome.extra_height, 2.0 * MIN_WRAPPED_LINE_HEIGHT_PX);
}

#[test]
fn measured_line_height_wins_over_minimum() {
    let tall_measurer = |text: &str, _font_size: f64| (text.len() as f64 * 10.0, 20.0);
    let outcome = wrap_axis_labels(
        &["a b c d"],
        10,
        false,
        &tall_measurer,
        &LabelWrapOptions::default(),
    );
    assert_eq!(outcome.labels[0].lines.len(), 4);
    assert_eq!(outcome.extra_height, 20.0);
}

#[test]
fn labels_that_fit_need_no_extra_height() {
    let outcome = wrap_axis_labels(
        &["a b c d e"],
        10,
        false,
        &|_: &str, _: f64| (1.0, 10.0),
        &LabelWrapOptions::default(),
    );
    assert!(!outcome.labels[0].is_wrapped());
    assert_eq!(outcome.extra_height, 0.0);
}
