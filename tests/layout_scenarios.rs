//! End-to-end layout scenarios through the public API.
//!
//! Each test goes from markup (or plain text plus style ranges) to rows and
//! row placements with the fixed-advance metrics, so expected pixel values
//! are easy to derive by hand: every cell is 10px wide and a 12pt row is
//! 12px tall with a 9px ascent.

use styled_text::{
    Decorations, FontStyle, HorizontalAlignment, LabelConfig, LayoutOptions, MetricsCache,
    MonospaceMetrics, Orientation, Rect, Row, StyleRange, StyledLabel, StyledText,
    VerticalAlignment, WrapMode, layout, markup, place_rows,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn metrics() -> MonospaceMetrics {
    MonospaceMetrics::new(10, 9, 3)
}

fn lines(rows: &[Row]) -> Vec<String> {
    rows.iter().map(Row::text).collect()
}

fn lay_out(content: &StyledText, options: &LayoutOptions) -> Vec<Row> {
    layout::layout(&content.text_ranges(), options, &metrics())
}

#[test]
fn word_wrap_exact_fit_produces_two_rows() {
    init_tracing();
    let content = StyledText::new("hello world");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(50))
        .with_wrap(WrapMode::Word);

    let rows = lay_out(&content, &options);
    assert_eq!(lines(&rows), vec!["hello", "world"]);
}

#[test]
fn mixed_wrap_splits_word_wider_than_bounds() {
    init_tracing();
    let content = StyledText::new("internationalization");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(60))
        .with_wrap(WrapMode::Mixed);

    let rows = lay_out(&content, &options);
    assert_eq!(
        lines(&rows),
        vec!["intern", "ationa", "lizati", "on"]
    );
    assert!(rows.iter().all(|row| row.width <= 60));
}

#[test]
fn word_wrap_overflows_with_word_wider_than_bounds() {
    init_tracing();
    let content = StyledText::new("an internationalization effort");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(60))
        .with_wrap(WrapMode::Word);

    let rows = lay_out(&content, &options);
    assert_eq!(
        lines(&rows),
        vec!["an", "internationalization", "effort"]
    );
    assert_eq!(rows[1].width, 200);
}

#[test]
fn max_rows_truncates_last_row() {
    init_tracing();
    let content = StyledText::new("aaaa bbbb cccc dddd eeee ffff gggg hhhh iiii jjjj");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(100))
        .with_wrap(WrapMode::Word);

    let full = lay_out(&content, &options);
    assert_eq!(full.len(), 5);

    let rows = lay_out(&content, &options.clone().with_max_rows(2));
    assert_eq!(rows.len(), 2);
    assert!(rows[1].truncated);
    assert!(rows[1].text().ends_with("..."));
    assert!(rows[1].width <= 100);
    assert_eq!(lines(&rows), vec!["aaaa bbbb", "cccc dd..."]);
}

#[test]
fn height_budget_truncates_like_row_budget() {
    let content = StyledText::new("aaaa bbbb cccc dddd eeee");
    let options = LayoutOptions::default()
        .with_bounds(Rect::new(0, 0, 100, 30))
        .with_wrap(WrapMode::Word);

    let rows = lay_out(&content, &options);
    assert_eq!(lines(&rows), vec!["aaaa bbbb", "cccc dd..."]);
}

#[test]
fn truncation_can_be_disabled() {
    let content = StyledText::new("aaaa bbbb cccc dddd eeee");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(30))
        .with_max_rows(1)
        .with_wrap(WrapMode::Word)
        .with_truncate(false);

    let rows = lay_out(&content, &options);
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].truncated);
}

#[test]
fn styled_runs_survive_wrapping() {
    let content = markup::parse("plain {bold text:b} and {red:c(255,0,0);u}");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(100))
        .with_wrap(WrapMode::Word);

    let rows = lay_out(&content, &options);
    assert_eq!(lines(&rows), vec!["plain bold", "text and ", "red"]);

    let first = &rows[0].fragments;
    assert_eq!(first[0].text(), "plain ");
    assert!(first[0].style().is_none());
    assert_eq!(first[1].text(), "bold");
    assert!(first[1].font.is_bold());

    let second = &rows[1].fragments;
    assert_eq!(second[0].text(), "text");
    assert!(second[0].font.is_bold());

    let last = &rows[2].fragments[0];
    assert!(last.style().is_some_and(StyleRange::is_underlined));
}

#[test]
fn emphasis_inside_word_wraps_with_the_word() {
    init_tracing();
    let content = markup::parse("Delete {un:i}saved changes? {br}This cannot be undone");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(100))
        .with_wrap(WrapMode::Word)
        .with_max_rows(4);

    let rows = lay_out(&content, &options);
    assert_eq!(lines(&rows), vec!["Delete", "unsaved", "changes? ", "This..."]);

    let second = &rows[1].fragments;
    assert_eq!(second[0].text(), "un");
    assert!(second[0].font.is_italic());
    assert_eq!(second[1].text(), "saved");
    assert!(rows[3].leading);
    assert!(rows[3].truncated);
}

#[test]
fn space_before_break_does_not_cost_a_row() {
    let content = markup::parse("Save changes {br}before closing");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(120))
        .with_wrap(WrapMode::Word);

    let rows = lay_out(&content, &options);
    assert_eq!(lines(&rows), vec!["Save changes", "before", "closing"]);

    let rows = lay_out(&content, &options.clone().with_max_rows(2));
    assert_eq!(lines(&rows), vec!["Save changes", "before..."]);
}

#[test]
fn hard_breaks_produce_leading_rows() {
    let content = markup::parse("first line{br}second line");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(60))
        .with_wrap(WrapMode::Word);

    let rows = lay_out(&content, &options);
    assert_eq!(lines(&rows), vec!["first", "line", "second", "line"]);
    let leading: Vec<bool> = rows.iter().map(|row| row.leading).collect();
    assert_eq!(leading, vec![true, false, true, false]);
}

#[test]
fn subscript_keeps_base_row_height() {
    let mut content = StyledText::new("H2O");
    content
        .add_style_range(
            StyleRange::new(1, 1)
                .unwrap()
                .with_decorations(Decorations::SUBSCRIPT),
        )
        .unwrap();

    let rows = lay_out(&content, &LayoutOptions::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].height, 12);
    assert_eq!(rows[0].ascent, 9);
    assert_eq!(rows[0].width, 27);
}

#[test]
fn larger_base_font_grows_rows() {
    let content = StyledText::new("ab");
    let options = LayoutOptions::default()
        .with_font(styled_text::Font::new("Mono", 24.0).with_style(FontStyle::BOLD));

    let rows = lay_out(&content, &options);
    assert_eq!(rows[0].height, 24);
    assert_eq!(rows[0].width, 40);
}

#[test]
fn metrics_cache_gives_same_rows() {
    let content = markup::parse("{x:sp}y{z:i} with some words to wrap");
    let options = LayoutOptions::default()
        .with_bounds(Rect::with_width(80))
        .with_wrap(WrapMode::Word);

    let cache = MetricsCache::new(metrics());
    let cached = layout::layout(&content.text_ranges(), &options, &cache);
    assert_eq!(cached, lay_out(&content, &options));
    assert!(cache.cached_fonts() >= 2);
}

#[test]
fn placements_align_rows() {
    let content = StyledText::new("abcd\nab");
    let rows = lay_out(&content, &LayoutOptions::default());
    let bounds = Rect::new(10, 20, 100, 60);

    let right = place_rows(
        &rows,
        bounds,
        HorizontalAlignment::Right,
        VerticalAlignment::Bottom,
        Orientation::LeftToRight,
        0,
    );
    assert_eq!((right[0].x, right[0].y), (70, 56));
    assert_eq!((right[1].x, right[1].y), (90, 68));
    assert_eq!(right[1].baseline, 77);

    let trailing_rtl = place_rows(
        &rows,
        bounds,
        HorizontalAlignment::Trailing,
        VerticalAlignment::Top,
        Orientation::RightToLeft,
        0,
    );
    assert_eq!((trailing_rtl[0].x, trailing_rtl[0].y), (10, 20));
}

#[test]
fn label_pipeline() {
    init_tracing();
    let config = LabelConfig::default()
        .with_horizontal(HorizontalAlignment::Center)
        .with_vertical(VerticalAlignment::Top)
        .with_layout(LayoutOptions::default().with_row_gap(3));
    let mut label = StyledLabel::from_markup("{Error:b;c(red)}: file not found").with_config(config);
    label.set_wrap_mode(WrapMode::Word);
    label.set_bounds(Rect::new(0, 0, 110, 100));

    let texts: Vec<String> = label.layout(&metrics()).iter().map(Row::text).collect();
    assert_eq!(texts, vec!["Error: file", "not found"]);

    let placements = label.placements(&metrics());
    assert_eq!(placements[0].x, 0);
    assert_eq!(placements[1].x, 10);
    assert_eq!(placements[1].y, 15);

    let size = label.measure(60, &metrics());
    assert_eq!(size.rows, 4);
    assert_eq!(size.height, 4 * 12 + 3 * 3);
}
