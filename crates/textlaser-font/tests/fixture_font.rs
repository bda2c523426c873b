use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use textlaser_font::{Font, FontParser, GroupOrder, ParsedFont, Point};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/mini.cxf")
}

fn load(order: GroupOrder) -> ParsedFont {
    let file = File::open(fixture_path()).unwrap();
    FontParser::new("mini.cxf")
        .with_group_order(order)
        .parse_reader(BufReader::new(file))
        .unwrap()
}

#[test]
fn test_fixture_loads_every_glyph() {
    let parsed = load(GroupOrder::Legacy);
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);

    let mut keys: Vec<&str> = parsed.font.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["!", "-", "A", "D", "I", "O", "o"]);
}

#[test]
fn test_line_extents_match_records() {
    let parsed = load(GroupOrder::Legacy);
    let a = parsed.font.glyph("A").unwrap();
    let seg = a.strokes()[0];
    assert_eq!(
        (seg.x_min(), seg.x_max(), seg.y_min(), seg.y_max()),
        (0.0, 2.0, 0.0, 6.0)
    );
    assert_eq!(a.x_max(), 4.0);
    assert_eq!(a.y_max(), 6.0);
    // the cross bar is not connected to the legs
    assert_eq!(a.stroke_groups().len(), 2);
}

#[test]
fn test_font_metrics_from_fixture() {
    let parsed = load(GroupOrder::Legacy);
    assert_eq!(parsed.font.line_height(), 6.0);
    assert!((parsed.font.max_advance() - 4.0).abs() < 1e-9);
}

#[test]
fn test_two_half_arcs_join_into_one_group() {
    let parsed = load(GroupOrder::Legacy);
    let o = parsed.font.glyph("O").unwrap();
    assert_eq!(o.stroke_groups().len(), 1);
    // 180 / 20 = 9 -> 10 segments per half
    assert_eq!(o.strokes().len(), 20);
}

#[test]
fn test_counter_of_o_is_engraved_first() {
    for order in [GroupOrder::Legacy, GroupOrder::Corrected] {
        let parsed = load(order);
        let o = parsed.font.glyph("o").unwrap();
        let groups = o.stroke_groups();
        assert_eq!(groups.len(), 2);
        assert!(groups[0].bounds().x_max < groups[1].bounds().x_max);
        let first = o.ordered_strokes()[0].start();
        assert!(first.distance_to(&Point::new(3.0, 2.0)) < 1e-9);
    }
}

#[test]
fn test_reparsing_is_deterministic() {
    let first = load(GroupOrder::Legacy);
    let second = load(GroupOrder::Legacy);
    for key in first.font.keys() {
        assert_eq!(first.font.glyph(key), second.font.glyph(key));
    }
}

#[test]
fn test_default_reader_entry_point() {
    let file = File::open(fixture_path()).unwrap();
    let parsed = Font::from_reader("mini.cxf", BufReader::new(file)).unwrap();
    let d = parsed.font.glyph("D").unwrap();
    // stem, top bar and the clockwise bowl
    assert_eq!(d.stroke_groups().len(), 1);
    let last = d.strokes()[d.strokes().len() - 1].end();
    assert!(last.distance_to(&Point::new(1.0, 0.0)) < 1e-9);
}
