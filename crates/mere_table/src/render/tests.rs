#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::HeaderLayout;
use crate::emitter::StringEmitter;
use crate::width::negotiate_all;

fn render_to_string(columns: &mut [Column], rows: usize, config: &RenderConfig) -> String {
    negotiate_all(columns);
    let mut emitter = StringEmitter::new();
    render(columns, rows, config, &mut emitter);
    emitter.output()
}

fn grouped_table() -> Vec<Column> {
    let mut group = Column::new("b");
    group.add_child("x");
    let mut columns = vec![Column::new("a"), group];
    let mut row = vec!["1".to_string(), "22".to_string()].into_iter();
    for column in &mut columns {
        column.consume_values(&mut row).unwrap();
    }
    columns
}

#[test]
fn cell_right_justifies_content() {
    let mut emitter = StringEmitter::new();
    Cell::text("ab", 5, '|').emit(&mut emitter);
    assert_eq!(emitter.output(), "   ab|");
}

#[test]
fn fill_cell_spans_width() {
    let mut emitter = StringEmitter::new();
    Cell::fill('=', 3, '+').emit(&mut emitter);
    assert_eq!(emitter.output(), "===+");
}

#[test]
fn oversized_content_is_not_truncated() {
    let mut emitter = StringEmitter::new();
    Cell::text("abcdef", 3, '|').emit(&mut emitter);
    assert_eq!(emitter.output(), "abcdef|");
}

#[test]
fn pass_leads() {
    let glyphs = Glyphs::ASCII;
    assert_eq!(Pass::TopBorder.lead(&glyphs), '+');
    assert_eq!(Pass::HeaderSeparator.lead(&glyphs), '+');
    assert_eq!(Pass::BottomBorder.lead(&glyphs), '+');
    assert_eq!(Pass::GroupTitles.lead(&glyphs), '|');
    assert_eq!(Pass::Row(3).lead(&glyphs), '|');
}

#[test]
fn passes_compact_without_rows() {
    let all: Vec<_> = passes(0, false).collect();
    assert_eq!(
        all,
        [
            Pass::TopBorder,
            Pass::LeafTitles,
            Pass::HeaderSeparator,
            Pass::BottomBorder
        ]
    );
}

#[test]
fn passes_full_with_rows() {
    let all: Vec<_> = passes(2, true).collect();
    assert_eq!(
        all,
        [
            Pass::TopBorder,
            Pass::GroupTitles,
            Pass::LeafTitles,
            Pass::SubcolumnTitles,
            Pass::HeaderSeparator,
            Pass::Row(0),
            Pass::Row(1),
            Pass::BottomBorder
        ]
    );
}

#[test]
fn group_top_border_is_one_cell() {
    let mut columns = grouped_table();
    negotiate_all(&mut columns);
    let mut cells = Vec::new();
    column_cells(&columns[1], Pass::TopBorder, &Glyphs::ASCII, &mut cells);
    assert_eq!(cells, [Cell::fill('-', 2, '+')]);
}

#[test]
fn group_rows_split_per_subcolumn() {
    let mut group = Column::new("g");
    group.add_child("x");
    group.add_child("y");
    let mut row = vec!["1".to_string(), "2".to_string()].into_iter();
    group.consume_values(&mut row).unwrap();
    let mut columns = vec![group];
    negotiate_all(&mut columns);

    let mut cells = Vec::new();
    column_cells(&columns[0], Pass::Row(0), &Glyphs::ASCII, &mut cells);
    assert_eq!(cells, [Cell::text("1", 1, '|'), Cell::text("2", 1, '|')]);

    cells.clear();
    column_cells(&columns[0], Pass::LeafTitles, &Glyphs::ASCII, &mut cells);
    assert_eq!(cells, [Cell::fill('-', 1, '+'), Cell::fill('-', 1, '+')]);
}

#[test]
fn renders_grouped_table() {
    let mut columns = grouped_table();
    let output = render_to_string(&mut columns, 1, &RenderConfig::default());
    let expected = "\
+-+--+
| | b|
|a|--+
| | x|
+=+==+
|1|22|
+-+--+
";
    assert_eq!(output, expected);
}

#[test]
fn renders_compact_header_without_groups() {
    let mut columns = vec![Column::new("name")];
    let output = render_to_string(&mut columns, 0, &RenderConfig::default());
    assert_eq!(output, "+----+\n|name|\n+====+\n+----+\n");
}

#[test]
fn renders_full_header_without_groups() {
    let mut columns = vec![Column::new("id")];
    let config = RenderConfig::with_header(HeaderLayout::Full);
    let output = render_to_string(&mut columns, 0, &config);
    assert_eq!(output, "+--+\n|  |\n|id|\n|  |\n+==+\n+--+\n");
}

#[test]
fn renders_custom_glyphs() {
    let mut columns = vec![Column::with_values("k", ["v"])];
    let glyphs = Glyphs {
        corner: '#',
        horizontal: '~',
        vertical: '!',
        header: '*',
    };
    let output = render_to_string(&mut columns, 1, &RenderConfig::with_glyphs(glyphs));
    assert_eq!(output, "#~#\n!k!\n#*#\n!v!\n#~#\n");
}

#[test]
fn line_width_matches_rendered_lines() {
    let mut columns = grouped_table();
    let output = render_to_string(&mut columns, 1, &RenderConfig::default());
    for line in output.lines() {
        assert_eq!(line.len(), line_width(&columns));
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn render_refuses_nesting_past_subcolumns() {
    let mut column = Column::new("outer");
    column.add_child("inner").add_child("leaf");
    let mut columns = vec![column];
    render_to_string(&mut columns, 0, &RenderConfig::default());
}
