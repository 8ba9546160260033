//! Table Rendering
//!
//! Turns negotiated widths into bordered text, one horizontal pass per line.
//!
//! # Passes
//!
//! | Pass | Lead | Leaf column | Group column |
//! |------|------|-------------|--------------|
//! | Top border | `+` | `-` run | `-` run over the whole group |
//! | Group titles | `\|` | blank | group title over the whole group |
//! | Leaf titles | `\|` | title | `-` run per subcolumn, `+` junctions |
//! | Subcolumn titles | `\|` | blank | title per subcolumn |
//! | Header separator | `+` | `=` run | `=` run per subcolumn |
//! | Row `i` | `\|` | `values[i]` | `values[i]` per subcolumn |
//! | Bottom border | `+` | `-` run | `-` run per subcolumn |
//!
//! Only two levels are rendered: top-level columns and the immediate children
//! of groups. Rendering is reachable only through [`Table`](crate::Table),
//! which rejects deeper trees.

#[cfg(test)]
mod tests;

use std::iter;

use crate::column::Column;
use crate::config::{Glyphs, RenderConfig};
use crate::emitter::Emitter;
use crate::table::MAX_DEPTH;

/// One horizontal line of the rendered table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pass {
    TopBorder,
    GroupTitles,
    LeafTitles,
    SubcolumnTitles,
    HeaderSeparator,
    Row(usize),
    BottomBorder,
}

impl Pass {
    /// Leading glyph of the line.
    pub fn lead(self, glyphs: &Glyphs) -> char {
        match self {
            Pass::TopBorder | Pass::HeaderSeparator | Pass::BottomBorder => glyphs.corner,
            Pass::GroupTitles | Pass::LeafTitles | Pass::SubcolumnTitles | Pass::Row(_) => {
                glyphs.vertical
            }
        }
    }
}

/// A single cell: content right-justified in `width`, padded with `fill`,
/// closed by `border`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell<'a> {
    pub content: &'a str,
    pub fill: char,
    pub border: char,
    pub width: usize,
}

impl<'a> Cell<'a> {
    /// Text cell padded with spaces.
    pub fn text(content: &'a str, width: usize, border: char) -> Self {
        Self {
            content,
            fill: ' ',
            border,
            width,
        }
    }

    /// Cell consisting only of `fill`.
    pub fn fill(fill: char, width: usize, border: char) -> Self {
        Self {
            content: "",
            fill,
            border,
            width,
        }
    }

    /// Write the cell. Content longer than `width` is written whole.
    pub fn emit<E: Emitter>(&self, emitter: &mut E) {
        emitter.emit_fill(self.fill, self.width.saturating_sub(self.content.len()));
        emitter.emit(self.content);
        emitter.emit_char(self.border);
    }
}

/// Structural level a leaf is rendered at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Top,
    Nested,
}

/// Sequence of passes for a table with `rows` rows.
pub fn passes(rows: usize, show_group_lines: bool) -> impl Iterator<Item = Pass> {
    let header = [
        Some(Pass::TopBorder),
        show_group_lines.then_some(Pass::GroupTitles),
        Some(Pass::LeafTitles),
        show_group_lines.then_some(Pass::SubcolumnTitles),
        Some(Pass::HeaderSeparator),
    ];
    header
        .into_iter()
        .flatten()
        .chain((0..rows).map(Pass::Row))
        .chain(iter::once(Pass::BottomBorder))
}

/// Character width of every line rendered from `columns`.
pub fn line_width(columns: &[Column]) -> usize {
    1 + columns.iter().map(|c| c.width() + 1).sum::<usize>()
}

/// Append the cells `column` contributes to the line of `pass`.
pub(crate) fn column_cells<'a>(
    column: &'a Column,
    pass: Pass,
    glyphs: &Glyphs,
    out: &mut Vec<Cell<'a>>,
) {
    if column.is_leaf() {
        out.push(leaf_cell(column, pass, glyphs, Level::Top));
        return;
    }

    match pass {
        Pass::TopBorder => {
            out.push(Cell::fill(glyphs.horizontal, column.width(), glyphs.corner));
        }
        Pass::GroupTitles => {
            out.push(Cell::text(column.title(), column.width(), glyphs.vertical));
        }
        _ => out.extend(
            column
                .children()
                .iter()
                .map(|child| leaf_cell(child, pass, glyphs, Level::Nested)),
        ),
    }
}

fn leaf_cell<'a>(column: &'a Column, pass: Pass, glyphs: &Glyphs, level: Level) -> Cell<'a> {
    let width = column.width();
    match (pass, level) {
        (Pass::TopBorder | Pass::BottomBorder, _) | (Pass::LeafTitles, Level::Nested) => {
            Cell::fill(glyphs.horizontal, width, glyphs.corner)
        }
        (Pass::GroupTitles, _) | (Pass::SubcolumnTitles, Level::Top) => {
            Cell::fill(' ', width, glyphs.vertical)
        }
        (Pass::LeafTitles, Level::Top) | (Pass::SubcolumnTitles, Level::Nested) => {
            Cell::text(column.title(), width, glyphs.vertical)
        }
        (Pass::HeaderSeparator, _) => Cell::fill(glyphs.header, width, glyphs.corner),
        (Pass::Row(row), _) => Cell::text(
            column.values().get(row).map_or("", String::as_str),
            width,
            glyphs.vertical,
        ),
    }
}

/// Render negotiated `columns` holding `rows` rows into `emitter`.
///
/// Widths must already be negotiated and no column may be deeper than
/// [`MAX_DEPTH`]; [`Table`](crate::Table) upholds both.
#[tracing::instrument(level = "debug", skip_all, fields(columns = columns.len(), rows = rows))]
pub(crate) fn render<E: Emitter>(
    columns: &[Column],
    rows: usize,
    config: &RenderConfig,
    emitter: &mut E,
) {
    debug_assert!(columns.iter().all(|c| c.depth() <= MAX_DEPTH));
    let has_groups = columns.iter().any(Column::is_group);
    let glyphs = &config.glyphs;
    let mut cells = Vec::new();

    for pass in passes(rows, config.header.shows_group_lines(has_groups)) {
        cells.clear();
        for column in columns {
            column_cells(column, pass, glyphs, &mut cells);
        }

        emitter.emit_char(pass.lead(glyphs));
        for cell in &cells {
            cell.emit(emitter);
        }
        emitter.emit_newline();
    }
}
