//! Width Negotiation
//!
//! Bottom-up traversal assigning every column its display width.
//!
//! # Width Formulas
//!
//! | Node | Width Formula |
//! |------|---------------|
//! | Leaf | `max(title.len(), max(value.len()))` |
//! | Group | `max(title.len(), child * n + (n - 1))` |
//!
//! where `child` is the uniform width given to each of the group's `n`
//! immediate children and `n - 1` counts the separators between them.
//!
//! # Redistribution
//!
//! When a group title is wider than its children's natural span, the title
//! length is split evenly with ceiling division and every immediate child is
//! widened to that share. Grandchildren are not touched.
//!
//! Lengths are byte lengths; no Unicode width awareness is applied.


use crate::column::Column;

/// Width of one separator glyph between adjacent subcolumns.
const SEPARATOR_WIDTH: usize = 1;

/// Negotiate widths for every column of a table.
#[tracing::instrument(level = "debug", skip_all, fields(columns = columns.len()))]
pub fn negotiate_all(columns: &mut [Column]) {
    for column in columns {
        negotiate(column);
    }
}

/// Negotiate the width of `column` and its whole subtree.
///
/// Returns the column's new width.
pub fn negotiate(column: &mut Column) -> usize {
    if column.is_leaf() {
        column.width = leaf_width(column.title(), column.values());
        return column.width;
    }

    let title_width = column.title().len();
    let children = column.children_mut();
    let count = children.len();

    let mut child_width = 0;
    for child in children.iter_mut() {
        child_width = child_width.max(negotiate(child));
    }

    let mut span = spread_width(child_width, count);
    if title_width > span {
        child_width = redistribute(title_width, count);
        span = spread_width(child_width, count);
        tracing::trace!(
            title = column.title(),
            child_width,
            span,
            "title wider than subcolumns, redistributing"
        );
    }

    for child in column.children_mut() {
        child.width = child_width;
    }

    column.width = title_width.max(span);
    column.width
}

/// Natural width of a leaf: its title or its widest value.
pub fn leaf_width(title: &str, values: &[String]) -> usize {
    values
        .iter()
        .map(String::len)
        .fold(title.len(), usize::max)
}

/// Width spanned by `count` cells of `child_width` plus their separators.
#[inline]
pub fn spread_width(child_width: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    child_width * count + (count - 1) * SEPARATOR_WIDTH
}

/// Per-child width needed so that `count` children cover `title_width`.
///
/// Uses ceiling division so the share is uniform even when the title length
/// is not divisible by `count`.
#[inline]
pub fn redistribute(title_width: usize, count: usize) -> usize {
    if count == 0 {
        return title_width;
    }
    title_width.div_ceil(count)
}
