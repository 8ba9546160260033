//! Table
//!
//! Owns the column tree and the row count, and ties width negotiation and
//! rendering together. Mutations validate their input and leave the table
//! unchanged on error.


use std::io;

use crate::column::Column;
use crate::config::RenderConfig;
use crate::emitter::{Emitter, StringEmitter, WriterEmitter};
use crate::error::TableError;
use crate::render::{self, line_width};
use crate::width::negotiate_all;

/// Deepest column tree the renderer can draw: top-level columns plus one
/// layer of subcolumns.
pub const MAX_DEPTH: usize = 2;

/// Result of a find-or-create column lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnOutcome {
    /// A new top-level column was appended.
    Created,
    /// A top-level column with the title already existed.
    Existing,
}

impl ColumnOutcome {
    #[inline]
    pub fn is_created(self) -> bool {
        matches!(self, ColumnOutcome::Created)
    }
}

/// A table of string values with optional grouped subcolumns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    num_rows: usize,
    config: RenderConfig,
}

impl Table {
    /// Create an empty table with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given config.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a table with the given top-level columns.
    pub fn with_columns<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        table.add_columns(titles);
        table
    }

    /// Adopt a pre-built column tree.
    ///
    /// The row count is taken from the first leaf; every other leaf must hold
    /// the same number of values, and no column may nest deeper than
    /// [`MAX_DEPTH`]. Top-level titles must be unique and groups must not
    /// carry values.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        if let Some(column) = columns.iter().find(|c| c.depth() > MAX_DEPTH) {
            return Err(TableError::NestingTooDeep {
                column: column.title().to_string(),
                depth: column.depth(),
            });
        }

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.title() == column.title()) {
                return Err(TableError::DuplicateColumn {
                    column: column.title().to_string(),
                });
            }
        }

        if let Some(group) = columns.iter().find_map(Column::group_with_values) {
            return Err(TableError::GroupHasValues {
                column: group.title().to_string(),
            });
        }

        let num_rows = columns.first().map_or(0, Column::first_leaf_rows);
        if let Some(leaf) = columns.iter().find_map(|c| c.ragged_leaf(num_rows)) {
            return Err(TableError::RaggedColumns {
                column: leaf.title().to_string(),
                expected: num_rows,
                found: leaf.values().len(),
            });
        }

        Ok(Self {
            columns,
            num_rows,
            config: RenderConfig::default(),
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// First top-level column with the given title.
    pub fn column(&self, title: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.title() == title)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// Number of leaf columns, i.e. values expected per row.
    pub fn leaf_count(&self) -> usize {
        self.columns.iter().map(Column::leaf_count).sum()
    }

    /// Depth of the deepest column, 0 for a table without columns.
    pub fn depth(&self) -> usize {
        self.columns.iter().map(Column::depth).max().unwrap_or(0)
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.title() == title)
    }

    /// Append a top-level column unless one with the same title exists.
    pub fn add_column(&mut self, title: impl Into<String>) -> ColumnOutcome {
        let title = title.into();
        if self.position(&title).is_some() {
            tracing::debug!(%title, "column already exists");
            return ColumnOutcome::Existing;
        }

        let mut column = Column::new(title);
        column.backfill(self.num_rows);
        self.columns.push(column);
        ColumnOutcome::Created
    }

    /// Append several top-level columns in order.
    pub fn add_columns<I, S>(&mut self, titles: I) -> Vec<ColumnOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        titles.into_iter().map(|t| self.add_column(t)).collect()
    }

    /// Append a subcolumn under the top-level column `column`, creating that
    /// column if it does not exist.
    ///
    /// The outcome describes the parent column.
    pub fn add_subcolumn(
        &mut self,
        column: impl Into<String>,
        subcolumn: impl Into<String>,
    ) -> Result<ColumnOutcome, TableError> {
        let column = column.into();
        let subcolumn = subcolumn.into();

        let (index, outcome) = match self.position(&column) {
            Some(index) => (index, ColumnOutcome::Existing),
            None => (self.columns.len(), ColumnOutcome::Created),
        };

        if let Some(parent) = self.columns.get(index) {
            if parent.child(&subcolumn).is_some() {
                tracing::debug!(%column, %subcolumn, "duplicate subcolumn rejected");
                return Err(TableError::DuplicateSubcolumn { column, subcolumn });
            }
            if parent.is_leaf() && self.num_rows > 0 {
                tracing::debug!(
                    %column,
                    rows = self.num_rows,
                    "leaf with values cannot take subcolumns"
                );
                return Err(TableError::LeafHasValues { column });
            }
        } else {
            self.columns.push(Column::new(column));
        }

        let rows = self.num_rows;
        let parent = &mut self.columns[index];
        parent.add_child(subcolumn).backfill(rows);
        Ok(outcome)
    }

    /// Append one row of values, distributed over leaves in leaf traversal
    /// order.
    pub fn add_values<I, S>(&mut self, values: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let expected = self.leaf_count();
        if values.len() != expected {
            tracing::debug!(expected, found = values.len(), "row arity mismatch");
            return Err(TableError::RowArity {
                expected,
                found: values.len(),
            });
        }

        let mut cursor = values.into_iter();
        for column in &mut self.columns {
            column.consume_values(&mut cursor)?;
        }
        self.num_rows += 1;
        Ok(())
    }

    /// Drop every row, keeping all columns and subcolumns.
    pub fn clear(&mut self) {
        for column in &mut self.columns {
            column.clear();
        }
        self.num_rows = 0;
        negotiate_all(&mut self.columns);
    }

    /// Recompute every column width.
    pub fn negotiate_widths(&mut self) {
        negotiate_all(&mut self.columns);
    }

    /// Render the table into `emitter`.
    pub fn render_into<E: Emitter>(&mut self, emitter: &mut E) {
        self.negotiate_widths();
        render::render(&self.columns, self.num_rows, &self.config, emitter);
    }

    /// Render the table to a string.
    pub fn render(&mut self) -> String {
        self.negotiate_widths();
        let lines = self.num_rows + 6;
        let mut emitter = StringEmitter::with_capacity((line_width(&self.columns) + 1) * lines);
        render::render(&self.columns, self.num_rows, &self.config, &mut emitter);
        emitter.output()
    }

    /// Render the table straight into `writer`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error raised by the writer.
    pub fn write_to<W: io::Write>(&mut self, writer: W) -> io::Result<()> {
        let mut emitter = WriterEmitter::new(writer);
        self.render_into(&mut emitter);
        emitter.finish().map(drop)
    }
}
