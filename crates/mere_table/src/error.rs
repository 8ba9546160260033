//! Table Errors
//!
//! Usage errors reported at the mutation boundary. None of these are runtime
//! faults: each one names a caller contract the table refused to violate.

use thiserror::Error;

/// Error returned when a table mutation would misalign or corrupt row data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row supplied a different number of values than there are leaf columns.
    #[error("row has {found} values but the table has {expected} leaf columns")]
    RowArity { expected: usize, found: usize },

    /// The value cursor ran out before every leaf received a value.
    #[error("no value left for column `{column}`")]
    ValuesExhausted { column: String },

    /// A subcolumn with this title already exists under the column.
    #[error("column `{column}` already has a subcolumn `{subcolumn}`")]
    DuplicateSubcolumn { column: String, subcolumn: String },

    /// The column already holds row values and cannot become a group.
    #[error("column `{column}` holds row values and cannot take subcolumns")]
    LeafHasValues { column: String },

    /// The column nests deeper than top-level columns plus one subcolumn layer.
    #[error("column `{column}` has depth {depth}, at most 2 levels can be rendered")]
    NestingTooDeep { column: String, depth: usize },

    /// A group column holds row values that no leaf would ever render.
    #[error("group column `{column}` holds row values")]
    GroupHasValues { column: String },

    /// Two top-level columns share a title, making lookups by title ambiguous.
    #[error("top-level column `{column}` is declared more than once")]
    DuplicateColumn { column: String },

    /// A leaf column holds a different number of values than its siblings.
    #[error("column `{column}` has {found} values, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },
}
