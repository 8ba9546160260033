//! Column Tree
//!
//! A column is either a leaf holding one value per row or a group holding
//! ordered subcolumns. Groups never carry values of their own.
//!
//! Row values are distributed over leaves in leaf traversal order: pre-order,
//! left to right, skipping groups.

use crate::error::TableError;

/// A node of the column tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    title: String,
    pub(crate) width: usize,
    children: Vec<Column>,
    values: Vec<String>,
}

impl Column {
    /// Create a leaf column with no values.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 0,
            children: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create a leaf column pre-populated with row values.
    pub fn with_values<I, S>(title: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            ..Self::new(title)
        }
    }

    /// Header label of this column.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Display width assigned by the last negotiation.
    ///
    /// Zero until the column has been negotiated.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn children(&self) -> &[Column] {
        &self.children
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find the first immediate child with the given title.
    pub fn child(&self, title: &str) -> Option<&Column> {
        self.children.iter().find(|c| c.title == title)
    }

    /// Number of structural levels below and including this column.
    ///
    /// A leaf has depth 1; a group has depth one more than its deepest child.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Column::depth).max().unwrap_or(0)
    }

    /// Number of leaves reachable from this column, itself included if a leaf.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Column::leaf_count).sum()
        }
    }

    /// Append a new leaf subcolumn.
    ///
    /// Duplicate titles are not checked here; the table validates them.
    pub fn add_child(&mut self, title: impl Into<String>) -> &mut Column {
        self.children.push(Column::new(title));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Take this column's share of one row from `cursor`.
    ///
    /// A leaf takes exactly one value; a group delegates to each child in order.
    pub fn consume_values<I>(&mut self, cursor: &mut I) -> Result<(), TableError>
    where
        I: Iterator<Item = String>,
    {
        if self.is_group() {
            for child in &mut self.children {
                child.consume_values(cursor)?;
            }
            return Ok(());
        }

        match cursor.next() {
            Some(value) => {
                self.values.push(value);
                Ok(())
            }
            None => Err(TableError::ValuesExhausted {
                column: self.title.clone(),
            }),
        }
    }

    /// Drop all row values in this subtree, keeping the structure.
    pub fn clear(&mut self) {
        for child in &mut self.children {
            child.clear();
        }
        self.values.clear();
    }

    /// Pad every leaf in this subtree with empty values up to `rows`.
    pub(crate) fn backfill(&mut self, rows: usize) {
        if self.is_leaf() {
            self.values.resize(rows, String::new());
            return;
        }
        for child in &mut self.children {
            child.backfill(rows);
        }
    }

    /// First leaf in this subtree whose value count differs from `rows`.
    pub(crate) fn ragged_leaf(&self, rows: usize) -> Option<&Column> {
        if self.is_leaf() {
            return (self.values.len() != rows).then_some(self);
        }
        self.children.iter().find_map(|c| c.ragged_leaf(rows))
    }

    /// First group in this subtree that still carries values of its own.
    pub(crate) fn group_with_values(&self) -> Option<&Column> {
        if self.is_leaf() {
            return None;
        }
        if !self.values.is_empty() {
            return Some(self);
        }
        self.children.iter().find_map(Column::group_with_values)
    }

    /// Row count implied by the first leaf of this subtree.
    pub(crate) fn first_leaf_rows(&self) -> usize {
        match self.children.first() {
            Some(child) => child.first_leaf_rows(),
            None => self.values.len(),
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Column] {
        &mut self.children
    }
}
