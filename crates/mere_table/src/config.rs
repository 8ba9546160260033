//! Render Configuration
//!
//! Controls the glyphs used for borders and whether blank header lines are
//! emitted for tables without subcolumns.

/// Characters used to draw the table frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyphs {
    /// Junction of horizontal and vertical borders, and the line lead of border lines.
    pub corner: char,
    /// Fill of the top border, bottom border and subcolumn separators.
    pub horizontal: char,
    /// Cell border on title and row lines.
    pub vertical: char,
    /// Fill of the line separating the header from the rows.
    pub header: char,
}

impl Glyphs {
    /// Plain ASCII frame: `+`, `-`, `|` and `=`.
    pub const ASCII: Glyphs = Glyphs {
        corner: '+',
        horizontal: '-',
        vertical: '|',
        header: '=',
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::ASCII
    }
}

/// How many lines the header block occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HeaderLayout {
    /// Emit the group-title and subcolumn-title lines only when some column
    /// has subcolumns (default).
    #[default]
    Compact,

    /// Always emit all four header lines, blank or not.
    Full,
}

impl HeaderLayout {
    /// Whether the group-title and subcolumn-title lines are emitted.
    #[inline]
    pub fn shows_group_lines(self, has_groups: bool) -> bool {
        match self {
            HeaderLayout::Compact => has_groups,
            HeaderLayout::Full => true,
        }
    }
}

/// Configuration for rendering a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub glyphs: Glyphs,
    pub header: HeaderLayout,
}

impl RenderConfig {
    /// Create a config with the given glyph set.
    pub fn with_glyphs(glyphs: Glyphs) -> Self {
        Self {
            glyphs,
            ..Default::default()
        }
    }

    /// Create a config with the given header layout.
    pub fn with_header(header: HeaderLayout) -> Self {
        Self {
            header,
            ..Default::default()
        }
    }
}
