//! Mere Table
//!
//! Box-drawn plain-text tables whose columns may be split into one layer of
//! subcolumns.
//!
//! # Architecture
//!
//! Rendering is a two-pass algorithm over a column tree:
//!
//! 1. **Negotiate Pass**: Bottom-up traversal assigning each column a width
//!    from its title, its values and its siblings
//! 2. **Render Pass**: Fixed sequence of line passes drawing borders, titles
//!    and rows with the negotiated widths
//!
//! # Modules
//!
//! - [`column`]: Column tree (leaf and group nodes)
//! - [`width`]: Width negotiation
//! - [`render`]: Line passes and cells
//! - [`emitter`]: Output abstraction for strings and writers
//! - [`table`]: Table construction, mutation and rendering
//! - [`config`]: Glyphs and header layout
//! - [`error`]: Usage errors reported by table mutations
//!
//! # Example
//!
//! ```
//! use mere_table::Table;
//!
//! let mut table = Table::with_columns(["a", "b"]);
//! table.add_subcolumn("b", "x").unwrap();
//! table.add_values(["1", "22"]).unwrap();
//!
//! assert_eq!(
//!     table.render(),
//!     "+-+--+\n| | b|\n|a|--+\n| | x|\n+=+==+\n|1|22|\n+-+--+\n"
//! );
//! ```

pub mod column;
pub mod config;
pub mod emitter;
pub mod error;
pub mod render;
pub mod table;
pub mod width;

pub use column::Column;
pub use config::{Glyphs, HeaderLayout, RenderConfig};
pub use emitter::{Emitter, StringEmitter, WriterEmitter};
pub use error::TableError;
pub use render::{Cell, Pass};
pub use table::{ColumnOutcome, Table, MAX_DEPTH};
pub use width::{negotiate, negotiate_all};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=mere_table=debug` or `RUST_LOG=mere_table=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
