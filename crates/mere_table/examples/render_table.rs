//! Render a small grouped table to stdout.
//!
//! Run with `RUST_LOG=mere_table=trace` to see width negotiation events.

use std::io;

use mere_table::{init_tracing, Table, TableError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut table = Table::with_columns(["host", "latency (ms)", "status"]);
    table.add_subcolumn("latency (ms)", "p50")?;
    table.add_subcolumn("latency (ms)", "p99")?;

    table.add_values(["alpha", "3", "12", "ok"])?;
    table.add_values(["beta.internal", "41", "380", "degraded"])?;

    if let Err(err @ TableError::RowArity { .. }) = table.add_values(["gamma"]) {
        eprintln!("skipped row: {err}");
    }

    table.write_to(io::stdout().lock())?;
    Ok(())
}
