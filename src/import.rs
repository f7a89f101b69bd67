use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::debug;

use crate::db::ProductStore;
use crate::row::ProductRow;

/// Discard the header line, then parse and insert every remaining line in
/// file order. Returns the number of rows inserted.
///
/// The first error — I/O, parse failure, or store rejection — aborts the run.
/// Rows inserted before the failing line stay in the store; nothing is rolled
/// back.
pub async fn run_import<R, S>(mut reader: R, store: &S) -> Result<u64>
where
    R: BufRead,
    S: ProductStore,
{
    let mut line = String::new();
    let header_bytes = reader.read_line(&mut line).context("reading header line")?;
    if header_bytes == 0 {
        // empty input: nothing to import
        return Ok(0);
    }

    let mut inserted = 0u64;
    let mut line_no = 1u64;
    loop {
        line.clear();
        line_no += 1;
        let bytes = reader
            .read_line(&mut line)
            .with_context(|| format!("reading line {}", line_no))?;
        if bytes == 0 {
            break;
        }

        let row = ProductRow::parse(&line)
            .with_context(|| format!("parsing line {}", line_no))?;
        store
            .insert(&row)
            .await
            .with_context(|| format!("line {}", line_no))?;
        debug!(id = row.id, "inserted row");
        inserted += 1;
    }

    Ok(inserted)
}
