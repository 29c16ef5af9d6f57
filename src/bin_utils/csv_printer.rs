use std::io::Write;

use csv::Writer;
use serde::Serialize;

/// Writes any serializable rows (account summaries, transaction records)
/// as CSV with a header line.
pub fn print_csv<W, T>(output: &mut W, rows: impl IntoIterator<Item = T>) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
