//! Writers for the supported output formats.
use crate::bird::BirdEntry;
use crate::cli::OutputFormat;
use crate::error::Result;
use csv::WriterBuilder;
use std::io::Write;

/// Writes `entries` in the requested format. `html` is the already rendered document.
pub fn write_output(
    format: &OutputFormat,
    entries: &[BirdEntry],
    html: &str,
    writer: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Html => {
            writeln!(writer, "{}", html)?;
        }
        OutputFormat::Json => write_json(entries, writer)?,
        OutputFormat::Tsv => write_tsv(entries, writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Pretty-printed JSON array of entries.
pub fn write_json(entries: &[BirdEntry], writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, entries)?;
    writeln!(writer)?;
    Ok(())
}

/// Tab-separated table, one entry per row.
pub fn write_tsv(entries: &[BirdEntry], writer: &mut dyn Write) -> Result<()> {
    let mut tsv = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    tsv.write_record(["common_name", "scientific_name", "original"])?;
    for entry in entries {
        tsv.write_record([
            entry.common_name.as_str(),
            entry.scientific_name.as_str(),
            entry.original.as_str(),
        ])?;
    }
    tsv.flush()?;
    Ok(())
}
