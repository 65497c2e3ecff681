use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;
use hayakuchi_analysis::extract::{self, LineMeasurement};
use hayakuchi_reading::{PhoneticReader, RateUnit};

/// Serializes `value` as pretty JSON to `output` (or stdout when `None`).
pub(crate) fn write_json<T>(value: &T, output: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_pretty(&mut writer, value)
                .with_context(|| format!("Failed to write JSON to {}", path.display()))
        }
        None => {
            let mut writer = io::stdout().lock();
            write_pretty(&mut writer, value).context("Failed to write JSON to stdout")
        }
    }
}

fn write_pretty<W, T>(writer: &mut W, value: &T) -> anyhow::Result<()>
where
    W: io::Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// The show name reported for a directory: its final path component.
pub(crate) fn show_name(dir: &Path) -> String {
    dir.file_name().map_or_else(
        || dir.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Parses one episode file and measures its lines.
///
/// A file that cannot be read contributes an empty measurement set, with a
/// notice on stderr; the batch keeps going.
pub(crate) fn measure_file(
    file: &Path,
    unit: RateUnit,
    reader: &dyn PhoneticReader,
) -> Vec<LineMeasurement> {
    match hayakuchi_subtitle::parse_file(file) {
        Ok(records) => extract::measure_lines(&records, unit, reader),
        Err(err) => {
            eprintln!("Skipping {}: {err}", file.display());
            vec![]
        }
    }
}
