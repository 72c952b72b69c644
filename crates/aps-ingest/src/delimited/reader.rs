//! Delimited file reading into positional datasets.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use aps_model::{Dataset, LoadOptions, Record};
use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// Reads a delimited catalog file into a [`Dataset`].
///
/// The first row becomes the header. Rows whose field count differs from
/// the header are kept so the cleaner can account for them.
pub fn read_dataset(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let delimiter = delimiter_byte(options.delimiter)?;
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let dataset = read_with_delimiter(file, delimiter, options.quoting, path)?;
    tracing::debug!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.width(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Reads a delimited catalog from any reader.
///
/// `source` is only used to label errors.
pub fn read_dataset_from_reader<R: Read>(
    reader: R,
    options: &LoadOptions,
    source: &Path,
) -> Result<Dataset> {
    let delimiter = delimiter_byte(options.delimiter)?;
    read_with_delimiter(reader, delimiter, options.quoting, source)
}

fn read_with_delimiter<R: Read>(
    reader: R,
    delimiter: u8,
    quoting: bool,
    source: &Path,
) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .quoting(quoting)
        .from_reader(reader);

    let mut rows = reader.records();
    let header = match rows.next() {
        Some(record) => header_record(&record.map_err(|e| csv_error(source, e))?),
        None => {
            return Err(IngestError::EmptyCsv {
                path: source.to_path_buf(),
            });
        }
    };

    let mut records = Vec::new();
    for record in rows {
        let record = record.map_err(|e| csv_error(source, e))?;
        records.push(record.iter().map(str::to_string).collect::<Record>());
    }
    Ok(Dataset::new(header, records))
}

/// Builds the header record, dropping a UTF-8 BOM from the first field.
fn header_record(raw: &StringRecord) -> Record {
    raw.iter()
        .enumerate()
        .map(|(idx, value)| {
            if idx == 0 {
                value.strip_prefix('\u{feff}').unwrap_or(value).to_string()
            } else {
                value.to_string()
            }
        })
        .collect()
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(IngestError::InvalidDelimiter { delimiter })
}

fn csv_error(source: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    let line = err.position().map(csv::Position::line);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => IngestError::FileRead {
            path: source.to_path_buf(),
            source: io,
        },
        _ => IngestError::CsvParse {
            path: source.to_path_buf(),
            line,
            message,
        },
    }
}
