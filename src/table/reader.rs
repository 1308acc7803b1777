use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::format::{Delimiter, RowFormat};
use crate::error::{Error, Result};

const COMMENT: char = '#';

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Open `path` for reading, naming the file in the error.
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a two-column numeric table.
///
/// Blank lines and lines starting with `#` are skipped. Nothing is returned
/// unless every row parses.
pub fn read_table2<R: Read>(input: R, format: &RowFormat) -> Result<(Vec<f64>, Vec<f64>)> {
    format.validate(2)?;
    let [col1, col2] = into_array::<2>(read_columns(input, format)?)?;
    Ok((col1, col2))
}

/// Read a three-column numeric table. See [`read_table2`].
pub fn read_table3<R: Read>(
    input: R,
    format: &RowFormat,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    format.validate(3)?;
    let [col1, col2, col3] = into_array::<3>(read_columns(input, format)?)?;
    Ok((col1, col2, col3))
}

pub fn read_table2_file(path: &Path, format: &RowFormat) -> Result<(Vec<f64>, Vec<f64>)> {
    read_table2(open_input(path)?, format)
}

pub fn read_table3_file(
    path: &Path,
    format: &RowFormat,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    read_table3(open_input(path)?, format)
}

/// Read a list of file names, one per line.
///
/// Lines starting with `#` and empty lines are skipped. Only the line
/// terminator is stripped, so names may contain or end in spaces.
pub fn read_file_names(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(open_input(path)?);
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| Error::io(format!("reading {}", path.display()), e))?;
        let name = line.strip_suffix('\r').unwrap_or(&line);
        if name.is_empty() || name.starts_with(COMMENT) {
            continue;
        }
        names.push(name.to_string());
    }
    Ok(names)
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn read_columns<R: Read>(input: R, format: &RowFormat) -> Result<Vec<Vec<f64>>> {
    let mut columns = vec![Vec::new(); format.columns.len()];

    match format.delimiter {
        Delimiter::Whitespace => {
            for (idx, line) in BufReader::new(input).lines().enumerate() {
                let line = line.map_err(|e| Error::io("reading table", e))?;
                let fields: Vec<&str> = line.split_whitespace().collect();
                push_row(&mut columns, &fields, format, idx + 1)?;
            }
        }
        Delimiter::Byte(delimiter) => {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .delimiter(delimiter)
                .comment(Some(b'#'))
                .trim(csv::Trim::All)
                .flexible(true)
                .from_reader(input);
            for result in reader.records() {
                let record = result?;
                let line = record.position().map_or(0, |p| p.line() as usize);
                let fields: Vec<&str> = record.iter().collect();
                push_row(&mut columns, &fields, format, line)?;
            }
        }
    }

    log::debug!(
        "read {} rows of {} columns",
        columns.first().map_or(0, Vec::len),
        columns.len()
    );
    Ok(columns)
}

/// Append the selected fields of one row. Blank and comment rows are ignored.
fn push_row(
    columns: &mut [Vec<f64>],
    fields: &[&str],
    format: &RowFormat,
    line: usize,
) -> Result<()> {
    match fields.first() {
        None => return Ok(()),
        Some(first) if first.starts_with(COMMENT) => return Ok(()),
        Some(_) if fields.iter().all(|f| f.is_empty()) => return Ok(()),
        Some(_) => {}
    }
    if fields.len() < format.fields {
        return Err(Error::Misformatted {
            line,
            reason: format!(
                "expected {} fields, found {}",
                format.fields,
                fields.len()
            ),
        });
    }

    let mut row = Vec::with_capacity(columns.len());
    for &field in &format.columns {
        let raw = fields[field];
        let value = raw.parse::<f64>().map_err(|_| Error::Misformatted {
            line,
            reason: format!("'{raw}' is not a number"),
        })?;
        row.push(value);
    }
    for (column, value) in columns.iter_mut().zip(row) {
        column.push(value);
    }
    Ok(())
}

fn into_array<const N: usize>(columns: Vec<Vec<f64>>) -> Result<[Vec<f64>; N]> {
    columns.try_into().map_err(|columns: Vec<Vec<f64>>| {
        Error::InvalidArgument(format!(
            "Expected {N} columns, read {}",
            columns.len()
        ))
    })
}
