use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{check_parallel, Error, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Create (or truncate) `path` for writing.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `header`, then one tab-separated `col1 col2` row per pair.
///
/// Values are printed as `{:7.4}`.
pub fn write_table<W: Write>(mut out: W, header: &str, col1: &[f64], col2: &[f64]) -> Result<()> {
    check_parallel("print_table", &[col1, col2])?;

    writeln!(out, "{header}").map_err(|e| Error::io("writing table header", e))?;
    let mut rows = row_writer(out);
    for (a, b) in col1.iter().zip(col2) {
        rows.write_record([cell(*a), cell(*b)])?;
    }
    rows.flush().map_err(|e| Error::io("writing table", e))
}

/// Write a two-column table to a new file at `path`.
///
/// Lengths are checked before the file is created, so a bad call never
/// leaves an empty or truncated file behind.
pub fn print_table(path: &Path, header: &str, col1: &[f64], col2: &[f64]) -> Result<()> {
    check_parallel("print_table", &[col1, col2])?;
    write_table(create_output(path)?, header, col1, col2)?;
    log::info!("wrote {} rows to {}", col1.len(), path.display());
    Ok(())
}

/// Write a histogram: each value next to the left edge of its bin, then a
/// final row holding only the right edge of the last bin.
///
/// `edges` must have exactly one more element than `values`.
pub fn write_hist<W: Write>(mut out: W, edges: &[f64], values: &[f64]) -> Result<()> {
    check_hist(edges, values)?;

    writeln!(out, "Bin Start\tValue").map_err(|e| Error::io("writing histogram header", e))?;
    let mut rows = row_writer(out);
    for (edge, value) in edges.iter().zip(values) {
        rows.write_record([cell(*edge), cell(*value)])?;
    }
    if let Some(last) = edges.last() {
        rows.write_record([cell(*last)])?;
    }
    rows.flush().map_err(|e| Error::io("writing histogram", e))
}

pub fn print_hist(path: &Path, edges: &[f64], values: &[f64]) -> Result<()> {
    check_hist(edges, values)?;
    write_hist(create_output(path)?, edges, values)?;
    log::info!("wrote {}-bin histogram to {}", values.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn row_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out)
}

fn cell(x: f64) -> String {
    format!("{x:7.4}")
}

fn check_hist(edges: &[f64], values: &[f64]) -> Result<()> {
    if edges.len() != values.len() + 1 {
        return Err(Error::InvalidArgument(format!(
            "Mismatched vectors passed to print_hist() (gave {}, {})",
            edges.len(),
            values.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_layout() {
        let text = render(|out| write_table(out, "Time\tMag", &[1.0, 12.5], &[0.25, -3.0]));
        assert_eq!(text, "Time\tMag\n 1.0000\t 0.2500\n12.5000\t-3.0000\n");
    }

    #[test]
    fn empty_table_is_header_only() {
        let text = render(|out| write_table(out, "Freq\tPower", &[], &[]));
        assert_eq!(text, "Freq\tPower\n");
    }

    #[test]
    fn histogram_layout() {
        let text = render(|out| write_hist(out, &[0.0, 1.0, 2.0], &[3.0, 4.0]));
        assert_eq!(
            text,
            "Bin Start\tValue\n 0.0000\t 3.0000\n 1.0000\t 4.0000\n 2.0000\n"
        );
    }

    #[test]
    fn mismatched_table_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let err = print_table(&path, "A\tB", &[1.0, 2.0], &[1.0]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("(gave 2, 1)"));
        assert!(!path.exists());
    }

    #[test]
    fn mismatched_histogram_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.txt");

        let err = print_hist(&path, &[0.0, 1.0], &[1.0, 2.0]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(!path.exists());
    }

    #[test]
    fn print_table_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        print_table(&path, "Offset\tACF", &[0.5], &[1.0]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Offset\tACF\n 0.5000\t 1.0000\n");
    }

    #[test]
    fn unwritable_path_is_io_failure() {
        let err = print_table(Path::new("/nonexistent/dir/out.txt"), "A\tB", &[], &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }
}
