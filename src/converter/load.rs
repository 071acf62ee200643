//! Reading the conversion tables from CSV.
//!
//! Two layouts are understood, both with a header line:
//!
//! - Munsell → RGB: `_, _, prefix, number, value, chroma, red, green, blue`
//!   where value and chroma are integers;
//! - RGB → Munsell: `red, green, blue, hue name, value, chroma`.
//!
//! Rows that cannot be parsed are logged and skipped.

use std::io::Read;
use std::str::FromStr;

use rgb::RGB8;
use tracing::warn;

use crate::error::{Error, Result};
use crate::hue::{Hue, HuePrefix};
use crate::munsell::MunsellColor;
use super::{ForwardRow, ReverseRow};

/// How the CSV sources are laid out.
#[derive(Clone, Copy, Debug)]
pub struct CsvOptions {
    /// Whether the first line is a header (skipped).
    pub has_headers: bool,
    /// Field separator, a single byte such as `b','` or `b';'`.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self { CsvOptions { has_headers: true, delimiter: b',' } }
}

impl CsvOptions {
    fn reader<R: Read>(&self, rdr: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr)
    }
}

/// Read the rows of a Munsell → RGB table.
pub fn read_forward<R: Read>(rdr: R, opts: &CsvOptions)
                             -> Result<Vec<ForwardRow>> {
    read_rows(opts.reader(rdr), "munsell→rgb", |rec, line| {
        let prefix: HuePrefix = field(rec, 2, line)?;
        let hue = Hue::new(prefix, field(rec, 3, line)?)
            .map_err(|e| malformed(line, e))?;
        Ok(ForwardRow {
            hue,
            value: field(rec, 4, line)?,
            chroma: field(rec, 5, line)?,
            rgb: rgb_fields(rec, 6, line)?,
        })
    })
}

/// Read the rows of a RGB → Munsell table.
pub fn read_reverse<R: Read>(rdr: R, opts: &CsvOptions)
                             -> Result<Vec<ReverseRow>> {
    read_rows(opts.reader(rdr), "rgb→munsell", |rec, line| {
        let rgb = rgb_fields(rec, 0, line)?;
        let hue: Hue = field(rec, 3, line)?;
        let color = MunsellColor::new(hue, field(rec, 4, line)?,
                                      field(rec, 5, line)?);
        Ok(ReverseRow { rgb, color })
    })
}

fn read_rows<R, T, F>(mut rdr: csv::Reader<R>, table: &str, parse: F)
                      -> Result<Vec<T>>
where R: Read,
      F: Fn(&csv::StringRecord, u64) -> Result<T> {
    let mut rows = vec![];
    for rec in rdr.records() {
        let rec = match rec {
            Ok(rec) => rec,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!(table = %table, "skipping unreadable row: {e}");
                continue
            }
        };
        let line = rec.position().map_or(0, |p| p.line());
        match parse(&rec, line) {
            Ok(row) => rows.push(row),
            Err(e) => warn!(table = %table, "skipping row: {e}"),
        }
    }
    Ok(rows)
}

fn malformed(line: u64, reason: impl ToString) -> Error {
    Error::MalformedRow { line, reason: reason.to_string() }
}

fn field<T>(rec: &csv::StringRecord, i: usize, line: u64) -> Result<T>
where T: FromStr, T::Err: std::fmt::Display {
    let s = rec.get(i).ok_or_else(|| malformed(line, format!(
        "{} fields, expected at least {}", rec.len(), i + 1)))?;
    s.parse().map_err(|e| malformed(line, format!("column {}, “{s}”: {e}",
                                                   i + 1)))
}

fn rgb_fields(rec: &csv::StringRecord, i: usize, line: u64) -> Result<RGB8> {
    Ok(RGB8 { r: field(rec, i, line)?,
              g: field(rec, i + 1, line)?,
              b: field(rec, i + 2, line)? })
}
