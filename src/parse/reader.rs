// src/parse/reader.rs

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
    str,
};
use tracing::debug;

use super::record::Record;
use super::value::{Value, SENTINEL};
use crate::error::{Error, FormatError};
use crate::schema::{allwise, CatalogSchema, Format};

/// Parse one record. `line` must already be stripped of its terminator.
///
/// Every column is sliced at its documented byte range, trimmed, and
/// converted per its format. Spare (separator) bytes must be blank, which
/// catches misaligned records early instead of yielding shifted garbage.
pub fn parse_line(line: &str, schema: &CatalogSchema) -> Result<Record, FormatError> {
    let bytes = line.as_bytes();
    if bytes.len() != schema.record_len {
        return Err(FormatError::WrongLength {
            expected: schema.record_len,
            actual: bytes.len(),
        });
    }

    for &(start, end) in &schema.spares {
        for offset in start..=end {
            if bytes[offset - 1] != b' ' {
                return Err(FormatError::DirtySeparator { offset });
            }
        }
    }

    let mut fields = Vec::with_capacity(schema.columns.len());
    for col in &schema.columns {
        let raw = &bytes[col.start - 1..col.end];
        let text = str::from_utf8(raw).map_err(|_| FormatError::BadEncoding {
            column: col.label.clone(),
        })?;
        let trimmed = text.trim();

        let value = if trimmed.is_empty() || (col.nullable && trimmed == SENTINEL) {
            if !col.nullable {
                return Err(FormatError::BlankField {
                    column: col.label.clone(),
                });
            }
            Value::Absent
        } else {
            match col.format {
                Format::Str { .. } => Value::Str(trimmed.to_string()),
                Format::Int { .. } => {
                    Value::Int(trimmed.parse().map_err(|_| FormatError::BadNumber {
                        column: col.label.clone(),
                        value: trimmed.to_string(),
                        kind: "integer",
                    })?)
                }
                Format::Fixed { .. } | Format::Sci { .. } => {
                    Value::Float(trimmed.parse().map_err(|_| FormatError::BadNumber {
                        column: col.label.clone(),
                        value: trimmed.to_string(),
                        kind: "real",
                    })?)
                }
            }
        };
        fields.push((col.label.clone(), value));
    }

    Ok(Record::new(fields))
}

/// Lazy, sequential reader over fixed-width catalog lines.
///
/// Yields one `Record` per line; malformed lines surface as errors carrying
/// their 1-based line number and are never skipped. Restart by reopening
/// the stream.
pub struct CatalogReader<'s, R: BufRead> {
    lines: Lines<R>,
    schema: &'s CatalogSchema,
    line_no: u64,
}

impl<'s, R: BufRead> CatalogReader<'s, R> {
    pub fn new(reader: R, schema: &'s CatalogSchema) -> Self {
        CatalogReader {
            lines: reader.lines(),
            schema,
            line_no: 0,
        }
    }

    /// 1-based number of the line most recently yielded.
    pub fn line_no(&self) -> u64 {
        self.line_no
    }
}

impl CatalogReader<'static, BufReader<File>> {
    /// Open a published catalog file against the built-in AllWISE layout.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening catalog");
        let file = File::open(path)?;
        Ok(CatalogReader::new(BufReader::new(file), allwise::layout()))
    }
}

impl<'s, R: BufRead> Iterator for CatalogReader<'s, R> {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };
        self.line_no += 1;

        // `Lines` strips LF; tolerate CRLF input too
        let stripped = line.strip_suffix('\r').unwrap_or(&line);
        Some(parse_line(stripped, self.schema).map_err(|e| e.at_line(self.line_no)))
    }
}
