// src/schema/layout.rs

use serde::{Deserialize, Serialize};

use super::types::{ColumnSpec, Format};
use crate::error::SchemaError;

/// A complete fixed-width record layout: ordered columns, the byte ranges
/// documented as blank separators, and the fixed record length.
///
/// Invariant (enforced by [`validate`](CatalogSchema::validate)): columns
/// and spares together tile `[1, record_len]` exactly: no overlap, no
/// undeclared gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSchema {
    pub columns: Vec<ColumnSpec>,
    /// 1-based inclusive byte ranges that must hold blanks.
    pub spares: Vec<(usize, usize)>,
    pub record_len: usize,
}

impl CatalogSchema {
    pub fn column(&self, label: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.label == label)
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        // 1) per-column sanity
        for col in &self.columns {
            if col.start == 0 || col.start > col.end {
                return Err(SchemaError::BadRange {
                    label: col.label.clone(),
                    start: col.start,
                    end: col.end,
                });
            }
            if col.end > self.record_len {
                return Err(SchemaError::OutOfBounds {
                    label: col.label.clone(),
                    end: col.end,
                    record_len: self.record_len,
                });
            }
            if col.format.width() != col.width() {
                return Err(SchemaError::WidthMismatch {
                    label: col.label.clone(),
                    format_width: col.format.width(),
                    range_width: col.width(),
                });
            }
        }

        // 2) duplicate labels
        for (i, col) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.label == col.label) {
                return Err(SchemaError::DuplicateLabel {
                    label: col.label.clone(),
                });
            }
        }

        // 3) byte coverage: every byte claimed exactly once
        let mut owner: Vec<Option<&str>> = vec![None; self.record_len + 1];
        for col in &self.columns {
            for byte in col.start..=col.end {
                if let Some(first) = owner[byte] {
                    return Err(SchemaError::Overlap {
                        first: first.to_string(),
                        second: col.label.clone(),
                        byte,
                    });
                }
                owner[byte] = Some(&col.label);
            }
        }
        for &(start, end) in &self.spares {
            if start == 0 || start > end {
                return Err(SchemaError::BadRange {
                    label: "(spare)".to_string(),
                    start,
                    end,
                });
            }
            if end > self.record_len {
                return Err(SchemaError::OutOfBounds {
                    label: "(spare)".to_string(),
                    end,
                    record_len: self.record_len,
                });
            }
            for byte in start..=end {
                if let Some(first) = owner[byte] {
                    return Err(SchemaError::Overlap {
                        first: first.to_string(),
                        second: "(spare)".to_string(),
                        byte,
                    });
                }
                owner[byte] = Some("(spare)");
            }
        }

        // 4) report the first maximal uncovered run, if any
        let mut byte = 1;
        while byte <= self.record_len {
            if owner[byte].is_none() {
                let start = byte;
                while byte <= self.record_len && owner[byte].is_none() {
                    byte += 1;
                }
                return Err(SchemaError::UndeclaredGap {
                    start,
                    end: byte - 1,
                });
            }
            byte += 1;
        }

        Ok(())
    }
}

/// Fluent builder laying out columns left to right.
///
/// `col` appends a field at the current cursor, `gap` declares the next `n`
/// bytes as blank separators; `build` fixes the record length at the cursor
/// and validates. A bad format code surfaces at `build` time.
pub struct SchemaBuilder {
    columns: Vec<ColumnSpec>,
    spares: Vec<(usize, usize)>,
    cursor: usize,
    deferred: Option<SchemaError>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        SchemaBuilder {
            columns: Vec::new(),
            spares: Vec::new(),
            cursor: 1,
            deferred: None,
        }
    }

    pub fn col(mut self, label: &str, code: &str, description: &str) -> Self {
        match Format::parse(code) {
            Ok(format) => {
                let width = format.width();
                self.columns.push(ColumnSpec {
                    label: label.to_string(),
                    start: self.cursor,
                    end: self.cursor + width - 1,
                    format,
                    unit: None,
                    nullable: false,
                    description: description.to_string(),
                });
                self.cursor += width;
            }
            Err(e) => {
                self.deferred.get_or_insert(e);
            }
        }
        self
    }

    pub fn gap(mut self, n: usize) -> Self {
        if n > 0 {
            self.spares.push((self.cursor, self.cursor + n - 1));
            self.cursor += n;
        }
        self
    }

    /// Set the unit of the column most recently added.
    pub fn unit(mut self, unit: &str) -> Self {
        if let Some(col) = self.columns.last_mut() {
            col.unit = Some(unit.to_string());
        }
        self
    }

    /// Mark the column most recently added as nullable.
    pub fn nullable(mut self) -> Self {
        if let Some(col) = self.columns.last_mut() {
            col.nullable = true;
        }
        self
    }

    pub fn build(self) -> Result<CatalogSchema, SchemaError> {
        if let Some(e) = self.deferred {
            return Err(e);
        }
        let schema = CatalogSchema {
            columns: self.columns,
            spares: self.spares,
            record_len: self.cursor - 1,
        };
        schema.validate()?;
        Ok(schema)
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
