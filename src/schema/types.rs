// src/schema/types.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// A single column definition of a fixed-width catalog layout.
///
/// Byte positions follow the CDS ReadMe convention: 1-based, inclusive on
/// both ends, so `start: 21, end: 31` is an 11-byte field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub label: String,
    pub start: usize,
    pub end: usize,
    pub format: Format,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// A blank field or the `-` sentinel parses to `Value::Absent`.
    pub nullable: bool,
    pub description: String,
}

impl ColumnSpec {
    pub fn width(&self) -> usize {
        self.end + 1 - self.start
    }
}

/// Field format, parsed from the FORTRAN-style codes used in catalog
/// descriptions: `A19`, `I3`, `F11.7`, `E10.3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Format {
    /// `Aw`: fixed-length character field, case preserved.
    Str { width: usize },
    /// `Iw`: right-justified integer.
    Int { width: usize },
    /// `Fw.d`: fixed-point decimal, `frac` digits after the point.
    Fixed { width: usize, frac: usize },
    /// `Ew.d`: scientific notation, `frac` digits of mantissa precision.
    Sci { width: usize, frac: usize },
}

static FORMAT_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([AIFE])(\d+)(?:\.(\d+))?$").unwrap());

impl Format {
    pub fn parse(code: &str) -> Result<Self, SchemaError> {
        let bad = || SchemaError::BadFormatCode {
            code: code.to_string(),
        };
        let caps = FORMAT_CODE.captures(code.trim()).ok_or_else(bad)?;

        let width: usize = caps[2].parse().map_err(|_| bad())?;
        if width == 0 {
            return Err(bad());
        }
        let frac: Option<usize> = match caps.get(3) {
            Some(m) => Some(m.as_str().parse().map_err(|_| bad())?),
            None => None,
        };

        match (&caps[1], frac) {
            // A and I take no fractional part
            ("A", None) => Ok(Format::Str { width }),
            ("I", None) => Ok(Format::Int { width }),
            ("F", f) => Ok(Format::Fixed {
                width,
                frac: f.unwrap_or(0),
            }),
            ("E", f) => Ok(Format::Sci {
                width,
                frac: f.unwrap_or(0),
            }),
            _ => Err(bad()),
        }
    }

    pub fn width(&self) -> usize {
        match *self {
            Format::Str { width }
            | Format::Int { width }
            | Format::Fixed { width, .. }
            | Format::Sci { width, .. } => width,
        }
    }

    /// Render back to the code this format was parsed from.
    pub fn code(&self) -> String {
        match *self {
            Format::Str { width } => format!("A{}", width),
            Format::Int { width } => format!("I{}", width),
            Format::Fixed { width, frac } => format!("F{}.{}", width, frac),
            Format::Sci { width, frac } => format!("E{}.{}", width, frac),
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Format::Str { .. })
    }
}

impl From<Format> for String {
    fn from(f: Format) -> String {
        f.code()
    }
}

impl TryFrom<String> for Format {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, SchemaError> {
        Format::parse(&s)
    }
}
