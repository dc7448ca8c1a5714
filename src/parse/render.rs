// src/parse/render.rs

use super::record::Record;
use super::value::{Value, SENTINEL};
use crate::error::FormatError;
use crate::schema::{CatalogSchema, Format};

/// Format a record back to its fixed-width line: numeric fields
/// right-justified at declared precision, strings left-justified, `Absent`
/// rendered as the sentinel, separators blank. The inverse of
/// [`parse_line`](super::reader::parse_line) within declared precision.
pub fn render_line(record: &Record, schema: &CatalogSchema) -> Result<String, FormatError> {
    let mut out = vec![b' '; schema.record_len];

    for col in &schema.columns {
        let value = record
            .get(&col.label)
            .ok_or_else(|| FormatError::MissingColumn {
                column: col.label.clone(),
            })?;

        let text = match (value, col.format) {
            (Value::Absent, _) => SENTINEL.to_string(),
            (Value::Str(s), Format::Str { .. }) => s.clone(),
            (Value::Int(i), Format::Int { .. }) => i.to_string(),
            (Value::Float(f), Format::Fixed { frac, .. }) => format!("{f:.frac$}"),
            (Value::Float(f), Format::Sci { frac, .. }) => format_sci(*f, frac),
            (v, f) => {
                return Err(FormatError::WrongType {
                    column: col.label.clone(),
                    expected: expected_kind(f),
                    found: v.kind(),
                })
            }
        };

        let width = col.width();
        if text.len() > width {
            return Err(FormatError::Overflow {
                column: col.label.clone(),
                value: text,
                width,
            });
        }

        let slot = &mut out[col.start - 1..col.end];
        let pad = width - text.len();
        if col.format.is_numeric() {
            slot[pad..].copy_from_slice(text.as_bytes());
        } else {
            slot[..text.len()].copy_from_slice(text.as_bytes());
        }
    }

    // only whole UTF-8 strings were copied into a blank ASCII buffer
    Ok(String::from_utf8(out).expect("rendered record is valid UTF-8"))
}

fn expected_kind(format: Format) -> &'static str {
    match format {
        Format::Str { .. } => "string",
        Format::Int { .. } => "integer",
        Format::Fixed { .. } | Format::Sci { .. } => "real",
    }
}

/// `Ew.d`-style rendering: one leading digit, `frac` fractional digits,
/// sign-carrying two-digit exponent (`1.234E+00`).
fn format_sci(value: f64, frac: usize) -> String {
    if value == 0.0 {
        return format!("{:.frac$}E+00", 0.0);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let mut exp = value.abs().log10().floor() as i32;
    let mut mant = value.abs() / 10f64.powi(exp);
    // rounding at `frac` digits can carry the mantissa to 10.0
    if format!("{mant:.frac$}").starts_with("10") {
        mant /= 10.0;
        exp += 1;
    }
    let esign = if exp < 0 { '-' } else { '+' };
    format!("{sign}{mant:.frac$}E{esign}{:02}", exp.abs())
}
