// src/catalog/scan.rs

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{info, warn};

use super::kind::CatalogKind;
use super::source::YsoCandidate;
use crate::error::Error;
use crate::parse::CatalogReader;
use crate::photometry::Band;
use crate::schema::allwise;

/// Accumulated magnitude statistics for one band.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BandStats {
    pub measured: u64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    #[serde(skip)]
    sum: f64,
}

impl BandStats {
    fn push(&mut self, mag: f64) {
        self.measured += 1;
        self.sum += mag;
        self.min = Some(self.min.map_or(mag, |m| m.min(mag)));
        self.max = Some(self.max.map_or(mag, |m| m.max(mag)));
        self.mean = Some(self.sum / self.measured as f64);
    }
}

/// Whole-file summary of a streamed catalog scan.
#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CatalogKind>,
    pub generated_at: DateTime<Utc>,
    pub records: u64,
    pub warnings: u64,
    /// Absent-value count per nullable column.
    pub absent: BTreeMap<String, u64>,
    /// Magnitude statistics per band, keyed by band name.
    pub bands: BTreeMap<String, BandStats>,
    pub two_mass_matches: u64,
    pub simbad_matches: u64,
}

static DESIGNATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^J\d{6}\.\d{2}[+-]\d{6}\.\d$").unwrap());

/// Stream one catalog file and summarize it. Malformed lines abort the scan
/// with their line number; suspicious-but-parseable content (odd
/// designation shape, out-of-range coordinates, unexpected flag widths) is
/// logged and counted as a warning instead; the flag vocabulary is open.
pub fn scan_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogSummary, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = CatalogReader::new(BufReader::new(file), allwise::layout());
    scan_reader(
        reader,
        &path.display().to_string(),
        CatalogKind::from_path(path),
    )
}

/// Scan an already-open reader; `file` is only used for reporting.
pub fn scan_reader<R: BufRead>(
    reader: CatalogReader<'_, R>,
    file: &str,
    kind: Option<CatalogKind>,
) -> Result<CatalogSummary, Error> {
    let schema = allwise::layout();
    let mut summary = CatalogSummary {
        file: file.to_string(),
        kind,
        generated_at: Utc::now(),
        records: 0,
        warnings: 0,
        absent: schema
            .columns
            .iter()
            .filter(|c| c.nullable)
            .map(|c| (c.label.clone(), 0))
            .collect(),
        bands: Band::ALL
            .iter()
            .map(|b| (b.name().to_string(), BandStats::default()))
            .collect(),
        two_mass_matches: 0,
        simbad_matches: 0,
    };

    for (line_no, item) in reader.enumerate() {
        let record = item?;
        summary.records += 1;

        for (label, value) in record.iter() {
            if value.is_absent() {
                if let Some(count) = summary.absent.get_mut(label) {
                    *count += 1;
                }
            }
        }

        let candidate =
            YsoCandidate::from_record(&record).map_err(|e| e.at_line(line_no as u64 + 1))?;
        summary.warnings += check_candidate(file, line_no as u64 + 1, &candidate);

        for band in Band::ALL {
            if let Some(mag) = candidate.mag(band) {
                if let Some(stats) = summary.bands.get_mut(band.name()) {
                    stats.push(mag);
                }
            }
        }
        if candidate.two_mass.is_some() {
            summary.two_mass_matches += 1;
        }
        if candidate.simbad.is_some() {
            summary.simbad_matches += 1;
        }
    }

    info!(
        file,
        records = summary.records,
        warnings = summary.warnings,
        "scan complete"
    );
    Ok(summary)
}

/// Soft consistency checks; returns the number of warnings raised.
fn check_candidate(file: &str, line: u64, c: &YsoCandidate) -> u64 {
    let mut warnings = 0;
    let mut bad = |what: &str, detail: String| {
        warn!(file, line, what, %detail, "suspicious record");
        warnings += 1;
    };

    if !DESIGNATION.is_match(&c.designation) {
        bad("designation", c.designation.clone());
    }
    if !(0.0..360.0).contains(&c.ra_deg) {
        bad("ra_range", format!("{}", c.ra_deg));
    }
    if !(-90.0..=90.0).contains(&c.dec_deg) {
        bad("dec_range", format!("{}", c.dec_deg));
    }
    for (label, flags, width) in [
        ("ccf", &c.cc_flags, 4usize),
        ("var", &c.var_flags, 4),
        ("qph", &c.ph_qual, 4),
        ("ex", &c.ext_flag, 1),
    ] {
        if flags.len() != width {
            bad(label, flags.clone());
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_line;
    use std::io::Cursor;
    use std::io::Write;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_tracing() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn scan_str(input: &str) -> CatalogSummary {
        let reader = CatalogReader::new(Cursor::new(input.to_string()), allwise::layout());
        scan_reader(reader, "test.dat", None).unwrap()
    }

    #[test]
    fn summarizes_a_small_catalog() {
        init_test_tracing();
        let line = sample_line();
        let summary = scan_str(&format!("{line}\n{line}\n"));

        assert_eq!(summary.records, 2);
        assert_eq!(summary.warnings, 0);
        assert_eq!(summary.two_mass_matches, 2);
        assert_eq!(summary.simbad_matches, 0);
        // the sample has absent W4 optionals and an absent SIMBAD block
        assert_eq!(summary.absent["e_W4mag"], 2);
        assert_eq!(summary.absent["SDist"], 2);
        assert_eq!(summary.absent["e_W1mag"], 0);

        let w1 = &summary.bands["W1"];
        assert_eq!(w1.measured, 2);
        assert_eq!(w1.min, Some(12.345));
        assert_eq!(w1.max, Some(12.345));
        assert_eq!(w1.mean, Some(12.345));
    }

    #[test]
    fn malformed_line_aborts_with_its_line_number() {
        let line = sample_line();
        let mut short = sample_line();
        short.pop();
        let reader = CatalogReader::new(
            Cursor::new(format!("{line}\n{short}\n")),
            allwise::layout(),
        );
        match scan_reader(reader, "test.dat", None) {
            Err(Error::Format { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn odd_designation_counts_as_a_warning_not_an_error() {
        init_test_tracing();
        let mut line = sample_line();
        // still 19 bytes, but not a JHHMMSS.ss+DDMMSS.s designation
        line.replace_range(0..19, "WISEA 000000.00+000");
        let summary = scan_str(&format!("{line}\n"));
        assert_eq!(summary.records, 1);
        assert_eq!(summary.warnings, 1);
    }

    #[test]
    fn file_scan_reads_from_disk_and_tags_the_kind() {
        init_test_tracing();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clasiii.dat");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "{}", sample_line()).unwrap();
        drop(f);

        let summary = scan_catalog(&path).unwrap();
        assert_eq!(summary.records, 1);
        assert_eq!(summary.kind, Some(CatalogKind::ClassThree));
    }
}
