// src/catalog/source.rs

use serde::Serialize;

use crate::error::FormatError;
use crate::parse::Record;
use crate::photometry::{self, Band};
use crate::schema::allwise::labels;

/// Profile-fit photometry in one WISE band. The magnitude is always
/// measured; uncertainty, S/N and chi-squared are absent for upper limits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WisePhot {
    pub mag: f64,
    pub e_mag: Option<f64>,
    pub snr: Option<f64>,
    pub chi2: Option<f64>,
    pub n_meas: i64,
}

/// The 2MASS PSC cross-match block. Individual magnitudes stay optional:
/// published rows carry e.g. a J magnitude with a blank uncertainty for
/// upper limits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoMassXMatch {
    pub designation: Option<String>,
    pub j_mag: Option<f64>,
    pub e_j_mag: Option<f64>,
    pub h_mag: Option<f64>,
    pub e_h_mag: Option<f64>,
    pub k_mag: Option<f64>,
    pub e_k_mag: Option<f64>,
    pub quality: Option<String>,
}

impl TwoMassXMatch {
    fn is_empty(&self) -> bool {
        self.designation.is_none()
            && self.j_mag.is_none()
            && self.e_j_mag.is_none()
            && self.h_mag.is_none()
            && self.e_h_mag.is_none()
            && self.k_mag.is_none()
            && self.e_k_mag.is_none()
            && self.quality.is_none()
    }
}

/// The SIMBAD cross-match block, present when a main identifier is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimbadXMatch {
    pub main_id: String,
    pub object_type: Option<String>,
    pub distance_arcsec: Option<f64>,
}

/// One catalog row as a typed value: a YSO candidate with its coordinates,
/// WISE photometry, quality flags, cross-matches and the Planck dust
/// optical depth at its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YsoCandidate {
    pub designation: String,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub glon_deg: f64,
    pub glat_deg: f64,
    pub w1: WisePhot,
    pub w2: WisePhot,
    pub w3: WisePhot,
    pub w4: WisePhot,
    /// Contamination/confusion flags, one character per band.
    pub cc_flags: String,
    pub ext_flag: String,
    /// Variability flags, one character per band.
    pub var_flags: String,
    /// Photometric quality flags, one character per band.
    pub ph_qual: String,
    pub two_mass: Option<TwoMassXMatch>,
    pub simbad: Option<SimbadXMatch>,
    pub tau353: f64,
}

impl YsoCandidate {
    pub fn from_record(rec: &Record) -> Result<Self, FormatError> {
        let wise = |mag, e_mag, snr, chi2, n| -> Result<WisePhot, FormatError> {
            Ok(WisePhot {
                mag: rec.float_field(mag)?,
                e_mag: rec.opt_float(e_mag)?,
                snr: rec.opt_float(snr)?,
                chi2: rec.opt_float(chi2)?,
                n_meas: rec.int_field(n)?,
            })
        };

        let two_mass = TwoMassXMatch {
            designation: rec.opt_str(labels::TWOMASS_NAME)?.map(str::to_string),
            j_mag: rec.opt_float(labels::J_MAG)?,
            e_j_mag: rec.opt_float(labels::E_J_MAG)?,
            h_mag: rec.opt_float(labels::H_MAG)?,
            e_h_mag: rec.opt_float(labels::E_H_MAG)?,
            k_mag: rec.opt_float(labels::K_MAG)?,
            e_k_mag: rec.opt_float(labels::E_K_MAG)?,
            quality: rec.opt_str(labels::QFL)?.map(str::to_string),
        };

        let simbad = match rec.opt_str(labels::SIMBAD_NAME)? {
            Some(main_id) => Some(SimbadXMatch {
                main_id: main_id.to_string(),
                object_type: rec.opt_str(labels::SIMBAD_OTYPE)?.map(str::to_string),
                distance_arcsec: rec.opt_float(labels::SIMBAD_DIST)?,
            }),
            None => None,
        };

        Ok(YsoCandidate {
            designation: rec.str_field(labels::NAME)?.to_string(),
            ra_deg: rec.float_field(labels::RA_DEG)?,
            dec_deg: rec.float_field(labels::DE_DEG)?,
            glon_deg: rec.float_field(labels::GLON)?,
            glat_deg: rec.float_field(labels::GLAT)?,
            w1: wise(
                labels::W1_MAG,
                labels::E_W1_MAG,
                labels::SNR1,
                labels::CHI2_W1,
                labels::N_W1,
            )?,
            w2: wise(
                labels::W2_MAG,
                labels::E_W2_MAG,
                labels::SNR2,
                labels::CHI2_W2,
                labels::N_W2,
            )?,
            w3: wise(
                labels::W3_MAG,
                labels::E_W3_MAG,
                labels::SNR3,
                labels::CHI2_W3,
                labels::N_W3,
            )?,
            w4: wise(
                labels::W4_MAG,
                labels::E_W4_MAG,
                labels::SNR4,
                labels::CHI2_W4,
                labels::N_W4,
            )?,
            cc_flags: rec.str_field(labels::CC_FLAGS)?.to_string(),
            ext_flag: rec.str_field(labels::EXT_FLAG)?.to_string(),
            var_flags: rec.str_field(labels::VAR_FLAGS)?.to_string(),
            ph_qual: rec.str_field(labels::PH_QUAL)?.to_string(),
            two_mass: (!two_mass.is_empty()).then_some(two_mass),
            simbad,
            tau353: rec.float_field(labels::TAU)?,
        })
    }

    /// Catalog magnitude in `band`, if measured.
    pub fn mag(&self, band: Band) -> Option<f64> {
        match band {
            Band::W1 => Some(self.w1.mag),
            Band::W2 => Some(self.w2.mag),
            Band::W3 => Some(self.w3.mag),
            Band::W4 => Some(self.w4.mag),
            Band::J => self.two_mass.as_ref()?.j_mag,
            Band::H => self.two_mass.as_ref()?.h_mag,
            Band::Ks => self.two_mass.as_ref()?.k_mag,
        }
    }

    /// Flux density in jansky in `band`, if the magnitude is measured.
    pub fn flux_jy(&self, band: Band) -> Option<f64> {
        self.mag(band).map(|m| photometry::mag_to_flux_jy(band, m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_line, Value};
    use crate::schema::allwise;
    use crate::testutil::{sample_line, sample_record};

    fn candidate() -> YsoCandidate {
        let rec = parse_line(&sample_line(), allwise::layout()).unwrap();
        YsoCandidate::from_record(&rec).unwrap()
    }

    #[test]
    fn typed_view_carries_the_parsed_fields() {
        let c = candidate();
        assert_eq!(c.designation, "J000000.00+000000.0");
        assert_eq!(c.ra_deg, 0.0);
        assert_eq!(c.glat_deg, -60.18853);
        assert_eq!(c.w1.mag, 12.345);
        assert_eq!(c.w1.e_mag, Some(0.023));
        assert_eq!(c.w1.n_meas, 32);
        assert_eq!(c.ph_qual, "AABU");
        assert_eq!(c.tau353, 1.2345e-5);
    }

    #[test]
    fn upper_limit_band_keeps_mag_but_loses_the_optionals() {
        let c = candidate();
        assert_eq!(c.w4.mag, 7.654);
        assert_eq!(c.w4.e_mag, None);
        assert_eq!(c.w4.snr, None);
        assert_eq!(c.w4.chi2, None);
    }

    #[test]
    fn cross_match_blocks_collapse_to_none_when_fully_absent() {
        let c = candidate();
        let tm = c.two_mass.as_ref().expect("2MASS match present");
        assert_eq!(tm.designation.as_deref(), Some("00000011+0000243"));
        assert_eq!(tm.quality.as_deref(), Some("AAA"));
        assert!(c.simbad.is_none());
    }

    #[test]
    fn fluxes_follow_measured_magnitudes() {
        let c = candidate();
        let w1 = c.flux_jy(Band::W1).unwrap();
        assert!((w1 - 309.5 * 10f64.powf(-12.345 / 2.5)).abs() < 1e-9);
        // J comes from the 2MASS block
        assert!(c.flux_jy(Band::J).is_some());
    }

    #[test]
    fn simbad_block_appears_when_the_identifier_does() {
        let mut rec = sample_record();
        // rebuild with a SIMBAD identifier present
        let fields: Vec<(String, Value)> = rec
            .iter()
            .map(|(l, v)| {
                let v = match l {
                    "SName" => Value::Str("V* GM Aur".to_string()),
                    "OType" => Value::Str("TTau*".to_string()),
                    "SDist" => Value::Float(0.42),
                    _ => v.clone(),
                };
                (l.to_string(), v)
            })
            .collect();
        rec = Record::new(fields);

        let c = YsoCandidate::from_record(&rec).unwrap();
        let simbad = c.simbad.expect("SIMBAD match present");
        assert_eq!(simbad.main_id, "V* GM Aur");
        assert_eq!(simbad.object_type.as_deref(), Some("TTau*"));
        assert_eq!(simbad.distance_arcsec, Some(0.42));
    }

    #[test]
    fn export_json_keeps_absent_fields_as_null() {
        let c = candidate();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["designation"], "J000000.00+000000.0");
        assert_eq!(json["w4"]["e_mag"], serde_json::Value::Null);
        assert!(json["simbad"].is_null());
        assert_eq!(json["two_mass"]["designation"], "00000011+0000243");
    }

    #[test]
    fn missing_column_surfaces_as_format_error() {
        let rec = Record::new(vec![("Name".into(), Value::Str("J000".into()))]);
        assert!(matches!(
            YsoCandidate::from_record(&rec),
            Err(FormatError::MissingColumn { .. })
        ));
    }
}
