// src/schema/allwise.rs
//
// The published YSO-candidate catalogs (`clasi-ii.dat`, `clasiii.dat`) share
// one 354-byte record layout. Byte positions are load-bearing: readers of
// the published files depend on them exactly as given here.

use once_cell::sync::Lazy;

use super::layout::{CatalogSchema, SchemaBuilder};

pub mod labels {
    pub const NAME: &str = "Name";
    pub const RA_DEG: &str = "RAdeg";
    pub const DE_DEG: &str = "DEdeg";
    pub const GLON: &str = "GLON";
    pub const GLAT: &str = "GLAT";
    pub const W1_MAG: &str = "W1mag";
    pub const E_W1_MAG: &str = "e_W1mag";
    pub const SNR1: &str = "snr1";
    pub const CHI2_W1: &str = "chi2W1";
    pub const W2_MAG: &str = "W2mag";
    pub const E_W2_MAG: &str = "e_W2mag";
    pub const SNR2: &str = "snr2";
    pub const CHI2_W2: &str = "chi2W2";
    pub const W3_MAG: &str = "W3mag";
    pub const E_W3_MAG: &str = "e_W3mag";
    pub const SNR3: &str = "snr3";
    pub const CHI2_W3: &str = "chi2W3";
    pub const W4_MAG: &str = "W4mag";
    pub const E_W4_MAG: &str = "e_W4mag";
    pub const SNR4: &str = "snr4";
    pub const CHI2_W4: &str = "chi2W4";
    pub const CC_FLAGS: &str = "ccf";
    pub const EXT_FLAG: &str = "ex";
    pub const VAR_FLAGS: &str = "var";
    pub const PH_QUAL: &str = "qph";
    pub const N_W1: &str = "nW1";
    pub const N_W2: &str = "nW2";
    pub const N_W3: &str = "nW3";
    pub const N_W4: &str = "nW4";
    pub const TWOMASS_NAME: &str = "2Mname";
    pub const J_MAG: &str = "Jmag";
    pub const E_J_MAG: &str = "e_Jmag";
    pub const H_MAG: &str = "Hmag";
    pub const E_H_MAG: &str = "e_Hmag";
    pub const K_MAG: &str = "Kmag";
    pub const E_K_MAG: &str = "e_Kmag";
    pub const QFL: &str = "Qfl";
    pub const SIMBAD_NAME: &str = "SName";
    pub const SIMBAD_OTYPE: &str = "OType";
    pub const SIMBAD_DIST: &str = "SDist";
    pub const TAU: &str = "tau";
}

/// Record length of both published catalog files, in bytes.
pub const RECORD_LEN: usize = 354;

static LAYOUT: Lazy<CatalogSchema> = Lazy::new(|| {
    use labels::*;

    let schema = SchemaBuilder::new()
        .col(NAME, "A19", "AllWISE designation (JHHMMSS.ss+DDMMSS.s)")
        .gap(1)
        .col(RA_DEG, "F11.7", "Right ascension, J2000")
        .unit("deg")
        .gap(1)
        .col(DE_DEG, "F11.7", "Declination, J2000")
        .unit("deg")
        .gap(1)
        .col(GLON, "F11.7", "Galactic longitude")
        .unit("deg")
        .gap(1)
        .col(GLAT, "F11.7", "Galactic latitude")
        .unit("deg")
        .gap(1)
        .col(W1_MAG, "F6.3", "WISE 3.4um profile-fit magnitude")
        .unit("mag")
        .gap(1)
        .col(E_W1_MAG, "F5.3", "Uncertainty on W1mag")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(SNR1, "F7.1", "W1 profile-fit signal-to-noise ratio")
        .nullable()
        .gap(1)
        .col(CHI2_W1, "E10.3", "W1 profile-fit reduced chi-squared")
        .nullable()
        .gap(1)
        .col(W2_MAG, "F6.3", "WISE 4.6um profile-fit magnitude")
        .unit("mag")
        .gap(1)
        .col(E_W2_MAG, "F5.3", "Uncertainty on W2mag")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(SNR2, "F7.1", "W2 profile-fit signal-to-noise ratio")
        .nullable()
        .gap(1)
        .col(CHI2_W2, "E10.3", "W2 profile-fit reduced chi-squared")
        .nullable()
        .gap(1)
        .col(W3_MAG, "F6.3", "WISE 12um profile-fit magnitude")
        .unit("mag")
        .gap(1)
        .col(E_W3_MAG, "F5.3", "Uncertainty on W3mag")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(SNR3, "F7.1", "W3 profile-fit signal-to-noise ratio")
        .nullable()
        .gap(1)
        .col(CHI2_W3, "E10.3", "W3 profile-fit reduced chi-squared")
        .nullable()
        .gap(1)
        .col(W4_MAG, "F6.3", "WISE 22um profile-fit magnitude")
        .unit("mag")
        .gap(1)
        .col(E_W4_MAG, "F5.3", "Uncertainty on W4mag")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(SNR4, "F7.1", "W4 profile-fit signal-to-noise ratio")
        .nullable()
        .gap(1)
        .col(CHI2_W4, "E10.3", "W4 profile-fit reduced chi-squared")
        .nullable()
        .gap(1)
        .col(CC_FLAGS, "A4", "Contamination and confusion flags, one per band")
        .gap(1)
        .col(EXT_FLAG, "A1", "Extended-source flag")
        .gap(1)
        .col(VAR_FLAGS, "A4", "Variability flags, one per band")
        .gap(1)
        .col(PH_QUAL, "A4", "Photometric quality flags, one per band")
        .gap(1)
        .col(N_W1, "I3", "Number of W1 profile-fit measurements")
        .gap(1)
        .col(N_W2, "I3", "Number of W2 profile-fit measurements")
        .gap(1)
        .col(N_W3, "I3", "Number of W3 profile-fit measurements")
        .gap(1)
        .col(N_W4, "I3", "Number of W4 profile-fit measurements")
        .gap(1)
        .col(TWOMASS_NAME, "A16", "2MASS PSC designation of the cross-match")
        .nullable()
        .gap(1)
        .col(J_MAG, "F6.3", "2MASS J magnitude")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(E_J_MAG, "F5.3", "Uncertainty on Jmag")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(H_MAG, "F6.3", "2MASS H magnitude")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(E_H_MAG, "F5.3", "Uncertainty on Hmag")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(K_MAG, "F6.3", "2MASS Ks magnitude")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(E_K_MAG, "F5.3", "Uncertainty on Kmag")
        .unit("mag")
        .nullable()
        .gap(1)
        .col(QFL, "A3", "2MASS JHKs photometric quality flag")
        .nullable()
        .gap(1)
        .col(SIMBAD_NAME, "A30", "SIMBAD main identifier of the nearest match")
        .nullable()
        .gap(1)
        .col(SIMBAD_OTYPE, "A14", "SIMBAD object type")
        .nullable()
        .gap(1)
        .col(SIMBAD_DIST, "F7.2", "Angular distance to the SIMBAD match")
        .unit("arcsec")
        .nullable()
        .gap(1)
        .col(TAU, "E11.4", "Planck 353GHz dust optical depth at the position")
        .build()
        .expect("built-in AllWISE layout is valid");

    debug_assert_eq!(schema.record_len, RECORD_LEN);
    schema
});

/// The shared 354-byte layout of `clasi-ii.dat` and `clasiii.dat`.
pub fn layout() -> &'static CatalogSchema {
    &LAYOUT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_validates_and_tiles_354_bytes() {
        let s = layout();
        s.validate().unwrap();
        assert_eq!(s.record_len, RECORD_LEN);
        assert_eq!(s.columns.len(), 41);
        // every separator is exactly one blank byte
        assert_eq!(s.spares.len(), 40);
        assert!(s.spares.iter().all(|&(a, b)| a == b));
    }

    #[test]
    fn documented_offsets_are_preserved() {
        let s = layout();
        let range = |label: &str| {
            let c = s.column(label).unwrap();
            (c.start, c.end)
        };
        assert_eq!(range(labels::NAME), (1, 19));
        assert_eq!(range(labels::RA_DEG), (21, 31));
        assert_eq!(range(labels::DE_DEG), (33, 43));
        assert_eq!(range(labels::W1_MAG), (69, 74));
        assert_eq!(range(labels::CHI2_W4), (186, 195));
        assert_eq!(range(labels::CC_FLAGS), (197, 200));
        assert_eq!(range(labels::EXT_FLAG), (202, 202));
        assert_eq!(range(labels::TWOMASS_NAME), (230, 245));
        assert_eq!(range(labels::SIMBAD_NAME), (290, 319));
        assert_eq!(range(labels::SIMBAD_DIST), (336, 342));
        assert_eq!(range(labels::TAU), (344, 354));
    }

    #[test]
    fn sentinel_bearing_columns_are_nullable() {
        let s = layout();
        for label in [
            labels::CHI2_W1,
            labels::SIMBAD_DIST,
            labels::TWOMASS_NAME,
            labels::QFL,
        ] {
            assert!(s.column(label).unwrap().nullable, "{label} must be nullable");
        }
        for label in [labels::NAME, labels::RA_DEG, labels::TAU, labels::PH_QUAL] {
            assert!(!s.column(label).unwrap().nullable, "{label} must be required");
        }
    }
}
