// src/photometry/bands.rs

use serde::Serialize;

/// The photometric bands the catalogs carry: the four WISE bands plus the
/// 2MASS bands of the cross-match block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    W1,
    W2,
    W3,
    W4,
    J,
    H,
    Ks,
}

/// Filter metadata: mean wavelength and effective bandwidth in angstrom,
/// zero-magnitude flux density in jansky (VOSA filter profile service).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandInfo {
    pub wavelength_angstrom: f64,
    pub bandwidth_angstrom: f64,
    pub zeropoint_jy: f64,
}

const WISE1: BandInfo = BandInfo {
    wavelength_angstrom: 33_526.0,
    bandwidth_angstrom: 6_626.4,
    zeropoint_jy: 309.5,
};
const WISE2: BandInfo = BandInfo {
    wavelength_angstrom: 46_028.0,
    bandwidth_angstrom: 10_422.7,
    zeropoint_jy: 171.8,
};
const WISE3: BandInfo = BandInfo {
    wavelength_angstrom: 115_608.0,
    bandwidth_angstrom: 55_055.7,
    zeropoint_jy: 31.7,
};
const WISE4: BandInfo = BandInfo {
    wavelength_angstrom: 220_883.0,
    bandwidth_angstrom: 41_016.8,
    zeropoint_jy: 8.4,
};
const TWOMASS_J: BandInfo = BandInfo {
    wavelength_angstrom: 12_350.0,
    bandwidth_angstrom: 1_624.1,
    zeropoint_jy: 1_594.0,
};
const TWOMASS_H: BandInfo = BandInfo {
    wavelength_angstrom: 16_620.0,
    bandwidth_angstrom: 2_509.4,
    zeropoint_jy: 1_024.0,
};
const TWOMASS_KS: BandInfo = BandInfo {
    wavelength_angstrom: 21_590.0,
    bandwidth_angstrom: 2_618.9,
    zeropoint_jy: 666.8,
};

impl Band {
    pub const ALL: [Band; 7] = [
        Band::W1,
        Band::W2,
        Band::W3,
        Band::W4,
        Band::J,
        Band::H,
        Band::Ks,
    ];

    pub fn info(self) -> &'static BandInfo {
        match self {
            Band::W1 => &WISE1,
            Band::W2 => &WISE2,
            Band::W3 => &WISE3,
            Band::W4 => &WISE4,
            Band::J => &TWOMASS_J,
            Band::H => &TWOMASS_H,
            Band::Ks => &TWOMASS_KS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::W1 => "W1",
            Band::W2 => "W2",
            Band::W3 => "W3",
            Band::W4 => "W4",
            Band::J => "J",
            Band::H => "H",
            Band::Ks => "Ks",
        }
    }

    /// Mean wavelength in micron, the unit catalogs quote band centres in.
    pub fn wavelength_micron(self) -> f64 {
        self.info().wavelength_angstrom * 1e-4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_ordered_by_wavelength_within_each_survey() {
        let wise: Vec<f64> = [Band::W1, Band::W2, Band::W3, Band::W4]
            .iter()
            .map(|b| b.info().wavelength_angstrom)
            .collect();
        assert!(wise.windows(2).all(|w| w[0] < w[1]));

        let twomass: Vec<f64> = [Band::J, Band::H, Band::Ks]
            .iter()
            .map(|b| b.info().wavelength_angstrom)
            .collect();
        assert!(twomass.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn band_centres_match_the_quoted_microns() {
        assert!((Band::W1.wavelength_micron() - 3.35).abs() < 0.01);
        assert!((Band::W3.wavelength_micron() - 11.56).abs() < 0.01);
        assert!((Band::Ks.wavelength_micron() - 2.159).abs() < 0.001);
    }
}
