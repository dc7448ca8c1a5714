//! Magnitude/flux-density conversion for the catalog's bands.
//!
//! Zero points are zero-magnitude flux densities, so
//! `flux = zp * 10^(-mag/2.5)` and `mag = -2.5 * log10(flux / zp)`.

pub mod bands;

pub use bands::{Band, BandInfo};

/// Flux density in jansky of a source of magnitude `mag` in `band`.
pub fn mag_to_flux_jy(band: Band, mag: f64) -> f64 {
    band.info().zeropoint_jy * 10f64.powf(-mag / 2.5)
}

/// Flux density in millijansky.
pub fn mag_to_flux_mjy(band: Band, mag: f64) -> f64 {
    mag_to_flux_jy(band, mag) * 1e3
}

/// Magnitude of a source with flux density `flux_jy`. `None` for a
/// non-positive flux, which has no magnitude.
pub fn flux_to_mag(band: Band, flux_jy: f64) -> Option<f64> {
    if flux_jy <= 0.0 {
        return None;
    }
    Some(-2.5 * (flux_jy / band.info().zeropoint_jy).log10())
}

/// Propagate a magnitude uncertainty to a flux-density uncertainty (Jy):
/// the noise-to-signal ratio is `10^(e/2.5) - 1`.
pub fn mag_err_to_flux_err_jy(band: Band, mag: f64, e_mag: f64) -> f64 {
    mag_to_flux_jy(band, mag) * (10f64.powf(e_mag / 2.5) - 1.0)
}

/// Propagate a flux-density uncertainty to a magnitude uncertainty:
/// `2.5 * log10(1 + err/flux)`. `None` when flux or error is not positive.
pub fn flux_err_to_mag_err(flux_jy: f64, err_jy: f64) -> Option<f64> {
    if flux_jy <= 0.0 || err_jy < 0.0 {
        return None;
    }
    Some(2.5 * (1.0 + err_jy / flux_jy).log10())
}
