// src/testutil.rs
//
// Shared fixtures for in-module tests: one fully populated catalog record
// (2MASS match present, SIMBAD match and the W4 optional fields absent) and
// its fixed-width rendering.

use crate::parse::{render_line, Record, Value};
use crate::schema::allwise::{self, labels};

pub fn sample_record() -> Record {
    use labels::*;
    let s = |v: &str| Value::Str(v.to_string());
    let f = Value::Float;
    let i = Value::Int;

    Record::new(vec![
        (NAME.into(), s("J000000.00+000000.0")),
        (RA_DEG.into(), f(0.0)),
        (DE_DEG.into(), f(0.0055556)),
        (GLON.into(), f(96.33728)),
        (GLAT.into(), f(-60.18853)),
        (W1_MAG.into(), f(12.345)),
        (E_W1_MAG.into(), f(0.023)),
        (SNR1.into(), f(45.6)),
        (CHI2_W1.into(), f(1.234)),
        (W2_MAG.into(), f(11.987)),
        (E_W2_MAG.into(), f(0.031)),
        (SNR2.into(), f(38.2)),
        (CHI2_W2.into(), f(0.987)),
        (W3_MAG.into(), f(9.321)),
        (E_W3_MAG.into(), f(0.045)),
        (SNR3.into(), f(21.4)),
        (CHI2_W3.into(), f(1.102)),
        (W4_MAG.into(), f(7.654)),
        (E_W4_MAG.into(), Value::Absent),
        (SNR4.into(), Value::Absent),
        (CHI2_W4.into(), Value::Absent),
        (CC_FLAGS.into(), s("0000")),
        (EXT_FLAG.into(), s("0")),
        (VAR_FLAGS.into(), s("nnnn")),
        (PH_QUAL.into(), s("AABU")),
        (N_W1.into(), i(32)),
        (N_W2.into(), i(32)),
        (N_W3.into(), i(30)),
        (N_W4.into(), i(17)),
        (TWOMASS_NAME.into(), s("00000011+0000243")),
        (J_MAG.into(), f(15.234)),
        (E_J_MAG.into(), f(0.045)),
        (H_MAG.into(), f(14.567)),
        (E_H_MAG.into(), f(0.052)),
        (K_MAG.into(), f(13.89)),
        (E_K_MAG.into(), f(0.048)),
        (QFL.into(), s("AAA")),
        (SIMBAD_NAME.into(), Value::Absent),
        (SIMBAD_OTYPE.into(), Value::Absent),
        (SIMBAD_DIST.into(), Value::Absent),
        (TAU.into(), f(1.2345e-5)),
    ])
}

pub fn sample_line() -> String {
    render_line(&sample_record(), allwise::layout()).expect("sample record renders")
}
