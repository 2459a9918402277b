//! Correction of coulomb count and battery current based on the following
//! factors:
//!
//! * Battery voltage
//! * Peak current (IPEAK)
//! * Output voltage (VOUT)
//!
//! There is one table per IPEAK/VOUT combination. Each table holds the
//! typical error at battery voltages from [`VBAT_MIN_MV`] to [`VBAT_MAX_MV`],
//! spaced [`VBAT_STEP_MV`] apart, taken from graphs G37 - G44 of the LTC3335
//! datasheet.

use fixed::types::I0F16;

use crate::configs::{
    IpeakConfiguration,
    OutputVoltage,
};


// These are the constants
pub mod ipeak_5ma;
pub mod ipeak_10ma;
pub mod ipeak_15ma;
pub mod ipeak_25ma;
pub mod ipeak_50ma;
pub mod ipeak_100ma;
pub mod ipeak_150ma;
pub mod ipeak_250ma;


/// Battery voltage in mV at the first index of a table
pub const VBAT_MIN_MV: u16 = 1800;

/// Battery voltage in mV between two indices of a table
pub const VBAT_STEP_MV: u16 = 100;

/// Number of battery voltages in a table
pub const VBAT_NUM: usize = 38;

/// Battery voltage in mV at the last index of a table
pub const VBAT_MAX_MV: u16 = VBAT_MIN_MV + VBAT_STEP_MV * (VBAT_NUM as u16 - 1);

/// Correction factors, one for each battery voltage step
///
/// Entry `i` belongs to a battery voltage of
/// `VBAT_MIN_MV + i * VBAT_STEP_MV`. A factor `r` stands for the fraction
/// `r / 65536` of the raw value.
pub type CorrectionTable = [i16; VBAT_NUM];


/// Returns the correction table for a peak current and output voltage
pub const fn correction_table(
    ipeak: IpeakConfiguration,
    output_voltage: OutputVoltage,
) -> &'static CorrectionTable {
    use crate::configs::{
        IpeakConfiguration as I,
        OutputVoltage as V,
    };

    match (ipeak, output_voltage) {
        (I::Ma5, V::V1_8) => ipeak_5ma::VOUT_1_8V,
        (I::Ma5, V::V2_5) => ipeak_5ma::VOUT_2_5V,
        (I::Ma5, V::V2_8) => ipeak_5ma::VOUT_2_8V,
        (I::Ma5, V::V3_0) => ipeak_5ma::VOUT_3_0V,
        (I::Ma5, V::V3_3) => ipeak_5ma::VOUT_3_3V,
        (I::Ma5, V::V3_6) => ipeak_5ma::VOUT_3_6V,
        (I::Ma5, V::V4_5) => ipeak_5ma::VOUT_4_5V,
        (I::Ma5, V::V5_0) => ipeak_5ma::VOUT_5_0V,

        (I::Ma10, V::V1_8) => ipeak_10ma::VOUT_1_8V,
        (I::Ma10, V::V2_5) => ipeak_10ma::VOUT_2_5V,
        (I::Ma10, V::V2_8) => ipeak_10ma::VOUT_2_8V,
        (I::Ma10, V::V3_0) => ipeak_10ma::VOUT_3_0V,
        (I::Ma10, V::V3_3) => ipeak_10ma::VOUT_3_3V,
        (I::Ma10, V::V3_6) => ipeak_10ma::VOUT_3_6V,
        (I::Ma10, V::V4_5) => ipeak_10ma::VOUT_4_5V,
        (I::Ma10, V::V5_0) => ipeak_10ma::VOUT_5_0V,

        (I::Ma15, V::V1_8) => ipeak_15ma::VOUT_1_8V,
        (I::Ma15, V::V2_5) => ipeak_15ma::VOUT_2_5V,
        (I::Ma15, V::V2_8) => ipeak_15ma::VOUT_2_8V,
        (I::Ma15, V::V3_0) => ipeak_15ma::VOUT_3_0V,
        (I::Ma15, V::V3_3) => ipeak_15ma::VOUT_3_3V,
        (I::Ma15, V::V3_6) => ipeak_15ma::VOUT_3_6V,
        (I::Ma15, V::V4_5) => ipeak_15ma::VOUT_4_5V,
        (I::Ma15, V::V5_0) => ipeak_15ma::VOUT_5_0V,

        (I::Ma25, V::V1_8) => ipeak_25ma::VOUT_1_8V,
        (I::Ma25, V::V2_5) => ipeak_25ma::VOUT_2_5V,
        (I::Ma25, V::V2_8) => ipeak_25ma::VOUT_2_8V,
        (I::Ma25, V::V3_0) => ipeak_25ma::VOUT_3_0V,
        (I::Ma25, V::V3_3) => ipeak_25ma::VOUT_3_3V,
        (I::Ma25, V::V3_6) => ipeak_25ma::VOUT_3_6V,
        (I::Ma25, V::V4_5) => ipeak_25ma::VOUT_4_5V,
        (I::Ma25, V::V5_0) => ipeak_25ma::VOUT_5_0V,

        (I::Ma50, V::V1_8) => ipeak_50ma::VOUT_1_8V,
        (I::Ma50, V::V2_5) => ipeak_50ma::VOUT_2_5V,
        (I::Ma50, V::V2_8) => ipeak_50ma::VOUT_2_8V,
        (I::Ma50, V::V3_0) => ipeak_50ma::VOUT_3_0V,
        (I::Ma50, V::V3_3) => ipeak_50ma::VOUT_3_3V,
        (I::Ma50, V::V3_6) => ipeak_50ma::VOUT_3_6V,
        (I::Ma50, V::V4_5) => ipeak_50ma::VOUT_4_5V,
        (I::Ma50, V::V5_0) => ipeak_50ma::VOUT_5_0V,

        (I::Ma100, V::V1_8) => ipeak_100ma::VOUT_1_8V,
        (I::Ma100, V::V2_5) => ipeak_100ma::VOUT_2_5V,
        (I::Ma100, V::V2_8) => ipeak_100ma::VOUT_2_8V,
        (I::Ma100, V::V3_0) => ipeak_100ma::VOUT_3_0V,
        (I::Ma100, V::V3_3) => ipeak_100ma::VOUT_3_3V,
        (I::Ma100, V::V3_6) => ipeak_100ma::VOUT_3_6V,
        (I::Ma100, V::V4_5) => ipeak_100ma::VOUT_4_5V,
        (I::Ma100, V::V5_0) => ipeak_100ma::VOUT_5_0V,

        (I::Ma150, V::V1_8) => ipeak_150ma::VOUT_1_8V,
        (I::Ma150, V::V2_5) => ipeak_150ma::VOUT_2_5V,
        (I::Ma150, V::V2_8) => ipeak_150ma::VOUT_2_8V,
        (I::Ma150, V::V3_0) => ipeak_150ma::VOUT_3_0V,
        (I::Ma150, V::V3_3) => ipeak_150ma::VOUT_3_3V,
        (I::Ma150, V::V3_6) => ipeak_150ma::VOUT_3_6V,
        (I::Ma150, V::V4_5) => ipeak_150ma::VOUT_4_5V,
        (I::Ma150, V::V5_0) => ipeak_150ma::VOUT_5_0V,

        (I::Ma250, V::V1_8) => ipeak_250ma::VOUT_1_8V,
        (I::Ma250, V::V2_5) => ipeak_250ma::VOUT_2_5V,
        (I::Ma250, V::V2_8) => ipeak_250ma::VOUT_2_8V,
        (I::Ma250, V::V3_0) => ipeak_250ma::VOUT_3_0V,
        (I::Ma250, V::V3_3) => ipeak_250ma::VOUT_3_3V,
        (I::Ma250, V::V3_6) => ipeak_250ma::VOUT_3_6V,
        (I::Ma250, V::V4_5) => ipeak_250ma::VOUT_4_5V,
        (I::Ma250, V::V5_0) => ipeak_250ma::VOUT_5_0V,
    }
}

/// Get the correction factor for a battery voltage in mV
///
/// Battery voltages outside of the table are clamped to its first or last
/// entry. In between, the two neighbouring entries are interpolated
/// linearly and rounded by adding half a step before the truncating
/// division. For a negative slope, this rounds `x.5` towards zero rather
/// than away from it.
pub fn get_correction_factor(table: &CorrectionTable, vbat_mv: u16) -> i16 {
    if vbat_mv <= VBAT_MIN_MV {
        #[cfg(feature = "defmt")]
        defmt::trace!("VBAT {=u16}mV clamped to {=u16}mV", vbat_mv, VBAT_MIN_MV);

        return table[0];
    }
    if vbat_mv >= VBAT_MAX_MV {
        #[cfg(feature = "defmt")]
        defmt::trace!("VBAT {=u16}mV clamped to {=u16}mV", vbat_mv, VBAT_MAX_MV);

        return table[VBAT_NUM - 1];
    }

    let index = ((vbat_mv - VBAT_MIN_MV) / VBAT_STEP_MV) as usize;
    let factor1 = table[index] as i32;
    let factor2 = table[index + 1] as i32;

    let offset = (vbat_mv - (VBAT_MIN_MV + index as u16 * VBAT_STEP_MV)) as i32;
    let step = VBAT_STEP_MV as i32;

    // Both neighbours are i16, so the result lies between them
    (factor1 + ((factor2 - factor1) * offset + step / 2) / step) as i16
}

/// Corrects a raw coulomb count or current reading
///
/// Computes `raw + (raw * factor) >> 16`. The shift is arithmetic, so the
/// correction of a negative product rounds towards negative infinity. The
/// result saturates at the bounds of `i32`.
pub fn apply_correction(raw: i32, factor: i16) -> i32 {
    let raw = raw as i64;
    let corrected = raw + ((raw * factor as i64) >> 16);

    if corrected > i32::MAX as i64 {
        i32::MAX
    }
    else if corrected < i32::MIN as i64 {
        i32::MIN
    }
    else {
        corrected as i32
    }
}

/// Returns a correction factor as a fixed-point fraction
///
/// The fraction has 16 fractional bits, which makes this a lossless
/// reinterpretation of the factor.
pub fn correction_fraction(factor: i16) -> I0F16 {
    I0F16::from_bits(factor)
}


#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &CorrectionTable = ipeak_10ma::VOUT_3_3V;

    #[test]
    fn correction_factor_exact() {
        for (index, vbat) in (VBAT_MIN_MV..=VBAT_MAX_MV).step_by(VBAT_STEP_MV as usize).enumerate() {
            assert_eq!(get_correction_factor(TABLE, vbat), TABLE[index]);
        }
    }

    #[test]
    fn correction_factor_datasheet_example() {
        // Graph G43: 10mA, 3.3V, 4.5V battery is 13.4% low
        assert_eq!(get_correction_factor(TABLE, 4500), 8826);
    }

    #[test]
    fn correction_factor_interpolated() {
        // 8826 + (9074 - 8826) / 2
        assert_eq!(get_correction_factor(TABLE, 4550), 8950);
        // 3312 + 221 * 50 / 100, x.5 rounds up
        assert_eq!(get_correction_factor(TABLE, 1850), 3423);
        assert_eq!(get_correction_factor(TABLE, 3333), 6197);
        assert_eq!(get_correction_factor(TABLE, 5499), 11516);
    }

    #[test]
    fn correction_factor_negative_slope_keeps_truncation_bias() {
        let table = ipeak_250ma::VOUT_3_3V;

        // -301 + (-142 * 50 + 50) / 100 = -301 - 70, not -372
        assert_eq!(get_correction_factor(table, 1850), -371);
        // -336.5 and -407.5 both round up
        assert_eq!(get_correction_factor(table, 1825), -336);
        assert_eq!(get_correction_factor(table, 1875), -407);
        assert_eq!(get_correction_factor(table, 1801), -301);
    }

    #[test]
    fn correction_factor_too_low_still_valid() {
        assert_eq!(get_correction_factor(TABLE, 0), TABLE[0]);
        assert_eq!(get_correction_factor(TABLE, VBAT_MIN_MV), TABLE[0]);
    }

    #[test]
    fn correction_factor_too_high_still_valid() {
        assert_eq!(VBAT_MAX_MV, 5500);
        assert_eq!(get_correction_factor(TABLE, VBAT_MAX_MV), TABLE[VBAT_NUM - 1]);
        assert_eq!(get_correction_factor(TABLE, u16::MAX), *TABLE.last().unwrap());
    }

    #[test]
    fn every_configuration_has_its_own_table() {
        for &ipeak in IpeakConfiguration::ALL.iter() {
            for &vout in OutputVoltage::ALL.iter() {
                let table = correction_table(ipeak, vout);

                for &other_ipeak in IpeakConfiguration::ALL.iter() {
                    for &other_vout in OutputVoltage::ALL.iter() {
                        if (ipeak, vout) != (other_ipeak, other_vout) {
                            assert_ne!(table, correction_table(other_ipeak, other_vout));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn table_selection() {
        assert_eq!(
            correction_table(IpeakConfiguration::Ma5, OutputVoltage::V1_8)[0],
            10886
        );
        assert_eq!(
            correction_table(IpeakConfiguration::Ma250, OutputVoltage::V5_0)[VBAT_NUM - 1],
            -167
        );
    }

    #[test]
    fn apply_correction_shifts_arithmetically() {
        // 31638 * 8826 / 65536 = 4260.8
        assert_eq!(apply_correction(31638, 8826), 35898);
        // -4260.8 rounds to -4261
        assert_eq!(apply_correction(-31638, 8826), -35899);
        assert_eq!(apply_correction(10_000, 0), 10_000);
        assert_eq!(apply_correction(65536, -1113), 65536 - 1113);
    }

    #[test]
    fn apply_correction_saturates() {
        assert_eq!(apply_correction(i32::MAX, i16::MAX), i32::MAX);
        assert_eq!(apply_correction(i32::MIN, i16::MAX), i32::MIN);
        assert_eq!(apply_correction(i32::MIN, i16::MIN), i32::MIN / 2);
    }

    #[test]
    fn fraction_matches_factor() {
        let fraction = correction_fraction(8826);

        assert_eq!(fraction.to_bits(), 8826);
        assert!(fraction > I0F16::from_num(0.134));
        assert!(fraction < I0F16::from_num(0.135));
        assert_eq!(correction_fraction(i16::MIN), I0F16::MIN);
    }
}
