//! The correction table selected at build time
//!
//! Exactly one `ipeak-*` and one `vout-*` cargo feature have to be enabled
//! together with `software-correction`. Anything else fails the build.

use crate::{
    configs::{
        CorrectionConfig,
        IpeakConfiguration,
        OutputVoltage,
    },
    correction::{
        self,
        CorrectionTable,
    },
};


const IPEAK_FEATURES: usize =
      cfg!(feature = "ipeak-5ma")   as usize
    + cfg!(feature = "ipeak-10ma")  as usize
    + cfg!(feature = "ipeak-15ma")  as usize
    + cfg!(feature = "ipeak-25ma")  as usize
    + cfg!(feature = "ipeak-50ma")  as usize
    + cfg!(feature = "ipeak-100ma") as usize
    + cfg!(feature = "ipeak-150ma") as usize
    + cfg!(feature = "ipeak-250ma") as usize;

const VOUT_FEATURES: usize =
      cfg!(feature = "vout-1v8") as usize
    + cfg!(feature = "vout-2v5") as usize
    + cfg!(feature = "vout-2v8") as usize
    + cfg!(feature = "vout-3v0") as usize
    + cfg!(feature = "vout-3v3") as usize
    + cfg!(feature = "vout-3v6") as usize
    + cfg!(feature = "vout-4v5") as usize
    + cfg!(feature = "vout-5v0") as usize;

const _: () = assert!(
    IPEAK_FEATURES == 1,
    "`software-correction` requires exactly one `ipeak-*` feature",
);
const _: () = assert!(
    VOUT_FEATURES == 1,
    "`software-correction` requires exactly one `vout-*` feature",
);


const IPEAK: IpeakConfiguration =
    if cfg!(feature = "ipeak-5ma") {
        IpeakConfiguration::Ma5
    }
    else if cfg!(feature = "ipeak-10ma") {
        IpeakConfiguration::Ma10
    }
    else if cfg!(feature = "ipeak-15ma") {
        IpeakConfiguration::Ma15
    }
    else if cfg!(feature = "ipeak-25ma") {
        IpeakConfiguration::Ma25
    }
    else if cfg!(feature = "ipeak-50ma") {
        IpeakConfiguration::Ma50
    }
    else if cfg!(feature = "ipeak-100ma") {
        IpeakConfiguration::Ma100
    }
    else if cfg!(feature = "ipeak-150ma") {
        IpeakConfiguration::Ma150
    }
    else {
        IpeakConfiguration::Ma250
    };

const OUTPUT_VOLTAGE: OutputVoltage =
    if cfg!(feature = "vout-1v8") {
        OutputVoltage::V1_8
    }
    else if cfg!(feature = "vout-2v5") {
        OutputVoltage::V2_5
    }
    else if cfg!(feature = "vout-2v8") {
        OutputVoltage::V2_8
    }
    else if cfg!(feature = "vout-3v0") {
        OutputVoltage::V3_0
    }
    else if cfg!(feature = "vout-3v3") {
        OutputVoltage::V3_3
    }
    else if cfg!(feature = "vout-3v6") {
        OutputVoltage::V3_6
    }
    else if cfg!(feature = "vout-4v5") {
        OutputVoltage::V4_5
    }
    else {
        OutputVoltage::V5_0
    };


/// The configuration selected by the cargo features
pub const SOFTWARE_CORRECTION_CONFIG: CorrectionConfig = CorrectionConfig {
    ipeak:          IPEAK,
    output_voltage: OUTPUT_VOLTAGE,
};

/// The correction table selected by the cargo features
pub const SOFTWARE_CORRECTION_TABLE: &CorrectionTable =
    correction::correction_table(IPEAK, OUTPUT_VOLTAGE);


/// Returns the software correction factor for a battery voltage in mV
///
/// This is [`correction::get_correction_factor`] on
/// [`SOFTWARE_CORRECTION_TABLE`].
///
/// # Example
///
/// With the default features (10mA, 3.3V):
///
/// ``` rust
/// # #[cfg(all(feature = "ipeak-10ma", feature = "vout-3v3"))]
/// assert_eq!(ltc3335::get_software_correction_factor(4500), 8826);
/// ```
pub fn get_software_correction_factor(vbat_mv: u16) -> i16 {
    correction::get_correction_factor(SOFTWARE_CORRECTION_TABLE, vbat_mv)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::{
        VBAT_MAX_MV,
        VBAT_MIN_MV,
        VBAT_NUM,
    };

    #[test]
    fn selected_table_matches_config() {
        assert_eq!(SOFTWARE_CORRECTION_TABLE, SOFTWARE_CORRECTION_CONFIG.table());
    }

    #[test]
    fn boundaries_are_clamped() {
        assert_eq!(
            get_software_correction_factor(VBAT_MIN_MV),
            SOFTWARE_CORRECTION_TABLE[0]
        );
        assert_eq!(
            get_software_correction_factor(5400),
            SOFTWARE_CORRECTION_TABLE[36]
        );
        assert_eq!(
            get_software_correction_factor(VBAT_MAX_MV),
            SOFTWARE_CORRECTION_TABLE[VBAT_NUM - 1]
        );
    }

    #[cfg(all(feature = "ipeak-10ma", feature = "vout-3v3"))]
    #[test]
    fn default_features_select_datasheet_example() {
        assert_eq!(
            SOFTWARE_CORRECTION_CONFIG,
            CorrectionConfig {
                ipeak:          IpeakConfiguration::Ma10,
                output_voltage: OutputVoltage::V3_3,
            }
        );
        assert_eq!(get_software_correction_factor(4500), 8826);
    }
}
