use ltc3335::{
    correction::{
        VBAT_MAX_MV,
        VBAT_MIN_MV,
        VBAT_NUM,
        VBAT_STEP_MV,
    },
    CorrectionConfig,
    IpeakConfiguration,
    OutputVoltage,
};
use proptest::prelude::*;


fn config() -> impl Strategy<Value = CorrectionConfig> {
    (0u8..8, 0u8..8).prop_map(|(ipeak, vout)| CorrectionConfig {
        ipeak:          IpeakConfiguration::from_pin_encoding(ipeak).unwrap(),
        output_voltage: OutputVoltage::from_pin_encoding(vout).unwrap(),
    })
}


proptest! {
    #[test]
    fn below_range_is_first_entry(config in config(), vbat in 0..=VBAT_MIN_MV) {
        prop_assert_eq!(config.correction_factor(vbat), config.table()[0]);
    }

    #[test]
    fn above_range_is_last_entry(config in config(), vbat in VBAT_MAX_MV..=u16::MAX) {
        prop_assert_eq!(config.correction_factor(vbat), config.table()[VBAT_NUM - 1]);
    }

    #[test]
    fn grid_points_are_exact(config in config(), index in 0..VBAT_NUM) {
        let vbat = VBAT_MIN_MV + index as u16 * VBAT_STEP_MV;
        prop_assert_eq!(config.correction_factor(vbat), config.table()[index]);
    }

    #[test]
    fn result_lies_between_neighbours(config in config(), vbat in VBAT_MIN_MV..VBAT_MAX_MV) {
        let index = ((vbat - VBAT_MIN_MV) / VBAT_STEP_MV) as usize;
        let low   = config.table()[index].min(config.table()[index + 1]);
        let high  = config.table()[index].max(config.table()[index + 1]);

        let factor = config.correction_factor(vbat);
        prop_assert!(low <= factor && factor <= high);
    }

    #[test]
    fn adjacent_voltages_change_by_at_most_the_interval_delta(
        config in config(),
        vbat   in VBAT_MIN_MV..VBAT_MAX_MV
    ) {
        let index = ((vbat - VBAT_MIN_MV) / VBAT_STEP_MV) as usize;
        let delta = (config.table()[index + 1] as i32 - config.table()[index] as i32).abs();

        let change = (config.correction_factor(vbat + 1) as i32
            - config.correction_factor(vbat) as i32).abs();
        prop_assert!(change <= delta);
    }

    #[test]
    fn correction_has_the_sign_of_the_factor(
        config in config(),
        vbat   in 0u16..6000,
        raw    in 0i32..=i32::MAX / 2
    ) {
        let factor    = config.correction_factor(vbat);
        let corrected = config.correct(raw, vbat);

        if factor >= 0 {
            prop_assert!(corrected >= raw);
        }
        else {
            prop_assert!(corrected <= raw);
        }
    }
}
