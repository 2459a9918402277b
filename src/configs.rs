//! Configuration of the LTC3335 that the correction depends on
//!
//! The peak input current and the output voltage are selected with the
//! IPK[2:0] and OUT[2:0] pins of the LTC3335. Together they pick one of the
//! correction tables in [`crate::correction`].

use num_enum::{
    IntoPrimitive,
    TryFromPrimitive,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    correction::{
        self,
        CorrectionTable,
    },
    Error,
};


#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[derive(IntoPrimitive, TryFromPrimitive, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// The peak input current of the buck-boost converter
///
/// The discriminant is the level of the IPK[2:0] pins.
pub enum IpeakConfiguration {
    /// 5 milliamps
    Ma5   = 0b000,
    /// 10 milliamps
    Ma10  = 0b001,
    /// 15 milliamps
    Ma15  = 0b010,
    /// 25 milliamps
    Ma25  = 0b011,
    /// 50 milliamps
    Ma50  = 0b100,
    /// 100 milliamps
    Ma100 = 0b101,
    /// 150 milliamps
    Ma150 = 0b110,
    /// 250 milliamps
    Ma250 = 0b111,
}

impl Default for IpeakConfiguration {
    fn default() -> Self {
        IpeakConfiguration::Ma10
    }
}

impl IpeakConfiguration {
    /// All peak current settings, in ascending order
    pub const ALL: [IpeakConfiguration; 8] = [
        IpeakConfiguration::Ma5,
        IpeakConfiguration::Ma10,
        IpeakConfiguration::Ma15,
        IpeakConfiguration::Ma25,
        IpeakConfiguration::Ma50,
        IpeakConfiguration::Ma100,
        IpeakConfiguration::Ma150,
        IpeakConfiguration::Ma250,
    ];

    /// Returns the peak current in mA
    pub const fn milliamps(&self) -> u16 {
        match self {
            IpeakConfiguration::Ma5   => 5,
            IpeakConfiguration::Ma10  => 10,
            IpeakConfiguration::Ma15  => 15,
            IpeakConfiguration::Ma25  => 25,
            IpeakConfiguration::Ma50  => 50,
            IpeakConfiguration::Ma100 => 100,
            IpeakConfiguration::Ma150 => 150,
            IpeakConfiguration::Ma250 => 250,
        }
    }

    /// Looks up the setting for a peak current in mA
    ///
    /// Only the exact values of the eight settings are accepted.
    pub fn from_milliamps(milliamps: u16) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|ipeak| ipeak.milliamps() == milliamps)
            .ok_or(Error::UnsupportedPeakCurrent(milliamps))
    }

    /// Decodes the level of the IPK[2:0] pins
    pub fn from_pin_encoding(bits: u8) -> Result<Self, Error> {
        Self::try_from(bits)
            .map_err(|error| Error::InvalidPinEncoding(error.number))
    }

    /// Returns the level of the IPK[2:0] pins
    pub fn pin_encoding(self) -> u8 {
        self.into()
    }
}


#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[derive(IntoPrimitive, TryFromPrimitive, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// The regulated output voltage
///
/// The discriminant is the level of the OUT[2:0] pins.
pub enum OutputVoltage {
    /// 1.8 volts
    V1_8 = 0b000,
    /// 2.5 volts
    V2_5 = 0b001,
    /// 2.8 volts
    V2_8 = 0b010,
    /// 3.0 volts
    V3_0 = 0b011,
    /// 3.3 volts
    V3_3 = 0b100,
    /// 3.6 volts
    V3_6 = 0b101,
    /// 4.5 volts
    V4_5 = 0b110,
    /// 5.0 volts
    V5_0 = 0b111,
}

impl Default for OutputVoltage {
    fn default() -> Self {
        OutputVoltage::V3_3
    }
}

impl OutputVoltage {
    /// All output voltage settings, in ascending order
    pub const ALL: [OutputVoltage; 8] = [
        OutputVoltage::V1_8,
        OutputVoltage::V2_5,
        OutputVoltage::V2_8,
        OutputVoltage::V3_0,
        OutputVoltage::V3_3,
        OutputVoltage::V3_6,
        OutputVoltage::V4_5,
        OutputVoltage::V5_0,
    ];

    /// Returns the output voltage in mV
    pub const fn millivolts(&self) -> u16 {
        match self {
            OutputVoltage::V1_8 => 1800,
            OutputVoltage::V2_5 => 2500,
            OutputVoltage::V2_8 => 2800,
            OutputVoltage::V3_0 => 3000,
            OutputVoltage::V3_3 => 3300,
            OutputVoltage::V3_6 => 3600,
            OutputVoltage::V4_5 => 4500,
            OutputVoltage::V5_0 => 5000,
        }
    }

    /// Looks up the setting for an output voltage in mV
    pub fn from_millivolts(millivolts: u16) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|vout| vout.millivolts() == millivolts)
            .ok_or(Error::UnsupportedOutputVoltage(millivolts))
    }

    /// Decodes the level of the OUT[2:0] pins
    pub fn from_pin_encoding(bits: u8) -> Result<Self, Error> {
        Self::try_from(bits)
            .map_err(|error| Error::InvalidPinEncoding(error.number))
    }

    /// Returns the level of the OUT[2:0] pins
    pub fn pin_encoding(self) -> u8 {
        self.into()
    }
}


/// Selects the correction table
///
/// The default is the configuration the datasheet example uses: 10mA peak
/// current and 3.3V output.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[derive(Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CorrectionConfig {
    /// The peak current the LTC3335 is strapped for
    pub ipeak: IpeakConfiguration,
    /// The output voltage the LTC3335 is strapped for
    pub output_voltage: OutputVoltage,
}

impl CorrectionConfig {
    /// Returns the correction table for this configuration
    pub const fn table(&self) -> &'static CorrectionTable {
        correction::correction_table(self.ipeak, self.output_voltage)
    }

    /// Returns the correction factor at the given battery voltage
    ///
    /// See [`correction::get_correction_factor`].
    pub fn correction_factor(&self, vbat_mv: u16) -> i16 {
        correction::get_correction_factor(self.table(), vbat_mv)
    }

    /// Corrects a raw coulomb count or current reading
    ///
    /// `raw` may be in any unit; the result is in the same unit.
    pub fn correct(&self, raw: i32, vbat_mv: u16) -> i32 {
        correction::apply_correction(raw, self.correction_factor(vbat_mv))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_encoding_covers_all_settings() {
        for (bits, ipeak) in IpeakConfiguration::ALL.iter().enumerate() {
            assert_eq!(ipeak.pin_encoding(), bits as u8);
            assert_eq!(IpeakConfiguration::from_pin_encoding(bits as u8), Ok(*ipeak));
        }
        for (bits, vout) in OutputVoltage::ALL.iter().enumerate() {
            assert_eq!(vout.pin_encoding(), bits as u8);
            assert_eq!(OutputVoltage::from_pin_encoding(bits as u8), Ok(*vout));
        }
    }

    #[test]
    fn pin_encoding_rejects_more_than_three_bits() {
        assert_eq!(
            IpeakConfiguration::from_pin_encoding(0b1000),
            Err(Error::InvalidPinEncoding(0b1000))
        );
        assert_eq!(
            OutputVoltage::from_pin_encoding(0xff),
            Err(Error::InvalidPinEncoding(0xff))
        );
    }

    #[test]
    fn physical_values() {
        assert_eq!(IpeakConfiguration::from_milliamps(150), Ok(IpeakConfiguration::Ma150));
        assert_eq!(IpeakConfiguration::Ma25.milliamps(), 25);
        assert_eq!(
            IpeakConfiguration::from_milliamps(20),
            Err(Error::UnsupportedPeakCurrent(20))
        );

        assert_eq!(OutputVoltage::from_millivolts(2800), Ok(OutputVoltage::V2_8));
        assert_eq!(OutputVoltage::V4_5.millivolts(), 4500);
        assert_eq!(
            OutputVoltage::from_millivolts(3400),
            Err(Error::UnsupportedOutputVoltage(3400))
        );
    }

    #[test]
    fn default_is_datasheet_example() {
        let config = CorrectionConfig::default();

        assert_eq!(config.ipeak, IpeakConfiguration::Ma10);
        assert_eq!(config.output_voltage, OutputVoltage::V3_3);
        assert_eq!(config.correction_factor(4500), 8826);
    }

    #[test]
    fn correct_applies_interpolated_factor() {
        let config = CorrectionConfig::default();

        assert_eq!(config.correct(31638, 4500), 35898);
        assert_eq!(config.correct(0, 4500), 0);
    }
}
