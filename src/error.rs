//! Error type of this crate

use core::fmt;


/// An error that can occur when building a correction configuration
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The LTC3335 has no peak current setting with this value, in mA
    UnsupportedPeakCurrent(u16),

    /// The LTC3335 has no output voltage setting with this value, in mV
    UnsupportedOutputVoltage(u16),

    /// The value doesn't fit into the 3 configuration pins
    InvalidPinEncoding(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnsupportedPeakCurrent(ma) =>
                write!(f, "unsupported peak current: {}mA", ma),
            Error::UnsupportedOutputVoltage(mv) =>
                write!(f, "unsupported output voltage: {}mV", mv),
            Error::InvalidPinEncoding(bits) =>
                write!(f, "invalid pin encoding: {:#05b}", bits),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}


#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::string::ToString;

    #[test]
    fn display_names_the_rejected_value() {
        assert_eq!(
            Error::UnsupportedPeakCurrent(20).to_string(),
            "unsupported peak current: 20mA"
        );
        assert_eq!(
            Error::UnsupportedOutputVoltage(1200).to_string(),
            "unsupported output voltage: 1200mV"
        );
        assert_eq!(
            Error::InvalidPinEncoding(0b1000).to_string(),
            "invalid pin encoding: 0b1000"
        );
    }
}
