//! Software correction for the LTC3335 coulomb counter
//!
//! The LTC3335's accumulated charge and battery current measurements carry a
//! typical error that depends on the configured peak current (IPEAK), the
//! output voltage (VOUT) and the battery voltage (VBAT). For low IPEAK
//! settings this error can reach 40%. Graphs G37 - G44 of the datasheet show
//! it; this crate carries those curves as tables of signed 16-bit correction
//! factors and interpolates them over the battery voltage.
//!
//! A correction factor `r` represents the fraction `r / 65536` of the raw
//! value that has to be added to it:
//!
//! ``` rust
//! use ltc3335::{
//!     configs::{CorrectionConfig, IpeakConfiguration, OutputVoltage},
//!     correction::apply_correction,
//! };
//!
//! let config = CorrectionConfig {
//!     ipeak:          IpeakConfiguration::Ma10,
//!     output_voltage: OutputVoltage::V3_3,
//! };
//!
//! let factor = config.correction_factor(4500);
//! assert_eq!(factor, 8826);
//!
//! // One accumulator count at a prescaler of 5 is 31638 mAs
//! assert_eq!(apply_correction(31638, factor), 35898);
//! ```
//!
//! The tables are only valid at room temperature and for the recommended
//! Coilcraft LPS5030-xxxMRB inductor.
//!
//! # Build-time selection
//!
//! Firmware that knows its IPEAK and VOUT pin strapping at build time
//! enables the `software-correction` feature together with exactly one
//! `ipeak-*` and one `vout-*` feature. Only that table is then referenced
//! by [`software::get_software_correction_factor`]. The default features
//! select the 10mA / 3.3V configuration.


#![no_std]

#![deny(missing_docs)]


#[cfg(feature = "std")]
extern crate std;


pub mod configs;
pub mod correction;
pub mod error;

#[cfg(feature = "software-correction")]
pub mod software;


pub use configs::{
    CorrectionConfig,
    IpeakConfiguration,
    OutputVoltage,
};
pub use correction::{
    apply_correction,
    correction_fraction,
    correction_table,
    get_correction_factor,
    CorrectionTable,
};
pub use error::Error;

#[cfg(feature = "software-correction")]
pub use software::get_software_correction_factor;
