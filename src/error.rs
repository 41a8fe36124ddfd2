//! Configuration errors for the ambient CLI layer.
//!
//! The core pipeline never returns an error — §7 reports link-layer
//! problems through [`crate::ErrorReport`], not `Result` — but turning a
//! user-supplied string into one of the four tagged enumerations in §6
//! (framing, error code, line code, carrier) can fail, and that failure is
//! real, so it gets a proper error type instead of a panic.

use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum ConfigParseError {
    #[snafu(display(
        "'{value}' is not a valid framing discipline (expected none, char-count, byte-stuffing, or bit-stuffing)"
    ))]
    InvalidFraming { value: String },

    #[snafu(display(
        "'{value}' is not a valid error code (expected none, even-parity, crc32, or hamming)"
    ))]
    InvalidErrorCode { value: String },

    #[snafu(display(
        "'{value}' is not a valid line code (expected nrz-polar, manchester, or bipolar)"
    ))]
    InvalidLineCode { value: String },

    #[snafu(display(
        "'{value}' is not a valid carrier (expected ask, fsk, qpsk, or 16-qam)"
    ))]
    InvalidCarrier { value: String },
}
