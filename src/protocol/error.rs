//! Timebox error types

use thiserror::Error;

/// Errors surfaced by the framing codec and the device session
#[derive(Error, Debug)]
pub enum Error {
    /// Frame too short to decode
    #[error("invalid frame length: got {got} bytes")]
    InvalidLength {
        /// Number of bytes available
        got: usize,
    },

    /// Bad delimiters or an invalid escape sequence
    #[error("malformed payload: {reason}")]
    MalformedPayload {
        /// What was wrong with the frame
        reason: &'static str,
    },

    /// Checksum mismatch
    #[error("checksum mismatch: expected {expected:#06x}, got {found:#06x}")]
    InvalidChecksum {
        /// Checksum computed over the received body
        expected: u16,
        /// Checksum carried by the frame
        found: u16,
    },

    /// Caller-supplied value outside its documented bound
    #[error("{name} out of range: {value} (allowed {min}..={max})")]
    ArgumentOutOfRange {
        /// Argument name
        name: &'static str,
        /// Supplied value
        value: i64,
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },

    /// Transport accepted fewer bytes than the frame length
    #[error("partial transfer: wrote {written} of {expected} bytes")]
    PartialTransfer {
        /// Bytes the transport reported as written
        written: usize,
        /// Length of the frame
        expected: usize,
    },

    /// Initial device response did not match the hello signature
    #[error("handshake mismatch: {reason}")]
    HandshakeMismatch {
        /// Why the response was rejected
        reason: &'static str,
    },

    /// Colour string could not be parsed
    #[error("invalid colour: {0}")]
    InvalidColour(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn out_of_range(name: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::ArgumentOutOfRange {
            name,
            value,
            min,
            max,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
