//! Error types for ipnorm.
//!
//! Every fallible operation in the crate returns [`enum@Error`]:
//!
//! - [`Error::InvalidAddress`] - text that is not an IPv4 or IPv6 address
//! - [`Error::InvalidVersion`] - a version tag other than 4 or 6
//! - [`Error::InvalidNumber`] - a numeric value too large for its version
//!
//! All errors implement `std::error::Error` and can be converted to `anyhow::Error`.

use thiserror::Error;

/// Main error type for ipnorm operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text could not be parsed as an IP address
    #[error("Invalid IP address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: &'static str },

    /// Version tag is neither 4 nor 6
    #[error("Invalid IP version: {version} (expected 4 or 6)")]
    InvalidVersion { version: u8 },

    /// Number is out of range for the address version
    #[error("Invalid number for IPv{version}: {number} exceeds {max}")]
    InvalidNumber { number: u128, version: u8, max: u128 },
}

impl Error {
    pub(crate) fn invalid_address(input: &str, reason: &'static str) -> Self {
        Error::InvalidAddress {
            input: input.to_string(),
            reason,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
