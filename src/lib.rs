//! ipnorm - Parse and canonicalize IP address text.
//!
//! This library converts IPv4 and IPv6 address text into a numeric form
//! (a `u128` plus a version tag) and renders it back as canonical text,
//! following the RFC 5952 rules for IPv6: lowercase hex, no leading zeros,
//! and the leftmost longest run of two or more zero groups elided as `::`.
//!
//! Zone ids (`fe80::1%eth0`) and embedded IPv4 tails (`::ffff:10.0.0.1`)
//! survive the round trip.
//!
//! # Example
//!
//! ```
//! use ipnorm::{normalize, parse, stringify, FormatOptions};
//!
//! let opts = FormatOptions::default();
//! assert_eq!(normalize("2001:0DB8:0000:0000:0000:0000:0000:0001", &opts).unwrap(), "2001:db8::1");
//! assert_eq!(normalize("01.02.03.04", &opts).unwrap(), "1.2.3.4");
//!
//! let addr = parse("::ffff:191.239.213.197").unwrap();
//! assert!(addr.ipv4_mapped);
//! let hex = stringify(&addr, &opts.with_hexify(true)).unwrap();
//! assert_eq!(hex, "::ffff:bfef:d5c5");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------------------------+
//! |  address/  - ParsedAddress, IpVersion, FormatOptions      |
//! |  parse/    - text -> ParsedAddress                        |
//! |  format/   - ParsedAddress -> text, RFC 5952 compression  |
//! |  error/    - Error types                                  |
//! |  cli/      - command-line front end for the ipnorm binary |
//! +-----------------------------------------------------------+
//! ```

pub mod address;
pub mod cli;
pub mod error;
pub mod format;
pub mod parse;

pub use address::{
    detect_version, ip_version, FormatOptions, IpVersion, ParsedAddress, MAX_V4, MAX_V6,
};
pub use error::{Error, Result};
pub use format::{compress, stringify};
pub use parse::parse;

/// Parse `text` and render it back in canonical form.
///
/// Errors from either step are returned unchanged.
///
/// # Example
///
/// ```
/// use ipnorm::{normalize, FormatOptions};
///
/// let opts = FormatOptions::default();
/// assert_eq!(normalize("1:0:0:2:3:0:0:1", &opts).unwrap(), "1::2:3:0:0:1");
/// assert_eq!(normalize("::%en1", &opts).unwrap(), "::%en1");
/// assert!(normalize("0.0.0.256", &opts).is_err());
/// ```
pub fn normalize(text: &str, opts: &FormatOptions) -> Result<String> {
    stringify(&parse(text)?, opts)
}
