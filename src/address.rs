//! Address value types.
//!
//! A [`ParsedAddress`] is the numeric form every parse produces and every
//! format consumes: one unsigned integer in network byte order plus the
//! version it belongs to. IPv6-only extras (the IPv4-mapped flag and the
//! zone id) travel with it.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};

/// Largest IPv4 address value (`2^32 - 1`).
pub const MAX_V4: u128 = u32::MAX as u128;

/// Largest IPv6 address value (`2^128 - 1`).
pub const MAX_V6: u128 = u128::MAX;

/// IP protocol version of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpVersion {
    /// 32-bit dotted-decimal addresses
    V4 = 4,
    /// 128-bit colon-hex addresses
    V6 = 6,
}

impl IpVersion {
    /// The numeric version tag (4 or 6).
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Largest address value representable in this version.
    pub fn max_number(self) -> u128 {
        match self {
            IpVersion::V4 => MAX_V4,
            IpVersion::V6 => MAX_V6,
        }
    }
}

impl TryFrom<u8> for IpVersion {
    type Error = Error;

    fn try_from(version: u8) -> Result<Self> {
        match version {
            4 => Ok(IpVersion::V4),
            6 => Ok(IpVersion::V6),
            _ => Err(Error::InvalidVersion { version }),
        }
    }
}

/// Detect the version of an address string without validating it.
///
/// Anything containing `:` is IPv6, otherwise anything containing `.` is IPv4.
///
/// # Example
///
/// ```
/// use ipnorm::{detect_version, IpVersion};
///
/// assert_eq!(detect_version("::1.2.3.4"), Some(IpVersion::V6));
/// assert_eq!(detect_version("1.2.3.4"), Some(IpVersion::V4));
/// assert_eq!(detect_version("foo"), None);
/// ```
pub fn detect_version(text: &str) -> Option<IpVersion> {
    if text.contains(':') {
        Some(IpVersion::V6)
    } else if text.contains('.') {
        Some(IpVersion::V4)
    } else {
        None
    }
}

/// Numeric version of an address string: 4, 6, or 0 when unrecognized.
pub fn ip_version(text: &str) -> u8 {
    detect_version(text).map_or(0, IpVersion::as_u8)
}

/// An IP address in numeric form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedAddress {
    /// Address value, big-endian, at most `version.max_number()`
    pub number: u128,
    pub version: IpVersion,
    /// IPv6 only: the low 32 bits carry an IPv4 address written in dotted form
    pub ipv4_mapped: bool,
    /// IPv6 only: scope suffix after `%`
    pub zone_id: Option<String>,
}

impl ParsedAddress {
    /// Build an address from a raw number and version tag, validating both.
    pub fn new(number: u128, version: u8) -> Result<Self> {
        let version = IpVersion::try_from(version)?;
        let addr = Self {
            number,
            version,
            ipv4_mapped: false,
            zone_id: None,
        };
        addr.check_range()?;
        Ok(addr)
    }

    /// An IPv4 address from its 32-bit value.
    pub fn v4(number: u32) -> Self {
        Self {
            number: number as u128,
            version: IpVersion::V4,
            ipv4_mapped: false,
            zone_id: None,
        }
    }

    /// An IPv6 address from its 128-bit value.
    pub fn v6(number: u128) -> Self {
        Self {
            number,
            version: IpVersion::V6,
            ipv4_mapped: false,
            zone_id: None,
        }
    }

    /// Mark the low 32 bits as an embedded IPv4 address.
    pub fn with_ipv4_mapped(mut self, ipv4_mapped: bool) -> Self {
        self.ipv4_mapped = ipv4_mapped;
        self
    }

    /// Attach a zone id, rendered after `%`.
    pub fn with_zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }

    /// Fail with [`Error::InvalidNumber`] if `number` exceeds the version's maximum.
    pub fn check_range(&self) -> Result<()> {
        let max = self.version.max_number();
        if self.number > max {
            return Err(Error::InvalidNumber {
                number: self.number,
                version: self.version.as_u8(),
                max,
            });
        }
        Ok(())
    }
}

impl std::str::FromStr for ParsedAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse::parse(s)
    }
}

impl From<Ipv4Addr> for ParsedAddress {
    fn from(addr: Ipv4Addr) -> Self {
        ParsedAddress::v4(u32::from(addr))
    }
}

impl From<Ipv6Addr> for ParsedAddress {
    fn from(addr: Ipv6Addr) -> Self {
        ParsedAddress::v6(u128::from(addr))
    }
}

impl From<IpAddr> for ParsedAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

/// Converts to the standard library type; the zone id is dropped.
impl TryFrom<&ParsedAddress> for IpAddr {
    type Error = Error;

    fn try_from(addr: &ParsedAddress) -> Result<Self> {
        addr.check_range()?;
        Ok(match addr.version {
            IpVersion::V4 => IpAddr::V4(Ipv4Addr::from(addr.number as u32)),
            IpVersion::V6 => IpAddr::V6(Ipv6Addr::from(addr.number)),
        })
    }
}

/// Options controlling how a [`ParsedAddress`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    /// Elide the longest zero run of an IPv6 address with `::`
    pub compress: bool,
    /// Render the IPv4 tail of a mapped address as two hex groups
    pub hexify: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            compress: true,
            hexify: false,
        }
    }
}

impl FormatOptions {
    /// Enable or disable zero-run elision.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Render a mapped IPv4 tail as hex groups instead of dotted-decimal.
    pub fn with_hexify(mut self, hexify: bool) -> Self {
        self.hexify = hexify;
        self
    }
}
