//! Canonical text formatting for numeric addresses.
//!
//! Renders a [`ParsedAddress`] back to text:
//! - IPv4 as dotted-decimal
//! - IPv6 as lowercase hex groups, with the longest zero run elided per
//!   RFC 5952 and an optional dotted IPv4 tail and `%zone` suffix

mod address;
mod compress;

pub use address::{format_hex_groups, format_ipv4, ipv6_groups};
pub use compress::compress;

use crate::address::{FormatOptions, IpVersion, ParsedAddress};
use crate::error::Result;

/// Render an address as text.
///
/// Fails with [`Error::InvalidNumber`](crate::Error::InvalidNumber) when the
/// number does not fit the address version.
///
/// # Example
///
/// ```
/// use ipnorm::{stringify, FormatOptions, ParsedAddress};
///
/// let addr = ParsedAddress::v6(0x2001_0db8_0000_0000_0000_0000_0000_0001);
/// assert_eq!(stringify(&addr, &FormatOptions::default()).unwrap(), "2001:db8::1");
///
/// let opts = FormatOptions::default().with_compress(false);
/// assert_eq!(stringify(&addr, &opts).unwrap(), "2001:db8:0:0:0:0:0:1");
/// ```
pub fn stringify(addr: &ParsedAddress, opts: &FormatOptions) -> Result<String> {
    addr.check_range()?;

    match addr.version {
        IpVersion::V4 => Ok(format_ipv4(addr.number as u32)),
        IpVersion::V6 => Ok(format_ipv6(addr, opts)),
    }
}

fn format_ipv6(addr: &ParsedAddress, opts: &FormatOptions) -> String {
    let groups = format_hex_groups(&ipv6_groups(addr.number));
    let join = |groups: &[String]| {
        if opts.compress {
            compress(groups)
        } else {
            groups.join(":")
        }
    };

    let mut text = if addr.ipv4_mapped && !opts.hexify {
        // Only the hex prefix takes part in compression
        let prefix = join(&groups[..6]);
        let tail = format_ipv4(addr.number as u32);
        if prefix.ends_with("::") {
            format!("{prefix}{tail}")
        } else {
            format!("{prefix}:{tail}")
        }
    } else {
        join(&groups[..])
    };

    if let Some(zone_id) = &addr.zone_id {
        text.push('%');
        text.push_str(zone_id);
    }
    text
}
