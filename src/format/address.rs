//! Rendering of address numbers as text.
//!
//! Provides the pieces the formatter assembles:
//! - IPv4 values (u32 -> dotted-decimal string)
//! - IPv6 values (u128 -> eight big-endian 16-bit groups -> lowercase hex)

use std::net::Ipv4Addr;

/// Format a u32 as an IPv4 address string in dotted-decimal notation.
///
/// # Example
///
/// ```
/// use ipnorm::format::format_ipv4;
///
/// assert_eq!(format_ipv4(0xC0A80101), "192.168.1.1");
/// assert_eq!(format_ipv4(0x0A000001), "10.0.0.1");
/// ```
pub fn format_ipv4(value: u32) -> String {
    Ipv4Addr::from(value.to_be_bytes()).to_string()
}

/// Split a 128-bit value into its eight 16-bit groups, most significant first.
pub fn ipv6_groups(value: u128) -> [u16; 8] {
    let mut groups = [0u16; 8];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = (value >> (112 - 16 * i)) as u16;
    }
    groups
}

/// Format groups as lowercase hex without leading zeros (`0` for zero).
///
/// # Example
///
/// ```
/// use ipnorm::format::format_hex_groups;
///
/// assert_eq!(format_hex_groups(&[0x2001, 0x0db8, 0]), vec!["2001", "db8", "0"]);
/// ```
pub fn format_hex_groups(groups: &[u16]) -> Vec<String> {
    groups.iter().map(|group| format!("{group:x}")).collect()
}
