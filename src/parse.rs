//! Address text parsing.
//!
//! Turns dotted-decimal IPv4 and colon-hex IPv6 text (with optional zone id
//! and embedded IPv4 tail) into a [`ParsedAddress`]. Validation is strict:
//! octets must be decimal and at most 255, hex groups 1-4 digits, and `::`
//! may appear once.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::address::{detect_version, IpVersion, ParsedAddress};
use crate::error::{Error, Result};

/// Number of 16-bit groups in an IPv6 address.
const IPV6_GROUPS: usize = 8;

/// Why a piece of address text was rejected.
type Reason = &'static str;

/// Parse IPv4 or IPv6 text into its numeric form.
///
/// # Example
///
/// ```
/// use ipnorm::{parse, IpVersion};
///
/// let addr = parse("192.168.1.1").unwrap();
/// assert_eq!(addr.number, 0xC0A80101);
/// assert_eq!(addr.version, IpVersion::V4);
///
/// let addr = parse("fe80::1%eth0").unwrap();
/// assert_eq!(addr.zone_id.as_deref(), Some("eth0"));
/// ```
pub fn parse(text: &str) -> Result<ParsedAddress> {
    match detect_version(text) {
        Some(IpVersion::V4) => parse_ipv4(text)
            .map(ParsedAddress::v4)
            .map_err(|reason| Error::invalid_address(text, reason)),
        Some(IpVersion::V6) => parse_ipv6(text),
        None => Err(Error::invalid_address(text, "no '.' or ':' separator")),
    }
}

fn parse_ipv6(text: &str) -> Result<ParsedAddress> {
    let fail = |reason| Error::invalid_address(text, reason);

    let (addr, zone_id) = match text.split_once('%') {
        Some(("", _)) => return Err(fail("missing address before zone id")),
        Some((_, "")) => return Err(fail("empty zone id")),
        Some((addr, zone)) => (addr, Some(zone.to_string())),
        None => (text, None),
    };

    if !addr.contains(':') {
        return Err(fail("no ':' separator before zone id"));
    }

    // An embedded IPv4 tail is rewritten as two hex groups
    let (hex, ipv4_mapped) = if addr.contains('.') {
        (rewrite_ipv4_tail(addr).map_err(fail)?, true)
    } else {
        (Cow::Borrowed(addr), false)
    };

    let number = parse_hex_groups(&hex).map_err(fail)?;

    Ok(ParsedAddress {
        number,
        version: IpVersion::V6,
        ipv4_mapped,
        zone_id,
    })
}

/// Dotted-decimal to a 32-bit value.
fn parse_ipv4(text: &str) -> std::result::Result<u32, Reason> {
    let mut number: u32 = 0;
    let mut count = 0;

    for part in text.split('.') {
        if count == 4 {
            return Err("more than 4 octets");
        }
        number = (number << 8) | u32::from(parse_octet(part)?);
        count += 1;
    }

    if count != 4 {
        return Err("fewer than 4 octets");
    }
    Ok(number)
}

fn parse_octet(part: &str) -> std::result::Result<u8, Reason> {
    if part.is_empty() {
        return Err("empty octet");
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err("octet is not decimal");
    }

    // Leading zeros are allowed; only the value counts
    let digits = part.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    if digits.len() > 3 {
        return Err("octet out of range");
    }
    digits
        .parse::<u16>()
        .ok()
        .and_then(|value| u8::try_from(value).ok())
        .ok_or("octet out of range")
}

/// `::ffff:1.2.3.4` becomes `::ffff:102:304`.
fn rewrite_ipv4_tail(addr: &str) -> std::result::Result<Cow<'_, str>, Reason> {
    let (head, dotted) = addr
        .rsplit_once(':')
        .ok_or("no ':' separator before IPv4 tail")?;
    if head.contains('.') {
        return Err("IPv4 part must be the last segment");
    }

    let v4 = parse_ipv4(dotted)?;
    Ok(Cow::Owned(format!(
        "{}:{:x}:{:x}",
        head,
        v4 >> 16,
        v4 & 0xffff
    )))
}

/// Colon-hex groups (at most one `::`) to a 128-bit value.
fn parse_hex_groups(text: &str) -> std::result::Result<u128, Reason> {
    let mut groups = [0u16; IPV6_GROUPS];

    match text.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return Err("more than one '::'");
            }
            let head = parse_group_list(head)?;
            let tail = parse_group_list(tail)?;

            // `::` stands for at least one zero group
            if head.len() + tail.len() >= IPV6_GROUPS {
                return Err("too many groups around '::'");
            }
            groups[..head.len()].copy_from_slice(&head);
            groups[IPV6_GROUPS - tail.len()..].copy_from_slice(&tail);
        }
        None => {
            let parsed = parse_group_list(text)?;
            if parsed.len() > IPV6_GROUPS {
                return Err("more than 8 groups");
            }
            if parsed.len() < IPV6_GROUPS {
                return Err("fewer than 8 groups without '::'");
            }
            groups.copy_from_slice(&parsed);
        }
    }

    Ok(groups
        .iter()
        .fold(0u128, |acc, &group| (acc << 16) | u128::from(group)))
}

fn parse_group_list(text: &str) -> std::result::Result<SmallVec<[u16; IPV6_GROUPS]>, Reason> {
    if text.is_empty() {
        return Ok(SmallVec::new());
    }
    text.split(':').map(parse_hex_group).collect()
}

fn parse_hex_group(group: &str) -> std::result::Result<u16, Reason> {
    if group.is_empty() {
        return Err("empty group");
    }
    if group.len() > 4 {
        return Err("group longer than 4 hex digits");
    }
    if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("group is not hexadecimal");
    }
    u16::from_str_radix(group, 16).map_err(|_| "group is not hexadecimal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{MAX_V4, MAX_V6};

    fn reason(text: &str) -> &'static str {
        match parse(text) {
            Err(Error::InvalidAddress { reason, .. }) => reason,
            other => panic!("expected InvalidAddress for {text:?}, got {other:?}"),
        }
    }

    // ========== IPv4 ==========

    #[test]
    fn test_parse_ipv4_bounds() {
        assert_eq!(parse("0.0.0.0").unwrap(), ParsedAddress::v4(0));
        let max = parse("255.255.255.255").unwrap();
        assert_eq!(max.number, MAX_V4);
        assert_eq!(max.version, IpVersion::V4);
        assert!(!max.ipv4_mapped);
        assert_eq!(max.zone_id, None);
    }

    #[test]
    fn test_parse_ipv4_common() {
        assert_eq!(parse("192.168.1.1").unwrap().number, 0xC0A80101);
        assert_eq!(parse("10.0.0.1").unwrap().number, 0x0A000001);
        assert_eq!(parse("127.0.0.1").unwrap().number, 0x7F000001);
    }

    #[test]
    fn test_parse_ipv4_leading_zeros() {
        assert_eq!(parse("01.02.03.04").unwrap().number, 0x01020304);
        assert_eq!(parse("0000.0.00.255").unwrap().number, 255);
        assert_eq!(parse("000.0.00.0255").unwrap().number, 255);
    }

    #[test]
    fn test_parse_ipv4_invalid() {
        assert_eq!(reason("0.0.0.256"), "octet out of range");
        assert_eq!(reason("0.0.0.1000"), "octet out of range");
        assert_eq!(reason("1.2.3"), "fewer than 4 octets");
        assert_eq!(reason("1.2.3.4.5"), "more than 4 octets");
        assert_eq!(reason("1..3.4"), "empty octet");
        assert_eq!(reason("1.2.3."), "empty octet");
        assert_eq!(reason("1.2.3.+4"), "octet is not decimal");
        assert_eq!(reason("1.2.3.a"), "octet is not decimal");
        assert_eq!(reason(" 1.2.3.4"), "octet is not decimal");
    }

    #[test]
    fn test_parse_no_separator() {
        assert_eq!(reason(""), "no '.' or ':' separator");
        assert_eq!(reason("1"), "no '.' or ':' separator");
        assert_eq!(reason("localhost"), "no '.' or ':' separator");
    }

    // ========== IPv6 ==========

    #[test]
    fn test_parse_ipv6_bounds() {
        assert_eq!(parse("::").unwrap(), ParsedAddress::v6(0));
        let max = parse("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff").unwrap();
        assert_eq!(max, ParsedAddress::v6(MAX_V6));
    }

    #[test]
    fn test_parse_ipv6_double_colon_positions() {
        assert_eq!(parse("::1").unwrap().number, 1);
        assert_eq!(parse("1::").unwrap().number, 1 << 112);
        assert_eq!(parse("1::1").unwrap().number, (1 << 112) | 1);
        assert_eq!(
            parse("1:2:3:4:5:6:7::").unwrap().number,
            0x0001_0002_0003_0004_0005_0006_0007_0000
        );
        assert_eq!(
            parse("::2:3:4:5:6:7:8").unwrap().number,
            0x0000_0002_0003_0004_0005_0006_0007_0008
        );
    }

    #[test]
    fn test_parse_ipv6_full_form() {
        let addr = parse("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap();
        assert_eq!(addr.number, 0x2001_0db8_0000_0000_0000_0000_0000_0001);
        assert!(!addr.ipv4_mapped);
    }

    #[test]
    fn test_parse_ipv6_mixed_case() {
        assert_eq!(
            parse("1080::8:800:200C:417A").unwrap(),
            parse("1080::8:800:200c:417a").unwrap()
        );
    }

    #[test]
    fn test_parse_ipv6_zone_id() {
        let addr = parse("::%en1").unwrap();
        assert_eq!(addr.number, 0);
        assert_eq!(addr.zone_id.as_deref(), Some("en1"));

        // Only the first '%' splits
        let addr = parse("fe80::1%a%b").unwrap();
        assert_eq!(addr.zone_id.as_deref(), Some("a%b"));
    }

    #[test]
    fn test_parse_ipv6_zone_id_invalid() {
        assert_eq!(reason("::%"), "empty zone id");
        assert_eq!(reason("%en1:"), "missing address before zone id");
        assert_eq!(reason("1.2.3.4%a:b"), "no ':' separator before zone id");
    }

    #[test]
    fn test_parse_ipv4_mapped() {
        let addr = parse("::ffff:191.239.213.197").unwrap();
        assert_eq!(addr.number, 0xffff_bfef_d5c5);
        assert!(addr.ipv4_mapped);
        assert_eq!(addr.version, IpVersion::V6);

        let addr = parse("::1.2.3.4").unwrap();
        assert_eq!(addr.number, 0x0102_0304);
        assert!(addr.ipv4_mapped);

        let addr = parse("64:ff9b::192.0.2.33").unwrap();
        assert_eq!(addr.number, 0x0064_ff9b_0000_0000_0000_0000_c000_0221);

        let addr = parse("1:2:3:4:5:6:7.8.9.10").unwrap();
        assert_eq!(addr.number, 0x0001_0002_0003_0004_0005_0006_0708_090a);
    }

    #[test]
    fn test_parse_ipv4_mapped_with_zone() {
        let addr = parse("::ffff:10.0.0.1%eth0").unwrap();
        assert!(addr.ipv4_mapped);
        assert_eq!(addr.zone_id.as_deref(), Some("eth0"));
        assert_eq!(addr.number, 0xffff_0a00_0001);
    }

    #[test]
    fn test_parse_ipv4_mapped_invalid() {
        assert_eq!(reason("::ffff:1.2.3.256"), "octet out of range");
        assert_eq!(reason("::ffff:1.2.3"), "fewer than 4 octets");
        assert_eq!(reason("1.2.3.4::"), "IPv4 part must be the last segment");
        assert_eq!(reason("1.2.3.4:ffff::1"), "IPv4 part must be the last segment");
        assert_eq!(reason(":1.2.3.4"), "empty group");
        assert_eq!(reason("1:2:3:4:5:6:7:1.2.3.4"), "more than 8 groups");
    }

    #[test]
    fn test_parse_ipv6_invalid() {
        assert_eq!(reason("1::2::3"), "more than one '::'");
        assert_eq!(reason(":::"), "empty group");
        assert_eq!(reason("1:::2"), "empty group");
        assert_eq!(reason(":1::"), "empty group");
        assert_eq!(reason("1:2:3:4:5:6:7:"), "empty group");
        assert_eq!(reason("1:2:3:4:5:6:7:8:9"), "more than 8 groups");
        assert_eq!(reason("1:2:3:4:5:6:7"), "fewer than 8 groups without '::'");
        assert_eq!(reason("1:2:3:4::5:6:7:8"), "too many groups around '::'");
        assert_eq!(reason("12345::"), "group longer than 4 hex digits");
        assert_eq!(reason("2001:000:00000:0db8::1"), "group longer than 4 hex digits");
        assert_eq!(reason("g::"), "group is not hexadecimal");
        assert_eq!(reason("+1::"), "group is not hexadecimal");
    }

    #[test]
    fn test_from_str() {
        let addr: ParsedAddress = "2001:db8::1".parse().unwrap();
        assert_eq!(addr.number, 0x2001_0db8_0000_0000_0000_0000_0000_0001);
        assert!("nope".parse::<ParsedAddress>().is_err());
    }
}
