//! Fuzz target for the address parser.
//!
//! The parser must reject malformed text with an error, never a panic, and
//! whatever it accepts must satisfy the range invariant for its version.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(addr) = ipnorm::parse(text) {
        assert!(addr.check_range().is_ok());
        if addr.version == ipnorm::IpVersion::V4 {
            assert!(!addr.ipv4_mapped);
            assert!(addr.zone_id.is_none());
        }
    }
});
