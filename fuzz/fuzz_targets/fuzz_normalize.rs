//! Fuzz target for normalization.
//!
//! Anything the parser accepts must format, and the canonical text must be
//! a fixed point: normalizing it again yields the same string and value.

#![no_main]

use ipnorm::{normalize, parse, FormatOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the options, the rest is the address text
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };

    let opts = FormatOptions::default()
        .with_compress(flags & 1 == 0)
        .with_hexify(flags & 2 != 0);

    let Ok(original) = parse(text) else {
        return;
    };
    let once = normalize(text, &opts).expect("parsed address must format");
    let twice = normalize(&once, &opts).expect("canonical text must parse");

    assert_eq!(once, twice);
    assert_eq!(parse(&once).map(|addr| addr.number), Ok(original.number));
});
