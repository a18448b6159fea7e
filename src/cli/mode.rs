//! Per-address evaluation for each CLI mode.

use clap::ValueEnum;

use super::Value;
use crate::address::{ip_version, FormatOptions};
use crate::error::Result;
use crate::{normalize, parse};

/// What the CLI computes for each input address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Canonical text form (default)
    Normalize,
    /// Numeric form: number, version, IPv4-mapped flag and zone id
    Parse,
    /// Detected version only (4, 6, or 0); never fails
    Version,
}

impl Mode {
    /// Column names of the rows produced by [`Mode::evaluate`].
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Mode::Normalize => &["input", "normalized"],
            Mode::Parse => &["input", "number", "version", "ipv4_mapped", "zone_id"],
            Mode::Version => &["input", "version"],
        }
    }

    /// Evaluate one input into a row matching [`Mode::columns`].
    pub fn evaluate(self, input: &str, opts: &FormatOptions) -> Result<Vec<Value>> {
        let input_value = Value::Text(input.to_string());

        match self {
            Mode::Normalize => Ok(vec![input_value, Value::Text(normalize(input, opts)?)]),
            Mode::Parse => {
                let addr = parse(input)?;
                Ok(vec![
                    input_value,
                    // Decimal text: the value can exceed what JSON numbers hold exactly
                    Value::Text(addr.number.to_string()),
                    Value::Number(addr.version.as_u8().into()),
                    Value::Bool(addr.ipv4_mapped),
                    addr.zone_id.map_or(Value::Null, Value::Text),
                ])
            }
            Mode::Version => Ok(vec![input_value, Value::Number(ip_version(input).into())]),
        }
    }
}
