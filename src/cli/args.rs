//! Command-line argument definitions.

use clap::Parser;

use super::{Mode, OutputFormat};
use crate::address::FormatOptions;

/// Parse IP addresses and print them in RFC 5952 canonical form.
#[derive(Parser, Debug)]
#[command(name = "ipnorm")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Addresses to process (one per line from stdin when omitted)
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<String>,

    /// What to compute for each address
    #[arg(short = 'm', long = "mode", value_enum, default_value = "normalize")]
    pub mode: Mode,

    /// Print every IPv6 group instead of eliding the longest zero run
    #[arg(long = "no-compress")]
    pub no_compress: bool,

    /// Print the IPv4 tail of mapped addresses as two hex groups
    #[arg(long = "hexify")]
    pub hexify: bool,

    /// Output format for stdout
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Stop at the first invalid address
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Formatting options selected by the flags.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::default()
            .with_compress(!self.no_compress)
            .with_hexify(self.hexify)
    }

    /// Check if addresses should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.addresses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["ipnorm", "::1"]);
        assert_eq!(args.addresses, vec!["::1"]);
        assert_eq!(args.mode, Mode::Normalize);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.format_options(), FormatOptions::default());
        assert!(!args.reads_stdin());
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "ipnorm",
            "--mode",
            "parse",
            "--no-compress",
            "--hexify",
            "--format",
            "json",
            "-vv",
        ]);
        assert_eq!(args.mode, Mode::Parse);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.verbose, 2);
        assert!(args.reads_stdin());

        let opts = args.format_options();
        assert!(!opts.compress);
        assert!(opts.hexify);
    }
}
