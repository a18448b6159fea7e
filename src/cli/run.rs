//! Input reading and the per-address processing loop.

use std::io::{self, BufRead, Write};

use super::{Args, OutputFormatter, ResultSet};

/// One address per line; surrounding whitespace trimmed, blank lines skipped.
pub fn read_inputs<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

/// Evaluate every input, write the successful rows, and return the number of failures.
///
/// Invalid inputs are logged and skipped; with `--fail-fast` processing stops
/// at the first one.
pub fn run<W: Write>(args: &Args, inputs: &[String], writer: &mut W) -> io::Result<usize> {
    let opts = args.format_options();
    tracing::debug!(mode = ?args.mode, ?opts, inputs = inputs.len(), "processing addresses");

    let mut results = ResultSet::new(args.mode.columns());
    let mut failures = 0usize;

    for input in inputs {
        match args.mode.evaluate(input, &opts) {
            Ok(row) => results.push(row),
            Err(err) => {
                failures += 1;
                tracing::warn!("{err}");
                if args.fail_fast {
                    break;
                }
            }
        }
    }

    tracing::info!(ok = results.len(), failed = failures, "done");

    OutputFormatter::new(args.format).write(&results, writer)?;
    Ok(failures)
}
