use crate::analyzer::ScanResult;
use colored::*;
use std::io::{self, Write};

/// Prefix on every header line.
pub const TAG: &str = "[verify-free-plan]";

/// Header of the failure block. Only colored when `color` is set.
pub fn failure_header(config_name: &str, color: bool) -> String {
    let header = format!("{} Disallowed paid features detected in {}:", TAG, config_name);
    if color {
        header.red().bold().to_string()
    } else {
        header
    }
}

/// Writes the scan result to the console streams.
///
/// Warnings and the OK line go to `out`, failures go to `err`. Warnings are
/// always written before any failure output. `color_err` controls styling of
/// the failure block, since stderr may be redirected while stdout is a terminal.
/// Returns whether the check passed.
pub fn emit<O: Write, E: Write>(
    result: &ScanResult,
    config_name: &str,
    color_err: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    if !result.warnings.is_empty() {
        writeln!(out, "{}", format!("{} Warnings:", TAG).yellow())?;
        for warning in &result.warnings {
            writeln!(out, "{}", warning)?;
        }
    }

    if !result.passed() {
        writeln!(err, "\n{}", failure_header(config_name, color_err))?;
        writeln!(err, "{}", result.errors.join("\n"))?;
        writeln!(
            err,
            "\nPlease remove or comment them out to stay on the Cloudflare free plan."
        )?;
        return Ok(false);
    }

    writeln!(
        out,
        "{}",
        format!("{} OK - {} appears free-plan compatible.", TAG, config_name).green()
    )?;
    Ok(true)
}
