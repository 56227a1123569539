use anyhow::Result;
use clap::Parser;
use freeplan_guard::analyzer::{FreePlanGuard, DEFAULT_CONFIG_FILE};
use freeplan_guard::report;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

/// Fails the build when wrangler.toml uses features outside the Cloudflare free plan.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the wrangler config, relative to the working directory.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Anything else on the command line is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let guard = FreePlanGuard::new(cli.config);

    // No config, nothing to verify.
    let Some(result) = guard.check() else {
        return Ok(ExitCode::SUCCESS);
    };

    let passed = report::emit(
        &result,
        &guard.config_name(),
        !cli.no_color && io::stderr().is_terminal(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
