use crate::rules::cron::scan_cron_usage;
use crate::rules::paid::scan_paid_features;
use crate::utils::strip_comments;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file checked when no path is given, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wrangler.toml";

/// Outcome of scanning one config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// One line per matched paid-feature rule, in rule order.
    pub errors: Vec<String>,
    /// One line per matched cron rule, in rule order.
    pub warnings: Vec<String>,
}

impl ScanResult {
    /// True when no paid feature was found. Warnings do not fail the check.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The guard. Holds the location of the config file to verify.
pub struct FreePlanGuard {
    /// Path of the wrangler config.
    pub config_path: PathBuf,
}

impl Default for FreePlanGuard {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl FreePlanGuard {
    /// Creates a guard for the config file at `config_path`.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// File name used in report messages, e.g. `wrangler.toml`.
    pub fn config_name(&self) -> String {
        self.config_path
            .file_name()
            .unwrap_or(self.config_path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// Reads and scans the config file.
    ///
    /// Returns `None` when there is nothing to verify: the file is missing,
    /// unreadable, or empty. Invalid UTF-8 is replaced with U+FFFD and the
    /// rest of the file is still scanned.
    pub fn check(&self) -> Option<ScanResult> {
        let source = read_config(&self.config_path)?;
        Some(Self::scan(&source))
    }

    /// Scans raw config contents.
    ///
    /// Comments are stripped first, then paid-feature and cron rules run over
    /// the remaining text.
    pub fn scan(source: &str) -> ScanResult {
        let content = strip_comments(source);
        ScanResult {
            errors: scan_paid_features(&content),
            warnings: scan_cron_usage(&content),
        }
    }
}

fn read_config(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned()).filter(|s| !s.is_empty())
}
