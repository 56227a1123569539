// Lib file to expose modules for testing and for the `verify-free-plan` binary.

/// Module containing the guard itself.
/// This includes the `FreePlanGuard` struct and the `ScanResult` it produces.
pub mod analyzer;

/// Module containing the rule sets.
/// Paid features fail the build, cron usage only warns.
pub mod rules;

/// Module rendering a scan result to the console.
pub mod report;

/// Module containing utility functions such as comment stripping.
pub mod utils;
