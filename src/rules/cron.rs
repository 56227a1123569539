use super::Rule;

lazy_static::lazy_static! {
    /// Scheduled trigger usage. Allowed on the free plan, but quota-limited.
    pub static ref CRON_RULES: Vec<Rule> = vec![
        Rule::new(
            r"\[\s*triggers\s*\]",
            "Cron triggers have limits on the free plan; ensure usage stays within free quotas.",
        )
        .unwrap(),
        Rule::new(r"crons\s*=", "Cron expressions detected; double-check free-tier limits.").unwrap(),
    ];
}

/// Scans the effective text for cron usage and returns one warning line per match.
pub fn scan_cron_usage(content: &str) -> Vec<String> {
    CRON_RULES
        .iter()
        .filter(|rule| rule.is_match(content))
        .map(|rule| format!("- {}", rule.message))
        .collect()
}
