use super::Rule;

lazy_static::lazy_static! {
    /// Bindings that need a paid plan, in reporting order.
    pub static ref PAID_FEATURE_RULES: Vec<Rule> = vec![
        // Queue tables: [queues], [[queues]], [[queues.producers]], ...
        Rule::new(r"\[\[?\s*queues\b", "Cloudflare Queues are paid features.").unwrap(),

        // Workers AI as a table header or an inline table.
        Rule::new(
            r"\[\s*ai\s*\]|\bai\s*=\s*\{",
            "Workers AI is paid beyond free allowances; keep disabled.",
        )
        .unwrap(),

        Rule::new(r"vectorize", "Vectorize (vector DB) is a paid feature.").unwrap(),

        // durable_objects, durable-object, "Durable Objects", ...
        Rule::new(r"durable[_\s-]?objects?", "Durable Objects require a paid plan.").unwrap(),
    ];
}

/// Scans the effective text for paid features.
///
/// Returns one error line per matching rule, in declaration order.
pub fn scan_paid_features(content: &str) -> Vec<String> {
    PAID_FEATURE_RULES
        .iter()
        .filter(|rule| rule.is_match(content))
        .map(|rule| format!("- {} (pattern: {})", rule.message, rule.display_pattern()))
        .collect()
}
