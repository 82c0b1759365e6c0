use std::time::Duration;

use crate::models::Suggestion;

/// Simulated round-trip latency of the remote classifier.
pub const SUGGESTION_DELAY: Duration = Duration::from_millis(500);

fn contains_any(description: &str, needles: &[&str]) -> bool {
    let desc = description.to_lowercase();
    needles.iter().any(|n| desc.contains(n))
}

/// The fixed rule set. First match wins; the rules are mutually exclusive
/// and case-insensitive on the description.
pub fn classify(description: &str, amount: f64) -> Suggestion {
    let (category, confidence) = if contains_any(description, &["aws", "amazon"]) {
        ("Hosting", 0.9)
    } else if contains_any(description, &["ads", "facebook"]) {
        ("Advertising", 0.8)
    } else if contains_any(description, &["salary", "payroll"]) {
        ("Payroll", 0.95)
    } else if amount < 0.0 {
        ("Income", 0.7)
    } else {
        ("Other", 0.5)
    };
    Suggestion {
        category: category.to_string(),
        confidence,
    }
}

/// Returns category suggestions for a transaction, highest confidence first.
///
/// The classification itself is a deterministic pure function, but the call
/// is exposed async with a fixed delay — it stands in for a remote service,
/// and callers are written against that contract. Always returns exactly one
/// suggestion under the current rule set.
pub async fn get_suggestions(description: &str, amount: f64) -> Vec<Suggestion> {
    tokio::time::sleep(SUGGESTION_DELAY).await;
    vec![classify(description, amount)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosting_rule() {
        let s = classify("AWS hosting bill", 42.0);
        assert_eq!(s.category, "Hosting");
        assert_eq!(s.confidence, 0.9);
        assert_eq!(classify("Amazon Web Services", 10.0).category, "Hosting");
    }

    #[test]
    fn test_advertising_rule() {
        assert_eq!(classify("Facebook campaign", 75.0).category, "Advertising");
        let s = classify("Google Ads spend", 75.0);
        assert_eq!(s.category, "Advertising");
        assert_eq!(s.confidence, 0.8);
    }

    #[test]
    fn test_payroll_rule() {
        let s = classify("Payroll run", -1000.0);
        assert_eq!(s.category, "Payroll");
        assert_eq!(s.confidence, 0.95);
        assert_eq!(classify("monthly SALARY", 500.0).category, "Payroll");
    }

    #[test]
    fn test_negative_amount_is_income() {
        let s = classify("Random vendor", -50.0);
        assert_eq!(s.category, "Income");
        assert_eq!(s.confidence, 0.7);
    }

    #[test]
    fn test_fallback_is_other() {
        let s = classify("Random vendor", 50.0);
        assert_eq!(s.category, "Other");
        assert_eq!(s.confidence, 0.5);
    }

    #[test]
    fn test_first_match_wins_over_amount_sign() {
        // A refund from AWS still classifies as Hosting, not Income.
        assert_eq!(classify("AWS refund", -12.0).category, "Hosting");
    }

    #[test]
    fn test_rules_are_case_insensitive() {
        assert_eq!(classify("aWs", 1.0).category, "Hosting");
        assert_eq!(classify("FACEBOOK ADS", 1.0).category, "Advertising");
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_call_returns_exactly_one_suggestion_after_delay() {
        let start = tokio::time::Instant::now();
        let suggestions = get_suggestions("AWS hosting bill", 42.0).await;
        assert!(start.elapsed() >= SUGGESTION_DELAY);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].category, "Hosting");
    }
}
