//! Rupee formatting: en-IN digit grouping and Lakh/Crore unit scaling.
//!
//! Scaling is done in integer arithmetic with round-half-up so the same
//! input always renders the same string (no float formatting drift).
//! 1 Lakh = 100,000 rupees; 1 Crore = 10,000,000 rupees.

use chrono::NaiveDate;

/// Group a rupee amount Indian-style: last three digits, then pairs.
///
/// 18_000_000 -> "1,80,00,000"
pub fn group_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Scale to Lakhs with one decimal, round half up. The rounding add
/// saturates, so `u64::MAX` formats instead of overflowing.
///
/// 750_000 -> "7.5"
pub fn format_lakhs(amount: u64) -> String {
    let tenths = amount.saturating_add(5_000) / 10_000;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Scale to Crore with exactly two decimals, round half up. The
/// rounding add saturates, like [`format_lakhs`].
///
/// 18_750_000 -> "1.88"
pub fn format_crore(amount: u64) -> String {
    let hundredths = amount.saturating_add(50_000) / 100_000;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Render an ISO "YYYY-MM-DD" date as "15 Jan 2025".
///
/// Unparseable input comes back verbatim; display must not fail on a
/// malformed fixture date.
pub fn format_display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}
