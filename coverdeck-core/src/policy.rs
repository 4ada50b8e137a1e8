//! Policy records and their closed label sets.
//!
//! Fixture data (and any future backend payload) carries `type` and
//! `status` as plain strings. Both parse into closed enums with an
//! `Other` catch-all so an unrecognized label renders with the fallback
//! presentation instead of failing.

use serde::{Deserialize, Serialize};

/// Semantic tone of a status badge. The UI maps tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Policy is in good standing (green)
    Positive,
    /// Policy is awaiting something (amber)
    Warning,
    /// Policy has lapsed (red)
    Critical,
    /// Anything unrecognized (gray)
    Neutral,
}

/// Lifecycle status of an owned policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PolicyStatus {
    Active,
    Pending,
    Expired,
    /// Any label outside the closed set, kept verbatim for display
    Other(String),
}

impl PolicyStatus {
    /// Parse a status label. Total: unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "active" => PolicyStatus::Active,
            "pending" => PolicyStatus::Pending,
            "expired" => PolicyStatus::Expired,
            other => PolicyStatus::Other(other.to_string()),
        }
    }

    /// Canonical lowercase label (the wire form)
    pub fn label(&self) -> &str {
        match self {
            PolicyStatus::Active => "active",
            PolicyStatus::Pending => "pending",
            PolicyStatus::Expired => "expired",
            PolicyStatus::Other(label) => label,
        }
    }

    /// Badge text: label with the first character uppercased
    pub fn display_label(&self) -> String {
        capitalize_first(self.label())
    }

    /// Badge tone. Total: `Other` falls through to `Neutral`.
    pub fn tone(&self) -> StatusTone {
        match self {
            PolicyStatus::Active => StatusTone::Positive,
            PolicyStatus::Pending => StatusTone::Warning,
            PolicyStatus::Expired => StatusTone::Critical,
            PolicyStatus::Other(_) => StatusTone::Neutral,
        }
    }
}

impl From<String> for PolicyStatus {
    fn from(label: String) -> Self {
        PolicyStatus::from_label(&label)
    }
}

impl From<PolicyStatus> for String {
    fn from(status: PolicyStatus) -> Self {
        status.label().to_string()
    }
}

/// Product line of a policy. Drives icon lookup only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PolicyKind {
    Auto,
    Home,
    Health,
    Life,
    TwoWheeler,
    /// Free-text label (the catalog uses marketing names here)
    Other(String),
}

impl PolicyKind {
    /// Parse a kind label. Total: unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "auto" => PolicyKind::Auto,
            "home" => PolicyKind::Home,
            "health" => PolicyKind::Health,
            "life" => PolicyKind::Life,
            "two-wheeler" => PolicyKind::TwoWheeler,
            other => PolicyKind::Other(other.to_string()),
        }
    }

    /// Canonical lowercase label (the wire form)
    pub fn label(&self) -> &str {
        match self {
            PolicyKind::Auto => "auto",
            PolicyKind::Home => "home",
            PolicyKind::Health => "health",
            PolicyKind::Life => "life",
            PolicyKind::TwoWheeler => "two-wheeler",
            PolicyKind::Other(label) => label,
        }
    }

    /// Card text: label with the first character uppercased
    pub fn display_label(&self) -> String {
        capitalize_first(self.label())
    }
}

impl From<String> for PolicyKind {
    fn from(label: String) -> Self {
        PolicyKind::from_label(&label)
    }
}

impl From<PolicyKind> for String {
    fn from(kind: PolicyKind) -> Self {
        kind.label().to_string()
    }
}

/// A policy the user already holds.
///
/// Immutable after load; `next_payment` is stored but not rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedPolicy {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: PolicyKind,
    pub name: String,
    pub policy_number: String,
    pub status: PolicyStatus,
    /// Annual premium, whole rupees
    pub premium: u64,
    /// Total insured amount, whole rupees
    pub coverage: u64,
    pub start_date: String,
    pub end_date: String,
    pub next_payment: String,
}

/// A purchasable policy from the marketplace catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePolicy {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: PolicyKind,
    pub name: String,
    pub description: String,
    /// Monthly premium, whole rupees
    pub premium: u64,
    pub coverage: u64,
    pub features: Vec<String>,
}

/// Sum of coverage across owned policies, in whole rupees. Saturates
/// instead of overflowing, so a fixture with absurd amounts still
/// renders.
pub fn total_coverage(policies: &[OwnedPolicy]) -> u64 {
    policies
        .iter()
        .map(|p| p.coverage)
        .fold(0, u64::saturating_add)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_closed_set() {
        assert_eq!(PolicyStatus::from_label("active"), PolicyStatus::Active);
        assert_eq!(PolicyStatus::from_label("pending"), PolicyStatus::Pending);
        assert_eq!(PolicyStatus::from_label("expired"), PolicyStatus::Expired);
    }

    #[test]
    fn test_status_parse_unknown_falls_through() {
        // Matching is exact, like the original lookup: "Active" is not "active"
        assert_eq!(
            PolicyStatus::from_label("Active"),
            PolicyStatus::Other("Active".to_string())
        );
        assert_eq!(
            PolicyStatus::from_label("suspended").tone(),
            StatusTone::Neutral
        );
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(PolicyStatus::Active.tone(), StatusTone::Positive);
        assert_eq!(PolicyStatus::Pending.tone(), StatusTone::Warning);
        assert_eq!(PolicyStatus::Expired.tone(), StatusTone::Critical);
    }

    #[test]
    fn test_status_display_label() {
        assert_eq!(PolicyStatus::Active.display_label(), "Active");
        assert_eq!(
            PolicyStatus::Other("suspended".to_string()).display_label(),
            "Suspended"
        );
    }

    #[test]
    fn test_kind_parse_closed_set() {
        assert_eq!(PolicyKind::from_label("auto"), PolicyKind::Auto);
        assert_eq!(PolicyKind::from_label("home"), PolicyKind::Home);
        assert_eq!(PolicyKind::from_label("health"), PolicyKind::Health);
        assert_eq!(PolicyKind::from_label("life"), PolicyKind::Life);
        assert_eq!(PolicyKind::from_label("two-wheeler"), PolicyKind::TwoWheeler);
    }

    #[test]
    fn test_kind_display_label() {
        assert_eq!(PolicyKind::TwoWheeler.display_label(), "Two-wheeler");
        // Catalog marketing names keep their own casing after the first char
        assert_eq!(
            PolicyKind::Other("Family Health Guard".to_string()).display_label(),
            "Family Health Guard"
        );
    }

    #[test]
    fn test_owned_policy_round_trips_camel_case() {
        let json = r#"{
            "id": 1,
            "type": "auto",
            "name": "Motor Insurance",
            "policyNumber": "MOT-IND-2024-001",
            "status": "active",
            "premium": 15000,
            "coverage": 750000,
            "startDate": "2024-01-15",
            "endDate": "2025-01-15",
            "nextPayment": "2024-02-15"
        }"#;

        let policy: OwnedPolicy = serde_json::from_str(json).unwrap();
        assert_eq!(policy.kind, PolicyKind::Auto);
        assert_eq!(policy.status, PolicyStatus::Active);
        assert_eq!(policy.policy_number, "MOT-IND-2024-001");

        let back = serde_json::to_value(&policy).unwrap();
        assert_eq!(back["policyNumber"], "MOT-IND-2024-001");
        assert_eq!(back["type"], "auto");
        assert_eq!(back["nextPayment"], "2024-02-15");
    }

    #[test]
    fn test_available_policy_keeps_free_text_kind() {
        let json = r#"{
            "id": 3,
            "type": "Family Health Guard",
            "name": "Health Insurance Plus",
            "description": "Comprehensive health coverage",
            "premium": 4500,
            "coverage": 100000,
            "features": ["Cashless Hospitalization"]
        }"#;

        let policy: AvailablePolicy = serde_json::from_str(json).unwrap();
        assert_eq!(
            policy.kind,
            PolicyKind::Other("Family Health Guard".to_string())
        );

        let back = serde_json::to_value(&policy).unwrap();
        assert_eq!(back["type"], "Family Health Guard");
    }

    #[test]
    fn test_total_coverage_sums() {
        let a = OwnedPolicy {
            id: 1,
            kind: PolicyKind::Auto,
            name: "A".to_string(),
            policy_number: "A-1".to_string(),
            status: PolicyStatus::Active,
            premium: 1,
            coverage: 750_000,
            start_date: "2024-01-15".to_string(),
            end_date: "2025-01-15".to_string(),
            next_payment: "2024-02-15".to_string(),
        };
        let mut b = a.clone();
        b.id = 2;
        b.coverage = 18_000_000;

        assert_eq!(total_coverage(&[a, b]), 18_750_000);
        assert_eq!(total_coverage(&[]), 0);
    }

    #[test]
    fn test_total_coverage_saturates_instead_of_overflowing() {
        let a = OwnedPolicy {
            id: 1,
            kind: PolicyKind::Auto,
            name: "A".to_string(),
            policy_number: "A-1".to_string(),
            status: PolicyStatus::Active,
            premium: 1,
            coverage: u64::MAX,
            start_date: "2024-01-15".to_string(),
            end_date: "2025-01-15".to_string(),
            next_payment: "2024-02-15".to_string(),
        };
        let mut b = a.clone();
        b.id = 2;
        b.coverage = 1;

        assert_eq!(total_coverage(&[a, b]), u64::MAX);
    }
}
