//! Policy data access.
//!
//! The dashboard reads policies through [`PolicyDirectory`] so the UI
//! never cares where records come from. [`FixtureDirectory`] is the
//! shipping implementation: a built-in dataset, optionally replaced by
//! a JSON file with the same shape.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::policy::{AvailablePolicy, OwnedPolicy, PolicyKind, PolicyStatus};

/// Read-side interface for policy records.
pub trait PolicyDirectory {
    /// Human-readable origin of the records, for logs and status lines.
    fn name(&self) -> &str;

    /// Policies the current user holds.
    fn owned_policies(&self) -> Result<Vec<OwnedPolicy>>;

    /// Products open for purchase.
    fn available_policies(&self) -> Result<Vec<AvailablePolicy>>;
}

/// On-disk shape of a fixture file. Field names match the serialized
/// policy records, so a dumped dataset loads back unchanged.
#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    owned: Vec<OwnedPolicy>,
    #[serde(default)]
    available: Vec<AvailablePolicy>,
}

/// Directory backed by in-memory records.
#[derive(Debug)]
pub struct FixtureDirectory {
    label: String,
    owned: Vec<OwnedPolicy>,
    available: Vec<AvailablePolicy>,
}

impl FixtureDirectory {
    /// The built-in demo dataset.
    pub fn builtin() -> Self {
        Self {
            label: "built-in fixtures".to_string(),
            owned: builtin_owned(),
            available: builtin_available(),
        }
    }

    /// Load records from a JSON fixture file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CoreError::path_not_found(path));
        }

        let raw = fs::read_to_string(path)?;
        let file: FixtureFile = serde_json::from_str(&raw)
            .map_err(|e| CoreError::json(format!("fixture file {}", path.display()), e))?;

        let mut seen = HashSet::new();
        for id in file
            .owned
            .iter()
            .map(|p| p.id)
            .chain(file.available.iter().map(|p| p.id))
        {
            if !seen.insert(id) {
                return Err(CoreError::invalid_fixture(
                    path,
                    format!("duplicate policy id {id}"),
                ));
            }
        }

        debug!(
            path = %path.display(),
            owned = file.owned.len(),
            available = file.available.len(),
            "loaded policy fixtures"
        );

        Ok(Self {
            label: path.display().to_string(),
            owned: file.owned,
            available: file.available,
        })
    }
}

impl PolicyDirectory for FixtureDirectory {
    fn name(&self) -> &str {
        &self.label
    }

    fn owned_policies(&self) -> Result<Vec<OwnedPolicy>> {
        Ok(self.owned.clone())
    }

    fn available_policies(&self) -> Result<Vec<AvailablePolicy>> {
        Ok(self.available.clone())
    }
}

fn builtin_owned() -> Vec<OwnedPolicy> {
    vec![
        OwnedPolicy {
            id: 1,
            kind: PolicyKind::Auto,
            name: "Motor Insurance".to_string(),
            policy_number: "MOT-IND-2024-001".to_string(),
            status: PolicyStatus::Active,
            premium: 15_000,
            coverage: 750_000,
            start_date: "2024-01-15".to_string(),
            end_date: "2025-01-15".to_string(),
            next_payment: "2024-02-15".to_string(),
        },
        OwnedPolicy {
            id: 2,
            kind: PolicyKind::Home,
            name: "Home Insurance Standard".to_string(),
            policy_number: "HOME-IND-2024-002".to_string(),
            status: PolicyStatus::Active,
            premium: 18_000,
            coverage: 18_000_000,
            start_date: "2024-03-01".to_string(),
            end_date: "2025-03-01".to_string(),
            next_payment: "2024-03-01".to_string(),
        },
    ]
}

fn builtin_available() -> Vec<AvailablePolicy> {
    vec![
        AvailablePolicy {
            id: 3,
            kind: PolicyKind::from_label("Family Health Guard"),
            name: "Health Insurance Plus".to_string(),
            description:
                "Comprehensive health coverage for your entire family, including critical illness."
                    .to_string(),
            premium: 4_500,
            coverage: 100_000,
            features: vec![
                "Cashless Hospitalization".to_string(),
                "Critical Illness Cover".to_string(),
                "Pre/Post Hospitalization".to_string(),
            ],
        },
        AvailablePolicy {
            id: 4,
            kind: PolicyKind::Life,
            name: "Life Insurance Basic".to_string(),
            description: "Term life insurance for peace of mind".to_string(),
            premium: 850,
            coverage: 5_000_000,
            features: vec![
                "Accidental Death".to_string(),
                "Terminal Illness".to_string(),
                "24/7 Support".to_string(),
            ],
        },
        AvailablePolicy {
            id: 5,
            kind: PolicyKind::TwoWheeler,
            name: "Two-Wheeler Insurance Plus".to_string(),
            description: "Enhanced auto coverage with roadside assistance".to_string(),
            premium: 1_500,
            coverage: 75_000,
            features: vec![
                "Third-Party Liability".to_string(),
                "Own Damage Cover".to_string(),
                "Roadside Assistance".to_string(),
                "No Claim Bonus".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;
    use crate::policy::total_coverage;

    #[test]
    fn test_builtin_dataset_shape() {
        let dir = FixtureDirectory::builtin();
        let owned = dir.owned_policies().unwrap();
        let available = dir.available_policies().unwrap();

        assert_eq!(owned.len(), 2);
        assert_eq!(available.len(), 3);
        assert_eq!(dir.name(), "built-in fixtures");
    }

    #[test]
    fn test_builtin_owned_records() {
        let owned = FixtureDirectory::builtin().owned_policies().unwrap();

        assert_eq!(owned[0].policy_number, "MOT-IND-2024-001");
        assert_eq!(owned[0].kind, PolicyKind::Auto);
        assert_eq!(owned[0].status, PolicyStatus::Active);
        assert_eq!(owned[0].coverage, 750_000);
        assert_eq!(owned[1].name, "Home Insurance Standard");
        assert_eq!(owned[1].coverage, 18_000_000);
    }

    #[test]
    fn test_builtin_total_coverage() {
        let owned = FixtureDirectory::builtin().owned_policies().unwrap();
        assert_eq!(total_coverage(&owned), 18_750_000);
    }

    #[test]
    fn test_builtin_available_records() {
        let available = FixtureDirectory::builtin().available_policies().unwrap();

        assert_eq!(
            available[0].kind,
            PolicyKind::Other("Family Health Guard".to_string())
        );
        assert_eq!(available[1].premium, 850);
        assert_eq!(available[2].features.len(), 4);
        assert_eq!(available[2].features[3], "No Claim Bonus");
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
              "owned": [
                {{
                  "id": 10,
                  "type": "health",
                  "name": "Health Shield",
                  "policyNumber": "HLT-2026-010",
                  "status": "pending",
                  "premium": 6000,
                  "coverage": 500000,
                  "startDate": "2026-01-01",
                  "endDate": "2027-01-01",
                  "nextPayment": "2026-02-01"
                }}
              ],
              "available": []
            }}"#
        )
        .unwrap();

        let dir = FixtureDirectory::from_file(file.path()).unwrap();
        let owned = dir.owned_policies().unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].policy_number, "HLT-2026-010");
        assert_eq!(owned[0].kind, PolicyKind::Health);
        assert_eq!(owned[0].status, PolicyStatus::Pending);
        assert!(dir.available_policies().unwrap().is_empty());
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = FixtureDirectory::from_file("/nonexistent/policies.json").unwrap_err();
        assert!(matches!(err, CoreError::PathNotFound { .. }));
    }

    #[test]
    fn test_from_file_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = FixtureDirectory::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Json { .. }));
    }

    #[test]
    fn test_from_file_rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
              "owned": [],
              "available": [
                {{
                  "id": 7,
                  "type": "life",
                  "name": "A",
                  "description": "a",
                  "premium": 1,
                  "coverage": 1,
                  "features": []
                }},
                {{
                  "id": 7,
                  "type": "life",
                  "name": "B",
                  "description": "b",
                  "premium": 2,
                  "coverage": 2,
                  "features": []
                }}
              ]
            }}"#
        )
        .unwrap();

        let err = FixtureDirectory::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFixture { .. }));
    }
}
