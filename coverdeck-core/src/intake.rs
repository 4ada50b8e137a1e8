//! Claim submission.
//!
//! [`ClaimsIntake`] is the write-side counterpart of the policy
//! directory: the form hands a finished draft to it and gets back a
//! receipt or a structured rejection. [`InMemoryIntake`] accepts every
//! complete draft and keeps what it accepted, which is all a local
//! dashboard needs.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::claim::{ClaimDraft, ClaimField};

/// Proof that a claim was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub claim_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// Why a submission was refused. `Incomplete` keeps the field list so
/// the form can mark each one inline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("claim is missing required fields: {}", format_missing(.missing))]
    Incomplete { missing: Vec<ClaimField> },
    #[error("claims intake unavailable: {reason}")]
    Unavailable { reason: String },
}

fn format_missing(fields: &[ClaimField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Destination for finished claim drafts.
pub trait ClaimsIntake {
    fn submit(&self, draft: &ClaimDraft) -> Result<ClaimReceipt, SubmitError>;
}

/// A claim the in-memory intake accepted, receipt and draft together.
#[derive(Debug, Clone)]
pub struct SubmittedClaim {
    pub claim_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub draft: ClaimDraft,
}

/// Intake that stores accepted claims in memory.
#[derive(Default)]
pub struct InMemoryIntake {
    accepted: Mutex<Vec<SubmittedClaim>>,
}

impl InMemoryIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything accepted so far, oldest first.
    pub fn accepted(&self) -> Vec<SubmittedClaim> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SubmittedClaim>> {
        // A poisoned lock only means a panic elsewhere mid-push; the
        // Vec itself is still usable.
        self.accepted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ClaimsIntake for InMemoryIntake {
    fn submit(&self, draft: &ClaimDraft) -> Result<ClaimReceipt, SubmitError> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            warn!(missing = missing.len(), "rejected incomplete claim");
            return Err(SubmitError::Incomplete { missing });
        }

        let receipt = ClaimReceipt {
            claim_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        };
        info!(
            claim_id = %receipt.claim_id,
            policy_id = draft.policy_id,
            documents = draft.documents.len(),
            "claim accepted"
        );

        self.lock().push(SubmittedClaim {
            claim_id: receipt.claim_id,
            submitted_at: receipt.submitted_at,
            draft: draft.clone(),
        });
        Ok(receipt)
    }
}
