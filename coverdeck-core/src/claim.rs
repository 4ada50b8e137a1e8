//! Claim draft state.
//!
//! A draft accumulates user input until submission. Text fields hold raw
//! strings as typed; the draft itself does no parsing, only completeness
//! checks.

/// A file the user attached to a claim. Only the name travels with the
/// claim; content stays wherever the user keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub name: String,
}

impl DocumentRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Fields a claim needs before it can be submitted. Documents are
/// optional and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimField {
    Policy,
    IncidentDate,
    Amount,
    Description,
}

impl ClaimField {
    /// Label used when reporting the field as missing.
    pub fn label(&self) -> &'static str {
        match self {
            ClaimField::Policy => "Policy",
            ClaimField::IncidentDate => "Incident date",
            ClaimField::Amount => "Claim amount",
            ClaimField::Description => "Description",
        }
    }
}

/// In-progress claim, owned by the claim form while it is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimDraft {
    /// Id of the owned policy the claim is against, once one is chosen.
    pub policy_id: Option<u32>,
    pub incident_date: String,
    pub amount: String,
    pub description: String,
    pub documents: Vec<DocumentRef>,
}

impl ClaimDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append documents in the order given. Existing attachments keep
    /// their positions; attaching twice accumulates.
    pub fn attach_documents<I>(&mut self, docs: I)
    where
        I: IntoIterator<Item = DocumentRef>,
    {
        self.documents.extend(docs);
    }

    /// Required fields that are still blank, in form order. Whitespace-only
    /// text counts as blank.
    pub fn missing_fields(&self) -> Vec<ClaimField> {
        let mut missing = Vec::new();
        if self.policy_id.is_none() {
            missing.push(ClaimField::Policy);
        }
        if self.incident_date.trim().is_empty() {
            missing.push(ClaimField::IncidentDate);
        }
        if self.amount.trim().is_empty() {
            missing.push(ClaimField::Amount);
        }
        if self.description.trim().is_empty() {
            missing.push(ClaimField::Description);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Clear every field, documents included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ClaimDraft {
        ClaimDraft {
            policy_id: Some(1),
            incident_date: "2024-02-10".to_string(),
            amount: "12000".to_string(),
            description: "Rear bumper damage in parking lot".to_string(),
            documents: Vec::new(),
        }
    }

    #[test]
    fn test_empty_draft_missing_all_required_fields() {
        let draft = ClaimDraft::new();
        assert_eq!(
            draft.missing_fields(),
            vec![
                ClaimField::Policy,
                ClaimField::IncidentDate,
                ClaimField::Amount,
                ClaimField::Description,
            ]
        );
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_partial_draft_reports_remaining_fields() {
        let mut draft = ClaimDraft::new();
        draft.policy_id = Some(2);
        draft.amount = "4500".to_string();
        assert_eq!(
            draft.missing_fields(),
            vec![ClaimField::IncidentDate, ClaimField::Description]
        );
    }

    #[test]
    fn test_whitespace_only_text_counts_as_blank() {
        let mut draft = filled_draft();
        draft.description = "   ".to_string();
        assert_eq!(draft.missing_fields(), vec![ClaimField::Description]);
    }

    #[test]
    fn test_complete_draft_has_no_missing_fields() {
        let draft = filled_draft();
        assert!(draft.missing_fields().is_empty());
        assert!(draft.is_complete());
    }

    #[test]
    fn test_attach_documents_appends_in_order() {
        let mut draft = ClaimDraft::new();
        draft.attach_documents(vec![
            DocumentRef::new("photo-front.jpg"),
            DocumentRef::new("photo-rear.jpg"),
        ]);
        draft.attach_documents(vec![DocumentRef::new("police-report.pdf")]);

        let names: Vec<&str> = draft.documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["photo-front.jpg", "photo-rear.jpg", "police-report.pdf"]
        );
    }

    #[test]
    fn test_documents_do_not_affect_completeness() {
        let mut draft = filled_draft();
        assert!(draft.is_complete());
        draft.attach_documents(vec![DocumentRef::new("invoice.pdf")]);
        assert!(draft.is_complete());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = filled_draft();
        draft.attach_documents(vec![DocumentRef::new("invoice.pdf")]);
        draft.reset();
        assert_eq!(draft, ClaimDraft::default());
        assert!(draft.documents.is_empty());
    }
}
