//! Claim form state.
//!
//! The form owns a [`ClaimDraft`] plus everything that only matters while
//! the modal is open: field focus, the staging buffer for document names,
//! and the missing-field errors from the last rejected submit.

use coverdeck_core::{ClaimDraft, ClaimField, DocumentRef, OwnedPolicy};

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Policy selector, cycled with Left/Right
    #[default]
    Policy,
    /// Incident date, digits and dashes
    IncidentDate,
    /// Claim amount, digits and a dot
    Amount,
    /// Free-text description, Enter inserts a newline
    Description,
    /// Document name staging input, Enter attaches
    Documents,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Policy,
        FormField::IncidentDate,
        FormField::Amount,
        FormField::Description,
        FormField::Documents,
    ];

    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Policy => "Select Policy",
            FormField::IncidentDate => "Incident Date",
            FormField::Amount => "Claim Amount (₹)",
            FormField::Description => "Description",
            FormField::Documents => "Upload Documents",
        }
    }

    /// The draft field this form field feeds, if it is a required one.
    pub fn claim_field(&self) -> Option<ClaimField> {
        match self {
            FormField::Policy => Some(ClaimField::Policy),
            FormField::IncidentDate => Some(ClaimField::IncidentDate),
            FormField::Amount => Some(ClaimField::Amount),
            FormField::Description => Some(ClaimField::Description),
            FormField::Documents => None,
        }
    }
}

/// State of the claim modal while it is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimForm {
    pub draft: ClaimDraft,
    pub focus: FormField,
    /// Document names typed but not yet attached.
    pub document_input: String,
    /// Fields the last submit attempt reported missing.
    pub errors: Vec<ClaimField>,
}

impl ClaimForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        let idx = FormField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = FormField::ALL[(idx + 1) % FormField::ALL.len()];
    }

    /// Move focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        let idx = FormField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = FormField::ALL[(idx + FormField::ALL.len() - 1) % FormField::ALL.len()];
    }

    /// Cycle the policy selector forward. The unselected state sits
    /// between the last and first entries.
    pub fn policy_next(&mut self, owned: &[OwnedPolicy]) {
        if owned.is_empty() {
            return;
        }
        let current = self.selected_position(owned);
        self.draft.policy_id = match current {
            None => Some(owned[0].id),
            Some(i) if i + 1 < owned.len() => Some(owned[i + 1].id),
            Some(_) => None,
        };
        self.clear_error(ClaimField::Policy);
    }

    /// Cycle the policy selector backward.
    pub fn policy_prev(&mut self, owned: &[OwnedPolicy]) {
        if owned.is_empty() {
            return;
        }
        let current = self.selected_position(owned);
        self.draft.policy_id = match current {
            None => Some(owned[owned.len() - 1].id),
            Some(0) => None,
            Some(i) => Some(owned[i - 1].id),
        };
        self.clear_error(ClaimField::Policy);
    }

    /// Display text for the policy selector.
    pub fn policy_label(&self, owned: &[OwnedPolicy]) -> String {
        let selected = self
            .draft
            .policy_id
            .and_then(|id| owned.iter().find(|p| p.id == id));
        match selected {
            Some(p) => format!("{} - {}", p.name, p.policy_number),
            None => "Choose a policy".to_string(),
        }
    }

    /// Type a character into the focused field. Date and amount inputs
    /// filter to their own alphabets; the policy selector ignores typing.
    pub fn insert_char(&mut self, c: char) {
        let accepted = match self.focus {
            FormField::Policy => false,
            FormField::IncidentDate => c.is_ascii_digit() || c == '-',
            FormField::Amount => c.is_ascii_digit() || c == '.',
            FormField::Description | FormField::Documents => true,
        };
        if !accepted {
            return;
        }

        let edited = self.focus.claim_field();
        if let Some(buffer) = self.active_buffer() {
            buffer.push(c);
        }
        if let Some(field) = edited {
            self.clear_error(field);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let edited = self.focus.claim_field();
        if let Some(buffer) = self.active_buffer() {
            buffer.pop();
        }
        if let Some(field) = edited {
            self.clear_error(field);
        }
    }

    /// Attach the staged document names to the draft, in typed order.
    /// Names are whitespace-separated; attaching never replaces or
    /// deduplicates earlier attachments.
    pub fn attach_pending(&mut self) {
        let docs: Vec<DocumentRef> = self
            .document_input
            .split_whitespace()
            .map(DocumentRef::new)
            .collect();
        if docs.is_empty() {
            return;
        }
        self.draft.attach_documents(docs);
        self.document_input.clear();
    }

    pub fn set_errors(&mut self, missing: Vec<ClaimField>) {
        self.errors = missing;
    }

    pub fn has_error(&self, field: ClaimField) -> bool {
        self.errors.contains(&field)
    }

    /// Reset the whole form to its initial empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn selected_position(&self, owned: &[OwnedPolicy]) -> Option<usize> {
        self.draft
            .policy_id
            .and_then(|id| owned.iter().position(|p| p.id == id))
    }

    fn active_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Policy => None,
            FormField::IncidentDate => Some(&mut self.draft.incident_date),
            FormField::Amount => Some(&mut self.draft.amount),
            FormField::Description => Some(&mut self.draft.description),
            FormField::Documents => Some(&mut self.document_input),
        }
    }

    fn clear_error(&mut self, field: ClaimField) {
        self.errors.retain(|f| *f != field);
    }
}
