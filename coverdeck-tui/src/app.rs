//! Core application state and mode management

use coverdeck_core::{AvailablePolicy, OwnedPolicy};

use crate::form::ClaimForm;

/// Input mode for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing cards and tabs
    #[default]
    Browse,
    /// Claim modal is open and owns the keyboard
    ClaimForm,
}

/// Active tab in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    /// Policies the user holds
    #[default]
    Policies,
    /// Products open for purchase
    Marketplace,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current input mode
    pub mode: Mode,
    /// Active tab
    pub tab: DashboardTab,
    /// Name shown in the header greeting
    pub user_name: Option<String>,
    /// Policies the user holds
    pub owned: Vec<OwnedPolicy>,
    /// Marketplace catalog
    pub available: Vec<AvailablePolicy>,
    /// Selected card index in the active tab
    pub selected_card: usize,
    /// Claim form state (meaningful while mode is ClaimForm)
    pub form: ClaimForm,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance with empty policy lists.
    pub fn new(user_name: Option<String>) -> Self {
        Self {
            mode: Mode::Browse,
            tab: DashboardTab::Policies,
            user_name,
            owned: Vec::new(),
            available: Vec::new(),
            selected_card: 0,
            form: ClaimForm::new(),
            status_message: None,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a tab. Resets card selection; never touches the claim
    /// form.
    pub fn switch_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
        self.selected_card = 0;
    }

    /// Number of cards on the active tab.
    pub fn card_count(&self) -> usize {
        match self.tab {
            DashboardTab::Policies => self.owned.len(),
            DashboardTab::Marketplace => self.available.len(),
        }
    }

    /// Select next card in the active tab
    pub fn select_next(&mut self) {
        let count = self.card_count();
        if count > 0 {
            self.selected_card = (self.selected_card + 1) % count;
        }
    }

    /// Select previous card in the active tab
    pub fn select_prev(&mut self) {
        let count = self.card_count();
        if count > 0 {
            self.selected_card = self
                .selected_card
                .checked_sub(1)
                .unwrap_or(count.saturating_sub(1));
        }
    }

    /// Open the claim modal. The form is already empty: cancel and
    /// accepted submit both reset it on close.
    pub fn open_claim_form(&mut self) {
        self.mode = Mode::ClaimForm;
    }

    /// Close the claim modal, discarding the draft.
    pub fn cancel_claim_form(&mut self) {
        self.form.clear();
        self.mode = Mode::Browse;
    }

    /// Close the claim modal after an accepted submit.
    pub fn finish_claim_form(&mut self) {
        self.form.clear();
        self.mode = Mode::Browse;
    }
}
