//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use coverdeck_core::{ClaimsIntake, PolicyDirectory, SubmitError};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

use crate::app::App;
use crate::event::{handle_key, poll_event, HandleResult};
use crate::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the dashboard until the user quits.
pub fn run(
    mut app: App,
    directory: &dyn PolicyDirectory,
    intake: &dyn ClaimsIntake,
    tick: Duration,
) -> Result<()> {
    let mut terminal = init_terminal()?;

    load_policies(&mut app, directory);

    let result = run_loop(&mut terminal, &mut app, directory, intake, tick);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop: draw, poll, dispatch.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    directory: &dyn PolicyDirectory,
    intake: &dyn ClaimsIntake,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(event) = poll_event(tick)? {
            match event {
                Event::Key(key) => match handle_key(app, key) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                    HandleResult::Refresh => refresh_policies(app, directory),
                    HandleResult::Submit => submit_claim(app, intake),
                },
                Event::Resize(_, _) => {
                    // Redrawn on the next loop pass
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Re-fetch both policy lists through the directory, reporting whether
/// both fetches succeeded. Load failures keep the lists the dashboard
/// already has.
pub fn load_policies(app: &mut App, directory: &dyn PolicyDirectory) -> bool {
    let loaded = directory.owned_policies().and_then(|owned| {
        directory
            .available_policies()
            .map(|available| (owned, available))
    });

    match loaded {
        Ok((owned, available)) => {
            debug!(
                source = directory.name(),
                owned = owned.len(),
                available = available.len(),
                "policies loaded"
            );
            app.owned = owned;
            app.available = available;
            if app.selected_card >= app.card_count() {
                app.selected_card = 0;
            }
            true
        }
        Err(err) => {
            warn!(error = %err, source = directory.name(), "failed to load policies");
            app.set_status(format!("Failed to load policies: {err}"));
            false
        }
    }
}

/// The `r` action: re-fetch, then report. Only a successful reload
/// claims success; a failed one keeps the failure message
/// [`load_policies`] set.
pub fn refresh_policies(app: &mut App, directory: &dyn PolicyDirectory) {
    if load_policies(app, directory) {
        app.set_status("Policies refreshed");
    }
}

/// Hand the current draft to the intake and fold the outcome back into
/// the app state.
pub fn submit_claim(app: &mut App, intake: &dyn ClaimsIntake) {
    match intake.submit(&app.form.draft) {
        Ok(receipt) => {
            app.finish_claim_form();
            app.set_status(format!("Claim submitted: {}", receipt.claim_id));
        }
        Err(SubmitError::Incomplete { missing }) => {
            app.form.set_errors(missing);
        }
        Err(err) => {
            warn!(error = %err, "claim submission failed");
            app.set_status(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use coverdeck_core::{
        AvailablePolicy, ClaimDraft, ClaimField, ClaimReceipt, CoreError, FixtureDirectory,
        InMemoryIntake, OwnedPolicy,
    };

    use crate::app::Mode;
    use crate::form::ClaimForm;

    use super::*;

    struct FailingDirectory;

    impl PolicyDirectory for FailingDirectory {
        fn name(&self) -> &str {
            "failing"
        }

        fn owned_policies(&self) -> coverdeck_core::Result<Vec<OwnedPolicy>> {
            Err(CoreError::path_not_found("/missing/policies.json"))
        }

        fn available_policies(&self) -> coverdeck_core::Result<Vec<AvailablePolicy>> {
            Err(CoreError::path_not_found("/missing/policies.json"))
        }
    }

    struct DownIntake;

    impl ClaimsIntake for DownIntake {
        fn submit(&self, _draft: &ClaimDraft) -> Result<ClaimReceipt, SubmitError> {
            Err(SubmitError::Unavailable {
                reason: "intake offline".to_string(),
            })
        }
    }

    fn app_with_fixtures() -> App {
        let mut app = App::new(None);
        load_policies(&mut app, &FixtureDirectory::builtin());
        app
    }

    fn fill_form(app: &mut App) {
        app.open_claim_form();
        app.form.draft.policy_id = Some(1);
        app.form.draft.incident_date = "2024-02-10".to_string();
        app.form.draft.amount = "12000".to_string();
        app.form.draft.description = "Rear bumper damage".to_string();
    }

    #[test]
    fn test_load_policies_from_fixtures() {
        let app = app_with_fixtures();
        assert_eq!(app.owned.len(), 2);
        assert_eq!(app.available.len(), 3);
    }

    #[test]
    fn test_load_policies_clamps_selection() {
        let mut app = app_with_fixtures();
        app.selected_card = 5;
        load_policies(&mut app, &FixtureDirectory::builtin());
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_load_policies_failure_keeps_existing_lists() {
        let mut app = app_with_fixtures();
        load_policies(&mut app, &FailingDirectory);

        assert_eq!(app.owned.len(), 2);
        assert_eq!(app.available.len(), 3);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Failed to load policies")));
    }

    #[test]
    fn test_refresh_reports_success_in_status_line() {
        let mut app = app_with_fixtures();
        refresh_policies(&mut app, &FixtureDirectory::builtin());
        assert_eq!(app.status_message.as_deref(), Some("Policies refreshed"));
    }

    #[test]
    fn test_refresh_failure_keeps_the_failure_message() {
        let mut app = app_with_fixtures();
        refresh_policies(&mut app, &FailingDirectory);

        let status = app.status_message.as_deref().unwrap();
        assert!(status.starts_with("Failed to load policies"));
        assert_eq!(app.owned.len(), 2);
    }

    #[test]
    fn test_submit_accepted_closes_and_resets() {
        let mut app = app_with_fixtures();
        fill_form(&mut app);
        let intake = InMemoryIntake::new();

        submit_claim(&mut app, &intake);

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.form, ClaimForm::default());
        assert_eq!(intake.accepted().len(), 1);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Claim submitted: ")));
    }

    #[test]
    fn test_submit_incomplete_keeps_modal_and_buffers() {
        let mut app = app_with_fixtures();
        app.open_claim_form();
        app.form.draft.amount = "500".to_string();
        let intake = InMemoryIntake::new();

        submit_claim(&mut app, &intake);

        assert_eq!(app.mode, Mode::ClaimForm);
        assert_eq!(app.form.draft.amount, "500");
        assert_eq!(
            app.form.errors,
            vec![
                ClaimField::Policy,
                ClaimField::IncidentDate,
                ClaimField::Description,
            ]
        );
        assert!(intake.accepted().is_empty());
    }

    #[test]
    fn test_submit_unavailable_reports_in_status_line() {
        let mut app = app_with_fixtures();
        fill_form(&mut app);

        submit_claim(&mut app, &DownIntake);

        assert_eq!(app.mode, Mode::ClaimForm);
        assert_eq!(app.form.draft.amount, "12000");
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("intake offline")));
    }
}
