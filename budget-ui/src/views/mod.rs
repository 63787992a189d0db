//! Terminal views for the BudgetWise dashboard.
//!
//! - `login` - sign-in and account creation dialogs
//! - `selection` - step 1, choose input and output categories
//! - `input_form` - step 2, enter values for the selected inputs
//! - `results` - step 3, metrics, breakdown and advice
//!
//! Each wizard step is a single layer. After every transition the layer is
//! replaced with the one for the dashboard's current phase.

mod chrome;
mod input_form;
mod login;
mod results;
mod selection;

use std::fmt::Display;

use budget_core::{
    Dashboard, DashboardError, DashboardEvent, DashboardSnapshot, WizardPhase,
};
use cursive::Cursive;
use cursive::views::Dialog;
use tracing::{error, warn};

use crate::state::AppState;

pub use login::show_login;

/// Sends `event` to the dashboard held in the user data.
///
/// `None` when no [`AppState`] is installed; that is logged here and there
/// is nothing to refuse or report.
fn dispatch(
    siv: &mut Cursive,
    event: DashboardEvent,
) -> Option<Result<(), DashboardError>> {
    let result = siv.with_user_data(|state: &mut AppState| state.dispatch(event));
    if result.is_none() {
        error!("application state missing from user data");
    }
    result
}

/// Dispatches `event`, reporting a refusal in an error dialog.
///
/// Returns whether the event was applied.
fn dispatch_or_report(
    siv: &mut Cursive,
    event: DashboardEvent,
    title: &str,
) -> bool {
    match dispatch(siv, event) {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            warn!(%err, "{title}");
            show_error(siv, title, &err);
            false
        }
        None => false,
    }
}

fn snapshot(siv: &mut Cursive) -> DashboardSnapshot {
    siv.with_user_data(|state: &mut AppState| state.snapshot())
        .unwrap_or_else(|| Dashboard::new().snapshot())
}

fn show_error(
    siv: &mut Cursive,
    title: &str,
    message: &dyn Display,
) {
    siv.add_layer(
        Dialog::text(message.to_string())
            .title(title)
            .button("OK", |s| {
                s.pop_layer();
            }),
    );
}

/// Pushes the layer matching the current session and wizard phase.
fn show_current_step(siv: &mut Cursive) {
    let snapshot = snapshot(siv);
    if !snapshot.authenticated {
        show_login(siv);
        return;
    }

    match snapshot.phase {
        WizardPhase::Selection => selection::show_selection(siv, &snapshot),
        WizardPhase::Input => input_form::show_input_form(siv, &snapshot),
        WizardPhase::Results => results::show_results(siv, &snapshot),
    }
}

/// Replaces the current step layer after a transition.
fn replace_step(siv: &mut Cursive) {
    siv.pop_layer();
    show_current_step(siv);
}

/// Wizard "Back" shared by the input and results steps.
fn on_back(siv: &mut Cursive) {
    if dispatch_or_report(siv, DashboardEvent::GoBack, "Cannot go back") {
        replace_step(siv);
    }
}

/// Starts over from an empty selection.
fn on_reset(siv: &mut Cursive) {
    if dispatch_or_report(siv, DashboardEvent::Reset, "Cannot start over") {
        replace_step(siv);
    }
}

fn on_sign_out(siv: &mut Cursive) {
    if dispatch_or_report(siv, DashboardEvent::Logout, "Cannot sign out") {
        replace_step(siv);
    }
}

#[cfg(test)]
mod tests {
    use budget_core::Credentials;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dispatch_without_state_reports_nothing() {
        let mut siv = Cursive::new();
        let layers = siv.screen().len();

        assert!(dispatch(&mut siv, DashboardEvent::Reset).is_none());
        assert!(!dispatch_or_report(
            &mut siv,
            DashboardEvent::Logout,
            "Cannot sign out"
        ));
        assert_eq!(siv.screen().len(), layers);
    }

    #[test]
    fn refused_event_opens_an_error_dialog() {
        let mut siv = Cursive::new();
        siv.set_user_data(AppState::default());
        let layers = siv.screen().len();

        // Wizard events need a signed-in session.
        assert!(!dispatch_or_report(
            &mut siv,
            DashboardEvent::ContinueToInput,
            "Cannot continue"
        ));
        assert_eq!(siv.screen().len(), layers + 1);
    }

    #[test]
    fn applied_event_opens_nothing() {
        let mut siv = Cursive::new();
        siv.set_user_data(AppState::default());
        let layers = siv.screen().len();

        assert!(dispatch_or_report(
            &mut siv,
            DashboardEvent::Login(Credentials::new("demo", "demo")),
            "Cannot sign in"
        ));
        assert_eq!(siv.screen().len(), layers);
        assert!(snapshot(&mut siv).authenticated);
    }
}
