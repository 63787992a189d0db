//! Header and footer lines shared by the dashboard screens: the step
//! indicator on top and the keyboard shortcuts underneath.

use budget_core::{StepStatus, WizardPhase};
use cursive::align::HAlign;
use cursive::view::Resizable;
use cursive::views::{ResizedView, TextView};

/// Screens that carry a shortcut footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    SignUp,
    Step(WizardPhase),
}

impl Screen {
    /// `(key, action)` pairs in display order.
    fn shortcuts(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::SignIn => &[("Tab", "next field"), ("Enter", "sign in"), ("C-q", "quit")],
            Self::SignUp => &[("Tab", "next field"), ("S-Tab", "previous"), ("Enter", "create")],
            Self::Step(WizardPhase::Selection) => {
                &[("Tab", "next"), ("Space", "toggle"), ("C-q", "quit")]
            }
            Self::Step(WizardPhase::Input) => &[
                ("Tab", "next field"),
                ("S-Tab", "previous"),
                ("Esc", "back"),
                ("C-q", "quit"),
            ],
            Self::Step(WizardPhase::Results) => {
                &[("Esc", "edit inputs"), ("n", "new analysis"), ("C-q", "quit")]
            }
        }
    }
}

/// e.g. `<Esc> edit inputs   <n> new analysis   <C-q> quit`.
fn shortcut_line(screen: Screen) -> String {
    screen
        .shortcuts()
        .iter()
        .map(|(key, action)| format!("<{key}> {action}"))
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn footer(screen: Screen) -> ResizedView<TextView> {
    TextView::new(shortcut_line(screen)).full_width()
}

fn marker(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "[x]",
        StepStatus::Current => "[>]",
        StepStatus::Upcoming => "[ ]",
    }
}

/// Plain rendering, e.g. `[x] Select Options -- [>] Input Data -- [ ] View Results`.
fn progress_text(phase: WizardPhase) -> String {
    phase
        .progress()
        .into_iter()
        .map(|(step, status)| format!("{} {}", marker(status), step.label()))
        .collect::<Vec<_>>()
        .join(" -- ")
}

pub fn progress_header(phase: WizardPhase) -> TextView {
    TextView::new(progress_text(phase)).h_align(HAlign::Center)
}
