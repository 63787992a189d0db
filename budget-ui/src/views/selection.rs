//! Step 1: choose the input and output categories.

use cursive::Cursive;
use cursive::view::{Nameable, Resizable, Scrollable};
use cursive::views::{Checkbox, Dialog, DummyView, LinearLayout, Panel, TextView};
use tracing::debug;

use budget_core::{DashboardEvent, DashboardSnapshot, InputCategory, OutputCategory};

use super::chrome::{Screen, footer, progress_header};
use super::{dispatch_or_report, on_sign_out, replace_step, snapshot};

const SELECTION_SUMMARY: &str = "selection_summary";

pub fn show_selection(
    siv: &mut Cursive,
    snapshot: &DashboardSnapshot,
) {
    let selection = &snapshot.selection;

    let mut inputs = LinearLayout::vertical();
    for category in InputCategory::all() {
        let id = category.id();
        inputs.add_child(category_row(
            category.name(),
            category.description(),
            selection.has_input(id),
            move |s, _| {
                dispatch_or_report(s, DashboardEvent::ToggleInput(id.to_string()), "Selection");
                refresh_summary(s);
            },
        ));
    }

    let mut outputs = LinearLayout::vertical();
    for category in OutputCategory::all() {
        let id = category.id();
        outputs.add_child(category_row(
            category.name(),
            category.description(),
            selection.has_output(id),
            move |s, _| {
                dispatch_or_report(s, DashboardEvent::ToggleOutput(id.to_string()), "Selection");
                refresh_summary(s);
            },
        ));
    }

    let columns = LinearLayout::horizontal()
        .child(Panel::new(inputs.scrollable()).title("Inputs").full_width())
        .child(Panel::new(outputs.scrollable()).title("Outputs").full_width());

    let layout = LinearLayout::vertical()
        .child(progress_header(snapshot.phase))
        .child(DummyView.fixed_height(1))
        .child(TextView::new(
            "Choose the data you'll provide and the insights you want.",
        ))
        .child(DummyView.fixed_height(1))
        .child(columns)
        .child(TextView::new(summary_text(snapshot)).with_name(SELECTION_SUMMARY))
        .child(DummyView.fixed_height(1))
        .child(footer(Screen::Step(snapshot.phase)));

    siv.add_layer(
        Dialog::around(layout)
            .title("Select Options")
            .button("Continue", on_continue)
            .button("Sign Out", on_sign_out)
            .padding_lrtb(1, 1, 0, 0)
            .full_screen(),
    );
}

fn category_row<F>(
    name: &str,
    description: &str,
    checked: bool,
    on_change: F,
) -> LinearLayout
where
    F: Fn(&mut Cursive, bool) + Send + Sync + 'static,
{
    LinearLayout::vertical()
        .child(
            LinearLayout::horizontal()
                .child(Checkbox::new().with_checked(checked).on_change(on_change))
                .child(TextView::new(format!(" {name}"))),
        )
        .child(TextView::new(format!("    {description}")))
}

fn summary_text(snapshot: &DashboardSnapshot) -> String {
    let inputs = snapshot.selection.inputs().len();
    let outputs = snapshot.selection.outputs().len();
    if snapshot.selection.is_complete() {
        format!("{inputs} input(s), {outputs} output(s) selected. Ready to continue.")
    } else {
        format!(
            "{inputs} input(s), {outputs} output(s) selected. \
             Pick at least one of each to continue."
        )
    }
}

fn refresh_summary(siv: &mut Cursive) {
    let text = summary_text(&snapshot(siv));
    siv.call_on_name(SELECTION_SUMMARY, |v: &mut TextView| v.set_content(text));
}

fn on_continue(siv: &mut Cursive) {
    if dispatch_or_report(siv, DashboardEvent::ContinueToInput, "Cannot Continue") {
        debug!("continuing to input step");
        replace_step(siv);
    }
}
