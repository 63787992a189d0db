//! Step 2: enter a value for every selected input.
//!
//! Every edit is recorded in the dashboard so the values survive a trip to
//! the results step and back. The status line shows the first field that
//! still blocks submission.

use cursive::Cursive;
use cursive::event::Key;
use cursive::view::{Nameable, Resizable, Scrollable};
use cursive::views::{Dialog, DummyView, EditView, LinearLayout, OnEventView, TextView};
use tracing::warn;

use budget_core::calculations::validate_fields;
use budget_core::{DashboardEvent, DashboardSnapshot, InputCategory, RawFormValues, display_label};

use super::chrome::{Screen, footer, progress_header};
use super::{dispatch, dispatch_or_report, on_back, replace_step, snapshot};

const FORM_STATUS: &str = "form_status";

fn field_view_name(id: &str) -> String {
    format!("field_{id}")
}

pub fn show_input_form(
    siv: &mut Cursive,
    snapshot: &DashboardSnapshot,
) {
    let mut form = LinearLayout::vertical();
    for id in snapshot.selection.inputs() {
        form.add_child(field_row(id, snapshot.form_values.get(id).unwrap_or_default()));
    }

    let layout = LinearLayout::vertical()
        .child(progress_header(snapshot.phase))
        .child(DummyView.fixed_height(1))
        .child(TextView::new(
            "Provide values for the categories you selected.",
        ))
        .child(DummyView.fixed_height(1))
        .child(form.scrollable())
        .child(DummyView.fixed_height(1))
        .child(TextView::new(status_text(snapshot)).with_name(FORM_STATUS))
        .child(DummyView.fixed_height(1))
        .child(footer(Screen::Step(snapshot.phase)));

    let dialog = Dialog::around(layout)
        .title("Input Data")
        .button("Back", on_back)
        .button("Calculate Results", on_calculate)
        .padding_lrtb(1, 1, 0, 0);

    siv.add_layer(OnEventView::new(dialog).on_event(Key::Esc, on_back));
}

fn field_row(
    id: &str,
    value: &str,
) -> LinearLayout {
    let category = InputCategory::parse(id);
    let prefix = category.and_then(|c| c.prefix()).unwrap_or(" ");
    let hint = category.map(|c| c.placeholder()).unwrap_or("Enter a value");

    let owned_id = id.to_string();
    let field = EditView::new()
        .content(value)
        .on_edit(move |s, text, _| on_field_edit(s, &owned_id, text))
        .on_submit(|s, _| on_calculate(s))
        .with_name(field_view_name(id))
        .fixed_width(16);

    LinearLayout::horizontal()
        .child(TextView::new(format!("{:28}{prefix} ", display_label(id))))
        .child(field)
        .child(TextView::new(format!("  {hint}")))
}

fn status_text(snapshot: &DashboardSnapshot) -> String {
    match validate_fields(&snapshot.selection, &snapshot.form_values) {
        Ok(()) => "All fields filled in. Ready to calculate.".to_string(),
        Err(err) => format!("Not ready: {err}"),
    }
}

fn refresh_status(siv: &mut Cursive) {
    let text = status_text(&snapshot(siv));
    siv.call_on_name(FORM_STATUS, |v: &mut TextView| v.set_content(text));
}

fn on_field_edit(
    siv: &mut Cursive,
    id: &str,
    text: &str,
) {
    let event = DashboardEvent::SetField {
        id: id.to_string(),
        value: text.to_string(),
    };
    if let Some(Err(err)) = dispatch(siv, event) {
        warn!(%err, field = id, "edit not recorded");
    }
    refresh_status(siv);
}

/// Reads every field on screen into a fresh set of form values.
fn collect_values(siv: &mut Cursive) -> RawFormValues {
    let ids = snapshot(siv).selection.inputs().to_vec();
    ids.into_iter()
        .filter_map(|id| {
            let name = field_view_name(&id);
            siv.call_on_name(&name, |v: &mut EditView| v.get_content().to_string())
                .map(|text| (id, text))
        })
        .collect()
}

fn on_calculate(siv: &mut Cursive) {
    let values = collect_values(siv);
    if dispatch_or_report(
        siv,
        DashboardEvent::SubmitFormValues(values),
        "Cannot Calculate",
    ) {
        replace_step(siv);
    } else {
        refresh_status(siv);
    }
}
