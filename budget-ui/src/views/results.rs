//! Step 3: summary metrics, financial breakdown and advice.

use cursive::Cursive;
use cursive::event::Key;
use cursive::theme::{BaseColor, Color, Effect};
use cursive::utils::markup::StyledString;
use cursive::view::{Resizable, Scrollable};
use cursive::views::{Dialog, DummyView, LinearLayout, OnEventView, Panel, TextView};

use budget_core::DashboardSnapshot;
use budget_core::calculations::{
    AdviceTone, KEY_RECOMMENDATIONS, MetricTone, breakdown, summary_metrics,
};

use super::chrome::{Screen, footer, progress_header};
use super::{on_back, on_reset, on_sign_out};
use crate::utils::{format_breakdown, format_metric, format_percent};

fn metric_color(tone: MetricTone) -> Color {
    match tone {
        MetricTone::Positive => Color::Dark(BaseColor::Green),
        MetricTone::Negative => Color::Dark(BaseColor::Red),
        MetricTone::Caution => Color::Dark(BaseColor::Yellow),
        MetricTone::Neutral => Color::Dark(BaseColor::Blue),
    }
}

fn advice_color(tone: AdviceTone) -> Color {
    match tone {
        AdviceTone::Success => Color::Dark(BaseColor::Green),
        AdviceTone::Info => Color::Dark(BaseColor::Blue),
        AdviceTone::Warning => Color::Dark(BaseColor::Yellow),
    }
}

pub fn show_results(
    siv: &mut Cursive,
    snapshot: &DashboardSnapshot,
) {
    let body = match (&snapshot.derived_inputs, &snapshot.results) {
        (Some(inputs), Some(results)) => {
            let metrics = summary_metrics(&snapshot.selection, results);
            let mut summary = StyledString::new();
            if metrics.is_empty() {
                summary.append_plain("None of the selected outputs has a summary figure.");
            }
            for metric in metrics {
                summary.append_plain(format!("{:20}", metric.label));
                summary.append_styled(format_metric(&metric.value), metric_color(metric.tone));
                summary.append_plain("\n");
            }

            let mut table = String::new();
            for row in breakdown(inputs, results) {
                table.push_str(&format!("{:20}{:>16}\n", row.label, format_breakdown(&row.value)));
            }

            let mut advice_text = StyledString::new();
            if let Some(advice) = &snapshot.advice {
                advice_text.append_styled(advice.title, Effect::Bold);
                advice_text.append_plain(format!(
                    "  (margin {})\n",
                    format_percent(advice.profit_margin)
                ));
                advice_text.append_styled(advice.message, advice_color(advice.tone));
                advice_text.append_plain("\n\nKey Recommendations:\n");
                for line in KEY_RECOMMENDATIONS {
                    advice_text.append_plain(format!("  * {line}\n"));
                }
            }

            LinearLayout::vertical()
                .child(Panel::new(TextView::new(summary)).title("Summary"))
                .child(Panel::new(TextView::new(table)).title("Financial Breakdown"))
                .child(Panel::new(TextView::new(advice_text)).title("Financial Advice"))
        }
        // Results are always present on this step; keep the layer usable anyway.
        _ => LinearLayout::vertical().child(TextView::new("No results to display.")),
    };

    let layout = LinearLayout::vertical()
        .child(progress_header(snapshot.phase))
        .child(DummyView.fixed_height(1))
        .child(body.scrollable())
        .child(DummyView.fixed_height(1))
        .child(footer(Screen::Step(snapshot.phase)));

    let dialog = Dialog::around(layout)
        .title("Analysis Results")
        .button("Back to Input", on_back)
        .button("New Analysis", on_reset)
        .button("Sign Out", on_sign_out)
        .padding_lrtb(1, 1, 0, 0)
        .full_width();

    siv.add_layer(
        OnEventView::new(dialog)
            .on_event(Key::Esc, on_back)
            .on_event('n', on_reset),
    );
}
