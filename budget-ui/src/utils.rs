use budget_core::calculations::{BreakdownValue, MetricValue};
use rust_decimal::{Decimal, RoundingStrategy};

/// Inserts `,` between groups of three digits in an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount as US dollars, e.g. `$1,234.56` or `-$1,234.56`.
///
/// Rounds half away from zero to cents. An amount that rounds to zero is
/// printed without a sign.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

pub fn format_days(days: Decimal) -> String {
    let sign = if days.is_sign_negative() && !days.is_zero() {
        "-"
    } else {
        ""
    };
    let whole = days.abs().normalize().to_string();
    format!("{sign}{} days", group_thousands(&whole))
}

/// Percentage with two places, e.g. `60.00%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", value)
}

pub fn format_metric(value: &MetricValue) -> String {
    match value {
        MetricValue::Currency(amount) => format_currency(*amount),
        MetricValue::Days(days) => format_days(*days),
    }
}

pub fn format_breakdown(value: &BreakdownValue) -> String {
    match value {
        BreakdownValue::Currency(amount) => format_currency(*amount),
        BreakdownValue::Headcount(count) => format!("{} employees", count.normalize()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
        assert_eq!(format_currency(dec!(1234567.8)), "$1,234,567.80");
        assert_eq!(format_currency(dec!(999)), "$999.00");
    }

    #[test]
    fn currency_puts_sign_before_symbol() {
        assert_eq!(format_currency(dec!(-150)), "-$150.00");
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(0.125)), "$0.13");
        assert_eq!(format_currency(dec!(-0.125)), "-$0.13");
    }

    #[test]
    fn currency_drops_sign_of_rounded_zero() {
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn days_are_whole_numbers() {
        assert_eq!(format_days(dec!(75)), "75 days");
        assert_eq!(format_days(dec!(1500.0)), "1,500 days");
        assert_eq!(format_days(dec!(-500)), "-500 days");
    }

    #[test]
    fn headcount_reads_as_employees() {
        assert_eq!(
            format_breakdown(&BreakdownValue::Headcount(dec!(8))),
            "8 employees"
        );
    }

    #[test]
    fn percent_has_two_places() {
        assert_eq!(format_percent(dec!(60)), "60.00%");
        assert_eq!(format_percent(dec!(33.33)), "33.33%");
    }
}
