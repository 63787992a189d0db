//! Common helpers shared by the reduction, results and advice calculations.
//!
//! Amount parsing lives here so every consumer of raw form text agrees on what
//! counts as a number. Arithmetic helpers saturate instead of panicking, which
//! keeps the derivation total over every value the parser accepts.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::warn;

/// Digits allowed left of the decimal point; [`Decimal::MAX`] has 29.
const MAX_INTEGER_DIGITS: i64 = 29;

/// Fraction digits [`Decimal`] can hold. Anything finer is rounded away.
const MAX_SCALE: i64 = 28;

/// Why non-empty text is not an amount.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("not a number")]
    NotNumeric,

    #[error("outside the supported range")]
    OutOfRange,
}

/// Normalizes input for amount parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Sign, digits around the decimal point and exponent of a number literal.
struct Literal<'a> {
    negative: bool,
    int_digits: &'a str,
    frac_digits: &'a str,
    exponent: i64,
}

/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa
/// digit. Underscores, `NaN` and `inf` are not part of the grammar.
fn split_literal(text: &str) -> Option<Literal<'_>> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (rest, None),
    };
    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (int_digits.is_empty() && frac_digits.is_empty())
        || !all_digits(int_digits)
        || !all_digits(frac_digits)
    {
        return None;
    }

    let exponent = match exponent {
        None => 0,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
            // Only the magnitude matters past i64, so saturate.
            exp.parse::<i64>().unwrap_or(if exp.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            })
        }
    };

    Some(Literal {
        negative,
        int_digits,
        frac_digits,
        exponent,
    })
}

/// Rewrites a literal in plain positional notation so both notations go
/// through the same decimal parser. `None` means the value rounds to zero.
fn positional(literal: &Literal<'_>) -> Result<Option<String>, AmountError> {
    let digits = format!("{}{}", literal.int_digits, literal.frac_digits);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(None);
    }

    // Position of the decimal point relative to the first significant digit.
    let leading_zeros = (digits.len() - significant.len()) as i64;
    let point =
        (literal.int_digits.len() as i64 - leading_zeros).saturating_add(literal.exponent);

    if point > MAX_INTEGER_DIGITS {
        return Err(AmountError::OutOfRange);
    }
    if point < -(MAX_SCALE + 1) {
        return Ok(None);
    }

    let mut plain = String::with_capacity(significant.len() + 32);
    if literal.negative {
        plain.push('-');
    }
    if point <= 0 {
        plain.push_str("0.");
        plain.extend(std::iter::repeat_n('0', point.unsigned_abs() as usize));
        plain.push_str(significant);
    } else {
        let point = point as usize;
        if point >= significant.len() {
            plain.push_str(significant);
            plain.extend(std::iter::repeat_n('0', point - significant.len()));
        } else {
            plain.push_str(&significant[..point]);
            plain.push('.');
            plain.push_str(&significant[point..]);
        }
    }
    Ok(Some(plain))
}

/// Parses user-entered text as a decimal amount, reporting why it failed.
///
/// `Ok(None)` means the text is empty or whitespace-only. Scientific
/// notation is expanded before parsing, so `"1e-30"` and the same value
/// written out in full give the same result. Fractions finer than 28 places
/// are rounded by the decimal parser. Magnitudes beyond [`Decimal::MAX`]
/// are [`AmountError::OutOfRange`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::common::{AmountError, try_parse_amount};
///
/// assert_eq!(try_parse_amount("1,234.56"), Ok(Some(dec!(1234.56))));
/// assert_eq!(try_parse_amount("  "), Ok(None));
/// assert_eq!(try_parse_amount("1_000"), Err(AmountError::NotNumeric));
/// assert_eq!(try_parse_amount("1e29"), Err(AmountError::OutOfRange));
/// ```
pub fn try_parse_amount(s: &str) -> Result<Option<Decimal>, AmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }
    let literal = split_literal(&normalized).ok_or(AmountError::NotNumeric)?;
    match positional(&literal)? {
        None => Ok(Some(Decimal::ZERO)),
        // The grammar already holds, so a parser failure is an overflow.
        Some(plain) => Decimal::from_str(&plain)
            .map(Some)
            .map_err(|_| AmountError::OutOfRange),
    }
}

/// Parses user-entered text as a decimal amount.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and scientific
/// notation (e.g. `"1e3"`). Returns `None` for empty or whitespace-only input,
/// or when the text is not an amount (logs a warning in that case). See
/// [`try_parse_amount`] for the reason behind a `None`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::common::parse_amount;
///
/// assert_eq!(parse_amount("1,234.56"), Some(dec!(1234.56)));
/// assert_eq!(parse_amount(" 2.5e2 "), Some(dec!(250)));
/// assert_eq!(parse_amount(""), None);
/// assert_eq!(parse_amount("twelve"), None);
/// ```
pub fn parse_amount(s: &str) -> Option<Decimal> {
    try_parse_amount(s).unwrap_or_else(|e| {
        warn!(input = %s, "invalid amount: {}", e);
        None
    })
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Divides `numerator` by `divisor`, clamping to the representable range
/// when the quotient overflows.
///
/// `divisor` must be non-zero.
pub fn saturating_div(
    numerator: Decimal,
    divisor: Decimal,
) -> Decimal {
    numerator.checked_div(divisor).unwrap_or_else(|| {
        if numerator.is_sign_negative() != divisor.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}
