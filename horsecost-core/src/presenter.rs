//! Display formatting and qualitative recommendations.
//!
//! Currency renders at two decimal places with thousands separators;
//! ratios that came back "not applicable" render as an em-dash rather
//! than a number. Recommendations are simple threshold comparisons over
//! figures the calculators already produced.

use rust_decimal::Decimal;

use crate::engine::{BreakEven, round_half_up};

/// Formats a currency amount as pounds: `£1,234.56`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use horsecost_core::presenter::format_gbp;
///
/// assert_eq!(format_gbp(dec!(180)), "£180.00");
/// assert_eq!(format_gbp(dec!(1234.5)), "£1,234.50");
/// ```
pub fn format_gbp(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), format!("{frac_part:0<2}")),
        None => (digits.clone(), "00".to_string()),
    };

    format!("{sign}£{}.{frac_part}", group_thousands(&int_part))
}

/// Formats an optional amount, rendering `None` as an em-dash.
pub fn format_optional_gbp(amount: Option<Decimal>) -> String {
    amount.map(format_gbp).unwrap_or_else(|| "—".to_string())
}

/// Formats a break-even period: `1.3 years` or an em-dash.
pub fn format_break_even(break_even: &BreakEven) -> String {
    match break_even {
        BreakEven::Years(years) => format!("{years} years"),
        BreakEven::NotApplicable => "—".to_string(),
    }
}

/// Inserts comma separators into a plain digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Advice on clipping strategy.
///
/// DIY is recommended once professional clipping costs more than one and
/// a half times the DIY running cost; below that the professional's
/// premium is treated as buying convenience.
pub fn clipping_recommendation(
    professional_annual: Decimal,
    diy_annual: Decimal,
) -> &'static str {
    let threshold = diy_annual * Decimal::new(15, 1);
    if professional_annual > threshold {
        "Clipping yourself would cost well under half as much per year; a clipper kit pays for itself quickly."
    } else if diy_annual >= professional_annual {
        "Doing it yourself saves nothing here; stay with the professional."
    } else {
        "The professional carries a modest premium; the convenience may well be worth it."
    }
}

/// Advice on owning versus loaning.
pub fn loan_recommendation(
    ownership_annual: Decimal,
    loaning_annual: Decimal,
    break_even: &BreakEven,
) -> &'static str {
    match break_even {
        BreakEven::Years(_) => {
            "Owning is cheaper year on year, so the purchase price pays for itself over time."
        }
        BreakEven::NotApplicable if loaning_annual < ownership_annual => {
            "Loaning is cheaper year on year and needs no upfront outlay."
        }
        BreakEven::NotApplicable => {
            "The two cost the same per year; the purchase price is the deciding factor."
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // currency formatting
    // =========================================================================

    #[test]
    fn formats_whole_pounds_with_two_decimals() {
        assert_eq!(format_gbp(dec!(180)), "£180.00");
    }

    #[test]
    fn pads_a_single_fraction_digit() {
        assert_eq!(format_gbp(dec!(1234.5)), "£1,234.50");
    }

    #[test]
    fn groups_thousands_and_millions() {
        assert_eq!(format_gbp(dec!(1234567.891)), "£1,234,567.89");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_gbp(dec!(0)), "£0.00");
    }

    #[test]
    fn rounds_before_formatting() {
        assert_eq!(format_gbp(dec!(13.666)), "£13.67");
    }

    #[test]
    fn three_digit_amounts_have_no_separator() {
        assert_eq!(format_gbp(dec!(999.99)), "£999.99");
    }

    #[test]
    fn optional_none_renders_as_a_dash() {
        assert_eq!(format_optional_gbp(None), "—");
        assert_eq!(format_optional_gbp(Some(dec!(2.18))), "£2.18");
    }

    #[test]
    fn break_even_renders_years_or_a_dash() {
        assert_eq!(format_break_even(&BreakEven::Years(dec!(1.3))), "1.3 years");
        assert_eq!(format_break_even(&BreakEven::NotApplicable), "—");
    }

    // =========================================================================
    // recommendations
    // =========================================================================

    #[test]
    fn recommends_diy_past_the_fifty_percent_premium() {
        let advice = clipping_recommendation(dec!(180.00), dec!(42.00));

        assert!(advice.contains("pays for itself"));
    }

    #[test]
    fn recommends_the_professional_when_diy_saves_nothing() {
        let advice = clipping_recommendation(dec!(180.00), dec!(200.00));

        assert!(advice.contains("stay with the professional"));
    }

    #[test]
    fn tolerates_a_modest_professional_premium() {
        // 120 vs 100: over the DIY cost but under the 1.5× threshold.
        let advice = clipping_recommendation(dec!(120.00), dec!(100.00));

        assert!(advice.contains("modest premium"));
    }

    #[test]
    fn loan_advice_follows_the_break_even() {
        let owning = loan_recommendation(
            dec!(3000.00),
            dec!(3500.00),
            &BreakEven::Years(dec!(4.0)),
        );
        let loaning =
            loan_recommendation(dec!(3880.00), dec!(3620.00), &BreakEven::NotApplicable);
        let equal = loan_recommendation(dec!(3880.00), dec!(3880.00), &BreakEven::NotApplicable);

        assert!(owning.contains("pays for itself"));
        assert!(loaning.contains("no upfront outlay"));
        assert!(equal.contains("cost the same"));
    }
}
