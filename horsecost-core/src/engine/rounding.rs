use rust_decimal::Decimal;

/// Rounds a currency amount to two decimal places, half-up.
///
/// Midpoints round away from zero, the usual convention for displayed
/// prices.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use horsecost_core::engine::round_half_up;
///
/// assert_eq!(round_half_up(dec!(17.444)), dec!(17.44));
/// assert_eq!(round_half_up(dec!(17.445)), dec!(17.45));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
