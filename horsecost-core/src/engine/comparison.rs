use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Years until an upfront purchase pays for itself against the yearly
/// saving it unlocks.
///
/// `NotApplicable` covers the strategies-cost-the-same case and the case
/// where the purchase never pays off; neither is an error, and neither may
/// surface as an infinite or NaN figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakEven {
    Years(Decimal),
    NotApplicable,
}

impl BreakEven {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Years(_))
    }
}

/// Computes `upfront ÷ (annual_without_upfront − annual_with_upfront)`.
///
/// `annual_with_upfront` is the running cost of the strategy that carries
/// the one-off purchase (buying the horse, buying the clippers);
/// `annual_without_upfront` is the alternative. When the alternative is no
/// dearer per year there is nothing to recoup against and the result is
/// `NotApplicable`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use horsecost_core::engine::{BreakEven, break_even_years};
///
/// // £180 clipper kit, £42/year DIY running cost vs £180/year professional.
/// let years = break_even_years(dec!(180.00), dec!(42.00), dec!(180.00));
/// assert_eq!(years, BreakEven::Years(dec!(1.3)));
///
/// // Equal annual costs: nothing to recoup against.
/// let guard = break_even_years(dec!(6000.00), dec!(3880.00), dec!(3880.00));
/// assert_eq!(guard, BreakEven::NotApplicable);
/// ```
pub fn break_even_years(
    upfront: Decimal,
    annual_with_upfront: Decimal,
    annual_without_upfront: Decimal,
) -> BreakEven {
    let annual_saving = annual_without_upfront - annual_with_upfront;
    if annual_saving <= Decimal::ZERO {
        return BreakEven::NotApplicable;
    }

    let years = (upfront / annual_saving)
        .round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    BreakEven::Years(years)
}
