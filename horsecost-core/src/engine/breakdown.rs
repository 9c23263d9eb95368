use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::rounding::round_half_up;

/// One named line of a cost breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    pub label: String,
    pub amount: Decimal,
}

/// An ordered list of named line items and the aggregates derived from it.
///
/// The reported total is always the sum of the line items: the only way to
/// change the total is to push a line, so the two cannot drift apart.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use horsecost_core::engine::CostBreakdown;
///
/// let mut breakdown = CostBreakdown::new();
/// breakdown.push("Callout fee", dec!(25.00));
/// breakdown.push_scaled("Mileage", dec!(1.20), &[dec!(1.5)], dec!(100));
///
/// assert_eq!(breakdown.total(), dec!(205.00));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    lines: Vec<CostLine>,
}

impl CostBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pre-computed line item, rounded to display precision.
    pub fn push(
        &mut self,
        label: impl Into<String>,
        amount: Decimal,
    ) {
        let label = label.into();
        let amount = round_half_up(amount);
        if amount < Decimal::ZERO {
            warn!(%label, %amount, "negative line item pushed into breakdown");
        }
        self.lines.push(CostLine { label, amount });
    }

    /// Appends a line item computed as `base × factor_1 × … × factor_n × quantity`.
    ///
    /// This is the multiplicative chain every calculator uses; factors that
    /// do not apply to the current branch are simply omitted rather than
    /// passed as 1.0.
    pub fn push_scaled(
        &mut self,
        label: impl Into<String>,
        base: Decimal,
        factors: &[Decimal],
        quantity: Decimal,
    ) {
        let mut amount = base * quantity;
        for factor in factors {
            amount *= *factor;
        }
        self.push(label, amount);
    }

    pub fn lines(&self) -> &[CostLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line items.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.amount).sum()
    }

    /// Total spread over twelve months.
    pub fn monthly_average(&self) -> Decimal {
        round_half_up(self.total() / Decimal::from(12))
    }

    /// Total per unit of the given quantity (per mile, per horse, per clip).
    ///
    /// Returns `None` for a zero quantity; the caller renders that as
    /// "not applicable" rather than dividing.
    pub fn per_unit(
        &self,
        quantity: Decimal,
    ) -> Option<Decimal> {
        if quantity.is_zero() {
            return None;
        }
        Some(round_half_up(self.total() / quantity))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_breakdown() -> CostBreakdown {
        let mut breakdown = CostBreakdown::new();
        breakdown.push("Livery", dec!(2080.00));
        breakdown.push("Farrier", dec!(320.00));
        breakdown.push("Insurance", dec!(420.00));
        breakdown
    }

    // =========================================================================
    // total / sum-to-total invariant
    // =========================================================================

    #[test]
    fn total_is_sum_of_line_items() {
        let breakdown = sample_breakdown();

        let by_hand: Decimal = breakdown.lines().iter().map(|l| l.amount).sum();

        assert_eq!(breakdown.total(), by_hand);
        assert_eq!(breakdown.total(), dec!(2820.00));
    }

    #[test]
    fn empty_breakdown_totals_zero() {
        let breakdown = CostBreakdown::new();

        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total(), Decimal::ZERO);
    }

    #[test]
    fn push_rounds_to_display_precision() {
        let mut breakdown = CostBreakdown::new();

        breakdown.push("Odd pennies", dec!(10.005));

        assert_eq!(breakdown.lines()[0].amount, dec!(10.01));
    }

    // =========================================================================
    // push_scaled
    // =========================================================================

    #[test]
    fn push_scaled_multiplies_base_factors_and_quantity() {
        let mut breakdown = CostBreakdown::new();

        // 60 × 1.15 × 1.30 × 3 = 269.10
        breakdown.push_scaled(
            "Professional clipping",
            dec!(60.00),
            &[dec!(1.15), dec!(1.30)],
            dec!(3),
        );

        assert_eq!(breakdown.total(), dec!(269.10));
    }

    #[test]
    fn push_scaled_with_no_factors_is_base_times_quantity() {
        let mut breakdown = CostBreakdown::new();

        breakdown.push_scaled("FEC testing", dec!(28.00), &[], dec!(4));

        assert_eq!(breakdown.total(), dec!(112.00));
    }

    #[test]
    fn push_scaled_with_baseline_factors_reproduces_base_cost() {
        let mut breakdown = CostBreakdown::new();

        breakdown.push_scaled("Clip", dec!(60.00), &[Decimal::ONE, Decimal::ONE], dec!(1));

        assert_eq!(breakdown.total(), dec!(60.00));
    }

    // =========================================================================
    // aggregates
    // =========================================================================

    #[test]
    fn monthly_average_is_total_over_twelve() {
        let breakdown = sample_breakdown();

        assert_eq!(breakdown.monthly_average(), dec!(235.00));
    }

    #[test]
    fn monthly_average_rounds_half_up() {
        let mut breakdown = CostBreakdown::new();
        breakdown.push("Worming", dec!(164.00));

        // 164 / 12 = 13.666…
        assert_eq!(breakdown.monthly_average(), dec!(13.67));
    }

    #[test]
    fn per_unit_divides_total_by_quantity() {
        let breakdown = sample_breakdown();

        assert_eq!(breakdown.per_unit(dec!(2)), Some(dec!(1410.00)));
    }

    #[test]
    fn per_unit_is_not_applicable_for_zero_quantity() {
        let breakdown = sample_breakdown();

        assert_eq!(breakdown.per_unit(Decimal::ZERO), None);
    }

    // =========================================================================
    // idempotence
    // =========================================================================

    #[test]
    fn aggregates_are_stable_across_repeated_calls() {
        let breakdown = sample_breakdown();

        assert_eq!(breakdown.total(), breakdown.total());
        assert_eq!(breakdown.monthly_average(), breakdown.monthly_average());
        assert_eq!(breakdown.per_unit(dec!(3)), breakdown.per_unit(dec!(3)));
    }
}
