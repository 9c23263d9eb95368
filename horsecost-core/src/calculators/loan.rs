//! Owning a horse outright versus taking one on loan.
//!
//! Ownership is the annual running-cost table with the purchase price as a
//! one-off; loaning is a monthly fee to the owner plus the arrangement's
//! share of the same running costs. Livery is the only regionalised line.
//! The break-even figure asks how many years the purchase price takes to
//! pay for itself against the per-year saving of owning, and reports
//! "not applicable" when there is no saving to recoup against.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::engine::{BreakEven, CostBreakdown, break_even_years, round_half_up};
use crate::models::Region;
use crate::pricing::loan::{LoanArrangement, ownership_costs};

/// Errors that can occur before the loan arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoanError {
    #[error("purchase price cannot be negative, got {0}")]
    NegativePurchasePrice(Decimal),
}

/// User selections for one own-versus-loan estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    pub arrangement: LoanArrangement,
    /// What the horse would cost to buy; zero is allowed (companion
    /// schemes rehome for free).
    pub purchase_price: Decimal,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub ownership: CostBreakdown,
    pub loaning: CostBreakdown,
    pub ownership_annual: Decimal,
    pub loaning_annual: Decimal,
    /// Positive when owning costs more per month than loaning.
    pub monthly_difference: Decimal,
    pub break_even: BreakEven,
}

#[derive(Debug, Clone, Default)]
pub struct LoanCalculator;

impl LoanCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Costs both strategies for a year and compares them.
    ///
    /// # Errors
    ///
    /// Returns [`LoanError::NegativePurchasePrice`] when the purchase
    /// price is negative.
    pub fn calculate(
        &self,
        input: &LoanInput,
    ) -> Result<LoanResult, LoanError> {
        if input.purchase_price < Decimal::ZERO {
            return Err(LoanError::NegativePurchasePrice(input.purchase_price));
        }
        if input.purchase_price > Decimal::from(50_000) {
            warn!(
                purchase_price = %input.purchase_price,
                "purchase price beyond the leisure market this table models"
            );
        }

        let ownership = self.ownership_breakdown(input.region);
        let ownership_annual = ownership.total();
        let loaning = self.loaning_breakdown(input.arrangement, ownership_annual);
        let loaning_annual = loaning.total();

        let monthly_difference =
            round_half_up((ownership_annual - loaning_annual) / Decimal::from(12));
        let break_even = break_even_years(input.purchase_price, ownership_annual, loaning_annual);

        Ok(LoanResult {
            ownership,
            loaning,
            ownership_annual,
            loaning_annual,
            monthly_difference,
            break_even,
        })
    }

    /// Annual running costs of outright ownership.
    fn ownership_breakdown(
        &self,
        region: Region,
    ) -> CostBreakdown {
        let costs = ownership_costs();
        let mut breakdown = CostBreakdown::new();

        breakdown.push_scaled("Livery", costs.livery, &[region.factor()], Decimal::ONE);
        breakdown.push("Farrier", costs.farrier);
        breakdown.push("Insurance", costs.insurance);
        breakdown.push("Routine vet", costs.routine_vet);
        breakdown.push("Feed and bedding", costs.feed_and_bedding);

        breakdown
    }

    /// Annual cost of the loan arrangement: the fee plus its share of the
    /// owner's running costs at the same region.
    fn loaning_breakdown(
        &self,
        arrangement: LoanArrangement,
        ownership_annual: Decimal,
    ) -> CostBreakdown {
        let profile = arrangement.profile();
        let mut breakdown = CostBreakdown::new();

        if profile.monthly_fee > Decimal::ZERO {
            breakdown.push_scaled("Loan fee", profile.monthly_fee, &[], Decimal::from(12));
        }
        breakdown.push_scaled(
            "Shared running costs",
            ownership_annual,
            &[profile.running_cost_share],
            Decimal::ONE,
        );

        breakdown
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_input() -> LoanInput {
        LoanInput {
            arrangement: LoanArrangement::Part,
            purchase_price: dec!(6000.00),
            region: Region::Average,
        }
    }

    // =========================================================================
    // validation
    // =========================================================================

    #[test]
    fn rejects_negative_purchase_price() {
        let result = LoanCalculator::new().calculate(&LoanInput {
            purchase_price: dec!(-1),
            ..test_input()
        });

        assert_eq!(result, Err(LoanError::NegativePurchasePrice(dec!(-1))));
    }

    // =========================================================================
    // ownership side
    // =========================================================================

    #[test]
    fn ownership_running_costs_at_the_baseline_region() {
        let result = LoanCalculator::new().calculate(&test_input()).unwrap();

        // 2080 + 320 + 420 + 280 + 780
        assert_eq!(result.ownership_annual, dec!(3880.00));
        assert_eq!(result.ownership.lines().len(), 5);
    }

    #[test]
    fn only_livery_regionalises() {
        let result = LoanCalculator::new()
            .calculate(&LoanInput {
                region: Region::London,
                ..test_input()
            })
            .unwrap();

        // Livery 2080 × 1.30 = 2704; the other four lines are unchanged.
        assert_eq!(result.ownership.lines()[0].amount, dec!(2704.00));
        assert_eq!(result.ownership_annual, dec!(4504.00));
    }

    // =========================================================================
    // loaning side
    // =========================================================================

    #[test]
    fn part_loan_pays_fee_plus_half_the_running_costs() {
        let result = LoanCalculator::new().calculate(&test_input()).unwrap();

        // 140 × 12 + 0.5 × 3880
        assert_eq!(result.loaning.lines()[0].amount, dec!(1680.00));
        assert_eq!(result.loaning.lines()[1].amount, dec!(1940.00));
        assert_eq!(result.loaning_annual, dec!(3620.00));
    }

    #[test]
    fn full_loan_carries_the_whole_running_cost_and_no_fee() {
        let result = LoanCalculator::new()
            .calculate(&LoanInput {
                arrangement: LoanArrangement::Full,
                ..test_input()
            })
            .unwrap();

        assert_eq!(result.loaning.lines().len(), 1);
        assert_eq!(result.loaning_annual, dec!(3880.00));
    }

    #[test]
    fn share_is_the_cheapest_arrangement() {
        let result = LoanCalculator::new()
            .calculate(&LoanInput {
                arrangement: LoanArrangement::Share,
                ..test_input()
            })
            .unwrap();

        // 90 × 12 + 0.25 × 3880
        assert_eq!(result.loaning_annual, dec!(2050.00));
    }

    // =========================================================================
    // comparison
    // =========================================================================

    #[test]
    fn equal_annual_costs_make_break_even_not_applicable() {
        // A full loan matches ownership's running costs exactly.
        let result = LoanCalculator::new()
            .calculate(&LoanInput {
                arrangement: LoanArrangement::Full,
                ..test_input()
            })
            .unwrap();

        assert_eq!(result.break_even, BreakEven::NotApplicable);
        assert_eq!(result.monthly_difference, dec!(0.00));
    }

    #[test]
    fn cheaper_loan_means_the_purchase_never_pays_off() {
        let result = LoanCalculator::new().calculate(&test_input()).unwrap();

        // Part loan saves £260/year over owning.
        assert_eq!(result.break_even, BreakEven::NotApplicable);
        assert_eq!(result.monthly_difference, dec!(21.67));
    }

    #[test]
    fn both_breakdowns_sum_to_their_reported_totals() {
        let result = LoanCalculator::new()
            .calculate(&LoanInput {
                region: Region::North,
                ..test_input()
            })
            .unwrap();

        let ownership: Decimal = result.ownership.lines().iter().map(|l| l.amount).sum();
        let loaning: Decimal = result.loaning.lines().iter().map(|l| l.amount).sum();
        assert_eq!(result.ownership_annual, ownership);
        assert_eq!(result.loaning_annual, loaning);
    }

    #[test]
    fn identical_input_gives_identical_results() {
        let calculator = LoanCalculator::new();
        let input = test_input();

        assert_eq!(
            calculator.calculate(&input).unwrap(),
            calculator.calculate(&input).unwrap()
        );
    }
}
