//! Annual worming program cost.
//!
//! # Line items
//!
//! | Line | Computation |
//! |------|-------------|
//! | FEC testing | test fee × tests per year × horses × region |
//! | Routine wormers | dose price × doses per year × horses × weight factor × risk |
//! | Tapeworm treatment | treatment price × treatments per year × horses × weight factor × risk |
//! | Encysted redworm dose | dose price × horses × weight factor × risk |
//!
//! FEC testing is lab work and regionalises; doses are mail-order and do
//! not. Dose prices are quoted at 500 kg and scale linearly by
//! `weight ÷ 500`, so the default weight applies a factor of exactly 1.0.
//!
//! The comparison figure is the fixed mid-range baseline the published
//! tables use: the traditional interval program at reference weight,
//! medium risk, and the average region — only the horse count follows the
//! user's input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::engine::CostBreakdown;
use crate::models::{Region, RiskLevel};
use crate::pricing::worming::{
    WormingProgram, encysted_dose_price, fec_test_fee, reference_weight_kg,
    tapeworm_treatment_price, wormer_dose_price,
};

/// Errors that can occur before the worming arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WormingError {
    #[error("at least one horse is required, got {0}")]
    NoHorses(u32),

    #[error("average weight must be positive, got {0} kg")]
    NonPositiveWeight(Decimal),
}

/// User selections for one worming estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WormingInput {
    pub program: WormingProgram,
    pub horses: u32,
    pub average_weight_kg: Decimal,
    pub region: Region,
    pub risk: RiskLevel,
}

/// The selected program against the fixed traditional baseline.
///
/// A positive `annual_difference` means the selected program costs more
/// than the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WormingComparison {
    pub selected_annual: Decimal,
    pub traditional_annual: Decimal,
    pub annual_difference: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WormingResult {
    pub breakdown: CostBreakdown,
    pub annual_total: Decimal,
    pub monthly_average: Decimal,
    pub per_horse: Option<Decimal>,
    pub comparison: WormingComparison,
}

#[derive(Debug, Clone, Default)]
pub struct WormingCalculator;

impl WormingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculates the annual cost of the selected worming program.
    ///
    /// # Errors
    ///
    /// Returns [`WormingError`] when the horse count is zero or the
    /// average weight is not positive. Both are boundary failures; the
    /// caller should re-prompt rather than substitute a default.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use horsecost_core::calculators::{WormingCalculator, WormingInput};
    /// use horsecost_core::pricing::worming::WormingProgram;
    /// use horsecost_core::{Region, RiskLevel};
    ///
    /// let input = WormingInput {
    ///     program: WormingProgram::Targeted,
    ///     horses: 1,
    ///     average_weight_kg: dec!(500),
    ///     region: Region::Average,
    ///     risk: RiskLevel::Medium,
    /// };
    ///
    /// let result = WormingCalculator::new().calculate(&input).unwrap();
    ///
    /// // FEC testing alone: 4 × £28 = £112.00.
    /// assert_eq!(result.breakdown.lines()[0].amount, dec!(112.00));
    /// assert_eq!(result.annual_total, dec!(164.00));
    /// ```
    pub fn calculate(
        &self,
        input: &WormingInput,
    ) -> Result<WormingResult, WormingError> {
        if input.horses == 0 {
            return Err(WormingError::NoHorses(input.horses));
        }
        if input.average_weight_kg <= Decimal::ZERO {
            return Err(WormingError::NonPositiveWeight(input.average_weight_kg));
        }
        if input.average_weight_kg > Decimal::from(1000) {
            warn!(
                weight_kg = %input.average_weight_kg,
                "average weight above 1000 kg; heaviest draught breeds top out around there"
            );
        }

        let breakdown = self.annual_breakdown(
            input.program,
            input.horses,
            input.average_weight_kg,
            input.region,
            input.risk,
        );
        let annual_total = breakdown.total();
        let monthly_average = breakdown.monthly_average();
        let per_horse = breakdown.per_unit(Decimal::from(input.horses));
        let comparison = self.comparison(input, annual_total);

        Ok(WormingResult {
            breakdown,
            annual_total,
            monthly_average,
            per_horse,
            comparison,
        })
    }

    fn annual_breakdown(
        &self,
        program: WormingProgram,
        horses: u32,
        average_weight_kg: Decimal,
        region: Region,
        risk: RiskLevel,
    ) -> CostBreakdown {
        let profile = program.profile();
        let horses = Decimal::from(horses);
        let weight_factor = self.weight_factor(average_weight_kg);
        let mut breakdown = CostBreakdown::new();

        if profile.fec_tests_per_year > 0 {
            breakdown.push_scaled(
                "FEC testing",
                fec_test_fee(),
                &[region.factor()],
                Decimal::from(profile.fec_tests_per_year) * horses,
            );
        }
        if profile.wormer_doses_per_year > 0 {
            breakdown.push_scaled(
                "Routine wormers",
                wormer_dose_price(),
                &[weight_factor, risk.factor()],
                Decimal::from(profile.wormer_doses_per_year) * horses,
            );
        }
        if profile.tapeworm_treatments_per_year > 0 {
            breakdown.push_scaled(
                "Tapeworm treatment",
                tapeworm_treatment_price(),
                &[weight_factor, risk.factor()],
                Decimal::from(profile.tapeworm_treatments_per_year) * horses,
            );
        }
        if profile.encysted_doses_per_year > 0 {
            breakdown.push_scaled(
                "Encysted redworm dose",
                encysted_dose_price(),
                &[weight_factor, risk.factor()],
                Decimal::from(profile.encysted_doses_per_year) * horses,
            );
        }

        breakdown
    }

    /// Dose prices scale linearly against the 500 kg reference weight.
    fn weight_factor(
        &self,
        average_weight_kg: Decimal,
    ) -> Decimal {
        average_weight_kg / reference_weight_kg()
    }

    /// The fixed mid-range baseline: traditional program, reference
    /// weight, medium risk, average region, the user's horse count.
    fn comparison(
        &self,
        input: &WormingInput,
        selected_annual: Decimal,
    ) -> WormingComparison {
        let traditional_annual = self
            .annual_breakdown(
                WormingProgram::Traditional,
                input.horses,
                reference_weight_kg(),
                Region::Average,
                RiskLevel::Medium,
            )
            .total();

        WormingComparison {
            selected_annual,
            traditional_annual,
            annual_difference: selected_annual - traditional_annual,
        }
    }
}
