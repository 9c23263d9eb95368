//! What a retired horse costs over the rest of its life.
//!
//! The first year is the care package (or the user's own known monthly
//! cost) plus the veteran premiums; later years compound at the inflation
//! rate. Livery regionalises; the override does not, because it is the
//! cost the user actually pays.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::engine::{CostBreakdown, Projection};
use crate::models::Region;
use crate::pricing::retirement::{CarePackage, veteran_premiums};

/// Errors that can occur before the retirement arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RetirementError {
    #[error("projection horizon must be at least 1 year, got {0}")]
    NoYears(u32),

    /// Rates are fractional: 0.04 is 4%. Anything at or past 1.0 is a
    /// mistyped percentage.
    #[error("inflation rate must be in [0, 1), got {0}")]
    InflationOutOfRange(Decimal),

    #[error("monthly cost override cannot be negative, got {0}")]
    NegativeOverride(Decimal),
}

/// User selections for one retirement projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementInput {
    pub package: CarePackage,
    pub region: Region,
    pub years: u32,
    pub inflation_rate: Decimal,
    /// Replaces the package's monthly cost when the user already knows
    /// what they pay.
    pub monthly_cost_override: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementResult {
    pub first_year: CostBreakdown,
    pub first_year_total: Decimal,
    pub monthly_average: Decimal,
    pub projection: Projection,
}

#[derive(Debug, Clone, Default)]
pub struct RetirementCalculator;

impl RetirementCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Builds the first-year breakdown and projects it over the horizon.
    ///
    /// # Errors
    ///
    /// Returns [`RetirementError`] for a zero horizon, an inflation rate
    /// outside [0, 1), or a negative cost override.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use horsecost_core::calculators::{RetirementCalculator, RetirementInput};
    /// use horsecost_core::pricing::retirement::CarePackage;
    /// use horsecost_core::Region;
    ///
    /// let input = RetirementInput {
    ///     package: CarePackage::GrassLivery,
    ///     region: Region::Average,
    ///     years: 3,
    ///     inflation_rate: dec!(0.04),
    ///     monthly_cost_override: None,
    /// };
    ///
    /// let result = RetirementCalculator::new().calculate(&input).unwrap();
    ///
    /// assert_eq!(result.first_year_total, dec!(2210.00));
    /// assert_eq!(result.projection.total, dec!(6898.74));
    /// ```
    pub fn calculate(
        &self,
        input: &RetirementInput,
    ) -> Result<RetirementResult, RetirementError> {
        if input.years == 0 {
            return Err(RetirementError::NoYears(input.years));
        }
        if input.inflation_rate < Decimal::ZERO || input.inflation_rate >= Decimal::ONE {
            return Err(RetirementError::InflationOutOfRange(input.inflation_rate));
        }
        if let Some(override_cost) = input.monthly_cost_override {
            if override_cost < Decimal::ZERO {
                return Err(RetirementError::NegativeOverride(override_cost));
            }
        }
        if input.years > 30 {
            warn!(
                years = input.years,
                "projection beyond 30 years; few horses retire for that long"
            );
        }

        let first_year = self.first_year_breakdown(input);
        let first_year_total = first_year.total();
        let monthly_average = first_year.monthly_average();
        let projection = Projection::compound(first_year_total, input.inflation_rate, input.years);

        Ok(RetirementResult {
            first_year,
            first_year_total,
            monthly_average,
            projection,
        })
    }

    fn first_year_breakdown(
        &self,
        input: &RetirementInput,
    ) -> CostBreakdown {
        let premiums = veteran_premiums();
        let months = Decimal::from(12);
        let mut breakdown = CostBreakdown::new();

        match input.monthly_cost_override {
            Some(monthly) => {
                breakdown.push_scaled("Custom care cost", monthly, &[], months);
            }
            None => {
                let profile = input.package.profile();
                breakdown.push_scaled(
                    profile.label,
                    profile.monthly_cost,
                    &[input.region.factor()],
                    months,
                );
            }
        }
        breakdown.push("Veteran vet care", premiums.vet);
        breakdown.push("Dentist", premiums.dentist);
        breakdown.push("Farrier trims", premiums.farrier_trims);

        breakdown
    }
}
