//! Annual clipping cost, professional versus doing it yourself.
//!
//! # Line items
//!
//! | Line | Applies to | Computation |
//! |------|------------|-------------|
//! | Professional clipping | Professional | per-clip fee × region × temperament × clips |
//! | Sedation | either, difficult horse only | vet fee × clips |
//! | Blades and servicing | DIY | consumables × clips |
//!
//! The professional per-clip fee regionalises (it is a local service); the
//! sedation fee and DIY consumables are flat.
//!
//! Whichever strategy is being costed, the result also carries a
//! comparison of the two, and the comparison always prices the DIY side
//! with the **mid-tier** clipper kit — matching how the published figures
//! behave even when a different tier was selected for the DIY costing
//! itself.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use horsecost_core::calculators::{ClipMethod, ClippingCalculator, ClippingInput};
//! use horsecost_core::pricing::clipping::ClipStyle;
//! use horsecost_core::{Region, Temperament};
//!
//! let input = ClippingInput {
//!     style: ClipStyle::Hunter,
//!     clips_per_year: 3,
//!     method: ClipMethod::Professional,
//!     region: Region::Average,
//!     temperament: Temperament::Good,
//! };
//!
//! let result = ClippingCalculator::new().calculate(&input).unwrap();
//!
//! assert_eq!(result.annual_total, dec!(180.00));
//! assert_eq!(result.per_clip, Some(dec!(60.00)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::engine::{BreakEven, CostBreakdown, break_even_years};
use crate::models::{BudgetTier, Region, Temperament};
use crate::pricing::clipping::{ClipStyle, clipper_kit_price, consumables_per_clip, sedation_fee};

/// Errors that can occur before the clipping arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClippingError {
    /// At least one clip per year is required for an annual figure.
    #[error("clips per year must be at least 1, got {0}")]
    NoClips(u32),
}

/// Who does the clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipMethod {
    Professional,
    Diy { kit_tier: BudgetTier },
}

/// User selections for one clipping estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClippingInput {
    pub style: ClipStyle,
    pub clips_per_year: u32,
    pub method: ClipMethod,
    pub region: Region,
    pub temperament: Temperament,
}

/// Side-by-side annual figures for the two strategies.
///
/// `diy_kit_upfront` is always the mid-tier kit; the break-even period is
/// that kit price against the per-year saving of clipping yourself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClippingComparison {
    pub professional_annual: Decimal,
    pub diy_annual: Decimal,
    pub diy_kit_upfront: Decimal,
    pub break_even: BreakEven,
}

/// Annual clipping cost for the selected strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClippingResult {
    /// Annual running costs for the selected method.
    pub breakdown: CostBreakdown,
    pub annual_total: Decimal,
    pub monthly_average: Decimal,
    pub per_clip: Option<Decimal>,
    /// One-off kit purchase, present only when costing DIY.
    pub upfront_kit: Option<Decimal>,
    pub comparison: ClippingComparison,
}

#[derive(Debug, Clone, Default)]
pub struct ClippingCalculator;

impl ClippingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculates the annual cost of the selected strategy plus the
    /// professional-vs-DIY comparison.
    ///
    /// # Errors
    ///
    /// Returns [`ClippingError::NoClips`] when `clips_per_year` is zero;
    /// an annual figure for zero clips is meaningless and the caller is
    /// expected to prompt for a count instead.
    pub fn calculate(
        &self,
        input: &ClippingInput,
    ) -> Result<ClippingResult, ClippingError> {
        if input.clips_per_year == 0 {
            return Err(ClippingError::NoClips(input.clips_per_year));
        }
        if input.clips_per_year > 6 {
            warn!(
                clips_per_year = input.clips_per_year,
                "unusually high clip count; most horses are clipped 2-4 times a season"
            );
        }

        let (breakdown, upfront_kit) = match input.method {
            ClipMethod::Professional => (self.professional_breakdown(input), None),
            ClipMethod::Diy { kit_tier } => (
                self.diy_breakdown(input),
                Some(clipper_kit_price(kit_tier)),
            ),
        };

        let annual_total = breakdown.total();
        let monthly_average = breakdown.monthly_average();
        let per_clip = breakdown.per_unit(Decimal::from(input.clips_per_year));
        let comparison = self.comparison(input);

        Ok(ClippingResult {
            breakdown,
            annual_total,
            monthly_average,
            per_clip,
            upfront_kit,
            comparison,
        })
    }

    /// Annual line items when a professional does the work.
    fn professional_breakdown(
        &self,
        input: &ClippingInput,
    ) -> CostBreakdown {
        let clips = Decimal::from(input.clips_per_year);
        let mut breakdown = CostBreakdown::new();

        breakdown.push_scaled(
            "Professional clipping",
            input.style.profile().pro_fee,
            &[input.region.factor(), input.temperament.factor()],
            clips,
        );
        self.push_sedation_if_needed(&mut breakdown, input.temperament, clips);

        breakdown
    }

    /// Annual line items when clipping yourself. The kit itself is a
    /// one-off and is reported separately, not as a running cost.
    fn diy_breakdown(
        &self,
        input: &ClippingInput,
    ) -> CostBreakdown {
        let clips = Decimal::from(input.clips_per_year);
        let mut breakdown = CostBreakdown::new();

        breakdown.push_scaled("Blades and servicing", consumables_per_clip(), &[], clips);
        self.push_sedation_if_needed(&mut breakdown, input.temperament, clips);

        breakdown
    }

    /// A difficult horse gets vet sedation per clip whoever holds the
    /// clippers. The fee is flat, never regionalised or chained into the
    /// temperament factor.
    fn push_sedation_if_needed(
        &self,
        breakdown: &mut CostBreakdown,
        temperament: Temperament,
        clips: Decimal,
    ) {
        if temperament == Temperament::Difficult {
            breakdown.push_scaled("Sedation", sedation_fee(), &[], clips);
        }
    }

    /// Both strategies costed for the same horse, with the DIY side always
    /// priced at the mid-tier kit.
    fn comparison(
        &self,
        input: &ClippingInput,
    ) -> ClippingComparison {
        let professional_annual = self.professional_breakdown(input).total();
        let diy_annual = self.diy_breakdown(input).total();
        let diy_kit_upfront = clipper_kit_price(BudgetTier::Mid);

        ClippingComparison {
            professional_annual,
            diy_annual,
            diy_kit_upfront,
            break_even: break_even_years(diy_kit_upfront, diy_annual, professional_annual),
        }
    }
}
