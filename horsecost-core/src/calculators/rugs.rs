//! Rug wardrobe cost: what it costs to buy, and what it really costs per
//! year once each rug is spread over its working life.
//!
//! Every entry is `price × tier × quantity`, amortised by the rug's tabled
//! lifespan for the annual figure. Rugs are mail-order goods, so there is
//! no regional factor here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::engine::{CostBreakdown, round_half_up};
use crate::models::BudgetTier;
use crate::pricing::rugs::RugType;

/// Errors that can occur before the rug arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RugsError {
    /// An empty wardrobe has no cost to estimate.
    #[error("no rugs selected")]
    NoRugsSelected,
}

/// User selections: the rugs wanted, how many of each, and the spending
/// tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RugsInput {
    pub rugs: Vec<(RugType, u32)>,
    pub tier: BudgetTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RugsResult {
    /// Amortised cost per year, one line per rug type.
    pub annual: CostBreakdown,
    pub annual_total: Decimal,
    pub monthly_average: Decimal,
    /// What the wardrobe costs to buy outright.
    pub upfront_total: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct RugsCalculator;

impl RugsCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Prices the wardrobe.
    ///
    /// Zero-quantity entries are skipped with a warning; an input with no
    /// effective entries at all is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RugsError::NoRugsSelected`] when nothing remains to
    /// price.
    pub fn calculate(
        &self,
        input: &RugsInput,
    ) -> Result<RugsResult, RugsError> {
        let tier_factor = input.tier.factor();
        let mut annual = CostBreakdown::new();
        let mut upfront_total = Decimal::ZERO;

        for (rug, quantity) in &input.rugs {
            if *quantity == 0 {
                warn!(rug = rug.as_str(), "zero-quantity rug entry skipped");
                continue;
            }
            let profile = rug.profile();
            let quantity = Decimal::from(*quantity);

            upfront_total += round_half_up(profile.price * tier_factor * quantity);
            annual.push(
                profile.label,
                profile.price * tier_factor * quantity
                    / Decimal::from(profile.lifespan_years),
            );
        }

        if annual.is_empty() {
            return Err(RugsError::NoRugsSelected);
        }

        Ok(RugsResult {
            annual_total: annual.total(),
            monthly_average: annual.monthly_average(),
            annual,
            upfront_total,
        })
    }
}
