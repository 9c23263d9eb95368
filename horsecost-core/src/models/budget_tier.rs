use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spending tier for equipment purchases (clipper kits, rugs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetTier {
    Budget,
    Mid,
    Premium,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Budget, BudgetTier::Mid, BudgetTier::Premium];

    /// `Mid` is the baseline and returns exactly 1.0.
    pub fn factor(&self) -> Decimal {
        match self {
            Self::Budget => Decimal::new(70, 2),
            Self::Mid => Decimal::ONE,
            Self::Premium => Decimal::new(160, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Mid => "mid",
            Self::Premium => "premium",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "budget" => Some(Self::Budget),
            "mid" => Some(Self::Mid),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }
}
