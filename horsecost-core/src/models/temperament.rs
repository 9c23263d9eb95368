use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a horse behaves for the clippers.
///
/// A difficult horse takes longer and usually needs vet sedation, which is
/// billed as its own line item rather than folded into this factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temperament {
    Good,
    Fidgety,
    Difficult,
}

impl Temperament {
    pub const ALL: [Temperament; 3] = [
        Temperament::Good,
        Temperament::Fidgety,
        Temperament::Difficult,
    ];

    /// `Good` is the baseline and returns exactly 1.0.
    pub fn factor(&self) -> Decimal {
        match self {
            Self::Good => Decimal::ONE,
            Self::Fidgety => Decimal::new(115, 2),
            Self::Difficult => Decimal::new(130, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fidgety => "fidgety",
            Self::Difficult => "difficult",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "good" => Some(Self::Good),
            "fidgety" => Some(Self::Fidgety),
            "difficult" => Some(Self::Difficult),
            _ => None,
        }
    }
}
