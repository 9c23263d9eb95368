use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RugType {
    HeavyTurnout,
    MediumTurnout,
    LightTurnout,
    Stable,
    FleeceLiner,
    Fly,
}

/// Mid-tier price and working life for one rug type. The budget tier
/// multiplier scales the price; the lifespan is the amortisation horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RugProfile {
    pub label: &'static str,
    pub price: Decimal,
    pub lifespan_years: u32,
}

impl RugType {
    pub const ALL: [RugType; 6] = [
        RugType::HeavyTurnout,
        RugType::MediumTurnout,
        RugType::LightTurnout,
        RugType::Stable,
        RugType::FleeceLiner,
        RugType::Fly,
    ];

    pub fn profile(&self) -> RugProfile {
        match self {
            Self::HeavyTurnout => RugProfile {
                label: "Heavyweight turnout",
                price: Decimal::new(95, 0),
                lifespan_years: 4,
            },
            Self::MediumTurnout => RugProfile {
                label: "Mediumweight turnout",
                price: Decimal::new(75, 0),
                lifespan_years: 4,
            },
            Self::LightTurnout => RugProfile {
                label: "Lightweight turnout",
                price: Decimal::new(55, 0),
                lifespan_years: 3,
            },
            Self::Stable => RugProfile {
                label: "Stable rug",
                price: Decimal::new(60, 0),
                lifespan_years: 5,
            },
            Self::FleeceLiner => RugProfile {
                label: "Fleece liner",
                price: Decimal::new(28, 0),
                lifespan_years: 3,
            },
            Self::Fly => RugProfile {
                label: "Fly rug",
                price: Decimal::new(45, 0),
                lifespan_years: 2,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeavyTurnout => "heavy-turnout",
            Self::MediumTurnout => "medium-turnout",
            Self::LightTurnout => "light-turnout",
            Self::Stable => "stable",
            Self::FleeceLiner => "fleece-liner",
            Self::Fly => "fly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "heavy-turnout" => Some(Self::HeavyTurnout),
            "medium-turnout" => Some(Self::MediumTurnout),
            "light-turnout" => Some(Self::LightTurnout),
            "stable" => Some(Self::Stable),
            "fleece-liner" => Some(Self::FleeceLiner),
            "fly" => Some(Self::Fly),
            _ => None,
        }
    }
}
