use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Loan arrangement offered by the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanArrangement {
    Full,
    Part,
    Share,
}

/// What the loaner pays: a monthly fee to the owner plus a share of the
/// horse's running costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrangementProfile {
    pub label: &'static str,
    pub monthly_fee: Decimal,
    pub running_cost_share: Decimal,
}

impl LoanArrangement {
    pub const ALL: [LoanArrangement; 3] = [
        LoanArrangement::Full,
        LoanArrangement::Part,
        LoanArrangement::Share,
    ];

    pub fn profile(&self) -> ArrangementProfile {
        match self {
            Self::Full => ArrangementProfile {
                label: "Full loan",
                monthly_fee: Decimal::ZERO,
                running_cost_share: Decimal::ONE,
            },
            Self::Part => ArrangementProfile {
                label: "Part loan",
                monthly_fee: Decimal::new(140, 0),
                running_cost_share: Decimal::new(50, 2),
            },
            Self::Share => ArrangementProfile {
                label: "Share",
                monthly_fee: Decimal::new(90, 0),
                running_cost_share: Decimal::new(25, 2),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Part => "part",
            Self::Share => "share",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full" => Some(Self::Full),
            "part" => Some(Self::Part),
            "share" => Some(Self::Share),
            _ => None,
        }
    }
}

/// Annual running costs of outright ownership at the baseline region.
/// Livery is the only regionalised line; the rest are priced nationally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipCosts {
    pub livery: Decimal,
    pub farrier: Decimal,
    pub insurance: Decimal,
    pub routine_vet: Decimal,
    pub feed_and_bedding: Decimal,
}

pub fn ownership_costs() -> OwnershipCosts {
    OwnershipCosts {
        livery: Decimal::new(2080, 0),
        farrier: Decimal::new(320, 0),
        insurance: Decimal::new(420, 0),
        routine_vet: Decimal::new(280, 0),
        feed_and_bedding: Decimal::new(780, 0),
    }
}
