use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Care setting for a retired horse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarePackage {
    GrassLivery,
    RetirementLivery,
    FullLivery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareProfile {
    pub label: &'static str,
    pub monthly_cost: Decimal,
}

impl CarePackage {
    pub const ALL: [CarePackage; 3] = [
        CarePackage::GrassLivery,
        CarePackage::RetirementLivery,
        CarePackage::FullLivery,
    ];

    pub fn profile(&self) -> CareProfile {
        match self {
            Self::GrassLivery => CareProfile {
                label: "Grass livery",
                monthly_cost: Decimal::new(130, 0),
            },
            Self::RetirementLivery => CareProfile {
                label: "Retirement livery",
                monthly_cost: Decimal::new(350, 0),
            },
            Self::FullLivery => CareProfile {
                label: "Full livery",
                monthly_cost: Decimal::new(650, 0),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrassLivery => "grass",
            Self::RetirementLivery => "retirement",
            Self::FullLivery => "full",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "grass" => Some(Self::GrassLivery),
            "retirement" => Some(Self::RetirementLivery),
            "full" => Some(Self::FullLivery),
            _ => None,
        }
    }
}

/// Annual veteran care on top of livery: twice-yearly vet checks with
/// bloods, dental work, and a barefoot trim cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VeteranPremiums {
    pub vet: Decimal,
    pub dentist: Decimal,
    pub farrier_trims: Decimal,
}

pub fn veteran_premiums() -> VeteranPremiums {
    VeteranPremiums {
        vet: Decimal::new(380, 0),
        dentist: Decimal::new(90, 0),
        farrier_trims: Decimal::new(180, 0),
    }
}

/// Default annual cost inflation applied to multi-year projections.
pub fn default_inflation_rate() -> Decimal {
    Decimal::new(4, 2)
}
