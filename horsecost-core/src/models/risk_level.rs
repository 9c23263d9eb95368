use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parasite exposure risk: grazing density, pasture management, whether the
/// horse travels to shared grazing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// `Medium` is the baseline and returns exactly 1.0.
    pub fn factor(&self) -> Decimal {
        match self {
            Self::Low => Decimal::new(80, 2),
            Self::Medium => Decimal::ONE,
            Self::High => Decimal::new(125, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}
