use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::BudgetTier;

/// How much of the coat comes off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipStyle {
    Full,
    Hunter,
    Blanket,
    Trace,
    Irish,
    Bib,
}

/// Base figures for one clip style: the professional per-clip fee at the
/// baseline region, and how long the job takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipProfile {
    pub label: &'static str,
    pub pro_fee: Decimal,
    pub time_hours: Decimal,
}

impl ClipStyle {
    pub const ALL: [ClipStyle; 6] = [
        ClipStyle::Full,
        ClipStyle::Hunter,
        ClipStyle::Blanket,
        ClipStyle::Trace,
        ClipStyle::Irish,
        ClipStyle::Bib,
    ];

    pub fn profile(&self) -> ClipProfile {
        match self {
            Self::Full => ClipProfile {
                label: "Full clip",
                pro_fee: Decimal::new(80, 0),
                time_hours: Decimal::new(25, 1),
            },
            Self::Hunter => ClipProfile {
                label: "Hunter clip",
                pro_fee: Decimal::new(60, 0),
                time_hours: Decimal::new(20, 1),
            },
            Self::Blanket => ClipProfile {
                label: "Blanket clip",
                pro_fee: Decimal::new(55, 0),
                time_hours: Decimal::new(175, 2),
            },
            Self::Trace => ClipProfile {
                label: "Trace clip",
                pro_fee: Decimal::new(50, 0),
                time_hours: Decimal::new(15, 1),
            },
            Self::Irish => ClipProfile {
                label: "Irish clip",
                pro_fee: Decimal::new(45, 0),
                time_hours: Decimal::new(125, 2),
            },
            Self::Bib => ClipProfile {
                label: "Bib clip",
                pro_fee: Decimal::new(35, 0),
                time_hours: Decimal::new(75, 2),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Hunter => "hunter",
            Self::Blanket => "blanket",
            Self::Trace => "trace",
            Self::Irish => "irish",
            Self::Bib => "bib",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full" => Some(Self::Full),
            "hunter" => Some(Self::Hunter),
            "blanket" => Some(Self::Blanket),
            "trace" => Some(Self::Trace),
            "irish" => Some(Self::Irish),
            "bib" => Some(Self::Bib),
            _ => None,
        }
    }
}

/// One-off price of a clipper kit (clippers, spare blade set, oil) at the
/// given spending tier.
pub fn clipper_kit_price(tier: BudgetTier) -> Decimal {
    match tier {
        BudgetTier::Budget => Decimal::new(90, 0),
        BudgetTier::Mid => Decimal::new(180, 0),
        BudgetTier::Premium => Decimal::new(320, 0),
    }
}

/// Per-clip consumables when clipping yourself: blade sharpening and oil.
pub fn consumables_per_clip() -> Decimal {
    Decimal::new(14, 0)
}

/// Vet sedation fee per visit, charged for a difficult horse.
pub fn sedation_fee() -> Decimal {
    Decimal::new(75, 0)
}
