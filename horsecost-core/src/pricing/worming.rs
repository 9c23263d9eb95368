use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual worming approach.
///
/// Traditional programs worm on a fixed interval. Targeted programs test
/// first (faecal egg counts) and only treat horses that need it. Strategic
/// programs sit between the two: spring/autumn counts, routine cover
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WormingProgram {
    Traditional,
    Targeted,
    Strategic,
}

/// Per-horse annual counts for one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramProfile {
    pub label: &'static str,
    pub fec_tests_per_year: u32,
    pub wormer_doses_per_year: u32,
    pub tapeworm_treatments_per_year: u32,
    pub encysted_doses_per_year: u32,
}

impl WormingProgram {
    pub const ALL: [WormingProgram; 3] = [
        WormingProgram::Traditional,
        WormingProgram::Targeted,
        WormingProgram::Strategic,
    ];

    pub fn profile(&self) -> ProgramProfile {
        match self {
            Self::Traditional => ProgramProfile {
                label: "Traditional interval program",
                fec_tests_per_year: 0,
                wormer_doses_per_year: 4,
                tapeworm_treatments_per_year: 2,
                encysted_doses_per_year: 1,
            },
            Self::Targeted => ProgramProfile {
                label: "Targeted FEC-led program",
                fec_tests_per_year: 4,
                wormer_doses_per_year: 1,
                tapeworm_treatments_per_year: 1,
                encysted_doses_per_year: 1,
            },
            Self::Strategic => ProgramProfile {
                label: "Strategic program",
                fec_tests_per_year: 2,
                wormer_doses_per_year: 2,
                tapeworm_treatments_per_year: 2,
                encysted_doses_per_year: 1,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Targeted => "targeted",
            Self::Strategic => "strategic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "traditional" => Some(Self::Traditional),
            "targeted" => Some(Self::Targeted),
            "strategic" => Some(Self::Strategic),
            _ => None,
        }
    }
}

/// Lab fee for one faecal egg count, postage included.
pub fn fec_test_fee() -> Decimal {
    Decimal::new(28, 0)
}

/// One broad-spectrum wormer dose at the reference weight.
pub fn wormer_dose_price() -> Decimal {
    Decimal::new(12, 0)
}

/// One praziquantel tapeworm treatment at the reference weight.
pub fn tapeworm_treatment_price() -> Decimal {
    Decimal::new(18, 0)
}

/// One moxidectin winter dose against encysted redworm, reference weight.
pub fn encysted_dose_price() -> Decimal {
    Decimal::new(22, 0)
}

/// Body weight at which dose prices are quoted. Dose line items scale
/// linearly against this.
pub fn reference_weight_kg() -> Decimal {
    Decimal::new(500, 0)
}
