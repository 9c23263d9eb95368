//! Boundary parsing for command-line values.
//!
//! Every parser here returns `Result<_, String>` so clap can surface the
//! message directly. Category parsers list the accepted keys in their
//! error; the decimal parser accepts comma thousands separators, so
//! `--price 6,500` works as typed.

use rust_decimal::Decimal;

use horsecost_core::calculators::Build;
use horsecost_core::pricing::clipping::ClipStyle;
use horsecost_core::pricing::loan::LoanArrangement;
use horsecost_core::pricing::retirement::CarePackage;
use horsecost_core::pricing::rugs::RugType;
use horsecost_core::pricing::transport::Vehicle;
use horsecost_core::pricing::worming::WormingProgram;
use horsecost_core::{BudgetTier, Region, RiskLevel, Temperament};

/// Parses a decimal, trimming whitespace and stripping comma separators.
pub fn decimal(s: &str) -> Result<Decimal, String> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Err("expected a number".to_string());
    }
    normalized
        .parse()
        .map_err(|e| format!("invalid number '{s}': {e}"))
}

/// Parses a rug entry of the form `type` or `type:quantity`.
pub fn rug_entry(s: &str) -> Result<(RugType, u32), String> {
    let (name, quantity) = match s.split_once(':') {
        Some((name, quantity)) => {
            let quantity: u32 = quantity
                .parse()
                .map_err(|_| format!("invalid rug quantity in '{s}'"))?;
            (name, quantity)
        }
        None => (s, 1),
    };
    let rug = RugType::parse(name).ok_or_else(|| unknown("rug type", name, &keys(&RugType::ALL, |r| r.as_str())))?;
    Ok((rug, quantity))
}

pub fn region(s: &str) -> Result<Region, String> {
    Region::parse(s).ok_or_else(|| unknown("region", s, &keys(&Region::ALL, |r| r.as_str())))
}

pub fn temperament(s: &str) -> Result<Temperament, String> {
    Temperament::parse(s)
        .ok_or_else(|| unknown("temperament", s, &keys(&Temperament::ALL, |t| t.as_str())))
}

pub fn risk_level(s: &str) -> Result<RiskLevel, String> {
    RiskLevel::parse(s)
        .ok_or_else(|| unknown("risk level", s, &keys(&RiskLevel::ALL, |r| r.as_str())))
}

pub fn budget_tier(s: &str) -> Result<BudgetTier, String> {
    BudgetTier::parse(s)
        .ok_or_else(|| unknown("budget tier", s, &keys(&BudgetTier::ALL, |b| b.as_str())))
}

pub fn clip_style(s: &str) -> Result<ClipStyle, String> {
    ClipStyle::parse(s)
        .ok_or_else(|| unknown("clip style", s, &keys(&ClipStyle::ALL, |c| c.as_str())))
}

pub fn worming_program(s: &str) -> Result<WormingProgram, String> {
    WormingProgram::parse(s)
        .ok_or_else(|| unknown("worming program", s, &keys(&WormingProgram::ALL, |p| p.as_str())))
}

pub fn vehicle(s: &str) -> Result<Vehicle, String> {
    Vehicle::parse(s).ok_or_else(|| unknown("vehicle", s, &keys(&Vehicle::ALL, |v| v.as_str())))
}

pub fn loan_arrangement(s: &str) -> Result<LoanArrangement, String> {
    LoanArrangement::parse(s)
        .ok_or_else(|| unknown("loan arrangement", s, &keys(&LoanArrangement::ALL, |a| a.as_str())))
}

pub fn care_package(s: &str) -> Result<CarePackage, String> {
    CarePackage::parse(s)
        .ok_or_else(|| unknown("care package", s, &keys(&CarePackage::ALL, |p| p.as_str())))
}

pub fn build(s: &str) -> Result<Build, String> {
    Build::parse(s).ok_or_else(|| unknown("build", s, &keys(&Build::ALL, |b| b.as_str())))
}

fn keys<T>(
    all: &[T],
    as_str: impl Fn(&T) -> &'static str,
) -> String {
    all.iter().map(as_str).collect::<Vec<_>>().join(", ")
}

fn unknown(
    what: &str,
    got: &str,
    expected: &str,
) -> String {
    format!("unknown {what} '{got}' (expected one of: {expected})")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn decimal_accepts_comma_thousands_separators() {
        assert_eq!(decimal("6,500"), Ok(dec!(6500)));
        assert_eq!(decimal(" 1,234.56 "), Ok(dec!(1234.56)));
    }

    #[test]
    fn decimal_rejects_empty_input() {
        assert!(decimal("   ").is_err());
    }

    #[test]
    fn decimal_rejects_garbage() {
        assert!(decimal("about 500").is_err());
    }

    #[test]
    fn rug_entry_defaults_to_quantity_one() {
        assert_eq!(rug_entry("fly"), Ok((RugType::Fly, 1)));
    }

    #[test]
    fn rug_entry_accepts_an_explicit_quantity() {
        assert_eq!(rug_entry("stable:2"), Ok((RugType::Stable, 2)));
    }

    #[test]
    fn rug_entry_rejects_unknown_types() {
        let err = rug_entry("duvet").unwrap_err();

        assert!(err.contains("unknown rug type"));
        assert!(err.contains("heavy-turnout"));
    }

    #[test]
    fn category_parsers_list_the_accepted_keys() {
        let err = region("midlands").unwrap_err();

        assert!(err.contains("south-east"));
        assert!(err.contains("scotland-wales"));
    }
}
