use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// UK region for service pricing.
///
/// Regional factors apply to services bought locally (professional clipping,
/// FEC lab work, livery). Mail-order goods such as wormers and rugs are
/// priced nationally and never regionalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    London,
    SouthEast,
    Average,
    North,
    ScotlandAndWales,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::London,
        Region::SouthEast,
        Region::Average,
        Region::North,
        Region::ScotlandAndWales,
    ];

    /// Dimensionless scalar applied to service base costs.
    ///
    /// `Average` is the baseline and returns exactly 1.0.
    pub fn factor(&self) -> Decimal {
        match self {
            Self::London => Decimal::new(130, 2),
            Self::SouthEast => Decimal::new(115, 2),
            Self::Average => Decimal::ONE,
            Self::North => Decimal::new(90, 2),
            Self::ScotlandAndWales => Decimal::new(95, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::London => "london",
            Self::SouthEast => "south-east",
            Self::Average => "average",
            Self::North => "north",
            Self::ScotlandAndWales => "scotland-wales",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "london" => Some(Self::London),
            "south-east" => Some(Self::SouthEast),
            "average" => Some(Self::Average),
            "north" => Some(Self::North),
            "scotland-wales" => Some(Self::ScotlandAndWales),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_variant() {
        for region in Region::ALL {
            assert_eq!(Region::parse(region.as_str()), Some(region));
        }
    }

    #[test]
    fn parse_rejects_unknown_region() {
        assert_eq!(Region::parse("midlands-ish"), None);
    }
}
