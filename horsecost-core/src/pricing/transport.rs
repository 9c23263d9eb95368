use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vehicle {
    HiredTransporter,
    OwnLorry,
    OwnTrailer,
}

/// Per-journey figures for one vehicle choice. Own-vehicle rates are
/// running costs (fuel, wear, servicing averaged per mile); the hired rate
/// is what transporters actually invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleProfile {
    pub label: &'static str,
    pub callout_fee: Decimal,
    pub per_mile: Decimal,
}

impl Vehicle {
    pub const ALL: [Vehicle; 3] = [
        Vehicle::HiredTransporter,
        Vehicle::OwnLorry,
        Vehicle::OwnTrailer,
    ];

    pub fn profile(&self) -> VehicleProfile {
        match self {
            Self::HiredTransporter => VehicleProfile {
                label: "Hired transporter",
                callout_fee: Decimal::new(25, 0),
                per_mile: Decimal::new(120, 2),
            },
            Self::OwnLorry => VehicleProfile {
                label: "Own lorry",
                callout_fee: Decimal::ZERO,
                per_mile: Decimal::new(85, 2),
            },
            Self::OwnTrailer => VehicleProfile {
                label: "Own trailer",
                callout_fee: Decimal::ZERO,
                per_mile: Decimal::new(45, 2),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HiredTransporter => "hired",
            Self::OwnLorry => "lorry",
            Self::OwnTrailer => "trailer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hired" => Some(Self::HiredTransporter),
            "lorry" => Some(Self::OwnLorry),
            "trailer" => Some(Self::OwnTrailer),
            _ => None,
        }
    }
}
