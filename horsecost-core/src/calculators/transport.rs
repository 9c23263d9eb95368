//! Per-journey transport cost.
//!
//! The callout fee and mileage are the multiplicative part; the
//! multi-horse adjustment is a piecewise rule applied as its own branch,
//! never chained as an ordinary multiplier: one horse travels at face
//! value, a second horse adds half again, and each horse beyond the second
//! adds 0.3 of the single-horse price. The factor multiplies the whole
//! single-horse journey, callout included.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::engine::CostBreakdown;
use crate::pricing::transport::Vehicle;

/// Errors that can occur before the transport arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("distance cannot be negative, got {0} miles")]
    NegativeDistance(Decimal),

    #[error("at least one horse is required, got {0}")]
    NoHorses(u32),
}

/// User selections for one journey estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportInput {
    pub vehicle: Vehicle,
    pub distance_miles: Decimal,
    pub horses: u32,
    pub return_trip: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportResult {
    pub breakdown: CostBreakdown,
    pub total: Decimal,
    /// Total miles actually driven (doubled for a return trip).
    pub billable_miles: Decimal,
    pub per_mile: Option<Decimal>,
    pub per_horse: Option<Decimal>,
    /// The piecewise multi-horse factor that was applied.
    pub horse_factor: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct TransportCalculator;

impl TransportCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculates the cost of one journey.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for a negative distance or a zero horse
    /// count. A zero distance is allowed: hired transporters still charge
    /// the callout.
    pub fn calculate(
        &self,
        input: &TransportInput,
    ) -> Result<TransportResult, TransportError> {
        if input.distance_miles < Decimal::ZERO {
            return Err(TransportError::NegativeDistance(input.distance_miles));
        }
        if input.horses == 0 {
            return Err(TransportError::NoHorses(input.horses));
        }
        if input.distance_miles.is_zero() {
            warn!("zero distance; only the callout fee applies");
        }

        let profile = input.vehicle.profile();
        let billable_miles = self.billable_miles(input.distance_miles, input.return_trip);
        let horse_factor = self.horse_factor(input.horses);

        let mut breakdown = CostBreakdown::new();
        if profile.callout_fee > Decimal::ZERO {
            breakdown.push_scaled("Callout fee", profile.callout_fee, &[horse_factor], Decimal::ONE);
        }
        breakdown.push_scaled("Mileage", profile.per_mile, &[horse_factor], billable_miles);

        let total = breakdown.total();
        let per_mile = breakdown.per_unit(billable_miles);
        let per_horse = breakdown.per_unit(Decimal::from(input.horses));

        Ok(TransportResult {
            breakdown,
            total,
            billable_miles,
            per_mile,
            per_horse,
            horse_factor,
        })
    }

    fn billable_miles(
        &self,
        distance_miles: Decimal,
        return_trip: bool,
    ) -> Decimal {
        if return_trip {
            distance_miles * Decimal::TWO
        } else {
            distance_miles
        }
    }

    /// Piecewise multi-horse rule: ×1.0 for one horse, ×1.5 for two,
    /// ×(1.5 + 0.3 per horse beyond the second) after that.
    fn horse_factor(
        &self,
        horses: u32,
    ) -> Decimal {
        match horses {
            0 | 1 => Decimal::ONE,
            2 => Decimal::new(15, 1),
            n => Decimal::new(15, 1) + Decimal::new(3, 1) * Decimal::from(n - 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_input() -> TransportInput {
        TransportInput {
            vehicle: Vehicle::HiredTransporter,
            distance_miles: dec!(100),
            horses: 1,
            return_trip: false,
        }
    }

    // =========================================================================
    // validation
    // =========================================================================

    #[test]
    fn rejects_negative_distance() {
        let result = TransportCalculator::new().calculate(&TransportInput {
            distance_miles: dec!(-10),
            ..test_input()
        });

        assert_eq!(result, Err(TransportError::NegativeDistance(dec!(-10))));
    }

    #[test]
    fn rejects_zero_horses() {
        let result = TransportCalculator::new().calculate(&TransportInput {
            horses: 0,
            ..test_input()
        });

        assert_eq!(result, Err(TransportError::NoHorses(0)));
    }

    // =========================================================================
    // single horse journeys
    // =========================================================================

    #[test]
    fn hired_transporter_charges_callout_plus_mileage() {
        let result = TransportCalculator::new().calculate(&test_input()).unwrap();

        // 25 callout + 1.20 × 100 miles.
        assert_eq!(result.total, dec!(145.00));
        assert_eq!(result.breakdown.lines().len(), 2);
    }

    #[test]
    fn own_trailer_has_no_callout_line() {
        let result = TransportCalculator::new()
            .calculate(&TransportInput {
                vehicle: Vehicle::OwnTrailer,
                distance_miles: dec!(60),
                ..test_input()
            })
            .unwrap();

        // 0.45 × 60 miles only.
        assert_eq!(result.breakdown.lines().len(), 1);
        assert_eq!(result.total, dec!(27.00));
    }

    #[test]
    fn return_trip_doubles_the_miles_but_not_the_callout() {
        let result = TransportCalculator::new()
            .calculate(&TransportInput {
                return_trip: true,
                ..test_input()
            })
            .unwrap();

        // 25 callout + 1.20 × 200 miles.
        assert_eq!(result.billable_miles, dec!(200));
        assert_eq!(result.total, dec!(265.00));
    }

    #[test]
    fn zero_distance_leaves_only_the_callout() {
        let result = TransportCalculator::new()
            .calculate(&TransportInput {
                distance_miles: dec!(0),
                ..test_input()
            })
            .unwrap();

        assert_eq!(result.total, dec!(25.00));
        assert_eq!(result.per_mile, None);
    }

    // =========================================================================
    // multi-horse piecewise rule
    // =========================================================================

    #[test]
    fn two_horses_cost_one_and_a_half_times_the_single_horse_base() {
        let single = TransportCalculator::new().calculate(&test_input()).unwrap();
        let double = TransportCalculator::new()
            .calculate(&TransportInput {
                horses: 2,
                ..test_input()
            })
            .unwrap();

        assert_eq!(double.horse_factor, dec!(1.5));
        assert_eq!(double.total, single.total * dec!(1.5));
        assert_eq!(double.total, dec!(217.50));
    }

    #[test]
    fn three_horses_cost_one_point_eight_times_the_single_horse_base() {
        let result = TransportCalculator::new()
            .calculate(&TransportInput {
                horses: 3,
                ..test_input()
            })
            .unwrap();

        assert_eq!(result.horse_factor, dec!(1.8));
        assert_eq!(result.total, dec!(261.00));
    }

    #[test]
    fn five_horses_extend_the_piecewise_rule() {
        let result = TransportCalculator::new()
            .calculate(&TransportInput {
                horses: 5,
                ..test_input()
            })
            .unwrap();

        // 1.5 + 0.3 × 3
        assert_eq!(result.horse_factor, dec!(2.4));
    }

    // =========================================================================
    // aggregates and properties
    // =========================================================================

    #[test]
    fn per_mile_uses_billable_miles() {
        let result = TransportCalculator::new().calculate(&test_input()).unwrap();

        // 145 / 100
        assert_eq!(result.per_mile, Some(dec!(1.45)));
    }

    #[test]
    fn per_horse_divides_the_shared_journey() {
        let result = TransportCalculator::new()
            .calculate(&TransportInput {
                horses: 2,
                ..test_input()
            })
            .unwrap();

        // 217.50 / 2
        assert_eq!(result.per_horse, Some(dec!(108.75)));
    }

    #[test]
    fn breakdown_sums_to_reported_total() {
        let result = TransportCalculator::new()
            .calculate(&TransportInput {
                horses: 3,
                return_trip: true,
                ..test_input()
            })
            .unwrap();

        let by_hand: Decimal = result.breakdown.lines().iter().map(|l| l.amount).sum();
        assert_eq!(result.total, by_hand);
    }

    #[test]
    fn longer_journeys_never_cost_less() {
        let short = TransportCalculator::new().calculate(&test_input()).unwrap();
        let long = TransportCalculator::new()
            .calculate(&TransportInput {
                distance_miles: dec!(150),
                ..test_input()
            })
            .unwrap();

        assert!(long.total >= short.total);
    }
}
