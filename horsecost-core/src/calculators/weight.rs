//! Body weight estimation from girth and length measurements.
//!
//! The core is the Carroll and Huntington formula,
//! `weight_kg = girth_cm² × length_cm ÷ 11877`, followed by two explicit
//! step adjustments: a build factor for the horse's frame and a
//! body-condition-score step. Both are separate branches on top of the
//! closed form, not part of a multiplier chain.
//!
//! The dose band rounds the adjusted weight up to the next 50 kg, which is
//! how wormer syringes are graduated; the worming calculator takes its
//! weight input from here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::engine::round_half_up;

/// Divisor of the Carroll and Huntington weight formula.
fn carroll_huntington_divisor() -> Decimal {
    Decimal::new(11877, 0)
}

/// Frame of the horse, independent of condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Build {
    Fine,
    Average,
    Heavy,
}

impl Build {
    pub const ALL: [Build; 3] = [Build::Fine, Build::Average, Build::Heavy];

    /// `Average` is the baseline and returns exactly 1.0.
    pub fn factor(&self) -> Decimal {
        match self {
            Self::Fine => Decimal::new(96, 2),
            Self::Average => Decimal::ONE,
            Self::Heavy => Decimal::new(106, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fine => "fine",
            Self::Average => "average",
            Self::Heavy => "heavy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fine" => Some(Self::Fine),
            "average" => Some(Self::Average),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }
}

/// Errors that can occur before the weight arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightError {
    #[error("girth must be positive, got {0} cm")]
    NonPositiveGirth(Decimal),

    #[error("length must be positive, got {0} cm")]
    NonPositiveLength(Decimal),

    /// Body condition is scored 1-9 (Henneke scale).
    #[error("condition score must be between 1 and 9, got {0}")]
    ConditionScoreOutOfRange(u8),
}

/// Measurements for one weight estimate.
///
/// Girth is taken just behind the elbow at the end of exhalation; length
/// runs point of shoulder to point of buttock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightInput {
    pub girth_cm: Decimal,
    pub length_cm: Decimal,
    pub build: Build,
    pub condition_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightResult {
    /// The unadjusted Carroll and Huntington value.
    pub formula_weight_kg: Decimal,
    /// Formula value after the build and condition steps.
    pub adjusted_weight_kg: Decimal,
    /// Adjusted weight rounded up to the next 50 kg syringe graduation.
    pub dose_band_kg: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct WeightCalculator;

impl WeightCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Estimates body weight from girth and length.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError`] when a measurement is not positive or the
    /// condition score is outside 1-9.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use horsecost_core::calculators::{Build, WeightCalculator, WeightInput};
    ///
    /// let input = WeightInput {
    ///     girth_cm: dec!(185),
    ///     length_cm: dec!(165),
    ///     build: Build::Average,
    ///     condition_score: 5,
    /// };
    ///
    /// let result = WeightCalculator::new().calculate(&input).unwrap();
    ///
    /// // 185² × 165 ÷ 11877 = 475.47 kg
    /// assert_eq!(result.formula_weight_kg, dec!(475.47));
    /// assert_eq!(result.dose_band_kg, dec!(500));
    /// ```
    pub fn calculate(
        &self,
        input: &WeightInput,
    ) -> Result<WeightResult, WeightError> {
        if input.girth_cm <= Decimal::ZERO {
            return Err(WeightError::NonPositiveGirth(input.girth_cm));
        }
        if input.length_cm <= Decimal::ZERO {
            return Err(WeightError::NonPositiveLength(input.length_cm));
        }
        if !(1..=9).contains(&input.condition_score) {
            return Err(WeightError::ConditionScoreOutOfRange(input.condition_score));
        }
        if input.girth_cm > Decimal::from(260) {
            warn!(
                girth_cm = %input.girth_cm,
                "girth beyond any recorded breed; check the tape was in centimetres"
            );
        }

        let raw = self.formula_weight(input.girth_cm, input.length_cm);
        let adjusted = raw * input.build.factor() * self.condition_factor(input.condition_score);
        let adjusted_weight_kg = round_half_up(adjusted);

        Ok(WeightResult {
            formula_weight_kg: round_half_up(raw),
            adjusted_weight_kg,
            dose_band_kg: self.dose_band(adjusted_weight_kg),
        })
    }

    /// The Carroll and Huntington closed form, unrounded.
    fn formula_weight(
        &self,
        girth_cm: Decimal,
        length_cm: Decimal,
    ) -> Decimal {
        girth_cm * girth_cm * length_cm / carroll_huntington_divisor()
    }

    /// Each condition point away from the ideal score of 5 moves the
    /// estimate by 3%. Score 5 is the baseline and returns exactly 1.0.
    fn condition_factor(
        &self,
        condition_score: u8,
    ) -> Decimal {
        let offset = Decimal::from(i32::from(condition_score) - 5);
        Decimal::ONE + Decimal::new(3, 2) * offset
    }

    /// Rounds up to the next 50 kg wormer syringe graduation.
    fn dose_band(
        &self,
        adjusted_weight_kg: Decimal,
    ) -> Decimal {
        let band = Decimal::from(50);
        (adjusted_weight_kg / band).ceil() * band
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_input() -> WeightInput {
        WeightInput {
            girth_cm: dec!(185),
            length_cm: dec!(165),
            build: Build::Average,
            condition_score: 5,
        }
    }

    // =========================================================================
    // validation
    // =========================================================================

    #[test]
    fn rejects_zero_girth() {
        let result = WeightCalculator::new().calculate(&WeightInput {
            girth_cm: dec!(0),
            ..test_input()
        });

        assert_eq!(result, Err(WeightError::NonPositiveGirth(dec!(0))));
    }

    #[test]
    fn rejects_negative_length() {
        let result = WeightCalculator::new().calculate(&WeightInput {
            length_cm: dec!(-165),
            ..test_input()
        });

        assert_eq!(result, Err(WeightError::NonPositiveLength(dec!(-165))));
    }

    #[test]
    fn rejects_condition_score_zero() {
        let result = WeightCalculator::new().calculate(&WeightInput {
            condition_score: 0,
            ..test_input()
        });

        assert_eq!(result, Err(WeightError::ConditionScoreOutOfRange(0)));
    }

    #[test]
    fn rejects_condition_score_ten() {
        let result = WeightCalculator::new().calculate(&WeightInput {
            condition_score: 10,
            ..test_input()
        });

        assert_eq!(result, Err(WeightError::ConditionScoreOutOfRange(10)));
    }

    // =========================================================================
    // formula reference vectors
    // =========================================================================

    #[test]
    fn reference_vector_185_girth_165_length() {
        let result = WeightCalculator::new().calculate(&test_input()).unwrap();

        // 185² × 165 = 5,647,125; ÷ 11,877 = 475.467…
        assert_eq!(result.formula_weight_kg, dec!(475.47));
        assert_eq!(result.adjusted_weight_kg, dec!(475.47));
    }

    #[test]
    fn pony_sized_measurements() {
        let result = WeightCalculator::new()
            .calculate(&WeightInput {
                girth_cm: dec!(150),
                length_cm: dec!(130),
                ..test_input()
            })
            .unwrap();

        // 150² × 130 = 2,925,000; ÷ 11,877 = 246.274…
        assert_eq!(result.formula_weight_kg, dec!(246.27));
    }

    // =========================================================================
    // adjustments
    // =========================================================================

    #[test]
    fn baseline_build_and_condition_leave_the_formula_value_alone() {
        let result = WeightCalculator::new().calculate(&test_input()).unwrap();

        assert_eq!(result.adjusted_weight_kg, result.formula_weight_kg);
    }

    #[test]
    fn heavy_build_scales_up() {
        let result = WeightCalculator::new()
            .calculate(&WeightInput {
                build: Build::Heavy,
                ..test_input()
            })
            .unwrap();

        // 475.467… × 1.06 = 503.995…
        assert_eq!(result.adjusted_weight_kg, dec!(504.00));
    }

    #[test]
    fn lean_condition_scales_down() {
        let result = WeightCalculator::new()
            .calculate(&WeightInput {
                condition_score: 3,
                ..test_input()
            })
            .unwrap();

        // 475.467… × 0.94 = 446.939…
        assert_eq!(result.adjusted_weight_kg, dec!(446.94));
    }

    // =========================================================================
    // dose band
    // =========================================================================

    #[test]
    fn dose_band_rounds_up_to_the_next_fifty() {
        let result = WeightCalculator::new().calculate(&test_input()).unwrap();

        assert_eq!(result.dose_band_kg, dec!(500));
    }

    #[test]
    fn dose_band_does_not_round_down() {
        let result = WeightCalculator::new()
            .calculate(&WeightInput {
                build: Build::Heavy,
                ..test_input()
            })
            .unwrap();

        // 504.00 kg sits in the 550 band.
        assert_eq!(result.dose_band_kg, dec!(550));
    }

    #[test]
    fn identical_input_gives_identical_results() {
        let calculator = WeightCalculator::new();
        let input = test_input();

        assert_eq!(
            calculator.calculate(&input).unwrap(),
            calculator.calculate(&input).unwrap()
        );
    }
}
