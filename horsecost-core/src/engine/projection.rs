use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::rounding::round_half_up;

/// A multi-year cost projection under compounding annual inflation.
///
/// Year 1 is the first-year cost unchanged; each later year applies the
/// growth rate to the previous unrounded figure, so rounding never
/// compounds. The grand total is the sum of the displayed per-year figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Cost for each year of the horizon, in order.
    pub yearly: Vec<Decimal>,
    /// Sum of the per-year figures.
    pub total: Decimal,
}

impl Projection {
    /// Projects `first_year` over `years` at the given compounding rate.
    ///
    /// `year_i = first_year × (1 + rate)^(i-1)`, computed with a running
    /// factor. A zero-year horizon yields an empty projection.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use horsecost_core::engine::Projection;
    ///
    /// let projection = Projection::compound(dec!(1000.00), dec!(0.04), 3);
    ///
    /// assert_eq!(projection.yearly, vec![dec!(1000.00), dec!(1040.00), dec!(1081.60)]);
    /// assert_eq!(projection.total, dec!(3121.60));
    /// ```
    pub fn compound(
        first_year: Decimal,
        rate: Decimal,
        years: u32,
    ) -> Self {
        let growth = Decimal::ONE + rate;
        let mut yearly = Vec::with_capacity(years as usize);
        let mut running = first_year;

        for year in 0..years {
            if year > 0 {
                running *= growth;
            }
            yearly.push(round_half_up(running));
        }

        let total = yearly.iter().copied().sum();
        Self { yearly, total }
    }
}
