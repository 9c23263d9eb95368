use anyhow::{Context, Result};
use rust_decimal::Decimal;

use horsecost_core::calculators::{TransportCalculator, TransportInput};
use horsecost_core::presenter::format_optional_gbp;
use horsecost_core::pricing::transport::Vehicle;

use crate::commands::CommandOutput;
use crate::config::Defaults;
use crate::{input, render};

/// Cost of one journey.
#[derive(clap::Args, Debug)]
pub struct TransportArgs {
    /// Vehicle: hired, lorry, trailer
    #[arg(long, value_parser = input::vehicle)]
    vehicle: Vehicle,

    /// One-way distance in miles
    #[arg(long, value_parser = input::decimal)]
    miles: Decimal,

    /// Horses travelling together
    #[arg(long, default_value_t = 1)]
    horses: u32,

    /// Price the return leg as well
    #[arg(long, default_value_t = false)]
    return_trip: bool,
}

pub fn run(
    args: &TransportArgs,
    _defaults: &Defaults,
) -> Result<CommandOutput> {
    let input = TransportInput {
        vehicle: args.vehicle,
        distance_miles: args.miles,
        horses: args.horses,
        return_trip: args.return_trip,
    };

    let result = TransportCalculator::new()
        .calculate(&input)
        .context("transport estimate failed")?;

    render::heading(&format!(
        "{}, {} miles, {} horse(s)",
        input.vehicle.profile().label,
        result.billable_miles,
        input.horses
    ));
    render::breakdown(&result.breakdown, "Journey total");
    render::row("Per mile", &format_optional_gbp(result.per_mile));
    render::row("Per horse", &format_optional_gbp(result.per_horse));
    if input.horses > 1 {
        render::row("Shared-load factor", &format!("×{}", result.horse_factor));
    }

    Ok(CommandOutput {
        calculator: "transport",
        lines: result.breakdown.lines().to_vec(),
    })
}
