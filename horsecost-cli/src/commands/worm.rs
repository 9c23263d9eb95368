use anyhow::{Context, Result};
use rust_decimal::Decimal;

use horsecost_core::calculators::{WormingCalculator, WormingInput};
use horsecost_core::presenter::{format_gbp, format_optional_gbp};
use horsecost_core::pricing::worming::WormingProgram;
use horsecost_core::{Region, RiskLevel};

use crate::commands::CommandOutput;
use crate::config::Defaults;
use crate::{input, render};

/// Annual worming program cost.
#[derive(clap::Args, Debug)]
pub struct WormArgs {
    /// Program: traditional, targeted, strategic
    #[arg(long, value_parser = input::worming_program)]
    program: WormingProgram,

    /// Number of horses on the program
    #[arg(long, default_value_t = 1)]
    horses: u32,

    /// Average body weight in kg
    #[arg(long, value_parser = input::decimal, default_value = "500")]
    weight: Decimal,

    /// Parasite risk: low, medium, high
    #[arg(long, value_parser = input::risk_level, default_value = "medium")]
    risk: RiskLevel,

    /// Region override; falls back to the config default
    #[arg(long, value_parser = input::region)]
    region: Option<Region>,
}

pub fn run(
    args: &WormArgs,
    defaults: &Defaults,
) -> Result<CommandOutput> {
    let input = WormingInput {
        program: args.program,
        horses: args.horses,
        average_weight_kg: args.weight,
        region: args.region.unwrap_or(defaults.region),
        risk: args.risk,
    };

    let result = WormingCalculator::new()
        .calculate(&input)
        .context("worming estimate failed")?;

    render::heading(&format!(
        "{}, {} horse(s)",
        input.program.profile().label,
        input.horses
    ));
    render::breakdown(&result.breakdown, "Annual total");
    render::money_row("Monthly average", result.monthly_average);
    render::row("Per horse", &format_optional_gbp(result.per_horse));

    render::blank();
    render::heading("Against the traditional baseline");
    render::money_row("Selected program", result.comparison.selected_annual);
    render::money_row("Traditional baseline", result.comparison.traditional_annual);
    render::row(
        "Difference",
        &format_gbp(result.comparison.annual_difference),
    );

    Ok(CommandOutput {
        calculator: "worm",
        lines: result.breakdown.lines().to_vec(),
    })
}
