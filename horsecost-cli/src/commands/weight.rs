use anyhow::{Context, Result};
use rust_decimal::Decimal;

use horsecost_core::CostLine;
use horsecost_core::calculators::{Build, WeightCalculator, WeightInput};

use crate::commands::CommandOutput;
use crate::config::Defaults;
use crate::{input, render};

/// Body weight estimate from girth and length.
#[derive(clap::Args, Debug)]
pub struct WeightArgs {
    /// Heart girth in cm
    #[arg(long, value_parser = input::decimal)]
    girth: Decimal,

    /// Body length in cm, point of shoulder to point of buttock
    #[arg(long, value_parser = input::decimal)]
    length: Decimal,

    /// Frame: fine, average, heavy
    #[arg(long, value_parser = input::build, default_value = "average")]
    build: Build,

    /// Body condition score, 1-9
    #[arg(long, default_value_t = 5)]
    condition_score: u8,
}

pub fn run(
    args: &WeightArgs,
    _defaults: &Defaults,
) -> Result<CommandOutput> {
    let input = WeightInput {
        girth_cm: args.girth,
        length_cm: args.length,
        build: args.build,
        condition_score: args.condition_score,
    };

    let result = WeightCalculator::new()
        .calculate(&input)
        .context("weight estimate failed")?;

    render::heading(&format!(
        "Weight estimate for girth {} cm, length {} cm",
        input.girth_cm, input.length_cm
    ));
    render::row("Tape formula", &format!("{} kg", result.formula_weight_kg));
    render::row("Adjusted estimate", &format!("{} kg", result.adjusted_weight_kg));
    render::row("Wormer dose band", &format!("{} kg", result.dose_band_kg));

    let lines = vec![
        CostLine {
            label: "Formula weight (kg)".to_string(),
            amount: result.formula_weight_kg,
        },
        CostLine {
            label: "Adjusted weight (kg)".to_string(),
            amount: result.adjusted_weight_kg,
        },
        CostLine {
            label: "Dose band (kg)".to_string(),
            amount: result.dose_band_kg,
        },
    ];

    Ok(CommandOutput {
        calculator: "weight",
        lines,
    })
}
