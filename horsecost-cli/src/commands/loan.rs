use anyhow::{Context, Result};
use rust_decimal::Decimal;

use horsecost_core::calculators::{LoanCalculator, LoanInput};
use horsecost_core::presenter::{format_break_even, format_gbp, loan_recommendation};
use horsecost_core::pricing::loan::LoanArrangement;
use horsecost_core::Region;

use crate::commands::CommandOutput;
use crate::config::Defaults;
use crate::{input, render};

/// Owning outright versus taking a horse on loan.
#[derive(clap::Args, Debug)]
pub struct LoanArgs {
    /// Arrangement: full, part, share
    #[arg(long, value_parser = input::loan_arrangement)]
    arrangement: LoanArrangement,

    /// Purchase price of the horse being compared against
    #[arg(long, value_parser = input::decimal)]
    price: Decimal,

    /// Region override; falls back to the config default
    #[arg(long, value_parser = input::region)]
    region: Option<Region>,
}

pub fn run(
    args: &LoanArgs,
    defaults: &Defaults,
) -> Result<CommandOutput> {
    let input = LoanInput {
        arrangement: args.arrangement,
        purchase_price: args.price,
        region: args.region.unwrap_or(defaults.region),
    };

    let result = LoanCalculator::new()
        .calculate(&input)
        .context("loan comparison failed")?;

    render::heading("Owning outright");
    render::breakdown(&result.ownership, "Annual total");
    render::row("Purchase price (one-off)", &format_gbp(input.purchase_price));

    render::blank();
    render::heading(input.arrangement.profile().label);
    render::breakdown(&result.loaning, "Annual total");

    render::blank();
    render::money_row("Monthly difference", result.monthly_difference);
    render::row("Purchase break-even", &format_break_even(&result.break_even));

    render::blank();
    println!(
        "{}",
        loan_recommendation(
            result.ownership_annual,
            result.loaning_annual,
            &result.break_even,
        )
    );

    Ok(CommandOutput {
        calculator: "loan",
        lines: result.loaning.lines().to_vec(),
    })
}
