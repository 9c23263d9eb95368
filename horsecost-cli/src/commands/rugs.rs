use anyhow::{Context, Result};

use horsecost_core::BudgetTier;
use horsecost_core::calculators::{RugsCalculator, RugsInput};
use horsecost_core::presenter::format_gbp;
use horsecost_core::pricing::rugs::RugType;

use crate::commands::CommandOutput;
use crate::config::Defaults;
use crate::{input, render};

/// Rug wardrobe cost, upfront and per year.
#[derive(clap::Args, Debug)]
pub struct RugsArgs {
    /// Rug to include, as `type` or `type:quantity`; repeatable.
    /// Types: heavy-turnout, medium-turnout, light-turnout, stable,
    /// fleece-liner, fly
    #[arg(long = "rug", value_parser = input::rug_entry, required = true)]
    rugs: Vec<(RugType, u32)>,

    /// Spending tier: budget, mid, premium
    #[arg(long, value_parser = input::budget_tier, default_value = "mid")]
    tier: BudgetTier,
}

pub fn run(
    args: &RugsArgs,
    _defaults: &Defaults,
) -> Result<CommandOutput> {
    let input = RugsInput {
        rugs: args.rugs.clone(),
        tier: args.tier,
    };

    let result = RugsCalculator::new()
        .calculate(&input)
        .context("rug estimate failed")?;

    render::heading(&format!("Rug wardrobe, {} tier", input.tier.as_str()));
    render::breakdown(&result.annual, "Amortised per year");
    render::money_row("Monthly average", result.monthly_average);
    render::row("Wardrobe upfront", &format_gbp(result.upfront_total));

    Ok(CommandOutput {
        calculator: "rugs",
        lines: result.annual.lines().to_vec(),
    })
}
