use anyhow::{Context, Result};
use horsecost_core::calculators::{ClipMethod, ClippingCalculator, ClippingInput};
use horsecost_core::presenter::{clipping_recommendation, format_break_even, format_gbp, format_optional_gbp};
use horsecost_core::pricing::clipping::ClipStyle;
use horsecost_core::{BudgetTier, Region, Temperament};

use crate::commands::CommandOutput;
use crate::config::Defaults;
use crate::{input, render};

/// Annual clipping cost, professional or DIY.
#[derive(clap::Args, Debug)]
pub struct ClipArgs {
    /// Clip style: full, hunter, blanket, trace, irish, bib
    #[arg(long, value_parser = input::clip_style)]
    style: ClipStyle,

    /// Clips per year
    #[arg(long, default_value_t = 3)]
    per_year: u32,

    /// Do it yourself instead of paying a professional
    #[arg(long, default_value_t = false)]
    diy: bool,

    /// Clipper kit tier when clipping yourself: budget, mid, premium
    #[arg(long, value_parser = input::budget_tier, default_value = "mid")]
    kit_tier: BudgetTier,

    /// Temperament for the clippers: good, fidgety, difficult
    #[arg(long, value_parser = input::temperament, default_value = "good")]
    temperament: Temperament,

    /// Region override; falls back to the config default
    #[arg(long, value_parser = input::region)]
    region: Option<Region>,
}

pub fn run(
    args: &ClipArgs,
    defaults: &Defaults,
) -> Result<CommandOutput> {
    let method = if args.diy {
        ClipMethod::Diy {
            kit_tier: args.kit_tier,
        }
    } else {
        ClipMethod::Professional
    };
    let input = ClippingInput {
        style: args.style,
        clips_per_year: args.per_year,
        method,
        region: args.region.unwrap_or(defaults.region),
        temperament: args.temperament,
    };

    let result = ClippingCalculator::new()
        .calculate(&input)
        .context("clipping estimate failed")?;

    render::heading(&format!(
        "{}, {} clips a year",
        input.style.profile().label,
        input.clips_per_year
    ));
    render::breakdown(&result.breakdown, "Annual total");
    render::money_row("Monthly average", result.monthly_average);
    render::row("Per clip", &format_optional_gbp(result.per_clip));
    if let Some(kit) = result.upfront_kit {
        render::row("Clipper kit (one-off)", &format_gbp(kit));
    }

    render::blank();
    render::heading("Professional vs DIY");
    render::money_row("Professional, per year", result.comparison.professional_annual);
    render::money_row("DIY running, per year", result.comparison.diy_annual);
    render::money_row("Mid-tier kit, one-off", result.comparison.diy_kit_upfront);
    render::row("Kit break-even", &format_break_even(&result.comparison.break_even));

    render::blank();
    println!(
        "{}",
        clipping_recommendation(
            result.comparison.professional_annual,
            result.comparison.diy_annual,
        )
    );

    Ok(CommandOutput {
        calculator: "clip",
        lines: result.breakdown.lines().to_vec(),
    })
}
