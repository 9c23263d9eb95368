use anyhow::{Context, Result};
use rust_decimal::Decimal;

use horsecost_core::Region;
use horsecost_core::calculators::{RetirementCalculator, RetirementInput};
use horsecost_core::presenter::format_gbp;
use horsecost_core::pricing::retirement::CarePackage;

use crate::commands::CommandOutput;
use crate::config::Defaults;
use crate::{input, render};

/// Projected cost of retirement care.
#[derive(clap::Args, Debug)]
pub struct RetireArgs {
    /// Care package: grass, retirement, full
    #[arg(long, value_parser = input::care_package)]
    package: CarePackage,

    /// Years to project
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Annual inflation rate (e.g. 0.04); falls back to the config default
    #[arg(long, value_parser = input::decimal)]
    inflation: Option<Decimal>,

    /// Known monthly cost, replacing the package figure
    #[arg(long, value_parser = input::decimal)]
    monthly_cost: Option<Decimal>,

    /// Region override; falls back to the config default
    #[arg(long, value_parser = input::region)]
    region: Option<Region>,
}

pub fn run(
    args: &RetireArgs,
    defaults: &Defaults,
) -> Result<CommandOutput> {
    let input = RetirementInput {
        package: args.package,
        region: args.region.unwrap_or(defaults.region),
        years: args.years,
        inflation_rate: args.inflation.unwrap_or(defaults.inflation_rate),
        monthly_cost_override: args.monthly_cost,
    };

    let result = RetirementCalculator::new()
        .calculate(&input)
        .context("retirement projection failed")?;

    render::heading(&format!(
        "{}, {} year projection at {}% inflation",
        input.package.profile().label,
        input.years,
        input.inflation_rate * Decimal::from(100),
    ));
    render::breakdown(&result.first_year, "First-year total");
    render::money_row("Monthly average", result.monthly_average);

    render::blank();
    render::heading("Projection");
    for (i, year_cost) in result.projection.yearly.iter().enumerate() {
        render::money_row(&format!("Year {}", i + 1), *year_cost);
    }
    render::rule();
    render::row(
        &format!("{} year total", input.years),
        &format_gbp(result.projection.total),
    );

    Ok(CommandOutput {
        calculator: "retire",
        lines: result.first_year.lines().to_vec(),
    })
}
