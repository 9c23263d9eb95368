//! Plain-text table output.

use rust_decimal::Decimal;

use horsecost_core::CostBreakdown;
use horsecost_core::presenter::format_gbp;

const LABEL_WIDTH: usize = 30;
const AMOUNT_WIDTH: usize = 12;

/// Prints a section heading.
pub fn heading(title: &str) {
    println!("{title}");
}

/// Prints one aligned label/value row.
pub fn row(
    label: &str,
    value: &str,
) {
    println!("  {label:<LABEL_WIDTH$} {value:>AMOUNT_WIDTH$}");
}

/// Prints one aligned currency row.
pub fn money_row(
    label: &str,
    amount: Decimal,
) {
    row(label, &format_gbp(amount));
}

/// Prints a breakdown's line items followed by a rule and its total.
pub fn breakdown(
    breakdown: &CostBreakdown,
    total_label: &str,
) {
    for line in breakdown.lines() {
        money_row(&line.label, line.amount);
    }
    rule();
    money_row(total_label, breakdown.total());
}

/// Prints the separator rule used above totals.
pub fn rule() {
    println!("  {}", "-".repeat(LABEL_WIDTH + AMOUNT_WIDTH + 1));
}

/// Prints a blank spacer line.
pub fn blank() {
    println!();
}
