//! One module per subcommand. Each `run` prints its report to stdout and
//! returns the line items so the caller can export them.

pub mod clip;
pub mod loan;
pub mod retire;
pub mod rugs;
pub mod transport;
pub mod weight;
pub mod worm;

use horsecost_core::CostLine;

/// What a subcommand hands back after printing: a name for the CSV
/// `calculator` column and the rows worth exporting.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub calculator: &'static str,
    pub lines: Vec<CostLine>,
}
