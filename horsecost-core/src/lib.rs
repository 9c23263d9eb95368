pub mod calculators;
pub mod engine;
pub mod models;
pub mod presenter;
pub mod pricing;

pub use engine::{BreakEven, CostBreakdown, CostLine, Projection};
pub use models::*;
