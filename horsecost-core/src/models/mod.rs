mod budget_tier;
mod region;
mod risk_level;
mod temperament;

pub use budget_tier::BudgetTier;
pub use region::Region;
pub use risk_level::RiskLevel;
pub use temperament::Temperament;
