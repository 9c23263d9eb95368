//! Static 2026 UK pricing tables.
//!
//! Each submodule owns the category enum(s) and base prices for one
//! calculator. Tables are exhaustive `match` expressions keyed by enum, so
//! there is no such thing as an unknown category at runtime. Figures are
//! literal constants; none of them is derived from anything.

pub mod clipping;
pub mod loan;
pub mod retirement;
pub mod rugs;
pub mod transport;
pub mod worming;
