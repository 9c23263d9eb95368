//! Calculator implementations, one module per cost question.
//!
//! Each calculator follows the same shape: a typed input struct, a typed
//! result struct, an error enum for input rejected at the boundary, and a
//! calculator struct whose `calculate` entry point is built from small
//! per-step methods. The arithmetic itself trusts well-formed input; all
//! validation happens up front.

pub mod clipping;
pub mod loan;
pub mod retirement;
pub mod rugs;
pub mod transport;
pub mod weight;
pub mod worming;

pub use clipping::{
    ClipMethod, ClippingCalculator, ClippingComparison, ClippingError, ClippingInput,
    ClippingResult,
};
pub use loan::{LoanCalculator, LoanError, LoanInput, LoanResult};
pub use retirement::{RetirementCalculator, RetirementError, RetirementInput, RetirementResult};
pub use rugs::{RugsCalculator, RugsError, RugsInput, RugsResult};
pub use transport::{TransportCalculator, TransportError, TransportInput, TransportResult};
pub use weight::{Build, WeightCalculator, WeightError, WeightInput, WeightResult};
pub use worming::{WormingCalculator, WormingComparison, WormingError, WormingInput, WormingResult};
