pub mod calculator;
pub mod config;
pub mod protocol;
pub mod shared;

pub use calculator::{Accumulate, Calculator};
pub use protocol::{handle_request, Operation, OperationResult};
pub use shared::SharedCalculator;
