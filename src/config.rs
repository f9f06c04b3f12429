/// Value a calculator holds after construction or `clear`.
pub const INITIAL_VALUE: f64 = 0.0;

/// Log target for accumulator and protocol events.
pub const LOG_TARGET: &str = "simple_calculator";
