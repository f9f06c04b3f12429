use anyhow::{ensure, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{calculator::Calculator, config::LOG_TARGET};

/// One accumulator call in message form, e.g. `{"op": "add", "value": 5}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Add { value: f64 },
    Sub { value: f64 },
    Clear,
    Get,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Sub { .. } => "sub",
            Operation::Clear => "clear",
            Operation::Get => "get",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    pub op: String,
    pub result: f64,
}

impl Calculator {
    /// Runs `op` against this calculator and returns what the operation returned.
    pub fn apply(&mut self, op: Operation) -> f64 {
        match op {
            Operation::Add { value } => self.add(value),
            Operation::Sub { value } => self.sub(value),
            Operation::Clear => self.clear(),
            Operation::Get => self.get(),
        }
    }
}

/// Parses a single operation request, applies it and returns the serialized result.
///
/// A rejected request leaves the calculator untouched. Requests are rejected
/// when they fail to parse or when the result would not be a finite number,
/// since JSON cannot carry NaN or infinity.
pub fn handle_request(calculator: &mut Calculator, request: &str) -> Result<String> {
    let op: Operation =
        serde_json::from_str(request).context("Failed to parse operation request")?;
    debug!(target: LOG_TARGET, "Handling {} request", op.name());

    let mut next = calculator.clone();
    let result = next.apply(op);
    ensure!(
        result.is_finite(),
        "Result of {} request is not finite ({})",
        op.name(),
        result
    );

    let response = OperationResult {
        op: op.name().to_string(),
        result,
    };
    let response =
        serde_json::to_string(&response).context("Failed to serialize operation result")?;

    *calculator = next;
    Ok(response)
}
