use anyhow::{ensure, Context, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::{INITIAL_VALUE, LOG_TARGET};

/// The four operations a harness drives an accumulator through.
///
/// `add` and `sub` return the new running total, `clear` returns the reset
/// value and `get` reads the total without changing it.
pub trait Accumulate {
    fn add(&mut self, value: f64) -> f64;
    fn sub(&mut self, value: f64) -> f64;
    fn clear(&mut self) -> f64;
    fn get(&self) -> f64;
}

/// A running total, starting at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    #[serde(rename = "accumulator")]
    value: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            value: INITIAL_VALUE,
        }
    }

    pub fn add(&mut self, value: f64) -> f64 {
        self.value += value;
        trace!(target: LOG_TARGET, "add {} -> {}", value, self.value);
        self.value
    }

    pub fn sub(&mut self, value: f64) -> f64 {
        self.value -= value;
        trace!(target: LOG_TARGET, "sub {} -> {}", value, self.value);
        self.value
    }

    pub fn clear(&mut self) -> f64 {
        debug!(target: LOG_TARGET, "Clearing accumulator (was {})", self.value);
        self.value = INITIAL_VALUE;
        self.value
    }

    pub fn get(&self) -> f64 {
        self.value
    }

    /// Serializes the current state as `{"accumulator": <value>}`.
    ///
    /// JSON has no NaN or infinity, so a non-finite total is an error.
    pub fn to_json(&self) -> Result<String> {
        ensure!(
            self.value.is_finite(),
            "Cannot serialize non-finite accumulator ({})",
            self.value
        );
        serde_json::to_string(self).context("Failed to serialize calculator state")
    }

    /// Restores a calculator from a snapshot produced by [`Calculator::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let calculator: Self =
            serde_json::from_str(json).context("Failed to parse calculator state")?;
        debug!(
            target: LOG_TARGET,
            "Restored accumulator at {}", calculator.value
        );
        Ok(calculator)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulate for Calculator {
    fn add(&mut self, value: f64) -> f64 {
        Calculator::add(self, value)
    }

    fn sub(&mut self, value: f64) -> f64 {
        Calculator::sub(self, value)
    }

    fn clear(&mut self) -> f64 {
        Calculator::clear(self)
    }

    fn get(&self) -> f64 {
        Calculator::get(self)
    }
}
