//! Add numbers tool definition.
//!
//! Adds two real numbers.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for the add numbers tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddNumbersParams {
    /// The first number
    pub a: f64,

    /// The second number
    pub b: f64,
}

/// Add numbers tool - returns the sum of two numbers.
pub struct AddNumbersTool;

impl ToolDefinition for AddNumbersTool {
    const NAME: &'static str = "add_numbers";
    const DESCRIPTION: &'static str =
        "Add two numbers together. Returns the sum of the two numbers.";

    type Params = AddNumbersParams;
    type Output = f64;

    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    fn execute(params: AddNumbersParams) -> f64 {
        let sum = add_numbers(params.a, params.b);
        debug!("Computed sum: {}", sum);
        sum
    }
}

/// Sum of `a` and `b`. Non-finite inputs follow IEEE 754 semantics.
pub fn add_numbers(a: f64, b: f64) -> f64 {
    a + b
}
