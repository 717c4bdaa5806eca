//! Scenario Fixtures

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    functions::{
        RunError, cart_delivery_options_discounts_generate_run, cart_lines_discounts_generate_run,
    },
    input::{CartInput, DeliveryInput},
    operations::{DiscountOperation, FunctionRunResult},
};

/// Wrapper for scenarios in YAML
#[derive(Debug, Deserialize)]
pub struct ScenariosFixture {
    /// Map of scenario name -> scenario
    pub scenarios: BTreeMap<String, Scenario>,
}

/// Error a scenario expects its run to fail with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    /// [`RunError::NoCartLinesFound`]
    NoCartLinesFound,

    /// [`RunError::NoDeliveryGroupsFound`]
    NoDeliveryGroupsFound,

    /// [`RunError::InvalidConfiguration`]
    InvalidConfiguration,
}

impl ExpectedError {
    /// Check if the run error is the expected one.
    pub fn matches(self, error: &RunError) -> bool {
        matches!(
            (self, error),
            (ExpectedError::NoCartLinesFound, RunError::NoCartLinesFound)
                | (
                    ExpectedError::NoDeliveryGroupsFound,
                    RunError::NoDeliveryGroupsFound
                )
                | (
                    ExpectedError::InvalidConfiguration,
                    RunError::InvalidConfiguration(_)
                )
        )
    }
}

/// What a scenario's run should produce.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// The run succeeds with exactly these operations, in order.
    Operations(Vec<DiscountOperation>),

    /// The run fails with this error.
    Error(ExpectedError),
}

/// A function input and its expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "function", rename_all = "snake_case")]
pub enum Scenario {
    /// Cart-lines discount function scenario
    CartLines {
        /// Function input
        input: CartInput,

        /// Expected outcome
        expect: Expectation,
    },

    /// Delivery-options discount function scenario
    DeliveryOptions {
        /// Function input
        input: DeliveryInput,

        /// Expected outcome
        expect: Expectation,
    },
}

impl Scenario {
    /// Run the scenario's function.
    ///
    /// # Errors
    ///
    /// Returns the function's [`RunError`].
    pub fn run(&self) -> Result<FunctionRunResult, RunError> {
        match self {
            Scenario::CartLines { input, .. } => cart_lines_discounts_generate_run(input),
            Scenario::DeliveryOptions { input, .. } => {
                cart_delivery_options_discounts_generate_run(input)
            }
        }
    }

    /// The expected outcome.
    pub fn expectation(&self) -> &Expectation {
        match self {
            Scenario::CartLines { expect, .. } | Scenario::DeliveryOptions { expect, .. } => {
                expect
            }
        }
    }

    /// Run the scenario and compare the outcome with its expectation.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] describing the mismatch.
    pub fn verify(&self, name: &str) -> Result<(), FixtureError> {
        match (self.expectation(), self.run()) {
            (Expectation::Operations(expected), Ok(actual)) => {
                if expected.as_slice() == actual.operations.as_slice() {
                    Ok(())
                } else {
                    Err(FixtureError::UnexpectedResult {
                        scenario: name.to_string(),
                        expected: Box::new(expected.iter().cloned().collect()),
                        actual: Box::new(actual),
                    })
                }
            }
            (Expectation::Operations(_), Err(actual)) => Err(FixtureError::UnexpectedError {
                scenario: name.to_string(),
                expected: "operations".to_string(),
                actual,
            }),
            (Expectation::Error(expected), Ok(actual)) => Err(FixtureError::MissingError {
                scenario: name.to_string(),
                expected: *expected,
                actual: Box::new(actual),
            }),
            (Expectation::Error(expected), Err(actual)) => {
                if expected.matches(&actual) {
                    Ok(())
                } else {
                    Err(FixtureError::UnexpectedError {
                        scenario: name.to_string(),
                        expected: format!("{expected:?}"),
                        actual,
                    })
                }
            }
        }
    }
}
