//! Fixtures
//!
//! YAML scenario sets: function inputs paired with the result each run is
//! expected to produce.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    fixtures::scenarios::ScenariosFixture, functions::RunError, operations::FunctionRunResult,
};

pub mod scenarios;

pub use scenarios::{ExpectedError, Expectation, Scenario};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Scenario not found
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    /// The run produced operations other than the expected ones
    #[error("Scenario {scenario}: expected {expected:?}, got {actual:?}")]
    UnexpectedResult {
        /// Scenario name
        scenario: String,
        /// Expected result
        expected: Box<FunctionRunResult>,
        /// Actual result
        actual: Box<FunctionRunResult>,
    },

    /// The run failed when it should have succeeded, or failed differently
    #[error("Scenario {scenario}: expected {expected}, got error: {actual}")]
    UnexpectedError {
        /// Scenario name
        scenario: String,
        /// What the scenario expected
        expected: String,
        /// Error returned by the run
        #[source]
        actual: RunError,
    },

    /// The run succeeded when it should have failed
    #[error("Scenario {scenario}: expected error {expected:?}, got {actual:?}")]
    MissingError {
        /// Scenario name
        scenario: String,
        /// Expected error
        expected: ExpectedError,
        /// Actual result
        actual: Box<FunctionRunResult>,
    },
}

/// A loaded scenario set.
#[derive(Debug)]
pub struct Fixture {
    base_path: PathBuf,
    scenarios: BTreeMap<String, Scenario>,
}

impl Fixture {
    /// Create a new empty fixture reading from this crate's `fixtures` directory
    pub fn new() -> Self {
        Self::with_base_path(Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"))
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            scenarios: BTreeMap::new(),
        }
    }

    /// Load scenarios from a YAML fixture file
    ///
    /// Scenarios with the same name as an already loaded one replace it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_scenarios(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("scenarios").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ScenariosFixture = serde_norway::from_str(&contents)?;

        self.scenarios.extend(fixture.scenarios);

        Ok(self)
    }

    /// Load a named scenario set from the default fixtures directory
    ///
    /// # Errors
    ///
    /// Returns an error if the set cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_scenarios(name)?;

        Ok(fixture)
    }

    /// Get a scenario by name
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is not found.
    pub fn scenario(&self, name: &str) -> Result<&Scenario, FixtureError> {
        self.scenarios
            .get(name)
            .ok_or_else(|| FixtureError::ScenarioNotFound(name.to_string()))
    }

    /// Iterate scenarios in name order
    pub fn scenarios(&self) -> impl Iterator<Item = (&str, &Scenario)> {
        self.scenarios
            .iter()
            .map(|(name, scenario)| (name.as_str(), scenario))
    }

    /// Number of loaded scenarios
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Check if no scenarios are loaded
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Run every scenario and check it against its expectation
    ///
    /// # Errors
    ///
    /// Returns the first scenario mismatch.
    pub fn verify_all(&self) -> Result<(), FixtureError> {
        self.scenarios()
            .try_for_each(|(name, scenario)| scenario.verify(name))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
