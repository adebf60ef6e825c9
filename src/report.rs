//! Check registry and outcome reporting.
//!
//! A test harness needs to discover each check by name, invoke it with no
//! arguments, and capture a pass/fail outcome carrying the expected and
//! actual values on failure. [`CHECKS`] is the registry, [`run_checks`]
//! the aggregation over it.

use crate::checks;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A named, zero-argument check routine.
pub struct Check {
    pub name: &'static str,
    pub run: fn() -> Result<()>,
}

/// The full smoke-check set.
pub const CHECKS: &[Check] = &[
    Check {
        name: "concat_names",
        run: checks::concat_names,
    },
    Check {
        name: "name_equals_literal",
        run: checks::name_equals_literal,
    },
    Check {
        name: "multiply",
        run: checks::multiply,
    },
    Check {
        name: "subtract",
        run: checks::subtract,
    },
    Check {
        name: "divide",
        run: checks::divide,
    },
];

/// Pass/fail result of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl CheckOutcome {
    fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            expected: None,
            actual: None,
        }
    }

    fn fail(name: &str, err: &Error) -> Self {
        let Error::Mismatch {
            expected, actual, ..
        } = err;
        Self {
            name: name.to_string(),
            passed: false,
            expected: Some(expected.clone()),
            actual: Some(actual.clone()),
        }
    }
}

/// Aggregate outcome of a check set run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
    pub passed: usize,
    pub failed: usize,
}

impl CheckReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Render the report as JSON for an external harness
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Run every check in the set. A failing check is recorded and does not
/// stop the remaining checks.
pub fn run_checks(checks: &[Check]) -> CheckReport {
    let mut outcomes = Vec::with_capacity(checks.len());

    for check in checks {
        let outcome = match (check.run)() {
            Ok(()) => {
                tracing::debug!("check '{}' passed", check.name);
                CheckOutcome::pass(check.name)
            }
            Err(err) => {
                tracing::error!("check '{}' failed: {}", check.name, err);
                CheckOutcome::fail(check.name, &err)
            }
        };
        outcomes.push(outcome);
    }

    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = outcomes.len() - passed;
    CheckReport {
        outcomes,
        passed,
        failed,
    }
}

/// Run the full registered check set.
pub fn run_all() -> CheckReport {
    run_checks(CHECKS)
}
