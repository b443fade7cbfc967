//! Minitest Error Handling - Unified Harness Error API
//!
//! Every failure the harness can produce is a variant of [`HarnessError`]:
//! declaration-time name validation, assertion mismatches, arbitrary
//! test-body failures, and the run-level error raised when a batch had at
//! least one failing test. The runner only needs to know "this test
//! errored", but the variant is preserved for tooling and output.

use miette::Diagnostic;
use thiserror::Error;

/// Outcome of a single test body.
pub type TestOutcome = Result<(), HarnessError>;

/// The single error type for the whole harness.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// A `describe`/`test` call was given an empty or whitespace-only name.
    /// Raised synchronously at declaration time; nothing is registered.
    #[error("{call}() requires a non-empty name.")]
    #[diagnostic(code(harness::invalid_name))]
    InvalidName { call: &'static str },

    /// An `expect(..).to_be(..)` comparison did not hold.
    #[error("{message}")]
    #[diagnostic(code(harness::assertion))]
    Assertion { message: String },

    /// Any other error a test body chose to surface. Treated by the runner
    /// exactly like an assertion failure: the test fails, the run goes on.
    #[error("{message}")]
    #[diagnostic(code(harness::failure))]
    Failure { message: String },

    /// Terminal signal from `run()` itself: one or more tests failed.
    /// Emitted only after all per-test output and the registry reset.
    #[error("{failed} test(s) failed.")]
    #[diagnostic(code(harness::run_failed))]
    RunFailed { failed: usize },
}

impl HarnessError {
    pub fn invalid_name(call: &'static str) -> Self {
        Self::InvalidName { call }
    }

    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }

    /// Wraps an arbitrary failure message from a test body.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn run_failed(failed: usize) -> Self {
        Self::RunFailed { failed }
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion { .. })
    }

    pub fn is_run_failure(&self) -> bool {
        matches!(self, Self::RunFailed { .. })
    }
}
