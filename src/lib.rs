//! Minitest: a minimal embeddable test harness.
//!
//! Declare tests (optionally nested in suites) on a [`Harness`] instance,
//! then `run()` them all: strictly sequential execution, path-qualified
//! display names, same-value assertions, console-style reporting, and a
//! registry that resets after every run.

pub use crate::errors::{HarnessError, TestOutcome};
pub use crate::expect::{expect, Expectation, SameValue};
pub use crate::output::{Channel, ConsoleSink, ReportBuffer, ReportSink};
pub use crate::registry::{Harness, SuiteScope, TestBody, TestCase, TestSuite};
pub use crate::runner::TestRunResult;

pub mod errors;
pub mod expect;
pub mod output;
pub mod registry;
pub mod runner;
