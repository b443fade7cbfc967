//! Runner: depth-first, strictly sequential execution of the registry.
//!
//! A run drains the harness tree up front (the registry reset, guaranteed
//! regardless of how the traversal ends), walks it pre-order, awaits each
//! test body to completion before the next, reports one line per test plus
//! a summary, and signals overall failure through the returned `Result`.

use futures::future::LocalBoxFuture;

use crate::errors::HarnessError;
use crate::output::{ConsoleSink, ReportSink};
use crate::registry::{Harness, TestSuite, ROOT_SUITE_NAME};

/// Counters accumulated over one run. `total == passed + failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestRunResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Harness {
    /// Runs every registered test, reporting to the console.
    ///
    /// Resolves with the counters when everything passed; fails with
    /// [`HarnessError::RunFailed`] when at least one test failed. Either
    /// way the registry is empty afterwards.
    pub async fn run(&mut self) -> Result<TestRunResult, HarnessError> {
        let mut sink = ConsoleSink::default();
        self.run_with(&mut sink).await
    }

    /// Same as [`Harness::run`], reporting to a caller-supplied sink.
    pub async fn run_with(
        &mut self,
        sink: &mut dyn ReportSink,
    ) -> Result<TestRunResult, HarnessError> {
        // Draining is the reset: the registry is already clean for the
        // next run before the first test executes.
        let root = self.drain();

        let mut result = TestRunResult::default();
        let mut path = Vec::new();
        run_suite(root, &mut path, &mut result, sink).await;

        let summary = format!("{}/{} tests passed.", result.passed, result.total);
        if result.failed > 0 {
            sink.error(&summary);
            return Err(HarnessError::run_failed(result.failed));
        }
        sink.info(&summary);
        Ok(result)
    }
}

/// Pre-order traversal: a suite's own tests in declared order, then each
/// child suite fully, children in declared order. Boxed because the
/// recursion is async.
fn run_suite<'a>(
    suite: TestSuite,
    path: &'a mut Vec<String>,
    result: &'a mut TestRunResult,
    sink: &'a mut dyn ReportSink,
) -> LocalBoxFuture<'a, ()> {
    Box::pin(async move {
        let TestSuite {
            name,
            tests,
            suites,
        } = suite;
        let named = name != ROOT_SUITE_NAME;
        if named {
            path.push(name);
        }

        for case in tests {
            let full_name = qualified_name(path, &case.name);
            result.total += 1;
            match case.body.invoke().await {
                Ok(()) => {
                    result.passed += 1;
                    sink.info(&format!("ok {}", full_name));
                }
                Err(err) => {
                    result.failed += 1;
                    sink.error(&format!("fail {}", full_name));
                    sink.error(&err.to_string());
                }
            }
        }

        for child in suites {
            run_suite(child, path, result, sink).await;
        }

        if named {
            path.pop();
        }
    })
}

/// Joins ancestor suite names and the test name with `" > "`; a root-level
/// test displays just its own name.
fn qualified_name(path: &[String], name: &str) -> String {
    if path.is_empty() {
        return name.to_string();
    }
    format!("{} > {}", path.join(" > "), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_joins_path_segments() {
        let path = vec!["A".to_string(), "B".to_string()];
        assert_eq!(qualified_name(&path, "c"), "A > B > c");
    }

    #[test]
    fn root_level_tests_display_bare_names() {
        assert_eq!(qualified_name(&[], "solo"), "solo");
    }
}
