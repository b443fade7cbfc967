//! # Minitest: Suite Registry and Declaration API
//!
//! The registry is an explicit tree of suites and tests owned by a
//! [`Harness`] instance. Registry Invariant: the harness is the single
//! source of truth for pending tests. It is constructed once by the caller
//! and mutated only through the declaration methods here; never through a
//! hidden global. Each `run()` drains the whole tree, so declarations
//! accumulate between runs and every run starts the registry over empty.
//!
//! Nested declaration passes the target suite down explicitly via
//! [`SuiteScope`] instead of swapping a shared "current suite" pointer, so
//! there is no pointer to restore when a declaration body errors out.

use futures::future::LocalBoxFuture;

use crate::errors::{HarnessError, TestOutcome};

/// Reserved name of the implicit top-level suite. Never part of a
/// qualified test name.
pub(crate) const ROOT_SUITE_NAME: &str = "(root)";

/// Executable payload of a test case. Consumed exactly once, by the run
/// that drains the registry.
pub enum TestBody {
    Sync(Box<dyn FnOnce() -> TestOutcome>),
    Async(Box<dyn FnOnce() -> LocalBoxFuture<'static, TestOutcome>>),
}

impl TestBody {
    fn boxed_async<F, Fut>(body: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: std::future::Future<Output = TestOutcome> + 'static,
    {
        TestBody::Async(Box::new(move || -> LocalBoxFuture<'static, TestOutcome> {
            Box::pin(body())
        }))
    }

    pub(crate) async fn invoke(self) -> TestOutcome {
        match self {
            TestBody::Sync(body) => body(),
            TestBody::Async(body) => body().await,
        }
    }
}

impl std::fmt::Debug for TestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestBody::Sync(_) => f.write_str("TestBody::Sync"),
            TestBody::Async(_) => f.write_str("TestBody::Async"),
        }
    }
}

/// A named unit of verification logic awaiting execution.
#[derive(Debug)]
pub struct TestCase {
    pub name: String,
    pub body: TestBody,
}

/// A named grouping of tests and nested suites. Owns its children
/// exclusively; insertion order is execution order.
#[derive(Debug)]
pub struct TestSuite {
    pub name: String,
    pub tests: Vec<TestCase>,
    pub suites: Vec<TestSuite>,
}

impl TestSuite {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
            suites: Vec::new(),
        }
    }

    fn declare_suite<F>(&mut self, name: &str, body: F) -> Result<(), HarnessError>
    where
        F: FnOnce(&mut SuiteScope<'_>) -> Result<(), HarnessError>,
    {
        let name = checked_name("describe", name)?;
        let mut suite = TestSuite::new(name);
        let outcome = body(&mut SuiteScope { suite: &mut suite });
        // The suite is kept even when its declaration body errored partway:
        // whatever was declared before the error stays registered.
        self.suites.push(suite);
        outcome
    }

    fn declare_test(&mut self, name: &str, body: TestBody) -> Result<(), HarnessError> {
        let name = checked_name("test", name)?;
        self.tests.push(TestCase { name, body });
        Ok(())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tests.is_empty() && self.suites.is_empty()
    }
}

/// Declaration target handed to `describe` bodies. Offers the same
/// declaration surface as [`Harness`], aimed at the suite being declared.
pub struct SuiteScope<'a> {
    suite: &'a mut TestSuite,
}

impl SuiteScope<'_> {
    /// Declares a nested suite. Nesting depth is unbounded.
    pub fn describe<F>(&mut self, name: &str, body: F) -> Result<(), HarnessError>
    where
        F: FnOnce(&mut SuiteScope<'_>) -> Result<(), HarnessError>,
    {
        self.suite.declare_suite(name, body)
    }

    /// Declares a synchronous test in this suite. The body is not invoked
    /// until the next `run()`.
    pub fn test<F>(&mut self, name: &str, body: F) -> Result<(), HarnessError>
    where
        F: FnOnce() -> TestOutcome + 'static,
    {
        self.suite.declare_test(name, TestBody::Sync(Box::new(body)))
    }

    /// Declares an asynchronous test in this suite. The future is created
    /// and awaited by the runner, one test at a time.
    pub fn test_async<F, Fut>(&mut self, name: &str, body: F) -> Result<(), HarnessError>
    where
        F: FnOnce() -> Fut + 'static,
        Fut: std::future::Future<Output = TestOutcome> + 'static,
    {
        self.suite.declare_test(name, TestBody::boxed_async(body))
    }
}

/// The harness instance: owns the registry tree and the run machinery.
///
/// # Example
/// ```
/// use minitest::{expect, Harness};
///
/// let mut harness = Harness::new();
/// harness.test("addition", || expect(2 + 2).to_be(4)).unwrap();
/// ```
#[derive(Debug)]
pub struct Harness {
    pub(crate) root: TestSuite,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            root: TestSuite::new(ROOT_SUITE_NAME),
        }
    }

    /// Declares a top-level suite. The body runs synchronously, declaring
    /// tests and nested suites into the new suite via its scope argument.
    ///
    /// Fails with [`HarnessError::InvalidName`] before the body runs when
    /// the name is empty or whitespace-only.
    pub fn describe<F>(&mut self, name: &str, body: F) -> Result<(), HarnessError>
    where
        F: FnOnce(&mut SuiteScope<'_>) -> Result<(), HarnessError>,
    {
        self.root.declare_suite(name, body)
    }

    /// Declares a root-level synchronous test; its display name is just
    /// its own name.
    pub fn test<F>(&mut self, name: &str, body: F) -> Result<(), HarnessError>
    where
        F: FnOnce() -> TestOutcome + 'static,
    {
        self.root.declare_test(name, TestBody::Sync(Box::new(body)))
    }

    /// Declares a root-level asynchronous test.
    pub fn test_async<F, Fut>(&mut self, name: &str, body: F) -> Result<(), HarnessError>
    where
        F: FnOnce() -> Fut + 'static,
        Fut: std::future::Future<Output = TestOutcome> + 'static,
    {
        self.root.declare_test(name, TestBody::boxed_async(body))
    }

    /// True when no suites or tests are awaiting execution.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Takes the whole pending tree out, leaving a fresh empty root.
    /// This is the registry reset; `run()` performs it up front so the
    /// registry is clean no matter how the traversal ends.
    pub(crate) fn drain(&mut self) -> TestSuite {
        std::mem::replace(&mut self.root, TestSuite::new(ROOT_SUITE_NAME))
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Fail-fast name validation shared by `describe` and `test`.
fn checked_name(call: &'static str, name: &str) -> Result<String, HarnessError> {
    if name.trim().is_empty() {
        return Err(HarnessError::invalid_name(call));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_preserve_insertion_order() {
        let mut harness = Harness::new();
        harness.test("first", || Ok(())).unwrap();
        harness.test("second", || Ok(())).unwrap();
        harness
            .describe("group", |s| {
                s.test("third", || Ok(()))?;
                s.describe("inner", |s| s.test("fourth", || Ok(())))
            })
            .unwrap();

        let names: Vec<_> = harness.root.tests.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        let group = &harness.root.suites[0];
        assert_eq!(group.name, "group");
        assert_eq!(group.tests[0].name, "third");
        assert_eq!(group.suites[0].name, "inner");
        assert_eq!(group.suites[0].tests[0].name, "fourth");
    }

    #[test]
    fn blank_names_fail_fast_and_register_nothing() {
        let mut harness = Harness::new();
        for bad in ["", "   ", "\t\n"] {
            assert!(matches!(
                harness.test(bad, || Ok(())),
                Err(HarnessError::InvalidName { call: "test" })
            ));
            assert!(matches!(
                harness.describe(bad, |_| Ok(())),
                Err(HarnessError::InvalidName { call: "describe" })
            ));
        }
        assert!(harness.is_empty());
    }

    #[test]
    fn invalid_name_raises_before_the_body_runs() {
        let mut harness = Harness::new();
        let mut entered = false;
        let result = harness.describe("  ", |_| {
            entered = true;
            Ok(())
        });
        assert!(result.is_err());
        assert!(!entered);
    }

    #[test]
    fn erroring_describe_body_keeps_earlier_declarations() {
        let mut harness = Harness::new();
        let result = harness.describe("partial", |s| {
            s.test("kept", || Ok(()))?;
            s.test("", || Ok(()))
        });
        assert!(result.is_err());
        // The suite itself and the test declared before the error survive.
        assert_eq!(harness.root.suites.len(), 1);
        assert_eq!(harness.root.suites[0].tests.len(), 1);
        assert_eq!(harness.root.suites[0].tests[0].name, "kept");
    }

    #[test]
    fn test_bodies_are_not_invoked_at_declaration_time() {
        use std::cell::Cell;
        use std::rc::Rc;

        let ran = Rc::new(Cell::new(false));
        let seen = ran.clone();
        let mut harness = Harness::new();
        harness
            .test("lazy", move || {
                seen.set(true);
                Ok(())
            })
            .unwrap();
        assert!(!ran.get());
    }
}
