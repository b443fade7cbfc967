//! Reporting tests: line texts, stream routing, and emission order.

use minitest::{expect, Channel, Harness, HarnessError, ReportBuffer};

#[tokio::test]
async fn nested_tests_display_path_qualified_names() {
    let mut harness = Harness::new();
    harness
        .describe("A", |s| s.describe("B", |s| s.test("c", || Ok(()))))
        .unwrap();

    let mut sink = ReportBuffer::new();
    harness.run_with(&mut sink).await.unwrap();

    assert_eq!(
        sink.lines(),
        [
            (Channel::Info, "ok A > B > c".to_string()),
            (Channel::Info, "1/1 tests passed.".to_string()),
        ]
    );
}

#[tokio::test]
async fn root_level_tests_display_their_bare_name() {
    let mut harness = Harness::new();
    harness.test("solo", || Ok(())).unwrap();

    let mut sink = ReportBuffer::new();
    harness.run_with(&mut sink).await.unwrap();

    assert_eq!(sink.lines()[0], (Channel::Info, "ok solo".to_string()));
}

#[tokio::test]
async fn failure_lines_carry_the_error_detail() {
    let mut harness = Harness::new();
    harness
        .describe("math", |s| s.test("wrong", || expect(4).to_be(5)))
        .unwrap();

    let mut sink = ReportBuffer::new();
    let err = harness.run_with(&mut sink).await.unwrap_err();
    assert!(err.is_run_failure());

    assert_eq!(
        sink.lines(),
        [
            (Channel::Error, "fail math > wrong".to_string()),
            (Channel::Error, "Expected 5 but received 4.".to_string()),
            (Channel::Error, "0/1 tests passed.".to_string()),
        ]
    );
}

#[tokio::test]
async fn mixed_run_reports_in_declaration_order() {
    let mut harness = Harness::new();
    harness
        .describe("Suite1", |s| s.test("t1", || expect(1).to_be(1)))
        .unwrap();
    harness
        .describe("Suite2", |s| s.test("t2", || expect("a").to_be("b")))
        .unwrap();

    let mut sink = ReportBuffer::new();
    let err = harness.run_with(&mut sink).await.unwrap_err();
    assert!(matches!(err, HarnessError::RunFailed { failed: 1 }));
    assert!(harness.is_empty());

    assert_eq!(
        sink.lines(),
        [
            (Channel::Info, "ok Suite1 > t1".to_string()),
            (Channel::Error, "fail Suite2 > t2".to_string()),
            (
                Channel::Error,
                r#"Expected "b" but received "a"."#.to_string()
            ),
            (Channel::Error, "1/2 tests passed.".to_string()),
        ]
    );
}

#[tokio::test]
async fn success_summary_goes_to_the_info_stream() {
    let mut harness = Harness::new();
    harness.test("one", || Ok(())).unwrap();
    harness.test("two", || Ok(())).unwrap();

    let mut sink = ReportBuffer::new();
    harness.run_with(&mut sink).await.unwrap();

    assert_eq!(
        sink.lines().last(),
        Some(&(Channel::Info, "2/2 tests passed.".to_string()))
    );
}

#[tokio::test]
async fn arbitrary_body_errors_report_like_assertions() {
    let mut harness = Harness::new();
    harness
        .test("io-ish", || Err(HarnessError::failure("file vanished")))
        .unwrap();

    let mut sink = ReportBuffer::new();
    harness.run_with(&mut sink).await.unwrap_err();

    assert_eq!(
        sink.lines(),
        [
            (Channel::Error, "fail io-ish".to_string()),
            (Channel::Error, "file vanished".to_string()),
            (Channel::Error, "0/1 tests passed.".to_string()),
        ]
    );
}

#[tokio::test]
async fn empty_run_still_prints_a_summary() {
    let mut harness = Harness::new();
    let mut sink = ReportBuffer::new();
    harness.run_with(&mut sink).await.unwrap();

    assert_eq!(sink.as_text(), "0/0 tests passed.");
}
