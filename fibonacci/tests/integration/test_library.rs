// ライブラリAPIの統合テスト
use fibonacci::{
    cli::parse_limit,
    generate_fibonacci,
    output::WriterSink,
    reporting::NoOpReporter,
    App, FibonacciConfig, Limit,
};

#[test]
fn test_parse_then_run() {
    let limit = parse_limit(["fibonacci", "7"]);
    assert_eq!(limit, Limit::new(7));

    let mut app = App::new(WriterSink::new(Vec::new()), NoOpReporter::new());
    let summary = app.run(&FibonacciConfig::new().with_limit(limit)).unwrap();
    assert_eq!(summary.lines_written, 7);

    let output = String::from_utf8(app.sink.into_inner()).unwrap();
    assert_eq!(output.lines().last(), Some("    7  13"));
}

#[test]
fn test_non_numeric_limit_runs_empty() {
    let limit = parse_limit(["fibonacci", "lots"]);

    let mut app = App::new(WriterSink::new(Vec::new()), NoOpReporter::new());
    let summary = app.run(&FibonacciConfig::new().with_limit(limit)).unwrap();
    assert_eq!(summary.lines_written, 0);
    assert!(app.sink.into_inner().is_empty());
}

#[test]
fn test_sequence_matches_recurrence() {
    let terms: Vec<_> = generate_fibonacci(Limit::new(30)).collect();

    for window in terms.windows(3) {
        assert_eq!(window[2].value, window[0].value + window[1].value);
        assert_eq!(window[2].index, window[1].index + 1);
    }
}
