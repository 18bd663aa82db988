// ライブラリAPIの統合テスト
use fizzbuzz::{
    classify,
    cli::parse_limit,
    lines,
    output::WriterSink,
    reporting::NoOpReporter,
    App, FizzBuzzConfig, FizzBuzzResult, Limit,
};

#[test]
fn test_parse_then_run() {
    let limit = parse_limit(["fizzbuzz", "30"]);

    let mut app = App::new(WriterSink::new(Vec::new()), NoOpReporter::new());
    let summary = app.run(&FizzBuzzConfig::new().with_limit(limit)).unwrap();
    assert_eq!(summary.lines_written, 30);

    let output = String::from_utf8(app.sink.into_inner()).unwrap();
    let fizzbuzz_count = output.lines().filter(|l| l.ends_with(": FizzBuzz")).count();
    assert_eq!(fizzbuzz_count, 2);
}

#[test]
fn test_labels_follow_divisibility() {
    let lines: Vec<_> = lines(Limit::new(300))
        .collect::<FizzBuzzResult<_>>()
        .unwrap();

    for line in &lines {
        let expected = match (line.number % 3 == 0, line.number % 5 == 0) {
            (true, true) => "FizzBuzz".to_string(),
            (true, false) => "Fizz".to_string(),
            (false, true) => "Buzz".to_string(),
            (false, false) => line.number.to_string(),
        };
        assert_eq!(line.label, expected.as_str(), "n = {}", line.number);
    }
}

#[test]
fn test_classify_spot_checks() {
    assert_eq!(classify(15).unwrap(), "FizzBuzz");
    assert_eq!(classify(9).unwrap(), "Fizz");
    assert_eq!(classify(10).unwrap(), "Buzz");
    assert_eq!(classify(7).unwrap(), "7");
}
