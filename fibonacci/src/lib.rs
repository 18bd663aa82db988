pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod reporting;
pub mod sequence;

pub use config::{FibonacciConfig, DEFAULT_LIMIT};
pub use crate::core::{FibonacciError, FibonacciResult, Limit, LimitParseError};
pub use sequence::{generate_fibonacci, Fibonacci, Term};

use cli::Cli;
use output::LineSink;
use reporting::Reporter;

/// 1回の実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_written: usize,
}

// 出力先と報告先を直接所有するアプリケーション本体
pub struct App<S, R>
where
    S: LineSink,
    R: Reporter,
{
    pub sink: S,
    pub reporter: R,
}

impl<S, R> App<S, R>
where
    S: LineSink,
    R: Reporter,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(sink: S, reporter: R) -> Self {
        Self { sink, reporter }
    }

    /// コマンドライン引数から設定を解決する（警告は報告先へ）
    pub fn configure(&self, cli: &Cli) -> FibonacciConfig {
        FibonacciConfig::from_cli(cli, &self.reporter)
    }

    /// 設定された項数だけ数列を出力する
    pub fn run(&mut self, config: &FibonacciConfig) -> FibonacciResult<RunSummary> {
        let mut lines_written = 0;
        for term in generate_fibonacci(config.limit()) {
            self.sink.write_line(&term.to_string())?;
            lines_written += 1;
        }
        self.sink.flush()?;

        Ok(RunSummary { lines_written })
    }
}
