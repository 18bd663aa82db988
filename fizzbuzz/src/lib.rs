pub mod classifier;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod reporting;

pub use crate::classifier::{classify, lines, perform, Label, Line};
pub use crate::config::{FizzBuzzConfig, DEFAULT_LIMIT};
pub use crate::core::{FizzBuzzError, FizzBuzzResult, Limit, LimitParseError};

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
    pub fn configure(&self, cli: &Cli) -> FizzBuzzConfig {
        FizzBuzzConfig::from_cli(cli, &self.reporter)
    }

    /// 1から上限までを分類して出力する
    pub fn run(&mut self, config: &FizzBuzzConfig) -> FizzBuzzResult<RunSummary> {
        let lines_written = perform(config.limit(), &mut self.sink)?;
        self.sink.flush()?;

        Ok(RunSummary { lines_written })
    }
}
