// 実行設定

use crate::cli::Cli;
use crate::core::Limit;
use crate::reporting::Reporter;

/// 上限が指定されなかったときに分類する最後の整数
pub const DEFAULT_LIMIT: Limit = Limit::new(100);

/// FizzBuzz出力の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FizzBuzzConfig {
    limit: Limit,
}

impl FizzBuzzConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// コマンドライン引数から設定を組み立てる
    pub fn from_cli<R: Reporter + ?Sized>(cli: &Cli, reporter: &R) -> Self {
        Self::new().with_limit(cli.resolve_limit(reporter))
    }

    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }
}

impl Default for FizzBuzzConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}
