use super::Reporter;
use crate::core::LimitParseError;

/// 標準エラー出力へ報告する実装
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Reporter for ConsoleReporter {
    fn report_limit_fallback(&self, error: &LimitParseError) {
        if !self.quiet {
            eprintln!("⚠️  {error} (0件として扱います)");
        }
    }
}

/// 何もしない報告実装（テスト・組み込み用）
#[derive(Debug, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for NoOpReporter {
    fn report_limit_fallback(&self, _error: &LimitParseError) {
        // 何もしない
    }
}
