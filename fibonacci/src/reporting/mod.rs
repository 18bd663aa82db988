// 診断メッセージの報告（標準エラー出力向け）

use mockall::automock;

use crate::core::LimitParseError;

pub mod implementations;

pub use implementations::{ConsoleReporter, NoOpReporter};

/// 診断メッセージの報告を抽象化するトレイト
#[automock]
pub trait Reporter {
    /// 上限値が解釈できず0にフォールバックしたことを報告
    fn report_limit_fallback(&self, error: &LimitParseError);
}
