// 出力先の抽象化

use mockall::automock;

use crate::core::FibonacciResult;

pub mod writer;

pub use writer::WriterSink;

/// 1行単位で出力を受け取るシンク
#[automock]
pub trait LineSink {
    /// 1行を書き込む（改行はシンク側で付与する）
    fn write_line(&mut self, line: &str) -> FibonacciResult<()>;

    /// バッファされた出力を書き出す
    fn flush(&mut self) -> FibonacciResult<()>;
}
