// フィボナッチ数列出力のエラー型定義

use thiserror::Error;

/// 数列出力で発生するエラー
#[derive(Error, Debug)]
pub enum FibonacciError {
    #[error("出力エラー: {source}")]
    OutputError {
        #[source]
        source: std::io::Error,
    },
}

impl FibonacciError {
    /// 出力エラーの作成
    pub fn output(source: std::io::Error) -> Self {
        Self::OutputError { source }
    }
}

/// 数列出力の結果型
pub type FibonacciResult<T> = std::result::Result<T, FibonacciError>;
