// FizzBuzz出力のエラー型定義

use std::collections::TryReserveError;
use std::fmt;
use std::io;

use thiserror::Error;

/// FizzBuzz出力で発生するエラー
///
/// いずれも実行を継続できない致命的なエラーとして扱う。
#[derive(Error, Debug)]
pub enum FizzBuzzError {
    #[error("出力エラー: {source}")]
    OutputError {
        #[source]
        source: io::Error,
    },

    #[error("ラベル用メモリの確保に失敗しました: {source}")]
    AllocationFailure {
        #[source]
        source: TryReserveError,
    },

    // 確保済みの`String`への`write!`は失敗しない。`fmt::Result`を受けるためだけの変体
    #[error("ラベルの整形に失敗しました: {source}")]
    FormatError {
        #[source]
        source: fmt::Error,
    },
}

impl FizzBuzzError {
    /// 出力エラーの作成
    pub fn output(source: io::Error) -> Self {
        Self::OutputError { source }
    }

    /// メモリ確保失敗の作成
    pub fn allocation_failure(source: TryReserveError) -> Self {
        Self::AllocationFailure { source }
    }

    /// 整形エラーの作成
    pub fn format(source: fmt::Error) -> Self {
        Self::FormatError { source }
    }
}

/// FizzBuzz出力の結果型
pub type FizzBuzzResult<T> = std::result::Result<T, FizzBuzzError>;
