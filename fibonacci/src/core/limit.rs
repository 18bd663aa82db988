use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 上限値として解釈できない入力
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("上限値を整数として解釈できません: {input:?}")]
pub struct LimitParseError {
    pub input: String,
}

/// 出力する項数の上限
///
/// 負の値も保持できるが、出力される行数は0になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Limit(i64);

impl Limit {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// 実際に出力される項数
    pub fn count(self) -> usize {
        if self.0 <= 0 {
            0
        } else {
            usize::try_from(self.0).unwrap_or(usize::MAX)
        }
    }

    /// 10進整数として解釈する（前後の空白と符号は許容）
    pub fn parse(input: &str) -> Result<Self, LimitParseError> {
        input
            .trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| LimitParseError {
                input: input.to_string(),
            })
    }

    /// OS由来の引数を解釈する（UTF-8でない入力は解釈できない扱い）
    pub fn parse_os(input: &OsStr) -> Result<Self, LimitParseError> {
        match input.to_str() {
            Some(input) => Self::parse(input),
            None => Err(LimitParseError {
                input: input.to_string_lossy().into_owned(),
            }),
        }
    }

    /// 解釈できない入力は0として扱う
    pub fn parse_or_zero(input: &str) -> Self {
        Self::parse(input).unwrap_or_default()
    }
}

impl From<i64> for Limit {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for Limit {
    type Err = LimitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
