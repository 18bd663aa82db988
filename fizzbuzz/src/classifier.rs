// FizzBuzzの分類

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::core::{FizzBuzzError, FizzBuzzResult, Limit};
use crate::output::LineSink;

/// 1つの整数に付くラベル
pub type Label = Cow<'static, str>;

// i64::MIN の10進表現が収まる長さ
const NUMBER_LABEL_CAPACITY: usize = 20;

/// 整数を分類する
///
/// 3と5の両方で割り切れる判定を最初に行う。それ以外は10進表現を返す。
pub fn classify(n: i64) -> FizzBuzzResult<Label> {
    match (n % 3, n % 5) {
        (0, 0) => Ok(Cow::Borrowed("FizzBuzz")),
        (0, _) => Ok(Cow::Borrowed("Fizz")),
        (_, 0) => Ok(Cow::Borrowed("Buzz")),
        _ => number_label(n).map(Cow::Owned),
    }
}

fn number_label(n: i64) -> FizzBuzzResult<String> {
    let mut label = String::new();
    label
        .try_reserve_exact(NUMBER_LABEL_CAPACITY)
        .map_err(FizzBuzzError::allocation_failure)?;
    write!(label, "{n}").map_err(FizzBuzzError::format)?;
    Ok(label)
}

/// 出力1行分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: i64,
    pub label: Label,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number, self.label)
    }
}

/// 1から上限までの各行を遅延生成する（上限が1未満なら空）
pub fn lines(limit: Limit) -> impl Iterator<Item = FizzBuzzResult<Line>> {
    (1_i64..)
        .take(limit.count())
        .map(|number| classify(number).map(|label| Line { number, label }))
}

/// 1から上限までを分類してシンクへ書き込み、書き込んだ行数を返す
pub fn perform<S: LineSink + ?Sized>(limit: Limit, sink: &mut S) -> FizzBuzzResult<usize> {
    let mut lines_written = 0;
    for line in lines(limit) {
        sink.write_line(&line?.to_string())?;
        lines_written += 1;
    }
    Ok(lines_written)
}
