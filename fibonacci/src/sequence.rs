// フィボナッチ数列の生成

use std::fmt;
use std::iter::FusedIterator;

use crate::core::Limit;

/// 数列の1項（添字は1始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub index: usize,
    pub value: u64,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}  {}", self.index, self.value)
    }
}

/// 1, 1 から始まるフィボナッチ数列を遅延生成するイテレータ
///
/// 直近2項だけを保持し、1回しか走査できない。
/// 64ビットを超える値は折り返す。
#[derive(Debug)]
pub struct Fibonacci {
    position: usize,
    len: usize,
    previous: u64,
    current: u64,
}

impl Fibonacci {
    fn new(len: usize) -> Self {
        Self {
            position: 0,
            len,
            previous: 1,
            current: 1,
        }
    }
}

impl Iterator for Fibonacci {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        if self.position >= self.len {
            return None;
        }

        let value = if self.position < 2 {
            1
        } else {
            let next = self.previous.wrapping_add(self.current);
            self.previous = self.current;
            self.current = next;
            next
        };

        self.position += 1;
        Some(Term {
            index: self.position,
            value,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fibonacci {}

impl FusedIterator for Fibonacci {}

/// 上限までの項を生成する（上限が0以下なら空）
pub fn generate_fibonacci(limit: Limit) -> Fibonacci {
    Fibonacci::new(limit.count())
}
