use std::ffi::{OsStr, OsString};
use std::iter;

use clap::Parser;

use crate::config::DEFAULT_LIMIT;
use crate::core::{Limit, LimitParseError};
use crate::reporting::Reporter;

#[derive(Parser, Debug)]
#[command(name = "fibonacci")]
#[command(about = "Print the Fibonacci sequence up to the given number of terms")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Number of terms to print (non-numeric input prints nothing)
    #[arg(value_name = "LIMIT")]
    pub limit: Option<OsString>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<OsString>,
}

impl Cli {
    /// 引数列（先頭はプログラム名）から組み立てる
    ///
    /// プログラム名の直後に `--` を挟むので、`--` や `-h` を含む全トークンが位置引数になる。
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next().unwrap_or_else(|| OsString::from("fibonacci"));

        let args = iter::once(program)
            .chain(iter::once(OsString::from("--")))
            .chain(args);
        Self::try_parse_from(args)
    }

    /// 上限値を解決する。解釈できない入力は警告を報告して0とする
    pub fn resolve_limit<R: Reporter + ?Sized>(&self, reporter: &R) -> Limit {
        limit_from_arg(self.limit.as_deref()).unwrap_or_else(|error| {
            reporter.report_limit_fallback(&error);
            Limit::default()
        })
    }
}

/// 引数列（先頭はプログラム名）から上限値を求める
pub fn parse_limit<I, S>(args: I) -> Limit
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let first = args.into_iter().nth(1);
    limit_from_arg(first.as_ref().map(|arg| arg.as_ref())).unwrap_or_default()
}

fn limit_from_arg(arg: Option<&OsStr>) -> Result<Limit, LimitParseError> {
    arg.map_or(Ok(DEFAULT_LIMIT), Limit::parse_os)
}
