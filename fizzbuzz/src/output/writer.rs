use std::io::{self, BufWriter, StdoutLock, Write};

use super::LineSink;
use crate::core::{FizzBuzzError, FizzBuzzResult};

/// `io::Write` への出力シンク
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<BufWriter<StdoutLock<'static>>> {
    /// バッファ付きの標準出力
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout().lock()))
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> FizzBuzzResult<()> {
        writeln!(self.writer, "{line}").map_err(FizzBuzzError::output)
    }

    fn flush(&mut self) -> FizzBuzzResult<()> {
        self.writer.flush().map_err(FizzBuzzError::output)
    }
}
