use std::io::{BufRead, Write};

use super::{Line, LineSource};
use crate::error::ShellError;

/// Plain buffered input, used when stdin is not a terminal.
///
/// Lines are split on raw `\n` bytes and decoded lossily, so stray non-UTF-8
/// bytes become U+FFFD instead of ending the session.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Line, ShellError> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Line::Eof);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Line::Text(String::from_utf8_lossy(&buf).into_owned()))
    }
}
