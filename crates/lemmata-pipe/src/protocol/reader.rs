//! Request reader
//!
//! Requests are runs of lines ended by one blank line. End of input is
//! reported as `None`, never as an error.

use std::io::{self, BufRead};

use crate::encoding::InputDecoding;

/// Text of one request: every line followed by `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestText {
  text: String,
}

impl RequestText {
  /// Returns the text
  pub fn as_str(&self) -> &str {
    &self.text
  }

  /// Returns `true` for an empty block (a bare blank line)
  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  /// Number of lines in the block
  pub fn line_count(&self) -> usize {
    self.text.lines().count()
  }

  fn push_line(&mut self, line: &str) {
    self.text.push_str(line);
    self.text.push('\n');
  }
}

/// Reads decoded lines and request blocks from a byte stream.
pub struct RequestReader<R> {
  input: R,
  decoding: InputDecoding,
  buf: Vec<u8>,
}

impl<R: BufRead> RequestReader<R> {
  /// Wraps `input`; every line goes through `decoding`.
  pub fn new(input: R, decoding: InputDecoding) -> Self {
    Self {
      input,
      decoding,
      buf: Vec::new(),
    }
  }

  /// Reads one line without its terminator. `None` at end of input.
  ///
  /// # Errors
  /// I/O errors of the underlying stream.
  pub fn read_line(&mut self) -> io::Result<Option<String>> {
    self.buf.clear();
    let n = self.input.read_until(b'\n', &mut self.buf)?;
    if n == 0 {
      return Ok(None);
    }
    Ok(Some(self.decoding.adapt_input(&self.buf)))
  }

  /// Reads lines up to the next blank line.
  ///
  /// - `Some(text)`: a block, possibly empty; a block cut off by end of input is returned too
  /// - `None`: input ended before any line of a new block
  ///
  /// # Errors
  /// I/O errors of the underlying stream.
  pub fn read_request(&mut self) -> io::Result<Option<RequestText>> {
    let mut request = RequestText::default();
    let mut had_input = false;

    while let Some(line) = self.read_line()? {
      had_input = true;
      if line.is_empty() {
        return Ok(Some(request));
      }
      request.push_line(&line);
    }

    Ok(had_input.then_some(request))
  }
}
