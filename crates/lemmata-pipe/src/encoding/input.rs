//! Input line decoding

use std::borrow::Cow;

use encoding_rs::{Encoding, WINDOWS_1252};

/// How raw input lines become text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDecoding {
  /// Lines are UTF-8; invalid sequences are replaced with U+FFFD
  Utf8,
  /// Lines that are not valid UTF-8 are re-decoded from a legacy 8-bit encoding
  Legacy(&'static Encoding),
}

impl InputDecoding {
  /// Windows pipes may carry ANSI code page bytes; every other platform is UTF-8.
  pub fn platform_default() -> Self {
    if cfg!(windows) {
      Self::Legacy(WINDOWS_1252)
    } else {
      Self::Utf8
    }
  }

  /// Converts one raw line (with or without its line terminator) into text.
  ///
  /// The trailing `\n` or `\r\n` is removed. Valid UTF-8 always passes through unchanged.
  pub fn adapt_input(&self, raw_line: &[u8]) -> String {
    let line = strip_line_ending(raw_line);

    match self {
      Self::Utf8 => String::from_utf8_lossy(line).into_owned(),
      Self::Legacy(encoding) => match std::str::from_utf8(line) {
        Ok(text) => text.to_owned(),
        Err(_) => {
          let decoded: Cow<'_, str> = encoding.decode_without_bom_handling(line).0;
          decoded.into_owned()
        }
      },
    }
  }
}

fn strip_line_ending(raw: &[u8]) -> &[u8] {
  let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
  raw.strip_suffix(b"\r").unwrap_or(raw)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn utf8_passes_through() {
    assert_eq!(InputDecoding::Utf8.adapt_input("héllo 東京\n".as_bytes()), "héllo 東京");
  }

  #[test]
  fn line_endings_are_stripped() {
    assert_eq!(InputDecoding::Utf8.adapt_input(b"en\r\n"), "en");
    assert_eq!(InputDecoding::Utf8.adapt_input(b"en\n"), "en");
    assert_eq!(InputDecoding::Utf8.adapt_input(b"en"), "en");
    assert_eq!(InputDecoding::Utf8.adapt_input(b"\n"), "");
    assert_eq!(InputDecoding::Utf8.adapt_input(b"\r\n"), "");
  }

  #[test]
  fn utf8_replaces_invalid_bytes() {
    assert_eq!(InputDecoding::Utf8.adapt_input(b"caf\xe9\n"), "caf\u{fffd}");
  }

  #[test]
  fn legacy_redecodes_invalid_utf8() {
    let decoding = InputDecoding::Legacy(WINDOWS_1252);
    // 0xE9 = é, 0x80 = € in windows-1252
    assert_eq!(decoding.adapt_input(b"caf\xe9 \x80\r\n"), "café €");
  }

  #[test]
  fn legacy_keeps_valid_utf8() {
    let decoding = InputDecoding::Legacy(WINDOWS_1252);
    assert_eq!(decoding.adapt_input("café\n".as_bytes()), "café");
  }

  #[test]
  fn platform_default_matches_target() {
    let expected = if cfg!(windows) {
      InputDecoding::Legacy(WINDOWS_1252)
    } else {
      InputDecoding::Utf8
    };
    assert_eq!(InputDecoding::platform_default(), expected);
  }
}
