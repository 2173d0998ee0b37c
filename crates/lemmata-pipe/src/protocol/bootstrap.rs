//! Session bootstrap
//!
//! The first input line names the language. The annotator for it is built
//! once; the caller announces readiness with `signal_ready`.

use std::io::{self, BufRead, Write};

use lemmata::{Annotator, AnnotatorConfig};
use tracing::{info, warn};

use super::reader::RequestReader;
use super::writer::signal_done;
use crate::errors::{PipeError, Result};

/// Reads the language identifier and builds its annotator.
///
/// Nothing is written here, so a failure leaves the output untouched.
///
/// # Errors
/// - `PipeError::StreamClosed` if input ends before the identifier
/// - `PipeError::Bootstrap` if the identifier is unsupported or its resources cannot be loaded
/// - `PipeError::Io` on read errors
pub fn bootstrap<R: BufRead>(
  reader: &mut RequestReader<R>,
  config: &AnnotatorConfig,
) -> Result<Box<dyn Annotator>> {
  let identifier = reader.read_line()?.ok_or(PipeError::StreamClosed)?;

  match lemmata::create(&identifier, config) {
    Ok(annotator) => {
      info!(identifier = %identifier, language = %annotator.language(), "Session bootstrapped");
      Ok(annotator)
    }
    Err(e) => {
      warn!(identifier = %identifier, error = %e, "Cannot create annotator");
      Err(e.into())
    }
  }
}

/// Writes the readiness handshake line.
///
/// # Errors
/// Any write error.
pub fn signal_ready<W: Write>(out: W) -> io::Result<()> {
  signal_done(out)
}
