//! Session loop
//!
//! `Ready → (Reading → Annotating → Writing)* → Terminated`

use std::io::{BufRead, Write};
use std::time::Instant;

use lemmata::Annotator;
use tracing::{debug, info, warn};

use super::bootstrap::signal_ready;
use super::reader::RequestReader;
use super::writer::{signal_done, write_response};
use crate::encoding::ResponseSink;
use crate::errors::{PipeError, Result};

/// Protocol state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
  /// Annotator built by `bootstrap`, handshake not yet sent
  Bootstrapping,
  /// Handshake sent
  Ready,
  /// Waiting for a request block
  Reading,
  /// Annotating a request
  Annotating,
  /// Streaming the response
  Writing,
  /// Input closed, or a read/write error ended the session
  Terminated,
}

/// One request/response session over a fixed annotator.
///
/// - `reader`: request input
/// - `payload`: where response arrays go
/// - `signal`: where `done` lines go (standard output in production)
pub struct Session<R, P, S> {
  reader: RequestReader<R>,
  annotator: Box<dyn Annotator>,
  payload: P,
  signal: S,
  state: SessionState,
  served: u64,
}

impl<R, P, S> Session<R, P, S>
where
  R: BufRead,
  P: ResponseSink,
  S: Write,
{
  /// Creates a session around a bootstrapped annotator
  pub fn new(reader: RequestReader<R>, annotator: Box<dyn Annotator>, payload: P, signal: S) -> Self {
    Self {
      reader,
      annotator,
      payload,
      signal,
      state: SessionState::Bootstrapping,
      served: 0,
    }
  }

  /// Current state
  pub fn state(&self) -> SessionState {
    self.state
  }

  /// Number of responses written so far
  pub fn served(&self) -> u64 {
    self.served
  }

  /// Sends the readiness handshake
  ///
  /// # Errors
  /// Write errors on the signal channel.
  pub fn announce_ready(&mut self) -> Result<()> {
    if let Err(e) = signal_ready(&mut self.signal) {
      let e: PipeError = e.into();
      self.abort(&e);
      return Err(e);
    }
    self.state = SessionState::Ready;
    Ok(())
  }

  /// Serves one request. Returns `false` once input has ended.
  ///
  /// # Errors
  /// Any read or write error. The response may be incomplete and the session
  /// must not continue.
  pub fn serve_one(&mut self) -> Result<bool> {
    self.cycle().inspect_err(|e| self.abort(e))
  }

  fn cycle(&mut self) -> Result<bool> {
    self.state = SessionState::Reading;
    let Some(request) = self.reader.read_request()? else {
      self.state = SessionState::Terminated;
      return Ok(false);
    };

    let started = Instant::now();
    self.state = SessionState::Annotating;
    let document = self.annotator.annotate(request.as_str());

    self.state = SessionState::Writing;
    self.payload.begin_response()?;
    write_response(&document, &mut self.payload)?;
    signal_done(&mut self.signal)?;

    self.served += 1;
    debug!(
      request = self.served,
      lines = request.line_count(),
      sentences = document.sentences.len(),
      words = document.word_count(),
      elapsed_ms = started.elapsed().as_millis() as u64,
      "Request served"
    );
    Ok(true)
  }

  /// Announces readiness, then serves requests until input ends.
  ///
  /// Returns the number of responses written.
  ///
  /// # Errors
  /// The first read or write error; it ends the session.
  pub fn run(mut self) -> Result<u64> {
    self.announce_ready()?;
    while self.serve_one()? {}

    info!(served = self.served(), "Input closed, session finished");
    Ok(self.served())
  }

  fn abort(&mut self, error: &PipeError) {
    warn!(state = ?self.state(), served = self.served(), error = %error, "Session aborted");
    self.state = SessionState::Terminated;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::encoding::InputDecoding;
  use lemmata::{Document, Language, Sentence, Word};
  use std::io::{self, Cursor};

  /// Splits on "|" into sentences and on spaces into words
  struct StubAnnotator;

  impl Annotator for StubAnnotator {
    fn language(&self) -> Language {
      Language::En
    }

    fn annotate(&self, text: &str) -> Document {
      let sentences = text
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
          let words = s
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| Word {
              id: i + 1,
              text: w.to_string(),
              lemma: w.to_string(),
              upos: "X".to_string(),
              xpos: "_".to_string(),
              feats: None,
              start_char: 0,
              end_char: 0,
            })
            .collect();
          Sentence::new(s, words)
        })
        .collect();
      Document::new(sentences)
    }
  }

  fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>> {
    let reader = RequestReader::new(Cursor::new(input.as_bytes().to_vec()), InputDecoding::Utf8);
    let annotator = Box::new(StubAnnotator);
    Session::new(reader, annotator, Vec::new(), Vec::new())
  }

  #[test]
  fn no_requests() {
    let mut s = session("");
    s.announce_ready().unwrap();
    assert_eq!(s.state(), SessionState::Ready);
    assert!(!s.serve_one().unwrap());
    assert_eq!(s.state(), SessionState::Terminated);
    assert_eq!(s.signal, b"done\n");
    assert!(s.payload.is_empty());
  }

  #[test]
  fn one_done_per_request() {
    let mut s = session("a b | c\n\n\nd\n\n");
    s.announce_ready().unwrap();
    while s.serve_one().unwrap() {}

    assert_eq!(s.served(), 3);
    assert_eq!(String::from_utf8(s.signal.clone()).unwrap(), "done\ndone\ndone\ndone\n");

    let payload = String::from_utf8(s.payload.clone()).unwrap();
    let responses: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&payload)
      .into_iter::<serde_json::Value>()
      .collect::<std::result::Result<_, _>>()
      .unwrap();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0].as_array().unwrap().len(), 2);
    assert_eq!(responses[0][0]["words"].as_array().unwrap().len(), 2);
    assert_eq!(responses[1], serde_json::json!([]));
    assert_eq!(responses[2][0]["sentence"], "d");
  }

  #[test]
  fn same_text_twice_same_response() {
    let mut s = session("x y\n\nx y\n\n");
    s.announce_ready().unwrap();
    while s.serve_one().unwrap() {}

    let payload = String::from_utf8(s.payload.clone()).unwrap();
    let (first, second) = payload.split_at(payload.len() / 2);
    assert_eq!(first, second);
  }

  struct FailingSink;

  impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  impl ResponseSink for FailingSink {}

  #[test]
  fn write_failure_terminates_the_session() {
    let reader = RequestReader::new(Cursor::new(b"a\n\n".to_vec()), InputDecoding::Utf8);
    let mut s = Session::new(reader, Box::new(StubAnnotator), FailingSink, Vec::new());
    assert_eq!(s.state(), SessionState::Bootstrapping);
    s.announce_ready().unwrap();

    let err = s.serve_one().unwrap_err();
    assert_eq!(err.kind(), crate::errors::PipeErrorKind::Io);
    assert_eq!(s.state(), SessionState::Terminated);
    assert_eq!(s.served(), 0);
  }

  #[test]
  fn handshake_failure_terminates_the_session() {
    let reader = RequestReader::new(Cursor::new(Vec::new()), InputDecoding::Utf8);
    let mut s = Session::new(reader, Box::new(StubAnnotator), Vec::new(), FailingSink);

    assert!(s.announce_ready().is_err());
    assert_eq!(s.state(), SessionState::Terminated);
  }

  #[test]
  fn write_failure_ends_the_session() {
    let reader = RequestReader::new(Cursor::new(b"a\n\nb\n\n".to_vec()), InputDecoding::Utf8);
    let annotator = Box::new(StubAnnotator);
    let s = Session::new(reader, annotator, FailingSink, Vec::new());

    let err = s.run().unwrap_err();
    assert_eq!(err.exit_code(), 2);
  }
}
