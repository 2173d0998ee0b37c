//! Response writer
//!
//! Documents are streamed sentence by sentence and word by word; nothing is
//! buffered beyond the sink's own buffer.
//!
//! ```text
//! [
//! {"sentence": "Hello world.", "words": [
//! { ...word... },
//! { ...word... }
//! ]}
//! ]
//! done
//! ```

use std::io::{self, Write};

use lemmata::{Document, Sentence};
use tracing::debug;

use crate::config::DONE_SIGNAL;

/// Incremental JSON array writer.
///
/// Keeps one "no element written yet" flag per open array and puts the
/// separator before every element but the first.
pub struct JsonStreamWriter<W: Write> {
  out: W,
  first: Vec<bool>,
}

impl<W: Write> JsonStreamWriter<W> {
  /// Wraps `out`
  pub fn new(out: W) -> Self {
    Self {
      out,
      first: Vec::new(),
    }
  }

  /// Number of arrays currently open
  pub fn depth(&self) -> usize {
    self.first.len()
  }

  /// Opens an array
  pub fn begin_array(&mut self) -> io::Result<()> {
    self.out.write_all(b"[")?;
    self.first.push(true);
    Ok(())
  }

  /// Starts the next element of the innermost array.
  ///
  /// Every element starts on its own line.
  pub fn begin_element(&mut self) -> io::Result<()> {
    match self.first.last_mut() {
      Some(first) if *first => {
        *first = false;
        self.out.write_all(b"\n")
      }
      Some(_) => self.out.write_all(b",\n"),
      None => Ok(()),
    }
  }

  /// Closes the innermost array. An array without elements is written as `[]`.
  pub fn end_array(&mut self) -> io::Result<()> {
    match self.first.pop() {
      Some(true) => self.out.write_all(b"]"),
      Some(false) => self.out.write_all(b"\n]"),
      None => Err(io::Error::new(io::ErrorKind::InvalidInput, "no open array")),
    }
  }

  /// Writes already formatted JSON text
  pub fn write_raw(&mut self, json: &str) -> io::Result<()> {
    self.out.write_all(json.as_bytes())
  }

  /// Writes a JSON string literal; non-ASCII is kept as-is
  pub fn write_string(&mut self, value: &str) -> io::Result<()> {
    serde_json::to_writer(&mut self.out, value).map_err(io::Error::from)
  }

  /// Ends the current line and flushes.
  ///
  /// # Errors
  /// Write errors, or `InvalidInput` while an array is still open.
  pub fn finish(mut self) -> io::Result<W> {
    if self.depth() > 0 {
      return Err(io::Error::new(io::ErrorKind::InvalidInput, "unclosed array"));
    }
    self.out.write_all(b"\n")?;
    self.out.flush()?;
    Ok(self.out)
  }
}

/// Writes one document as a JSON array of sentence objects, then flushes.
///
/// # Errors
/// Any write error; the response is then incomplete.
pub fn write_response<W: Write>(document: &Document, sink: W) -> io::Result<()> {
  let mut json = JsonStreamWriter::new(sink);

  json.begin_array()?;
  for sentence in &document.sentences {
    json.begin_element()?;
    write_sentence(&mut json, sentence)?;
  }
  json.end_array()?;
  json.finish()?;

  debug!(
    sentences = document.sentences.len(),
    words = document.word_count(),
    "Response written"
  );
  Ok(())
}

fn write_sentence<W: Write>(json: &mut JsonStreamWriter<W>, sentence: &Sentence) -> io::Result<()> {
  json.write_raw("{\"sentence\": ")?;
  json.write_string(&sentence.text)?;
  json.write_raw(", \"words\": ")?;

  json.begin_array()?;
  for word in &sentence.words {
    json.begin_element()?;
    json.write_raw(&word.to_string())?;
  }
  json.end_array()?;

  json.write_raw("}")
}

/// Writes the `done` line and flushes.
///
/// # Errors
/// Any write error.
pub fn signal_done<W: Write>(mut out: W) -> io::Result<()> {
  writeln!(out, "{DONE_SIGNAL}")?;
  out.flush()
}

#[cfg(test)]
mod tests {
  use super::*;
  use lemmata::Word;

  fn word(id: usize, text: &str) -> Word {
    Word {
      id,
      text: text.to_string(),
      lemma: text.to_lowercase(),
      upos: "X".to_string(),
      xpos: "_".to_string(),
      feats: None,
      start_char: 0,
      end_char: text.chars().count(),
    }
  }

  fn render(document: &Document) -> String {
    let mut out = Vec::new();
    write_response(document, &mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn empty_document_is_empty_array() {
    assert_eq!(render(&Document::default()), "[]\n");
  }

  #[test]
  fn sentence_without_words() {
    let doc = Document::new(vec![Sentence::new("…", vec![])]);
    assert_eq!(render(&doc), "[\n{\"sentence\": \"…\", \"words\": []}\n]\n");
  }

  #[test]
  fn commas_only_between_elements() {
    let doc = Document::new(vec![
      Sentence::new("Hello world.", vec![word(1, "Hello"), word(2, "world"), word(3, ".")]),
      Sentence::new("Bye.", vec![word(1, "Bye"), word(2, ".")]),
    ]);
    let rendered = render(&doc);

    let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");
    let sentences = value.as_array().unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0]["words"].as_array().unwrap().len(), 3);
    assert_eq!(sentences[1]["words"].as_array().unwrap().len(), 2);
    assert_eq!(sentences[1]["words"][0]["text"], "Bye");

    // separators sit on their own line start, never trailing
    assert_eq!(rendered.matches("\n,").count(), 0);
    // 3 word separators + 1 sentence separator
    assert_eq!(rendered.matches("},\n{").count(), 4);
    assert_eq!(rendered.matches("]},\n{\"sentence\"").count(), 1);
    assert!(!rendered.contains(",\n]"));
    assert!(rendered.starts_with("[\n{\"sentence\": \"Hello world.\", \"words\": [\n{\n  \"id\": 1,"));
    assert!(rendered.ends_with("}\n]}\n]\n"));
  }

  #[test]
  fn sentence_text_is_escaped_but_keeps_non_ascii() {
    let doc = Document::new(vec![Sentence::new("「東京」は\"首都\"\\\t", vec![])]);
    let rendered = render(&doc);
    assert!(rendered.contains(r#""sentence": "「東京」は\"首都\"\\\t""#));

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value[0]["sentence"], "「東京」は\"首都\"\\\t");
  }

  #[test]
  fn word_text_is_written_verbatim() {
    let w = word(1, "naïve");
    let doc = Document::new(vec![Sentence::new("naïve", vec![w.clone()])]);
    assert!(render(&doc).contains(&w.to_string()));
  }

  #[test]
  fn stream_writer_tracks_nesting() {
    let mut json = JsonStreamWriter::new(Vec::new());
    json.begin_array().unwrap();
    json.begin_element().unwrap();
    json.begin_array().unwrap();
    assert_eq!(json.depth(), 2);
    json.end_array().unwrap();
    json.begin_element().unwrap();
    json.write_raw("1").unwrap();
    json.end_array().unwrap();
    assert_eq!(json.depth(), 0);
    assert!(json.end_array().is_err());

    let out = json.finish().unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[\n[],\n1\n]\n");
  }

  #[test]
  fn finish_rejects_open_arrays() {
    let mut json = JsonStreamWriter::new(Vec::new());
    json.begin_array().unwrap();
    json.begin_element().unwrap();
    json.write_raw("1").unwrap();
    let err = json.finish().err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
  }

  #[test]
  fn done_signal_line() {
    let mut out = Vec::new();
    signal_done(&mut out).unwrap();
    assert_eq!(out, b"done\n");
  }
}
