//! Response payload sinks

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Where response payloads are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
  /// The process's standard output
  Stdout,
  /// A UTF-8 file that always holds the latest response
  File(PathBuf),
}

impl OutputTarget {
  /// Windows consoles and pipes cannot be trusted with Unicode, so payloads go to `file_path` there.
  pub fn platform_default(file_path: PathBuf) -> Self {
    if cfg!(windows) {
      Self::File(file_path)
    } else {
      Self::Stdout
    }
  }

  /// Opens the sink. It stays open for the rest of the process.
  ///
  /// # Errors
  /// The file target cannot be created or truncated.
  pub fn open_output_sink(&self) -> io::Result<OutputSink> {
    let sink = match self {
      Self::Stdout => OutputSink::Stdout(io::stdout()),
      Self::File(path) => {
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
        OutputSink::File {
          path: path.clone(),
          file: BufWriter::new(file),
        }
      }
    };
    Ok(sink)
  }
}

/// A payload destination that is told where each response starts.
pub trait ResponseSink: Write {
  /// Called before the first byte of every response.
  fn begin_response(&mut self) -> io::Result<()> {
    Ok(())
  }
}

/// In-memory sink, keeps every response.
impl ResponseSink for Vec<u8> {}

/// The sink selected by `OutputTarget`.
pub enum OutputSink {
  /// Standard output
  Stdout(io::Stdout),
  /// Dedicated UTF-8 file
  File {
    /// File location
    path: PathBuf,
    /// Open handle
    file: BufWriter<File>,
  },
}

impl OutputSink {
  /// File path of a file sink
  pub fn path(&self) -> Option<&Path> {
    match self {
      Self::Stdout(_) => None,
      Self::File { path, .. } => Some(path),
    }
  }
}

impl Write for OutputSink {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    match self {
      Self::Stdout(out) => out.write(buf),
      Self::File { file, .. } => file.write(buf),
    }
  }

  fn flush(&mut self) -> io::Result<()> {
    match self {
      Self::Stdout(out) => out.flush(),
      Self::File { file, .. } => file.flush(),
    }
  }
}

impl ResponseSink for OutputSink {
  /// A file sink is emptied so it only ever holds one response.
  fn begin_response(&mut self) -> io::Result<()> {
    match self {
      Self::Stdout(_) => Ok(()),
      Self::File { file, .. } => {
        file.flush()?;
        file.get_ref().set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        Ok(())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn platform_default_target() {
    let path = PathBuf::from("/tmp/out.json");
    let target = OutputTarget::platform_default(path.clone());
    if cfg!(windows) {
      assert_eq!(target, OutputTarget::File(path));
    } else {
      assert_eq!(target, OutputTarget::Stdout);
    }
  }

  #[test]
  fn file_sink_holds_only_the_latest_response() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.json");
    std::fs::write(&path, "stale content from a previous run").unwrap();

    let mut sink = OutputTarget::File(path.clone()).open_output_sink().unwrap();
    assert_eq!(sink.path(), Some(path.as_path()));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

    sink.begin_response().unwrap();
    sink.write_all("[\"first, longer response\"]\n".as_bytes()).unwrap();
    sink.flush().unwrap();

    sink.begin_response().unwrap();
    sink.write_all("[\"東京\"]\n".as_bytes()).unwrap();
    sink.flush().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\"東京\"]\n");
  }

  #[test]
  fn file_sink_in_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let target = OutputTarget::File(temp.path().join("missing").join("out.json"));
    assert!(target.open_output_sink().is_err());
  }

  #[test]
  fn vec_sink_accumulates() {
    let mut sink: Vec<u8> = Vec::new();
    sink.begin_response().unwrap();
    sink.write_all(b"[]").unwrap();
    sink.begin_response().unwrap();
    sink.write_all(b"[]").unwrap();
    assert_eq!(sink, b"[][]");
  }
}
