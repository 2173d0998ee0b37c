//! lemmata-pipe crate
//!
//! Line-oriented annotation server driven by a parent process over stdio.
//!
//! ## Protocol
//! 1. The first input line is a language identifier. The server answers `done`
//!    when it is ready, or exits with status 1 (writing nothing) if the language
//!    cannot be served.
//! 2. Each request is a block of text lines ended by one blank line. The
//!    response is a JSON array of `{"sentence": ..., "words": [...]}` objects
//!    followed by a `done` line.
//! 3. Closing standard input ends the session with status 0.
//!
//! ## Usage Example
//! ```bash
//! printf 'en\nHello world.\n\n' | lemmata-pipe
//! ```

pub mod config;
pub mod encoding;
pub mod errors;
pub mod protocol;

pub use config::Config;
pub use errors::{PipeError, PipeErrorKind};
pub use protocol::{RequestReader, Session};
