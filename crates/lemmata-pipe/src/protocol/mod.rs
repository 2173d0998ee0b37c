//! protocol module
//!
//! One session per process: bootstrap once, then read a blank-line delimited
//! request, annotate it and stream the response, until standard input closes.

pub mod bootstrap;
pub mod reader;
pub mod session;
pub mod writer;

pub use bootstrap::{bootstrap, signal_ready};
pub use reader::{RequestReader, RequestText};
pub use session::{Session, SessionState};
pub use writer::{JsonStreamWriter, signal_done, write_response};
