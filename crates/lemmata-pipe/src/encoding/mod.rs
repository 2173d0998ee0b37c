//! Encoding adapter
//!
//! The only place where the host platform is inspected. Both strategies are
//! picked once at startup; everything downstream sees normalized UTF-8 text
//! and a single sink interface.

mod input;
mod output;

pub use input::InputDecoding;
pub use output::{OutputSink, OutputTarget, ResponseSink};
