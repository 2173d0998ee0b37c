//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_LOG_FILTER, DEFAULT_PRESET_DICT, DONE_SIGNAL, LOG_ENV_VAR, OUTPUT_FILE_NAME,
};
pub use env::{Config, InputEncodingSetting, OutputMode};
