//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_DEEPL_API_URL, DEFAULT_PRESET_DICT, MAX_TEXT_LENGTH};
pub use env::{Config, Preset};
