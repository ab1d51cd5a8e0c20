//! Various configuration options to control mixtape

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};
