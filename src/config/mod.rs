//! JSON configuration for the command-line tool.

pub mod sketch;

pub use sketch::{load_config, parse_config, EdgeConfig, SketchOutputConfig, SketchToolConfig};
