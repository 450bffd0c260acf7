//! Configuration model for xpmatch.
//!
//! An optional YAML file (`--config <path>`) can change the defaults the
//! command line starts from. Unknown keys are ignored, every key has a
//! default, and values are validated after parsing. Command-line options
//! override whatever the file sets.

mod model;
mod operations;
pub mod types;


pub use model::Config;
