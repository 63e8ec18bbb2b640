//! Circular logo icon generator
//!
//! Writes one flat-color circular PNG per configured size into an output
//! directory and reports each file as it is created.

pub mod config;
pub mod driver;

pub use config::{Config, FailurePolicy, DEFAULT_COLOR, DEFAULT_OUTPUT_DIR, DEFAULT_SIZES};
pub use driver::{
    generate, icon_file_name, icon_path, prepare_output_dir, GenerationReport, IconOutcome,
};
