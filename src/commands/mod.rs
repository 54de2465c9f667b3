//! CLI command implementations.
//!
//! Available commands:
//! - **calculate**: Run the ROI calculation for a scenario file and render it
//! - **validate**: Check a scenario file for implausible inputs
//! - **example**: Write the built-in example scenario
//! - **init**: Initialize a new `.roicalc.toml` configuration file

pub mod calculate;
pub mod example;
pub mod init;
pub mod validate;

pub use calculate::{handle_calculate, CalculateConfig};
pub use example::write_example;
pub use init::init_config;
pub use validate::{validate_scenario_file, ValidateConfig};
