//! Environment helpers shared by the gatuner crates

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::{
    EnvError, get_data_generated_dir, get_gatuner_dir, get_plots_dir, get_records_dir,
    resolve_output_dir,
};
