//! Environment variable utilities for gatuner
//!
//! Generated artefacts (progress plots, CSV records) are written below the
//! directory named by the `GATUNER_DIR` environment variable.

use crate::constants::{DATA_GENERATED, GATUNER_DIR_VAR, PLOTS, RECORDS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "GATUNER_DIR environment variable is not set. Please set it to the directory where plots and records should be written (e.g., export GATUNER_DIR=$PWD)"
    )]
    GatunerDirNotSet,

    #[error("GATUNER_DIR points to a non-existent directory: {0}")]
    GatunerDirNotFound(PathBuf),

    #[error("Failed to create directory {0}: {1}")]
    DirectoryCreationFailed(PathBuf, std::io::Error),
}

/// Get the GATUNER_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - GATUNER_DIR is not set
/// - GATUNER_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use gatuner_env::env_utils::get_gatuner_dir;
///
/// let dir = get_gatuner_dir()?;
/// println!("gatuner directory: {}", dir.display());
/// # Ok::<(), gatuner_env::env_utils::EnvError>(())
/// ```
pub fn get_gatuner_dir() -> Result<PathBuf, EnvError> {
    let dir = env::var(GATUNER_DIR_VAR).map_err(|_| EnvError::GatunerDirNotSet)?;

    let path = PathBuf::from(dir);

    if !path.exists() {
        return Err(EnvError::GatunerDirNotFound(path));
    }

    Ok(path)
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        std::fs::create_dir_all(&path)
            .map_err(|e| EnvError::DirectoryCreationFailed(path.clone(), e))?;
    }
    Ok(path)
}

/// Get the path to the data_generated directory, creating it if necessary
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    let root = get_gatuner_dir()?;
    ensure_dir(root.join(DATA_GENERATED))
}

/// Get the path to the plots subdirectory within data_generated
pub fn get_plots_dir() -> Result<PathBuf, EnvError> {
    ensure_dir(get_data_generated_dir()?.join(PLOTS))
}

/// Get the path to the records subdirectory within data_generated
pub fn get_records_dir() -> Result<PathBuf, EnvError> {
    ensure_dir(get_data_generated_dir()?.join(RECORDS))
}

/// Resolve an output directory: an explicit path wins, otherwise `sub` below data_generated.
///
/// The explicit directory is created when missing.
pub fn resolve_output_dir(explicit: Option<&Path>, sub: &str) -> Result<PathBuf, EnvError> {
    match explicit {
        Some(p) => ensure_dir(p.to_path_buf()),
        None => ensure_dir(get_data_generated_dir()?.join(sub)),
    }
}
