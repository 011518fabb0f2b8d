use crate::lives::dto::{parse_lives, LiveRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} not found", .0.display())]
    Missing(PathBuf),
    #[error("failed reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("error decoding JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[instrument]
pub fn load_lives(path: &Path) -> Vec<LiveRecord> {
    match try_load_lives(path) {
        Ok(lives) => {
            info!("Loaded {} lives", lives.len());
            lives
        }
        Err(err) => {
            error!("Error: {}", err);
            Vec::new()
        }
    }
}

pub fn try_load_lives(path: &Path) -> Result<Vec<LiveRecord>, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::Missing(path.to_path_buf()),
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(parse_lives(&json)?)
}
