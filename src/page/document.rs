use crate::config::model::MissingMarkerPolicy;
use crate::page::splice::{splice_live_list, SpliceError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("failed reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed writing {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("can't update {}: {source}", .path.display())]
    Splice { path: PathBuf, source: SpliceError },
}

#[instrument(skip(fragment))]
pub fn update_live_page(
    path: &Path,
    fragment: &str,
    policy: MissingMarkerPolicy,
) -> Result<(), PageError> {
    let document = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PageError::NotFound(path.to_path_buf()),
        _ => PageError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let updated = splice_live_list(&document, fragment, policy).map_err(|source| {
        PageError::Splice {
            path: path.to_path_buf(),
            source,
        }
    })?;

    fs::write(path, updated).map_err(|source| PageError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Successfully updated {}", path.display());

    Ok(())
}
