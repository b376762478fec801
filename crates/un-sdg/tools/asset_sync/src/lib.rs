#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Stage the goal badge images into the un-sdg static directory.
//!
//! # Design
//! - Resolves the UI root relative to `CARGO_MANIFEST_DIR` so it can be run from any cwd.
//! - Copies `ui_vendor/sdg` into `static/lib/svgs`, replacing any previous output.
//! - Requires all 19 logical assets; SVGs must carry an `<svg` tag and the badge
//!   must start with the PNG signature.
//! - Emits a deterministic `ASSET_LOCK.txt` with one hash per asset and directory stats.
//!
//! Failure modes include missing vendor inputs, copy errors, missing or malformed
//! assets, or inability to write outputs and the lock file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fs_extra::dir::CopyOptions;
use sha2::{Digest, Sha256};
use thiserror::Error;
use un_sdg::core::assets::AssetKey;
use walkdir::WalkDir;

const VENDOR_ROOT: &str = "ui_vendor/sdg";
const OUTPUT_ROOT: &str = "static/lib/svgs";
const LOCK_FILE: &str = "ASSET_LOCK.txt";
const SVG_MARKER: &str = "<svg";
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Errors returned by the asset sync tool.
#[derive(Debug, Error)]
pub enum AssetSyncError {
    /// A required path is missing on disk.
    #[error("required path is missing: {}", .path.display())]
    MissingPath {
        /// Path that could not be found.
        path: PathBuf,
    },
    /// A required directory path is not a directory.
    #[error("expected directory but found non-directory: {}", .path.display())]
    ExpectedDir {
        /// Path that was expected to be a directory.
        path: PathBuf,
    },
    /// A filesystem operation failed.
    #[error("io error at {}", .path.display())]
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The directory copy failed.
    #[error("copy failed from {} to {}: {message}", .from.display(), .to.display())]
    CopyFailed {
        /// Copy source path.
        from: PathBuf,
        /// Copy destination path.
        to: PathBuf,
        /// Error message from the copy implementation.
        message: String,
    },
    /// A staged asset failed its format check.
    #[error("asset {key} failed validation at {}: {reason}", .path.display())]
    AssetInvalid {
        /// Logical asset key.
        key: String,
        /// Staged file path.
        path: PathBuf,
        /// Reason the asset was rejected.
        reason: String,
    },
    /// Traversal of a directory failed.
    #[error("directory walk failed at {}", .path.display())]
    WalkFailed {
        /// Directory path that could not be traversed.
        path: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DirStats {
    files: u64,
    bytes: u64,
}

/// Run the asset synchronization using the repository-relative paths.
///
/// # Errors
/// Returns an error if vendor inputs are missing, outputs cannot be written,
/// or any of the 19 assets is absent or malformed.
pub fn run() -> Result<(), AssetSyncError> {
    let ui_root = ui_root_dir()?;
    sync_assets(&ui_root)
}

fn ui_root_dir() -> Result<PathBuf, AssetSyncError> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ui_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| AssetSyncError::MissingPath {
            path: manifest_dir.to_path_buf(),
        })?;
    Ok(ui_root.to_path_buf())
}

fn sync_assets(ui_root: &Path) -> Result<(), AssetSyncError> {
    let vendor = ui_root.join(VENDOR_ROOT);
    ensure_dir(&vendor)?;

    let output = ui_root.join(OUTPUT_ROOT);
    copy_dir(&vendor, &output)?;

    let mut hashes = Vec::new();
    for key in AssetKey::all() {
        let path = output.join(key.file_name());
        let bytes = fs::read(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => AssetSyncError::MissingPath { path: path.clone() },
            _ => AssetSyncError::Io {
                path: path.clone(),
                source,
            },
        })?;
        validate_asset(key, &path, &bytes)?;
        hashes.push((key, sha256_hex(&bytes)));
    }

    let stats = dir_stats(&output)?;
    write_lock(&output, &hashes, stats)?;
    tracing::info!(
        assets = hashes.len(),
        files = stats.files,
        bytes = stats.bytes,
        output = %output.display(),
        "goal assets synced"
    );
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<(), AssetSyncError> {
    if !path.exists() {
        return Err(AssetSyncError::MissingPath {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(AssetSyncError::ExpectedDir {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn ensure_dir_exists(path: &Path) -> Result<(), AssetSyncError> {
    fs::create_dir_all(path).map_err(|source| AssetSyncError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn copy_dir(from: &Path, to: &Path) -> Result<(), AssetSyncError> {
    if to.exists() {
        let removed = if to.is_dir() {
            fs::remove_dir_all(to)
        } else {
            fs::remove_file(to)
        };
        removed.map_err(|source| AssetSyncError::Io {
            path: to.to_path_buf(),
            source,
        })?;
    }
    ensure_dir_exists(to)?;
    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    fs_extra::dir::copy(from, to, &options).map_err(|err| AssetSyncError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(())
}

fn validate_asset(key: AssetKey, path: &Path, bytes: &[u8]) -> Result<(), AssetSyncError> {
    let reason = match key.extension() {
        "png" if !bytes.starts_with(&PNG_SIGNATURE) => Some("missing PNG signature".to_string()),
        "svg" if !String::from_utf8_lossy(bytes).contains(SVG_MARKER) => {
            Some(format!("missing marker {SVG_MARKER}"))
        }
        _ => None,
    };
    reason.map_or(Ok(()), |reason| {
        Err(AssetSyncError::AssetInvalid {
            key: key.key(),
            path: path.to_path_buf(),
            reason,
        })
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn dir_stats(path: &Path) -> Result<DirStats, AssetSyncError> {
    let mut files = 0_u64;
    let mut bytes = 0_u64;
    for entry in WalkDir::new(path).min_depth(1) {
        let entry = entry.map_err(|source| AssetSyncError::WalkFailed {
            path: path.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            let metadata = entry.metadata().map_err(|source| AssetSyncError::WalkFailed {
                path: entry.path().to_path_buf(),
                source,
            })?;
            files += 1;
            bytes += metadata.len();
        }
    }
    Ok(DirStats { files, bytes })
}

fn write_lock(
    output_root: &Path,
    hashes: &[(AssetKey, String)],
    stats: DirStats,
) -> Result<(), AssetSyncError> {
    let lock_path = output_root.join(LOCK_FILE);
    let mut contents = String::new();
    for (key, hash) in hashes {
        contents.push_str(&format!("{} sha256 {hash}\n", key.file_name()));
    }
    contents.push_str(&format!(
        "total files {} bytes {}\n",
        stats.files, stats.bytes
    ));
    fs::write(&lock_path, contents).map_err(|source| AssetSyncError::Io {
        path: lock_path,
        source,
    })
}
