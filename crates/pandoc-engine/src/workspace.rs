//! Job workspace management
//!
//! Every request gets a fresh random job id, and every file it touches is
//! stored under a name qualified by that id, so concurrent requests never
//! collide in the shared scratch directory. Cleanup is best-effort: a missing
//! file is fine, and a failed deletion is logged but never surfaces to the
//! caller.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::EngineError;

/// Unique identifier for one conversion job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId(String);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptor for a file persisted under the workspace root.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub original_name: String,
    pub stored_name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Derive the on-disk name for an uploaded file: `stem_jobid.suffix`.
///
/// Only the final path component of `original_name` is used, so an uploaded
/// filename can never escape the workspace root.
pub fn stored_file_name(original_name: &str, job_id: &JobId) -> Result<String, EngineError> {
    if original_name.is_empty() {
        return Err(EngineError::InvalidInput(
            "file name must not be empty".to_string(),
        ));
    }

    let base = Path::new(original_name)
        .file_name()
        .ok_or_else(|| {
            EngineError::InvalidInput(format!("invalid file name: {}", original_name))
        })?;
    let base = Path::new(base);

    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            EngineError::InvalidInput(format!("invalid file name: {}", original_name))
        })?;

    Ok(match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, job_id, ext),
        None => format!("{}_{}", stem, job_id),
    })
}

/// Scratch directory shared by all jobs.
///
/// The root is created once at startup and never deleted; everything inside
/// it is transient and owned by exactly one job.
#[derive(Debug, Clone)]
pub struct JobWorkspace {
    root: PathBuf,
}

impl JobWorkspace {
    /// Create the workspace, making the root directory if needed.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        // Absolute path: the PDF engine bind-mounts this directory.
        let root = tokio::fs::canonicalize(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Generate a fresh job id. Random, so concurrent requests never need to
    /// coordinate.
    pub fn new_job_id(&self) -> JobId {
        JobId::new()
    }

    /// Write `bytes` under a job-qualified name and return its descriptor.
    pub async fn persist(
        &self,
        job_id: &JobId,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, EngineError> {
        let stored_name = stored_file_name(original_name, job_id)?;
        let path = self.root.join(&stored_name);

        tokio::fs::write(&path, bytes).await?;

        tracing::info!(
            "stored {} as {} ({} bytes)",
            original_name,
            stored_name,
            bytes.len()
        );

        Ok(StoredFile {
            original_name: original_name.to_string(),
            stored_name,
            path,
            size: bytes.len() as u64,
        })
    }

    /// Delete the given files, best-effort. Missing files are ignored;
    /// anything else is logged and swallowed so cleanup can never fail a
    /// request that already succeeded.
    pub async fn cleanup(&self, paths: Vec<PathBuf>) {
        for path in paths {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => tracing::debug!("removed {}", path.display()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => {
                    tracing::warn!("failed to delete {}: {}", path.display(), err);
                }
            }
        }
    }
}
