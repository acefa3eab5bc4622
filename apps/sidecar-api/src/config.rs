//! Runtime configuration for the sidecar
//!
//! All values come from the environment with sensible defaults, read once at
//! startup and injected into the application state. Workspace creation is an
//! explicit initialization step, not an import side effect.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port.
    pub port: u16,
    /// Scratch directory for transient job files.
    pub workspace_dir: PathBuf,
    /// Pandoc executable.
    pub pandoc_bin: String,
    /// Compose-style launcher for the containerized LaTeX toolchain.
    pub compose_bin: String,
    /// Compose service name providing pandoc with LaTeX.
    pub compose_service: String,
    /// PDF engine flag value for the containerized pandoc.
    pub pdf_engine: String,
    /// Workspace mount point inside the container.
    pub container_mount: String,
    /// Bound on every external-tool invocation.
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let timeout_secs = std::env::var("PANDOC_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(120);

        Self {
            port,
            workspace_dir: var_or("SIDECAR_WORKSPACE_DIR", "uploads").into(),
            pandoc_bin: var_or("PANDOC_BIN", "pandoc"),
            compose_bin: var_or("COMPOSE_BIN", "docker-compose"),
            compose_service: var_or("COMPOSE_SERVICE", "pandoc-extra"),
            pdf_engine: var_or("PDF_ENGINE", "pdflatex"),
            container_mount: var_or("CONTAINER_MOUNT", "/workspace"),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
