//! Application state for the pandoc sidecar

use anyhow::Result;
use pandoc_engine::{InvokerConfig, JobWorkspace, PandocInvoker};

use crate::config::Config;

pub struct AppState {
    pub workspace: JobWorkspace,
    pub invoker: PandocInvoker,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        tracing::info!("workspace root: {}", config.workspace_dir.display());
        let workspace = JobWorkspace::new(&config.workspace_dir).await?;

        let invoker = PandocInvoker::new(
            InvokerConfig {
                pandoc_bin: config.pandoc_bin.clone(),
                compose_bin: config.compose_bin.clone(),
                compose_service: config.compose_service.clone(),
                pdf_engine: config.pdf_engine.clone(),
                container_mount: config.container_mount.clone(),
                timeout: config.timeout,
            },
            workspace.root().to_path_buf(),
        );

        Ok(Self { workspace, invoker })
    }
}
