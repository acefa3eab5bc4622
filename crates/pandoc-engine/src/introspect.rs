//! Capability introspection
//!
//! Read-only passthrough queries against the pandoc binary. A failure here
//! means the environment is broken (pandoc missing or misconfigured), never
//! that the caller sent bad input.

use serde::Serialize;

use crate::error::EngineError;
use crate::invoker::PandocInvoker;

#[derive(Debug, Clone, Serialize)]
pub struct FormatList {
    pub input_formats: Vec<String>,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PandocVersion {
    pub version: String,
    pub full_version_info: String,
}

impl PandocInvoker {
    /// Query pandoc for its supported input and output formats.
    pub async fn list_formats(&self) -> Result<FormatList, EngineError> {
        let input_formats = self.capture_lines(&["--list-input-formats"]).await?;
        let output_formats = self.capture_lines(&["--list-output-formats"]).await?;

        Ok(FormatList {
            input_formats,
            output_formats,
        })
    }

    /// Query pandoc for its version string.
    pub async fn version(&self) -> Result<PandocVersion, EngineError> {
        let output = self.run_capture(&["--version"]).await?;
        if !output.status.success() {
            return Err(EngineError::Environment(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        let full = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(PandocVersion {
            version: parse_version(&full),
            full_version_info: full,
        })
    }

    async fn capture_lines(&self, args: &[&str]) -> Result<Vec<String>, EngineError> {
        let output = self.run_capture(args).await?;
        if !output.status.success() {
            return Err(EngineError::Environment(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }
}

/// Extract the short version from `pandoc --version` output, whose first line
/// looks like `pandoc 3.1.9`.
fn parse_version(full: &str) -> String {
    full.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("unknown")
        .to_string()
}
