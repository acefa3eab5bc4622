//! Wire models for the pandoc sidecar API

use serde::{Deserialize, Serialize};

/// Inline conversion request: text in, text out.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    pub content: String,
    pub from_format: String,
    pub to_format: String,
    #[serde(default)]
    pub extra_args: Option<Vec<String>>,
}

/// Inline conversion response with echoed format metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResponse {
    pub converted_content: String,
    pub input_format: String,
    pub output_format: String,
}

/// LaTeX string to render as PDF.
#[derive(Debug, Clone, Deserialize)]
pub struct LatexRequest {
    pub latex_content: String,
    /// Base name for the generated `.tex`/`.pdf` files.
    #[serde(default = "default_latex_filename")]
    pub filename: String,
}

fn default_latex_filename() -> String {
    "document".to_string()
}

/// Version information reported by the pandoc binary.
#[derive(Debug, Clone, Serialize)]
pub struct VersionResponse {
    pub pandoc_version: String,
    pub full_version_info: String,
}
