//! HTTP handlers for the pandoc sidecar
//!
//! Three conversion entry points (inline text, generic file, LaTeX-to-PDF)
//! share one stored-input lifecycle: persist under a fresh job id, invoke,
//! buffer the artifact, schedule cleanup, respond. Cleanup is spawned only
//! after the output bytes are in memory, so it can never race the response.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use pandoc_engine::{validate_format, ConversionOutcome, FormatList, StoredFile};

use crate::error::ApiError;
use crate::models::{ConvertRequest, ConvertResponse, LatexRequest, VersionResponse};
use crate::state::AppState;

const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/convert", post(convert))
        .route("/convert-file", post(convert_file))
        .route("/upload", post(upload))
        .route("/latex", post(latex))
        .route("/formats", get(formats))
        .route("/version", get(version))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Health check endpoint
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "healthy", "service": "pandoc-sidecar"}))
}

/// Convert inline text content between formats via pandoc stdin/stdout.
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    validate_format(&req.from_format)?;
    validate_format(&req.to_format)?;

    let extra_args = req.extra_args.unwrap_or_default();

    match state
        .invoker
        .run_direct(&req.content, &req.from_format, &req.to_format, &extra_args)
        .await?
    {
        ConversionOutcome::Success { bytes, .. } => Ok(Json(ConvertResponse {
            converted_content: String::from_utf8_lossy(&bytes).into_owned(),
            input_format: req.from_format,
            output_format: req.to_format,
        })),
        ConversionOutcome::Failure { exit_code, stderr } => {
            tracing::warn!("inline conversion failed (exit {:?})", exit_code);
            Err(ApiError::ConversionRejected(stderr))
        }
    }
}

/// Convert an uploaded file to the requested format.
pub async fn convert_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut to_format: Option<String> = None;
    let mut from_format: Option<String> = None;
    let mut extra_args: Vec<String> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::InvalidRequest(format!("Failed to parse multipart data: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field
                    .file_name()
                    .map(|n| n.to_string())
                    .filter(|n| !n.is_empty())
                    .ok_or_else(|| {
                        ApiError::InvalidRequest("uploaded file has no filename".to_string())
                    })?;
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("Failed to read upload: {}", e))
                })?;
                upload = Some((filename, bytes.to_vec()));
            }
            "to_format" => {
                to_format = Some(read_text_field(field).await?);
            }
            "from_format" => {
                let value = read_text_field(field).await?;
                if !value.is_empty() {
                    from_format = Some(value);
                }
            }
            "extra_args" => {
                let value = read_text_field(field).await?;
                extra_args = value.split_whitespace().map(|s| s.to_string()).collect();
            }
            _ => continue,
        }
    }

    let (filename, bytes) =
        upload.ok_or_else(|| ApiError::InvalidRequest("No file was uploaded".to_string()))?;
    let to_format =
        to_format.ok_or_else(|| ApiError::InvalidRequest("to_format is required".to_string()))?;

    validate_format(&to_format)?;
    if let Some(from) = &from_format {
        validate_format(from)?;
    }

    let job_id = state.workspace.new_job_id();
    let stored = state.workspace.persist(&job_id, &filename, &bytes).await?;
    let output_path = state
        .workspace
        .root()
        .join(output_file_name(&stored.stored_name, &to_format));

    let download_name = format!("converted.{}", to_format);
    convert_stored(
        &state,
        stored,
        Vec::new(),
        output_path,
        Pipeline::PandocFile {
            from_format,
            to_format,
            extra_args,
        },
        "application/octet-stream",
        download_name,
    )
    .await
}

/// Upload one or more files and render the first to PDF through the
/// containerized LaTeX toolchain. Remaining files are discarded (first-file
/// wins) but still cleaned up with the job.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let job_id = state.workspace.new_job_id();
    let mut stored_files: Vec<StoredFile> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::InvalidRequest(format!("Failed to parse multipart data: {}", e))
    })? {
        let Some(filename) = field
            .file_name()
            .map(|n| n.to_string())
            .filter(|n| !n.is_empty())
        else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to read upload: {}", e)))?;

        match state.workspace.persist(&job_id, &filename, &bytes).await {
            Ok(stored) => stored_files.push(stored),
            Err(err) => {
                schedule_cleanup(
                    &state,
                    stored_files.into_iter().map(|f| f.path).collect(),
                );
                return Err(err.into());
            }
        }
    }

    if stored_files.is_empty() {
        return Err(ApiError::InvalidRequest(
            "No files were uploaded".to_string(),
        ));
    }

    if stored_files.len() > 1 {
        tracing::warn!(
            "received {} files; converting only the first",
            stored_files.len()
        );
    }

    let input = stored_files.remove(0);
    let extra_cleanup = stored_files.into_iter().map(|f| f.path).collect();

    let output_name = output_file_name(&input.stored_name, "pdf");
    let output_path = state.workspace.root().join(&output_name);

    convert_stored(
        &state,
        input,
        extra_cleanup,
        output_path,
        Pipeline::PdfEngine,
        "application/pdf",
        output_name,
    )
    .await
}

/// Render a LaTeX string to PDF.
pub async fn latex(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LatexRequest>,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let base = if req.filename.is_empty() {
        "document"
    } else {
        req.filename.as_str()
    };

    let job_id = state.workspace.new_job_id();
    let stored = state
        .workspace
        .persist(&job_id, &format!("{}.tex", base), req.latex_content.as_bytes())
        .await?;

    let output_name = output_file_name(&stored.stored_name, "pdf");
    let output_path = state.workspace.root().join(&output_name);

    convert_stored(
        &state,
        stored,
        Vec::new(),
        output_path,
        Pipeline::PdfEngine,
        "application/pdf",
        output_name,
    )
    .await
}

/// List pandoc's supported input and output formats.
pub async fn formats(State(state): State<Arc<AppState>>) -> Result<Json<FormatList>, ApiError> {
    Ok(Json(state.invoker.list_formats().await?))
}

/// Report the pandoc version.
pub async fn version(State(state): State<Arc<AppState>>) -> Result<Json<VersionResponse>, ApiError> {
    let info = state.invoker.version().await?;
    Ok(Json(VersionResponse {
        pandoc_version: info.version,
        full_version_info: info.full_version_info,
    }))
}

/// Which converter a stored input goes through.
enum Pipeline {
    PandocFile {
        from_format: Option<String>,
        to_format: String,
        extra_args: Vec<String>,
    },
    PdfEngine,
}

/// Shared lifecycle for all file-backed conversions: invoke, buffer the
/// artifact, schedule cleanup of {input, output} on success or {input} on
/// failure, and build the attachment response.
async fn convert_stored(
    state: &Arc<AppState>,
    input: StoredFile,
    extra_cleanup: Vec<PathBuf>,
    output_path: PathBuf,
    pipeline: Pipeline,
    content_type: &'static str,
    download_name: String,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let result = match &pipeline {
        Pipeline::PandocFile {
            from_format,
            to_format,
            extra_args,
        } => {
            state
                .invoker
                .run_file(
                    &input.path,
                    &output_path,
                    from_format.as_deref(),
                    to_format,
                    extra_args,
                )
                .await
        }
        Pipeline::PdfEngine => state.invoker.run_pdf_engine(&input.path, &output_path).await,
    };

    match result {
        Ok(ConversionOutcome::Success { bytes, .. }) => {
            let mut cleanup = vec![input.path, output_path];
            cleanup.extend(extra_cleanup);
            schedule_cleanup(state, cleanup);

            Ok((
                StatusCode::OK,
                [
                    ("Content-Type".to_string(), content_type.to_string()),
                    (
                        "Content-Disposition".to_string(),
                        format!("attachment; filename=\"{}\"", download_name),
                    ),
                ],
                bytes,
            ))
        }
        Ok(ConversionOutcome::Failure { exit_code, stderr }) => {
            tracing::warn!("conversion failed (exit {:?})", exit_code);
            // The tool may have written a partial artifact before dying;
            // cleanup tolerates the file not being there.
            let mut cleanup = vec![input.path, output_path];
            cleanup.extend(extra_cleanup);
            schedule_cleanup(state, cleanup);
            Err(ApiError::ConversionFailed(stderr))
        }
        Err(err) => {
            let mut cleanup = vec![input.path, output_path];
            cleanup.extend(extra_cleanup);
            schedule_cleanup(state, cleanup);
            Err(err.into())
        }
    }
}

/// Deferred deletion of a job's files. Runs after the response body has been
/// buffered, and never reports back to the request path.
fn schedule_cleanup(state: &Arc<AppState>, paths: Vec<PathBuf>) {
    let workspace = state.workspace.clone();
    tokio::spawn(async move { workspace.cleanup(paths).await });
}

/// Replace the extension of a stored name: `report_<job>.md` -> `report_<job>.pdf`.
fn output_file_name(stored_name: &str, ext: &str) -> String {
    match stored_name.rsplit_once('.') {
        Some((stem, _)) => format!("{}.{}", stem, ext),
        None => format!("{}.{}", stored_name, ext),
    }
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    Ok(field
        .text()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("Failed to read form field: {}", e)))?
        .trim()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;

    /// Write an executable shell script standing in for pandoc or the
    /// compose launcher.
    fn fake_tool(dir: &Path, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_str().unwrap().to_string()
    }

    /// Fake compose launcher: derives the host workspace from the `-v`
    /// mount argument and writes a PDF-looking file where the container
    /// would have.
    fn fake_compose(dir: &Path) -> String {
        fake_tool(
            dir,
            "compose",
            "host=${4%%:*}\nout=$(basename \"$8\")\nprintf '%%PDF-1.4 fake' > \"$host/$out\"",
        )
    }

    async fn test_state(dir: &Path, pandoc_bin: String, compose_bin: String) -> Arc<AppState> {
        let config = Config {
            port: 0,
            workspace_dir: dir.join("workspace"),
            pandoc_bin,
            compose_bin,
            compose_service: "pandoc-extra".to_string(),
            pdf_engine: "pdflatex".to_string(),
            container_mount: "/workspace".to_string(),
            timeout: Duration::from_secs(5),
        };
        Arc::new(AppState::new(&config).await.unwrap())
    }

    async fn wait_for_empty_workspace(state: &Arc<AppState>) {
        for _ in 0..100 {
            let mut entries = tokio::fs::read_dir(state.workspace.root()).await.unwrap();
            if entries.next_entry().await.unwrap().is_none() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("workspace was not cleaned up");
    }

    fn multipart_request(uri: &str, parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let boundary = "test-boundary-7MA4YWxkTrZu0gW";
        let mut body = String::new();
        for (name, filename, value) in parts {
            body.push_str(&format!("--{}\r\n", boundary));
            match filename {
                Some(filename) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\r\n",
                    name, filename
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    name
                )),
            }
            body.push_str(value);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{}--\r\n", boundary));

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_service() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), "pandoc".into(), "docker-compose".into()).await;

        let response = router(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "pandoc-sidecar");
    }

    #[tokio::test]
    async fn test_convert_returns_converted_content() {
        let dir = tempfile::tempdir().unwrap();
        let pandoc = fake_tool(dir.path(), "pandoc", "cat");
        let state = test_state(dir.path(), pandoc, "docker-compose".into()).await;

        let response = router(state)
            .oneshot(json_request(
                "/convert",
                r##"{"content": "# Title", "from_format": "markdown", "to_format": "plain"}"##,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["converted_content"], "# Title");
        assert_eq!(json["input_format"], "markdown");
        assert_eq!(json["output_format"], "plain");
    }

    #[tokio::test]
    async fn test_convert_empty_format_rejected_before_invocation() {
        let dir = tempfile::tempdir().unwrap();
        // Booby-trapped binary: leaves a marker if it ever runs.
        let marker = dir.path().join("invoked");
        let pandoc = fake_tool(
            dir.path(),
            "pandoc",
            &format!("touch {}", marker.display()),
        );
        let state = test_state(dir.path(), pandoc, "docker-compose".into()).await;

        let response = router(state)
            .oneshot(json_request(
                "/convert",
                r#"{"content": "x", "from_format": "", "to_format": "plain"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn test_convert_injection_shaped_format_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let pandoc = fake_tool(dir.path(), "pandoc", "cat");
        let state = test_state(dir.path(), pandoc, "docker-compose".into()).await;

        let response = router(state)
            .oneshot(json_request(
                "/convert",
                r#"{"content": "x", "from_format": "markdown; rm -rf /", "to_format": "plain"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_convert_failure_surfaces_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let pandoc = fake_tool(dir.path(), "pandoc", "echo 'bad markup near line 3' >&2; exit 2");
        let state = test_state(dir.path(), pandoc, "docker-compose".into()).await;

        let response = router(state)
            .oneshot(json_request(
                "/convert",
                r#"{"content": "x", "from_format": "markdown", "to_format": "plain"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("bad markup near line 3"));
    }

    #[tokio::test]
    async fn test_convert_file_streams_attachment_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        // $1 = input, $3 = output.
        let pandoc = fake_tool(dir.path(), "pandoc", "cp \"$1\" \"$3\"");
        let state = test_state(dir.path(), pandoc, "docker-compose".into()).await;

        let response = router(state.clone())
            .oneshot(multipart_request(
                "/convert-file",
                &[
                    ("file", Some("doc.md"), "# Hello"),
                    ("to_format", None, "html"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["Content-Type"],
            "application/octet-stream"
        );
        assert!(response.headers()["Content-Disposition"]
            .to_str()
            .unwrap()
            .contains("converted.html"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"# Hello");

        wait_for_empty_workspace(&state).await;
    }

    #[tokio::test]
    async fn test_convert_file_failure_cleans_up_input() {
        let dir = tempfile::tempdir().unwrap();
        let pandoc = fake_tool(dir.path(), "pandoc", "echo 'conversion exploded' >&2; exit 1");
        let state = test_state(dir.path(), pandoc, "docker-compose".into()).await;

        let response = router(state.clone())
            .oneshot(multipart_request(
                "/convert-file",
                &[
                    ("file", Some("doc.md"), "# Hello"),
                    ("to_format", None, "pdf"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("conversion exploded"));

        wait_for_empty_workspace(&state).await;
    }

    #[tokio::test]
    async fn test_failed_conversion_cleans_up_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        // Writes a partial artifact before dying, like a converter killed
        // mid-render.
        let pandoc = fake_tool(
            dir.path(),
            "pandoc",
            "printf partial > \"$3\"\necho 'render aborted' >&2\nexit 1",
        );
        let state = test_state(dir.path(), pandoc, "docker-compose".into()).await;

        let response = router(state.clone())
            .oneshot(multipart_request(
                "/convert-file",
                &[
                    ("file", Some("doc.md"), "# Hello"),
                    ("to_format", None, "pdf"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        wait_for_empty_workspace(&state).await;
    }

    #[tokio::test]
    async fn test_upload_without_files_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), "pandoc".into(), "docker-compose".into()).await;

        let response = router(state)
            .oneshot(multipart_request("/upload", &[("note", None, "no files here")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_renders_pdf_via_compose() {
        let dir = tempfile::tempdir().unwrap();
        let compose = fake_compose(dir.path());
        let state = test_state(dir.path(), "pandoc".into(), compose).await;

        let response = router(state.clone())
            .oneshot(multipart_request(
                "/upload",
                &[("files", Some("notes.md"), "# Notes")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "application/pdf");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.starts_with(b"%PDF"));

        wait_for_empty_workspace(&state).await;
    }

    #[tokio::test]
    async fn test_latex_renders_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let compose = fake_compose(dir.path());
        let state = test_state(dir.path(), "pandoc".into(), compose).await;

        let response = router(state.clone())
            .oneshot(json_request(
                "/latex",
                r#"{"latex_content": "\\documentclass{article}\\begin{document}hi\\end{document}"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "application/pdf");
        assert!(response.headers()["Content-Disposition"]
            .to_str()
            .unwrap()
            .contains("document_"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.starts_with(b"%PDF"));

        wait_for_empty_workspace(&state).await;
    }

    #[tokio::test]
    async fn test_formats_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let pandoc = fake_tool(dir.path(), "pandoc", "printf 'markdown\\nhtml\\n'");
        let state = test_state(dir.path(), pandoc, "docker-compose".into()).await;

        let response = router(state)
            .oneshot(Request::builder().uri("/formats").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["input_formats"], serde_json::json!(["markdown", "html"]));
        assert_eq!(json["output_formats"], serde_json::json!(["markdown", "html"]));
    }

    #[tokio::test]
    async fn test_version_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let pandoc = fake_tool(dir.path(), "pandoc", "printf 'pandoc 3.1.9\\nCompiled with ...\\n'");
        let state = test_state(dir.path(), pandoc, "docker-compose".into()).await;

        let response = router(state)
            .oneshot(Request::builder().uri("/version").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["pandoc_version"], "3.1.9");
        assert!(json["full_version_info"]
            .as_str()
            .unwrap()
            .starts_with("pandoc 3.1.9"));
    }

    #[tokio::test]
    async fn test_version_missing_pandoc_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(
            dir.path(),
            "/nonexistent/pandoc".into(),
            "docker-compose".into(),
        )
        .await;

        let response = router(state)
            .oneshot(Request::builder().uri("/version").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_output_file_name_swaps_extension() {
        assert_eq!(output_file_name("doc_abc.md", "pdf"), "doc_abc.pdf");
        assert_eq!(output_file_name("README_abc", "pdf"), "README_abc.pdf");
    }
}
