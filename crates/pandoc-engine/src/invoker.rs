//! Subprocess invocation with timeout and outcome classification
//!
//! Commands are always built as explicit argument arrays (never a shell
//! string), bounded by a timeout, and their stderr is captured verbatim so
//! callers can hand the real pandoc diagnostic to the user. A hung tool is
//! killed via `kill_on_drop` when the timeout fires.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::error::EngineError;

/// How to reach the external tools.
#[derive(Debug, Clone)]
pub struct InvokerConfig {
    /// The pandoc executable.
    pub pandoc_bin: String,
    /// Compose-style launcher for the containerized LaTeX toolchain.
    pub compose_bin: String,
    /// Compose service providing pandoc with a full LaTeX install.
    pub compose_service: String,
    /// `--pdf-engine=` value passed to the containerized pandoc.
    pub pdf_engine: String,
    /// Where the workspace root is mounted inside the container.
    pub container_mount: String,
    /// Bound on every subprocess run.
    pub timeout: Duration,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            pandoc_bin: "pandoc".to_string(),
            compose_bin: "docker-compose".to_string(),
            compose_service: "pandoc-extra".to_string(),
            pdf_engine: "pdflatex".to_string(),
            container_mount: "/workspace".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// Result of one conversion attempt.
///
/// Subprocess failures never escape as errors from the invoker; they are
/// folded into `Failure` so the gateway decides the HTTP mapping. `Err` is
/// reserved for environment problems (binary missing, workspace I/O).
#[derive(Debug)]
pub enum ConversionOutcome {
    Success {
        bytes: Vec<u8>,
        output_path: Option<PathBuf>,
    },
    Failure {
        /// `None` when the process was killed (timeout).
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl ConversionOutcome {
    fn timed_out(bound: Duration) -> Self {
        ConversionOutcome::Failure {
            exit_code: None,
            stderr: format!("conversion timed out after {}s", bound.as_secs()),
        }
    }
}

/// Runs pandoc (or the containerized PDF toolchain) and classifies the result.
#[derive(Debug, Clone)]
pub struct PandocInvoker {
    config: InvokerConfig,
    workspace_root: PathBuf,
}

impl PandocInvoker {
    pub fn new(config: InvokerConfig, workspace_root: PathBuf) -> Self {
        Self {
            config,
            workspace_root,
        }
    }

    /// Convert text on stdin to text on stdout. No filesystem involvement.
    ///
    /// Argument order is fixed: `--from <from> --to <to> <extra_args...>`,
    /// with `extra_args` appended verbatim as an escape hatch.
    pub async fn run_direct(
        &self,
        content: &str,
        from_format: &str,
        to_format: &str,
        extra_args: &[String],
    ) -> Result<ConversionOutcome, EngineError> {
        let mut cmd = Command::new(&self.config.pandoc_bin);
        cmd.arg("--from")
            .arg(from_format)
            .arg("--to")
            .arg(to_format)
            .args(extra_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!("running {} --from {} --to {}", self.config.pandoc_bin, from_format, to_format);

        let mut child = cmd.spawn()?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            EngineError::Io(std::io::Error::other("child stdin not captured"))
        })?;

        // Feed stdin while wait_with_output drains stdout/stderr; writing
        // everything first deadlocks once either pipe buffer fills.
        let feed = async {
            // A broken pipe means pandoc already exited; let its stderr tell
            // the story instead of masking it with an I/O error.
            match stdin.write_all(content.as_bytes()).await {
                Err(err) if err.kind() != std::io::ErrorKind::BrokenPipe => Err(err),
                _ => {
                    // Dropping stdin closes the pipe so pandoc sees EOF.
                    drop(stdin);
                    Ok(())
                }
            }
        };

        let run = async {
            let (fed, output) = tokio::join!(feed, child.wait_with_output());
            fed?;
            output
        };

        let output = match timeout(self.config.timeout, run).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!("pandoc exceeded {}s, killed", self.config.timeout.as_secs());
                return Ok(ConversionOutcome::timed_out(self.config.timeout));
            }
        };

        if output.status.success() {
            Ok(ConversionOutcome::Success {
                bytes: output.stdout,
                output_path: None,
            })
        } else {
            Ok(ConversionOutcome::Failure {
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }

    /// Convert an on-disk input file to `output_path`.
    ///
    /// `from_format` is optional; pandoc auto-detects from the extension when
    /// absent.
    pub async fn run_file(
        &self,
        input_path: &Path,
        output_path: &Path,
        from_format: Option<&str>,
        to_format: &str,
        extra_args: &[String],
    ) -> Result<ConversionOutcome, EngineError> {
        let mut cmd = Command::new(&self.config.pandoc_bin);
        cmd.arg(input_path).arg("-o").arg(output_path);
        if let Some(from) = from_format {
            cmd.arg("--from").arg(from);
        }
        cmd.arg("--to").arg(to_format).args(extra_args);

        self.run_expecting_output(cmd, output_path).await
    }

    /// Render `input_path` to PDF through the containerized toolchain, with
    /// the workspace root bind-mounted into the container.
    pub async fn run_pdf_engine(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<ConversionOutcome, EngineError> {
        let input_name = file_name_of(input_path)?;
        let output_name = file_name_of(output_path)?;

        let args = self.pdf_engine_args(&input_name, &output_name);
        let mut cmd = Command::new(&self.config.compose_bin);
        cmd.args(&args);

        self.run_expecting_output(cmd, output_path).await
    }

    /// Argument array for the compose invocation:
    /// `run --rm -v <root>:<mount> <service> <mount>/<in> -o <mount>/<out>
    /// --pdf-engine=<engine>`.
    fn pdf_engine_args(&self, input_name: &str, output_name: &str) -> Vec<String> {
        vec![
            "run".to_string(),
            "--rm".to_string(),
            "-v".to_string(),
            format!(
                "{}:{}",
                self.workspace_root.display(),
                self.config.container_mount
            ),
            self.config.compose_service.clone(),
            format!("{}/{}", self.config.container_mount, input_name),
            "-o".to_string(),
            format!("{}/{}", self.config.container_mount, output_name),
            format!("--pdf-engine={}", self.config.pdf_engine),
        ]
    }

    /// Run a command whose success is proven by `output_path` existing.
    ///
    /// A zero exit code alone is not enough: pandoc can exit clean without
    /// producing the artifact, so the file read doubles as the existence
    /// check.
    async fn run_expecting_output(
        &self,
        mut cmd: Command,
        output_path: &Path,
    ) -> Result<ConversionOutcome, EngineError> {
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn()?;

        let output = match timeout(self.config.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    "conversion exceeded {}s, killed",
                    self.config.timeout.as_secs()
                );
                return Ok(ConversionOutcome::timed_out(self.config.timeout));
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Ok(ConversionOutcome::Failure {
                exit_code: output.status.code(),
                stderr,
            });
        }

        match tokio::fs::read(output_path).await {
            Ok(bytes) => Ok(ConversionOutcome::Success {
                bytes,
                output_path: Some(output_path.to_path_buf()),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(ConversionOutcome::Failure {
                    exit_code: output.status.code(),
                    stderr: if stderr.is_empty() {
                        "conversion reported success but produced no output file".to_string()
                    } else {
                        stderr
                    },
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Run the pandoc binary with the given args and capture output,
    /// timeout-bounded. Used by introspection queries.
    pub(crate) async fn run_capture(
        &self,
        args: &[&str],
    ) -> Result<std::process::Output, EngineError> {
        let mut cmd = Command::new(&self.config.pandoc_bin);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn()?;

        match timeout(self.config.timeout, child.wait_with_output()).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(EngineError::Environment(format!(
                "pandoc {} timed out after {}s",
                args.join(" "),
                self.config.timeout.as_secs()
            ))),
        }
    }
}

fn file_name_of(path: &Path) -> Result<String, EngineError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| {
            EngineError::InvalidInput(format!("path has no file name: {}", path.display()))
        })
}
