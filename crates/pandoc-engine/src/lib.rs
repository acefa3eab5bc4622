//! Pandoc conversion engine
//!
//! This crate wraps the external pandoc binary (and a containerized
//! pandoc+LaTeX toolchain for PDF rendering) behind a small async API:
//! - `PandocInvoker`: builds argument arrays, runs the subprocess with a
//!   timeout, captures stderr, and classifies the outcome
//! - `JobWorkspace`: job-id-qualified scratch files with best-effort cleanup
//! - capability introspection (`--list-input-formats`, `--version`)
//!
//! No HTTP concerns live here; the sidecar API crate maps outcomes to
//! responses.

pub mod error;
pub mod formats;
pub mod introspect;
pub mod invoker;
pub mod workspace;

pub use error::EngineError;
pub use formats::validate_format;
pub use introspect::{FormatList, PandocVersion};
pub use invoker::{ConversionOutcome, InvokerConfig, PandocInvoker};
pub use workspace::{JobId, JobWorkspace, StoredFile};
