//! Format-name validation
//!
//! Format names come straight from request payloads and end up as subprocess
//! arguments, so they are checked against pandoc's format grammar before any
//! command line is built: alphanumerics plus `+`, `-`, `_` (covers extension
//! syntax like `markdown+smart` and variants like `html5`, `gfm`).

use crate::error::EngineError;

/// Check a user-supplied format name against the allow-pattern.
pub fn validate_format(name: &str) -> Result<(), EngineError> {
    if name.is_empty() {
        return Err(EngineError::InvalidInput(
            "format must not be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '_'))
    {
        return Err(EngineError::InvalidInput(format!(
            "invalid format name: {}",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_formats() {
        for name in ["markdown", "html5", "gfm", "plain", "latex", "rst"] {
            assert!(validate_format(name).is_ok(), "rejected {}", name);
        }
    }

    #[test]
    fn test_accepts_extension_syntax() {
        assert!(validate_format("markdown+smart").is_ok());
        assert!(validate_format("markdown-raw_html").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            validate_format(""),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_shell_metacharacters() {
        for name in ["md; rm -rf /", "$(whoami)", "a b", "md|cat", "../etc"] {
            assert!(validate_format(name).is_err(), "accepted {}", name);
        }
    }
}
