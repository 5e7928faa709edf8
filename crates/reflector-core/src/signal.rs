//! Invocation outcomes reported to the gateway wrapper.
//!
//! Every invocation ends in exactly one [`Outcome`]. Emitting an outcome writes
//! its payload and hands back the exit code; terminating the process is left to
//! the binary's entry point.

use std::io::{self, Write};

use serde::Serialize;

use crate::exit_codes;

/// Error payload the gateway matches against its response templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "errCode")]
    pub code: String,
    #[serde(rename = "errMessage")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Normal completion; `body` is the literal response body.
    Success { body: String },
    /// `code` selects the gateway error mapping, `message` goes to the client and
    /// `log` to the operator.
    StructuredError {
        code: String,
        message: String,
        log: Option<String>,
    },
    Redirect { location: String },
}

impl Outcome {
    pub fn success(body: impl Into<String>) -> Self {
        Self::Success { body: body.into() }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StructuredError {
            code: code.into(),
            message: message.into(),
            log: None,
        }
    }

    pub fn error_with_log(
        code: impl Into<String>,
        message: impl Into<String>,
        log: impl Into<String>,
    ) -> Self {
        Self::StructuredError {
            code: code.into(),
            message: message.into(),
            log: Some(log.into()),
        }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect {
            location: location.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success { .. } => exit_codes::SUCCESS,
            Self::Redirect { .. } => exit_codes::REDIRECT,
            Self::StructuredError { .. } => exit_codes::STRUCTURED_ERROR,
        }
    }

    /// Writes the payload to `out` (and the log line to `diag` for errors) and
    /// returns the exit code the process must terminate with.
    pub fn emit<O: Write, D: Write>(&self, out: &mut O, diag: &mut D) -> io::Result<i32> {
        match self {
            Self::Success { body } => out.write_all(body.as_bytes())?,
            Self::Redirect { location } => out.write_all(location.as_bytes())?,
            Self::StructuredError { code, message, log } => {
                let response = ErrorResponse {
                    code: code.clone(),
                    message: message.clone(),
                };
                serde_json::to_writer(&mut *out, &response)?;
                if let Some(log) = log.as_deref().filter(|l| !l.is_empty()) {
                    diag.write_all(log.as_bytes())?;
                    diag.flush()?;
                }
            }
        }
        out.flush()?;
        tracing::debug!(exit_code = self.exit_code(), "outcome emitted");
        Ok(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(outcome: &Outcome) -> (String, String, i32) {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let code = outcome.emit(&mut out, &mut diag).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
            code,
        )
    }

    #[test]
    fn test_error_writes_payload_and_log() {
        let outcome = Outcome::error_with_log("regex503", "invalid input request", "ret=503");
        let (out, diag, code) = emit(&outcome);

        assert_eq!(
            out,
            r#"{"errCode":"regex503","errMessage":"invalid input request"}"#
        );
        assert_eq!(diag, "ret=503");
        assert_eq!(code, exit_codes::STRUCTURED_ERROR);
    }

    #[test]
    fn test_error_without_log_leaves_diagnostics_empty() {
        for outcome in [
            Outcome::error("notFound", "requested object not found"),
            Outcome::error_with_log("notFound", "requested object not found", ""),
        ] {
            let (_, diag, code) = emit(&outcome);
            assert!(diag.is_empty());
            assert_eq!(code, 2);
        }
    }

    #[test]
    fn test_error_payload_escapes_text() {
        let (out, _, _) = emit(&Outcome::error("bad\"code", "line\nbreak"));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["errCode"], "bad\"code");
        assert_eq!(v["errMessage"], "line\nbreak");
    }

    #[test]
    fn test_redirect_writes_bare_location() {
        let (out, diag, code) = emit(&Outcome::redirect("https://www.google.com/"));
        assert_eq!(out, "https://www.google.com/");
        assert!(diag.is_empty());
        assert_eq!(code, exit_codes::REDIRECT);
    }

    #[test]
    fn test_success_writes_body_verbatim() {
        let (out, diag, code) = emit(&Outcome::success("1.2.3.4"));
        assert_eq!(out, "1.2.3.4");
        assert!(diag.is_empty());
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            Outcome::success("").exit_code(),
            Outcome::redirect("").exit_code(),
            Outcome::error("", "").exit_code(),
        ];
        assert_eq!(codes, [0, 1, 2]);
    }
}
