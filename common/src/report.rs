//! Form reports: the success/error summary shown under a form after submit.

use crate::api::{reason_phrase, ApiResponse, ClientError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Success,
    Error,
}

/// Status line and detail of the response that produced a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub status: u16,
    pub status_text: String,
    pub detail: Option<String>,
}

impl From<&ApiResponse> for ResponseSummary {
    fn from(response: &ApiResponse) -> Self {
        Self {
            status: response.status,
            status_text: response.status_text.clone(),
            detail: if response.is_success() {
                None
            } else {
                response.error_detail()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub kind: ReportKind,
    pub desc: String,
    /// Missing when the request never got a response.
    pub response: Option<ResponseSummary>,
}

impl FormReport {
    pub fn success(desc: impl Into<String>, response: &ApiResponse) -> Self {
        Self {
            kind: ReportKind::Success,
            desc: desc.into(),
            response: Some(response.into()),
        }
    }

    pub fn error(desc: impl Into<String>, response: Option<&ApiResponse>) -> Self {
        Self {
            kind: ReportKind::Error,
            desc: desc.into(),
            response: response.map(ResponseSummary::from),
        }
    }

    /// Error report for a failed request. Status failures keep their status
    /// line; transport and decode failures only keep the description.
    pub fn from_error(desc: impl Into<String>, error: &ClientError) -> Self {
        let response = match error {
            ClientError::Status {
                status,
                status_text,
                detail,
            } => Some(ResponseSummary {
                status: *status,
                status_text: status_text.clone(),
                detail: detail.clone(),
            }),
            ClientError::Transport(_) | ClientError::Decode(_) => None,
        };
        Self {
            kind: ReportKind::Error,
            desc: desc.into(),
            response,
        }
    }

    /// A `400 Bad Request` produced locally, before any request is sent.
    pub fn rejected(desc: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: ReportKind::Error,
            desc: desc.into(),
            response: Some(ResponseSummary {
                status: 400,
                status_text: reason_phrase(400).to_string(),
                detail: Some(detail.into()),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ReportKind::Success
    }

    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            status_text: reason_phrase(status).to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn success_drops_body_detail() {
        let report = FormReport::success("ok", &response(201, r#"{"detail":"x"}"#));

        assert!(report.is_success());
        assert_eq!(report.status(), Some(201));
        assert_eq!(report.response.unwrap().detail, None);
    }

    #[test]
    fn error_keeps_validation_message() {
        let body = r#"{"detail":[{"type":"missing","loc":["query","tel"],"msg":"Field required","input":null}]}"#;
        let report = FormReport::error("fallo", Some(&response(422, body)));

        let summary = report.response.unwrap();
        assert_eq!(summary.status_text, "Unprocessable Entity");
        assert_eq!(summary.detail.as_deref(), Some("Field required"));
    }

    #[test]
    fn transport_failures_have_no_status() {
        let report = FormReport::from_error("fallo", &ClientError::Transport("offline".into()));

        assert_eq!(report.kind, ReportKind::Error);
        assert_eq!(report.status(), None);
    }

    #[test]
    fn rejected_reports_look_like_bad_requests() {
        let report = FormReport::rejected("no", "Teléfono inválido");

        assert_eq!(report.status(), Some(400));
        assert_eq!(report.response.unwrap().status_text, "Bad Request");
    }
}
