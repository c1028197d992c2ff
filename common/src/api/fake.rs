use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::{reason_phrase, ApiRequest, ApiResponse, Backend, ClientError};

/// Backend double that records every request and replays scripted
/// responses in order.
#[derive(Default)]
pub(crate) struct RecordingBackend {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ClientError>>>,
}

impl RecordingBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: Value) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            status_text: reason_phrase(status).to_string(),
            body: body.to_string(),
        }));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ClientError::Transport(message.to_string())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Backend for RecordingBackend {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted response".into())))
    }
}
