//! In-memory doubles for the transport and the UI host.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

use crate::error::{DeckError, Result};
use crate::http::{ApiRequest, ApiResponse, Transport};
use crate::ui::{Page, UiHost};

/// Records every request and answers from a queue of scripted responses.
#[derive(Debug)]
pub(crate) struct MockTransport {
    base_url: Url,
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            base_url: Url::parse("http://localhost:8080").expect("static url"),
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub(crate) fn push(&self, response: ApiResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub(crate) fn push_json(&self, status: u16, body: Value) {
        self.push(ApiResponse::json_body(status, &body));
    }

    pub(crate) fn push_error(&self, error: DeckError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Transport for MockTransport {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DeckError::Custom("no scripted response".to_string())))
    }
}

#[derive(Debug, Default)]
pub(crate) struct HostState {
    pub(crate) confirms: VecDeque<bool>,
    pub(crate) prompts: VecDeque<Option<String>>,
    pub(crate) confirm_messages: Vec<String>,
    pub(crate) prompt_messages: Vec<(String, Option<String>)>,
    pub(crate) navigations: Vec<(Page, Duration)>,
    pub(crate) opened: Vec<String>,
}

/// UI host with scripted answers. Clones share state, so a test can keep a
/// handle after giving one to a controller.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedHost {
    inner: Rc<RefCell<HostState>>,
}

impl ScriptedHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn answer_confirm(&self, answer: bool) {
        self.inner.borrow_mut().confirms.push_back(answer);
    }

    pub(crate) fn answer_prompt(&self, answer: Option<&str>) {
        self.inner
            .borrow_mut()
            .prompts
            .push_back(answer.map(str::to_string));
    }

    pub(crate) fn state(&self) -> std::cell::Ref<'_, HostState> {
        self.inner.borrow()
    }

    pub(crate) fn last_navigation(&self) -> Option<(Page, Duration)> {
        self.inner.borrow().navigations.last().copied()
    }
}

impl UiHost for ScriptedHost {
    fn confirm(&mut self, message: &str) -> bool {
        let mut state = self.inner.borrow_mut();
        state.confirm_messages.push(message.to_string());
        state.confirms.pop_front().unwrap_or(false)
    }

    fn prompt(&mut self, message: &str, default: Option<&str>) -> Option<String> {
        let mut state = self.inner.borrow_mut();
        state
            .prompt_messages
            .push((message.to_string(), default.map(str::to_string)));
        state.prompts.pop_front().flatten()
    }

    fn navigate(&mut self, page: Page, delay: Duration) {
        self.inner.borrow_mut().navigations.push((page, delay));
    }

    fn open_tab(&mut self, url: &str) {
        self.inner.borrow_mut().opened.push(url.to_string());
    }
}
