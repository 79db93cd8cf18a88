//! Sign-in form.

use tracing::info;

use crate::api::ApiClient;
use crate::api::types::LoginResponse;
use crate::error::{DeckError, Result};
use crate::forms::{MISSING_FIELDS, ValidationError};
use crate::http::Transport;
use crate::notify::Notifier;
use crate::session::{Session, SessionStore};
use crate::ui::{LOGIN_REDIRECT_DELAY, Page, UiHost};

const BAD_CREDENTIALS: &str =
    "Invalid username or password. If you don't have an account, please register.";
const LOGIN_FAILED: &str = "Invalid credentials. Please check your username and password.";
const LOGIN_UNREACHABLE: &str = "Invalid credentials. Please try again.";

/// Username/password form. Field values are trimmed before use.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    submitting: bool,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            submitting: false,
        }
    }

    /// Whether the submit button is disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Trimmed `(username, password)` if both are present.
    pub fn validate(&self) -> std::result::Result<(String, String), ValidationError> {
        let username = self.username.trim();
        let password = self.password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(MISSING_FIELDS);
        }
        Ok((username.to_string(), password.to_string()))
    }

    /// Validate, call `/api/login`, and on success persist the session, hand the
    /// token to `api` and redirect to the dashboard.
    ///
    /// Every failure is also reported as a toast and re-enables the form.
    pub async fn submit<T: Transport, H: UiHost>(
        &mut self,
        api: &mut ApiClient<T>,
        store: &mut SessionStore,
        notifier: &mut Notifier,
        host: &mut H,
    ) -> Result<Session> {
        if self.submitting {
            return Err(DeckError::Custom("Login already in progress".to_string()));
        }
        let (username, password) = self.validate().map_err(|e| e.report(notifier))?;

        self.submitting = true;
        match self.attempt(api, store, &username, &password).await {
            Ok(session) => {
                info!(user = %session.username, "logged in");
                notifier.success("Login Successful", "Welcome back!");
                host.navigate(Page::Dashboard, LOGIN_REDIRECT_DELAY);
                Ok(session)
            }
            Err(err) => {
                let message = match &err {
                    DeckError::Api { message, .. } => message.as_str(),
                    _ => LOGIN_UNREACHABLE,
                };
                notifier.error("Login Failed", message);
                self.submitting = false;
                Err(err)
            }
        }
    }

    async fn attempt<T: Transport>(
        &self,
        api: &mut ApiClient<T>,
        store: &mut SessionStore,
        username: &str,
        password: &str,
    ) -> Result<Session> {
        let response = api.login(username, password).await?;
        let body: LoginResponse = response.json().unwrap_or_default();

        if !response.is_success() || !body.success {
            let message = if response.status == 401 {
                BAD_CREDENTIALS
            } else {
                LOGIN_FAILED
            };
            return Err(DeckError::Api {
                status: response.status,
                message: message.to_string(),
            });
        }

        let token = body
            .token
            .filter(|t| !t.is_empty())
            .ok_or(DeckError::InvalidResponse)?;
        let session = Session::new(token, username);
        store.persist(&session)?;
        api.set_token(session.token.clone());
        Ok(session)
    }
}
