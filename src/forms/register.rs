//! Account creation form.

use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::api::ApiClient;
use crate::api::error::error_message;
use crate::error::{DeckError, Result};
use crate::forms::{MISSING_FIELDS, ValidationError};
use crate::http::Transport;
use crate::notify::Notifier;
use crate::ui::{Page, REGISTER_REDIRECT_DELAY, UiHost};

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid username pattern"));

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 3;
const RESERVED_USERNAME: &str = "admin";

/// Live validity message of the confirmation field.
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

const INVALID_CHARSET: ValidationError = ValidationError::new(
    "Invalid Username",
    "Username can only contain letters, numbers, and underscores",
);
const USERNAME_TOO_SHORT: ValidationError = ValidationError::new(
    "Invalid Username",
    "Username must be at least 3 characters long",
);
const USERNAME_RESERVED: ValidationError =
    ValidationError::new("Invalid Username", "The username \"admin\" is reserved");
const PASSWORD_TOO_SHORT: ValidationError = ValidationError::new(
    "Invalid Password",
    "Password must be at least 3 characters long",
);
const PASSWORDS_DIFFER: ValidationError =
    ValidationError::new("Password Mismatch", PASSWORD_MISMATCH);

const REGISTER_BAD_INPUT: &str = "Invalid username or password. Please check your input.";
const REGISTER_FAILED: &str = "Failed to create account. Please try again.";

/// Check a (trimmed) username: `[A-Za-z0-9_]+`, at least three characters,
/// and not `admin` in any case.
pub fn validate_username(username: &str) -> std::result::Result<(), ValidationError> {
    if !USERNAME_PATTERN.is_match(username) {
        return Err(INVALID_CHARSET);
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(USERNAME_TOO_SHORT);
    }
    if username.eq_ignore_ascii_case(RESERVED_USERNAME) {
        return Err(USERNAME_RESERVED);
    }
    Ok(())
}

/// Registration form with live feedback on the confirmation field.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    password: String,
    confirm_password: String,
    confirm_validity: Option<&'static str>,
    submitting: bool,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(username: &str, password: &str, confirm_password: &str) -> Self {
        let mut form = Self::new();
        form.username = username.to_string();
        form.set_password(password);
        form.set_confirm_password(confirm_password);
        form
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    /// Input event on the password field.
    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
        self.refresh_confirm_validity();
    }

    /// Input event on the confirmation field.
    pub fn set_confirm_password(&mut self, value: &str) {
        self.confirm_password = value.to_string();
        self.refresh_confirm_validity();
    }

    /// Custom validity message of the confirmation field; `None` when valid.
    pub fn confirm_validity(&self) -> Option<&'static str> {
        self.confirm_validity
    }

    // Only re-evaluated while both fields hold text; clearing one keeps the last verdict.
    fn refresh_confirm_validity(&mut self) {
        if self.password.is_empty() || self.confirm_password.is_empty() {
            return;
        }
        self.confirm_validity = if self.password != self.confirm_password {
            Some(PASSWORD_MISMATCH)
        } else {
            None
        };
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate all fields in display order; returns trimmed `(username, password)`.
    pub fn validate(&self) -> std::result::Result<(String, String), ValidationError> {
        let username = self.username.trim();
        let password = self.password.trim();
        let confirm = self.confirm_password.trim();

        if username.is_empty() || password.is_empty() || confirm.is_empty() {
            return Err(MISSING_FIELDS);
        }
        validate_username(username)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PASSWORD_TOO_SHORT);
        }
        if password != confirm {
            return Err(PASSWORDS_DIFFER);
        }
        Ok((username.to_string(), password.to_string()))
    }

    /// Validate and call `/api/register`; on success redirect to the login page.
    pub async fn submit<T: Transport, H: UiHost>(
        &mut self,
        api: &ApiClient<T>,
        notifier: &mut Notifier,
        host: &mut H,
    ) -> Result<()> {
        if self.submitting {
            return Err(DeckError::Custom(
                "Registration already in progress".to_string(),
            ));
        }
        let (username, password) = self.validate().map_err(|e| e.report(notifier))?;

        self.submitting = true;
        let outcome = match api.register(&username, &password).await {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => {
                let message = error_message(&response).unwrap_or_else(|| {
                    if response.status == 400 {
                        REGISTER_BAD_INPUT.to_string()
                    } else {
                        REGISTER_FAILED.to_string()
                    }
                });
                Err(DeckError::Api {
                    status: response.status,
                    message,
                })
            }
            Err(err) => Err(err),
        };

        match outcome {
            Ok(()) => {
                info!(user = %username, "account created");
                notifier.success(
                    "Account Created",
                    "Your account has been created successfully!",
                );
                host.navigate(Page::Login, REGISTER_REDIRECT_DELAY);
                Ok(())
            }
            Err(err) => {
                let message = match &err {
                    DeckError::Api { message, .. } => message.as_str(),
                    _ => REGISTER_FAILED,
                };
                notifier.error("Registration Failed", message);
                self.submitting = false;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockTransport, ScriptedHost};
    use serde_json::json;

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username("ab"), Err(USERNAME_TOO_SHORT));
        assert_eq!(validate_username("admin"), Err(USERNAME_RESERVED));
        assert_eq!(validate_username("ADMIN"), Err(USERNAME_RESERVED));
        assert_eq!(validate_username("john doe"), Err(INVALID_CHARSET));
        assert_eq!(validate_username("jöhn"), Err(INVALID_CHARSET));
        assert_eq!(validate_username("john_2"), Ok(()));
    }

    #[test]
    fn test_password_rules() {
        let short = RegisterForm::with_fields("john_2", "ab", "ab");
        assert_eq!(short.validate(), Err(PASSWORD_TOO_SHORT));

        let mismatch = RegisterForm::with_fields("john_2", "abc", "abd");
        assert_eq!(mismatch.validate(), Err(PASSWORDS_DIFFER));

        let ok = RegisterForm::with_fields(" john_2 ", "abc", "abc");
        assert_eq!(
            ok.validate(),
            Ok(("john_2".to_string(), "abc".to_string()))
        );
    }

    #[test]
    fn test_validation_order() {
        // Charset is reported before length
        let form = RegisterForm::with_fields("a b", "x", "y");
        assert_eq!(form.validate(), Err(INVALID_CHARSET));

        let form = RegisterForm::with_fields("john_2", "", "abc");
        assert_eq!(form.validate(), Err(MISSING_FIELDS));
    }

    #[test]
    fn test_live_confirm_validity() {
        let mut form = RegisterForm::new();
        form.set_password("secret");
        assert_eq!(form.confirm_validity(), None);

        form.set_confirm_password("sec");
        assert_eq!(form.confirm_validity(), Some(PASSWORD_MISMATCH));

        form.set_confirm_password("secret");
        assert_eq!(form.confirm_validity(), None);

        form.set_password("secret2");
        assert_eq!(form.confirm_validity(), Some(PASSWORD_MISMATCH));

        // Clearing a field keeps the previous verdict
        form.set_confirm_password("");
        assert_eq!(form.confirm_validity(), Some(PASSWORD_MISMATCH));
    }

    #[tokio::test]
    async fn test_submit_success() {
        let api = ApiClient::new(MockTransport::new());
        api.transport().push_json(200, json!({"success": true}));
        let mut notifier = Notifier::new();
        let mut host = ScriptedHost::new();

        let mut form = RegisterForm::with_fields("john_2", "abc", "abc");
        form.submit(&api, &mut notifier, &mut host).await.unwrap();

        let sent = api.transport().last_request().unwrap();
        assert_eq!(sent.endpoint, "/api/register");
        assert_eq!(
            sent.json_body(),
            Some(&json!({"username": "john_2", "password": "abc"}))
        );
        assert_eq!(
            host.last_navigation(),
            Some((Page::Login, REGISTER_REDIRECT_DELAY))
        );
        assert_eq!(notifier.last().unwrap().title, "Account Created");
    }

    #[tokio::test]
    async fn test_submit_invalid_makes_no_request() {
        let api = ApiClient::new(MockTransport::new());
        let mut notifier = Notifier::new();
        let mut host = ScriptedHost::new();

        let mut form = RegisterForm::with_fields("admin", "abc", "abc");
        let err = form.submit(&api, &mut notifier, &mut host).await.unwrap_err();

        assert!(matches!(err, DeckError::Validation(_)));
        assert!(api.transport().requests().is_empty());
        assert_eq!(notifier.last().unwrap().title, "Invalid Username");
    }

    #[tokio::test]
    async fn test_submit_server_errors() {
        let api = ApiClient::new(MockTransport::new());
        api.transport()
            .push_json(400, json!({"error": "user already exists"}));
        api.transport().push(crate::http::ApiResponse::new(400, "bad"));
        let mut notifier = Notifier::new();
        let mut host = ScriptedHost::new();

        let mut form = RegisterForm::with_fields("john_2", "abc", "abc");
        assert!(form.submit(&api, &mut notifier, &mut host).await.is_err());
        assert_eq!(notifier.last().unwrap().description, "user already exists");
        assert!(!form.is_submitting());

        assert!(form.submit(&api, &mut notifier, &mut host).await.is_err());
        assert_eq!(notifier.last().unwrap().description, REGISTER_BAD_INPUT);
        assert!(host.last_navigation().is_none());
    }
}
