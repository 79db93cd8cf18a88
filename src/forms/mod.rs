//! Login and registration form controllers.
//!
//! Both validate on the client before making a single request; validation
//! failures are shown as toasts and never reach the network.

mod login;
mod register;

pub use login::LoginForm;
pub use register::{RegisterForm, validate_username};

use crate::error::DeckError;
use crate::notify::Notifier;

/// A rejected form field, with the toast title and message to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub title: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub(crate) const fn new(title: &'static str, message: &'static str) -> Self {
        Self { title, message }
    }

    /// Show the toast and turn into a crate error.
    pub(crate) fn report(self, notifier: &mut Notifier) -> DeckError {
        notifier.error(self.title, self.message);
        self.into()
    }
}

impl From<ValidationError> for DeckError {
    fn from(err: ValidationError) -> Self {
        DeckError::Validation(err.message.to_string())
    }
}

pub(crate) const MISSING_FIELDS: ValidationError =
    ValidationError::new("Validation Error", "Please fill in all fields");
