//! Pages and the host surface the controllers drive.

use std::time::Duration;

/// Delay before leaving the login page after a successful sign-in.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(500);
/// Delay before leaving the register page; long enough to read the toast.
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// Delay before returning to the login page after logout.
pub const LOGOUT_REDIRECT_DELAY: Duration = Duration::from_millis(500);

/// Top-level views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    Dashboard,
}

impl Page {
    /// Document served for this page.
    pub fn document(&self) -> &'static str {
        match self {
            Page::Login => "login.html",
            Page::Register => "register.html",
            Page::Dashboard => "dashboard.html",
        }
    }
}

/// Interactive capabilities the controllers need from whatever renders them.
pub trait UiHost {
    /// Ask a yes/no question. Returning `false` cancels the action.
    fn confirm(&mut self, message: &str) -> bool;

    /// Ask for a line of text. `None` means the user cancelled.
    fn prompt(&mut self, message: &str, default: Option<&str>) -> Option<String>;

    /// Leave the current page after `delay`.
    fn navigate(&mut self, page: Page, delay: Duration);

    /// Open a URL in a new tab (or hand it to a downloader).
    fn open_tab(&mut self, url: &str);
}
