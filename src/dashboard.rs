//! Dashboard controller.
//!
//! Owns the session, the gateway client, the [`BrowserState`] view-model, the
//! context menu and the toast surface, and maps each user action onto exactly
//! one API call. Successful mutations reload the current listing; failures are
//! reported as toasts and leave the view as it was. A 401 from any call sends
//! the user back to the login page.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::api::error::{check_status, error_message, response_error};
use crate::api::types::{ListResponse, UploadResponse};
use crate::browser::{
    BrowserState, ContextMenu, Crumb, Grid, MenuChoice, MenuCommand, MenuTarget,
    SelectionSummary, SidebarEntry,
};
use crate::error::{DeckError, Result};
use crate::fs::BrowsePath;
use crate::http::{ApiResponse, HttpClient, Transport, UploadFile};
use crate::notify::Notifier;
use crate::session::{Session, SessionStore};
use crate::ui::{LOGOUT_REDIRECT_DELAY, Page, UiHost};

/// The signed-in file browser.
pub struct Dashboard<H: UiHost, T: Transport = HttpClient> {
    api: ApiClient<T>,
    store: SessionStore,
    session: Session,
    state: BrowserState,
    menu: ContextMenu,
    notifier: Notifier,
    host: H,
}

impl<H: UiHost, T: Transport> Dashboard<H, T> {
    /// Enter the dashboard.
    ///
    /// Without a stored session the host is sent to the login page and
    /// [`DeckError::Unauthorized`] is returned. The listing is not fetched yet;
    /// call [`Dashboard::load_files`].
    pub fn open(transport: T, store: SessionStore, mut host: H) -> Result<Self> {
        let Some(session) = store.load() else {
            host.navigate(Page::Login, Duration::ZERO);
            return Err(DeckError::Unauthorized);
        };
        debug!(user = %session.username, "dashboard opened");

        Ok(Self {
            api: ApiClient::with_token(transport, session.token.clone()),
            store,
            session,
            state: BrowserState::new(),
            menu: ContextMenu::new(),
            notifier: Notifier::new(),
            host,
        })
    }

    /// Name shown in the header.
    pub fn username(&self) -> &str {
        &self.session.username
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn grid(&self) -> Grid {
        self.state.grid()
    }

    pub fn selection_summary(&self) -> SelectionSummary {
        self.state.selection_summary()
    }

    pub fn breadcrumb(&self) -> Vec<Crumb> {
        self.state.breadcrumb()
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        self.state.sidebar()
    }

    /// Fetch and apply the listing of the current folder.
    pub async fn load_files(&mut self) -> Result<()> {
        const FAILURE: &str = "Error loading files";

        let path = self.state.current_path().clone();
        let response = match self.api.list_files(&path).await {
            Ok(response) => response,
            Err(err) => {
                self.notifier.error("Error", FAILURE);
                return Err(err);
            }
        };

        if response.is_unauthorized() {
            return Err(self.expire_session());
        }
        if !response.is_success() {
            self.notifier.error("Error", FAILURE);
            return Err(response_error(&response));
        }

        let listing: ListResponse = match response.json() {
            Ok(listing) => listing,
            Err(err) => {
                self.notifier.error("Error", FAILURE);
                return Err(err);
            }
        };
        if listing.success {
            let items = listing.items.unwrap_or_default();
            debug!(path = %path, items = items.len(), "listing loaded");
            self.state.apply_listing(&path, items);
        }
        Ok(())
    }

    /// Go to a folder (or the root) and load it. Clears the selection.
    pub async fn navigate(&mut self, path: BrowsePath) -> Result<()> {
        self.menu.close();
        self.state.navigate(path);
        self.load_files().await
    }

    /// Click on a grid item: folders are entered, files are ignored.
    pub async fn open_item(&mut self, name: &str) -> Result<()> {
        match self.state.item(name) {
            Some(item) if item.is_folder() => {
                let target = BrowsePath::folder(item.name.as_str());
                self.navigate(target).await
            }
            _ => Ok(()),
        }
    }

    /// Update the search filter. The cached listing is re-filtered; nothing is fetched.
    pub fn search(&mut self, query: &str) {
        self.state.set_search(query);
    }

    /// Flip selection of an item; returns whether it is now selected.
    pub fn toggle_select(&mut self, name: &str) -> bool {
        self.state.toggle_select(name)
    }

    /// Open the context menu for an item of the current listing.
    pub fn open_menu(&mut self, name: &str, x: i32, y: i32) -> bool {
        match self.state.item(name) {
            Some(item) => {
                let target = MenuTarget::from(item);
                self.menu.open(target, x, y);
                true
            }
            None => false,
        }
    }

    /// Label of the menu's select entry.
    pub fn menu_select_label(&self) -> &'static str {
        self.menu.select_label(&self.state)
    }

    /// Click anywhere outside the menu.
    pub fn document_click(&mut self) {
        self.menu.on_document_click();
    }

    /// Run a context-menu entry for the bound item.
    pub async fn menu_action(&mut self, choice: MenuChoice) -> Result<()> {
        let Some(command) = self.menu.choose(choice) else {
            return Ok(());
        };

        match command {
            MenuCommand::ToggleSelect(name) => {
                self.state.toggle_select(&name);
                Ok(())
            }
            MenuCommand::Rename(name) => {
                let Some(new_name) = self.host.prompt("New name:", Some(&name)) else {
                    return Ok(());
                };
                self.rename(&name, &new_name).await
            }
            MenuCommand::Delete(name) => self.delete(vec![name]).await.map(|_| ()),
        }
    }

    /// Rename an item of the current folder. Empty or unchanged names are ignored.
    pub async fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if new_name.is_empty() || new_name == old_name {
            return Ok(());
        }

        let path = self.state.current_path().clone();
        let result = self.api.rename(&path, old_name, new_name).await;
        self.check(result, "Error renaming")?;

        info!(from = %old_name, to = %new_name, "renamed");
        self.notifier
            .success("Renamed", format!("Renamed to {}", new_name));
        self.reload().await;
        Ok(())
    }

    /// Prompt for a folder name and create it in the current folder.
    pub async fn create_folder(&mut self) -> Result<()> {
        match self.host.prompt("Folder name:", None) {
            Some(name) if !name.is_empty() => self.create_folder_named(&name).await,
            _ => Ok(()),
        }
    }

    pub async fn create_folder_named(&mut self, folder_name: &str) -> Result<()> {
        let path = self.state.current_path().clone();
        let result = self.api.create_folder(&path, folder_name).await;
        self.check(result, "Error creating folder")?;

        info!(folder = %folder_name, "folder created");
        self.notifier.success(
            "Folder Created",
            format!("Folder \"{}\" created", folder_name),
        );
        self.reload().await;
        Ok(())
    }

    /// Upload files into the current folder; returns the server's upload count.
    pub async fn upload(&mut self, files: Vec<UploadFile>) -> Result<u64> {
        const FAILURE: &str = "Error uploading files";

        if files.is_empty() {
            return Ok(0);
        }

        let path = self.state.current_path().clone();
        let result = self.api.upload(&path, files).await;
        let response = self.check(result, FAILURE)?;

        let body: UploadResponse = response.json().unwrap_or_default();
        if !body.success {
            self.notifier.error("Error", FAILURE);
            return Err(DeckError::InvalidResponse);
        }

        info!(uploaded = body.uploaded, "upload finished");
        self.notifier.success(
            "Upload Successful",
            format!("{} file(s) uploaded", body.uploaded),
        );
        self.reload().await;
        Ok(body.uploaded)
    }

    /// Hand one download URL per selected item to the host.
    ///
    /// The server authenticates downloads through a `token` query parameter, so
    /// each URL carries the session token.
    pub fn download(&mut self) -> Result<usize> {
        let names: Vec<String> = self.state.selected().iter().cloned().collect();
        if names.is_empty() {
            self.notifier
                .error("No Selection", "Please select files to download");
            return Err(DeckError::Validation("nothing selected".to_string()));
        }

        let path = self.state.current_path().clone();
        for name in &names {
            let url = self.api.download_url(&path, name)?;
            self.host.open_tab(&url);
        }

        self.notifier
            .success("Download", format!("Downloading {} item(s)", names.len()));
        Ok(names.len())
    }

    /// Delete the selected items.
    pub async fn delete_selected(&mut self) -> Result<bool> {
        let names: Vec<String> = self.state.selected().iter().cloned().collect();
        self.delete(names).await
    }

    /// Delete items of the current folder after interactive confirmation.
    ///
    /// Returns `Ok(false)` when the user declined. Deleted names leave the selection.
    pub async fn delete(&mut self, names: Vec<String>) -> Result<bool> {
        if names.is_empty() {
            self.notifier
                .error("No Selection", "Please select files to delete");
            return Err(DeckError::Validation("nothing selected".to_string()));
        }

        let question = format!("Are you sure you want to delete {} item(s)?", names.len());
        if !self.host.confirm(&question) {
            return Ok(false);
        }

        let path = self.state.current_path().clone();
        let result = self.api.delete(&path, &names).await;
        self.check(result, "Error deleting")?;

        info!(count = names.len(), "deleted");
        self.notifier
            .success("Deleted", format!("Deleted {} item(s)", names.len()));
        self.state.deselect(&names);
        self.reload().await;
        Ok(true)
    }

    /// Sign out: best-effort server logout, forget the session, return to login.
    pub async fn logout(&mut self) -> Result<()> {
        if let Err(err) = self.api.logout().await.and_then(check_status) {
            warn!(error = %err, "logout request failed");
        }

        self.store.clear()?;
        self.api.clear_token();
        info!(user = %self.session.username, "logged out");
        self.notifier
            .success("Logged Out", "You have been successfully logged out");
        self.host.navigate(Page::Login, LOGOUT_REDIRECT_DELAY);
        Ok(())
    }

    // Shared outcome handling for mutations.
    fn check(&mut self, result: Result<ApiResponse>, fallback: &str) -> Result<ApiResponse> {
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                self.notifier.error("Error", fallback);
                return Err(err);
            }
        };

        if response.is_unauthorized() {
            return Err(self.expire_session());
        }
        if !response.is_success() {
            let message = error_message(&response).unwrap_or_else(|| fallback.to_string());
            self.notifier.error("Error", message);
            return Err(response_error(&response));
        }
        Ok(response)
    }

    // The stored token is left in place; only the view changes.
    fn expire_session(&mut self) -> DeckError {
        warn!(user = %self.session.username, "session rejected by server");
        self.menu.close();
        self.host.navigate(Page::Login, Duration::ZERO);
        DeckError::Unauthorized
    }

    async fn reload(&mut self) {
        if let Err(err) = self.load_files().await {
            debug!(error = %err, "reload after mutation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FileSystemItem;
    use crate::session::{LocalStorage, TOKEN_KEY};
    use crate::testing::{MockTransport, ScriptedHost};
    use serde_json::{Value, json};

    fn signed_in_store() -> SessionStore {
        let mut store = SessionStore::new(LocalStorage::in_memory());
        store.persist(&Session::new("T", "alice")).unwrap();
        store
    }

    fn root_items() -> Value {
        json!({
            "success": true,
            "items": [
                {"id": "photos", "name": "photos", "type": "folder", "modified": "2024-05-01"},
                {"id": "report.pdf", "name": "report.pdf", "type": "file", "size": "1.2 MB", "modified": "2024-05-01"},
                {"id": "notes.txt", "name": "notes.txt", "type": "file", "size": "3 B", "modified": "2024-05-02"}
            ]
        })
    }

    async fn loaded() -> (Dashboard<ScriptedHost, MockTransport>, ScriptedHost) {
        let host = ScriptedHost::new();
        let mut dashboard =
            Dashboard::open(MockTransport::new(), signed_in_store(), host.clone()).unwrap();
        dashboard.api().transport().push_json(200, root_items());
        dashboard.load_files().await.unwrap();
        (dashboard, host)
    }

    fn transport(dashboard: &Dashboard<ScriptedHost, MockTransport>) -> &MockTransport {
        dashboard.api().transport()
    }

    #[test]
    fn test_open_without_session_redirects() {
        let host = ScriptedHost::new();
        let store = SessionStore::new(LocalStorage::in_memory());
        let res = Dashboard::open(MockTransport::new(), store, host.clone());

        assert!(matches!(res, Err(DeckError::Unauthorized)));
        assert_eq!(host.last_navigation(), Some((Page::Login, Duration::ZERO)));
    }

    #[tokio::test]
    async fn test_initial_load() {
        let (dashboard, _) = loaded().await;
        assert_eq!(dashboard.username(), "alice");
        assert_eq!(dashboard.grid().entries().len(), 3);
        assert!(dashboard.state().known_folders().contains("photos"));

        let sent = transport(&dashboard).last_request().unwrap();
        assert_eq!(sent.endpoint, "/api/files");
        assert_eq!(sent.query_param("path"), Some(""));
        assert_eq!(sent.header("Authorization"), Some("Bearer T"));
    }

    #[tokio::test]
    async fn test_unauthorized_listing_redirects() {
        let host = ScriptedHost::new();
        let mut dashboard =
            Dashboard::open(MockTransport::new(), signed_in_store(), host.clone()).unwrap();
        transport(&dashboard).push_json(401, json!({"error": "Not authenticated"}));

        let err = dashboard.load_files().await.unwrap_err();
        assert!(matches!(err, DeckError::Unauthorized));
        assert_eq!(host.last_navigation(), Some((Page::Login, Duration::ZERO)));
        // No toast, and the token stays stored
        assert!(dashboard.notifier().toasts().is_empty());
        assert_eq!(dashboard.store.storage().get_item(TOKEN_KEY), Some("T"));
    }

    #[tokio::test]
    async fn test_listing_failure_toasts() {
        let host = ScriptedHost::new();
        let mut dashboard =
            Dashboard::open(MockTransport::new(), signed_in_store(), host.clone()).unwrap();
        transport(&dashboard).push_json(500, json!({"error": "disk"}));

        assert!(dashboard.load_files().await.is_err());
        let toast = dashboard.notifier().last().unwrap();
        assert_eq!(toast.description, "Error loading files");
        assert!(host.last_navigation().is_none());
    }

    #[tokio::test]
    async fn test_navigation_clears_selection() {
        let (mut dashboard, _) = loaded().await;
        dashboard.toggle_select("report.pdf");
        assert_eq!(dashboard.selection_summary().count, 1);

        transport(&dashboard).push_json(
            200,
            json!({"success": true, "items": [{"id": "cat.jpg", "name": "cat.jpg", "type": "file", "size": "20 KB"}]}),
        );
        dashboard.open_item("photos").await.unwrap();

        assert_eq!(dashboard.state().current_path(), &BrowsePath::folder("photos"));
        assert!(dashboard.state().selected().is_empty());
        assert!(!dashboard.selection_summary().delete_enabled);
        assert_eq!(
            transport(&dashboard).last_request().unwrap().query_param("path"),
            Some("photos")
        );
        assert_eq!(dashboard.breadcrumb().len(), 2);
    }

    #[tokio::test]
    async fn test_open_file_does_nothing() {
        let (mut dashboard, _) = loaded().await;
        let before = transport(&dashboard).requests().len();
        dashboard.open_item("notes.txt").await.unwrap();
        assert_eq!(transport(&dashboard).requests().len(), before);
    }

    #[tokio::test]
    async fn test_search_does_not_refetch() {
        let (mut dashboard, _) = loaded().await;
        let before = transport(&dashboard).requests().len();

        dashboard.search("PDF");
        let grid = dashboard.grid();
        assert_eq!(grid.entries().len(), 1);
        assert_eq!(grid.entries()[0].name, "report.pdf");
        assert_eq!(transport(&dashboard).requests().len(), before);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let (mut dashboard, host) = loaded().await;
        dashboard.toggle_select("report.pdf");
        let before = transport(&dashboard).requests().len();

        host.answer_confirm(false);
        assert!(!dashboard.delete_selected().await.unwrap());
        assert_eq!(transport(&dashboard).requests().len(), before);
        assert!(dashboard.state().is_selected("report.pdf"));
        assert_eq!(
            host.state().confirm_messages.last().map(String::as_str),
            Some("Are you sure you want to delete 1 item(s)?")
        );
    }

    #[tokio::test]
    async fn test_delete_report() {
        let (mut dashboard, host) = loaded().await;
        dashboard.toggle_select("report.pdf");

        host.answer_confirm(true);
        transport(&dashboard).push_json(200, json!({"success": true}));
        transport(&dashboard).push_json(200, root_items());
        assert!(dashboard.delete_selected().await.unwrap());

        let requests = transport(&dashboard).requests();
        let delete = &requests[requests.len() - 2];
        assert_eq!(delete.method, crate::http::Method::Delete);
        assert_eq!(delete.endpoint, "/api/files");
        assert_eq!(
            delete.json_body(),
            Some(&json!({"path": "", "names": ["report.pdf"]}))
        );
        // Listing reloaded afterwards
        assert_eq!(requests.last().unwrap().endpoint, "/api/files");
        assert!(!dashboard.state().is_selected("report.pdf"));
        assert_eq!(dashboard.notifier().last().unwrap().description, "Deleted 1 item(s)");
    }

    #[tokio::test]
    async fn test_delete_empty_selection() {
        let (mut dashboard, host) = loaded().await;
        let err = dashboard.delete_selected().await.unwrap_err();
        assert!(matches!(err, DeckError::Validation(_)));
        assert!(host.state().confirm_messages.is_empty());
        assert_eq!(dashboard.notifier().last().unwrap().title, "No Selection");
    }

    #[tokio::test]
    async fn test_delete_server_error_message() {
        let (mut dashboard, host) = loaded().await;
        host.answer_confirm(true);
        transport(&dashboard).push_json(500, json!({"error": "permission denied"}));

        let res = dashboard.delete(vec!["notes.txt".to_string()]).await;
        assert!(res.is_err());
        let toast = dashboard.notifier().last().unwrap();
        assert!(toast.is_destructive());
        assert_eq!(toast.description, "permission denied");
    }

    #[tokio::test]
    async fn test_rename_via_menu() {
        let (mut dashboard, host) = loaded().await;
        assert!(dashboard.open_menu("notes.txt", 12, 34));
        assert_eq!(dashboard.menu_select_label(), "Select");

        host.answer_prompt(Some("todo.txt"));
        transport(&dashboard).push_json(200, json!({"success": true}));
        transport(&dashboard).push_json(200, root_items());
        dashboard.menu_action(MenuChoice::Rename).await.unwrap();

        assert!(!dashboard.menu().is_open());
        assert_eq!(
            host.state().prompt_messages.last().cloned(),
            Some(("New name:".to_string(), Some("notes.txt".to_string())))
        );
        let requests = transport(&dashboard).requests();
        assert_eq!(
            requests[requests.len() - 2].json_body(),
            Some(&json!({"path": "", "oldName": "notes.txt", "newName": "todo.txt"}))
        );
        assert_eq!(dashboard.notifier().last().unwrap().description, "Renamed to todo.txt");
    }

    #[tokio::test]
    async fn test_rename_unchanged_is_noop() {
        let (mut dashboard, host) = loaded().await;
        let before = transport(&dashboard).requests().len();

        dashboard.open_menu("notes.txt", 0, 0);
        host.answer_prompt(Some("notes.txt"));
        dashboard.menu_action(MenuChoice::Rename).await.unwrap();

        dashboard.open_menu("notes.txt", 0, 0);
        host.answer_prompt(None);
        dashboard.menu_action(MenuChoice::Rename).await.unwrap();

        dashboard.rename("notes.txt", "").await.unwrap();
        assert_eq!(transport(&dashboard).requests().len(), before);
    }

    #[tokio::test]
    async fn test_menu_toggle_and_delete() {
        let (mut dashboard, host) = loaded().await;
        dashboard.open_menu("notes.txt", 0, 0);
        dashboard.menu_action(MenuChoice::ToggleSelect).await.unwrap();
        assert!(dashboard.state().is_selected("notes.txt"));

        dashboard.open_menu("notes.txt", 0, 0);
        assert_eq!(dashboard.menu_select_label(), "Deselect");
        dashboard.document_click();
        assert!(!dashboard.menu().is_open());

        dashboard.open_menu("report.pdf", 0, 0);
        host.answer_confirm(true);
        transport(&dashboard).push_json(200, json!({"success": true}));
        transport(&dashboard).push_json(200, root_items());
        dashboard.menu_action(MenuChoice::Delete).await.unwrap();

        let requests = transport(&dashboard).requests();
        assert_eq!(
            requests[requests.len() - 2].json_body(),
            Some(&json!({"path": "", "names": ["report.pdf"]}))
        );
        // Single-item delete leaves other selections alone
        assert!(dashboard.state().is_selected("notes.txt"));
    }

    #[tokio::test]
    async fn test_create_folder() {
        let (mut dashboard, host) = loaded().await;
        host.answer_prompt(Some("drafts"));
        transport(&dashboard).push_json(200, json!({"success": true}));
        transport(&dashboard).push_json(200, root_items());
        dashboard.create_folder().await.unwrap();

        let requests = transport(&dashboard).requests();
        assert_eq!(requests[requests.len() - 2].endpoint, "/api/files/folder");
        assert_eq!(
            requests[requests.len() - 2].json_body(),
            Some(&json!({"path": "", "folderName": "drafts"}))
        );
        assert_eq!(
            dashboard.notifier().last().unwrap().description,
            "Folder \"drafts\" created"
        );

        // Cancelled prompt makes no request
        let before = transport(&dashboard).requests().len();
        host.answer_prompt(None);
        dashboard.create_folder().await.unwrap();
        assert_eq!(transport(&dashboard).requests().len(), before);
    }

    #[tokio::test]
    async fn test_upload() {
        let (mut dashboard, _) = loaded().await;
        transport(&dashboard).push_json(200, json!({"success": true, "uploaded": 2}));
        transport(&dashboard).push_json(200, root_items());

        let uploaded = dashboard
            .upload(vec![UploadFile::new("a.txt", "a"), UploadFile::new("b.txt", "b")])
            .await
            .unwrap();
        assert_eq!(uploaded, 2);
        assert_eq!(
            dashboard.notifier().last().unwrap().description,
            "2 file(s) uploaded"
        );
        assert_eq!(dashboard.upload(Vec::new()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_upload_error_fallback() {
        let (mut dashboard, _) = loaded().await;
        transport(&dashboard).push(ApiResponse::new(400, "Error processing form"));

        assert!(dashboard.upload(vec![UploadFile::new("a.txt", "a")]).await.is_err());
        assert_eq!(
            dashboard.notifier().last().unwrap().description,
            "Error uploading files"
        );
    }

    #[tokio::test]
    async fn test_mutation_401_redirects() {
        let (mut dashboard, host) = loaded().await;
        transport(&dashboard).push_json(401, json!({"error": "Not authenticated"}));

        let err = dashboard.create_folder_named("x").await.unwrap_err();
        assert!(matches!(err, DeckError::Unauthorized));
        assert_eq!(host.last_navigation(), Some((Page::Login, Duration::ZERO)));
    }

    #[tokio::test]
    async fn test_download_opens_one_tab_per_item() {
        let (mut dashboard, host) = loaded().await;
        assert!(dashboard.download().is_err());
        assert!(host.state().opened.is_empty());

        dashboard.toggle_select("notes.txt");
        dashboard.toggle_select("report.pdf");
        let before = transport(&dashboard).requests().len();
        assert_eq!(dashboard.download().unwrap(), 2);

        let opened = host.state().opened.clone();
        assert_eq!(opened.len(), 2);
        assert!(opened.iter().all(|u| u.contains("token=T")));
        assert!(opened[0].contains("name=notes.txt"));
        // Downloads bypass the gateway
        assert_eq!(transport(&dashboard).requests().len(), before);
        assert_eq!(
            dashboard.notifier().last().unwrap().description,
            "Downloading 2 item(s)"
        );
    }

    #[tokio::test]
    async fn test_logout() {
        let (mut dashboard, host) = loaded().await;
        transport(&dashboard).push_error(DeckError::Custom("offline".to_string()));

        dashboard.logout().await.unwrap();
        assert!(dashboard.store.load().is_none());
        assert!(dashboard.api().token().is_none());
        assert_eq!(
            host.last_navigation(),
            Some((Page::Login, LOGOUT_REDIRECT_DELAY))
        );
        assert_eq!(dashboard.notifier().last().unwrap().title, "Logged Out");
        let requests = transport(&dashboard).requests();
        assert_eq!(requests.last().unwrap().endpoint, "/api/logout");
    }

    #[tokio::test]
    async fn test_reload_drops_vanished_selection() {
        let (mut dashboard, _) = loaded().await;
        dashboard.toggle_select("notes.txt");
        transport(&dashboard).push_json(
            200,
            json!({"success": true, "items": [{"id": "photos", "name": "photos", "type": "folder"}]}),
        );
        dashboard.load_files().await.unwrap();
        assert!(dashboard.state().selected().is_empty());
        assert_eq!(dashboard.grid().entries().len(), 1);

        let listed: Vec<FileSystemItem> = dashboard.state().listing().to_vec();
        assert!(listed[0].is_folder());
    }
}
