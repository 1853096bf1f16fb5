use crate::models::{Folder, FolderList, Note, NotesPage, Tag, TagList, User};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

pub(crate) const NOTES_PAGE_SIZE: u32 = 20;
pub(crate) const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

const DEFAULT_API_URL: &str = "http://localhost:5555";

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Server,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: format!("Unexpected response from server: {e}"),
        }
    }

    /// Builds the error for a non-2xx response. The `{ "error": ... }` body wins
    /// over `fallback`.
    pub(crate) fn from_status(status: StatusCode, body: &str, fallback: &str) -> Self {
        let kind = if status == StatusCode::UNAUTHORIZED {
            ApiErrorKind::Unauthorized
        } else {
            ApiErrorKind::Server
        };

        Self {
            kind,
            message: error_message_from_body(body).unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Text shown inline next to the form that issued the request.
    pub fn user_message(&self) -> String {
        match self.kind {
            ApiErrorKind::Network => NETWORK_ERROR_MESSAGE.to_string(),
            _ => self.message.clone(),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::fallback();
        };

        // We support BOTH `window.ENV.API_URL` and `window.ENV.api_url`.
        if let Some(env) = window.get("ENV") {
            if !env.is_undefined() && env.is_object() {
                for key in ["API_URL", "api_url"] {
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        // The API is normally proxied under the page origin.
        match window.location().origin() {
            Ok(origin) if origin.starts_with("http") => Self { api_url: origin },
            _ => Self::fallback(),
        }
    }

    fn fallback() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct CreateFolderRequest {
    pub name: String,
    pub color: String,
}

/// Body for both `POST /api/notes` and `PUT /api/notes/:id`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct NoteRequest {
    pub title: String,
    pub content: String,
    pub folder_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct CreateTagRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AttachTagRequest {
    pub tag_id: i64,
}

pub(crate) fn notes_list_path(limit: u32, folder_id: Option<i64>) -> String {
    let mut path = format!("/api/notes?limit={limit}");
    if let Some(id) = folder_id {
        path.push_str(&format!("&folder_id={id}"));
    }
    path
}

pub(crate) fn notes_search_path(query: &str, folder_id: Option<i64>, tag_id: Option<i64>) -> String {
    let mut path = format!("/api/notes/search?q={}", urlencoding::encode(query));
    if let Some(id) = folder_id {
        path.push_str(&format!("&folder_id={id}"));
    }
    if let Some(id) = tag_id {
        path.push_str(&format!("&tag_id={id}"));
    }
    path
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let req = reqwest::Client::new().request(method, self.url(path));

        // Session cookie must travel with every call, including a cross-origin API_URL.
        #[cfg(target_arch = "wasm32")]
        let req = req.fetch_credentials_include();

        req
    }

    async fn send(req: RequestBuilder, fallback: &str) -> ApiResult<Response> {
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body, fallback);
            log::warn!("request failed ({status}, {}): {}", err.kind, err.message);
            Err(err)
        }
    }

    async fn send_json<T: serde::de::DeserializeOwned>(
        req: RequestBuilder,
        fallback: &str,
    ) -> ApiResult<T> {
        let res = Self::send(req, fallback).await?;
        res.json().await.map_err(ApiError::parse)
    }

    /// For endpoints whose success body is empty (204) or irrelevant.
    async fn send_unit(req: RequestBuilder, fallback: &str) -> ApiResult<()> {
        Self::send(req, fallback).await.map(|_| ())
    }

    // Session

    pub async fn login(&self, req: &LoginRequest) -> ApiResult<User> {
        Self::send_json(self.builder(Method::POST, "/login").json(req), "Login failed").await
    }

    pub async fn signup(&self, req: &SignupRequest) -> ApiResult<User> {
        Self::send_json(self.builder(Method::POST, "/signup").json(req), "Signup failed").await
    }

    pub async fn check_session(&self) -> ApiResult<User> {
        Self::send_json(
            self.builder(Method::GET, "/check_session"),
            "Not logged in",
        )
        .await
    }

    pub async fn logout(&self) -> ApiResult<()> {
        Self::send_unit(self.builder(Method::DELETE, "/logout"), "Failed to logout").await
    }

    // Folders

    pub async fn list_folders(&self) -> ApiResult<Vec<Folder>> {
        let list: FolderList =
            Self::send_json(self.builder(Method::GET, "/api/folders"), "Failed to load folders")
                .await?;
        Ok(list.folders)
    }

    pub async fn create_folder(&self, req: &CreateFolderRequest) -> ApiResult<Folder> {
        Self::send_json(
            self.builder(Method::POST, "/api/folders").json(req),
            "Failed to create folder",
        )
        .await
    }

    /// `PUT /api/folders/:id`: rename and/or recolor.
    pub async fn update_folder(
        &self,
        folder_id: i64,
        req: &CreateFolderRequest,
    ) -> ApiResult<Folder> {
        Self::send_json(
            self.builder(Method::PUT, &format!("/api/folders/{folder_id}")).json(req),
            "Failed to update folder",
        )
        .await
    }

    pub async fn delete_folder(&self, folder_id: i64) -> ApiResult<()> {
        Self::send_unit(
            self.builder(Method::DELETE, &format!("/api/folders/{folder_id}")),
            "Failed to delete folder",
        )
        .await
    }

    // Notes

    pub async fn list_notes(&self, folder_id: Option<i64>) -> ApiResult<NotesPage> {
        Self::send_json(
            self.builder(Method::GET, &notes_list_path(NOTES_PAGE_SIZE, folder_id)),
            "Failed to load notes",
        )
        .await
    }

    pub async fn search_notes(
        &self,
        query: &str,
        folder_id: Option<i64>,
        tag_id: Option<i64>,
    ) -> ApiResult<Vec<Note>> {
        let page: NotesPage = Self::send_json(
            self.builder(Method::GET, &notes_search_path(query, folder_id, tag_id)),
            "Search failed",
        )
        .await?;
        Ok(page.notes)
    }

    pub async fn get_note(&self, note_id: i64) -> ApiResult<Note> {
        Self::send_json(
            self.builder(Method::GET, &format!("/api/notes/{note_id}")),
            "Failed to load note",
        )
        .await
    }

    pub async fn create_note(&self, req: &NoteRequest) -> ApiResult<Note> {
        Self::send_json(
            self.builder(Method::POST, "/api/notes").json(req),
            "Failed to create note",
        )
        .await
    }

    pub async fn update_note(&self, note_id: i64, req: &NoteRequest) -> ApiResult<Note> {
        Self::send_json(
            self.builder(Method::PUT, &format!("/api/notes/{note_id}")).json(req),
            "Failed to update note",
        )
        .await
    }

    pub async fn delete_note(&self, note_id: i64) -> ApiResult<()> {
        Self::send_unit(
            self.builder(Method::DELETE, &format!("/api/notes/{note_id}")),
            "Failed to delete note",
        )
        .await
    }

    pub async fn attach_tag(&self, note_id: i64, tag_id: i64) -> ApiResult<()> {
        Self::send_unit(
            self.builder(Method::POST, &format!("/api/notes/{note_id}/tags"))
                .json(&AttachTagRequest { tag_id }),
            "Failed to add tag",
        )
        .await
    }

    pub async fn detach_tag(&self, note_id: i64, tag_id: i64) -> ApiResult<()> {
        Self::send_unit(
            self.builder(Method::DELETE, &format!("/api/notes/{note_id}/tags/{tag_id}")),
            "Failed to remove tag",
        )
        .await
    }

    // Tags

    pub async fn list_tags(&self) -> ApiResult<Vec<Tag>> {
        let list: TagList =
            Self::send_json(self.builder(Method::GET, "/api/tags"), "Failed to load tags").await?;
        Ok(list.tags)
    }

    pub async fn create_tag(&self, req: &CreateTagRequest) -> ApiResult<Tag> {
        Self::send_json(
            self.builder(Method::POST, "/api/tags").json(req),
            "Failed to create tag",
        )
        .await
    }

    pub async fn delete_tag(&self, tag_id: i64) -> ApiResult<()> {
        Self::send_unit(
            self.builder(Method::DELETE, &format!("/api/tags/{tag_id}")),
            "Failed to delete tag",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message_from_body(r#"{"error": "Tag already exists"}"#).as_deref(),
            Some("Tag already exists")
        );
        assert_eq!(error_message_from_body(r#"{}"#), None);
        assert_eq!(error_message_from_body(r#"{"error": "  "}"#), None);
        assert_eq!(error_message_from_body("<html>502</html>"), None);
        assert_eq!(error_message_from_body(""), None);
    }

    #[test]
    fn test_from_status_prefers_body_then_fallback() {
        let e = ApiError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"error": "Username already exists"}"#,
            "Signup failed",
        );
        assert_eq!(e.kind, ApiErrorKind::Server);
        assert_eq!(e.user_message(), "Username already exists");

        let e = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "", "Failed to create note");
        assert_eq!(e.user_message(), "Failed to create note");
    }

    #[test]
    fn test_from_status_unauthorized() {
        let e = ApiError::from_status(StatusCode::UNAUTHORIZED, "{}", "Not logged in");
        assert_eq!(e.kind, ApiErrorKind::Unauthorized);
        assert_eq!(e.message, "Not logged in");
    }

    #[test]
    fn test_network_message_differs_from_server_message() {
        let network = ApiError {
            kind: ApiErrorKind::Network,
            message: "error sending request".to_string(),
        };
        assert_eq!(network.user_message(), NETWORK_ERROR_MESSAGE);

        let server = ApiError::from_status(StatusCode::BAD_REQUEST, "", "Failed to create folder");
        assert_ne!(server.user_message(), network.user_message());
    }

    #[test]
    fn test_notes_list_path() {
        assert_eq!(notes_list_path(20, None), "/api/notes?limit=20");
        assert_eq!(notes_list_path(20, Some(2)), "/api/notes?limit=20&folder_id=2");
    }

    #[test]
    fn test_notes_search_path_encodes_query() {
        assert_eq!(
            notes_search_path("a b&c", None, None),
            "/api/notes/search?q=a%20b%26c"
        );
        assert_eq!(
            notes_search_path("x", Some(3), Some(7)),
            "/api/notes/search?q=x&folder_id=3&tag_id=7"
        );
    }

    #[test]
    fn test_api_client_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:5555/".to_string());
        assert_eq!(client.url("/api/tags"), "http://localhost:5555/api/tags");
    }

    #[test]
    fn test_note_request_serialization() {
        let v = serde_json::to_value(NoteRequest {
            title: "x".to_string(),
            content: "y".to_string(),
            folder_id: 2,
        })
        .expect("should serialize");
        assert_eq!(v, serde_json::json!({"title": "x", "content": "y", "folder_id": 2}));
    }

    #[test]
    fn test_signup_request_serialization_includes_confirmation() {
        let v = serde_json::to_value(SignupRequest {
            username: "u".to_string(),
            email: "u@example.com".to_string(),
            password: "password1".to_string(),
            password_confirmation: "password1".to_string(),
        })
        .expect("should serialize");
        assert_eq!(v["password_confirmation"], "password1");
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_env_config_defaults_to_page_origin() {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let cfg = EnvConfig::new();
        assert_eq!(cfg.api_url, origin);
    }

    #[wasm_bindgen_test]
    fn test_env_config_prefers_window_env() {
        let window = web_sys::window().expect("window");
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"API_URL".into(), &"http://api.test".into())
            .expect("set API_URL");
        js_sys::Reflect::set(&window, &"ENV".into(), &env).expect("set ENV");

        assert_eq!(EnvConfig::new().api_url, "http://api.test");

        js_sys::Reflect::delete_property(&window, &"ENV".into()).expect("delete ENV");
    }
}
