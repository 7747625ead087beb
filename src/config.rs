//! Client configuration: where the backend lives and how references served
//! by it are resolved.

/// Origin of the review backend. Swap for a local backend during development.
pub const DEFAULT_API_BASE: &str = "https://rateyourbike.onrender.com";
// pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Path of the WebSocket stream that broadcasts newly created reviews.
pub const PUSH_PATH: &str = "/api/bikes/stream";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// WebSocket URL for the new-review stream, derived from the HTTP origin.
    pub fn push_url(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        let origin = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };
        format!("{origin}{PUSH_PATH}")
    }

    /// Resolves an image reference from a review payload. Absolute URLs pass
    /// through untouched; relative paths are joined to the backend origin
    /// with exactly one separating slash.
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
