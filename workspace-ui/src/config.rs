//! Client configuration resolved from the browser location

/// Port the generation backend listens on during local development
const DEV_API_BASE: &str = "http://localhost:8000";

/// Quiet window before an edit triggers a preview recompose
pub const DEFAULT_EDIT_DEBOUNCE_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every `/api/...` path; empty means same origin
    pub api_base: String,
    pub edit_debounce_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            edit_debounce_ms: DEFAULT_EDIT_DEBOUNCE_MS,
        }
    }
}

impl ClientConfig {
    /// Read hostname and query string from `window.location`
    pub fn from_location() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let hostname = location
            .as_ref()
            .and_then(|l| l.hostname().ok())
            .unwrap_or_default();
        let search = location
            .as_ref()
            .and_then(|l| l.search().ok())
            .unwrap_or_default();

        let params = web_sys::UrlSearchParams::new_with_str(&search).ok();
        let api_override = params.as_ref().and_then(|p| p.get("api_base"));
        let debounce = params
            .as_ref()
            .and_then(|p| p.get("debounce_ms"))
            .and_then(|raw| raw.parse::<u32>().ok());

        Self {
            api_base: resolve_api_base(&hostname, api_override.as_deref()),
            edit_debounce_ms: debounce.unwrap_or(DEFAULT_EDIT_DEBOUNCE_MS),
        }
    }
}

/// - Explicit `api_base` query parameter wins
/// - In development (localhost): the backend on port 8000
/// - In production: same origin (backend serves the static files)
pub fn resolve_api_base(hostname: &str, api_override: Option<&str>) -> String {
    if let Some(base) = api_override.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    if hostname == "localhost" || hostname == "127.0.0.1" {
        DEV_API_BASE.to_string()
    } else {
        String::new()
    }
}
