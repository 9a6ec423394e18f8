use tracing::Level;

/// Where the service lives when the page gives no hint (its dev server).
pub const FALLBACK_API_BASE: &str = "http://localhost:5000";

const API_BASE_META: &str = "gematria-api-base";
const LOG_LEVEL_META: &str = "gematria-log-level";

/// Runtime settings, read once from the host page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Scheme, host and optional path prefix; never ends with `/`.
    pub api_base: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

impl AppConfig {
    /// Combine the page origin with the optional `<meta>` overrides.
    pub fn resolve(
        origin: Option<&str>,
        api_base_override: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let base = non_empty(api_base_override)
            .or_else(|| non_empty(origin))
            .unwrap_or(FALLBACK_API_BASE);

        Self {
            api_base: base.trim_end_matches('/').to_string(),
            log_level: log_level.and_then(parse_level).unwrap_or(Level::INFO),
        }
    }

    /// Read `window.location.origin` and the page's `<meta>` tags.
    pub fn from_document() -> Self {
        let window = web_sys::window();
        let origin = window.as_ref().and_then(|w| w.location().origin().ok());
        let document = window.and_then(|w| w.document());
        let meta = |name: &str| {
            document.as_ref().and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{}\"]", name))
                    .ok()
                    .flatten()
                    .and_then(|el| el.get_attribute("content"))
            })
        };

        Self::resolve(
            origin.as_deref(),
            meta(API_BASE_META).as_deref(),
            meta(LOG_LEVEL_META).as_deref(),
        )
    }

    /// Absolute URL for an endpoint path such as `/analyze`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
