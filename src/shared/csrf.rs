use regex::Regex;
use std::sync::OnceLock;

/// Name of the hidden form field the backend renders into every page
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// CSRF token echoed back on every state-changing request
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Returns `None` for an empty or whitespace-only value
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Extract the token from the `csrfmiddlewaretoken` hidden input of a
    /// server-rendered page.
    pub fn from_form_markup(html: &str) -> Option<Self> {
        static INPUT: OnceLock<Regex> = OnceLock::new();
        static VALUE: OnceLock<Regex> = OnceLock::new();

        let input = INPUT.get_or_init(|| {
            Regex::new(&format!(
                r#"<input[^>]*name\s*=\s*["']{}["'][^>]*>"#,
                CSRF_FORM_FIELD
            ))
            .expect("static CSRF input pattern")
        });
        let value = VALUE.get_or_init(|| {
            Regex::new(r#"value\s*=\s*["']([^"']*)["']"#).expect("static CSRF value pattern")
        });

        let tag = input.find(html)?;
        let captures = value.captures(tag.as_str())?;
        Self::new(captures.get(1)?.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CsrfToken(***)")
    }
}

/// How outgoing requests carry the CSRF token
#[derive(Clone, Debug)]
pub struct CsrfConfig {
    /// Header name the backend checks (default: "X-CSRFToken")
    pub header_name: String,
    /// Whether safe methods carry the token too (default: false)
    pub validate_get: bool,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            header_name: "X-CSRFToken".to_string(),
            validate_get: false,
        }
    }
}

/// Check if HTTP method requires a CSRF token
pub fn method_requires_csrf(method: &str, validate_get: bool) -> bool {
    match method {
        "GET" | "HEAD" | "OPTIONS" => validate_get,
        "POST" | "PUT" | "PATCH" | "DELETE" => true,
        _ => false,
    }
}
