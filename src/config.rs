use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub csrf_token: Option<String>,
    /// Page scraped for the `csrfmiddlewaretoken` field when no token is configured
    pub csrf_page_path: String,
    pub http_timeout_secs: u64,
    pub refresh_interval_secs: u64,
    pub notification_duration_ms: u64,
    pub event_bus_capacity: usize,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            csrf_token: None,
            csrf_page_path: "/".to_string(),
            http_timeout_secs: 30,
            refresh_interval_secs: 30,
            notification_duration_ms: 5000,
            event_bus_capacity: 1000,
            otel_exporter_endpoint: None,
            service_name: "atlas-client".to_string(),
            metrics_port: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let api_base_url = env::var("ATLAS_API_URL").unwrap_or(defaults.api_base_url);
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_base_url));
        }

        let csrf_token = env::var("ATLAS_CSRF_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let csrf_page_path = env::var("ATLAS_CSRF_PAGE").unwrap_or(defaults.csrf_page_path);

        let http_timeout_secs = parse_var("HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?;
        let refresh_interval_secs =
            parse_var("REFRESH_INTERVAL_SECS", defaults.refresh_interval_secs)?;
        if refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidNumber("REFRESH_INTERVAL_SECS"));
        }
        let notification_duration_ms =
            parse_var("NOTIFICATION_DURATION_MS", defaults.notification_duration_ms)?;
        let event_bus_capacity = parse_var("EVENT_BUS_CAPACITY", defaults.event_bus_capacity)?;
        if event_bus_capacity == 0 {
            return Err(ConfigError::InvalidNumber("EVENT_BUS_CAPACITY"));
        }

        let otel_exporter_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

        let service_name = env::var("SERVICE_NAME").unwrap_or(defaults.service_name);

        let metrics_port = match env::var("METRICS_PORT") {
            Ok(port) => Some(
                port.parse()
                    .map_err(|_| ConfigError::InvalidNumber("METRICS_PORT"))?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            api_base_url,
            csrf_token,
            csrf_page_path,
            http_timeout_secs,
            refresh_interval_secs,
            notification_duration_ms,
            event_bus_capacity,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber(name)),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ATLAS_API_URL must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),

    #[error("{0} must be a positive number")]
    InvalidNumber(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.notification_duration(), Duration::from_millis(5000));
        assert_eq!(config.refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
        assert!(config.csrf_token.is_none());
    }

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        let value: u64 = parse_var("ATLAS_TEST_SURELY_UNSET_VAR", 7).unwrap();
        assert_eq!(value, 7);
    }
}
