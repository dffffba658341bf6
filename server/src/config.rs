//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("contact relay partially configured: {missing} is not set")]
    IncompleteRelay { missing: &'static str },
}

/// Resend credentials and addressing for the contact relay.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &"<redacted>")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Treat content warnings as fatal at startup.
    pub content_strict: bool,
    /// `None` when no relay variables are set; the contact endpoint then answers 503.
    pub relay: Option<RelayConfig>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTENT_STRICT`: boolean, default false
    /// - `RESEND_API_KEY`, `CONTACT_FROM`, `CONTACT_TO`: all three or none
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` does not parse or the relay variables are
    /// only partially set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let content_strict = env_bool("CONTENT_STRICT").unwrap_or(false);
        let relay = relay_from_parts(env_non_empty("RESEND_API_KEY"), env_non_empty("CONTACT_FROM"), env_non_empty("CONTACT_TO"))?;
        Ok(Self { port, content_strict, relay })
    }
}

fn relay_from_parts(
    api_key: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<Option<RelayConfig>, ConfigError> {
    match (api_key, from, to) {
        (None, None, None) => Ok(None),
        (Some(api_key), Some(from), Some(to)) => Ok(Some(RelayConfig { api_key, from, to })),
        (None, _, _) => Err(ConfigError::IncompleteRelay { missing: "RESEND_API_KEY" }),
        (_, None, _) => Err(ConfigError::IncompleteRelay { missing: "CONTACT_FROM" }),
        (_, _, None) => Err(ConfigError::IncompleteRelay { missing: "CONTACT_TO" }),
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
