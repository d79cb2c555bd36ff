use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub history: bool,
    pub logs_limit: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            history: true,
            logs_limit: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(value) = lookup("PORT") {
            match value.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => warn!("ignoring PORT={value:?}: {err}"),
            }
        }

        if let Some(value) = lookup("COACH_API_URL") {
            let url = value.trim().trim_end_matches('/');
            if url.is_empty() {
                warn!("ignoring empty COACH_API_URL");
            } else {
                config.api_url = url.to_string();
            }
        }

        if let Some(value) = lookup("COACH_HISTORY") {
            match value.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "off" | "no" => config.history = false,
                "1" | "true" | "on" | "yes" | "" => config.history = true,
                other => warn!("ignoring COACH_HISTORY={other:?}"),
            }
        }

        if let Some(value) = lookup("COACH_LOGS_LIMIT") {
            match value.trim().parse::<u32>() {
                Ok(limit) if limit > 0 => config.logs_limit = Some(limit),
                _ => warn!("ignoring COACH_LOGS_LIMIT={value:?}"),
            }
        }

        config
    }
}
