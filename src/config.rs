use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Runtime configuration, read from the process environment
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` puts search into fallback mode
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub booking_delay: Duration,
    pub chat_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            booking_delay: Duration::from_millis(1500),
            chat_delay: Duration::from_millis(800),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let request_timeout = match var("GEMINI_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse()
                    .with_context(|| format!("GEMINI_TIMEOUT_SECS is not a number: {}", raw))?,
            ),
            None => defaults.request_timeout,
        };

        let bind_addr = match var("CAMPUS_STAY_BIND") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("CAMPUS_STAY_BIND is not a socket address: {}", raw))?,
            None => defaults.bind_addr,
        };

        let booking_delay = match var("BOOKING_DELAY_MS") {
            Some(raw) => Duration::from_millis(
                raw.parse()
                    .with_context(|| format!("BOOKING_DELAY_MS is not a number: {}", raw))?,
            ),
            None => defaults.booking_delay,
        };

        let chat_delay = match var("CHAT_DELAY_MS") {
            Some(raw) => Duration::from_millis(
                raw.parse()
                    .with_context(|| format!("CHAT_DELAY_MS is not a number: {}", raw))?,
            ),
            None => defaults.chat_delay,
        };

        Ok(Self {
            api_key: var("GEMINI_API_KEY"),
            model: var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            request_timeout,
            bind_addr,
            booking_delay,
            chat_delay,
        })
    }

    pub fn fallback_mode(&self) -> bool {
        self.api_key.is_none()
    }
}
