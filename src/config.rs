//! Runtime configuration, read from the environment (and an optional
//! `.env` file next to the binary's working directory).
//!
//! | variable                | default                                 |
//! |-------------------------|-----------------------------------------|
//! | `APP_HOST`              | `127.0.0.1`                             |
//! | `APP_PORT`              | `8000`                                  |
//! | `OSM_API_URL`           | `https://api.openstreetmap.org/api/0.6` |
//! | `OSM_WEB_URL`           | `https://osm.org`                       |
//! | `ALLOWED_ORIGINS`       | (none)                                  |
//! | `UPSTREAM_TIMEOUT_SECS` | `20`                                    |
//! | `VALUE_WIDTH`           | `80`                                    |
//! | `USER_AGENT`            | `deephistory/<version>`                 |

use std::env;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use dotenv::dotenv;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.openstreetmap.org/api/0.6";
pub const DEFAULT_WEB_URL: &str = "https://osm.org";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_VALUE_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub api_url: Url,
    pub web_url: Url,
    pub allowed_origins: Vec<String>,
    pub upstream_timeout: Duration,
    /// Tag values longer than this are truncated in table cells.
    pub value_width: usize,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { key, value, reason } => {
                write!(f, "invalid {key}={value:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            api_url: default_url(DEFAULT_API_URL),
            web_url: default_url(DEFAULT_WEB_URL),
            allowed_origins: vec![],
            upstream_timeout: DEFAULT_TIMEOUT,
            value_width: DEFAULT_VALUE_WIDTH,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

fn default_url(url: &str) -> Url {
    Url::parse(url).expect("default urls are valid")
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(err) => Err(ConfigError::Invalid {
            key,
            reason: err.to_string(),
            value,
        }),
    }
}

fn parse_http_url(key: &'static str, value: String) -> Result<Url, ConfigError> {
    let url: Url = parse(key, value.clone())?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::Invalid {
            key,
            value,
            reason: format!("unsupported scheme {scheme}, expected http or https"),
        }),
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenv() {
            log::debug!("no .env file loaded: {err}");
        }

        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup; unset keys
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup("APP_HOST") {
            config.host = parse("APP_HOST", value)?;
        }
        if let Some(value) = lookup("APP_PORT") {
            config.port = parse("APP_PORT", value)?;
        }
        if let Some(value) = lookup("OSM_API_URL") {
            config.api_url = parse_http_url("OSM_API_URL", value)?;
        }
        if let Some(value) = lookup("OSM_WEB_URL") {
            config.web_url = parse_http_url("OSM_WEB_URL", value)?;
        }
        if let Some(value) = lookup("ALLOWED_ORIGINS") {
            config.allowed_origins = value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(value) = lookup("UPSTREAM_TIMEOUT_SECS") {
            config.upstream_timeout = Duration::from_secs(parse("UPSTREAM_TIMEOUT_SECS", value)?);
        }
        if let Some(value) = lookup("VALUE_WIDTH") {
            config.value_width = parse("VALUE_WIDTH", value)?;
        }
        if let Some(value) = lookup("USER_AGENT") {
            config.user_agent = value;
        }

        Ok(config)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
