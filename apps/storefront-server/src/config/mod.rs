//! Layered application configuration
//!
//! Precedence, lowest first: built-in defaults, the JSON settings file, an
//! optional XML settings file, then `STOREFRONT_*` environment variables with
//! nested keys separated by `__` (e.g. `STOREFRONT_SERVER__BIND_ADDR`).

pub mod xml;

use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub use xml::XmlFile;

/// Prefix of environment variables read into the configuration
pub const ENV_PREFIX: &str = "STOREFRONT_";

/// Default JSON settings file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "appsettings.json";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Hosting environment; selects the error page behavior
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub server: ServerConfig,

    /// Named database connection strings
    #[serde(default)]
    pub connection_strings: ConnectionStrings,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Store service module configuration
    #[serde(default)]
    pub store: store_service::Config,
}

/// Hosting environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Staging => "Staging",
            Self::Production => "Production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "unknown environment '{value}', expected Development, Staging or Production"
            )),
        }
    }
}

impl From<Environment> for String {
    fn from(env: Environment) -> Self {
        env.as_str().to_string()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP listener and static content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Directory served as the site root
    #[serde(default = "default_web_root")]
    pub web_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            web_root: default_web_root(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_web_root() -> PathBuf {
    PathBuf::from("wwwroot")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStrings {
    /// Store database URL
    #[serde(default = "default_store_connection")]
    pub store: String,
}

impl Default for ConnectionStrings {
    fn default() -> Self {
        Self {
            store: default_store_connection(),
        }
    }
}

fn default_store_connection() -> String {
    "sqlite://storefront.db?mode=rwc".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "info,sqlx=warn".to_string()
}

/// Build the layered figment without extracting it
pub fn figment(json_file: &Path, xml_file: Option<&Path>) -> Figment {
    let mut figment =
        Figment::from(Serialized::defaults(AppConfig::default())).merge(Json::file(json_file));

    if let Some(xml_file) = xml_file {
        figment = figment.merge(XmlFile::file(xml_file));
    }

    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load configuration from all layers
pub fn load(json_file: &Path, xml_file: Option<&Path>) -> Result<AppConfig, figment::Error> {
    figment(json_file, xml_file).extract()
}
