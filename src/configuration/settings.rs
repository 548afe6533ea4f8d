use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::reports::{ExportFormat, ReportType};

/// Environment variable pointing at an alternative settings file
pub const CONFIG_ENV_VAR: &str = "FACTORYCTL_CONFIG";

/// Top-level settings, read from `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub reports: ReportSettings,
    pub notifications: NotificationSettings,
}

/// Logging output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Initial selection of the report desk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    pub default_type: ReportType,
    pub default_format: ExportFormat,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            default_type: ReportType::Sales,
            default_format: ExportFormat::Pdf,
        }
    }
}

/// Parameters of the simulated delivery channels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationSettings {
    /// SMTP relay, `host:port`
    pub smtp_server: String,
    pub email_sender: String,
    pub email_recipient: String,
    pub sms_recipient: String,
    pub sms_sender: String,
    pub slack_channel: String,
    pub slack_username: String,
    pub slack_webhook_url: Url,
    pub webhook_url: Url,
    pub platform: PlatformCapabilities,
}

/// What the simulated host platform offers for push delivery
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformCapabilities {
    pub service_worker: bool,
    pub push_manager: bool,
}

impl PlatformCapabilities {
    /// Both capabilities present
    pub fn supported() -> Self {
        Self {
            service_worker: true,
            push_manager: true,
        }
    }

    pub fn supports_push(&self) -> bool {
        self.service_worker && self.push_manager
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            smtp_server: "smtp.example.com:587".to_string(),
            email_sender: "noreply@example.com".to_string(),
            email_recipient: "user@example.com".to_string(),
            sms_recipient: "+33612345678".to_string(),
            sms_sender: "MyApp".to_string(),
            slack_channel: "#general".to_string(),
            slack_username: "NotificationBot".to_string(),
            slack_webhook_url: parse_static_url(
                "https://hooks.slack.com/services/T00000000/B00000000/XXXXXXXXXXXX",
            ),
            webhook_url: parse_static_url("https://api.example.com/webhook"),
            platform: PlatformCapabilities::default(),
        }
    }
}

// Only called with literals above, which are known to parse.
fn parse_static_url(raw: &str) -> Url {
    match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => unreachable!("invalid built-in url {}: {}", raw, e),
    }
}

impl Settings {
    /// Resolve and load settings.
    ///
    /// An explicit path or `FACTORYCTL_CONFIG` must point at an existing file.
    /// The per-user default location is optional; built-in defaults apply
    /// when it does not exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("no settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Per-user settings location, e.g. `~/.config/factoryctl/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("factoryctl").join("config.toml"))
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings)
    }
}
