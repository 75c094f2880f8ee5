use std::fmt;

pub const DEFAULT_SITE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::from_value(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn from_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailConfig {
    Smtp { host: String, from_email: String },
    /// No outbound email; invites go through shareable links.
    Console,
}

impl EmailConfig {
    pub fn is_available(&self) -> bool {
        matches!(self, EmailConfig::Smtp { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamConfig {
    pub id: i64,
    pub name: Option<String>,
    pub ingested_event: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    pub distinct_id: String,
    pub email: String,
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub site_url: String,
    pub email: EmailConfig,
    pub team: TeamConfig,
    pub user: UserConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    InvalidSiteUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be an integer, got {value:?}")
            }
            ConfigError::InvalidSiteUrl(value) => {
                write!(f, "SITE_URL must start with http:// or https://, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = AppMode::from_value(&get("APP_MODE").unwrap_or_default());

        let site_url = get("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(site_url.starts_with("http://") || site_url.starts_with("https://")) {
            return Err(ConfigError::InvalidSiteUrl(site_url));
        }

        let email = match (get("SMTP_HOST"), get("SMTP_FROM_EMAIL")) {
            (Some(host), Some(from_email)) => EmailConfig::Smtp { host, from_email },
            _ => EmailConfig::Console,
        };

        let team_id = match get("TEAM_ID") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: "TEAM_ID",
                    value,
                })?,
            None => 1,
        };
        let team = TeamConfig {
            id: team_id,
            name: get("TEAM_NAME"),
            ingested_event: get("TEAM_INGESTED_EVENT")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        };

        let (default_email, default_name) = match mode {
            AppMode::Local => ("user1@local.dev", "Local"),
            AppMode::Production => ("", ""),
        };
        let email_address = get("USER_EMAIL").unwrap_or_else(|| default_email.to_string());
        let user = UserConfig {
            distinct_id: get("USER_DISTINCT_ID").unwrap_or_else(|| email_address.clone()),
            email: email_address,
            first_name: get("USER_FIRST_NAME").unwrap_or_else(|| default_name.to_string()),
        };

        Ok(Self {
            mode,
            site_url,
            email,
            team,
            user,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Load `.env` if present. Real environment variables win.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("config: loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("config: failed to read .env: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_app_mode_defaults_to_production() {
        assert_eq!(AppMode::from_value(""), AppMode::Production);
    }

    #[test]
    fn test_app_mode_case_insensitive() {
        assert_eq!(AppMode::from_value("LOCAL"), AppMode::Local);
        assert_eq!(AppMode::from_value("local"), AppMode::Local);
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        assert_eq!(AppMode::from_value("invalid"), AppMode::Production);
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).expect("defaults are valid");
        assert_eq!(config.mode, AppMode::Production);
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.email, EmailConfig::Console);
        assert_eq!(config.team.id, 1);
        assert_eq!(config.team.name, None);
        assert!(!config.team.ingested_event);
    }

    #[test]
    fn test_smtp_needs_host_and_sender() {
        let only_host = config_from(&[("SMTP_HOST", "smtp.example.com")]).expect("valid");
        assert!(!only_host.email.is_available());

        let both = config_from(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_FROM_EMAIL", "hey@example.com"),
        ])
        .expect("valid");
        assert!(both.email.is_available());
    }

    #[test]
    fn test_team_settings() {
        let config = config_from(&[
            ("TEAM_ID", "42"),
            ("TEAM_NAME", "Acme"),
            ("TEAM_INGESTED_EVENT", "Yes"),
        ])
        .expect("valid");
        assert_eq!(config.team.id, 42);
        assert_eq!(config.team.name.as_deref(), Some("Acme"));
        assert!(config.team.ingested_event);
    }

    #[test]
    fn test_invalid_team_id() {
        let err = config_from(&[("TEAM_ID", "abc")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: "TEAM_ID",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_site_url_is_normalised() {
        let config = config_from(&[("SITE_URL", "https://app.example.com/")]).expect("valid");
        assert_eq!(config.site_url, "https://app.example.com");

        assert!(config_from(&[("SITE_URL", "app.example.com")]).is_err());
    }

    #[test]
    fn test_local_mode_user_defaults() {
        let config = config_from(&[("APP_MODE", "local")]).expect("valid");
        assert_eq!(config.user.email, "user1@local.dev");
        assert_eq!(config.user.distinct_id, "user1@local.dev");
        assert_eq!(config.user.first_name, "Local");
    }
}
