//! Application configuration module.
//!
//! Configuration is loaded from config.json (created with defaults on first
//! run) and then overridden by environment variables, which is how the
//! hosted deployment injects its credentials.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub email: EmailConfig,
    pub notifications: NotificationConfig,
    pub captcha: CaptchaConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres DSN of the hosted content database.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Public base URL of the object-storage bucket holding blog images.
    pub public_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub username: String,
    pub password: String,
    pub from_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Recipients of contact-form admin notifications.
    pub contact_emails: Vec<String>,
    /// Recipients of representative-application notifications; empty means
    /// fall back to `contact_emails`.
    pub application_emails: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptchaConfig {
    pub hcaptcha_secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Canonical site origin, used for sitemap and robots output.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/bym".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_base_url:
                "https://ghuellgktqqzpryuyiky.supabase.co/storage/v1/object/public/blog-images"
                    .to_string(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            secure: false,
            username: String::new(),
            password: String::new(),
            from_name: "BYM Türkiye".to_string(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            contact_emails: vec!["info@unidc.org".to_string()],
            application_emails: Vec::new(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://biyomuhendislik.net.tr".to_string(),
        }
    }
}

impl AppConfig {
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// SMTP is optional; without credentials the email paths are skipped.
    pub fn email_configured(&self) -> bool {
        !self.email.username.is_empty() && !self.email.password.is_empty()
    }

    pub fn application_emails(&self) -> &[String] {
        if self.notifications.application_emails.is_empty() {
            &self.notifications.contact_emails
        } else {
            &self.notifications.application_emails
        }
    }

    /// Environment variables win over config.json values.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(host) = std::env::var("EMAIL_HOST") {
            self.email.host = host;
        }
        if let Ok(port) = std::env::var("EMAIL_PORT") {
            if let Ok(port) = port.parse() {
                self.email.port = port;
            }
        }
        if let Ok(secure) = std::env::var("EMAIL_SECURE") {
            self.email.secure = secure == "true";
        }
        if let Ok(user) = std::env::var("EMAIL_USER") {
            self.email.username = user;
        }
        if let Ok(password) = std::env::var("EMAIL_PASSWORD") {
            self.email.password = password;
        }
        if let Ok(secret) = std::env::var("HCAPTCHA_SECRET_KEY") {
            self.captcha.hcaptcha_secret = secret;
        }
        if let Ok(emails) = std::env::var("NOTIFICATION_EMAILS") {
            self.notifications.contact_emails = split_emails(&emails);
        }
        if let Ok(emails) = std::env::var("REPRESENTATIVE_NOTIFICATION_EMAILS") {
            self.notifications.application_emails = split_emails(&emails);
        }
        if let Ok(base) = std::env::var("STORAGE_BASE_URL") {
            self.storage.public_base_url = base;
        }
    }
}

fn split_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create the default file if missing.
pub fn load_config() -> Result<AppConfig, String> {
    let config_path = get_config_path();

    let mut config = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        config
    } else {
        let config = AppConfig::default();
        save_config(&config)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        config
    };

    config.apply_env_overrides();
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let config_path = get_config_path();

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(&config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_emails() {
        assert_eq!(
            split_emails("a@x.org, b@x.org ,,c@x.org"),
            vec!["a@x.org", "b@x.org", "c@x.org"]
        );
        assert!(split_emails("").is_empty());
    }

    #[test]
    fn test_application_emails_fallback() {
        let mut config = AppConfig::default();
        assert_eq!(config.application_emails(), &["info@unidc.org".to_string()]);

        config.notifications.application_emails = vec!["reps@x.org".to_string()];
        assert_eq!(config.application_emails(), &["reps@x.org".to_string()]);
    }

    #[test]
    fn test_email_configured() {
        let mut config = AppConfig::default();
        assert!(!config.email_configured());
        config.email.username = "u".to_string();
        config.email.password = "p".to_string();
        assert!(config.email_configured());
    }
}
