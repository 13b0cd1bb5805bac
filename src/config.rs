use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Application configuration, layered from defaults, an optional TOML file,
/// `PORTFOLIO__`-prefixed environment variables and finally the plain
/// `SMTP_*` variables the deployment has always used.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Outbound SMTP settings. Each field may be absent; the contact form only
/// gains a working transport once host, port, user and pass are all present.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EmailConfig {
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default)]
    pub smtp_port: Option<u16>,
    #[serde(default)]
    pub smtp_secure: bool,
    #[serde(default)]
    pub smtp_user: Option<String>,
    #[serde(default)]
    pub smtp_pass: Option<String>,
}

/// A complete set of SMTP connection settings.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub user: String,
    pub pass: String,
}

impl EmailConfig {
    /// Returns `Some` only when every required setting is present.
    /// `smtp_secure` is optional and defaults to STARTTLS.
    pub fn smtp(&self) -> Option<SmtpSettings> {
        match (
            &self.smtp_host,
            self.smtp_port,
            &self.smtp_user,
            &self.smtp_pass,
        ) {
            (Some(host), Some(port), Some(user), Some(pass)) => Some(SmtpSettings {
                host: host.clone(),
                port,
                secure: self.smtp_secure,
                user: user.clone(),
                pass: pass.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (PORTFOLIO__SERVER__PORT, etc.)
        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the SMTP environment variables without prefix, under
        // the names the deployment has always used
        if let Ok(host) = env::var("SMTP_HOST") {
            builder = builder.set_override("email.smtp_host", host)?;
        }
        if let Ok(port) = env::var("SMTP_PORT") {
            // An unparseable port counts as absent, which leaves the
            // transport unconfigured rather than failing startup.
            if let Ok(port) = port.parse::<u16>() {
                builder = builder.set_override("email.smtp_port", i64::from(port))?;
            }
        }
        if let Ok(secure) = env::var("SMTP_SECURE") {
            builder = builder.set_override("email.smtp_secure", secure == "true")?;
        }
        if let Ok(user) = env::var("SMTP_USER") {
            builder = builder.set_override("email.smtp_user", user)?;
        }
        if let Ok(pass) = env::var("SMTP_PASS") {
            builder = builder.set_override("email.smtp_pass", pass)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}
