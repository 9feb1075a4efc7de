//! Application configuration. Bind address, storage, seeding, replies.

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Which FAQ store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// libsql file under `data_dir`.
    #[default]
    Sqlite,
    /// In-process; lost on restart.
    Memory,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Listen host. Read from NUTRI_FAQ_HOST.
    #[serde(default)]
    pub host: Option<String>,

    /// Listen port. Read from NUTRI_FAQ_PORT.
    #[serde(default)]
    pub port: Option<u16>,

    /// Directory holding faq.db. Read from NUTRI_FAQ_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// `sqlite` or `memory`. Read from NUTRI_FAQ_STORAGE.
    #[serde(default)]
    pub storage: Option<StorageKind>,

    // ─────────────────────────────────────────────────────────────────────────
    // Seeding
    // ─────────────────────────────────────────────────────────────────────────
    /// JSON or CSV file imported at startup. Read from NUTRI_FAQ_SEED_PATH.
    #[serde(default)]
    pub seed_path: Option<String>,

    /// Clear the store before importing. Read from NUTRI_FAQ_SEED_REPLACE.
    #[serde(default)]
    pub seed_replace: Option<bool>,

    /// Reply when nothing matches. Read from NUTRI_FAQ_FALLBACK_REPLY.
    #[serde(default)]
    pub fallback_reply: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("NUTRI_FAQ").try_parsing(true));
        if let Ok(path) = std::env::var("NUTRI_FAQ_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host_or_default(), self.port_or_default())
    }

    pub fn data_dir_or_default(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    pub fn storage_or_default(&self) -> StorageKind {
        self.storage.unwrap_or_default()
    }

    pub fn seed_replace_or_default(&self) -> bool {
        self.seed_replace.unwrap_or(false)
    }

    /// Configured fallback reply, ignoring blank values.
    pub fn fallback_reply(&self) -> Option<&str> {
        self.fallback_reply
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bind_address(), "0.0.0.0:3000");
        assert_eq!(cfg.data_dir_or_default(), "./data");
        assert_eq!(cfg.storage_or_default(), StorageKind::Sqlite);
        assert!(!cfg.seed_replace_or_default());
        assert!(cfg.fallback_reply().is_none());
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig {
            host: Some("127.0.0.1".into()),
            port: Some(8080),
            storage: Some(StorageKind::Memory),
            fallback_reply: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
        assert_eq!(cfg.storage_or_default(), StorageKind::Memory);
        assert!(cfg.fallback_reply().is_none());
    }

    #[test]
    fn test_deserialize_from_file_source() {
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                port = 4000
                storage = "memory"
                seed_path = "faq.json"
                seed_replace = true
                fallback_reply = "Ask me about diets."
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.port_or_default(), 4000);
        assert_eq!(cfg.storage_or_default(), StorageKind::Memory);
        assert_eq!(cfg.seed_path.as_deref(), Some("faq.json"));
        assert!(cfg.seed_replace_or_default());
        assert_eq!(cfg.fallback_reply(), Some("Ask me about diets."));
    }
}
