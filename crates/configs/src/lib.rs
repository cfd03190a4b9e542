use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 3000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// File locations used by the offline report commands.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_input_csv")]
    pub input_csv: String,
    #[serde(default = "default_output_csv")]
    pub output_csv: String,
    #[serde(default = "default_output_html")]
    pub output_html: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_csv: default_input_csv(),
            output_csv: default_output_csv(),
            output_html: default_output_html(),
        }
    }
}

fn default_input_csv() -> String { "responses.csv".into() }
fn default_output_csv() -> String { "output.csv".into() }
fn default_output_html() -> String { "table.html".into() }

/// `CONFIG_PATH`, defaulting to `config.toml`.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

/// Read `path`, or build the config from the environment when the file does
/// not exist. An unreadable or malformed file is an error.
pub fn load_file_or_env(path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => load_from_str(&content).map_err(|e| anyhow!("invalid config file {}: {}", path, e)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::from_env()),
        Err(e) => Err(anyhow!("cannot read config file {}: {}", path, e)),
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Like [`AppConfig::load_and_validate`], but a missing config file
    /// falls back to defaults filled from the environment.
    pub fn load_or_env() -> Result<Self> {
        let mut cfg = load_file_or_env(&config_path())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // DATABASE_URL fills the url when the TOML leaves it out
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration { Duration::from_secs(self.connect_timeout_secs) }
    pub fn acquire_timeout(&self) -> Duration { Duration::from_secs(self.acquire_timeout_secs) }
    pub fn idle_timeout(&self) -> Duration { Duration::from_secs(self.idle_timeout_secs) }
    pub fn max_lifetime(&self) -> Duration { Duration::from_secs(self.max_lifetime_secs) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sections() {
        let cfg = load_from_str(r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [database]
            url = "postgres://u:p@localhost:5432/get_down"
            max_connections = 5

            [report]
            input_csv = "data/responses.csv"
        "#).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.database.min_connections, 1);
        assert_eq!(cfg.report.input_csv, "data/responses.csv");
        assert_eq!(cfg.report.output_html, "table.html");
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = load_from_str("").unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.report.output_csv, "output.csv");
    }

    #[test]
    fn rejects_non_postgres_url() {
        let db = DatabaseConfig { url: "mysql://localhost/db".into(), ..Default::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig {
            url: "postgres://localhost/db".into(),
            min_connections: 5,
            max_connections: 2,
            ..Default::default()
        };
        assert!(db.validate().is_err());
    }

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn file_values_win_over_env_fallback() {
        let path = temp_config("cfg-file-wins", r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "postgres://file/db"
        "#);
        let cfg = load_file_or_env(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.database.url, "postgres://file/db");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_file_is_an_error() {
        // `[server]` without the required `port`
        let path = temp_config("cfg-malformed", r#"
            [server]
            host = "0.0.0.0"

            [database]
            url = "postgres://file/db"
        "#);
        assert!(load_file_or_env(path.to_str().unwrap()).is_err());
        std::fs::remove_file(path).ok();

        let path = temp_config("cfg-syntax", "[server\nport = ");
        assert!(load_file_or_env(path.to_str().unwrap()).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let path = std::env::temp_dir().join("cfg-does-not-exist-7f3a.toml");
        let cfg = load_file_or_env(path.to_str().unwrap()).unwrap();
        let env = AppConfig::from_env();
        assert_eq!(cfg.server.host, env.server.host);
        assert_eq!(cfg.server.port, env.server.port);
    }

    #[test]
    fn zero_worker_threads_normalized() {
        let mut s = ServerConfig { host: " ".into(), port: 8080, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
    }
}
