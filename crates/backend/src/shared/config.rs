use once_cell::sync::OnceCell;
use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
    #[serde(default)]
    pub dashboards: DashboardsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Billing tier endpoint
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RemoteConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardsConfig {
    #[serde(default = "default_days_ahead")]
    pub expiring_days_ahead: u32,
}

impl Default for DashboardsConfig {
    fn default() -> Self {
        Self {
            expiring_days_ahead: default_days_ahead(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_days_ahead() -> u32 {
    contracts::dashboards::d402_expiring_trials::DEFAULT_DAYS_AHEAD
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[remote]
base_url = "http://localhost:8080/services/apexrest"
timeout_secs = 30

[dashboards]
expiring_days_ahead = 7
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.remote.base_url.trim().is_empty() {
        anyhow::bail!("remote.base_url must not be empty");
    }
    Ok(config)
}

/// Store the loaded configuration for the rest of the process
pub fn initialize(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("configuration already initialized"))
}

/// Configured horizon of the expiring trials widget
pub fn expiring_days_ahead() -> u32 {
    CONFIG
        .get()
        .map(|c| c.dashboards.expiring_days_ahead)
        .unwrap_or_else(default_days_ahead)
}
