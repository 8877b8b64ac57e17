use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::store::JsonFileCompletionStore;

/// Main configuration structure for the welcome flow host
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WelcomeFlowConfig {
    /// Completion store settings
    pub store: StoreConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
    /// Where flow definitions live
    pub flows: FlowsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the JSON completion file
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON structured logs instead of plain text
    pub json_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlowsConfig {
    /// Directory searched for `<name>.toml` flow definitions
    pub directory: PathBuf,
}

impl Default for WelcomeFlowConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                path: PathBuf::from(".welcome-flow/completions.json"),
            },
            observability: ObservabilityConfig {
                log_level: "warn".to_string(),
                json_logs: false,
            },
            flows: FlowsConfig {
                directory: PathBuf::from("flows"),
            },
        }
    }
}

impl WelcomeFlowConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (welcome-flow.toml)
    /// 3. Environment variables (WELCOME_FLOW_STORE__PATH, ...)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("welcome-flow.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WELCOME_FLOW")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }

    pub fn completion_store(&self) -> JsonFileCompletionStore {
        JsonFileCompletionStore::new(&self.store.path)
    }

    /// Resolve a flow argument: an existing path, or a name inside the flows directory
    pub fn flow_path(&self, flow: &str) -> PathBuf {
        let direct = PathBuf::from(flow);
        if direct.exists() {
            return direct;
        }
        let file_name = if flow.ends_with(".toml") {
            flow.to_string()
        } else {
            format!("{}.toml", flow)
        };
        self.flows.directory.join(file_name)
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<WelcomeFlowConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = WelcomeFlowConfig::load_env_file();
        WelcomeFlowConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static WelcomeFlowConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}
