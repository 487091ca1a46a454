//! CLI configuration

use mandatoryif_validator::ValidatorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Validator settings
    pub validator: ValidatorConfig,

    /// Pretty-print the JSON report
    pub pretty: bool,
}

impl CliConfig {
    /// Load configuration from `.env`, `config/mandatoryif.*` and `MANDATORYIF_*` variables
    ///
    /// Nested keys use a double underscore, e.g. `MANDATORYIF_VALIDATOR__DIRECTIVE`.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/mandatoryif").required(false))
            .add_source(environment())
            .build();

        match config_result {
            Ok(cfg) => Self::finish(cfg),
            Err(e) => {
                tracing::info!("No usable config sources ({}), using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit file, still honouring environment overrides
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;

        Self::finish(cfg)
    }

    fn finish(cfg: config::Config) -> anyhow::Result<Self> {
        let config: Self = cfg
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;
        config.validator.validate()?;
        Ok(config)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("MANDATORYIF")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
