//! mandatoryIf record validator CLI
//!
//! Usage: `mandatoryif [RECORD_FILE]`. Reads the record from stdin when no
//! file is given, prints violations as JSON and exits with status 1 when
//! there are any.

use anyhow::{Context, Result};
use mandatoryif_cli::{check_record, CliConfig};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = CliConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let path = std::env::args().nth(1).map(PathBuf::from);
    let content = match &path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read record {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read record from stdin")?;
            buffer
        }
    };

    let violations = check_record(&content, path.as_deref(), &config)?;
    let output = if config.pretty {
        serde_json::to_string_pretty(&violations)?
    } else {
        serde_json::to_string(&violations)?
    };
    println!("{}", output);

    if !violations.is_empty() {
        info!("{} violation(s) found", violations.len());
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing subscriber, logging to stderr
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mandatoryif_cli=info,mandatoryif_validator=info,mandatoryif_core=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
