use crate::di::Repositories;
use tabledns_application::ports::NameTable;
use tabledns_domain::{CliOverrides, Config};
use tracing::{info, warn};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

/// Reads the table once so a broken file shows up at startup. Queries still
/// read it fresh every time; nothing is kept.
pub async fn preflight_name_table(repos: &Repositories) {
    let path = repos.name_table.path().display().to_string();
    match repos.name_table.get_names().await {
        Ok(entries) => info!(path = %path, entries = entries.len(), "Name table loaded"),
        Err(e) => warn!(
            path = %path,
            error = %e,
            "Name table unavailable, queries will get empty answers until it is readable"
        ),
    }
}
