// SPDX-License-Identifier: MPL-2.0
use std::sync::Arc;
use style_spark::app::{self, Flags};
use style_spark::config;
use style_spark::error::{Error, Result};
use style_spark::infrastructure::HttpStyleService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "style_spark=info";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = args
        .opt_value_from_str("--lang")
        .map_err(|e| Error::Config(e.to_string()))?;
    let config_dir: Option<std::path::PathBuf> = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| Error::Config(e.to_string()))?;
    let server: Option<String> = args
        .opt_value_from_str("--server")
        .map_err(|e| Error::Config(e.to_string()))?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    let (mut config, config_warning) = config::load_with_override(config_dir);
    if let Some(base_url) = server {
        config.service.base_url = base_url;
    }

    let service = HttpStyleService::new(&config.service)?;
    tracing::info!(server = %config.service.base_url, "using style service");

    app::run(Flags {
        lang,
        config,
        config_warning,
        service: Arc::new(service),
    })?;

    Ok(())
}
