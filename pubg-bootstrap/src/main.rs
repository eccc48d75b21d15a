use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use pubg_bootstrap::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_layer = cli.options.log_dir.as_ref().map(|dir| {
        let appender = tracing_appender::rolling::daily(dir, "pubg-stats.log");
        tracing_appender::non_blocking(appender)
    });
    let (file_writer, _guard) = match file_layer {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_writer.map(|writer| fmt::layer().with_ansi(false).with_writer(writer)))
        .init();

    if let Some(config) = &cli.options.config {
        std::env::set_var("PUBG_CONFIG", config);
    }

    pubg_bootstrap::run(cli).await
}
