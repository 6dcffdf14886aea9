use anyhow::Context;
use bookshelf_server::{BookshelfServer, ServerConfig};
use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    tracing::debug!(?config, "effective configuration");
    match cli.command {
        Command::Serve(args) => cmd_serve(config, args),
        Command::Config => cmd_config(&config),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ServerConfig> {
    match &cli.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("reading config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn apply_overrides(mut config: ServerConfig, args: &ServeArgs) -> ServerConfig {
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.empty {
        config.seed_sample_data = false;
    }
    config
}

fn cmd_serve(config: ServerConfig, args: ServeArgs) -> anyhow::Result<()> {
    let config = apply_overrides(config, &args);
    let inventory = if config.seed_sample_data { "sample" } else { "empty" };
    println!(
        "{} Bookshelf on {} ({} inventory)",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        inventory.yellow()
    );
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(BookshelfServer::new(config).serve())?;
    Ok(())
}

fn cmd_config(config: &ServerConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
