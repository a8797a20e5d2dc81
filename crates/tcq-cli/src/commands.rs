use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tcq_server::{ServerConfig, TcqServer};

use crate::cli::{Cli, Command, ConfigArgs, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args),
    }
}

/// Config file if given, otherwise defaults.
fn resolve_config(path: Option<&str>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(p) => {
            ServerConfig::load(Path::new(p)).with_context(|| format!("loading config from {p}"))
        }
        None => Ok(ServerConfig::default()),
    }
}

/// Command-line flags win over whatever the config file said.
fn apply_overrides(mut config: ServerConfig, args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address {bind}"))?;
    }
    if let Some(ms) = args.tick_interval_ms {
        config.tick_interval_ms = ms;
    }
    if let Some(ms) = args.commit_latency_ms {
        config.commit_latency_ms = ms;
    }
    if args.seed {
        config.seed_demo = true;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = apply_overrides(resolve_config(args.config.as_deref())?, &args)?;

    println!(
        "{} TCQ server on {}",
        "✓".green().bold(),
        config.bind_addr.to_string().bold()
    );
    println!(
        "  tick interval:  {}",
        format!("{}ms", config.tick_interval_ms).cyan()
    );
    println!(
        "  commit latency: {}",
        format!("{}ms", config.commit_latency_ms).cyan()
    );
    if config.seed_demo {
        println!("  seeding {}", "demo tasks".yellow());
    }

    TcqServer::new(config).serve().await?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.file.as_deref())?;
    print!(
        "{}",
        toml::to_string_pretty(&config).context("serializing config")?
    );
    Ok(())
}
