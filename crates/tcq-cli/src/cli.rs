use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(
    name = "tcq",
    about = "Task Commit Queue: a todo service with an asynchronous commit queue",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server and its queue processor
    Serve(ServeArgs),
    /// Print the resolved configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Socket address to listen on, overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,
    /// Queue processor tick interval in milliseconds
    #[arg(long)]
    pub tick_interval_ms: Option<u64>,
    /// Simulated commit latency in milliseconds
    #[arg(long)]
    pub commit_latency_ms: Option<u64>,
    /// Seed the store with demo tasks on startup
    #[arg(long)]
    pub seed: bool,
}

#[derive(Args)]
pub struct ConfigArgs { pub file: Option<String> }
