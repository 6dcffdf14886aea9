use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bookshelf",
    about = "Bookshelf: in-memory book inventory over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on, overriding the config file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Start with an empty inventory instead of the sample books
    #[arg(long)]
    pub empty: bool,
}
