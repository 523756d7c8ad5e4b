use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "HTTP uptime monitor with a dashboard API")]
pub struct Cli {
    /// Path to the TOML config file (default: $XDG_CONFIG_HOME/uptime/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub print_config: bool,
}
