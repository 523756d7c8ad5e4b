#![warn(clippy::all, clippy::pedantic)]

use clap::Parser;
use dotenvy::dotenv;
use logger::init_tracing;
use uptime_server::cli::Cli;
use uptime_server::config::Config;
use uptime_server::error::AppError;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::from_config(cli.config.as_deref())?;
    config.apply_env();
    config.validate()?;

    if cli.print_config {
        print!("{config}");
        return Ok(());
    }

    uptime_server::run(config).await
}
