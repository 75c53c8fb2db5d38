mod commands;
mod config;
mod notify;

use clap::Parser;

#[derive(clap::Parser)]
#[command(name = "connect", version, about = "Terminal client for the Connect social network")]
struct Cli {
    #[command(flatten)]
    config: config::Config,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    commands::run(cli.config, cli.command).await
}
