use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod output;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli::Cli { config, command } = cli::Cli::parse();
    let cfg = config::Config::try_load_from_file_or_default(config.as_ref())?;
    let ctx = commands::Context::try_new(cfg)?;

    // All gateways are single threaded
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(commands::run(&ctx, command))
}
