mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::new(cli.config.as_deref(), &cli.paths, cli.verbose)?;

    match cli.command {
        Commands::Render {
            template,
            data,
            output,
        } => commands::render::run(&ctx, &template, data.as_deref(), output.as_deref()),
        Commands::Check { templates } => commands::check::run(&ctx, &templates),
    }
}

/// Route `log` records (and `tracing` events from the core) to stderr
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
