// fosh/src/main.rs
use std::process;

use colored::Colorize;
use fosh_common::args::CommandArgs;
use fosh_common::config::Config;
use fosh_common::error::Result as FoshResult;
use fosh_core::Commands;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod cli;

fn init_logging(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("FOSH_LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();
}

fn run(commands: &Commands, invocation: &cli::Invocation) -> FoshResult<()> {
    let config = Config::load()?;
    let args = CommandArgs::new(&invocation.command, invocation.args.verbose);
    commands.dispatch(&invocation.command, &config, &args)
}

fn main() {
    let commands = Commands::with_builtin();
    let invocation = cli::parse(&commands);

    init_logging(invocation.args.verbose);

    if let Err(e) = run(&commands, &invocation) {
        error!("Command failed: {:#}", e);
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }

    debug!("Command completed successfully.");
}
