use std::io;
use std::process::ExitCode;

use advisor_cli::{Cli, Menu, Prompter, Result};
use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("✗").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("advisor_core=debug,advisor_cli=debug")
    } else {
        EnvFilter::new("advisor_core=warn,advisor_cli=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    let mut menu = Menu::open(&config)?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    menu.run(&mut prompter)
}
