use clap::Parser;

use gnock::cli::args::Cli;
use gnock::commands;
use gnock::logging;

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    if let Err(e) = commands::dispatch(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
