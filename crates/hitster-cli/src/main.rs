use clap::Parser;
use hitster_core::{credentials, logging};

mod cli;

use crate::cli::Cli;

fn main() {
    // .env must be loaded before parsing so PLAYLIST_ID can fill the positional;
    // its outcome is logged once the subscriber exists.
    let dotenv = credentials::load_dotenv();
    let cli = Cli::parse();

    if logging::init_logging(cli.verbose).is_err() {
        logging::init_logging_stderr(cli.verbose);
    }
    credentials::log_dotenv_outcome(&dotenv);
    if let Err(e) = &dotenv {
        eprintln!("hitster-cards: ignoring unreadable .env: {}", e);
    }

    if let Err(err) = cli.run() {
        eprintln!("hitster-cards error: {:#}", err);
        std::process::exit(1);
    }
}
