use clap::Parser;
use colored::Colorize;
use ip_range_ops::cli::{run, Cli};
use ip_range_ops::config::init_logging;
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    let cli = Cli::parse();

    match run(cli) {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "ERROR".on_red());
            Ok(ExitCode::FAILURE)
        }
    }
}
