// src/bin/cli.rs
use pitch_scrape::cli::{self, Status};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if cli::run()? == Status::Incomplete {
        std::process::exit(1);
    }
    Ok(())
}
