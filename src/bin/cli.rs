// src/bin/cli.rs
use player_lookup::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Contract: failures come out as one "Error: ..." line on stdout and
    // the exit status stays 0. Panics still get the color-eyre report.
    if let Err(e) = cli::run() {
        println!("Error: {e}");
    }
    Ok(())
}
