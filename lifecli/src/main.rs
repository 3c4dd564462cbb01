use std::{env, io, process::exit};

use colored::Colorize;
use config::Config;

mod cli;
mod config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("! {e:?}").red());
        exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = match env::args().nth(1) {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    };

    let mut grid = config.seed_grid()?;

    cli::run(
        &mut grid,
        config.generations,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    )
}
