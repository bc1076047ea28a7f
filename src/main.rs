#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battlegrid::{init_logging, render_grid, render_history, script::Script, Grid};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::io::Read;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Run a battle scenario script against a fresh grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Script file to run; reads stdin when omitted.
    script: Option<PathBuf>,
    /// Start with sonar enabled.
    #[arg(long)]
    sonar: bool,
    /// Override the number of sonar charges.
    #[arg(long)]
    charges: Option<u32>,
    /// Give Destroyer and Battleship critical squares one point of armor.
    #[arg(long)]
    armor: bool,
    /// Print the final attack history as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let text = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading script from stdin")?;
            buf
        }
    };
    let script = Script::parse(&text)?;

    let mut grid = Grid::new();
    grid.set_sonar_enabled(cli.sonar);
    if let Some(n) = cli.charges {
        grid.set_sonar_count(n);
    }
    grid.set_armored_quarters(cli.armor);

    let events = script.run(&mut grid);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(grid.attacks())?);
        return Ok(());
    }
    for event in &events {
        println!("{}", event);
    }
    println!();
    print!("{}", render_grid(&grid, true));
    println!();
    print!("{}", render_history(grid.attacks()));
    println!("status: {:?}", grid.status());
    Ok(())
}
