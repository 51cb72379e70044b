use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use lightnet_core::{Coord, GameConfig, MoveOutcome, PlayEngine, RotateOutcome, Snapshot};

mod command;
mod render;

use command::Command;

#[derive(Parser, Debug)]
#[command(version, about = "Rotate the tiles until every wire carries power", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in tiles
    #[arg(long, default_value_t = 6)]
    width: Coord,

    /// Board height in tiles
    #[arg(long, default_value_t = 6)]
    height: Coord,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Candidate edge weights are drawn below this bound
    #[arg(long, default_value_t = GameConfig::DEFAULT_MAX_WEIGHT)]
    max_weight: u32,

    /// Starting column of the power source
    #[arg(long, default_value_t = 0)]
    source_x: Coord,

    /// Starting row of the power source
    #[arg(long, default_value_t = 0)]
    source_y: Coord,

    /// Print the board as JSON after every command
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig::new((self.width, self.height))
            .with_source((self.source_x, self.source_y))
            .with_max_weight(self.max_weight)
    }
}

fn show(engine: &PlayEngine, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let snapshot = Snapshot::from_engine(engine);
    if json {
        serde_json::to_writer(&mut *out, &snapshot).context("writing snapshot")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render::render(&snapshot))?;
    }
    out.flush()?;
    Ok(())
}

/// Applies a board command, returning a notice for the player when there is one.
fn apply(engine: &mut PlayEngine, command: Command) -> anyhow::Result<Option<String>> {
    let notice = match command {
        Command::Rotate(coords) => (engine.rotate(coords)? == RotateOutcome::Won)
            .then(|| format!("All tiles lit with {} rotations!", engine.score())),
        Command::Move(direction) => (engine.move_source(direction)? == MoveOutcome::Rejected)
            .then(|| "The source can only travel along lit wire".to_owned()),
        Command::Tick(count) => {
            for _ in 0..count {
                engine.on_tick();
            }
            None
        }
        Command::Restart => {
            engine.restart()?;
            None
        }
        Command::Json | Command::Quit => None,
    };
    Ok(notice)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let mut engine = PlayEngine::new(args.config(), seed).context("generating puzzle")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    show(&engine, args.json, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("error: {err:#}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Json => show(&engine, true, &mut out)?,
            command => {
                // stdout carries only boards so --json output stays line-delimited
                match apply(&mut engine, command) {
                    Ok(Some(notice)) => eprintln!("{notice}"),
                    Ok(None) => {}
                    Err(err) => eprintln!("error: {err:#}"),
                }
                show(&engine, args.json, &mut out)?;
            }
        }
    }

    Ok(())
}
