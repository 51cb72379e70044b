use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use lightnet_core::{Coord2, Direction};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Rotate(Coord2),
    Move(Direction),
    Tick(u32),
    Restart,
    Json,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            bail!("empty command");
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "r" | "rotate" => {
                let x = parse_coord(words.next(), "x")?;
                let y = parse_coord(words.next(), "y")?;
                Command::Rotate((x, y))
            }
            "w" | "up" => Command::Move(Direction::Up),
            "a" | "left" => Command::Move(Direction::Left),
            "s" | "down" => Command::Move(Direction::Down),
            "d" | "right" => Command::Move(Direction::Right),
            "t" | "tick" => match words.next() {
                Some(count) => Command::Tick(count.parse().context("tick count")?),
                None => Command::Tick(1),
            },
            "n" | "restart" => Command::Restart,
            "json" => Command::Json,
            "q" | "quit" | "exit" => Command::Quit,
            other => bail!("unknown command {other:?}"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?}");
        }
        Ok(command)
    }
}

fn parse_coord(word: Option<&str>, axis: &str) -> anyhow::Result<u8> {
    let word = word.ok_or_else(|| anyhow!("missing {axis} coordinate"))?;
    word.parse()
        .with_context(|| format!("invalid {axis} coordinate {word:?}"))
}
