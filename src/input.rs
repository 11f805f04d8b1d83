use std::str::FromStr;

use anyhow::{anyhow, bail};
use lib_2048::{Direction, CELL_COUNT};

/// Keys that inspect a cell, laid out like the board: row-major, one keyboard row per board row.
const INSPECTION_KEYS: [char; CELL_COUNT] = [
    '1', '2', '3', '4', //
    'q', 'w', 'e', 'r', //
    'a', 's', 'd', 'f', //
    'z', 'x', 'c', 'v',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Inspect(usize),
    NewGame,
    Quit,
}

pub fn inspection_index(key: char) -> Option<usize> {
    let key = key.to_ascii_lowercase();

    INSPECTION_KEYS.iter().position(|&k| k == key)
}

pub fn inspection_key(index: usize) -> Option<char> {
    INSPECTION_KEYS.get(index).copied()
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let mut chars = s.chars();
        if let (Some(key), None) = (chars.next(), chars.next()) {
            return inspection_index(key)
                .map(Command::Inspect)
                .ok_or_else(|| anyhow!("`{key}` is not an inspection key"));
        }

        match s.to_ascii_lowercase().as_str() {
            "" => bail!("empty command"),
            "new" | "restart" => Ok(Command::NewGame),
            "quit" | "exit" => Ok(Command::Quit),
            other => Ok(Command::Move(other.parse()?)),
        }
    }
}
