use std::{array, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    pub fn iter() -> array::IntoIter<Self, 4> {
        Self::ALL.into_iter()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidDirection(s.to_owned()))
    }
}

impl TryFrom<u8> for Direction {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::InvalidDirection(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("UP".parse(), Ok(Direction::Up));
        assert_eq!("left".parse(), Ok(Direction::Left));
        assert_eq!(
            "diagonal".parse::<Direction>(),
            Err(Error::InvalidDirection("diagonal".to_owned()))
        );
    }

    #[test]
    fn discriminants_round_trip_through_u8() {
        for direction in Direction::iter() {
            assert_eq!(Direction::try_from(direction as u8), Ok(direction));
        }

        assert!(Direction::try_from(4).is_err());
    }

    #[test]
    fn iter_can_cycle() {
        let directions: Vec<_> = Direction::iter().cycle().take(6).collect();

        assert_eq!(directions[4], Direction::Up);
        assert_eq!(directions[5], Direction::Down);
    }
}
