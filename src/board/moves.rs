use std::fmt;
use std::str::FromStr;

use super::Coord;
use crate::error::NetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Add,
    Step,
    Quit,
}

/// A move as exchanged with the outside world.
///
/// Text form: `add X Y`, `step X1 Y1 X2 Y2` (destination first, then the
/// chip being vacated) and `quit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Add { to: Coord },
    Step { to: Coord, from: Coord },
    Quit,
}

impl Move {
    pub fn add(x: i32, y: i32) -> Self {
        Move::Add { to: Coord::new(x, y) }
    }

    pub fn step(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Move::Step { to: Coord::new(x1, y1), from: Coord::new(x2, y2) }
    }

    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Add { .. } => MoveKind::Add,
            Move::Step { .. } => MoveKind::Step,
            Move::Quit => MoveKind::Quit,
        }
    }

    /// Destination of an ADD or STEP.
    pub fn target(&self) -> Option<Coord> {
        match *self {
            Move::Add { to } | Move::Step { to, .. } => Some(to),
            Move::Quit => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Add { to } => write!(f, "add {} {}", to.x, to.y),
            Move::Step { to, from } => write!(f, "step {} {} {} {}", to.x, to.y, from.x, from.y),
            Move::Quit => write!(f, "quit"),
        }
    }
}

impl FromStr for Move {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: &str| NetError::ParseMove { input: s.to_string(), reason: reason.to_string() };
        let mut tokens = s.split_whitespace();
        let kind = tokens.next().ok_or_else(|| err("empty input"))?;
        let nums = tokens
            .map(|t| t.parse::<i32>().map_err(|_| err("coordinates must be integers")))
            .collect::<Result<Vec<i32>, NetError>>()?;
        match (kind.to_ascii_lowercase().as_str(), nums.as_slice()) {
            ("add", [x, y]) => Ok(Move::add(*x, *y)),
            ("step", [x1, y1, x2, y2]) => Ok(Move::step(*x1, *y1, *x2, *y2)),
            ("quit", []) => Ok(Move::Quit),
            ("add", _) => Err(err("add takes 2 coordinates")),
            ("step", _) => Err(err("step takes 4 coordinates")),
            ("quit", _) => Err(err("quit takes no coordinates")),
            _ => Err(err("unknown move kind")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_move_form() {
        assert_eq!("add 3 4".parse::<Move>().unwrap(), Move::add(3, 4));
        assert_eq!("STEP 1 2 5 6".parse::<Move>().unwrap(), Move::step(1, 2, 5, 6));
        assert_eq!(" quit ".parse::<Move>().unwrap(), Move::Quit);
    }

    #[test]
    fn display_matches_parser() {
        let m = Move::step(2, 3, 4, 5);
        assert_eq!(m.to_string(), "step 2 3 4 5");
        assert_eq!(m.to_string().parse::<Move>().unwrap(), m);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("add 1".parse::<Move>().is_err());
        assert!("add x y".parse::<Move>().is_err());
        assert!("jump 1 2".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
        assert!("quit 1".parse::<Move>().is_err());
    }

    #[test]
    fn kind_and_target() {
        assert_eq!(Move::add(1, 1).kind(), MoveKind::Add);
        assert_eq!(Move::step(1, 1, 2, 2).target(), Some(Coord::new(1, 1)));
        assert_eq!(Move::Quit.target(), None);
    }
}
