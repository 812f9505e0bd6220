//! Player identity within a match

use std::fmt;

/// One of the two players in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Both sides, in player-number order
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    /// Parse a player number (1 or 2)
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Side::One),
            2 => Some(Side::Two),
            _ => None,
        }
    }

    /// Player number as sent on the wire
    pub fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }

    /// Zero-based index for per-side arrays
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// The other player
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for side in Side::BOTH {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(Side::from_number(1), Some(Side::One));
        assert_eq!(Side::from_number(2), Some(Side::Two));
        assert_eq!(Side::from_number(3), None);
        assert_eq!(Side::Two.number(), 2);
        assert_eq!(Side::Two.index(), 1);
        assert_eq!(Side::One.to_string(), "Player 1");
    }
}
