use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Seat {
    #[default]
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pair {
    NorthSouth,
    EastWest,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn idx(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    /// Next seat in clockwise calling order.
    pub fn next(self) -> Self {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    pub fn pair(self) -> Pair {
        match self {
            Seat::North | Seat::South => Pair::NorthSouth,
            Seat::East | Seat::West => Pair::EastWest,
        }
    }

    /// The four seats in calling order starting from `dealer`.
    pub fn order_from(dealer: Seat) -> [Seat; 4] {
        let mut order = [dealer; 4];
        for i in 1..4 {
            order[i] = order[i - 1].next();
        }
        order
    }

    pub fn to_char(self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            _ => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Pair {
    pub const ALL: [Pair; 2] = [Pair::NorthSouth, Pair::EastWest];

    pub fn idx(self) -> usize {
        match self {
            Pair::NorthSouth => 0,
            Pair::EastWest => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Pair::NorthSouth => Pair::EastWest,
            Pair::EastWest => Pair::NorthSouth,
        }
    }

    pub fn contains(self, seat: Seat) -> bool {
        seat.pair() == self
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pair::NorthSouth => write!(f, "N/S"),
            Pair::EastWest => write!(f, "E/W"),
        }
    }
}
