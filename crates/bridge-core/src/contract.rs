use crate::call::Call;
use crate::catalog;
use crate::seat::{Pair, Seat};
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DoubleStatus {
    #[default]
    Undoubled,
    Doubled,
    Redoubled,
}

impl DoubleStatus {
    /// Wire encoding: 0 = undoubled, 1 = doubled, 2 = redoubled.
    pub fn flag(self) -> u8 {
        match self {
            DoubleStatus::Undoubled => 0,
            DoubleStatus::Doubled => 1,
            DoubleStatus::Redoubled => 2,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            DoubleStatus::Undoubled => "",
            DoubleStatus::Doubled => "X",
            DoubleStatus::Redoubled => "XX",
        }
    }
}

/// The standing contract: the highest accepted bid, who made it, and whether
/// it has been doubled or redoubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub level: u8,
    pub strain: Strain,
    pub double_status: DoubleStatus,
    pub declarer: Seat,
}

impl Contract {
    pub fn pair(&self) -> Pair {
        self.declarer.pair()
    }

    /// The bid call this contract stands on.
    pub fn bid(&self) -> Call {
        Call::Bid {
            level: self.level,
            strain: self.strain,
        }
    }

    pub fn order_key(&self) -> u8 {
        catalog::bid_order_key(self.level, self.strain)
    }

    /// True for 7NT, the highest slot in the catalog.
    pub fn is_maximal(&self) -> bool {
        self.level == 7 && self.strain == Strain::NoTrump
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} by {}",
            self.level,
            self.strain,
            self.double_status.suffix(),
            self.declarer
        )
    }
}
