//! Lane speed definitions

use crate::board::{Lane, NUM_LANES};
use serde::{Deserialize, Serialize};

/// Which seat a player occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Moves along rows
    First = 0,
    /// Moves along columns
    Second = 1,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Steps a piece travels per move on each leg
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Speed {
    pub outbound: u8,
    pub inbound: u8,
}

impl Speed {
    const fn new(outbound: u8, inbound: u8) -> Self {
        Self { outbound, inbound }
    }

    /// Step count for a piece currently at `position`
    pub fn steps_from(&self, position: u8) -> u8 {
        if position <= 5 {
            self.outbound
        } else {
            self.inbound
        }
    }
}

/// Speeds for the first player, lanes 1 to 5
static FIRST_SPEEDS: [Speed; NUM_LANES] = [
    Speed::new(3, 1),
    Speed::new(1, 3),
    Speed::new(2, 2),
    Speed::new(1, 3),
    Speed::new(3, 1),
];

/// Speeds for the second player: edge and inner lanes swap
static SECOND_SPEEDS: [Speed; NUM_LANES] = [
    Speed::new(1, 3),
    Speed::new(3, 1),
    Speed::new(2, 2),
    Speed::new(3, 1),
    Speed::new(1, 3),
];

/// Get speed for a side's lane (1-based)
pub fn lane_speed(side: Side, lane: Lane) -> Speed {
    let table = match side {
        Side::First => &FIRST_SPEEDS,
        Side::Second => &SECOND_SPEEDS,
    };
    table[lane as usize - 1]
}
