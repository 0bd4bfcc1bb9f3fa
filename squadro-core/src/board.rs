//! Track geometry: position encoding and lane crossings

/// Number of lanes (and pieces) per player
pub const NUM_LANES: usize = 5;

/// Position of a piece that has not moved yet
pub const START: u8 = 0;

/// Turnaround cell, midpoint of the journey
pub const TURNAROUND: u8 = 6;

/// Position of a piece back home
pub const FINISH: u8 = 12;

/// Lane index (1-based) of a piece
pub type Lane = u8;

/// Check if a raw position is on the track
pub fn is_valid_position(position: i64) -> bool {
    (START as i64..=FINISH as i64).contains(&position)
}

/// Check if a position is on the outbound leg (including the start)
pub fn is_outbound(position: u8) -> bool {
    position < TURNAROUND
}

/// Fold a position onto the crossing it occupies (1..=5).
///
/// Outbound position `k` and inbound position `12 - k` sit on the same
/// physical crossing. Start, turnaround and finish are off the grid.
pub fn lane_cell(position: u8) -> Option<Lane> {
    match position {
        1..=5 => Some(position),
        7..=11 => Some(FINISH - position),
        _ => None,
    }
}

/// Where a captured piece is sent back to
pub fn reset_position(position: u8) -> u8 {
    if position <= 5 {
        START
    } else {
        TURNAROUND
    }
}

/// Check if a piece resting at `position` sits on the crossing with `lane`
pub fn on_crossing(position: u8, lane: Lane) -> bool {
    position == lane || position == FINISH - lane
}
