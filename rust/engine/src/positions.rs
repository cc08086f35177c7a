//! Seat to position mapping for a six-handed table.
//!
//! Positions are numbered walking backward from the button: BTN, CO, MP,
//! EP, BB, SB. Action always moves from a position to the one numbered one
//! lower, wrapping from the button (0) to the small blind (5).

use crate::errors::ConfigError;

/// Seats at the table. The engine is built for six-max only.
pub const SEAT_COUNT: usize = 6;

pub const BTN: usize = 0;
pub const CO: usize = 1;
pub const MP: usize = 2;
pub const EP: usize = 3;
pub const BB: usize = 4;
pub const SB: usize = 5;

pub const POSITION_NAMES: [&str; SEAT_COUNT] = ["BTN", "CO", "MP", "EP", "BB", "SB"];

pub fn position_name(position: usize) -> &'static str {
    POSITION_NAMES.get(position).copied().unwrap_or("?")
}

/// Returns `positions[seat]` for every seat, with the button seat at 0.
///
/// # Errors
///
/// [`ConfigError::ButtonOutOfRange`] when `button_seat >= seat_count`.
///
/// # Examples
///
/// ```
/// use sixmax_engine::positions::{assign_positions, BB, BTN, SB};
///
/// let pos = assign_positions(0, 6).unwrap();
/// assert_eq!(pos[0], BTN);
/// assert_eq!(pos[1], SB);
/// assert_eq!(pos[2], BB);
/// ```
pub fn assign_positions(button_seat: usize, seat_count: usize) -> Result<Vec<usize>, ConfigError> {
    if button_seat >= seat_count {
        return Err(ConfigError::ButtonOutOfRange {
            button: button_seat,
            seats: seat_count,
        });
    }
    Ok((0..seat_count)
        .map(|seat| (button_seat + seat_count - seat) % seat_count)
        .collect())
}

/// Inverse of [`assign_positions`]: `seats[position]`.
pub fn seats_by_position(positions: &[usize]) -> Vec<usize> {
    let mut seats = vec![0; positions.len()];
    for (seat, &pos) in positions.iter().enumerate() {
        seats[pos] = seat;
    }
    seats
}

/// The position that acts after `position`.
pub fn next_position(position: usize, seat_count: usize) -> usize {
    (position + seat_count - 1) % seat_count
}

/// Walks backward from `start` (inclusive) over at most `seat_count`
/// positions and returns the first one accepted by `eligible`.
pub fn walk_from<F>(start: usize, seat_count: usize, mut eligible: F) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    let mut pos = start % seat_count.max(1);
    for _ in 0..seat_count {
        if eligible(pos) {
            return Some(pos);
        }
        pos = next_position(pos, seat_count);
    }
    None
}
