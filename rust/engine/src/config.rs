use serde::{Deserialize, Serialize};

use crate::chips::Chips;
use crate::engine::Blinds;
use crate::errors::ConfigError;
use crate::positions::SEAT_COUNT;

/// Default seed when none is configured.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Everything needed to run a sequence of hands at one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub seats: usize,
    pub starting_stack: Chips,
    pub blinds: Blinds,
    pub hands: u64,
    pub seed: u64,
    /// Button seat for the first hand; it moves one seat left every hand.
    pub button_seat: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seats: SEAT_COUNT,
            starting_stack: Chips::from_units(100),
            blinds: Blinds::default(),
            hands: 10,
            seed: DEFAULT_SEED,
            button_seat: 0,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats != SEAT_COUNT {
            return Err(ConfigError::SeatCount {
                expected: SEAT_COUNT,
                actual: self.seats,
            });
        }
        if self.button_seat >= self.seats {
            return Err(ConfigError::ButtonOutOfRange {
                button: self.button_seat,
                seats: self.seats,
            });
        }
        if self.starting_stack.is_zero() {
            return Err(ConfigError::NonPositiveStack);
        }
        let Blinds { small, big } = self.blinds;
        if small.is_zero() || big.is_zero() || small > big {
            return Err(ConfigError::InvalidBlinds { small, big });
        }
        if self.hands == 0 {
            return Err(ConfigError::NoHands);
        }
        Ok(())
    }
}
