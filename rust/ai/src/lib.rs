//! # sixmax-ai: decision policies for the six-max engine
//!
//! Every policy implements [`sixmax_engine::policy::ActionPolicy`] and only
//! ever returns an action the engine offered.
//!
//! ## Policies
//!
//! - `"random"` - [`random::RandomPolicy`], uniform over the offered actions
//! - `"passive"` - [`simple::PassivePolicy`], checks or calls
//! - `"aggressive"` - [`simple::AggressivePolicy`], raises all-in when it can
//! - `"baseline"` - [`baseline::BaselinePolicy`], hand strength and pot odds
//!
//! ## Quick Start
//!
//! ```rust
//! use sixmax_ai::create_policy;
//!
//! let policy = create_policy("passive", 42).unwrap();
//! assert_eq!(policy.name(), "passive");
//! assert!(create_policy("nonsense", 42).is_err());
//! ```

use sixmax_engine::policy::ActionPolicy;
use sixmax_engine::positions::SEAT_COUNT;
use thiserror::Error;

pub mod baseline;
pub mod random;
pub mod simple;

/// Names accepted by [`create_policy`].
pub const POLICY_NAMES: [&str; 4] = ["random", "passive", "aggressive", "baseline"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("unknown policy '{0}' (expected one of: random, passive, aggressive, baseline)")]
    Unknown(String),
    #[error("expected 1 or {expected} policy names, got {actual}")]
    SeatCount { expected: usize, actual: usize },
}

/// Builds a policy by name. `seed` only matters for randomized policies.
pub fn create_policy(name: &str, seed: u64) -> Result<Box<dyn ActionPolicy>, PolicyError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "random" => Ok(Box::new(random::RandomPolicy::new(seed))),
        "passive" => Ok(Box::new(simple::PassivePolicy)),
        "aggressive" => Ok(Box::new(simple::AggressivePolicy)),
        "baseline" => Ok(Box::new(baseline::BaselinePolicy::new())),
        _ => Err(PolicyError::Unknown(name.to_string())),
    }
}

/// Seed for the policy in `seat`, derived from the session seed so seats
/// draw from independent streams.
pub fn seat_seed(session_seed: u64, seat: usize) -> u64 {
    session_seed ^ (seat as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// One policy per seat from either a single name or a comma separated list
/// of six names in seat order, e.g. `"baseline,random,random,passive,random,random"`.
pub fn table_policies(names: &str, seed: u64) -> Result<Vec<Box<dyn ActionPolicy>>, PolicyError> {
    let names: Vec<&str> = names.split(',').map(str::trim).collect();
    let per_seat: Vec<&str> = match names.len() {
        1 => vec![names[0]; SEAT_COUNT],
        SEAT_COUNT => names,
        actual => {
            return Err(PolicyError::SeatCount {
                expected: SEAT_COUNT,
                actual,
            });
        }
    };
    per_seat
        .iter()
        .enumerate()
        .map(|(seat, name)| create_policy(name, seat_seed(seed, seat)))
        .collect()
}
