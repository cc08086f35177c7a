//! # sixmax-engine: six-max no-limit hold'em hand simulator
//!
//! Plays single hands of six-handed no-limit Texas Hold'em between pluggable
//! decision policies and scores the showdown. Intended as a reproducible
//! environment for testing poker bots.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation and two character card tokens (`As`, `Td`)
//! - [`chips`] - Exact chip amounts in hundredths of a big blind
//! - [`deck`] - 52-card deck shuffled from an injected RNG
//! - [`positions`] - Seat to position mapping (BTN, CO, MP, EP, BB, SB)
//! - [`hand`] - Five card evaluation and best-of-seven selection
//! - [`rules`] - Legal actions and bet sizing bounds
//! - [`engine`] - The betting round state machine
//! - [`policy`] - The decision interface policies implement
//! - [`session`] - Back to back hands with persistent stacks
//! - [`logger`] - Streets and the per-hand history
//! - [`config`] - Session configuration
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use sixmax_engine::cards::parse_cards;
//! use sixmax_engine::hand::{best_of, Category};
//!
//! let hole: [_; 2] = parse_cards("As Ks").unwrap().try_into().unwrap();
//! let board = parse_cards("Qs Js Ts 2c 3d").unwrap();
//!
//! let rank = best_of(&hole, &board).unwrap();
//! assert_eq!(rank.category, Category::StraightFlush);
//! ```
//!
//! ## Deterministic Play
//!
//! A [`session::Session`] draws every shuffle from one `ChaCha20Rng` seeded
//! by [`config::SessionConfig::seed`], so the same seed and policies replay
//! the same hands.

pub mod cards;
pub mod chips;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod positions;
pub mod rules;
pub mod session;
