mod common;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use common::*;
use sixmax_engine::chips::Chips;
use sixmax_engine::deck::Deck;
use sixmax_engine::engine::{Blinds, Engine, MAX_DECISIONS_PER_HAND};
use sixmax_engine::logger::Street;
use sixmax_engine::player::Player;
use sixmax_engine::policy::ActionPolicy;

/// Stacks between 0 and 150 units with at least two funded seats.
fn random_table(rng: &mut ChaCha20Rng) -> Vec<Player> {
    loop {
        let stacks: Vec<u64> = (0..6)
            .map(|_| match rng.random_range(0..10) {
                0 => 0,
                1 => rng.random_range(1..100),
                _ => rng.random_range(100..15_000),
            })
            .collect();
        if stacks.iter().filter(|&&s| s > 0).count() >= 2 {
            return stacks
                .iter()
                .enumerate()
                .map(|(seat, &c)| Player::new(seat, Chips::from_cents(c)))
                .collect();
        }
    }
}

fn in_play(engine: &Engine) -> Chips {
    let stacks: Chips = engine.players().iter().map(Player::stack).sum();
    engine.pot() + stacks
}

#[test]
fn random_play_conserves_chips_at_every_step() {
    for seed in 0..300u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let players = random_table(&mut rng);
        let start_total: Chips = players.iter().map(Player::stack).sum();
        let button = rng.random_range(0..6);
        let mut engine = Engine::start(players, Deck::shuffled(&mut rng), seed, button, Blinds::default())
            .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        let mut policies = randoms(seed);

        let mut steps = 0;
        while let Some(seat) = engine.current_actor() {
            assert_eq!(in_play(&engine), start_total, "seed {seed} step {steps}");
            let legal = engine.legal_actions().unwrap();
            assert!(!legal.is_empty(), "seed {seed}: empty options for seat {seat}");
            let action = policies[seat].decide(&engine.view().unwrap(), &legal);
            engine.apply_action(seat, action).unwrap();
            steps += 1;
            assert!(steps <= MAX_DECISIONS_PER_HAND);
        }

        assert!(engine.is_complete(), "seed {seed}");
        assert_eq!(engine.street(), Street::Complete);
        assert_eq!(engine.pot(), Chips::ZERO);
        assert_eq!(in_play(&engine), start_total, "seed {seed}");
        let outcome = engine.outcome().unwrap();
        let paid: Chips = outcome.payouts.iter().map(|p| p.1).sum();
        assert_eq!(paid, outcome.pot);
        if outcome.reached_showdown() {
            assert_eq!(outcome.board.len(), 5);
        }
        assert!(engine.players().iter().all(|p| p.bet().is_zero()));
    }
}

#[test]
fn random_sessions_of_hands_keep_the_table_total() {
    for seed in 0..20u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(1_000 + seed);
        let mut players = full_table();
        let mut policies = randoms(seed);
        let mut button = 0;
        for hand_no in 1..=30 {
            if players.iter().filter(|p| !p.stack().is_zero()).count() < 2 {
                break;
            }
            while players[button].stack().is_zero() {
                button = (button + 1) % 6;
            }
            let mut engine =
                Engine::start(players, Deck::shuffled(&mut rng), hand_no, button, Blinds::default()).unwrap();
            engine.run(&mut policies).unwrap();
            players = engine.into_players();
            let total: Chips = players.iter().map(Player::stack).sum();
            assert_eq!(total, units(600), "seed {seed} hand {hand_no}");
            button = (button + 1) % 6;
        }
    }
}

#[test]
fn everyone_all_in_preflop_needs_no_further_decisions() {
    use sixmax_engine::rules::{Action, ActionKind};

    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let mut engine = Engine::start(full_table(), Deck::shuffled(&mut rng), 1, 0, Blinds::default()).unwrap();
    engine.apply_action(3, Action::Bet(units(100))).unwrap();
    // facing an all-in for a whole stack only call or fold is left
    for seat in [4, 5, 0, 1] {
        let legal = engine.legal_actions().unwrap();
        assert!(!legal.contains(ActionKind::Bet));
        engine.apply_action(seat, Action::Call).unwrap();
    }
    assert_eq!(engine.current_actor(), Some(2));
    engine.apply_action(2, Action::Call).unwrap();
    assert!(engine.is_complete());
    let outcome = engine.outcome().unwrap();
    assert_eq!(outcome.board.len(), 5);
    assert_eq!(outcome.pot, units(600));
}
