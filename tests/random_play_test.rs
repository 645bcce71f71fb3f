//! Randomized play checking the enumerator, the executor and the board
//! invariants against each other.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use ludo::ludo::{Color, Game, MoveKind, Position};
use ludo::{Driver, SimulationConfig, TurnOutcome};

/// Plays random legal moves, checking every reachable position on the way.
fn random_walk(seed: u64, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::default();

    for _ in 0..steps {
        if game.is_over() {
            game.reset();
        }
        let color = game.turn();
        let dice = rng.random_range(1..=6);
        let moves = game.legal_moves(color, dice);

        if moves.iter().any(|m| m.kind() == MoveKind::Spawn) {
            assert_eq!(moves.len(), 1, "spawn must be the only move");
        }

        for candidate in &moves {
            let mut trial = game.clone();
            let event = trial
                .apply(color, candidate.token(), dice)
                .unwrap_or_else(|e| panic!("{candidate} rejected: {e}"));
            assert_eq!(event.kind, candidate.kind());
            trial.check_invariants().unwrap();
        }

        match moves.choose(&mut rng) {
            Some(chosen) => {
                game.apply(color, chosen.token(), dice).unwrap();
                for player in game.players() {
                    for token in player.tokens() {
                        let home = matches!(token.position(), Position::Home(_));
                        assert_eq!(home, token.home_slot().is_some());
                    }
                }
                if dice != 6 {
                    game.advance_turn();
                }
            }
            None => game.advance_turn(),
        }
    }
}

#[test]
fn test_random_walks_keep_invariants() {
    for seed in 0..8 {
        random_walk(seed, 3_000);
    }
}

#[test]
fn test_extra_turn_rule() {
    let config = SimulationConfig::default();
    let mut driver = Driver::new(StdRng::seed_from_u64(21), &config);
    let mut game = Game::default();

    for _ in 0..2_000 {
        if game.is_over() {
            break;
        }
        let before = game.turn();
        let dice = driver.roll(&game);
        let outcome = driver.resolve(&mut game, dice);
        if game.is_over() {
            break;
        }
        match outcome {
            TurnOutcome::Moved(_) if dice == 6 => assert_eq!(game.turn(), before),
            _ => assert_eq!(game.turn(), before.next()),
        }
    }
}

#[test]
fn test_full_games_reach_a_winner() {
    let config = SimulationConfig::default();
    for seed in 0..5 {
        let mut game = Game::default();
        let report = Driver::new(StdRng::seed_from_u64(seed), &config).play(&mut game);
        let winner = report.winner.expect("game without a winner");
        assert!(game.player(winner).has_won());
        let stats = report.stats[winner.index()];
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.turns_until_win, stats.turns_taken);
        let others: u32 = Color::ALL
            .iter()
            .filter(|&&c| c != winner)
            .map(|c| report.stats[c.index()].games_won + report.stats[c.index()].turns_until_win)
            .sum();
        assert_eq!(others, 0);
    }
}
