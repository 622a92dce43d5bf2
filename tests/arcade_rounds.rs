/// Integration tests for arcade rounds played against a shared economy.
use std::time::{Duration, Instant};

use cryptoidle::games::blackjack::{Card, HandResult, Suit};
use cryptoidle::games::coin_flip::{CoinSide, FLIP_DELAY};
use cryptoidle::games::dice::DiceGuess;
use cryptoidle::games::spin_wheel::SPIN_DELAY;
use cryptoidle::games::{Blackjack, ClickerBlitz, CoinFlip, DiceRoll, RoundPhase, SpinWheel};
use cryptoidle::schedule::Scheduler;
use cryptoidle::{Economy, EconomyError, EconomySettings, GameError};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn economy_with(igc: u64) -> Economy {
    let mut rng = StdRng::seed_from_u64(1);
    let settings = EconomySettings {
        starting_igc: igc,
        ..EconomySettings::default()
    };
    Economy::new(settings, &mut rng)
}

/// Deck whose cards are drawn player, player, dealer, dealer, then the rest in order.
fn stacked(draw_order: &[u8]) -> Vec<Card> {
    draw_order
        .iter()
        .rev()
        .map(|rank| Card::new(*rank, Suit::Spades))
        .collect()
}

#[test]
fn coin_flip_is_fair_over_ten_thousand_rounds() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut economy = economy_with(1_000_000);
    let mut coin = CoinFlip::default();
    let mut heads = 0u32;
    for _ in 0..10_000 {
        coin.place_bet(&mut economy, 1, CoinSide::Heads).unwrap();
        let outcome = coin.resolve(&mut economy, &mut rng).unwrap();
        if outcome.landed == CoinSide::Heads {
            heads += 1;
            assert_eq!(outcome.payout, 2);
        } else {
            assert_eq!(outcome.payout, 0);
        }
    }
    let share = heads as f64 / 10_000.0;
    assert!((share - 0.5).abs() < 0.02, "heads share {}", share);
    assert_eq!(economy.igc(), 1_000_000 - 10_000 + 2 * heads as u64);
}

#[test]
fn blackjack_push_returns_the_bet() {
    let mut economy = economy_with(100);
    let mut table = Blackjack::default();
    // player 10+9, dealer 10+9
    let deck = stacked(&[10, 9, 13, 9]);
    assert!(table.deal_from(&mut economy, 20, deck).unwrap().is_none());
    let outcome = table.stand(&mut economy).unwrap();
    assert_eq!(outcome.result, HandResult::Push);
    assert_eq!(economy.igc(), 100);
}

#[test]
fn blackjack_natural_pays_one_and_a_half() {
    let mut economy = economy_with(100);
    let mut table = Blackjack::default();
    let deck = stacked(&[1, 13, 10, 7]);
    let outcome = table.deal_from(&mut economy, 20, deck).unwrap().unwrap();
    assert_eq!(outcome.result, HandResult::Blackjack);
    assert_eq!(outcome.payout, 50);
    assert_eq!(economy.igc(), 130);
    assert_eq!(table.phase(), RoundPhase::Settled);
}

#[test]
fn blackjack_bust_loses_the_bet() {
    let mut economy = economy_with(100);
    let mut table = Blackjack::default();
    let deck = stacked(&[10, 4, 10, 7, 10]);
    assert!(table.deal_from(&mut economy, 20, deck).unwrap().is_none());
    let outcome = table.hit(&mut economy).unwrap().unwrap();
    assert_eq!(outcome.result, HandResult::Bust);
    assert_eq!(outcome.player_total, 24);
    assert_eq!(economy.igc(), 80);
    assert_eq!(table.hit(&mut economy), Err(GameError::NoActiveRound));
}

#[test]
fn wager_over_balance_is_rejected_without_side_effects() {
    let mut economy = economy_with(15);
    let mut dice = DiceRoll::default();
    assert_eq!(
        dice.place_bet(&mut economy, 20, DiceGuess::High),
        Err(GameError::Economy(EconomyError::InsufficientIgc {
            needed: 20,
            available: 15
        }))
    );
    assert_eq!(dice.place_bet(&mut economy, 0, DiceGuess::High), Err(GameError::InvalidBet));
    assert_eq!(dice.phase(), RoundPhase::Idle);
    assert_eq!(economy.igc(), 15);
    assert_eq!(economy.games_played(), 0);
    assert!(economy.ledger().is_empty());
}

#[test]
fn each_game_keeps_one_open_round() {
    let mut economy = economy_with(100);
    let mut wheel = SpinWheel::default();
    wheel.spin(&mut economy).unwrap();
    assert_eq!(wheel.spin(&mut economy), Err(GameError::RoundInProgress));
    assert_eq!(economy.igc(), 95);
    wheel.resolve_at(&mut economy, 7).unwrap();
    assert_eq!(economy.igc(), 195);
    wheel.spin(&mut economy).unwrap();
    assert_eq!(economy.igc(), 190);
}

#[test]
fn scheduled_reveals_follow_round_identity() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Reveal {
        Flip(u64),
        Spin(u64),
    }

    let mut rng = StdRng::seed_from_u64(9);
    let mut economy = economy_with(100);
    let mut coin = CoinFlip::default();
    let mut wheel = SpinWheel::default();
    let mut timers = Scheduler::default();
    let t0 = Instant::now();

    let flip_round = coin.place_bet(&mut economy, 10, CoinSide::Tails).unwrap();
    timers.schedule(Reveal::Flip(flip_round), t0 + FLIP_DELAY);
    let spin_round = wheel.spin(&mut economy).unwrap();
    timers.schedule(Reveal::Spin(spin_round), t0 + SPIN_DELAY);

    // the spin is walked away from before it lands
    timers.cancel(&Reveal::Spin(spin_round));
    assert!(wheel.abandon());

    let due = timers.take_due(t0 + Duration::from_secs(10));
    assert_eq!(due, vec![Reveal::Flip(flip_round)]);
    for reveal in due {
        if let Reveal::Flip(round) = reveal {
            assert_eq!(round, coin.round());
            coin.resolve(&mut economy, &mut rng).unwrap();
        }
    }

    assert_eq!(coin.phase(), RoundPhase::Settled);
    assert_eq!(wheel.phase(), RoundPhase::Idle);
    assert!(wheel.last_outcome().is_none());
    let flip = coin.last_outcome().unwrap();
    assert_eq!(economy.igc(), 100 - 10 - 5 + flip.payout);
}

#[test]
fn clicker_round_ends_at_deadline() {
    let mut economy = economy_with(100);
    let mut blitz = ClickerBlitz::default();
    let t0 = Instant::now();
    blitz.start(&mut economy, t0).unwrap();
    for n in 0..120u64 {
        assert!(blitz.click(t0 + Duration::from_millis(n * 200)));
    }
    assert!(!blitz.click(t0 + Duration::from_secs(31)));
    let result = blitz.finish(&mut economy).unwrap();
    assert_eq!(result.clicks, 120);
    assert_eq!(result.reward, 25);
    assert!(result.new_high_score);
    assert_eq!(economy.igc(), 120);
    assert_eq!(blitz.high_score(), 120);
}
