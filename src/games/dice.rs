use std::time::Duration;

use log::info;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{RoundPhase, open_round, pay_out};
use crate::economy::Economy;
use crate::error::GameError;

pub const ROLL_DELAY: Duration = Duration::from_millis(1_500);
/// Lowest total that counts as high.
pub const HIGH_THRESHOLD: u8 = 7;
pub const FACES: std::ops::RangeInclusive<u8> = 1..=6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceGuess {
    /// Totals 2 through 6.
    Low,
    /// Totals 7 through 12.
    High,
}

impl DiceGuess {
    pub fn label(self) -> &'static str {
        match self {
            DiceGuess::Low => "low (2-6)",
            DiceGuess::High => "high (7-12)",
        }
    }

    pub fn matches(self, total: u8) -> bool {
        match self {
            DiceGuess::High => total >= HIGH_THRESHOLD,
            DiceGuess::Low => total < HIGH_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    pub guess: DiceGuess,
    pub dice: (u8, u8),
    pub bet: u64,
    pub payout: u64,
}

impl RollOutcome {
    pub fn total(&self) -> u8 {
        self.dice.0.saturating_add(self.dice.1)
    }
}

pub fn dice_payout(bet: u64, guess: DiceGuess, total: u8) -> u64 {
    if guess.matches(total) { bet * 2 } else { 0 }
}

#[derive(Debug, Default)]
pub struct DiceRoll {
    phase: RoundPhase,
    round: u64,
    wager: Option<(u64, DiceGuess)>,
    last: Option<RollOutcome>,
}

impl DiceRoll {
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn last_outcome(&self) -> Option<&RollOutcome> {
        self.last.as_ref()
    }

    pub fn place_bet(&mut self, economy: &mut Economy, bet: u64, guess: DiceGuess) -> Result<u64, GameError> {
        let round = open_round(economy, self.phase, &mut self.round, bet, "Dice Roll bet")?;
        self.wager = Some((bet, guess));
        self.phase = RoundPhase::Resolving;
        Ok(round)
    }

    pub fn resolve<R: Rng + ?Sized>(&mut self, economy: &mut Economy, rng: &mut R) -> Result<RollOutcome, GameError> {
        if self.phase != RoundPhase::Resolving {
            return Err(GameError::NoActiveRound);
        }
        let die = Uniform::new_inclusive(*FACES.start(), *FACES.end());
        let dice = (die.sample(rng), die.sample(rng));
        self.resolve_as(economy, dice)
    }

    /// Settles the open round with the given faces. Faces outside 1..=6 are rejected
    /// and the round stays open.
    pub fn resolve_as(&mut self, economy: &mut Economy, dice: (u8, u8)) -> Result<RollOutcome, GameError> {
        if self.phase != RoundPhase::Resolving {
            return Err(GameError::NoActiveRound);
        }
        for face in [dice.0, dice.1] {
            if !FACES.contains(&face) {
                return Err(GameError::InvalidDie(face));
            }
        }
        let (bet, guess) = match (self.phase, self.wager.take()) {
            (RoundPhase::Resolving, Some(wager)) => wager,
            _ => return Err(GameError::NoActiveRound),
        };
        let outcome = RollOutcome {
            guess,
            dice,
            bet,
            payout: 0,
        };
        let payout = dice_payout(bet, guess, outcome.total());
        pay_out(economy, payout, &format!("Won {} IGC on Dice Roll", payout));
        info!("dice round {}: rolled {} on {} -> {}", self.round, outcome.total(), guess.label(), payout);
        let outcome = RollOutcome { payout, ..outcome };
        self.phase = RoundPhase::Settled;
        self.last = Some(outcome);
        Ok(outcome)
    }

    pub fn abandon(&mut self) -> bool {
        let open = self.phase == RoundPhase::Resolving;
        if open {
            self.wager = None;
            self.phase = RoundPhase::Idle;
        }
        open
    }
}
