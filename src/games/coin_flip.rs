use std::time::Duration;

use log::info;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{RoundPhase, open_round, pay_out};
use crate::economy::Economy;
use crate::error::GameError;

/// Time between the wager and the reveal.
pub const FLIP_DELAY: Duration = Duration::from_millis(2_500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn label(self) -> &'static str {
        match self {
            CoinSide::Heads => "heads",
            CoinSide::Tails => "tails",
        }
    }

    fn toss<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if Uniform::new_inclusive(0u8, 1).sample(rng) == 0 {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipOutcome {
    pub call: CoinSide,
    pub landed: CoinSide,
    pub bet: u64,
    pub payout: u64,
}

impl FlipOutcome {
    pub fn won(&self) -> bool {
        self.payout > 0
    }
}

pub fn flip_payout(bet: u64, call: CoinSide, landed: CoinSide) -> u64 {
    if call == landed { bet * 2 } else { 0 }
}

#[derive(Debug, Default)]
pub struct CoinFlip {
    phase: RoundPhase,
    round: u64,
    wager: Option<(u64, CoinSide)>,
    last: Option<FlipOutcome>,
}

impl CoinFlip {
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn last_outcome(&self) -> Option<&FlipOutcome> {
        self.last.as_ref()
    }

    pub fn place_bet(&mut self, economy: &mut Economy, bet: u64, call: CoinSide) -> Result<u64, GameError> {
        let round = open_round(economy, self.phase, &mut self.round, bet, "Coin Flip bet")?;
        self.wager = Some((bet, call));
        self.phase = RoundPhase::Resolving;
        Ok(round)
    }

    pub fn resolve<R: Rng + ?Sized>(&mut self, economy: &mut Economy, rng: &mut R) -> Result<FlipOutcome, GameError> {
        if self.phase != RoundPhase::Resolving {
            return Err(GameError::NoActiveRound);
        }
        self.resolve_as(economy, CoinSide::toss(rng))
    }

    /// Settles the open round as if the coin landed on `landed`.
    pub fn resolve_as(&mut self, economy: &mut Economy, landed: CoinSide) -> Result<FlipOutcome, GameError> {
        let (bet, call) = match (self.phase, self.wager.take()) {
            (RoundPhase::Resolving, Some(wager)) => wager,
            _ => return Err(GameError::NoActiveRound),
        };
        let payout = flip_payout(bet, call, landed);
        pay_out(economy, payout, &format!("Won {} IGC on Coin Flip", payout));
        let outcome = FlipOutcome { call, landed, bet, payout };
        info!("coin flip round {}: {} vs {} -> {}", self.round, call.label(), landed.label(), payout);
        self.phase = RoundPhase::Settled;
        self.last = Some(outcome);
        Ok(outcome)
    }

    /// Drops the open round without paying out. Returns whether one was open.
    pub fn abandon(&mut self) -> bool {
        let open = self.phase == RoundPhase::Resolving;
        if open {
            self.wager = None;
            self.phase = RoundPhase::Idle;
        }
        open
    }
}
