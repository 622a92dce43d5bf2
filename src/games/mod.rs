//! Arcade mini-games.
//!
//! Every game follows the same round shape: the wager (or entry fee) is validated and
//! debited from the [`Economy`] up front, the outcome is drawn from an injected random
//! source, and any payout is credited exactly once when the round settles. A round that
//! is abandoned while resolving simply never pays out.

pub mod blackjack;
pub mod clicker;
pub mod coin_flip;
pub mod dice;
pub mod spin_wheel;

use log::debug;

use crate::economy::Economy;
use crate::error::GameError;

pub use blackjack::Blackjack;
pub use clicker::ClickerBlitz;
pub use coin_flip::CoinFlip;
pub use dice::DiceRoll;
pub use spin_wheel::SpinWheel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Waiting for a wager.
    #[default]
    Idle,
    /// Wager taken, outcome pending.
    Resolving,
    /// Outcome applied; a new wager starts the next round.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    CoinFlip,
    DiceRoll,
    SpinWheel,
    Blackjack,
    ClickerBlitz,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::CoinFlip,
        GameKind::DiceRoll,
        GameKind::SpinWheel,
        GameKind::Blackjack,
        GameKind::ClickerBlitz,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GameKind::CoinFlip => "Coin Flip",
            GameKind::DiceRoll => "Dice Roll",
            GameKind::SpinWheel => "Spin the Wheel",
            GameKind::Blackjack => "Blackjack",
            GameKind::ClickerBlitz => "Clicker Blitz",
        }
    }

    /// Whether the player chooses the stake (as opposed to a fixed entry fee).
    pub fn takes_bet(self) -> bool {
        matches!(self, GameKind::CoinFlip | GameKind::DiceRoll | GameKind::Blackjack)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Validates and debits a wager, returning the id of the round it opens.
pub(crate) fn open_round(
    economy: &mut Economy,
    phase: RoundPhase,
    round: &mut u64,
    amount: u64,
    label: &str,
) -> Result<u64, GameError> {
    if phase == RoundPhase::Resolving {
        return Err(GameError::RoundInProgress);
    }
    if amount == 0 {
        return Err(GameError::InvalidBet);
    }
    economy.remove_igc(amount, label)?;
    *round += 1;
    debug!("{}: round {} opened with {} igc", label, round, amount);
    Ok(*round)
}

/// Credits a non-zero payout.
pub(crate) fn pay_out(economy: &mut Economy, payout: u64, description: &str) {
    if payout > 0 {
        economy.add_igc(payout, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_selector_wraps() {
        assert_eq!(GameKind::ClickerBlitz.next(), GameKind::CoinFlip);
        assert_eq!(GameKind::CoinFlip.prev(), GameKind::ClickerBlitz);
        assert_eq!(GameKind::DiceRoll.next().prev(), GameKind::DiceRoll);
    }
}
