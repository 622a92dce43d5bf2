use std::time::Duration;

use log::info;
use rand::Rng;

use super::{RoundPhase, open_round, pay_out};
use crate::economy::Economy;
use crate::error::GameError;

pub const SPIN_FEE: u64 = 5;
pub const SPIN_DELAY: Duration = Duration::from_secs(4);
/// Prize per segment, in wheel order.
pub const WHEEL_SEGMENTS: [u64; 8] = [5, 10, 0, 20, 2, 50, 0, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinOutcome {
    pub segment: usize,
    pub prize: u64,
}

#[derive(Debug, Default)]
pub struct SpinWheel {
    phase: RoundPhase,
    round: u64,
    last: Option<SpinOutcome>,
}

impl SpinWheel {
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn last_outcome(&self) -> Option<&SpinOutcome> {
        self.last.as_ref()
    }

    /// Pays the entry fee and sets the wheel turning.
    pub fn spin(&mut self, economy: &mut Economy) -> Result<u64, GameError> {
        let round = open_round(economy, self.phase, &mut self.round, SPIN_FEE, "Spin the Wheel entry fee")?;
        self.phase = RoundPhase::Resolving;
        Ok(round)
    }

    pub fn resolve<R: Rng + ?Sized>(&mut self, economy: &mut Economy, rng: &mut R) -> Result<SpinOutcome, GameError> {
        if self.phase != RoundPhase::Resolving {
            return Err(GameError::NoActiveRound);
        }
        let segment = rng.gen_range(0..WHEEL_SEGMENTS.len());
        self.resolve_at(economy, segment)
    }

    /// Settles the open spin on `segment` (taken modulo the wheel size).
    pub fn resolve_at(&mut self, economy: &mut Economy, segment: usize) -> Result<SpinOutcome, GameError> {
        if self.phase != RoundPhase::Resolving {
            return Err(GameError::NoActiveRound);
        }
        let segment = segment % WHEEL_SEGMENTS.len();
        let prize = WHEEL_SEGMENTS[segment];
        pay_out(economy, prize, &format!("Won {} IGC on Spin the Wheel", prize));
        info!("wheel round {}: segment {} -> {}", self.round, segment, prize);
        let outcome = SpinOutcome { segment, prize };
        self.phase = RoundPhase::Settled;
        self.last = Some(outcome);
        Ok(outcome)
    }

    pub fn abandon(&mut self) -> bool {
        let open = self.phase == RoundPhase::Resolving;
        if open {
            self.phase = RoundPhase::Idle;
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::EconomySettings;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn economy(igc: u64) -> Economy {
        let settings = EconomySettings {
            starting_igc: igc,
            ..EconomySettings::default()
        };
        Economy::new(settings, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn jackpot_segment_pays_hundred() {
        let mut eco = economy(100);
        let mut wheel = SpinWheel::default();
        wheel.spin(&mut eco).unwrap();
        assert_eq!(eco.igc(), 95);
        let outcome = wheel.resolve_at(&mut eco, 7).unwrap();
        assert_eq!(outcome.prize, 100);
        assert_eq!(eco.igc(), 195);
    }

    #[test]
    fn blank_segment_pays_nothing() {
        let mut eco = economy(100);
        let mut wheel = SpinWheel::default();
        wheel.spin(&mut eco).unwrap();
        wheel.resolve_at(&mut eco, 2).unwrap();
        assert_eq!(eco.igc(), 95);
        assert_eq!(eco.games_won(), 0);
    }

    #[test]
    fn fee_must_be_affordable() {
        let mut eco = economy(4);
        let mut wheel = SpinWheel::default();
        assert!(wheel.spin(&mut eco).is_err());
        assert_eq!(wheel.phase(), RoundPhase::Idle);
        assert_eq!(eco.igc(), 4);
    }

    #[test]
    fn seeded_spins_land_on_table_values() {
        let mut eco = economy(10_000);
        let mut rng = StdRng::seed_from_u64(3);
        let mut wheel = SpinWheel::default();
        for _ in 0..100 {
            wheel.spin(&mut eco).unwrap();
            let outcome = wheel.resolve(&mut eco, &mut rng).unwrap();
            assert_eq!(WHEEL_SEGMENTS[outcome.segment], outcome.prize);
        }
    }
}
