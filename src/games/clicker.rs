use std::time::{Duration, Instant};

use log::info;

use super::{RoundPhase, open_round, pay_out};
use crate::economy::Economy;
use crate::error::GameError;

pub const ENTRY_FEE: u64 = 5;
pub const ROUND_LENGTH: Duration = Duration::from_secs(30);

/// Click thresholds, highest first, with their tier name and flat reward.
const TIERS: [(u32, ClickTier, u64); 5] = [
    (150, ClickTier::Master, 50),
    (100, ClickTier::Expert, 25),
    (75, ClickTier::Pro, 15),
    (50, ClickTier::Good, 10),
    (30, ClickTier::Ok, 5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTier {
    Master,
    Expert,
    Pro,
    Good,
    Ok,
    TryHarder,
}

impl ClickTier {
    pub fn label(self) -> &'static str {
        match self {
            ClickTier::Master => "MASTER",
            ClickTier::Expert => "EXPERT",
            ClickTier::Pro => "PRO",
            ClickTier::Good => "GOOD",
            ClickTier::Ok => "OK",
            ClickTier::TryHarder => "TRY HARDER",
        }
    }
}

pub fn clicker_reward(clicks: u32) -> (ClickTier, u64) {
    TIERS
        .iter()
        .find(|(threshold, _, _)| clicks >= *threshold)
        .map(|(_, tier, reward)| (*tier, *reward))
        .unwrap_or((ClickTier::TryHarder, 0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlitzResult {
    pub clicks: u32,
    pub tier: ClickTier,
    pub reward: u64,
    pub new_high_score: bool,
}

#[derive(Debug, Default)]
pub struct ClickerBlitz {
    phase: RoundPhase,
    round: u64,
    clicks: u32,
    started_at: Option<Instant>,
    high_score: u32,
    last: Option<BlitzResult>,
}

impl ClickerBlitz {
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn last_result(&self) -> Option<&BlitzResult> {
        self.last.as_ref()
    }

    pub fn start(&mut self, economy: &mut Economy, now: Instant) -> Result<u64, GameError> {
        let round = open_round(economy, self.phase, &mut self.round, ENTRY_FEE, "Clicker Blitz entry fee")?;
        self.clicks = 0;
        self.started_at = Some(now);
        self.phase = RoundPhase::Resolving;
        Ok(round)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.started_at.map(|start| start + ROUND_LENGTH)
    }

    pub fn time_left(&self, now: Instant) -> Duration {
        match (self.phase, self.deadline()) {
            (RoundPhase::Resolving, Some(deadline)) => deadline.saturating_duration_since(now),
            _ => Duration::ZERO,
        }
    }

    /// Counts a click if the window is still open.
    pub fn click(&mut self, now: Instant) -> bool {
        let open = self.phase == RoundPhase::Resolving && self.deadline().is_some_and(|d| now < d);
        if open {
            self.clicks += 1;
        }
        open
    }

    /// Closes the window and pays the tier reward.
    pub fn finish(&mut self, economy: &mut Economy) -> Result<BlitzResult, GameError> {
        if self.phase != RoundPhase::Resolving {
            return Err(GameError::NoActiveRound);
        }
        let clicks = self.clicks;
        let (tier, reward) = clicker_reward(clicks);
        pay_out(economy, reward, &format!("Clicker Blitz - {} clicks", clicks));
        let new_high_score = clicks > self.high_score;
        if new_high_score {
            self.high_score = clicks;
        }
        info!("clicker round {}: {} clicks, {} -> {}", self.round, clicks, tier.label(), reward);
        let result = BlitzResult {
            clicks,
            tier,
            reward,
            new_high_score,
        };
        self.started_at = None;
        self.phase = RoundPhase::Settled;
        self.last = Some(result);
        Ok(result)
    }

    pub fn abandon(&mut self) -> bool {
        let open = self.phase == RoundPhase::Resolving;
        if open {
            self.started_at = None;
            self.clicks = 0;
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

    fn economy() -> Economy {
        Economy::new(EconomySettings::default(), &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn reward_tiers() {
        assert_eq!(clicker_reward(0), (ClickTier::TryHarder, 0));
        assert_eq!(clicker_reward(29), (ClickTier::TryHarder, 0));
        assert_eq!(clicker_reward(30), (ClickTier::Ok, 5));
        assert_eq!(clicker_reward(50), (ClickTier::Good, 10));
        assert_eq!(clicker_reward(99), (ClickTier::Pro, 15));
        assert_eq!(clicker_reward(100), (ClickTier::Expert, 25));
        assert_eq!(clicker_reward(400), (ClickTier::Master, 50));
    }

    #[test]
    fn clicks_after_deadline_are_ignored() {
        let mut eco = economy();
        let mut game = ClickerBlitz::default();
        let t0 = Instant::now();
        game.start(&mut eco, t0).unwrap();
        assert_eq!(eco.igc(), 95);
        for n in 0..60u64 {
            assert!(game.click(t0 + Duration::from_millis(n * 100)));
        }
        assert!(!game.click(t0 + ROUND_LENGTH));
        assert_eq!(game.time_left(t0 + ROUND_LENGTH), Duration::ZERO);

        let result = game.finish(&mut eco).unwrap();
        assert_eq!(result.clicks, 60);
        assert_eq!(result.reward, 10);
        assert!(result.new_high_score);
        assert_eq!(eco.igc(), 105);
        assert_eq!(game.high_score(), 60);
    }

    #[test]
    fn high_score_only_rises() {
        let mut eco = economy();
        let mut game = ClickerBlitz::default();
        let t0 = Instant::now();
        game.start(&mut eco, t0).unwrap();
        for _ in 0..40 {
            game.click(t0);
        }
        game.finish(&mut eco).unwrap();

        game.start(&mut eco, t0).unwrap();
        game.click(t0);
        let result = game.finish(&mut eco).unwrap();
        assert!(!result.new_high_score);
        assert_eq!(game.high_score(), 40);
    }

    #[test]
    fn idle_game_ignores_clicks() {
        let mut game = ClickerBlitz::default();
        assert!(!game.click(Instant::now()));
        assert_eq!(game.clicks(), 0);
    }
}
