use serde::Serialize;

use crate::ledger::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionKind {
    Daily,
    Weekly,
}

/// Which activity advances a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionGoal {
    MineResources,
    PlayGames,
    WinGames,
    Exchange,
    MintCollectibles,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mission {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: MissionKind,
    pub goal: MissionGoal,
    pub target: u64,
    pub reward: u64,
    pub reward_currency: Currency,
    progress: u64,
    completed: bool,
    claimed: bool,
}

impl Mission {
    #[allow(clippy::too_many_arguments)]
    const fn template(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        kind: MissionKind,
        goal: MissionGoal,
        target: u64,
        reward: u64,
        reward_currency: Currency,
    ) -> Self {
        Self {
            id,
            title,
            description,
            kind,
            goal,
            target,
            reward,
            reward_currency,
            progress: 0,
            completed: false,
            claimed: false,
        }
    }

    pub fn progress(&self) -> u64 {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn is_claimable(&self) -> bool {
        self.completed && !self.claimed
    }

    pub fn ratio(&self) -> f64 {
        if self.target == 0 {
            return 1.0;
        }
        (self.progress as f64 / self.target as f64).clamp(0.0, 1.0)
    }

    /// Adds `amount` of progress, capped at the target.
    pub(crate) fn advance(&mut self, amount: u64) {
        self.set_progress(self.progress.saturating_add(amount));
    }

    /// Sets progress directly, capped at the target. Completion never reverts.
    pub(crate) fn set_progress(&mut self, progress: u64) {
        self.progress = progress.min(self.target);
        if progress >= self.target {
            self.completed = true;
        }
    }

    pub(crate) fn mark_claimed(&mut self) {
        self.claimed = true;
    }
}

pub fn starter_missions() -> Vec<Mission> {
    use Currency::{Igc, Resources};
    use MissionGoal::*;
    use MissionKind::*;
    vec![
        Mission::template("d1", "Daily Miner", "Mine 50 resources", Daily, MineResources, 50, 5, Igc),
        Mission::template("d2", "Lucky Spin", "Play 3 arcade games", Daily, PlayGames, 3, 10, Igc),
        Mission::template(
            "d3",
            "Exchange Master",
            "Exchange resources 2 times",
            Daily,
            Exchange,
            2,
            100,
            Resources,
        ),
        Mission::template("w1", "Weekly Grind", "Mine 500 resources", Weekly, MineResources, 500, 50, Igc),
        Mission::template("w2", "Arcade Champion", "Win 10 games", Weekly, WinGames, 10, 100, Igc),
        Mission::template("w3", "NFT Collector", "Mint 3 NFTs", Weekly, MintCollectibles, 3, 200, Igc),
    ]
}

/// Advances every mission tracking `goal`.
pub fn advance(missions: &mut [Mission], goal: MissionGoal, amount: u64) {
    for mission in missions.iter_mut().filter(|m| m.goal == goal) {
        mission.advance(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_caps_at_target() {
        let mut missions = starter_missions();
        advance(&mut missions, MissionGoal::MineResources, 80);
        let daily = missions.iter().find(|m| m.id == "d1").unwrap();
        let weekly = missions.iter().find(|m| m.id == "w1").unwrap();
        assert_eq!(daily.progress(), 50);
        assert!(daily.is_completed());
        assert_eq!(weekly.progress(), 80);
        assert!(!weekly.is_completed());
    }

    #[test]
    fn completion_is_one_way() {
        let mut mission = starter_missions().remove(1);
        mission.set_progress(3);
        assert!(mission.is_completed());
        mission.set_progress(1);
        assert_eq!(mission.progress(), 1);
        assert!(mission.is_completed());
    }

    #[test]
    fn unrelated_goals_untouched() {
        let mut missions = starter_missions();
        advance(&mut missions, MissionGoal::Exchange, 1);
        for mission in &missions {
            let expected = if mission.goal == MissionGoal::Exchange { 1 } else { 0 };
            assert_eq!(mission.progress(), expected, "{}", mission.id);
        }
    }
}
