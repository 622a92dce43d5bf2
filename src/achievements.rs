//! Achievement templates and the unlock pass.
//!
//! Unlocking is a monotone re-scan: each locked achievement compares its category
//! counter with its requirement and flips once the counter reaches it. Running the pass
//! any number of times, in any order relative to other operations, converges to the
//! same set.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Mining,
    Games,
    Trading,
    Staking,
}

/// Counter values the unlock pass reads from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counters {
    pub total_mined: u64,
    pub games_won: u64,
    pub trades: u64,
    pub staked_igc: u64,
}

impl Counters {
    pub fn for_category(&self, category: AchievementCategory) -> u64 {
        match category {
            AchievementCategory::Mining => self.total_mined,
            AchievementCategory::Games => self.games_won,
            AchievementCategory::Trading => self.trades,
            AchievementCategory::Staking => self.staked_igc,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: u64,
    pub category: AchievementCategory,
    unlocked: bool,
}

impl Achievement {
    const fn template(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        icon: &'static str,
        requirement: u64,
        category: AchievementCategory,
    ) -> Self {
        Self {
            id,
            name,
            description,
            icon,
            requirement,
            category,
            unlocked: false,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn progress(&self, counters: &Counters) -> u64 {
        counters.for_category(self.category).min(self.requirement)
    }
}

pub fn starter_achievements() -> Vec<Achievement> {
    use AchievementCategory::*;
    vec![
        Achievement::template("1", "First Steps", "Mine 100 resources", "⛏", 100, Mining),
        Achievement::template("2", "Miner Pro", "Mine 1,000 resources", "💎", 1_000, Mining),
        Achievement::template("3", "Mining Legend", "Mine 10,000 resources", "🏆", 10_000, Mining),
        Achievement::template("4", "Lucky Start", "Win 5 games", "🍀", 5, Games),
        Achievement::template("5", "High Roller", "Win 50 games", "🎰", 50, Games),
        Achievement::template("6", "First Trade", "Complete 1 trade", "🔄", 1, Trading),
        Achievement::template("7", "Staker", "Stake 100 IGC", "🔒", 100, Staking),
        Achievement::template("8", "Diamond Hands", "Stake 1,000 IGC", "💪", 1_000, Staking),
    ]
}

/// Unlocks every achievement whose counter has reached its requirement and returns
/// the names of the ones unlocked by this pass.
pub fn evaluate(achievements: &mut [Achievement], counters: &Counters) -> Vec<&'static str> {
    let mut unlocked = Vec::new();
    for achievement in achievements.iter_mut().filter(|a| !a.unlocked) {
        if counters.for_category(achievement.category) >= achievement.requirement {
            achievement.unlocked = true;
            unlocked.push(achievement.name);
        }
    }
    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocks_only_reached_requirements() {
        let mut list = starter_achievements();
        let counters = Counters {
            total_mined: 1_000,
            staked_igc: 99,
            ..Counters::default()
        };
        let names = evaluate(&mut list, &counters);
        assert_eq!(names, vec!["First Steps", "Miner Pro"]);
        assert!(!list.iter().any(|a| a.category == AchievementCategory::Staking && a.is_unlocked()));
    }

    #[test]
    fn unlock_never_reverts() {
        let mut list = starter_achievements();
        let staked = Counters {
            staked_igc: 150,
            ..Counters::default()
        };
        assert_eq!(evaluate(&mut list, &staked), vec!["Staker"]);

        // Unstaking drops the counter back to zero; the badge stays.
        let unstaked = Counters::default();
        assert!(evaluate(&mut list, &unstaked).is_empty());
        let staker = list.iter().find(|a| a.name == "Staker").unwrap();
        assert!(staker.is_unlocked());
    }

    #[test]
    fn second_pass_reports_nothing_new() {
        let mut list = starter_achievements();
        let counters = Counters {
            games_won: 5,
            trades: 1,
            ..Counters::default()
        };
        assert_eq!(evaluate(&mut list, &counters).len(), 2);
        assert!(evaluate(&mut list, &counters).is_empty());
    }
}
