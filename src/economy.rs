//! The economy state container.
//!
//! `Economy` owns every balance, counter, mission, achievement, collectible and the
//! transaction ledger for one session. It is constructed once and handed out by `&mut`
//! to whatever drives it; each operation runs to completion under that borrow, so a
//! balance check and the debit that follows it can never interleave with another
//! mutation.
//!
//! Rejected operations return an [`EconomyError`] and leave the state exactly as it was.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::achievements::{self, Achievement, Counters};
use crate::error::EconomyError;
use crate::ids::checked_id;
use crate::ledger::{Currency, Ledger, TxKind};
use crate::logutil::escape_log;
use crate::missions::{self, Mission, MissionGoal};
use crate::nft::{self, Collectible};

pub const STARTING_IGC: u64 = 100;
pub const MINE_YIELD: u64 = 10;
pub const EXCHANGE_COST: u64 = 100;
pub const EXCHANGE_YIELD: u64 = 1;
pub const MINT_COST: u64 = 50;
pub const DAILY_REWARDS: [u64; 7] = [10, 20, 30, 40, 50, 75, 200];
pub const DAILY_FALLBACK_REWARD: u64 = 10;
pub const DAILY_COOLDOWN_HOURS: i64 = 24;
pub const STAKE_PER_BOOST: u64 = 100;

/// Session-start parameters.
#[derive(Debug, Clone, Copy)]
pub struct EconomySettings {
    pub starting_igc: u64,
    pub starting_resources: u64,
    pub marketplace_size: usize,
}

impl Default for EconomySettings {
    fn default() -> Self {
        Self {
            starting_igc: STARTING_IGC,
            starting_resources: 0,
            marketplace_size: nft::MARKETPLACE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankBadge {
    pub name: &'static str,
    pub min_igc: u64,
    pub icon: &'static str,
}

pub const RANKS: [RankBadge; 6] = [
    RankBadge { name: "Bronze", min_igc: 0, icon: "🥉" },
    RankBadge { name: "Silver", min_igc: 100, icon: "🥈" },
    RankBadge { name: "Gold", min_igc: 500, icon: "🥇" },
    RankBadge { name: "Platinum", min_igc: 1_000, icon: "💎" },
    RankBadge { name: "Diamond", min_igc: 5_000, icon: "💠" },
    RankBadge { name: "Master", min_igc: 10_000, icon: "👑" },
];

/// Reward for claiming `day` (1-indexed); anything outside the table pays the fallback.
pub fn daily_reward_for(day: u32) -> u64 {
    (day as usize)
        .checked_sub(1)
        .and_then(|idx| DAILY_REWARDS.get(idx))
        .copied()
        .unwrap_or(DAILY_FALLBACK_REWARD)
}

pub fn mining_boost_for(staked_igc: u64) -> u64 {
    if staked_igc > 0 {
        staked_igc / STAKE_PER_BOOST + 1
    } else {
        1
    }
}

pub fn rank_for(igc: u64) -> RankBadge {
    RANKS
        .iter()
        .rev()
        .find(|rank| igc >= rank.min_igc)
        .copied()
        .unwrap_or(RANKS[0])
}

pub fn next_rank_for(igc: u64) -> Option<RankBadge> {
    RANKS.iter().find(|rank| rank.min_igc > igc).copied()
}

/// Serializable view of every counter, for panes and reports.
#[derive(Debug, Clone, Serialize)]
pub struct EconomySnapshot {
    pub resources: u64,
    pub igc: u64,
    pub staked_igc: u64,
    pub mining_boost: u64,
    pub total_mined: u64,
    pub games_played: u64,
    pub games_won: u64,
    pub win_rate: u64,
    pub trades: u64,
    pub daily_streak: u8,
    pub last_daily_claim: Option<DateTime<Utc>>,
    pub achievements_unlocked: usize,
    pub collectibles_owned: usize,
    pub rank: &'static str,
}

#[derive(Debug)]
pub struct Economy {
    resources: u64,
    igc: u64,
    staked_igc: u64,
    total_mined: u64,
    games_played: u64,
    games_won: u64,
    trades: u64,
    daily_streak: u8,
    last_daily_claim: Option<DateTime<Utc>>,
    achievements: Vec<Achievement>,
    missions: Vec<Mission>,
    ledger: Ledger,
    collection: Vec<Collectible>,
    catalog: Vec<Collectible>,
    collectible_seq: u64,
}

impl Economy {
    pub fn new<R: Rng + ?Sized>(settings: EconomySettings, rng: &mut R) -> Self {
        Self {
            resources: settings.starting_resources,
            igc: settings.starting_igc,
            staked_igc: 0,
            total_mined: 0,
            games_played: 0,
            games_won: 0,
            trades: 0,
            daily_streak: 0,
            last_daily_claim: None,
            achievements: achievements::starter_achievements(),
            missions: missions::starter_missions(),
            ledger: Ledger::default(),
            collection: Vec::new(),
            catalog: nft::seed_catalog(rng, settings.marketplace_size),
            collectible_seq: 0,
        }
    }

    pub fn resources(&self) -> u64 {
        self.resources
    }

    pub fn igc(&self) -> u64 {
        self.igc
    }

    pub fn staked_igc(&self) -> u64 {
        self.staked_igc
    }

    pub fn mining_boost(&self) -> u64 {
        mining_boost_for(self.staked_igc)
    }

    pub fn total_mined(&self) -> u64 {
        self.total_mined
    }

    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    pub fn games_won(&self) -> u64 {
        self.games_won
    }

    pub fn trades(&self) -> u64 {
        self.trades
    }

    pub fn daily_streak(&self) -> u8 {
        self.daily_streak
    }

    pub fn last_daily_claim(&self) -> Option<DateTime<Utc>> {
        self.last_daily_claim
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn mission(&self, id: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Player-owned collectibles.
    pub fn collection(&self) -> &[Collectible] {
        &self.collection
    }

    /// Marketplace catalog seeded at session start.
    pub fn catalog(&self) -> &[Collectible] {
        &self.catalog
    }

    pub fn counters(&self) -> Counters {
        Counters {
            total_mined: self.total_mined,
            games_won: self.games_won,
            trades: self.trades,
            staked_igc: self.staked_igc,
        }
    }

    /// Percentage of played games that were won, rounded.
    pub fn win_rate(&self) -> u64 {
        if self.games_played == 0 {
            return 0;
        }
        ((self.games_won as f64 / self.games_played as f64) * 100.0).round() as u64
    }

    pub fn rank(&self) -> RankBadge {
        rank_for(self.igc)
    }

    pub fn can_claim_daily(&self) -> bool {
        self.can_claim_daily_at(Utc::now())
    }

    pub fn can_claim_daily_at(&self, now: DateTime<Utc>) -> bool {
        match self.last_daily_claim {
            None => true,
            Some(last) => now.signed_duration_since(last) >= ChronoDuration::hours(DAILY_COOLDOWN_HOURS),
        }
    }

    /// Day the calendar offers next; a finished week starts over at day 1.
    pub fn next_daily_day(&self) -> u32 {
        if self.daily_streak >= DAILY_REWARDS.len() as u8 {
            1
        } else {
            self.daily_streak as u32 + 1
        }
    }

    pub fn mine(&mut self) -> u64 {
        let boost = self.mining_boost();
        let gained = MINE_YIELD * boost;
        self.resources += gained;
        self.total_mined += gained;
        self.ledger.record(
            TxKind::Mine,
            gained,
            Currency::Resources,
            format!("Mined {} resources ({}x boost)", gained, boost),
        );
        missions::advance(&mut self.missions, MissionGoal::MineResources, gained);
        debug!("mine: +{} resources (boost {})", gained, boost);
        self.check_achievements();
        gained
    }

    pub fn exchange_resources(&mut self) -> Result<(), EconomyError> {
        if self.resources < EXCHANGE_COST {
            return Err(EconomyError::InsufficientResources {
                needed: EXCHANGE_COST,
                available: self.resources,
            });
        }
        self.resources -= EXCHANGE_COST;
        self.igc += EXCHANGE_YIELD;
        self.trades += 1;
        self.ledger.record(
            TxKind::Exchange,
            EXCHANGE_YIELD,
            Currency::Igc,
            format!("Exchanged {} resources for {} IGC", EXCHANGE_COST, EXCHANGE_YIELD),
        );
        missions::advance(&mut self.missions, MissionGoal::Exchange, 1);
        debug!("exchange: -{} resources +{} igc", EXCHANGE_COST, EXCHANGE_YIELD);
        self.check_achievements();
        Ok(())
    }

    pub fn stake_igc(&mut self, amount: u64) -> Result<(), EconomyError> {
        if amount == 0 {
            return Err(EconomyError::InvalidAmount);
        }
        self.ensure_igc(amount)?;
        self.igc -= amount;
        self.staked_igc += amount;
        self.ledger
            .record(TxKind::Stake, amount, Currency::Igc, format!("Staked {} IGC", amount));
        debug!("stake: {} igc, boost now {}x", amount, self.mining_boost());
        self.check_achievements();
        Ok(())
    }

    /// Returns every staked IGC to the spendable balance at once.
    pub fn unstake_igc(&mut self) -> Result<u64, EconomyError> {
        if self.staked_igc == 0 {
            return Err(EconomyError::NothingStaked);
        }
        let amount = std::mem::take(&mut self.staked_igc);
        self.igc += amount;
        self.ledger
            .record(TxKind::Unstake, amount, Currency::Igc, format!("Unstaked {} IGC", amount));
        debug!("unstake: {} igc", amount);
        self.check_achievements();
        Ok(amount)
    }

    pub fn claim_daily_reward(&mut self, day: u32) -> Result<u64, EconomyError> {
        self.claim_daily_reward_at(day, Utc::now())
    }

    /// `day` is taken as given; the caller picks it, normally from [`Self::next_daily_day`].
    pub fn claim_daily_reward_at(&mut self, day: u32, now: DateTime<Utc>) -> Result<u64, EconomyError> {
        if !self.can_claim_daily_at(now) {
            return Err(EconomyError::DailyNotReady);
        }
        let reward = daily_reward_for(day);
        self.igc += reward;
        self.daily_streak = day.min(DAILY_REWARDS.len() as u32) as u8;
        self.last_daily_claim = Some(now);
        self.ledger
            .record(TxKind::Claim, reward, Currency::Igc, format!("Day {} daily reward", day));
        info!("daily reward: day {} paid {} igc", day, reward);
        self.check_achievements();
        Ok(reward)
    }

    /// Credits arcade winnings. Counts as a played and won game.
    pub fn add_igc(&mut self, amount: u64, description: &str) {
        self.igc += amount;
        self.games_played += 1;
        self.games_won += 1;
        self.ledger
            .record(TxKind::Win, amount, Currency::Igc, description);
        missions::advance(&mut self.missions, MissionGoal::PlayGames, 1);
        missions::advance(&mut self.missions, MissionGoal::WinGames, 1);
        debug!("add_igc: +{} ({})", amount, escape_log(description));
        self.check_achievements();
    }

    /// Debits an arcade wager or fee. Counts as a played game.
    pub fn remove_igc(&mut self, amount: u64, description: &str) -> Result<(), EconomyError> {
        self.ensure_igc(amount)?;
        self.igc -= amount;
        self.games_played += 1;
        self.ledger
            .record(TxKind::Loss, amount, Currency::Igc, description);
        missions::advance(&mut self.missions, MissionGoal::PlayGames, 1);
        debug!("remove_igc: -{} ({})", amount, escape_log(description));
        self.check_achievements();
        Ok(())
    }

    pub fn mint_nft<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Collectible, EconomyError> {
        self.ensure_igc(MINT_COST)?;
        self.igc -= MINT_COST;
        self.collectible_seq += 1;
        let minted = nft::mint(rng, self.collectible_seq);
        self.ledger.record(
            TxKind::Mint,
            MINT_COST,
            Currency::Igc,
            format!("Minted {}", minted.name),
        );
        missions::advance(&mut self.missions, MissionGoal::MintCollectibles, 1);
        info!("minted {} ({})", minted.name, minted.rarity.label());
        self.collection.push(minted.clone());
        self.check_achievements();
        Ok(minted)
    }

    pub fn list_nft_for_sale(&mut self, id: &str, price: u64) -> Result<(), EconomyError> {
        let item = self
            .collection
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| EconomyError::UnknownCollectible(id.to_string()))?;
        item.for_sale = true;
        item.price = Some(price);
        let description = format!("Listed {} for {} IGC", item.name, price);
        self.ledger.record(TxKind::List, price, Currency::Igc, description);
        debug!("listed {} at {}", id, price);
        Ok(())
    }

    /// Buys a copy of a catalog item. The catalog entry stays available.
    pub fn buy_nft(&mut self, id: &str) -> Result<Collectible, EconomyError> {
        let listing = self
            .catalog
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| EconomyError::UnknownCollectible(id.to_string()))?;
        let price = match listing.price {
            Some(price) if listing.for_sale => price,
            _ => return Err(EconomyError::NotForSale(id.to_string())),
        };
        self.ensure_igc(price)?;
        self.collectible_seq += 1;
        let bought = listing.acquired_copy(checked_id("NFT", self.collectible_seq));
        self.igc -= price;
        self.trades += 1;
        self.ledger
            .record(TxKind::Buy, price, Currency::Igc, format!("Bought {}", bought.name));
        info!("bought {} for {} igc", bought.name, price);
        self.collection.push(bought.clone());
        self.check_achievements();
        Ok(bought)
    }

    pub fn update_mission_progress(&mut self, id: &str, progress: u64) -> Result<(), EconomyError> {
        let mission = self.mission_mut(id)?;
        mission.set_progress(progress);
        Ok(())
    }

    pub fn claim_mission_reward(&mut self, id: &str) -> Result<u64, EconomyError> {
        let mission = self.mission_mut(id)?;
        if mission.is_claimed() {
            return Err(EconomyError::AlreadyClaimed(id.to_string()));
        }
        if !mission.is_completed() {
            return Err(EconomyError::MissionIncomplete(id.to_string()));
        }
        mission.mark_claimed();
        let (reward, currency, title) = (mission.reward, mission.reward_currency, mission.title);
        match currency {
            Currency::Igc => self.igc += reward,
            Currency::Resources => self.resources += reward,
        }
        self.ledger
            .record(TxKind::Claim, reward, currency, format!("Claimed {} reward", title));
        info!("mission {} claimed: {} {}", id, reward, currency.symbol());
        self.check_achievements();
        Ok(reward)
    }

    /// Re-scans locked achievements against the current counters.
    pub fn check_achievements(&mut self) -> Vec<&'static str> {
        let counters = self.counters();
        let unlocked = achievements::evaluate(&mut self.achievements, &counters);
        for name in &unlocked {
            info!("achievement unlocked: {}", name);
        }
        unlocked
    }

    pub fn snapshot(&self) -> EconomySnapshot {
        EconomySnapshot {
            resources: self.resources,
            igc: self.igc,
            staked_igc: self.staked_igc,
            mining_boost: self.mining_boost(),
            total_mined: self.total_mined,
            games_played: self.games_played,
            games_won: self.games_won,
            win_rate: self.win_rate(),
            trades: self.trades,
            daily_streak: self.daily_streak,
            last_daily_claim: self.last_daily_claim,
            achievements_unlocked: self.achievements.iter().filter(|a| a.is_unlocked()).count(),
            collectibles_owned: self.collection.len(),
            rank: self.rank().name,
        }
    }

    fn ensure_igc(&self, needed: u64) -> Result<(), EconomyError> {
        if self.igc < needed {
            return Err(EconomyError::InsufficientIgc {
                needed,
                available: self.igc,
            });
        }
        Ok(())
    }

    fn mission_mut(&mut self, id: &str) -> Result<&mut Mission, EconomyError> {
        self.missions
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| EconomyError::UnknownMission(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn economy() -> Economy {
        let mut rng = StdRng::seed_from_u64(11);
        Economy::new(EconomySettings::default(), &mut rng)
    }

    fn economy_with(igc: u64, resources: u64) -> Economy {
        let mut rng = StdRng::seed_from_u64(11);
        let settings = EconomySettings {
            starting_igc: igc,
            starting_resources: resources,
            ..EconomySettings::default()
        };
        Economy::new(settings, &mut rng)
    }

    #[test]
    fn session_starts_with_defaults() {
        let eco = economy();
        assert_eq!(eco.igc(), 100);
        assert_eq!(eco.resources(), 0);
        assert_eq!(eco.mining_boost(), 1);
        assert_eq!(eco.catalog().len(), 8);
        assert!(eco.collection().is_empty());
        assert!(eco.ledger().is_empty());
    }

    #[test]
    fn boost_formula() {
        assert_eq!(mining_boost_for(0), 1);
        assert_eq!(mining_boost_for(1), 1);
        assert_eq!(mining_boost_for(99), 1);
        assert_eq!(mining_boost_for(100), 2);
        assert_eq!(mining_boost_for(250), 3);
    }

    #[test]
    fn mining_scales_with_boost() {
        let mut eco = economy_with(300, 0);
        assert_eq!(eco.mine(), 10);
        eco.stake_igc(250).unwrap();
        assert_eq!(eco.mining_boost(), 3);
        assert_eq!(eco.mine(), 30);
        assert_eq!(eco.resources(), 40);
        assert_eq!(eco.total_mined(), 40);
        assert_eq!(eco.mission("d1").unwrap().progress(), 40);
    }

    #[test]
    fn exchange_is_all_or_nothing() {
        let mut eco = economy_with(0, 150);
        eco.exchange_resources().unwrap();
        assert_eq!((eco.resources(), eco.igc()), (50, 1));
        let err = eco.exchange_resources().unwrap_err();
        assert_eq!(
            err,
            EconomyError::InsufficientResources {
                needed: 100,
                available: 50
            }
        );
        assert_eq!((eco.resources(), eco.igc()), (50, 1));
        assert_eq!(eco.mission("d3").unwrap().progress(), 1);
    }

    #[test]
    fn stake_rejects_zero_and_overdraw() {
        let mut eco = economy();
        assert_eq!(eco.stake_igc(0), Err(EconomyError::InvalidAmount));
        assert!(matches!(
            eco.stake_igc(101),
            Err(EconomyError::InsufficientIgc { needed: 101, available: 100 })
        ));
        assert_eq!(eco.staked_igc(), 0);
        assert_eq!(eco.ledger().len(), 0);
    }

    #[test]
    fn unstake_returns_everything() {
        let mut eco = economy();
        assert_eq!(eco.unstake_igc(), Err(EconomyError::NothingStaked));
        eco.stake_igc(40).unwrap();
        eco.stake_igc(60).unwrap();
        assert_eq!(eco.mining_boost(), 2);
        assert_eq!(eco.unstake_igc(), Ok(100));
        assert_eq!(eco.igc(), 100);
        assert_eq!(eco.staked_igc(), 0);
        assert_eq!(eco.mining_boost(), 1);
    }

    #[test]
    fn daily_reward_table_and_cooldown() {
        let mut eco = economy();
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        assert!(eco.can_claim_daily_at(t0));
        assert_eq!(eco.claim_daily_reward_at(1, t0), Ok(10));
        assert_eq!(eco.daily_streak(), 1);

        let later = t0 + ChronoDuration::hours(23);
        assert!(!eco.can_claim_daily_at(later));
        assert_eq!(eco.claim_daily_reward_at(2, later), Err(EconomyError::DailyNotReady));
        assert_eq!(eco.igc(), 110);

        let next_day = t0 + ChronoDuration::hours(24);
        assert_eq!(eco.claim_daily_reward_at(eco.next_daily_day(), next_day), Ok(20));
        assert_eq!(eco.daily_streak(), 2);
    }

    #[test]
    fn daily_reward_out_of_range_pays_fallback() {
        assert_eq!(daily_reward_for(0), 10);
        assert_eq!(daily_reward_for(7), 200);
        assert_eq!(daily_reward_for(8), 10);
    }

    #[test]
    fn daily_day_is_not_validated_against_streak() {
        let mut eco = economy();
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(eco.claim_daily_reward_at(7, t0), Ok(200));
        assert_eq!(eco.daily_streak(), 7);
        assert_eq!(eco.next_daily_day(), 1);
    }

    #[test]
    fn remove_igc_guards_balance() {
        let mut eco = economy();
        assert!(eco.remove_igc(101, "bet").is_err());
        assert_eq!(eco.games_played(), 0);
        eco.remove_igc(100, "bet").unwrap();
        assert_eq!(eco.igc(), 0);
        assert_eq!(eco.games_played(), 1);
        assert_eq!(eco.mission("d2").unwrap().progress(), 1);
    }

    #[test]
    fn add_igc_counts_win() {
        let mut eco = economy();
        eco.add_igc(20, "Won 20 IGC on Coin Flip");
        assert_eq!(eco.igc(), 120);
        assert_eq!((eco.games_played(), eco.games_won()), (1, 1));
        assert_eq!(eco.mission("w2").unwrap().progress(), 1);
        assert_eq!(eco.ledger().latest().unwrap().kind, TxKind::Win);
    }

    #[test]
    fn mint_requires_fifty() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut eco = economy_with(60, 0);
        let minted = eco.mint_nft(&mut rng).unwrap();
        assert_eq!(eco.igc(), 10);
        assert_eq!(eco.collection(), &[minted]);
        assert_eq!(eco.mission("w3").unwrap().progress(), 1);
        assert!(eco.mint_nft(&mut rng).is_err());
        assert_eq!(eco.collection().len(), 1);
    }

    #[test]
    fn listing_marks_owned_item() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut eco = economy();
        let minted = eco.mint_nft(&mut rng).unwrap();
        eco.list_nft_for_sale(&minted.id, 75).unwrap();
        let listed = &eco.collection()[0];
        assert!(listed.for_sale);
        assert_eq!(listed.price, Some(75));
        let entry = eco.ledger().latest().unwrap();
        assert_eq!(entry.kind, TxKind::List);
        assert_eq!(entry.amount, 75);
        assert_eq!(eco.igc(), 50);
        assert_eq!(
            eco.list_nft_for_sale("global-0", 10),
            Err(EconomyError::UnknownCollectible("global-0".to_string()))
        );
    }

    #[test]
    fn buying_copies_without_depleting_catalog() {
        let mut eco = economy_with(1_000, 0);
        let listing = eco.catalog()[0].clone();
        let price = listing.price.unwrap();
        let bought = eco.buy_nft(&listing.id).unwrap();
        assert_eq!(eco.igc(), 1_000 - price);
        assert_eq!(bought.name, listing.name);
        assert!(!bought.for_sale);
        assert_eq!(bought.price, None);
        assert_eq!(bought.owner, nft::PLAYER_OWNER);
        assert_ne!(bought.id, listing.id);
        assert_eq!(eco.catalog()[0], listing);

        eco.buy_nft(&listing.id).unwrap();
        assert_eq!(eco.collection().len(), 2);
        assert_eq!(eco.trades(), 2);
    }

    #[test]
    fn buying_unaffordable_item_fails_cleanly() {
        let mut eco = economy_with(5, 0);
        let id = eco.catalog()[0].id.clone();
        assert!(matches!(eco.buy_nft(&id), Err(EconomyError::InsufficientIgc { .. })));
        assert_eq!(eco.igc(), 5);
        assert!(eco.collection().is_empty());
        assert!(matches!(eco.buy_nft("nope"), Err(EconomyError::UnknownCollectible(_))));
    }

    #[test]
    fn mission_claim_pays_once() {
        let mut eco = economy();
        assert_eq!(
            eco.claim_mission_reward("w3"),
            Err(EconomyError::MissionIncomplete("w3".to_string()))
        );
        eco.update_mission_progress("w3", 10).unwrap();
        assert_eq!(eco.mission("w3").unwrap().progress(), 3);
        assert_eq!(eco.claim_mission_reward("w3"), Ok(200));
        assert_eq!(
            eco.claim_mission_reward("w3"),
            Err(EconomyError::AlreadyClaimed("w3".to_string()))
        );
        assert_eq!(eco.igc(), 300);
    }

    #[test]
    fn resource_mission_credits_resources() {
        let mut eco = economy();
        eco.update_mission_progress("d3", 2).unwrap();
        eco.claim_mission_reward("d3").unwrap();
        assert_eq!(eco.resources(), 100);
        assert_eq!(eco.ledger().latest().unwrap().currency, Currency::Resources);
    }

    #[test]
    fn unknown_mission_is_rejected() {
        let mut eco = economy();
        assert!(matches!(
            eco.update_mission_progress("x9", 1),
            Err(EconomyError::UnknownMission(_))
        ));
    }

    #[test]
    fn first_trade_unlocks_on_exchange() {
        let mut eco = economy_with(0, 100);
        eco.exchange_resources().unwrap();
        let first_trade = eco.achievements().iter().find(|a| a.name == "First Trade").unwrap();
        assert!(first_trade.is_unlocked());
    }

    #[test]
    fn ranks_follow_balance() {
        assert_eq!(rank_for(0).name, "Bronze");
        assert_eq!(rank_for(100).name, "Silver");
        assert_eq!(rank_for(9_999).name, "Diamond");
        assert_eq!(rank_for(50_000).name, "Master");
        assert_eq!(next_rank_for(100).map(|r| r.name), Some("Gold"));
        assert_eq!(next_rank_for(10_000), None);
    }

    #[test]
    fn win_rate_rounds() {
        let mut eco = economy();
        assert_eq!(eco.win_rate(), 0);
        eco.remove_igc(10, "bet").unwrap();
        eco.add_igc(20, "win");
        eco.remove_igc(10, "bet").unwrap();
        assert_eq!(eco.win_rate(), 33);
        assert_eq!(eco.snapshot().win_rate, 33);
    }
}
