use std::collections::VecDeque;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use cryptoidle::config::Config;
use cryptoidle::economy::Economy;
use cryptoidle::games::blackjack::HandOutcome;
use cryptoidle::games::coin_flip::{CoinSide, FLIP_DELAY};
use cryptoidle::games::dice::{DiceGuess, ROLL_DELAY};
use cryptoidle::games::spin_wheel::SPIN_DELAY;
use cryptoidle::games::{Blackjack, ClickerBlitz, CoinFlip, DiceRoll, GameKind, RoundPhase, SpinWheel};
use cryptoidle::schedule::Scheduler;
use cryptoidle::wallet::{NoProvider, WalletProvider, WalletSession};

const MAX_MESSAGES: usize = 5;
const BET_STEP: u64 = 5;
const STAKE_STEP: u64 = 10;
const PRICE_STEP: u64 = 5;
const DEFAULT_LIST_PRICE: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    Dashboard,
    Arcade,
    Market,
    Missions,
    Profile,
}

impl PaneFocus {
    pub const ALL: [PaneFocus; 5] = [
        PaneFocus::Dashboard,
        PaneFocus::Arcade,
        PaneFocus::Market,
        PaneFocus::Missions,
        PaneFocus::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PaneFocus::Dashboard => "Dashboard",
            PaneFocus::Arcade => "Arcade",
            PaneFocus::Market => "Market",
            PaneFocus::Missions => "Missions",
            PaneFocus::Profile => "Profile",
        }
    }

    fn next(self) -> Self {
        match self {
            PaneFocus::Dashboard => PaneFocus::Arcade,
            PaneFocus::Arcade => PaneFocus::Market,
            PaneFocus::Market => PaneFocus::Missions,
            PaneFocus::Missions => PaneFocus::Profile,
            PaneFocus::Profile => PaneFocus::Dashboard,
        }
    }

    fn prev(self) -> Self {
        match self {
            PaneFocus::Dashboard => PaneFocus::Profile,
            PaneFocus::Arcade => PaneFocus::Dashboard,
            PaneFocus::Market => PaneFocus::Arcade,
            PaneFocus::Missions => PaneFocus::Market,
            PaneFocus::Profile => PaneFocus::Missions,
        }
    }
}

/// Pending reveal for a game round, keyed by round id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    CoinFlip(u64),
    DiceRoll(u64),
    SpinWheel(u64),
    ClickerBlitz(u64),
}

impl Timer {
    fn game(self) -> GameKind {
        match self {
            Timer::CoinFlip(_) => GameKind::CoinFlip,
            Timer::DiceRoll(_) => GameKind::DiceRoll,
            Timer::SpinWheel(_) => GameKind::SpinWheel,
            Timer::ClickerBlitz(_) => GameKind::ClickerBlitz,
        }
    }
}

pub struct ArcadeState {
    pub selected: GameKind,
    pub bet: u64,
    pub coin_call: CoinSide,
    pub dice_guess: DiceGuess,
    pub coin_flip: CoinFlip,
    pub dice: DiceRoll,
    pub wheel: SpinWheel,
    pub blackjack: Blackjack,
    pub clicker: ClickerBlitz,
}

impl ArcadeState {
    fn new(default_bet: u64) -> Self {
        Self {
            selected: GameKind::CoinFlip,
            bet: default_bet.max(1),
            coin_call: CoinSide::Heads,
            dice_guess: DiceGuess::High,
            coin_flip: CoinFlip::default(),
            dice: DiceRoll::default(),
            wheel: SpinWheel::default(),
            blackjack: Blackjack::default(),
            clicker: ClickerBlitz::default(),
        }
    }

    pub fn phase(&self, kind: GameKind) -> RoundPhase {
        match kind {
            GameKind::CoinFlip => self.coin_flip.phase(),
            GameKind::DiceRoll => self.dice.phase(),
            GameKind::SpinWheel => self.wheel.phase(),
            GameKind::Blackjack => self.blackjack.phase(),
            GameKind::ClickerBlitz => self.clicker.phase(),
        }
    }

    fn abandon(&mut self, kind: GameKind) -> bool {
        match kind {
            GameKind::CoinFlip => self.coin_flip.abandon(),
            GameKind::DiceRoll => self.dice.abandon(),
            GameKind::SpinWheel => self.wheel.abandon(),
            GameKind::Blackjack => self.blackjack.abandon(),
            GameKind::ClickerBlitz => self.clicker.abandon(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketColumn {
    Catalog,
    Collection,
}

#[derive(Debug)]
pub struct MarketState {
    pub column: MarketColumn,
    pub selected_catalog: usize,
    pub selected_owned: usize,
    pub list_price: u64,
}

pub struct App {
    pub focus: PaneFocus,
    pub should_quit: bool,
    pub economy: Economy,
    pub wallet: WalletSession,
    pub arcade: ArcadeState,
    pub market: MarketState,
    pub selected_mission: usize,
    pub ledger_scroll: usize,
    pub stake_amount: u64,
    pub messages: VecDeque<String>,
    pub started_at: Instant,
    timers: Scheduler<Timer>,
    provider: Box<dyn WalletProvider>,
    rng: StdRng,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut rng = match config.session.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let economy = Economy::new(config.session.economy_settings(), &mut rng);

        Self {
            focus: PaneFocus::Dashboard,
            should_quit: false,
            economy,
            wallet: WalletSession::new(config.wallet.simulation_delay()),
            arcade: ArcadeState::new(config.ui.default_bet),
            market: MarketState {
                column: MarketColumn::Catalog,
                selected_catalog: 0,
                selected_owned: 0,
                list_price: DEFAULT_LIST_PRICE,
            },
            selected_mission: 0,
            ledger_scroll: 0,
            stake_amount: STAKE_STEP,
            messages: VecDeque::new(),
            started_at: Instant::now(),
            timers: Scheduler::default(),
            provider: Box::new(NoProvider),
            rng,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.wallet.poll(now, &mut self.rng) {
            let address = self.wallet.address().unwrap_or("?").to_string();
            self.push_message(format!("Simulated wallet connected: {}", address));
        }

        for timer in self.timers.take_due(now) {
            self.fire(timer);
        }
    }

    /// Pending reveal time of `kind`'s open round, if any.
    pub fn reveal_due(&self, kind: GameKind) -> Option<Instant> {
        let key = match kind {
            GameKind::CoinFlip => Timer::CoinFlip(self.arcade.coin_flip.round()),
            GameKind::DiceRoll => Timer::DiceRoll(self.arcade.dice.round()),
            GameKind::SpinWheel => Timer::SpinWheel(self.arcade.wheel.round()),
            GameKind::ClickerBlitz => Timer::ClickerBlitz(self.arcade.clicker.round()),
            GameKind::Blackjack => return None,
        };
        self.timers.due_at(&key)
    }

    fn fire(&mut self, timer: Timer) {
        let before = self.unlocked_flags();
        let arcade = &mut self.arcade;
        let economy = &mut self.economy;
        let message = match timer {
            Timer::CoinFlip(round) if round == arcade.coin_flip.round() => arcade
                .coin_flip
                .resolve(economy, &mut self.rng)
                .map(|o| {
                    if o.won() {
                        format!("It's {}! You win {} IGC!", o.landed.label(), o.payout)
                    } else {
                        format!("It's {}. You lose!", o.landed.label())
                    }
                }),
            Timer::DiceRoll(round) if round == arcade.dice.round() => {
                arcade.dice.resolve(economy, &mut self.rng).map(|o| {
                    if o.payout > 0 {
                        format!("You rolled {}! You win {} IGC!", o.total(), o.payout)
                    } else {
                        format!("You rolled {}. Better luck next time!", o.total())
                    }
                })
            }
            Timer::SpinWheel(round) if round == arcade.wheel.round() => {
                arcade.wheel.resolve(economy, &mut self.rng).map(|o| {
                    if o.prize > 0 {
                        format!("The wheel stops on {} IGC!", o.prize)
                    } else {
                        "The wheel stops on 0. Better luck next time!".to_string()
                    }
                })
            }
            Timer::ClickerBlitz(round) if round == arcade.clicker.round() => {
                arcade.clicker.finish(economy).map(|r| {
                    format!("Time! {} clicks, {} (+{} IGC)", r.clicks, r.tier.label(), r.reward)
                })
            }
            stale => {
                debug!("dropping stale timer {:?}", stale);
                return;
            }
        };
        match message {
            Ok(msg) => self.push_message(msg),
            Err(e) => debug!("{} timer fired without an open round: {}", timer.game().name(), e),
        }
        self.report_unlocks(&before);
    }

    pub fn push_message(&mut self, msg: impl Into<String>) {
        self.messages.push_front(msg.into());
        while self.messages.len() > MAX_MESSAGES {
            self.messages.pop_back();
        }
    }

    fn unlocked_flags(&self) -> Vec<bool> {
        self.economy.achievements().iter().map(|a| a.is_unlocked()).collect()
    }

    /// Feeds a message for every achievement unlocked since `before` was taken.
    fn report_unlocks(&mut self, before: &[bool]) {
        let fresh: Vec<&'static str> = self
            .economy
            .achievements()
            .iter()
            .zip(before)
            .filter(|(a, was)| a.is_unlocked() && !**was)
            .map(|(a, _)| a.name)
            .collect();
        for name in fresh {
            self.push_message(format!("Achievement unlocked: {}", name));
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q' | 'Q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            KeyCode::Char('c' | 'C') => {
                self.connect_wallet(now);
                return;
            }
            KeyCode::Char('x' | 'X') => {
                self.disconnect_wallet();
                return;
            }
            _ => {}
        }

        if !self.wallet.is_connected() {
            let hint = if self.wallet.is_connecting() {
                "Connecting wallet..."
            } else {
                "Connect a wallet first (C)"
            };
            self.push_message(hint);
            return;
        }

        let before = self.unlocked_flags();
        match self.focus {
            PaneFocus::Dashboard => self.handle_dashboard_input(key),
            PaneFocus::Arcade => self.handle_arcade_input(key, now),
            PaneFocus::Market => self.handle_market_input(key),
            PaneFocus::Missions => self.handle_missions_input(key),
            PaneFocus::Profile => self.handle_profile_input(key),
        }
        self.report_unlocks(&before);
    }

    fn connect_wallet(&mut self, now: Instant) {
        if self.wallet.is_connected() {
            return;
        }
        self.wallet.connect(self.provider.as_mut(), now);
        if self.wallet.is_connected() {
            let address = self.wallet.address().unwrap_or("?").to_string();
            self.push_message(format!("Wallet connected: {}", address));
        } else {
            self.push_message("No wallet found, starting simulation...");
        }
    }

    fn disconnect_wallet(&mut self) {
        if !self.wallet.is_connected() && !self.wallet.is_connecting() {
            return;
        }
        for kind in GameKind::ALL {
            self.abandon_round(kind);
        }
        self.wallet.disconnect();
        self.push_message("Wallet disconnected");
    }

    fn handle_dashboard_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ' | 'm') => {
                let gained = self.economy.mine();
                self.push_message(format!(
                    "Mined {} resources ({}x boost)",
                    gained,
                    self.economy.mining_boost()
                ));
            }
            KeyCode::Char('e') => match self.economy.exchange_resources() {
                Ok(()) => self.push_message("Exchanged 100 resources for 1 IGC"),
                Err(e) => self.push_message(format!("Exchange failed: {}", e)),
            },
            KeyCode::Up => self.stake_amount = self.stake_amount.saturating_add(STAKE_STEP),
            KeyCode::Down => self.stake_amount = self.stake_amount.saturating_sub(STAKE_STEP),
            KeyCode::Char('a') => self.stake_amount = self.economy.igc(),
            KeyCode::Char('s') => {
                let amount = self.stake_amount;
                match self.economy.stake_igc(amount) {
                    Ok(()) => self.push_message(format!(
                        "Staked {} IGC, boost now {}x",
                        amount,
                        self.economy.mining_boost()
                    )),
                    Err(e) => self.push_message(format!("Stake failed: {}", e)),
                }
            }
            KeyCode::Char('u') => match self.economy.unstake_igc() {
                Ok(amount) => self.push_message(format!("Unstaked {} IGC", amount)),
                Err(e) => self.push_message(format!("Unstake failed: {}", e)),
            },
            KeyCode::Char('d') => {
                let day = self.economy.next_daily_day();
                match self.economy.claim_daily_reward(day) {
                    Ok(reward) => {
                        self.push_message(format!("Day {} reward claimed: {} IGC", day, reward))
                    }
                    Err(e) => self.push_message(format!("Daily reward: {}", e)),
                }
            }
            _ => {}
        }
    }

    fn handle_arcade_input(&mut self, key: KeyEvent, now: Instant) {
        let kind = self.arcade.selected;
        match key.code {
            KeyCode::Left => self.select_game(self.arcade.selected.prev()),
            KeyCode::Right => self.select_game(self.arcade.selected.next()),
            KeyCode::Up if kind.takes_bet() => {
                self.arcade.bet = self.arcade.bet.saturating_add(BET_STEP);
            }
            KeyCode::Down if kind.takes_bet() => {
                self.arcade.bet = self.arcade.bet.saturating_sub(BET_STEP).max(1);
            }
            KeyCode::Esc => {
                if self.abandon_round(kind) {
                    self.push_message(format!("{} round abandoned", kind.name()));
                }
            }
            KeyCode::Enter => self.play(kind, now),
            KeyCode::Char(c) => self.game_action(kind, c, now),
            _ => {}
        }
    }

    fn select_game(&mut self, next: GameKind) {
        let current = self.arcade.selected;
        if self.abandon_round(current) {
            self.push_message(format!("{} round abandoned", current.name()));
        }
        self.arcade.selected = next;
    }

    /// Abandons `kind`'s open round and cancels its pending reveal.
    fn abandon_round(&mut self, kind: GameKind) -> bool {
        self.timers.cancel_where(|t| t.game() == kind);
        let abandoned = self.arcade.abandon(kind);
        if abandoned {
            info!("{} round abandoned", kind.name());
        }
        abandoned
    }

    fn play(&mut self, kind: GameKind, now: Instant) {
        let bet = self.arcade.bet;
        let arcade = &mut self.arcade;
        let economy = &mut self.economy;
        let started = match kind {
            GameKind::CoinFlip => arcade
                .coin_flip
                .place_bet(economy, bet, arcade.coin_call)
                .map(|round| {
                    self.timers.schedule(Timer::CoinFlip(round), now + FLIP_DELAY);
                    format!("Flipping for {} IGC on {}...", bet, arcade.coin_call.label())
                }),
            GameKind::DiceRoll => arcade
                .dice
                .place_bet(economy, bet, arcade.dice_guess)
                .map(|round| {
                    self.timers.schedule(Timer::DiceRoll(round), now + ROLL_DELAY);
                    format!("Rolling for {} IGC on {}...", bet, arcade.dice_guess.label())
                }),
            GameKind::SpinWheel => arcade.wheel.spin(economy).map(|round| {
                self.timers.schedule(Timer::SpinWheel(round), now + SPIN_DELAY);
                "The wheel is spinning...".to_string()
            }),
            GameKind::ClickerBlitz => arcade.clicker.start(economy, now).map(|round| {
                if let Some(deadline) = arcade.clicker.deadline() {
                    self.timers.schedule(Timer::ClickerBlitz(round), deadline);
                }
                "Blitz started: click with Space!".to_string()
            }),
            GameKind::Blackjack => match arcade.blackjack.deal(economy, bet, &mut self.rng) {
                Ok(Some(outcome)) => Ok(describe_hand(&outcome)),
                Ok(None) => Ok(format!("Dealt for {} IGC: H hit, S stand", bet)),
                Err(e) => Err(e),
            },
        };
        match started {
            Ok(msg) => self.push_message(msg),
            Err(e) => self.push_message(format!("{}: {}", kind.name(), e)),
        }
    }

    fn game_action(&mut self, kind: GameKind, c: char, now: Instant) {
        let idle = self.arcade.phase(kind) != RoundPhase::Resolving;
        match (kind, c) {
            (GameKind::CoinFlip, 'h') if idle => self.arcade.coin_call = CoinSide::Heads,
            (GameKind::CoinFlip, 't') if idle => self.arcade.coin_call = CoinSide::Tails,
            (GameKind::DiceRoll, 'l') if idle => self.arcade.dice_guess = DiceGuess::Low,
            (GameKind::DiceRoll, 'h') if idle => self.arcade.dice_guess = DiceGuess::High,
            (GameKind::Blackjack, 'h') => match self.arcade.blackjack.hit(&mut self.economy) {
                Ok(Some(outcome)) => self.push_message(describe_hand(&outcome)),
                Ok(None) => {}
                Err(e) => self.push_message(format!("Blackjack: {}", e)),
            },
            (GameKind::Blackjack, 's') => match self.arcade.blackjack.stand(&mut self.economy) {
                Ok(outcome) => self.push_message(describe_hand(&outcome)),
                Err(e) => self.push_message(format!("Blackjack: {}", e)),
            },
            (GameKind::ClickerBlitz, ' ') => {
                self.arcade.clicker.click(now);
            }
            _ => {}
        }
    }

    fn handle_market_input(&mut self, key: KeyEvent) {
        let catalog_len = self.economy.catalog().len();
        let owned_len = self.economy.collection().len();
        match key.code {
            KeyCode::Left => self.market.column = MarketColumn::Catalog,
            KeyCode::Right => self.market.column = MarketColumn::Collection,
            KeyCode::Up => match self.market.column {
                MarketColumn::Catalog => {
                    self.market.selected_catalog = select_previous(self.market.selected_catalog, catalog_len)
                }
                MarketColumn::Collection => {
                    self.market.selected_owned = select_previous(self.market.selected_owned, owned_len)
                }
            },
            KeyCode::Down => match self.market.column {
                MarketColumn::Catalog => {
                    self.market.selected_catalog = select_next(self.market.selected_catalog, catalog_len)
                }
                MarketColumn::Collection => {
                    self.market.selected_owned = select_next(self.market.selected_owned, owned_len)
                }
            },
            KeyCode::Char('+' | '=') => {
                self.market.list_price = self.market.list_price.saturating_add(PRICE_STEP)
            }
            KeyCode::Char('-') => {
                self.market.list_price = self.market.list_price.saturating_sub(PRICE_STEP).max(1)
            }
            KeyCode::Char('n') => match self.economy.mint_nft(&mut self.rng) {
                Ok(minted) => self.push_message(format!(
                    "Minted {} ({})",
                    minted.name,
                    minted.rarity.label()
                )),
                Err(e) => self.push_message(format!("Mint failed: {}", e)),
            },
            KeyCode::Char('b') => {
                let Some(id) = self
                    .economy
                    .catalog()
                    .get(self.market.selected_catalog)
                    .map(|c| c.id.clone())
                else {
                    return;
                };
                match self.economy.buy_nft(&id) {
                    Ok(bought) => self.push_message(format!("Bought {}", bought.name)),
                    Err(e) => self.push_message(format!("Purchase failed: {}", e)),
                }
            }
            KeyCode::Char('l') => {
                let Some(id) = self
                    .economy
                    .collection()
                    .get(self.market.selected_owned)
                    .map(|c| c.id.clone())
                else {
                    self.push_message("Nothing to list yet: mint or buy first");
                    return;
                };
                let price = self.market.list_price;
                match self.economy.list_nft_for_sale(&id, price) {
                    Ok(()) => self.push_message(format!("Listed for {} IGC", price)),
                    Err(e) => self.push_message(format!("Listing failed: {}", e)),
                }
            }
            _ => {}
        }
    }

    fn handle_missions_input(&mut self, key: KeyEvent) {
        let len = self.economy.missions().len();
        match key.code {
            KeyCode::Up => self.selected_mission = select_previous(self.selected_mission, len),
            KeyCode::Down => self.selected_mission = select_next(self.selected_mission, len),
            KeyCode::Enter => {
                let Some(id) = self.economy.missions().get(self.selected_mission).map(|m| m.id) else {
                    return;
                };
                match self.economy.claim_mission_reward(id) {
                    Ok(reward) => self.push_message(format!("Mission reward claimed: {}", reward)),
                    Err(e) => self.push_message(format!("Claim failed: {}", e)),
                }
            }
            _ => {}
        }
    }

    fn handle_profile_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.ledger_scroll = self.ledger_scroll.saturating_sub(1),
            KeyCode::Down => {
                if self.ledger_scroll + 1 < self.economy.ledger().len() {
                    self.ledger_scroll += 1;
                }
            }
            _ => {}
        }
    }
}

fn describe_hand(outcome: &HandOutcome) -> String {
    format!(
        "{} ({} v {}){}",
        outcome.result.message(),
        outcome.player_total,
        outcome.dealer_total,
        if outcome.payout > 0 {
            format!(" +{} IGC", outcome.payout)
        } else {
            String::new()
        }
    )
}

fn select_next(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

fn select_previous(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

pub fn format_countdown(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
