//! Single-deck blackjack against an automatic dealer.
//!
//! Aces count 11 and drop to 1, one at a time, while the hand is over 21. The dealer
//! draws to 17 or more. A natural (21 on the first two cards) pays 2.5x the bet and is
//! settled on the deal; a push returns the bet.

use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use super::{RoundPhase, open_round, pay_out};
use crate::economy::Economy;
use crate::error::GameError;

pub const DEALER_STANDS_AT: u32 = 17;
const BUST_LIMIT: u32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Card rank, 1 = ace through 13 = king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Face value with aces high.
    pub fn value(&self) -> u32 {
        match self.rank {
            1 => 11,
            r @ 2..=10 => r as u32,
            _ => 10,
        }
    }

    pub fn label(&self) -> String {
        let rank = match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            r => r.to_string(),
        };
        format!("{}{}", rank, self.suit.symbol())
    }
}

pub fn fresh_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=13).map(move |rank| Card::new(rank, suit)))
        .collect()
}

pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = fresh_deck();
    deck.shuffle(rng);
    deck
}

pub fn hand_total(hand: &[Card]) -> u32 {
    let mut total: u32 = hand.iter().map(Card::value).sum();
    let mut aces = hand.iter().filter(|c| c.is_ace()).count();
    while total > BUST_LIMIT && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    total
}

pub fn is_natural(hand: &[Card]) -> bool {
    hand.len() == 2 && hand_total(hand) == BUST_LIMIT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandResult {
    Blackjack,
    Bust,
    DealerBust,
    Win,
    Push,
    Lose,
}

impl HandResult {
    pub fn message(self) -> &'static str {
        match self {
            HandResult::Blackjack => "BLACKJACK! 2.5x win",
            HandResult::Bust => "Bust! You lose.",
            HandResult::DealerBust => "Dealer busts! You win!",
            HandResult::Win => "You win!",
            HandResult::Push => "Push - bet returned.",
            HandResult::Lose => "Dealer wins.",
        }
    }
}

/// Settles finished hands. `natural` is true only when settling on the deal.
pub fn settle(player: &[Card], dealer: &[Card], natural: bool, bet: u64) -> (HandResult, u64) {
    let player_total = hand_total(player);
    let dealer_total = hand_total(dealer);
    if player_total > BUST_LIMIT {
        (HandResult::Bust, 0)
    } else if natural && is_natural(player) {
        (HandResult::Blackjack, bet * 5 / 2)
    } else if dealer_total > BUST_LIMIT {
        (HandResult::DealerBust, bet * 2)
    } else if player_total > dealer_total {
        (HandResult::Win, bet * 2)
    } else if player_total < dealer_total {
        (HandResult::Lose, 0)
    } else {
        (HandResult::Push, bet)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandOutcome {
    pub result: HandResult,
    pub bet: u64,
    pub payout: u64,
    pub player_total: u32,
    pub dealer_total: u32,
}

#[derive(Debug, Default)]
pub struct Blackjack {
    phase: RoundPhase,
    round: u64,
    bet: u64,
    deck: Vec<Card>,
    player: Vec<Card>,
    dealer: Vec<Card>,
    last: Option<HandOutcome>,
}

impl Blackjack {
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player
    }

    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer
    }

    /// The dealer's hole card stays hidden while the player is deciding.
    pub fn dealer_revealed(&self) -> bool {
        self.phase != RoundPhase::Resolving
    }

    pub fn last_outcome(&self) -> Option<&HandOutcome> {
        self.last.as_ref()
    }

    pub fn deal<R: Rng + ?Sized>(
        &mut self,
        economy: &mut Economy,
        bet: u64,
        rng: &mut R,
    ) -> Result<Option<HandOutcome>, GameError> {
        self.deal_from(economy, bet, shuffled_deck(rng))
    }

    /// Deals from `deck`, drawing from its end. Returns the outcome when the player
    /// holds a natural and the hand settles immediately.
    pub fn deal_from(
        &mut self,
        economy: &mut Economy,
        bet: u64,
        mut deck: Vec<Card>,
    ) -> Result<Option<HandOutcome>, GameError> {
        if deck.len() < 4 {
            return Err(GameError::DeckExhausted);
        }
        open_round(economy, self.phase, &mut self.round, bet, "Blackjack bet")?;
        self.bet = bet;
        self.player.clear();
        self.dealer.clear();
        for _ in 0..2 {
            self.player.extend(deck.pop());
        }
        for _ in 0..2 {
            self.dealer.extend(deck.pop());
        }
        self.deck = deck;
        self.phase = RoundPhase::Resolving;

        if is_natural(&self.player) {
            return Ok(Some(self.finish(economy, true)));
        }
        Ok(None)
    }

    /// Draws one card for the player; a bust settles the hand.
    pub fn hit(&mut self, economy: &mut Economy) -> Result<Option<HandOutcome>, GameError> {
        if self.phase != RoundPhase::Resolving {
            return Err(GameError::NoActiveRound);
        }
        let card = self.deck.pop().ok_or(GameError::DeckExhausted)?;
        self.player.push(card);
        if hand_total(&self.player) > BUST_LIMIT {
            return Ok(Some(self.finish(economy, false)));
        }
        Ok(None)
    }

    /// Plays out the dealer and settles.
    pub fn stand(&mut self, economy: &mut Economy) -> Result<HandOutcome, GameError> {
        if self.phase != RoundPhase::Resolving {
            return Err(GameError::NoActiveRound);
        }
        while hand_total(&self.dealer) < DEALER_STANDS_AT {
            match self.deck.pop() {
                Some(card) => self.dealer.push(card),
                None => break,
            }
        }
        Ok(self.finish(economy, false))
    }

    pub fn abandon(&mut self) -> bool {
        let open = self.phase == RoundPhase::Resolving;
        if open {
            self.player.clear();
            self.dealer.clear();
            self.deck.clear();
            self.phase = RoundPhase::Idle;
        }
        open
    }

    fn finish(&mut self, economy: &mut Economy, natural: bool) -> HandOutcome {
        let (result, payout) = settle(&self.player, &self.dealer, natural, self.bet);
        let description = match result {
            HandResult::Blackjack => "Blackjack! 2.5x payout",
            HandResult::DealerBust => "Dealer bust - Blackjack win",
            HandResult::Push => "Blackjack push",
            _ => "Blackjack win",
        };
        pay_out(economy, payout, description);
        let outcome = HandOutcome {
            result,
            bet: self.bet,
            payout,
            player_total: hand_total(&self.player),
            dealer_total: hand_total(&self.dealer),
        };
        info!(
            "blackjack round {}: {} v {} {:?} -> {}",
            self.round, outcome.player_total, outcome.dealer_total, result, payout
        );
        self.phase = RoundPhase::Settled;
        self.last = Some(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::EconomySettings;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn card(rank: u8) -> Card {
        Card::new(rank, Suit::Spades)
    }

    fn economy() -> Economy {
        Economy::new(EconomySettings::default(), &mut StdRng::seed_from_u64(1))
    }

    /// Deck that deals `player` then `dealer`, with `rest` drawn afterwards in order.
    fn stacked(player: [u8; 2], dealer: [u8; 2], rest: &[u8]) -> Vec<Card> {
        let mut order: Vec<u8> = vec![player[0], player[1], dealer[0], dealer[1]];
        order.extend_from_slice(rest);
        order.into_iter().rev().map(card).collect()
    }

    #[test]
    fn aces_soften_one_at_a_time() {
        assert_eq!(hand_total(&[card(1), card(13)]), 21);
        assert_eq!(hand_total(&[card(1), card(1)]), 12);
        assert_eq!(hand_total(&[card(1), card(1), card(9)]), 21);
        assert_eq!(hand_total(&[card(1), card(5), card(9)]), 15);
        assert_eq!(hand_total(&[card(10), card(12), card(4)]), 24);
    }

    #[test]
    fn deck_has_fifty_two_distinct_cards() {
        let deck = shuffled_deck(&mut StdRng::seed_from_u64(4));
        assert_eq!(deck.len(), 52);
        for suit in Suit::ALL {
            assert_eq!(deck.iter().filter(|c| c.suit == suit).count(), 13);
        }
    }

    #[test]
    fn equal_totals_push() {
        let mut eco = economy();
        let mut game = Blackjack::default();
        let deck = stacked([10, 9], [10, 9], &[]);
        assert_eq!(game.deal_from(&mut eco, 20, deck).unwrap(), None);
        let outcome = game.stand(&mut eco).unwrap();
        assert_eq!(outcome.result, HandResult::Push);
        assert_eq!(outcome.payout, 20);
        assert_eq!(eco.igc(), 100);
    }

    #[test]
    fn natural_pays_two_and_a_half() {
        let mut eco = economy();
        let mut game = Blackjack::default();
        let deck = stacked([1, 13], [10, 7], &[]);
        let outcome = game.deal_from(&mut eco, 20, deck).unwrap().unwrap();
        assert_eq!(outcome.result, HandResult::Blackjack);
        assert_eq!(outcome.payout, 50);
        assert_eq!(eco.igc(), 130);
        assert_eq!(game.phase(), RoundPhase::Settled);
    }

    #[test]
    fn odd_bet_natural_rounds_down() {
        assert_eq!(settle(&[card(1), card(12)], &[card(10), card(8)], true, 5).1, 12);
    }

    #[test]
    fn player_bust_loses_bet() {
        let mut eco = economy();
        let mut game = Blackjack::default();
        let deck = stacked([10, 12], [10, 7], &[4]);
        game.deal_from(&mut eco, 20, deck).unwrap();
        let outcome = game.hit(&mut eco).unwrap().unwrap();
        assert_eq!(outcome.result, HandResult::Bust);
        assert_eq!(outcome.player_total, 24);
        assert_eq!(eco.igc(), 80);
    }

    #[test]
    fn dealer_draws_to_seventeen_and_busts() {
        let mut eco = economy();
        let mut game = Blackjack::default();
        let deck = stacked([10, 8], [10, 6], &[9]);
        game.deal_from(&mut eco, 10, deck).unwrap();
        let outcome = game.stand(&mut eco).unwrap();
        assert_eq!(game.dealer_hand().len(), 3);
        assert_eq!(outcome.result, HandResult::DealerBust);
        assert_eq!(eco.igc(), 110);
    }

    #[test]
    fn lower_total_loses() {
        let mut eco = economy();
        let mut game = Blackjack::default();
        let deck = stacked([10, 6], [10, 8], &[]);
        game.deal_from(&mut eco, 10, deck).unwrap();
        let outcome = game.stand(&mut eco).unwrap();
        assert_eq!(outcome.result, HandResult::Lose);
        assert_eq!(eco.igc(), 90);
    }

    #[test]
    fn twenty_one_after_hits_is_not_a_natural() {
        let mut eco = economy();
        let mut game = Blackjack::default();
        let deck = stacked([5, 6], [10, 8], &[10]);
        game.deal_from(&mut eco, 10, deck).unwrap();
        assert_eq!(game.hit(&mut eco).unwrap(), None);
        let outcome = game.stand(&mut eco).unwrap();
        assert_eq!(outcome.result, HandResult::Win);
        assert_eq!(outcome.payout, 20);
    }

    #[test]
    fn actions_need_an_open_hand() {
        let mut eco = economy();
        let mut game = Blackjack::default();
        assert_eq!(game.hit(&mut eco), Err(GameError::NoActiveRound));
        assert_eq!(game.stand(&mut eco), Err(GameError::NoActiveRound));
    }
}
