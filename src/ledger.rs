use std::collections::VecDeque;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::ids::checked_id;

/// Entries kept before the oldest one is evicted.
pub const LEDGER_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Resources,
    Igc,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Resources => "RES",
            Currency::Igc => "IGC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Mine,
    Exchange,
    Stake,
    Unstake,
    Win,
    Loss,
    Mint,
    Buy,
    List,
    Claim,
}

impl TxKind {
    pub fn label(self) -> &'static str {
        match self {
            TxKind::Mine => "mine",
            TxKind::Exchange => "exchange",
            TxKind::Stake => "stake",
            TxKind::Unstake => "unstake",
            TxKind::Win => "win",
            TxKind::Loss => "loss",
            TxKind::Mint => "mint",
            TxKind::Buy => "buy",
            TxKind::List => "list",
            TxKind::Claim => "claim",
        }
    }

    /// Whether the entry moved value into the player's balances.
    pub fn is_credit(self) -> bool {
        matches!(
            self,
            TxKind::Mine | TxKind::Exchange | TxKind::Unstake | TxKind::Win | TxKind::Claim
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TxKind,
    pub amount: u64,
    pub currency: Currency,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

impl Transaction {
    pub fn timestamp_local(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }
}

/// Bounded newest-first transaction history.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: VecDeque<Transaction>,
    next_seq: u64,
}

impl Ledger {
    pub fn record(
        &mut self,
        kind: TxKind,
        amount: u64,
        currency: Currency,
        description: impl Into<String>,
    ) -> &Transaction {
        self.next_seq += 1;
        let entry = Transaction {
            id: checked_id("TX", self.next_seq),
            kind,
            amount,
            currency,
            timestamp: Utc::now(),
            description: description.into(),
        };
        self.entries.push_front(entry);
        self.entries.truncate(LEDGER_CAPACITY);
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Transaction> {
        self.entries.front()
    }

    /// Total operations ever recorded, including evicted ones.
    pub fn recorded(&self) -> u64 {
        self.next_seq
    }
}
