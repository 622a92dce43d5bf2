use thiserror::Error;

/// Rejected economy operations. Every variant leaves the economy untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EconomyError {
    #[error("insufficient IGC: need {needed}, have {available}")]
    InsufficientIgc { needed: u64, available: u64 },

    #[error("insufficient resources: need {needed}, have {available}")]
    InsufficientResources { needed: u64, available: u64 },

    /// Zero stakes and similar non-positive amounts.
    #[error("amount must be positive")]
    InvalidAmount,

    #[error("nothing staked")]
    NothingStaked,

    #[error("daily reward not ready yet")]
    DailyNotReady,

    #[error("unknown mission: {0}")]
    UnknownMission(String),

    #[error("mission not complete: {0}")]
    MissionIncomplete(String),

    #[error("reward already claimed: {0}")]
    AlreadyClaimed(String),

    #[error("unknown collectible: {0}")]
    UnknownCollectible(String),

    #[error("collectible not for sale: {0}")]
    NotForSale(String),
}

/// Errors raised while driving an arcade round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("bet must be positive")]
    InvalidBet,

    #[error("a round is already in progress")]
    RoundInProgress,

    #[error("no round in progress")]
    NoActiveRound,

    #[error("deck exhausted")]
    DeckExhausted,

    #[error("die face out of range: {0}")]
    InvalidDie(u8),

    #[error(transparent)]
    Economy(#[from] EconomyError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("no wallet provider available")]
    Unavailable,

    #[error("wallet request rejected: {0}")]
    Rejected(String),
}
