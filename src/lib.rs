//! Economy, arcade and wallet rules for the cryptoidle terminal game.
//!
//! The [`economy::Economy`] container is the single source of truth for a session;
//! the arcade games in [`games`] debit and credit through it, and the terminal front
//! end in the binary only projects its state.

pub mod achievements;
pub mod config;
pub mod economy;
pub mod error;
pub mod games;
pub mod ids;
pub mod ledger;
pub mod logutil;
pub mod missions;
pub mod nft;
pub mod schedule;
pub mod wallet;

pub use economy::{Economy, EconomySettings, EconomySnapshot};
pub use error::{EconomyError, GameError, WalletError};
