//! Wallet session.
//!
//! The session asks a [`WalletProvider`] for an account. When no provider answers, it
//! falls back to a simulated wallet after a short delay. The balance shown here is
//! cosmetic and never feeds the game economy.

use std::time::{Duration, Instant};

use log::{info, warn};
use rand::Rng;

use crate::error::WalletError;
use crate::ids::hex_digest;

pub const DEFAULT_SIMULATION_DELAY: Duration = Duration::from_secs(3);
const ZERO_BALANCE: &str = "0.00";
const WEI_PER_ETH: f64 = 1e18;

/// An injected wallet extension.
pub trait WalletProvider {
    fn request_accounts(&mut self) -> Result<Vec<String>, WalletError>;

    /// Balance of `address` in wei, as a `0x`-prefixed hex string.
    fn balance_of(&mut self, address: &str) -> Result<String, WalletError>;
}

/// Stand-in when no wallet extension is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProvider;

impl WalletProvider for NoProvider {
    fn request_accounts(&mut self) -> Result<Vec<String>, WalletError> {
        Err(WalletError::Unavailable)
    }

    fn balance_of(&mut self, _address: &str) -> Result<String, WalletError> {
        Err(WalletError::Unavailable)
    }
}

/// `0x742d35...` becomes `0x742d...aB89`.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Hex wei to an ETH amount with four decimals.
pub fn format_balance(wei_hex: &str) -> String {
    let digits = wei_hex.trim_start_matches("0x");
    match u128::from_str_radix(digits, 16) {
        Ok(wei) => format!("{:.4}", wei as f64 / WEI_PER_ETH),
        Err(_) => ZERO_BALANCE.to_string(),
    }
}

#[derive(Debug)]
pub struct WalletSession {
    address: Option<String>,
    raw_address: Option<String>,
    balance: String,
    is_connected: bool,
    is_simulation: bool,
    fallback_at: Option<Instant>,
    simulation_delay: Duration,
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATION_DELAY)
    }
}

impl WalletSession {
    pub fn new(simulation_delay: Duration) -> Self {
        Self {
            address: None,
            raw_address: None,
            balance: ZERO_BALANCE.to_string(),
            is_connected: false,
            is_simulation: false,
            fallback_at: None,
            simulation_delay,
        }
    }

    /// Display form of the connected address.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn balance(&self) -> &str {
        &self.balance
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn is_simulation(&self) -> bool {
        self.is_simulation
    }

    pub fn is_connecting(&self) -> bool {
        self.fallback_at.is_some()
    }

    /// Connects through `provider`, or schedules the simulated fallback.
    pub fn connect(&mut self, provider: &mut dyn WalletProvider, now: Instant) {
        if self.is_connected || self.is_connecting() {
            return;
        }
        match provider.request_accounts() {
            Ok(accounts) if !accounts.is_empty() => {
                let account = accounts[0].clone();
                self.attach(provider, account);
                info!("wallet connected: {}", self.address.as_deref().unwrap_or("?"));
                return;
            }
            Ok(_) => warn!("wallet provider returned no accounts, falling back to simulation"),
            Err(WalletError::Unavailable) => info!("no wallet provider, falling back to simulation"),
            Err(e) => warn!("wallet connection failed ({}), falling back to simulation", e),
        }
        self.fallback_at = Some(now + self.simulation_delay);
    }

    /// Completes a pending simulated connection once its delay has elapsed.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        match self.fallback_at {
            Some(due) if now >= due => {
                self.fallback_at = None;
                let seed: u64 = rng.gen_range(0..=u64::MAX);
                let raw = format!("0x{}", &hex_digest(&seed.to_string())[..40]);
                self.address = Some(format_address(&raw));
                self.raw_address = Some(raw);
                self.balance = format!("{:.4}", rng.gen_range(0.5..10.5));
                self.is_connected = true;
                self.is_simulation = true;
                info!("simulated wallet connected: {}", self.address.as_deref().unwrap_or("?"));
                true
            }
            _ => false,
        }
    }

    /// Follows an account switch reported by the provider.
    pub fn accounts_changed(&mut self, accounts: &[String], provider: &mut dyn WalletProvider) {
        match accounts.first() {
            None => self.disconnect(),
            Some(account) if self.raw_address.as_deref() != Some(account.as_str()) => {
                self.attach(provider, account.clone());
                info!("wallet account changed: {}", self.address.as_deref().unwrap_or("?"));
            }
            Some(_) => {}
        }
    }

    /// Clears the session, including any pending simulated connection.
    pub fn disconnect(&mut self) {
        self.address = None;
        self.raw_address = None;
        self.balance = ZERO_BALANCE.to_string();
        self.is_connected = false;
        self.is_simulation = false;
        self.fallback_at = None;
        info!("wallet disconnected");
    }

    fn attach(&mut self, provider: &mut dyn WalletProvider, account: String) {
        self.balance = provider
            .balance_of(&account)
            .map(|wei| format_balance(&wei))
            .unwrap_or_else(|_| ZERO_BALANCE.to_string());
        self.address = Some(format_address(&account));
        self.raw_address = Some(account);
        self.is_connected = true;
        self.is_simulation = false;
        self.fallback_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FixedProvider {
        accounts: Vec<String>,
        balance: Result<String, WalletError>,
    }

    impl WalletProvider for FixedProvider {
        fn request_accounts(&mut self) -> Result<Vec<String>, WalletError> {
            Ok(self.accounts.clone())
        }

        fn balance_of(&mut self, _address: &str) -> Result<String, WalletError> {
            self.balance.clone()
        }
    }

    const ACCOUNT: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f8aB89";

    #[test]
    fn address_and_balance_formatting() {
        assert_eq!(format_address(ACCOUNT), "0x742d...aB89");
        assert_eq!(format_balance("0xde0b6b3a7640000"), "1.0000");
        assert_eq!(format_balance("not hex"), "0.00");
    }

    #[test]
    fn real_provider_connects_immediately() {
        let mut provider = FixedProvider {
            accounts: vec![ACCOUNT.to_string()],
            balance: Ok("0x1bc16d674ec80000".to_string()),
        };
        let mut session = WalletSession::default();
        session.connect(&mut provider, Instant::now());
        assert!(session.is_connected());
        assert!(!session.is_simulation());
        assert_eq!(session.address(), Some("0x742d...aB89"));
        assert_eq!(session.balance(), "2.0000");
    }

    #[test]
    fn missing_provider_falls_back_after_delay() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = WalletSession::new(Duration::from_secs(3));
        let t0 = Instant::now();
        session.connect(&mut NoProvider, t0);
        assert!(session.is_connecting());
        assert!(!session.is_connected());

        assert!(!session.poll(t0 + Duration::from_secs(2), &mut rng));
        assert!(session.poll(t0 + Duration::from_secs(3), &mut rng));
        assert!(session.is_connected());
        assert!(session.is_simulation());
        assert!(!session.is_connecting());

        let address = session.address().unwrap();
        assert!(address.starts_with("0x") && address.contains("..."));
        assert_eq!(address.len(), 13);
        let balance: f64 = session.balance().parse().unwrap();
        assert!((0.5..10.5).contains(&balance));
    }

    #[test]
    fn seeded_fallback_is_reproducible() {
        let t0 = Instant::now();
        let connect = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = WalletSession::new(Duration::ZERO);
            session.connect(&mut NoProvider, t0);
            assert!(session.poll(t0, &mut rng));
            (session.address().map(str::to_string), session.balance().to_string())
        };
        assert_eq!(connect(42), connect(42));
        assert_ne!(connect(42).0, connect(43).0);
    }

    #[test]
    fn disconnect_cancels_pending_fallback() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = WalletSession::new(Duration::from_secs(3));
        let t0 = Instant::now();
        session.connect(&mut NoProvider, t0);
        session.disconnect();
        assert!(!session.poll(t0 + Duration::from_secs(10), &mut rng));
        assert!(!session.is_connected());
        assert_eq!(session.balance(), "0.00");
    }

    #[test]
    fn account_switch_and_removal() {
        let mut provider = FixedProvider {
            accounts: vec![ACCOUNT.to_string()],
            balance: Err(WalletError::Rejected("denied".into())),
        };
        let mut session = WalletSession::default();
        session.connect(&mut provider, Instant::now());
        assert_eq!(session.balance(), "0.00");

        let other = "0x1111111111111111111111111111111111112222".to_string();
        session.accounts_changed(std::slice::from_ref(&other), &mut provider);
        assert_eq!(session.address(), Some("0x1111...2222"));

        session.accounts_changed(&[], &mut provider);
        assert!(!session.is_connected());
        assert_eq!(session.address(), None);
    }
}
