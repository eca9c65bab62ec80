// src/wallet.rs
//! Simulated wallet connection
//!
//! No keys, no handshake: connecting picks a network from a fixed table
//! and makes up an address that looks right for it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CredzError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Phantom,
    MetaMask,
    Coinbase,
    Here,
    WalletConnect,
}

impl Provider {
    /// Options offered by the connect prompt, in display order
    pub fn all() -> &'static [Provider] {
        use Provider::*;
        &[Phantom, MetaMask, Coinbase, Here, WalletConnect]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phantom => "Phantom",
            Self::MetaMask => "MetaMask",
            Self::Coinbase => "Coinbase",
            Self::Here => "Here",
            Self::WalletConnect => "WalletConnect",
        }
    }

    /// Label shown on the prompt button
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Coinbase => "Coinbase Wallet",
            Self::Here => "Here Wallet",
            other => other.as_str(),
        }
    }

    /// Network this provider is shown on. Unmapped providers use Ethereum.
    pub fn network(&self) -> Network {
        match self {
            Self::Phantom => Network::Solana,
            _ => Network::Ethereum,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = CredzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "phantom" => Ok(Self::Phantom),
            "metamask" => Ok(Self::MetaMask),
            "coinbase" | "coinbasewallet" => Ok(Self::Coinbase),
            "here" | "herewallet" => Ok(Self::Here),
            "walletconnect" => Ok(Self::WalletConnect),
            _ => Err(CredzError::UnknownProvider(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Solana,
    Ethereum,
    Base,
    #[serde(rename = "NEAR")]
    Near,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solana => "Solana",
            Self::Ethereum => "Ethereum",
            Self::Base => "Base",
            Self::Near => "NEAR",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletState {
    pub is_connected: bool,
    pub provider: Option<Provider>,
    pub address: Option<String>,
    pub network: Option<Network>,
}

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const HEX: &[u8] = b"0123456789ABCDEF";

fn random_chars<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

/// Made-up display address in the provider's usual shape
pub fn generate_address<R: Rng + ?Sized>(provider: Provider, rng: &mut R) -> String {
    match provider {
        Provider::Phantom => format!("8xP...{}", random_chars(rng, BASE36, 4)),
        _ => format!(
            "0x{}...{}",
            random_chars(rng, HEX, 4),
            random_chars(rng, HEX, 4)
        ),
    }
}

/// Connect to `provider`. Always succeeds.
pub fn connect<R: Rng + ?Sized>(provider: Provider, rng: &mut R) -> WalletState {
    let address = generate_address(provider, rng);
    let network = provider.network();
    info!("[WALLET] Connected {} on {} as {}", provider, network, address);
    WalletState {
        is_connected: true,
        provider: Some(provider),
        address: Some(address),
        network: Some(network),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_disconnected() {
        let state = WalletState::default();
        assert!(!state.is_connected);
        assert!(state.provider.is_none());
        assert!(state.network.is_none());
    }

    #[test]
    fn test_phantom_address_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let state = connect(Provider::Phantom, &mut rng);
        let address = state.address.unwrap();
        assert!(address.starts_with("8xP..."));
        assert_eq!(address.len(), 10);
        assert!(address[6..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        assert_eq!(state.network, Some(Network::Solana));
    }

    #[test]
    fn test_evm_address_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for provider in [Provider::MetaMask, Provider::Coinbase, Provider::Here, Provider::WalletConnect] {
            let state = connect(provider, &mut rng);
            let address = state.address.unwrap();
            assert!(address.starts_with("0x"));
            assert_eq!(&address[6..9], "...");
            assert_eq!(address.len(), 13);
            assert_eq!(state.network, Some(Network::Ethereum));
            assert!(state.is_connected);
        }
    }

    #[test]
    fn test_same_seed_same_address() {
        let a = generate_address(Provider::MetaMask, &mut StdRng::seed_from_u64(42));
        let b = generate_address(Provider::MetaMask, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("phantom".parse::<Provider>().unwrap(), Provider::Phantom);
        assert_eq!("Coinbase Wallet".parse::<Provider>().unwrap(), Provider::Coinbase);
        assert_eq!("wallet-connect".parse::<Provider>().unwrap(), Provider::WalletConnect);
        assert!("ledger".parse::<Provider>().is_err());
    }

    #[test]
    fn test_network_serializes() {
        assert_eq!(serde_json::to_string(&Network::Near).unwrap(), "\"NEAR\"");
    }
}
