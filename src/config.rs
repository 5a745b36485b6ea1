use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
const DEFAULT_CART_API_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_MESSAGE_TTL_SECS: u64 = 3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("STORE_CONTRACT_ADDRESS is not a valid address: {0}")]
    InvalidAddress(String),
    #[error("STORE_WALLET_KEY is not a valid private key")]
    InvalidWalletKey,
    #[error("STORE_MESSAGE_TTL_SECS is not a number of seconds: {0}")]
    InvalidMessageTtl(String),
}

/// Application configuration
///
/// Values come from the environment; in dev a `.env` file is loaded first.
#[derive(Clone, Debug)]
pub struct Config {
    /// JSON-RPC endpoint of the chain hosting the course contract
    pub rpc_url: Url,
    /// Address of the course contract
    pub contract_address: Address,
    /// Signer for the buyer's wallet. None means no wallet is connected.
    pub wallet: Option<PrivateKeySigner>,
    /// Base URL of the cart API
    pub cart_api_url: Url,
    /// How long transient status messages stay visible
    pub message_ttl: Duration,
}

impl Config {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            info!("Loaded .env file");
        } else {
            info!("No .env file found, using process environment");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let rpc_url = parse_url(
            "STORE_RPC_URL",
            get("STORE_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
        )?;

        let contract_address = get("STORE_CONTRACT_ADDRESS")
            .ok_or(ConfigError::Missing("STORE_CONTRACT_ADDRESS"))?;
        let contract_address = contract_address
            .trim()
            .parse::<Address>()
            .map_err(|_| ConfigError::InvalidAddress(contract_address.clone()))?;

        let wallet = get("STORE_WALLET_KEY")
            .map(|key| {
                key.trim()
                    .parse::<PrivateKeySigner>()
                    .map_err(|_| ConfigError::InvalidWalletKey)
            })
            .transpose()?;

        let cart_api_url = parse_url(
            "STORE_CART_API_URL",
            get("STORE_CART_API_URL").unwrap_or_else(|| DEFAULT_CART_API_URL.to_string()),
        )?;

        let message_ttl = match get("STORE_MESSAGE_TTL_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidMessageTtl(v.clone()))?,
            None => Duration::from_secs(DEFAULT_MESSAGE_TTL_SECS),
        };

        match &wallet {
            Some(signer) => info!("Config: wallet connected as {}", signer.address()),
            None => info!("Config: no wallet configured"),
        }

        Ok(Config {
            rpc_url,
            contract_address,
            wallet,
            cart_api_url,
            message_ttl,
        })
    }

    /// Address of the connected wallet
    pub fn account(&self) -> Option<Address> {
        self.wallet.as_ref().map(|signer| signer.address())
    }
}

fn parse_url(var: &'static str, value: String) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|_| ConfigError::InvalidUrl { var, value })
}
