//! Browser Wallet Integration via wasm-bindgen
//!
//! Talks to the EIP-1193 provider that wallet extensions (MetaMask, Rabby,
//! Coinbase Wallet, ...) inject as `window.ethereum`. Only account access and
//! network detection live here; balances and pension contracts are handled
//! elsewhere.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::utils::constants::SUPPORTED_NETWORKS;

// ============================================================================
// PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function ethereumRequest(args) {
    if (!window.ethereum) {
        throw 'No Ethereum provider found';
    }
    try {
        return await window.ethereum.request(args);
    } catch (error) {
        // EIP-1193 errors are plain objects; hand Rust a string
        if (error && error.code === 4001) {
            throw 'Request rejected by user';
        }
        throw (error && error.message) ? error.message : String(error);
    }
}
")]
extern "C" {
    /// Whether an injected provider is present
    fn hasEthereumProvider() -> bool;

    /// Forward a JSON-RPC request to the injected provider
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(args: JsValue) -> Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Errors surfaced by the wallet service.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("No browser wallet found. Install MetaMask or another Ethereum wallet.")]
    NoProvider,

    #[error("Wallet request failed: {0}")]
    Rejected(String),

    #[error("Wallet returned no accounts")]
    NoAccounts,

    #[error("Unexpected wallet response: {0}")]
    Malformed(String),

    #[error("Invalid chain id: {0}")]
    InvalidChainId(String),
}

/// A connected account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletAccount {
    pub address: String,
    pub chain_id: u64,
}

impl WalletAccount {
    pub fn network_name(&self) -> &'static str {
        network_name(self.chain_id)
    }
}

/// Wallet connection state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected { account: WalletAccount },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn account(&self) -> Option<&WalletAccount> {
        match self {
            WalletState::Connected { account } => Some(account),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
}

async fn request(method: &str) -> Result<JsValue, WalletError> {
    let args = serde_wasm_bindgen::to_value(&RpcRequest { method })
        .map_err(|e| WalletError::Malformed(e.to_string()))?;

    ethereumRequest(args).await.map_err(|e| {
        WalletError::Rejected(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    })
}

/// Whether a browser wallet is installed.
pub fn is_wallet_installed() -> bool {
    hasEthereumProvider()
}

/// Ask the wallet for account access and read the active network.
pub async fn connect_wallet() -> Result<WalletAccount, WalletError> {
    if !is_wallet_installed() {
        return Err(WalletError::NoProvider);
    }

    let accounts = request("eth_requestAccounts").await?;
    let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts)
        .map_err(|e| WalletError::Malformed(e.to_string()))?;
    let address = select_account(&accounts)?;

    let chain_id = request("eth_chainId").await?;
    let chain_id = chain_id
        .as_string()
        .ok_or_else(|| WalletError::Malformed("eth_chainId did not return a string".to_string()))?;
    let chain_id = parse_chain_id(&chain_id)?;

    log::info!("Wallet connected on {} ({})", network_name(chain_id), chain_id);

    Ok(WalletAccount { address, chain_id })
}

/// First account of an `eth_requestAccounts` response.
pub fn select_account(accounts: &[String]) -> Result<String, WalletError> {
    let first = accounts.first().ok_or(WalletError::NoAccounts)?;
    if !shared::utils::is_hex_address(first) {
        return Err(WalletError::Malformed(format!("not an account address: {}", first)));
    }
    Ok(first.clone())
}

/// Parse an `eth_chainId` value: `0x`-prefixed hex, or plain decimal.
pub fn parse_chain_id(raw: &str) -> Result<u64, WalletError> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| WalletError::InvalidChainId(raw.to_string()))
}

/// Human readable network name for a chain id.
pub fn network_name(chain_id: u64) -> &'static str {
    SUPPORTED_NETWORKS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown network")
}
