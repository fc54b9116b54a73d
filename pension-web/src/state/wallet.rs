//! Wallet state management

use leptos::prelude::*;
use crate::services::wallet::{WalletAccount, WalletError, WalletState};

/// Wallet context shared by the header widget and the pages
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.wallet.with(|state| matches!(state, WalletState::Connecting))
    }

    pub fn account(&self) -> Option<WalletAccount> {
        self.wallet.with(|state| state.account().cloned())
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, account: WalletAccount) {
        self.wallet.set(WalletState::Connected { account });
    }

    pub fn set_error(&self, error: &WalletError) {
        self.wallet.set(WalletState::Error(error.to_string()));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
