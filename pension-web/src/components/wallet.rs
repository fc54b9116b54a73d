//! Wallet Widget - connect button / connected account badge for the header

use leptos::prelude::*;

use crate::services::wallet::{connect_wallet, WalletState};
use crate::state::loading::use_loading_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletWidget() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let loading = use_loading_context();

    let connect = move |_: leptos::ev::MouseEvent| {
        if wallet_ctx.is_connecting() {
            return;
        }
        wallet_ctx.set_connecting();
        loading.begin();

        leptos::task::spawn_local(async move {
            match connect_wallet().await {
                Ok(account) => wallet_ctx.set_connected(account),
                Err(e) => {
                    log::warn!("Wallet connection failed: {}", e);
                    wallet_ctx.set_error(&e);
                }
            }
            loading.finish();
        });
    };

    let disconnect = move |_: leptos::ev::MouseEvent| {
        log::info!("Wallet disconnected");
        wallet_ctx.disconnect();
    };

    view! {
        <div class="wallet-widget">
            {move || match wallet_ctx.wallet.get() {
                WalletState::Disconnected => view! {
                    <button class="btn" on:click=connect>"Connect Wallet"</button>
                }.into_any(),
                WalletState::Connecting => view! {
                    <button class="btn" disabled=true>"Connecting..."</button>
                }.into_any(),
                WalletState::Connected { account } => view! {
                    <div class="wallet-account" title={account.address.clone()}>
                        <span class="wallet-network">{account.network_name()}</span>
                        <span class="wallet-address">
                            {shared::utils::truncate_address(&account.address)}
                        </span>
                        <button class="btn btn-small" on:click=disconnect>"Disconnect"</button>
                    </div>
                }.into_any(),
                WalletState::Error(message) => view! {
                    <div class="wallet-error">
                        <span class="error-text">{message}</span>
                        <button class="btn btn-small" on:click=connect>"Retry"</button>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
