//! My Pension Page - account summary for the connected wallet

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn MyPensionPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <section class="page page-my-pension">
            <div class="card">
                <h1 class="card-title">"My Pension"</h1>

                {move || match wallet_ctx.account() {
                    Some(account) => view! {
                        <div class="account-summary">
                            <p class="label">"Account"</p>
                            <p class="mono">{account.address.clone()}</p>

                            <p class="label">"Network"</p>
                            <p>{account.network_name()}" (chain "{account.chain_id}")"</p>

                            <A href={AppRoute::Contribute.path()}>
                                <span class="btn">"Make a contribution"</span>
                            </A>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="empty-state">
                            <p>"Connect your wallet to see your pension account."</p>
                            <p>
                                "New here? "
                                <A href={AppRoute::Register.path()}>"Register"</A>
                                " first."
                            </p>
                        </div>
                    }.into_any(),
                }}
            </div>
        </section>
    }
}
