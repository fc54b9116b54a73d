//! Contribute Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::forms::ContributionDraft;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ContributePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let (amount, set_amount) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (prepared, set_prepared) = signal(None::<ContributionDraft>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let account = wallet_ctx.account();
        match ContributionDraft::parse(&amount.get(), account.as_ref()) {
            Ok(draft) => {
                log::info!("Contribution prepared: {} from {}", draft.amount, draft.address);
                set_error.set(None);
                set_prepared.set(Some(draft));
            }
            Err(e) => {
                set_prepared.set(None);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <section class="page page-contribute">
            <div class="card form-card">
                <h1 class="card-title">"Contribute"</h1>

                <form on:submit=on_submit>
                    <label for="contribution-amount">"Amount (ETH)"</label>
                    <input
                        id="contribution-amount"
                        type="text"
                        inputmode="decimal"
                        placeholder="0.1"
                        prop:value=amount
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                    <button
                        class="btn"
                        type="submit"
                        disabled=move || !wallet_ctx.is_connected()
                    >
                        "Contribute"
                    </button>
                </form>

                <Show when=move || !wallet_ctx.is_connected()>
                    <p class="hint">"Connect your wallet to contribute."</p>
                </Show>

                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}

                {move || prepared.get().map(|draft| view! {
                    <p class="notice">
                        "Contribution of "{draft.amount}" ETH ready to send from your wallet."
                    </p>
                })}
            </div>
        </section>
    }
}
