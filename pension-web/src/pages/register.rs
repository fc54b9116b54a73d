//! Register Page - link the connected wallet to a pension account

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::forms::RegistrationDraft;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (registered, set_registered) = signal(None::<RegistrationDraft>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let account = wallet_ctx.account();
        match RegistrationDraft::parse(&name.get(), &email.get(), account.as_ref()) {
            Ok(draft) => {
                log::info!("Registration prepared for {}", draft.address);
                set_error.set(None);
                set_registered.set(Some(draft));
            }
            Err(e) => {
                set_registered.set(None);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <section class="page page-register">
            <div class="card form-card">
                <h1 class="card-title">"Register"</h1>

                <form on:submit=on_submit>
                    <label for="register-name">"Full name"</label>
                    <input
                        id="register-name"
                        type="text"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label for="register-email">"Email"</label>
                    <input
                        id="register-email"
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <button class="btn" type="submit">"Register"</button>
                </form>

                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}

                {move || registered.get().map(|draft| view! {
                    <p class="notice">
                        "Thanks "{draft.name}", your wallet "
                        {shared::utils::truncate_address(&draft.address)}
                        " is ready to be linked."
                    </p>
                })}
            </div>
        </section>
    }
}
