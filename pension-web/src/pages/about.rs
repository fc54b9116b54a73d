//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page-about">
            <div class="card about-container">
                <h1 class="card-title">"About"</h1>

                <p>
                    "This is a self-custodial pension fund. There is no account manager and no
                    paperwork: your wallet is your account, and every contribution is a
                    transaction you sign yourself."
                </p>

                <h2>"How it works"</h2>
                <ul>
                    <li>"Register once to link your wallet address to a pension account"</li>
                    <li>"Contribute whenever you like, in any amount"</li>
                    <li>"Follow your account from the My Pension page"</li>
                </ul>

                <h2>"Supported networks"</h2>
                <p>
                    "Any EIP-1193 browser wallet works. The header shows which network your
                    wallet is connected to."
                </p>
            </div>
        </section>
    }
}
