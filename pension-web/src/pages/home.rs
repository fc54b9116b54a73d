//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page-home">
            <div class="hero">
                <h1 class="hero-title">"Your retirement, on-chain"</h1>
                <p class="hero-subtitle">
                    "Save for later with a pension fund you hold yourself. Contributions go
                    straight from your wallet into the fund contract, and you can check your
                    position at any time."
                </p>
                <div class="hero-actions">
                    <A href={AppRoute::Register.path()}>
                        <span class="btn">"Register"</span>
                    </A>
                    <A href={AppRoute::Contribute.path()}>
                        <span class="btn btn-secondary">"Contribute"</span>
                    </A>
                </div>
            </div>

            <div class="card-grid">
                <div class="card">
                    <h2 class="card-title">"1. Connect"</h2>
                    <p>"Use the button in the top right to connect an Ethereum wallet."</p>
                </div>
                <div class="card">
                    <h2 class="card-title">"2. Register"</h2>
                    <p>"Link your wallet to a pension account."</p>
                </div>
                <div class="card">
                    <h2 class="card-title">"3. Track"</h2>
                    <p>
                        "See your account on "
                        <A href={AppRoute::MyPension.path()}>"My Pension"</A>
                        "."
                    </p>
                </div>
            </div>
        </section>
    }
}
