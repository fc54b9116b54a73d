//! Footer Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::utils::constants::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <p class="footer-brand">{APP_NAME}" - a self-custodial retirement fund"</p>
            <p class="footer-links">
                <A href={AppRoute::About.path()}>"About"</A>
                " · "
                <A href={AppRoute::Register.path()}>"Get started"</A>
            </p>
        </footer>
    }
}
