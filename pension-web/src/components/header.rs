//! Header Component
//!
//! Brand, one link per route, and a slot on the right for caller content
//! (the wallet widget in the app shell).

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::utils::constants::APP_NAME;

#[component]
pub fn Header(children: Children) -> impl IntoView {
    view! {
        <header class="app-header">
            <nav class="app-nav">
                <A href={AppRoute::Home.path()}>
                    <span class="nav-title">{APP_NAME}</span>
                </A>
                <ul class="nav-links">
                    {AppRoute::ALL
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li class="nav-link">
                                    <A href={route.path()}>{route.label()}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-wallet">{children()}</div>
            </nav>
        </header>
    }
}
