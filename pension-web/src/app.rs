//! Pension Web App - Leptos Frontend
//!
//! Root composition: router, persistent header (with the wallet widget) and
//! footer, the loading indicator, and the routed page slot.

use leptos::prelude::*;
use leptos_router::{components::Router, hooks::use_location};

use crate::components::{Footer, Header, Loading, WalletWidget};
use crate::layout::{Content, Region, ShellFrame, Visit, SHELL_LAYOUT};
use crate::pages::route_view;
use crate::state::loading::provide_loading_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    // Each mounted app owns its contexts and its router
    provide_wallet_context();
    provide_loading_context();

    view! {
        <Router>
            <Shell/>
        </Router>
    }
}

/// Persistent regions plus one routed slot. Only the slot follows the path.
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let frame = Memo::new(move |_| ShellFrame::for_path(&location.pathname.get()));

    Effect::new(move |previous: Option<Visit>| {
        let visit = Visit::new(&location.pathname.get());
        if visit.is_new_miss(previous.as_ref()) {
            // Unmatched paths intentionally render an empty slot
            log::warn!("No page for path '{}'", visit.path);
        }
        if let Some(previous) = &previous {
            let transition = previous.frame.transition_to(&visit.frame);
            if !transition.is_noop() {
                log::debug!(
                    "Route change: {:?} -> {:?}",
                    transition.unmounted,
                    transition.mounted
                );
            }
        }
        visit
    });

    view! {
        <div class="app-container">
            {SHELL_LAYOUT
                .into_iter()
                .map(|region| render_region(region, frame))
                .collect_view()}
        </div>
    }
}

fn render_region(region: Region, frame: Memo<ShellFrame>) -> AnyView {
    match region {
        Region::Header { content } => view! {
            <Header>{render_content(content, frame)}</Header>
        }
        .into_any(),
        Region::Main { content } => view! {
            <main>
                {content
                    .into_iter()
                    .map(|content| render_content(content, frame))
                    .collect_view()}
            </main>
        }
        .into_any(),
        Region::Footer => view! { <Footer/> }.into_any(),
    }
}

fn render_content(content: Content, frame: Memo<ShellFrame>) -> AnyView {
    match content {
        Content::Wallet => view! { <WalletWidget/> }.into_any(),
        Content::Loading => view! { <Loading/> }.into_any(),
        Content::Slot => view! { {move || frame.get().slot.map(route_view)} }.into_any(),
    }
}
