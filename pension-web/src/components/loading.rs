//! Loading Indicator
//!
//! Always mounted in the shell. Shows itself while [`LoadingContext`] reports
//! pending work, and removes the static HTML splash once the app is up.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::state::loading::use_loading_context;
use crate::utils::constants::{SPLASH_ELEMENT_ID, SPLASH_RETRY_MS};

#[component]
pub fn Loading() -> impl IntoView {
    let loading = use_loading_context();

    // Effects run after the component is in the DOM
    Effect::new(move || {
        if !hide_splash() {
            // Trunk may inject the splash after the first paint; try once more
            leptos::task::spawn_local(async move {
                TimeoutFuture::new(SPLASH_RETRY_MS).await;
                if !hide_splash() {
                    log::debug!("Splash element '{}' not present", SPLASH_ELEMENT_ID);
                }
            });
        }
    });

    view! {
        <div
            class="pension-loading"
            class:hidden=move || !loading.is_loading()
            role="status"
            aria-live="polite"
        >
            <div class="spinner"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Hide the splash element from `index.html`. Returns whether it was found.
fn hide_splash() -> bool {
    let Some(splash) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(SPLASH_ELEMENT_ID))
    else {
        return false;
    };

    if let Err(e) = splash.class_list().add_1("hidden") {
        log::warn!("Failed to add 'hidden' class to splash: {:?}", e);
    }
    if let Err(e) = splash.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to set splash style: {:?}", e);
    }

    log::debug!("Splash screen hidden");
    true
}
