//! Reactive state shared through Leptos context

pub mod loading;
pub mod wallet;
