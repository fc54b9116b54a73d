//! Page modules - one per route

pub mod about;
pub mod contribute;
pub mod home;
pub mod my_pension;
pub mod register;

pub use about::AboutPage;
pub use contribute::ContributePage;
pub use home::HomePage;
pub use my_pension::MyPensionPage;
pub use register::RegisterPage;

use leptos::prelude::*;

use crate::routes::AppRoute;

/// The page component for a route.
pub fn route_view(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage/> }.into_any(),
        AppRoute::About => view! { <AboutPage/> }.into_any(),
        AppRoute::MyPension => view! { <MyPensionPage/> }.into_any(),
        AppRoute::Contribute => view! { <ContributePage/> }.into_any(),
        AppRoute::Register => view! { <RegisterPage/> }.into_any(),
    }
}
