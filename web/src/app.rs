//! Slot Machine Web App - Leptos Frontend
//!
//! Routes are declared here; every page sits behind [`Guarded`], which applies
//! the shared navigation rules against the current session. `/` has no view
//! of its own and always forwards.

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use shared::routes::{navigate, Navigation, Route as Page};

use crate::components::{Navbar, Toasts};
use crate::pages::{
    GamePage, LoginPage, NotFound, RecordsPage, RegisterPage, StatisticsPage, WalletPage,
};
use crate::state::toast::provide_toast_context;
use crate::state::user::{provide_user_context, use_user_context};

#[component]
pub fn App() -> impl IntoView {
    let toasts = provide_toast_context();
    provide_user_context(toasts);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Toasts/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=|| view! { <Guarded page=Page::Root/> }/>
                        <Route
                            path=path!("/login")
                            view=|| view! { <Guarded page=Page::Login><LoginPage/></Guarded> }
                        />
                        <Route
                            path=path!("/register")
                            view=|| view! { <Guarded page=Page::Register><RegisterPage/></Guarded> }
                        />
                        <Route
                            path=path!("/game")
                            view=|| view! { <Guarded page=Page::Game><GamePage/></Guarded> }
                        />
                        <Route
                            path=path!("/wallet")
                            view=|| view! { <Guarded page=Page::Wallet><WalletPage/></Guarded> }
                        />
                        <Route
                            path=path!("/statistics")
                            view=|| view! { <Guarded page=Page::Statistics><StatisticsPage/></Guarded> }
                        />
                        <Route
                            path=path!("/records")
                            view=|| view! { <Guarded page=Page::Records><RecordsPage/></Guarded> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Render `children` when the guard lets the player in, otherwise redirect.
#[component]
fn Guarded(page: Page, #[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let user = use_user_context();

    move || match navigate(page, user.is_logged_in()) {
        Navigation::Proceed => match &children {
            Some(children) => children().into_any(),
            None => ().into_any(),
        },
        Navigation::Redirect(target) => {
            log::info!("Redirecting {} -> {}", page.path(), target.path());
            view! { <Redirect path=target.path()/> }.into_any()
        }
    }
}
