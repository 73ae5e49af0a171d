//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::{format_amount, Route};

use crate::state::user::use_user_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let user = use_user_context();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            user.do_logout().await;
            navigate(Route::Login.path(), Default::default());
        });
    };

    view! {
        <nav>
            <div class="nav-inner">
                <A href=Route::Game.path() attr:class="nav-title">
                    "🎰 Slots"
                </A>
                <Show when=move || user.is_logged_in()>
                    <div class="nav-links">
                        <A href=Route::Game.path()>"Game"</A>
                        <A href=Route::Wallet.path()>"Wallet"</A>
                        <A href=Route::Records.path()>"Records"</A>
                        <A href=Route::Statistics.path()>"Statistics"</A>
                    </div>
                    <div class="nav-user">
                        <span class="nav-username">{move || user.username()}</span>
                        <span class="nav-balance">{move || format_amount(user.balance())}</span>
                        <button class="btn btn-small" on:click=on_logout.clone()>"Logout"</button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
