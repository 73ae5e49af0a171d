//! Login Page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::{LoginRequest, Route};

use crate::state::user::use_user_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let user = use_user_context();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let request = LoginRequest {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        set_loading.set(true);
        leptos::task::spawn_local(async move {
            if user.do_login(request).await {
                navigate(Route::Game.path(), Default::default());
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="card auth-card" on:submit=on_submit>
                <h1 class="card-title">"Login"</h1>
                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" type="submit" disabled=loading>
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="auth-switch">
                    "No account yet? " <A href=Route::Register.path()>"Register"</A>
                </p>
            </form>
        </div>
    }
}
