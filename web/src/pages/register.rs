//! Register Page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::{RegisterRequest, Route};

use crate::state::user::use_user_context;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let user = use_user_context();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        if password.get_untracked() != confirm.get_untracked() {
            user.toasts.error("Passwords do not match");
            return;
        }
        let request = RegisterRequest {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        set_loading.set(true);
        leptos::task::spawn_local(async move {
            if user.do_register(request).await {
                navigate(Route::Game.path(), Default::default());
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="card auth-card" on:submit=on_submit>
                <h1 class="card-title">"Register"</h1>
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
                        autocomplete="new-password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=confirm
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" type="submit" disabled=loading>
                    {move || if loading.get() { "Registering..." } else { "Register" }}
                </button>
                <p class="auth-switch">
                    "Already registered? " <A href=Route::Login.path()>"Login"</A>
                </p>
            </form>
        </div>
    }
}
