use leptos::prelude::*;
use leptos_router::components::A;
use shared::Route;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="center-page">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href=Route::Game.path()>
                    <span class="btn">"Back to the game"</span>
                </A>
            </div>
        </div>
    }
}
