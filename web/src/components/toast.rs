//! Toast stack, top right

use leptos::prelude::*;

use crate::state::toast::use_toasts;

#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.list()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.class())
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
