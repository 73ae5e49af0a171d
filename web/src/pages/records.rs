//! Records Page - paged bet history

use leptos::prelude::*;
use shared::{
    format_amount, format_reels, format_timestamp_millis, ApiResponse, BetRecord,
    BetRecordsRequest, PageData,
};

use crate::api;
use crate::state::user::use_user_context;
use crate::utils::constants::RECORDS_PAGE_SIZE;

#[component]
pub fn RecordsPage() -> impl IntoView {
    let user = use_user_context();

    let (page, set_page) = signal(1u32);
    let (data, set_data) = signal(None::<PageData<BetRecord>>);
    let (loading, set_loading) = signal(false);

    let load = move |target: u32| {
        set_loading.set(true);
        leptos::task::spawn_local(async move {
            let request = BetRecordsRequest {
                page: target,
                size: RECORDS_PAGE_SIZE,
                ..Default::default()
            };
            match api::game::get_records(&user.api(), &request).await {
                Ok(ApiResponse {
                    data: Some(records), ..
                }) => {
                    set_page.set(records.page.max(1));
                    set_data.set(Some(records));
                }
                Ok(_) => set_data.set(None),
                Err(e) => log::error!("Bet records error: {}", e),
            }
            set_loading.set(false);
        });
    };

    load(1);

    let has_previous = move || data.with(|d| d.as_ref().is_some_and(|d| d.has_previous()));
    let has_next = move || data.with(|d| d.as_ref().is_some_and(|d| d.has_next()));

    view! {
        <div class="page records-page">
            <div class="card">
                <h2 class="card-title">"Bet history"</h2>
                {move || match data.get() {
                    Some(records) if !records.list.is_empty() => {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"#"</th>
                                        <th>"Time"</th>
                                        <th>"Game"</th>
                                        <th>"Reels"</th>
                                        <th>"Bet"</th>
                                        <th>"Win"</th>
                                        <th>"Result"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {records
                                        .list
                                        .into_iter()
                                        .map(|record| {
                                            view! {
                                                <tr class:win=record.is_win>
                                                    <td>{record.id}</td>
                                                    <td>{format_timestamp_millis(record.created_at)}</td>
                                                    <td>{record.game_code.clone()}</td>
                                                    <td>{format_reels(&record.result)}</td>
                                                    <td>{format_amount(record.bet_amount)}</td>
                                                    <td>{format_amount(record.win_amount)}</td>
                                                    <td>{if record.is_win { "WIN" } else { "LOSE" }}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                            <p class="muted">
                                {format!(
                                    "Page {}/{} · {} bets total",
                                    records.page,
                                    records.total_pages.max(1),
                                    records.total,
                                )}
                            </p>
                        }
                            .into_any()
                    }
                    _ => view! { <p class="muted">"No bets found."</p> }.into_any(),
                }}
                <div class="pager">
                    <button
                        class="btn btn-outline"
                        disabled=move || loading.get() || !has_previous()
                        on:click=move |_| load(page.get_untracked().saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    <button
                        class="btn btn-outline"
                        disabled=move || loading.get() || !has_next()
                        on:click=move |_| load(page.get_untracked() + 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}
