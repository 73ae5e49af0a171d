//! Statistics Page - RTP per game and system wide

use leptos::prelude::*;
use shared::{
    format_amount, format_percent, format_signed_percent, AllGamesRtpStatistics, ApiResponse,
    RtpStatistics, DEFAULT_GAME_CODE,
};

use crate::api;
use crate::state::user::use_user_context;

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let user = use_user_context();

    let (game_code, set_game_code) = signal(DEFAULT_GAME_CODE.to_string());
    let (single, set_single) = signal(None::<RtpStatistics>);
    let (all, set_all) = signal(None::<AllGamesRtpStatistics>);
    let (loading, set_loading) = signal(false);

    let load = move || {
        let code = game_code.get_untracked();
        set_loading.set(true);
        leptos::task::spawn_local(async move {
            let api = user.api();
            match api::rtp::get_rtp_statistics(&api, &code).await {
                Ok(ApiResponse {
                    data: Some(stats), ..
                }) => match stats.checked() {
                    Ok(stats) => set_single.set(Some(stats)),
                    Err(e) => {
                        user.toasts.error(e.to_string());
                        set_single.set(None);
                    }
                },
                Ok(_) => set_single.set(None),
                Err(e) => log::error!("RTP statistics error: {}", e),
            }
            match api::rtp::get_all_games_rtp_statistics(&api).await {
                Ok(response) => set_all.set(response.data),
                Err(e) => log::error!("All games RTP error: {}", e),
            }
            set_loading.set(false);
        });
    };

    load();

    let on_reset = move |_| {
        let code = game_code.get_untracked();
        leptos::task::spawn_local(async move {
            if api::rtp::reset_rtp_statistics(&user.api(), &code).await.is_ok() {
                user.toasts.success(format!("RTP statistics of {} reset", code));
                load();
            }
        });
    };

    view! {
        <div class="page statistics-page">
            <div class="card">
                <h2 class="card-title">"Game RTP"</h2>
                <form
                    class="inline-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        load();
                    }
                >
                    <input
                        type="text"
                        placeholder="Game code"
                        prop:value=game_code
                        on:input=move |ev| set_game_code.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=loading>"Load"</button>
                    <button class="btn btn-danger" type="button" on:click=on_reset>
                        "Reset"
                    </button>
                </form>
                {move || single.get().map(|stats| view! { <StatsPanel stats=stats/> })}
            </div>

            {move || {
                all.get()
                    .map(|all| {
                        view! {
                            <div class="card">
                                <h2 class="card-title">"All games"</h2>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Game"</th>
                                            <th>"Target"</th>
                                            <th>"Actual"</th>
                                            <th>"Diff"</th>
                                            <th>"Status"</th>
                                            <th>"Bets"</th>
                                            <th>"Total bet"</th>
                                            <th>"Total win"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {all
                                            .games
                                            .into_iter()
                                            .map(|stats| {
                                                view! {
                                                    <tr>
                                                        <td>{stats.title()}</td>
                                                        <td>{format_percent(stats.target_rtp)}</td>
                                                        <td>{format_percent(stats.actual_rtp)}</td>
                                                        <td>{format_signed_percent(stats.rtp_difference)}</td>
                                                        <td>{stats.rtp_status.map(|s| s.label()).unwrap_or("-")}</td>
                                                        <td>{stats.total_bet_count}</td>
                                                        <td>{format_amount(stats.total_bet_amount)}</td>
                                                        <td>{format_amount(stats.total_win_amount)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                                <h3>"System"</h3>
                                <StatsPanel stats=all.system_rtp/>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn StatsPanel(stats: RtpStatistics) -> impl IntoView {
    let status_class = stats
        .rtp_status
        .map(|status| format!("rtp-status rtp-{}", status.label().to_lowercase()))
        .unwrap_or_else(|| "rtp-status".to_string());

    view! {
        <div class="stats-grid">
            <div class="stat">
                <span class="muted">{stats.title()}</span>
                <span class=status_class>{stats.rtp_status.map(|s| s.label()).unwrap_or("-")}</span>
            </div>
            <div class="stat">
                <span class="muted">"Target RTP"</span>
                <span>{format_percent(stats.target_rtp)}</span>
            </div>
            <div class="stat">
                <span class="muted">"Actual RTP"</span>
                <span>{format_percent(stats.actual_rtp)}</span>
            </div>
            <div class="stat">
                <span class="muted">"Difference"</span>
                <span>{format_signed_percent(stats.rtp_difference)}</span>
            </div>
            <div class="stat">
                <span class="muted">"Bets"</span>
                <span>{stats.total_bet_count}</span>
            </div>
            <div class="stat">
                <span class="muted">"Total bet"</span>
                <span>{format_amount(stats.total_bet_amount)}</span>
            </div>
            <div class="stat">
                <span class="muted">"Total win"</span>
                <span>{format_amount(stats.total_win_amount)}</span>
            </div>
            <div class="stat">
                <span class="muted">"Average bet / win"</span>
                <span>{format_amount(stats.average_bet)} " / " {format_amount(stats.average_win)}</span>
            </div>
        </div>
    }
}
