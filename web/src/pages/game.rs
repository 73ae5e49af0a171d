//! Game Page - spin the reels

use leptos::prelude::*;
use shared::{
    format_amount, validate_amount, ApiResponse, SpinRequest, SpinResult, DEFAULT_GAME_CODE,
};

use crate::api;
use crate::state::user::use_user_context;
use crate::utils::constants::{BET_OPTIONS, DEFAULT_BET};

const HIDDEN_SYMBOL: &str = "❓";

#[component]
pub fn GamePage() -> impl IntoView {
    let user = use_user_context();

    let (bet, set_bet) = signal(DEFAULT_BET);
    let (reels, set_reels) = signal(vec![HIDDEN_SYMBOL.to_string(); 3]);
    let (spinning, set_spinning) = signal(false);
    let (last, set_last) = signal(None::<SpinResult>);

    leptos::task::spawn_local(async move {
        user.update_balance().await;
    });

    let on_spin = move |_| {
        if spinning.get_untracked() {
            return;
        }
        let amount = match validate_amount(bet.get_untracked()) {
            Ok(amount) => amount,
            Err(e) => {
                user.toasts.error(e.to_string());
                return;
            }
        };

        set_spinning.set(true);
        leptos::task::spawn_local(async move {
            let request = SpinRequest { amount };
            match api::game::spin(&user.api(), &request, DEFAULT_GAME_CODE).await {
                Ok(ApiResponse {
                    data: Some(result), ..
                }) => {
                    set_reels.set(result.result.clone());
                    user.set_balance(result.balance_after);
                    if result.is_win {
                        user.toasts
                            .success(format!("You won {}!", format_amount(result.win_amount)));
                    }
                    set_last.set(Some(result));
                }
                Ok(_) => {}
                Err(e) => log::error!("Spin error: {}", e),
            }
            set_spinning.set(false);
        });
    };

    view! {
        <div class="page game-page">
            <div class="card balance-card">
                <span class="muted">"Balance"</span>
                <span class="balance-value">{move || format_amount(user.balance())}</span>
            </div>

            <div class="card slot-machine">
                <div class="reels" class:spinning=spinning>
                    <For
                        each=move || reels.get().into_iter().enumerate()
                        key=|(index, symbol)| (*index, symbol.clone())
                        children=|(_, symbol)| view! { <div class="reel">{symbol}</div> }
                    />
                </div>

                <div class="bet-options">
                    {BET_OPTIONS
                        .iter()
                        .map(|&option| {
                            view! {
                                <button
                                    class="btn btn-outline"
                                    class:active=move || bet.get() == option
                                    on:click=move |_| set_bet.set(option)
                                >
                                    {format_amount(option)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <label class="bet-input">
                    "Bet amount"
                    <input
                        type="number"
                        min="0.01"
                        step="0.01"
                        prop:value=move || bet.get().to_string()
                        on:input=move |ev| {
                            set_bet.set(event_target_value(&ev).parse().unwrap_or(0.0))
                        }
                    />
                </label>

                <button class="btn btn-spin" on:click=on_spin disabled=spinning>
                    {move || if spinning.get() { "Spinning..." } else { "SPIN" }}
                </button>
            </div>

            {move || {
                last.get()
                    .map(|result| {
                        view! {
                            <div class="card last-result" class:win=result.is_win>
                                <h2>{if result.is_win { "WIN" } else { "No win" }}</h2>
                                <p>"Bet: " {format_amount(result.bet_amount)}</p>
                                <p>"Win: " {format_amount(result.win_amount)}</p>
                                <p>
                                    "Balance: " {format_amount(result.balance_before)} " → "
                                    {format_amount(result.balance_after)}
                                </p>
                                <p class="muted">{result.message.clone()}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
