//! Wallet Page - deposit and withdraw

use leptos::prelude::*;
use shared::{format_amount, parse_amount, ApiResponse, DepositRequest, WalletResponse};

use crate::api;
use crate::state::user::{use_user_context, UserContext};
use crate::services::http::ApiResult;
use crate::utils::constants::DEPOSIT_OPTIONS;

#[component]
pub fn WalletPage() -> impl IntoView {
    let user = use_user_context();

    let (amount, set_amount) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (last, set_last) = signal(None::<WalletResponse>);

    leptos::task::spawn_local(async move {
        user.update_balance().await;
    });

    let on_deposit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let amount = match parse_amount(&amount.get_untracked()) {
            Ok(amount) => amount,
            Err(e) => {
                user.toasts.error(e.to_string());
                return;
            }
        };

        set_busy.set(true);
        leptos::task::spawn_local(async move {
            let result = api::wallet::deposit(&user.api(), &DepositRequest { amount }).await;
            if let Some(response) = settle(user, result) {
                set_amount.set(String::new());
                set_last.set(Some(response));
            }
            set_busy.set(false);
        });
    };

    let on_withdraw_all = move |_| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        leptos::task::spawn_local(async move {
            let result = api::wallet::withdraw_all(&user.api()).await;
            if let Some(response) = settle(user, result) {
                set_last.set(Some(response));
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page wallet-page">
            <div class="card balance-card">
                <span class="muted">"Balance"</span>
                <span class="balance-value">{move || format_amount(user.balance())}</span>
            </div>

            <form class="card" on:submit=on_deposit>
                <h2 class="card-title">"Deposit"</h2>
                <div class="bet-options">
                    {DEPOSIT_OPTIONS
                        .iter()
                        .map(|&option| {
                            view! {
                                <button
                                    type="button"
                                    class="btn btn-outline"
                                    on:click=move |_| set_amount.set(option.to_string())
                                >
                                    {format_amount(option)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Amount"
                    prop:value=amount
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=busy>"Deposit"</button>
            </form>

            <div class="card">
                <h2 class="card-title">"Withdraw"</h2>
                <p class="muted">"Withdraw your whole balance."</p>
                <button class="btn btn-danger" on:click=on_withdraw_all disabled=busy>
                    "Withdraw all"
                </button>
            </div>

            {move || {
                last.get()
                    .map(|response| {
                        view! {
                            <div class="card last-result">
                                <h2>{response.transaction_type.label()}</h2>
                                <p>"Amount: " {format_amount(response.amount)}</p>
                                <p>
                                    "Balance: " {format_amount(response.balance_before)} " → "
                                    {format_amount(response.balance_after)}
                                </p>
                                <p class="muted">{response.message.clone()}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Mirror the new balance of a successful transaction.
fn settle(user: UserContext, result: ApiResult<WalletResponse>) -> Option<WalletResponse> {
    match result {
        Ok(ApiResponse {
            data: Some(response),
            ..
        }) => {
            user.set_balance(response.balance_after);
            let message = if response.message.is_empty() {
                format!("{} successful", response.transaction_type.label())
            } else {
                response.message.clone()
            };
            user.toasts.success(message);
            Some(response)
        }
        Ok(_) => None,
        Err(e) => {
            log::error!("Wallet error: {}", e);
            None
        }
    }
}
