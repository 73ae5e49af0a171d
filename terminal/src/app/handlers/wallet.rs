//! # Wallet Handlers

use shared::{format_amount, parse_amount, DepositRequest, WalletResponse};

use crate::app::App;
use crate::cli::DepositArgs;
use crate::core::error::Result;
use crate::ui::{print_field, print_success};

pub(crate) async fn handle_deposit(app: &App, args: DepositArgs) -> Result<()> {
    let amount = parse_amount(&args.amount)?;
    let response = app
        .api
        .deposit(DepositRequest { amount })
        .await?
        .into_data()?;

    app.store.set_balance(response.balance_after);
    show_transaction(&response);
    Ok(())
}

pub(crate) async fn handle_withdraw_all(app: &App) -> Result<()> {
    let response = app.api.withdraw_all().await?.into_data()?;

    app.store.set_balance(response.balance_after);
    show_transaction(&response);
    Ok(())
}

fn show_transaction(response: &WalletResponse) {
    let headline = if response.message.is_empty() {
        format!("{} successful", response.transaction_type.label())
    } else {
        response.message.clone()
    };
    print_success(&headline);
    print_field("Amount", &format_amount(response.amount));
    print_field("Before", &format_amount(response.balance_before));
    print_field("Balance", &format_amount(response.balance_after));
}
