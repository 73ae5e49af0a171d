//! # Game Handlers
//!
//! Balance, spins and bet history.

use colored::Colorize;
use shared::{
    format_amount, format_reels, validate_amount, BetRecordsRequest, SpinRequest, SpinResult,
};

use crate::app::App;
use crate::cli::{RecordsArgs, SpinArgs};
use crate::core::error::Result;
use crate::ui::{print_field, records_table};

pub(crate) async fn handle_balance(app: &App) -> Result<()> {
    let balance = app.store.refresh_balance().await?;
    print_field("Balance", &format_amount(balance));
    Ok(())
}

/// Spin `count` times in a row, stopping at the first failure.
pub(crate) async fn handle_spin(app: &App, args: SpinArgs) -> Result<()> {
    let amount = validate_amount(args.amount)?;
    let game_code = app.config.game_code.as_str();

    let mut total_bet = 0.0;
    let mut total_win = 0.0;
    for _ in 0..args.count {
        let result = app
            .api
            .spin(SpinRequest { amount }, game_code)
            .await?
            .into_data()?;

        app.store.set_balance(result.balance_after);
        total_bet += result.bet_amount;
        total_win += result.win_amount;
        show_spin(&result);
    }

    if args.count > 1 {
        println!();
        print_field("Spins", &args.count.to_string());
        print_field("Total bet", &format_amount(total_bet));
        print_field("Total win", &format_amount(total_win));
    }
    print_field("Balance", &format_amount(app.store.balance()));
    Ok(())
}

pub(crate) async fn handle_records(app: &App, args: RecordsArgs) -> Result<()> {
    let request = BetRecordsRequest {
        page: args.page.max(1),
        size: args.size.max(1),
        game_code: app.config.game_filter.clone(),
        start_time: args.from,
        end_time: args.to,
    };

    let page = app.api.get_records(request).await?.into_data()?;
    println!("{}", records_table(&page));
    Ok(())
}

fn show_spin(result: &SpinResult) {
    let reels = format!("[ {} ]", format_reels(&result.result));
    if result.is_win {
        println!(
            "{}  {} {}",
            reels.bold(),
            "WIN".green().bold(),
            format!("+{}", format_amount(result.win_amount)).green()
        );
    } else {
        println!("{}  {}", reels.bold(), "no win".dimmed());
    }
    if !result.message.is_empty() {
        println!("   {}", result.message.dimmed());
    }
}
