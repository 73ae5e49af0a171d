//! # RTP Handlers
//!
//! Read-only statistics views plus the admin reset.

use colored::Colorize;
use shared::{format_amount, format_percent, format_signed_percent, RtpStatistics};

use crate::app::App;
use crate::cli::{RtpArgs, RtpResetArgs};
use crate::core::error::Result;
use crate::ui::{print_field, print_success, rtp_table};

pub(crate) async fn handle_rtp(app: &App, args: RtpArgs) -> Result<()> {
    if args.all {
        let stats = app.api.get_all_games_rtp_statistics().await?.into_data()?;
        println!("{}", rtp_table(&stats.games));
        println!();
        show_statistics(&stats.system_rtp);
        return Ok(());
    }

    let game_code = args.game_code.as_deref().unwrap_or(&app.config.game_code);
    let stats = app
        .api
        .get_rtp_statistics(game_code)
        .await?
        .into_data()?
        .checked()?;
    show_statistics(&stats);
    Ok(())
}

pub(crate) async fn handle_rtp_reset(app: &App, args: RtpResetArgs) -> Result<()> {
    app.api.reset_rtp_statistics(&args.game_code).await?;
    print_success(&format!("RTP statistics of {} reset", args.game_code));
    Ok(())
}

fn show_statistics(stats: &RtpStatistics) {
    println!("{}", stats.title().bold());
    print_field("Target RTP", &format_percent(stats.target_rtp));
    print_field("Actual RTP", &format_percent(stats.actual_rtp));
    print_field("Difference", &format_signed_percent(stats.rtp_difference));
    if let Some(status) = stats.rtp_status {
        print_field("Status", status.label());
    }
    print_field("Bets", &stats.total_bet_count.to_string());
    print_field("Total bet", &format_amount(stats.total_bet_amount));
    print_field("Total win", &format_amount(stats.total_win_amount));
    print_field("Average bet", &format_amount(stats.average_bet));
    print_field("Average win", &format_amount(stats.average_win));
}
