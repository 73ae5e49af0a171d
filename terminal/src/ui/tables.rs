//! # Table Rendering
//!
//! Tables for bet history and RTP statistics.

use shared::{
    format_amount, format_percent, format_reels, format_signed_percent, format_timestamp_millis,
    BetRecord, PageData, RtpStatistics,
};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Render one page of bet history.
pub fn records_table(page: &PageData<BetRecord>) -> String {
    if page.list.is_empty() {
        return "No bets found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Game", "Reels", "Bet", "Win", "Result", "Time (UTC)"]);
    for record in &page.list {
        builder.push_record([
            record.id.to_string(),
            record.game_code.clone(),
            format_reels(&record.result),
            format_amount(record.bet_amount),
            format_amount(record.win_amount),
            if record.is_win { "WIN" } else { "LOSE" }.to_string(),
            format_timestamp_millis(record.created_at),
        ]);
    }

    format!(
        "{}\nPage {}/{} · {} bets total",
        builder.build().with(Style::rounded()),
        page.page,
        page.total_pages.max(1),
        page.total
    )
}

/// Render RTP statistics, one row per entry.
pub fn rtp_table(rows: &[RtpStatistics]) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "Game", "Target", "Actual", "Diff", "Status", "Bets", "Total bet", "Total win", "Avg bet",
        "Avg win",
    ]);
    for stats in rows {
        builder.push_record([
            stats.title(),
            format_percent(stats.target_rtp),
            format_percent(stats.actual_rtp),
            format_signed_percent(stats.rtp_difference),
            stats.rtp_status.map(|s| s.label()).unwrap_or("-").to_string(),
            stats.total_bet_count.to_string(),
            format_amount(stats.total_bet_amount),
            format_amount(stats.total_win_amount),
            format_amount(stats.average_bet),
            format_amount(stats.average_win),
        ]);
    }
    builder.build().with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RtpStatus;

    #[test]
    fn test_empty_records() {
        let page = PageData::<BetRecord> {
            total: 0,
            page: 1,
            size: 10,
            total_pages: 0,
            list: vec![],
        };
        assert_eq!(records_table(&page), "No bets found.");
    }

    #[test]
    fn test_records_table_contains_rows() {
        let page = PageData {
            total: 1,
            page: 1,
            size: 10,
            total_pages: 1,
            list: vec![BetRecord {
                id: 7,
                game_code: "0000".to_string(),
                bet_amount: 10.0,
                win_amount: 50.0,
                is_win: true,
                result: vec!["A".to_string(), "A".to_string(), "B".to_string()],
                created_at: 0,
            }],
        };
        let table = records_table(&page);
        assert!(table.contains("A | A | B"));
        assert!(table.contains("50.00"));
        assert!(table.contains("Page 1/1"));
    }

    #[test]
    fn test_rtp_table_shows_status() {
        let stats = RtpStatistics {
            game_code: Some("0000".to_string()),
            target_rtp: 96.0,
            actual_rtp: 99.5,
            rtp_difference: 3.5,
            rtp_status: Some(RtpStatus::High),
            ..Default::default()
        };
        let table = rtp_table(&[stats]);
        assert!(table.contains("HIGH"));
        assert!(table.contains("+3.50%"));
    }
}
