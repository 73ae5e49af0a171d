//! # Command Tests
//!
//! Commands run through `App::run`, route guard included.

mod common;

use common::{ok, TestEnv};
use serde_json::json;
use shared::ClientError;
use slot_terminal::cli::{
    CredentialsArgs, DepositArgs, RecordsArgs, RtpArgs, RtpResetArgs, SpinArgs,
};
use slot_terminal::cli::Commands;
use slot_terminal::core::SlotApi;
use slot_terminal::AppError;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn spin_result(balance_after: f64) -> serde_json::Value {
    json!({
        "betId": 7,
        "result": ["🍒", "🍒", "🍋"],
        "betAmount": 5.0,
        "winAmount": 0.0,
        "isWin": false,
        "balanceBefore": balance_after + 5.0,
        "balanceAfter": balance_after,
        "message": ""
    })
}

#[tokio::test]
async fn test_protected_command_requires_login() {
    let env = TestEnv::new().await;
    Mock::given(method("GET"))
        .and(path("/api/game/balance"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&env.server)
        .await;

    let err = env.app.run(Commands::Balance).await.unwrap_err();

    assert!(matches!(err, AppError::LoginRequired));
}

#[tokio::test]
async fn test_login_while_logged_in_is_redirected() {
    let env = TestEnv::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&env.server)
        .await;

    let result = env
        .app
        .run(Commands::Login(CredentialsArgs {
            username: "bob".to_string(),
            password: "pw".to_string(),
        }))
        .await;

    assert!(result.is_ok());
    assert_eq!(env.app.store.username(), "alice");
}

#[tokio::test]
async fn test_spin_mirrors_balance_after() {
    // Arrange
    let env = TestEnv::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/game/spin/0000"))
        .and(body_json(json!({ "amount": 5.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(spin_result(95.0))))
        .expect(2)
        .mount(&env.server)
        .await;

    // Act
    env.app
        .run(Commands::Spin(SpinArgs {
            amount: 5.0,
            count: 2,
        }))
        .await
        .expect("Spins should settle");

    // Assert
    assert_eq!(env.app.store.balance(), 95.0);
}

#[tokio::test]
async fn test_spin_rejects_amount_below_minimum() {
    let env = TestEnv::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/game/spin/0000"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&env.server)
        .await;

    let err = env
        .app
        .run(Commands::Spin(SpinArgs {
            amount: 0.001,
            count: 1,
        }))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Client(ClientError::Validation(_))));
}

#[tokio::test]
async fn test_deposit_accepts_grouped_amount() {
    let env = TestEnv::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/wallet/deposit"))
        .and(body_json(json!({ "amount": 1000.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "username": "alice",
            "balanceBefore": 100.0,
            "balanceAfter": 1100.0,
            "amount": 1000.0,
            "transactionType": "DEPOSIT",
            "message": "Deposit successful"
        }))))
        .expect(1)
        .mount(&env.server)
        .await;

    env.app
        .run(Commands::Deposit(DepositArgs {
            amount: "1,000".to_string(),
        }))
        .await
        .expect("Deposit should succeed");

    assert_eq!(env.app.store.balance(), 1100.0);
}

#[tokio::test]
async fn test_withdraw_all_zeroes_balance() {
    let env = TestEnv::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/wallet/withdraw-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "username": "alice",
            "balanceBefore": 100.0,
            "balanceAfter": 0.0,
            "amount": 100.0,
            "transactionType": "WITHDRAW",
            "message": ""
        }))))
        .expect(1)
        .mount(&env.server)
        .await;

    env.app
        .run(Commands::WithdrawAll)
        .await
        .expect("Withdraw should succeed");

    assert_eq!(env.app.store.balance(), 0.0);
}

#[tokio::test]
async fn test_records_posts_paging() {
    let env = TestEnv::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/game/records"))
        .and(body_json(json!({ "page": 2, "size": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "total": 6,
            "page": 2,
            "size": 5,
            "totalPages": 2,
            "list": [{
                "id": 6,
                "gameCode": "0000",
                "betAmount": 5.0,
                "winAmount": 10.0,
                "isWin": true,
                "result": ["7", "7", "7"],
                "createdAt": 1_700_000_000_000i64
            }]
        }))))
        .expect(1)
        .mount(&env.server)
        .await;

    env.app
        .run(Commands::Records(RecordsArgs {
            page: 2,
            size: 5,
            from: None,
            to: None,
        }))
        .await
        .expect("Records should load");
}

#[tokio::test]
async fn test_rtp_error_field_is_rejected() {
    let env = TestEnv::logged_in().await;
    Mock::given(method("GET"))
        .and(path("/api/rtp/statistics/0000"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok(json!({ "error": "Game not found" }))),
        )
        .mount(&env.server)
        .await;

    let err = env
        .app
        .run(Commands::Rtp(RtpArgs {
            game_code: None,
            all: false,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Game not found");
}

#[tokio::test]
async fn test_game_code_is_encoded_in_path() {
    // Arrange
    let mut env = TestEnv::logged_in().await;
    env.app.config.select_game("a/b");
    Mock::given(method("POST"))
        .and(path("/api/game/spin/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(spin_result(95.0))))
        .expect(1)
        .mount(&env.server)
        .await;

    // Act
    env.app
        .run(Commands::Spin(SpinArgs {
            amount: 5.0,
            count: 1,
        }))
        .await
        .expect("Spin should reach the encoded path");

    // Assert
    assert_eq!(env.app.store.balance(), 95.0);
}

#[tokio::test]
async fn test_rtp_all_lists_games_and_system() {
    let env = TestEnv::logged_in().await;
    Mock::given(method("GET"))
        .and(path("/api/rtp/statistics/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "games": [{
                "gameCode": "0000",
                "gameName": "Classic",
                "targetRtp": 96.0,
                "actualRtp": 95.2,
                "totalBetAmount": 1000.0,
                "totalWinAmount": 952.0,
                "totalBetCount": 200,
                "averageBet": 5.0,
                "averageWin": 4.76,
                "rtpDifference": -0.8,
                "rtpStatus": "OPTIMAL"
            }],
            "systemRtp": {
                "targetRtp": 96.0,
                "actualRtp": 95.2,
                "totalBetAmount": 1000.0,
                "totalWinAmount": 952.0,
                "totalBetCount": 200,
                "averageBet": 5.0,
                "averageWin": 4.76,
                "rtpDifference": -0.8,
                "rtpStatus": "OPTIMAL"
            }
        }))))
        .expect(1)
        .mount(&env.server)
        .await;

    let stats = env
        .app
        .api
        .get_all_games_rtp_statistics()
        .await
        .expect("Statistics should load")
        .into_data()
        .expect("Statistics should carry data");

    assert_eq!(stats.games.len(), 1);
    assert_eq!(stats.games[0].game_code.as_deref(), Some("0000"));
    assert_eq!(stats.system_rtp.total_bet_count, 200);

    env.app
        .run(Commands::Rtp(RtpArgs {
            game_code: None,
            all: true,
        }))
        .await
        .expect("All-games view should render");
}

#[tokio::test]
async fn test_rtp_reset_accepts_null_data() {
    let env = TestEnv::logged_in().await;
    Mock::given(method("POST"))
        .and(path("/api/rtp/reset/0001"))
        .and(header("authorization", "Bearer tok-alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "RTP statistics reset",
            "data": null
        })))
        .expect(1)
        .mount(&env.server)
        .await;

    env.app
        .run(Commands::RtpReset(RtpResetArgs {
            game_code: "0001".to_string(),
        }))
        .await
        .expect("Reset should succeed");
}
