//! # Authentication Handlers
//!
//! Handlers for login, register, logout and whoami.

use shared::{format_amount, AuthResponse, LoginRequest, RegisterRequest};

use crate::app::App;
use crate::cli::CredentialsArgs;
use crate::core::error::Result;
use crate::ui::{print_field, print_info, print_success};

pub(crate) async fn handle_login(app: &App, args: CredentialsArgs) -> Result<()> {
    let auth = app
        .store
        .do_login(LoginRequest {
            username: args.username,
            password: args.password,
        })
        .await?;

    print_success("Login successful");
    show_account(&auth);
    Ok(())
}

pub(crate) async fn handle_register(app: &App, args: CredentialsArgs) -> Result<()> {
    let auth = app
        .store
        .do_register(RegisterRequest {
            username: args.username,
            password: args.password,
        })
        .await?;

    print_success("Registration successful");
    show_account(&auth);
    Ok(())
}

/// The local session is dropped whether or not the server acknowledged.
pub(crate) async fn handle_logout(app: &App) -> Result<()> {
    if !app.store.is_logged_in() {
        print_info("Not logged in");
        return Ok(());
    }

    match app.store.do_logout().await {
        Ok(()) => print_success("Logged out"),
        Err(err) => print_info(&format!("Logged out locally (server said: {})", err)),
    }
    Ok(())
}

pub(crate) async fn handle_whoami(app: &App) -> Result<()> {
    if !app.store.is_logged_in() {
        print_info("Not logged in");
        return Ok(());
    }

    let balance = app.store.refresh_balance().await?;
    print_field("Username", &app.store.username());
    print_field("Balance", &format_amount(balance));
    print_field("Server", &app.config.api_url);
    Ok(())
}

fn show_account(auth: &AuthResponse) {
    print_field("Username", &auth.username);
    print_field("Balance", &format_amount(auth.balance));
}
