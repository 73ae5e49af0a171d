//! # Application Orchestrator
//!
//! The [`App`] struct ties the parsed command line to the backend client and
//! the player session.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  App::run(command)                                       │
//! │    1. navigation::enter()  route guard (login required?) │
//! │    2. handlers::*          one handler per command       │
//! └────────────┬──────────────────────────────┬──────────────┘
//!              │                              │
//! ┌────────────▼─────────────┐   ┌────────────▼─────────────┐
//! │  UserStore (store.rs)    │   │  Arc<dyn SlotApi>        │
//! │  login/register/logout   │──►│  ApiClient in production │
//! │  balance mirror          │   │  mock in tests           │
//! └────────────┬─────────────┘   └────────────┬─────────────┘
//!              │                              │
//!              └──────────► SharedSession ◄───┘
//!                     (token, username, balance)
//! ```
//!
//! The API client and the store see the same session, so a 401/403 reset done
//! by the client is visible to the store right away.

pub mod handlers;
pub mod store;

pub use store::UserStore;

use std::sync::Arc;

use shared::Navigation;

use crate::cli::Commands;
use crate::core::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::SlotApi;
use crate::services::api::ApiClient;
use crate::services::session::{open_shared, SharedSession};
use handlers::{auth, game, navigation, rtp, wallet};

/// Main application state
pub struct App {
    pub config: ClientConfig,
    pub api: Arc<dyn SlotApi>,
    pub store: UserStore,
}

impl App {
    /// Open the session file named by `config` and connect to the backend.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let session = open_shared(config.session_file())?;
        let api: Arc<dyn SlotApi> = Arc::new(ApiClient::new(&config, session.clone()));
        Ok(Self::with_api(config, api, session))
    }

    /// Build an app over an existing API implementation and session.
    pub fn with_api(config: ClientConfig, api: Arc<dyn SlotApi>, session: SharedSession) -> Self {
        let store = UserStore::new(api.clone(), session);
        Self { config, api, store }
    }

    /// Run one command behind the route guard.
    pub async fn run(&self, command: Commands) -> Result<()> {
        if let Navigation::Redirect(target) = navigation::enter(&self.store, command.route())? {
            navigation::show_redirect(&self.store, target);
            return Ok(());
        }

        match command {
            Commands::Register(args) => auth::handle_register(self, args).await,
            Commands::Login(args) => auth::handle_login(self, args).await,
            Commands::Logout => auth::handle_logout(self).await,
            Commands::Whoami => auth::handle_whoami(self).await,
            Commands::Balance => game::handle_balance(self).await,
            Commands::Spin(args) => game::handle_spin(self, args).await,
            Commands::Records(args) => game::handle_records(self, args).await,
            Commands::Deposit(args) => wallet::handle_deposit(self, args).await,
            Commands::WithdrawAll => wallet::handle_withdraw_all(self).await,
            Commands::Rtp(args) => rtp::handle_rtp(self, args).await,
            Commands::RtpReset(args) => rtp::handle_rtp_reset(self, args).await,
        }
    }
}
