//! Command line definition

use clap::{Args, Parser, Subcommand};
use shared::Route;

#[derive(Parser)]
#[command(name = "slot-terminal")]
#[command(about = "Slot machine game client: spin, manage your wallet, watch RTP")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL including the /api prefix
    #[arg(short, long, global = true, env = "SLOT_API_URL")]
    pub server: Option<String>,

    /// Game code used by spin and rtp; also filters records
    #[arg(short, long, global = true, env = "SLOT_GAME_CODE")]
    pub game: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and log in
    Register(CredentialsArgs),
    /// Log in to the game server
    Login(CredentialsArgs),
    /// Log out and forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// Show the current balance
    Balance,
    /// Spin the reels
    Spin(SpinArgs),
    /// Show your bet history
    Records(RecordsArgs),
    /// Deposit into your balance
    Deposit(DepositArgs),
    /// Withdraw your whole balance
    WithdrawAll,
    /// Show RTP statistics
    Rtp(RtpArgs),
    /// Reset RTP statistics of a game
    RtpReset(RtpResetArgs),
}

impl Commands {
    /// View the command belongs to; `None` for commands open in any state.
    pub fn route(&self) -> Option<Route> {
        match self {
            Commands::Register(_) => Some(Route::Register),
            Commands::Login(_) => Some(Route::Login),
            Commands::Logout | Commands::Whoami => None,
            Commands::Balance | Commands::Spin(_) => Some(Route::Game),
            Commands::Records(_) => Some(Route::Records),
            Commands::Deposit(_) | Commands::WithdrawAll => Some(Route::Wallet),
            Commands::Rtp(_) | Commands::RtpReset(_) => Some(Route::Statistics),
        }
    }
}

#[derive(Args, Clone)]
pub struct CredentialsArgs {
    /// Username
    #[arg(short, long)]
    pub username: String,
    /// Password
    #[arg(short, long, env = "SLOT_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Clone)]
pub struct SpinArgs {
    /// Bet amount per spin
    #[arg(short, long, default_value_t = 10.0)]
    pub amount: f64,
    /// Number of consecutive spins
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,
}

#[derive(Args, Clone)]
pub struct RecordsArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Records per page
    #[arg(long, default_value_t = 10)]
    pub size: u32,
    /// Only bets placed at or after this time (yyyy-MM-dd HH:mm:ss)
    #[arg(long)]
    pub from: Option<String>,
    /// Only bets placed at or before this time (yyyy-MM-dd HH:mm:ss)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Args, Clone)]
pub struct DepositArgs {
    /// Amount to deposit
    pub amount: String,
}

#[derive(Args, Clone)]
pub struct RtpArgs {
    /// Game to inspect; defaults to --game
    pub game_code: Option<String>,
    /// Show every game plus the system aggregate
    #[arg(long, conflicts_with = "game_code")]
    pub all: bool,
}

#[derive(Args, Clone)]
pub struct RtpResetArgs {
    /// Game whose counters are reset
    pub game_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_commands_map_to_routes() {
        let cli = Cli::try_parse_from(["slot-terminal", "spin", "--amount", "5"]).unwrap();
        assert_eq!(cli.command.route(), Some(Route::Game));

        let cli = Cli::try_parse_from(["slot-terminal", "deposit", "100"]).unwrap();
        assert_eq!(cli.command.route(), Some(Route::Wallet));

        let cli = Cli::try_parse_from(["slot-terminal", "whoami"]).unwrap();
        assert_eq!(cli.command.route(), None);

        let cli = Cli::try_parse_from(["slot-terminal", "rtp", "0001"]).unwrap();
        assert_eq!(cli.command.route(), Some(Route::Statistics));
    }
}
