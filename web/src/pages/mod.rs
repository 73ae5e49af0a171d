//! Page modules, one per route

pub mod game;
pub mod login;
pub mod not_found;
pub mod records;
pub mod register;
pub mod statistics;
pub mod wallet;

pub use game::GamePage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use records::RecordsPage;
pub use register::RegisterPage;
pub use statistics::StatisticsPage;
pub use wallet::WalletPage;
