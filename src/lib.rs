pub mod app;
pub mod approver;
pub mod config;
pub mod contract;
pub mod eip1193;
pub mod error;
pub mod hook;
pub mod state;
pub mod views;
pub mod wallet;

pub use approver::{Approver, Dispatch};
pub use config::{ApproverConfig, ConfigError};
pub use error::{ApprovalFailure, WalletError};
pub use state::{ApproverAction, ApproverState};
pub use wallet::{InjectedWallet, Wallet};
