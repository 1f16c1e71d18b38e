//! Command implementations

mod assign;
mod catalog;
mod config;
mod export;
mod init;
mod recommend;
mod role;
mod scenario;
mod score;
mod session;
mod tasks;

pub use assign::{assign, unassign};
pub use catalog::catalog_cmd;
pub use config::config_cmd;
pub use export::export;
pub use init::init;
pub use recommend::recommend;
pub use role::role_cmd;
pub use scenario::scenario_cmd;
pub use score::{compare, score};
pub use session::Session;
pub use tasks::tasks;
