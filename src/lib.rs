// ghtrend: trending GitHub repositories ranked by stars per day.

pub mod cache;
pub mod config;
pub mod error;
pub mod fallback;
pub mod github;
pub mod output;
pub mod ranking;
pub mod source;
pub mod watch;

pub use config::{Cli, Config};
pub use error::{GhtrendError, Result};
