pub mod config;
pub mod retry;
pub mod types;

pub use config::{MonitorConfig, split_list};
pub use types::*;
