pub mod config;
pub mod error;
pub mod types;

pub use config::AuraConfig;
pub use error::{AuraError, Result};
pub use types::*;
