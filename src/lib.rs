#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::runner::run;
pub use domain::greeter::{Greeter, GREETING};
pub use utils::error::{GreeterError, Result};
