pub mod runner;

pub use crate::domain::greeter::{Greeter, GREETING};
pub use crate::utils::error::Result;
