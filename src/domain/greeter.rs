use crate::utils::error::Result;

pub const GREETING: &str = "Hello, World!";

/// Stateless component producing a fixed greeting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    /// Returns `"Hello, World!"`. Never fails; the `Result` keeps the
    /// signature consistent with the rest of the crate.
    pub fn say_hello(&self) -> Result<&'static str> {
        tracing::trace!("say_hello called");
        Ok(GREETING)
    }
}
