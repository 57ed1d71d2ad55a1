use crate::domain::greeter::Greeter;
use crate::utils::error::Result;
use std::io::Write;

/// Writes the greeting followed by a newline to `out`.
pub fn run<W: Write>(greeter: &Greeter, mut out: W) -> Result<()> {
    let greeting = greeter.say_hello()?;
    tracing::debug!("Writing greeting ({} bytes)", greeting.len());

    writeln!(out, "{}", greeting)?;
    out.flush()?;
    Ok(())
}
