// src/exec.rs
use crate::error::DiffError;
use crate::report::{RED, RESET};
use crate::utils::status_line;
use std::io::{self, BufRead as _};
use std::process::Command;

/// Runs the observed command and blocks until it exits. There is no
/// timeout: a hung command blocks the tool indefinitely.
///
/// A non-zero exit is reported to the user but does not abort the
/// pipeline; the capture window still closes and categorization proceeds.
///
/// # Errors
///
/// Returns [`DiffError::Spawn`] when the command cannot be launched at all.
pub fn run_command(command: &[String]) -> Result<(), DiffError> {
    let Some((program, args)) = command.split_first() else {
        return Ok(());
    };
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| DiffError::Spawn {
            command: command.join(" "),
            source,
        })?;

    if !status.success() {
        let code = status
            .code()
            .map_or_else(|| String::from("terminated by signal"), |c| c.to_string());
        println!("\n{RED}Subprocess failed with exit code:{RESET} {code}\n");
    }
    Ok(())
}

/// Manual mode: blocks until the user presses enter to end the window.
///
/// # Errors
///
/// Propagates stdin read failures.
pub fn wait_for_enter() -> io::Result<()> {
    status_line("Press enter when ready to scan...");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
