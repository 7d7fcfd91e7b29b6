//! Interactive session: prompt, normalize, compute, report, hold.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::{greet, messages, name_info, GreetError, Name, Result};

/// Runs one greeting session reading from `input` and writing to `output`.
///
/// End of input while asking for the name counts as a blank answer, end of
/// input while waiting for the final Enter just ends the session.
///
/// # Errors
///
/// Returns [`GreetError::Read`] when a line cannot be read (including invalid
/// UTF-8) and [`GreetError::Write`] when the output cannot be written.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Name> {
    prompt(output, &messages::name_prompt())?;
    let line = read_line(input)?.unwrap_or_default();
    debug!("Raw name input: {:?}", line);

    let name = Name::from_input(&line);
    if line.trim().is_empty() {
        debug!("Blank input, using default name.");
    }
    info!("Greeting {}.", name);

    let greeting = greet(&name);
    let info = name_info(&name);
    say(output, &greeting)?;
    say(output, &messages::length_line(&info))?;
    say(output, &messages::reversed_line(&info))?;

    prompt(output, messages::EXIT_PROMPT)?;
    if read_line(input)?.is_none() {
        debug!("Input closed before exit confirmation.");
    }
    Ok(name)
}

/// Reads one line, `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line).map_err(GreetError::Read)?;
    if bytes_read == 0 {
        debug!("End of input.");
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{text}").map_err(GreetError::Write)?;
    output.flush().map_err(GreetError::Write)
}

fn say<W: Write>(output: &mut W, text: &str) -> Result<()> {
    writeln!(output, "{text}").map_err(GreetError::Write)
}
