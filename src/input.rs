//! Interactive domain prompt.

use std::io::{BufRead, Write};

use log::warn;

use crate::domain::Domain;
use crate::error_handling::InputError;

/// Text written before each read.
pub const PROMPT: &str = "Enter domain to check: ";

fn io_error(e: std::io::Error) -> InputError {
    InputError::Io(e.to_string())
}

/// Prompts on `writer` and reads lines from `reader` until one parses as a
/// domain.
///
/// Empty and malformed lines are reported on `writer` and prompted for again,
/// up to `max_attempts` reads in total.
///
/// # Errors
///
/// - `InputError::EndOfInput` when `reader` closes first
/// - `InputError::Io` when reading or writing fails
/// - `InputError::TooManyAttempts` when every attempt is rejected
pub fn prompt_for_domain<R, W>(
    reader: &mut R,
    writer: &mut W,
    max_attempts: usize,
) -> Result<Domain, InputError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    for attempt in 1..=max_attempts {
        write!(writer, "{PROMPT}").map_err(io_error)?;
        writer.flush().map_err(io_error)?;

        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(io_error)?;
        if read == 0 {
            return Err(InputError::EndOfInput);
        }

        match Domain::parse(&line) {
            Ok(domain) => return Ok(domain),
            Err(e) => {
                warn!("Rejected domain input (attempt {attempt}/{max_attempts}): {e}");
                writeln!(writer, "{e}").map_err(io_error)?;
            }
        }
    }
    Err(InputError::TooManyAttempts(max_attempts))
}
