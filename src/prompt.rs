use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Prompt with a message and return the trimmed input line.
///
/// Fails on end of input so callers looping on invalid answers cannot spin forever.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        bail!("Input ended before the survey was complete");
    }
    Ok(line.trim().to_string())
}

/// Prompt with a default value. Returns the default if input is empty.
pub fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default: &str,
) -> Result<String> {
    let answer = prompt(input, output, &format!("{} [{}]: ", message, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Prompt with a yes/no question.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default_yes: bool,
) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let answer = prompt(input, output, &format!("{} [{}]: ", message, hint))?.to_lowercase();
    if answer.is_empty() {
        Ok(default_yes)
    } else {
        Ok(answer == "y" || answer == "yes")
    }
}

/// Ask for an integer in `[low, high]`, re-prompting until one is given.
pub fn ask_in_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    low: i64,
    high: i64,
) -> Result<i64> {
    loop {
        let answer = prompt(input, output, &format!("{} ({}-{}): ", message, low, high))?;
        match answer.parse::<i64>() {
            Ok(v) if (low..=high).contains(&v) => return Ok(v),
            Ok(_) => writeln!(output, "  Please enter an integer between {} and {}.", low, high)?,
            Err(_) => writeln!(output, "  Invalid input. Please enter an integer.")?,
        }
    }
}
