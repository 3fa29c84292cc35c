//! Interactive confirmation prompts.

use std::io::{self, BufRead, Write};

/// Asks a yes/no question on stdin unless `assume_yes` is set.
pub fn confirm(question: &str, assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let stdin = io::stdin();
    confirm_with(question, &mut stdin.lock(), &mut io::stderr())
}

/// Asks a yes/no question on the given streams. Only `y` / `yes` confirm.
pub fn confirm_with<I: BufRead, O: Write>(
    question: &str,
    input: &mut I,
    output: &mut O,
) -> io::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
