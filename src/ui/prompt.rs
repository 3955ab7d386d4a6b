use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{BufRead, Write};

/// Ask the user to pick one of `choices` by number.
///
/// An empty answer (or end of input) picks the first entry, the same default a
/// dropdown shows before anything is chosen. Out-of-range or non-numeric
/// answers are asked again.
pub fn select_from<R: BufRead, W: Write>(
    label: &str,
    choices: &[String],
    input: &mut R,
    output: &mut W,
) -> AppResult<usize> {
    if choices.is_empty() {
        return Err(AppError::Other("nothing to choose from".into()));
    }

    for (i, c) in choices.iter().enumerate() {
        writeln!(output, "  [{}] {}", i + 1, c)?;
    }

    loop {
        write!(output, "{label} [1-{}, Enter = 1]: ", choices.len())?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(0);
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(0);
        }

        match answer.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
            _ => warning(format!("'{answer}' is not a valid choice.")),
        }
    }
}
