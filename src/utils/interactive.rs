use crate::core::traits::Confirm;
use crate::utils::error::{AppError, AppResult};
use std::io::{self, BufRead, Write};

pub fn prompt_input(prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    read_answer(&mut io::stdin().lock())
}

/// Read one trimmed line; a closed input is an error, never an empty answer
fn read_answer<R: BufRead + ?Sized>(reader: &mut R) -> AppResult<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        println!();
        return Err(AppError::Input(
            "no answer on stdin; pass --yes to skip confirmation".to_string(),
        ));
    }

    Ok(input.trim().to_string())
}

/// Ask a yes/no question; an empty answer picks `default`
pub fn prompt_yes_no(prompt: &str, default: bool) -> AppResult<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        let input = prompt_input(&format!("{} {}: ", prompt, hint))?;
        match parse_answer(&input, default) {
            Some(answer) => return Ok(answer),
            None => println!("Please enter 'y' or 'n'"),
        }
    }
}

fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        "" => Some(default),
        _ => None,
    }
}

/// Confirmation backed by the terminal
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        prompt_yes_no(question, true)
    }
}

/// Confirmation that always agrees, used for `--yes`
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> AppResult<bool> {
        Ok(true)
    }
}
