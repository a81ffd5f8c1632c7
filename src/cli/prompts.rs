// Console input collection with validation loops
//
// Each helper re-prompts until it can hand back a value that already
// satisfies the profile's construction guards.

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Print a label and read one trimmed line from stdin.
pub fn read_line(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if bytes == 0 {
        anyhow::bail!("Input stream closed");
    }

    Ok(input.trim().to_string())
}

/// Prompt until non-empty input is received.
pub fn prompt_nonempty(label: &str) -> Result<String> {
    loop {
        let val = read_line(label)?;
        if !val.is_empty() {
            return Ok(val);
        }
        println!("Input cannot be empty. Please try again.");
    }
}

/// Prompt until a valid non-negative integer is entered (digits only).
pub fn prompt_age() -> Result<u32> {
    loop {
        let val = read_line("Enter your age: ")?;
        if !val.is_empty() && val.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(age) = val.parse::<u32>() {
                return Ok(age);
            }
        }
        println!("Invalid input. Enter a non-negative integer for age.");
    }
}

/// Prompt until a `true`/`false` literal is entered (case-insensitive).
pub fn prompt_boolean() -> Result<bool> {
    loop {
        let val = read_line("Are you a premium user? (true/false): ")?.to_lowercase();
        match val.as_str() {
            "true" => return Ok(true),
            "false" => return Ok(false),
            _ => println!("Please enter 'true' or 'false'."),
        }
    }
}
