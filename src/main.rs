//! Interactive front end: pick a mode, then either enumerate every prime in
//! ascending order or report the first prime after a given start value.
//!
//! All prompting and retry logic lives here; the library modules never
//! touch I/O.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use num_bigint::BigUint;
use num_traits::One;

use prime_walk::{group_thousands, next_prime, ordinal, Primes};

const MODE_PROMPT: &str = "Please input whether you would like the program to print all (\"A\") the prime numbers, or the next (\"N\") after a given number.";
const MODE_RETRY: &str = "Your input was not valid, please input either \"A\" or \"N\".";
const START_PROMPT: &str = "Please give the integer value to start from.";
const START_RETRY: &str = "Your input was invalid; please give a valid, non-negative integer value.";

enum Mode {
    /// enumerate every prime in ascending order, forever
    All,
    /// find the first prime after a given start value
    Next,
}

/// Exact, case-sensitive selector match.
fn parse_mode(input: &str) -> Option<Mode> {
    match input {
        "A" => Some(Mode::All),
        "N" => Some(Mode::Next),
        _ => None,
    }
}

/// Read one whitespace-trimmed line, failing once the input is exhausted.
fn read_trimmed(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from input")?;
    if read == 0 {
        bail!("input closed before a value was given");
    }
    Ok(line.trim().to_owned())
}

/// Prompt until one of the valid mode selectors is given.
fn prompt_mode(input: &mut impl BufRead, output: &mut impl Write) -> Result<Mode> {
    writeln!(output, "{}", MODE_PROMPT)?;
    output.flush()?;
    loop {
        if let Some(mode) = parse_mode(&read_trimmed(input)?) {
            return Ok(mode);
        }
        writeln!(output, "{} {}", MODE_RETRY, MODE_PROMPT)?;
        output.flush()?;
    }
}

/// Prompt until a non-negative integer parses.
fn prompt_start(input: &mut impl BufRead, output: &mut impl Write) -> Result<BigUint> {
    writeln!(output, "{}", START_PROMPT)?;
    output.flush()?;
    loop {
        match read_trimmed(input)?.parse::<BigUint>() {
            Ok(start) => return Ok(start),
            Err(_) => {
                writeln!(output, "{}", START_RETRY)?;
                writeln!(output, "{}", START_PROMPT)?;
                output.flush()?;
            }
        }
    }
}

/// Mode "A": print every prime with its 1-based term index. Runs until the
/// process is interrupted.
fn print_all(output: &mut impl Write) -> Result<()> {
    let mut term = BigUint::one();
    for prime in Primes::<BigUint>::new() {
        writeln!(
            output,
            "The {} prime number is: {}.",
            ordinal(&group_thousands(&term.to_string())),
            group_thousands(&prime.to_string())
        )?;
        term += 1u32;
    }
    Ok(())
}

/// Mode "N": report the first prime after `start`. The start is echoed as
/// entered, before the search normalizes it.
fn find_next(start: &BigUint, output: &mut impl Write) -> Result<()> {
    let found = next_prime(start);
    writeln!(
        output,
        "The first prime number after {} is {}.",
        group_thousands(&start.to_string()),
        group_thousands(&found.to_string())
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    match prompt_mode(&mut input, &mut output)? {
        Mode::All => print_all(&mut output),
        Mode::Next => {
            let start = prompt_start(&mut input, &mut output)?;
            find_next(&start, &mut output)
        }
    }
}
