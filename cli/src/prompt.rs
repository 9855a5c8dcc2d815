use crate::error::CliError;

use classical_cipher::errors::CipherError;
use classical_cipher::preset::alphabet::{validate_keyword, validate_message};
use classical_cipher::ring::Matrix;

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Largest matrix order the console will read entries for.
pub const MAX_MATRIX_ORDER: usize = 10;

/// Line-oriented console prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `prompt` and returns the next line without its line ending.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Re-asks until `parse` accepts the answer, showing its complaint each time.
    pub fn ask_with<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, CliError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(complaint) => {
                    log::debug!("rejected answer {:?}: {}", line, complaint);
                    self.say(&complaint)?;
                }
            }
        }
    }

    pub fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, CliError> {
        self.ask_with(prompt, |line| {
            line.trim()
                .parse()
                .map_err(|_| "Invalid input. Please enter a number.".to_string())
        })
    }

    pub fn ask_choice(
        &mut self,
        prompt: &str,
        range: RangeInclusive<usize>,
    ) -> Result<usize, CliError> {
        self.ask_with(prompt, |line| match line.trim().parse::<usize>() {
            Ok(choice) if range.contains(&choice) => Ok(choice),
            _ => Err(format!(
                "Invalid choice. Please select a number between {} and {}.",
                range.start(),
                range.end()
            )),
        })
    }

    /// Asks for a message of lowercase letters and spaces.
    pub fn ask_message(&mut self) -> Result<String, CliError> {
        self.ask_with("Enter Message [all lowercase letters]: ", |line| {
            validate_message(line)
                .map(|_| line.to_string())
                .map_err(|e| e.to_string())
        })
    }

    pub fn ask_keyword(&mut self) -> Result<String, CliError> {
        self.ask_with("Enter Key [lowercase letters]: ", |line| {
            let keyword = line.trim();
            validate_keyword(keyword)
                .map(|_| keyword.to_string())
                .map_err(|e| e.to_string())
        })
    }

    /// Reads `order × order` integers, row by row; entries may span several lines.
    ///
    /// Orders above `MAX_MATRIX_ORDER` fail with `DimensionMismatch` before anything is read.
    pub fn ask_matrix(&mut self, order: usize) -> Result<Matrix, CliError> {
        let needed = order
            .checked_mul(order)
            .filter(|_| order <= MAX_MATRIX_ORDER)
            .ok_or_else(|| {
                CipherError::DimensionMismatch(format!(
                    "Matrix order must be at most {}, got {}",
                    MAX_MATRIX_ORDER, order
                ))
            })?;

        'entry: loop {
            self.say("Enter the matrix [determinant must be coprime with 26]:")?;
            let mut entries: Vec<i64> = Vec::with_capacity(needed);

            while entries.len() < needed {
                let line = self.read_line("")?;
                for token in line.split_whitespace() {
                    match token.parse::<i64>() {
                        Ok(value) if entries.len() < needed => entries.push(value),
                        Ok(_) => {
                            self.say(&format!("Expected exactly {} entries.", needed))?;
                            continue 'entry;
                        }
                        Err(_) => {
                            self.say(&format!("'{}' is not an integer.", token))?;
                            continue 'entry;
                        }
                    }
                }
            }

            return Ok(entries.chunks(order).map(<[i64]>::to_vec).collect());
        }
    }
}
