use crate::error::CliError;
use crate::prompt::{MAX_MATRIX_ORDER, Prompter};
use crate::state::{EXIT_CHOICE, MenuChoice, State};

use classical_cipher::cipher::{
    AffineKey, CaesarKey, Cipher, CipherKey, CipherKind, Direction, HillKey, PlayfairKey,
    TranspositionKey, VigenereKey, affine_key_valid, brute_force, hill_key_valid,
};
use classical_cipher::cipher::hill::MIN_ORDER;

use std::io::{BufRead, Write};

const RULE: &str = "-------------------------------------------------";

/// The interactive menu loop.
pub struct App<R, W> {
    state: State,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(prompter: Prompter<R, W>) -> Self {
        Self {
            state: State::default(),
            prompter,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Runs until the user picks exit or the input closes.
    pub fn run(&mut self) -> Result<(), CliError> {
        self.show_header()?;

        while self.state.is_running() {
            match self.step() {
                Ok(()) => {}
                Err(CliError::EndOfInput) => {
                    log::info!("input closed, leaving the menu loop");
                    self.state = State::Terminated;
                }
                Err(e) => return Err(e),
            }
        }

        self.prompter
            .say("\nThank you for using Classical Encryption Algorithms.")
    }

    /// Shows the menu once and handles the chosen entry.
    pub fn step(&mut self) -> Result<(), CliError> {
        self.show_menu()?;
        let line = self
            .prompter
            .read_line(&format!("Enter your choice (1-{}): ", EXIT_CHOICE))?;

        let choice = MenuChoice::parse(&line);
        match choice {
            Some(MenuChoice::Cipher(kind)) => self.run_cipher(kind)?,
            Some(MenuChoice::Exit) => {}
            None => self.prompter.say(&format!(
                "\nInvalid choice. Please select a number between 1 and {}.",
                EXIT_CHOICE
            ))?,
        }

        self.state = self.state.next(choice);
        Ok(())
    }

    fn show_header(&mut self) -> Result<(), CliError> {
        let banner = "=================================================";
        self.prompter.say(banner)?;
        self.prompter.say("           CLASSICAL ENCRYPTION ALGORITHMS        ")?;
        self.prompter.say(banner)?;
        self.prompter.say("This program implements various classical ciphers")?;
        self.prompter.say("for educational purposes and text encryption.")
    }

    fn show_menu(&mut self) -> Result<(), CliError> {
        self.prompter.say(&format!("\n{}", RULE))?;
        self.prompter.say("                 CIPHER MENU                     ")?;
        self.prompter.say(RULE)?;
        for (index, kind) in CipherKind::ALL.iter().enumerate() {
            self.prompter.say(&format!("{}. {} Cipher", index + 1, kind))?;
        }
        self.prompter.say(&format!("{}. Exit Program", EXIT_CHOICE))?;
        self.prompter.say(RULE)
    }

    /// One encrypt or decrypt session with a single cipher.
    fn run_cipher(&mut self, kind: CipherKind) -> Result<(), CliError> {
        self.prompter.say(&format!(
            "\n------------ {} CIPHER ------------",
            kind.name().to_uppercase()
        ))?;
        self.prompter.say("1. Encrypt")?;
        self.prompter.say("2. Decrypt")?;
        let direction = match self.prompter.ask_choice("Enter choice: ", 1..=2)? {
            1 => Direction::Encode,
            _ => Direction::Decode,
        };

        let message = self.prompter.ask_message()?;

        if kind == CipherKind::Caesar && direction == Direction::Decode {
            self.prompter.say("1. Decrypt with specific shift")?;
            self.prompter.say("2. Show all possible decryptions")?;
            if self.prompter.ask_choice("Enter choice: ", 1..=2)? == 2 {
                return self.show_all_shifts(&message);
            }
        }

        let key = self.ask_key(kind)?;
        log::debug!("running {:?} with {:?}", direction, key);

        match key.apply(direction, &message) {
            Ok(text) => {
                let label = match direction {
                    Direction::Encode => "Encrypted",
                    Direction::Decode => "Decrypted",
                };
                self.prompter.say(&format!("\n{} text: {}", label, text))
            }
            Err(e) => {
                log::warn!("{} {:?} failed: {}", kind, direction, e);
                self.prompter.say(&format!("\nError: {}", e))
            }
        }
    }

    fn show_all_shifts(&mut self, message: &str) -> Result<(), CliError> {
        self.prompter.say("\nAll possible decryptions:")?;
        match brute_force(message) {
            Ok(candidates) => {
                for (shift, candidate) in candidates.iter().enumerate() {
                    self.prompter.say(&format!("Shift {}: {}", shift, candidate))?;
                }
                Ok(())
            }
            Err(e) => self.prompter.say(&format!("Error: {}", e)),
        }
    }

    /// Re-asks for key material until the cipher accepts it.
    fn ask_key(&mut self, kind: CipherKind) -> Result<CipherKey, CliError> {
        loop {
            match self.read_key(kind) {
                Ok(key) => return Ok(key),
                Err(CliError::Cipher(e)) => self.prompter.say(&format!("Invalid key: {}", e))?,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_key(&mut self, kind: CipherKind) -> Result<CipherKey, CliError> {
        let key: CipherKey = match kind {
            CipherKind::Caesar => {
                let shift = self.prompter.ask_number("Enter shift key (0-25): ")?;
                CaesarKey::new(shift).into()
            }
            CipherKind::Affine => {
                self.prompter.say("Enter parameters for the form aX+b")?;
                let a = self.prompter.ask_with("Enter a [must be coprime with 26]: ", |line| {
                    match line.trim().parse::<i64>() {
                        Ok(a) if affine_key_valid(a) => Ok(a),
                        Ok(a) => Err(format!("{} is not coprime with 26.", a)),
                        Err(_) => Err("Invalid input. Please enter a number.".to_string()),
                    }
                })?;
                let b = self.prompter.ask_number("Enter b: ")?;
                AffineKey::try_with(a, b)?.into()
            }
            CipherKind::Vigenere => {
                let keyword = self.prompter.ask_keyword()?;
                VigenereKey::try_with(&keyword)?.into()
            }
            CipherKind::Hill => {
                let order = self.prompter.ask_with("Enter matrix size (order): ", |line| {
                    match line.trim().parse::<usize>() {
                        Ok(order) if (MIN_ORDER..=MAX_MATRIX_ORDER).contains(&order) => Ok(order),
                        _ => Err(format!(
                            "The order must be a whole number from {} to {}.",
                            MIN_ORDER, MAX_MATRIX_ORDER
                        )),
                    }
                })?;
                let mut matrix = self.prompter.ask_matrix(order)?;
                while !hill_key_valid(&matrix) {
                    self.prompter
                        .say("The determinant of that matrix is not coprime with 26.")?;
                    matrix = self.prompter.ask_matrix(order)?;
                }
                HillKey::try_with(matrix)?.into()
            }
            CipherKind::Transposition => {
                let columns = self.prompter.ask_with("Enter Key [numeric]: ", |line| {
                    match line.trim().parse::<usize>() {
                        Ok(columns) if columns >= 1 => Ok(columns),
                        _ => Err("The key must be a positive whole number.".to_string()),
                    }
                })?;
                TranspositionKey::try_with(columns)?.into()
            }
            CipherKind::Playfair => {
                let keyword = self.prompter.ask_keyword()?;
                PlayfairKey::try_with(&keyword)?.into()
            }
        };

        Ok(key)
    }
}
