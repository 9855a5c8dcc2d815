use classical_cipher::cipher::CipherKind;

/// Lifecycle of the interactive loop.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum State {
    #[default]
    Running,
    Terminated,
}

impl State {
    pub fn is_running(&self) -> bool {
        *self == State::Running
    }

    /// Only an explicit exit ends the loop; anything else keeps it running.
    pub fn next(self, choice: Option<MenuChoice>) -> State {
        match (self, choice) {
            (State::Terminated, _) | (_, Some(MenuChoice::Exit)) => State::Terminated,
            _ => State::Running,
        }
    }
}

/// An entry of the main menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuChoice {
    Cipher(CipherKind),
    Exit,
}

/// Menu number of the exit entry; ciphers take the numbers before it.
pub const EXIT_CHOICE: usize = CipherKind::ALL.len() + 1;

impl MenuChoice {
    /// Parses a menu number, `1..=6` for the ciphers and `7` for exit.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let number: usize = input.trim().parse().ok()?;
        if number == EXIT_CHOICE {
            return Some(MenuChoice::Exit);
        }
        number
            .checked_sub(1)
            .and_then(|index| CipherKind::ALL.get(index))
            .map(|&kind| MenuChoice::Cipher(kind))
    }
}
