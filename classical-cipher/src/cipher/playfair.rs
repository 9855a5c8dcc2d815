use crate::cipher::{Cipher, Direction};
use crate::errors::CipherError;
use crate::preset::alphabet::{ALPHABET, SPACE, validate_keyword, validate_message};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Side of the square grid.
pub const GRID_SIZE: usize = 5;

/// Letter inserted between repeated letters and after an odd final letter.
pub const FILLER: char = 'x';

/// Filler used when the letter being separated is itself [`FILLER`].
pub const ALT_FILLER: char = 'q';

/// `j` shares a cell with `i`.
fn fold(ch: char) -> char {
    if ch == 'j' { 'i' } else { ch }
}

fn filler_for(ch: char) -> char {
    if ch == FILLER { ALT_FILLER } else { FILLER }
}

/// 5×5 arrangement of the 25 letters `a..z` without `j`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PlayfairGrid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl PlayfairGrid {
    /// Fills the grid row by row with the keyword's distinct letters, then the rest of the
    /// alphabet in order.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_cipher::cipher::PlayfairGrid;
    /// let grid = PlayfairGrid::from_keyword("monarchy").unwrap();
    /// assert_eq!(grid.at(0, 0), 'm');
    /// assert_eq!(grid.position('j'), grid.position('i'));
    /// ```
    pub fn from_keyword(keyword: &str) -> Result<Self, CipherError> {
        validate_keyword(keyword)?;

        let mut cells = [[SPACE; GRID_SIZE]; GRID_SIZE];
        let letters = keyword
            .chars()
            .chain(ALPHABET.chars())
            .map(fold)
            .unique()
            .take(GRID_SIZE * GRID_SIZE);
        for (index, ch) in letters.enumerate() {
            cells[index / GRID_SIZE][index % GRID_SIZE] = ch;
        }

        Ok(Self { cells })
    }

    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % GRID_SIZE][col % GRID_SIZE]
    }

    /// Row and column of `ch`, reading `j` as `i`.
    pub fn position(&self, ch: char) -> Option<(usize, usize)> {
        let target = fold(ch);
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&cell| cell == target)
                .map(|col| (row, col))
        })
    }

    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Applies the row, column or rectangle rule to one digraph.
    pub fn substitute_digraph(
        &self,
        (first, second): (char, char),
        direction: Direction,
    ) -> Result<(char, char), CipherError> {
        let locate = |ch: char| {
            self.position(ch).ok_or_else(|| {
                CipherError::MalformedInput(format!("'{}' is not in the Playfair grid", ch))
            })
        };
        let (r1, c1) = locate(first)?;
        let (r2, c2) = locate(second)?;

        // Moving back one cell is moving forward four.
        let step = match direction {
            Direction::Encode => 1,
            Direction::Decode => GRID_SIZE - 1,
        };

        let pair = if r1 == r2 {
            (self.at(r1, c1 + step), self.at(r2, c2 + step))
        } else if c1 == c2 {
            (self.at(r1 + step, c1), self.at(r2 + step, c2))
        } else {
            (self.at(r1, c2), self.at(r2, c1))
        };

        Ok(pair)
    }
}

/// Letters of `message` with spaces removed and `j` folded into `i`.
fn letters(message: &str) -> Result<Vec<char>, CipherError> {
    validate_message(message)?;
    Ok(message.chars().filter(|&ch| ch != SPACE).map(fold).collect())
}

/// Splits a message into digraphs, separating repeated letters and completing an odd
/// final letter with a filler.
///
/// # Example
///
/// ```
/// # use classical_cipher::cipher::playfair::prepare_digraphs;
/// let pairs = prepare_digraphs("balloon").unwrap();
/// assert_eq!(pairs, vec![('b', 'a'), ('l', 'x'), ('l', 'o'), ('o', 'n')]);
/// ```
pub fn prepare_digraphs(message: &str) -> Result<Vec<(char, char)>, CipherError> {
    let letters = letters(message)?;
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);

    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                pairs.push((first, second));
                i += 2;
            }
            _ => {
                pairs.push((first, filler_for(first)));
                i += 1;
            }
        }
    }

    Ok(pairs)
}

/// Digraph substitution key: the keyword and the grid derived from it.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayfairKey {
    keyword: String,
    grid: PlayfairGrid,
}

impl PlayfairKey {
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the keyword is empty or not purely lowercase letters.
    pub fn try_with(keyword: &str) -> Result<Self, CipherError> {
        let grid = PlayfairGrid::from_keyword(keyword)?;
        log::debug!("playfair grid for {:?}: {:?}", keyword, grid.rows());

        Ok(Self {
            keyword: keyword.to_string(),
            grid,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn grid(&self) -> &PlayfairGrid {
        &self.grid
    }

    fn run(&self, pairs: Vec<(char, char)>, direction: Direction) -> Result<String, CipherError> {
        let mut out = String::with_capacity(pairs.len() * 2);
        for pair in pairs {
            let (a, b) = self.grid.substitute_digraph(pair, direction)?;
            out.push(a);
            out.push(b);
        }
        Ok(out)
    }
}

impl TryFrom<String> for PlayfairKey {
    type Error = CipherError;

    fn try_from(keyword: String) -> Result<Self, Self::Error> {
        PlayfairKey::try_with(&keyword)
    }
}

impl From<PlayfairKey> for String {
    fn from(key: PlayfairKey) -> Self {
        key.keyword
    }
}

impl Cipher for PlayfairKey {
    fn encode(&self, message: &str) -> Result<String, CipherError> {
        let pairs = prepare_digraphs(message)?;
        self.run(pairs, Direction::Encode)
    }

    /// Fillers inserted on encode stay in the output.
    fn decode(&self, message: &str) -> Result<String, CipherError> {
        let letters = letters(message)?;
        if letters.len() % 2 != 0 {
            return Err(CipherError::MalformedInput(format!(
                "Playfair ciphertext must have an even number of letters, got {}",
                letters.len()
            )));
        }

        self.run(letters.into_iter().tuples().collect(), Direction::Decode)
    }
}
