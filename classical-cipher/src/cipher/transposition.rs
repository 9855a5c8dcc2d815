use crate::cipher::Cipher;
use crate::errors::CipherError;
use crate::preset::alphabet::validate_message;

use num_integer::Integer;
use serde::{Deserialize, Serialize};

/// Columnar transposition key: the number of columns the message is written into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct TranspositionKey {
    columns: usize,
}

impl TranspositionKey {
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if `columns` is 0.
    pub fn try_with(columns: usize) -> Result<Self, CipherError> {
        if columns == 0 {
            return Err(CipherError::InvalidKey(
                "Transposition key must have at least one column".to_string(),
            ));
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl TryFrom<usize> for TranspositionKey {
    type Error = CipherError;

    fn try_from(columns: usize) -> Result<Self, Self::Error> {
        TranspositionKey::try_with(columns)
    }
}

impl From<TranspositionKey> for usize {
    fn from(key: TranspositionKey) -> Self {
        key.columns
    }
}

impl Cipher for TranspositionKey {
    /// Character `i` (spaces included) goes to column `i mod K`; columns are read in order.
    fn encode(&self, message: &str) -> Result<String, CipherError> {
        validate_message(message)?;
        let chars: Vec<char> = message.chars().collect();

        Ok((0..self.columns)
            .flat_map(|column| chars.iter().skip(column).step_by(self.columns))
            .collect())
    }

    fn decode(&self, message: &str) -> Result<String, CipherError> {
        validate_message(message)?;
        let len = message.chars().count();
        let k = self.columns;

        // `rows` is the height of the full columns; the last `short` columns are one shorter.
        let rows = Integer::div_ceil(&len, &k);
        let short = rows * k - len;

        let mut grid = vec![String::with_capacity(k); rows];
        let mut column = 0;
        let mut cell = 0;
        for ch in message.chars() {
            grid[cell].push(ch);
            cell += 1;

            if cell == rows || (cell == rows - 1 && column >= k - short) {
                cell = 0;
                column += 1;
            }
        }

        Ok(grid.concat())
    }
}
