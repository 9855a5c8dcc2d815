use classical_cipher::errors::CipherError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input stream closed while a prompt was waiting for an answer.
    #[error("Input closed")]
    EndOfInput,
    #[error("{0}")]
    Cipher(#[from] CipherError),
}
