use thiserror::Error;

/// Failure to produce a tree from the input bytes.
///
/// The HTML parsing algorithm recovers from every syntax error, so the only
/// way to fail is for the byte stream feeding the parser to fail.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading or decoding the input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
