use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Failed to read input stream")]
    Stdin(#[source] std::io::Error),

    #[error("Failed to read input file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FormatError>;
