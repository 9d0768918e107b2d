use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlPaneError {
    #[error("Please enter an SQL query")]
    EmptyQuery,
    #[error("{0}")]
    Query(String),
    #[error("Query failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed result: {0}")]
    MalformedResult(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid bind address: {0}")]
    Addr(#[from] std::net::AddrParseError),
}

pub type Result<T> = std::result::Result<T, SqlPaneError>;
