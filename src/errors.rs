use thiserror::Error;

/// Error types for a credential-probing run
#[derive(Error, Debug)]
pub enum CredProbeError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Input Error: {0}")]
    Input(String),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}
