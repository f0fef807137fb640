use crate::errors::CredProbeError;
use crate::wordlist::Mode;
use std::path::PathBuf;

/// Settings for one probing run, fixed before any file or network activity
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Target hostname or literal address
    pub host: String,

    /// Target port (1-65535)
    pub port: u16,

    /// Path to the credential list file
    pub wordlist: PathBuf,

    /// How the credential list is interpreted
    pub mode: Mode,

    /// Field delimiter for paired-mode lines
    pub delimiter: String,

    /// Fixed username for single-username mode
    pub username: Option<String>,

    /// Number of concurrent workers, each owning one connection
    pub workers: usize,

    /// Where the CSV result set is written
    pub output: PathBuf,

    /// Echo banners and intermediate responses to stdout
    pub verbose: bool,
}

impl RunConfig {
    /// Reject inconsistent settings before anything is opened or connected
    pub fn validate(&self) -> Result<(), CredProbeError> {
        if self.port == 0 {
            return Err(CredProbeError::Config(
                "port must be between 1 and 65535".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(CredProbeError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.delimiter.is_empty() {
            return Err(CredProbeError::Config(
                "delimiter must not be empty".to_string(),
            ));
        }
        match self.mode {
            Mode::Paired if self.username.is_some() => Err(CredProbeError::Config(
                "--username cannot be combined with a paired list".to_string(),
            )),
            Mode::SingleUsername if self.username.is_none() => Err(CredProbeError::Config(
                "--username is required with a password-only list".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
