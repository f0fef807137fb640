use crate::errors::CredProbeError;
use crate::model::Credential;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How a credential list file is interpreted
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Each line holds a username and a password separated by the delimiter
    Paired,
    /// Each line is a password, tried against one fixed username
    SingleUsername,
}

/// Read candidate credentials from `path`.
///
/// Paired mode takes the first two delimiter-separated fields of each line as
/// username and password; lines without the delimiter are skipped, not
/// errors. Single-username mode pairs `username` with every line verbatim.
/// An empty file yields an empty list.
pub fn load_credentials(
    path: &Path,
    mode: Mode,
    delimiter: &str,
    username: Option<&str>,
) -> Result<Vec<Credential>, CredProbeError> {
    let fixed_username = match mode {
        Mode::SingleUsername => Some(username.ok_or_else(|| {
            CredProbeError::Config("a username is required in single-username mode".to_string())
        })?),
        Mode::Paired => None,
    };

    let file = File::open(path).map_err(|e| {
        CredProbeError::Input(format!("cannot open {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let mut credentials = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| {
            CredProbeError::Input(format!("cannot read {}: {}", path.display(), e))
        })?;

        match fixed_username {
            Some(user) => credentials.push(Credential::new(user, line)),
            None => {
                // Fields past the second are discarded, matching list formats
                // where passwords never contain the delimiter
                let mut fields = line.split(delimiter);
                if let (Some(user), Some(pass)) = (fields.next(), fields.next()) {
                    credentials.push(Credential::new(user, pass));
                }
            }
        }
    }

    Ok(credentials)
}
