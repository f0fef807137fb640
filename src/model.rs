use thiserror::Error;

/// A single username/password candidate, tried exactly once by exactly one worker
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Why a trial produced no usable response.
///
/// `Connect` marks every credential in a shard whose worker never got a
/// channel open; `Io` marks a send/receive failure on an established channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrialError {
    #[error("connect failed: {0}")]
    Connect(String),

    #[error("exchange failed: {0}")]
    Io(String),
}

/// Outcome of one login exchange, owned by the collector once the worker sends it
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub credential: Credential,
    pub response: String,
    pub error: Option<TrialError>,
}

impl TrialResult {
    /// Exchange ran to completion; `response` is the remote's final reply.
    /// The exchange itself never judges whether the login worked.
    pub fn completed(credential: Credential, response: String) -> Self {
        Self {
            credential,
            response,
            error: None,
        }
    }

    /// Exchange could not run or broke mid-flight
    pub fn failed(credential: Credential, error: TrialError) -> Self {
        Self {
            credential,
            response: String::new(),
            error: Some(error),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// The `result` column value for this trial: the remote response,
    /// or an error marker when the exchange never produced one
    pub fn result_field(&self) -> String {
        match &self.error {
            Some(err) => format!("ERROR: {}", err),
            None => self.response.clone(),
        }
    }
}
