//! credprobe - parallel credential tester for line-oriented login prompts
//!
//! This library drives a fixed username-then-password exchange against a raw
//! TCP service for every candidate in a credential list:
//! - credential list parsing (paired or single-username)
//! - a pool of workers, each owning exactly one reused connection
//! - loss-free result collection under unordered parallel completion
//! - CSV rendering of the full result set

pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod session;
pub mod wordlist;

// Re-export commonly used types for convenience
pub use config::RunConfig;
pub use engine::TrialEngine;
pub use errors::CredProbeError;
pub use model::{Credential, TrialError, TrialResult};
pub use session::SessionChannel;
pub use wordlist::{load_credentials, Mode};
