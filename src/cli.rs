use crate::config::RunConfig;
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_OUTPUT_FILE, DEFAULT_WORKERS};
use crate::wordlist::Mode;
use clap::Parser;
use std::path::PathBuf;

/// Parallel credential tester for services that prompt for a username and
/// then a password over a raw TCP stream
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target IP address or hostname
    pub host: String,

    /// Target port
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Path to the username and/or password list
    #[arg(short, long)]
    pub list: PathBuf,

    /// Interpretation of the list file
    #[arg(short = 't', long = "type", value_enum, default_value = "paired")]
    pub mode: Mode,

    /// Delimiter between username and password in a paired list
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Username tried against every password (single-username mode only)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Number of concurrent workers, one connection each
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Where to write the CSV result set
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Echo banners and intermediate responses. Output from parallel workers
    /// interleaves, so this reads best with --workers 1
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            host: self.host,
            port: self.port,
            wordlist: self.list,
            mode: self.mode,
            delimiter: self.delimiter,
            username: self.username,
            workers: self.workers,
            output: self.output,
            verbose: self.verbose,
        }
    }
}
