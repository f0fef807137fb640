/// Maximum bytes read per response chunk (greeting banner, prompts, final reply)
pub const RECV_BUFFER_SIZE: usize = 2048;

/// Pause between sending a line and reading the remote's reply.
/// Substitutes for real prompt detection; mis-timed responses on slow links
/// are a known limitation of this approach.
pub const SETTLE_DELAY_MS: u64 = 200;

/// Default number of concurrent workers
pub const DEFAULT_WORKERS: usize = 5;

/// Default field delimiter for paired-mode credential lines
pub const DEFAULT_DELIMITER: &str = ":";

/// Default CSV output path
pub const DEFAULT_OUTPUT_FILE: &str = "credprobe_output.csv";

/// Separator that replaces embedded newlines in stored responses,
/// keeping each response on a single CSV row
pub const NEWLINE_SEPARATOR: &str = "\t";
