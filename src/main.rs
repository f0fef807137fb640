// ==========================================================
//  credprobe — parallel credential tester over raw TCP
// ==========================================================

use clap::Parser;
use credprobe::cli::Cli;
use credprobe::engine::TrialEngine;
use credprobe::errors::CredProbeError;
use credprobe::output::{render_summary, write_csv};
use credprobe::wordlist::load_credentials;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), CredProbeError> {
    let config = Cli::parse().into_config();
    config.validate()?;

    if config.verbose && config.workers > 1 {
        println!(
            "Warning: verbose output from {} parallel workers will interleave",
            config.workers
        );
    }

    let credentials = load_credentials(
        &config.wordlist,
        config.mode,
        &config.delimiter,
        config.username.as_deref(),
    )?;
    if credentials.is_empty() {
        println!("No usable credentials in {}", config.wordlist.display());
        return Ok(());
    }

    println!("Target: {}:{}", config.host, config.port);
    println!(
        "Loaded {} credentials across {} workers",
        credentials.len(),
        config.workers
    );

    let started = Instant::now();
    let output = config.output.clone();
    let mode = config.mode;
    let results = TrialEngine::new(config).run(credentials).await;

    write_csv(&output, mode, &results)?;
    render_summary(&results, started.elapsed());
    println!("Output saved to {}", output.display());

    Ok(())
}
