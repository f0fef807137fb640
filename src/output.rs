use crate::errors::CredProbeError;
use crate::model::TrialResult;
use crate::wordlist::Mode;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;
use std::time::Duration;

/// Write the full result set as CSV, one quoted row per trial.
///
/// The username column is headed `username` for paired lists and `user` when
/// a single fixed username was expanded against a password list. Responses
/// were already flattened to a single line by the session layer.
pub fn write_csv(path: &Path, mode: Mode, results: &[TrialResult]) -> Result<(), CredProbeError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)?;

    let user_header = match mode {
        Mode::Paired => "username",
        Mode::SingleUsername => "user",
    };
    writer.write_record([user_header, "password", "result"])?;

    for result in results {
        let outcome = result.result_field();
        writer.write_record([
            result.credential.username.as_str(),
            result.credential.password.as_str(),
            outcome.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Print a per-trial summary table and run totals to stdout
pub fn render_summary(results: &[TrialResult], elapsed: Duration) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Username", "Password", "Result"]);

    for result in results {
        table.add_row(vec![
            result.credential.username.clone(),
            result.credential.password.clone(),
            truncate(&result.result_field(), 60),
        ]);
    }

    println!("{}", table);

    let failed = results.iter().filter(|r| r.is_failure()).count();
    println!(
        "\n{} attempts in {:.2} seconds ({} completed, {} failed)",
        results.len(),
        elapsed.as_secs_f64(),
        results.len() - failed,
        failed
    );
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
