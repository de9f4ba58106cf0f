//! JSON output formatter

use super::RankReport;

pub fn format_report(report: &RankReport) -> serde_json::Result<String> {
    let output = serde_json::json!({
        "sampling": {
            "samples": report.samples,
            "ranks": report.sampled,
        },
        "iteration": {
            "rounds": report.rounds,
            "ranks": report.iterated,
        },
    });

    Ok(serde_json::to_string_pretty(&output)? + "\n")
}
