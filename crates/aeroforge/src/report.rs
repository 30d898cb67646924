//! Console report of an analysis run

use std::fmt::Write;

use aeroforge_core::model::{AchievementRate, StatisticsSummary};

/// Group thousands with commas: 10000 -> "10,000"
pub fn format_km(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        out.insert(0, '-');
    }
    out
}

/// Render the summary the way it is printed after a run
pub fn format_summary(summary: &StatisticsSummary, runs: usize) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "=== AeroForge Results Summary ({runs} runs) ===");
    let _ = writeln!(out, "Range Statistics:");
    let _ = writeln!(
        out,
        "  Mean: {:.0} km (±{:.0} km std)",
        summary.mean, summary.std
    );
    let _ = writeln!(out, "  Median: {:.0} km", summary.median);
    let _ = writeln!(
        out,
        "  90% Confidence: {:.0} - {:.0} km",
        summary.p5, summary.p95
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Target Achievement:");
    let _ = writeln!(out, "  ≥{} km: {:.1}% of cases", format_km(5_000.0), summary.target_5k);
    let _ = writeln!(
        out,
        "  ≥{} km: {:.1}% of cases",
        format_km(10_000.0),
        summary.target_10k
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Parameter Correlations with Range:");
    for (field, r) in summary.correlations.ranked() {
        let _ = writeln!(out, "  {}: {r:.3}", field.key());
    }
    out
}

/// Achievement rates for the configured thresholds
pub fn format_achievement_table(rates: &[AchievementRate]) -> String {
    let mut out = String::from("Achievement by Threshold:\n");
    for rate in rates {
        let _ = writeln!(
            out,
            "  ≥{} km: {:.1}%",
            format_km(rate.threshold_km),
            rate.percent
        );
    }
    out
}
