//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{DriftPoint, GuardrailStatus, SequentialRecord, SrmResult};

const SEP_WIDTH: usize = 62;

fn separator() -> String {
    "\u{2500}".repeat(SEP_WIDTH)
}

/// Format a sequential-monitoring trajectory for human-readable output.
pub fn format_sequential(records: &[SequentialRecord]) -> String {
    let mut output = String::new();
    output.push_str("expstats \u{2014} sequential monitor\n");
    output.push_str(&separator());
    output.push('\n');

    output.push_str("        n     t-stat    p-value  cohens_d\n");
    for record in records {
        output.push_str(&format!(
            "  {:>7}  {:>9.3}  {:>9.4}  {:>8.3}\n",
            record.checkpoint_size,
            record.result.t_statistic,
            record.result.p_value,
            record.result.effect_size,
        ));
    }
    output.push('\n');

    if let Some(last) = records.last() {
        output.push_str(&format!(
            "  Final: p = {:.4}, d = {:.3} at n = {}\n",
            last.result.p_value, last.result.effect_size, last.checkpoint_size
        ));
    }

    match records.iter().find(|r| r.result.p_value < 0.05) {
        Some(first) => {
            output.push_str(&format!(
                "  {}\n",
                format!(
                    "p first crosses 0.05 at n = {}",
                    first.checkpoint_size
                )
                .green()
            ));
        }
        None => {
            output.push_str(&format!("  {}\n", "p never crosses 0.05".yellow()));
        }
    }

    output
}

/// Format an SRM check verdict, including the canonical three-row table
/// shape (per-group rows plus a synthetic `chi2_result` row).
pub fn format_srm(result: &SrmResult) -> String {
    let mut output = String::new();
    output.push_str("expstats \u{2014} sample ratio mismatch check\n");
    output.push_str(&separator());
    output.push('\n');

    output.push_str("  group        observed   expected    ratio\n");
    for group in &result.groups {
        output.push_str(&format!(
            "  {:<12} {:>8}  {:>9.0}  {:>7.4}\n",
            group.group, group.observed_count, group.expected_count, group.ratio
        ));
    }
    output.push_str(&format!(
        "  {:<12} {:>8.4}  {:>9.3}  {:>7.1}\n",
        "chi2_result",
        result.chi2,
        result.critical_value,
        if result.passed { 1.0 } else { 0.0 }
    ));
    output.push('\n');

    if result.passed {
        output.push_str(&format!(
            "  {}\n",
            "\u{2713} Allocation matches the declared split".green().bold()
        ));
    } else {
        output.push_str(&format!(
            "  {}\n",
            "\u{26A0} Sample ratio mismatch detected".red().bold()
        ));
    }

    output
}

/// Format a classified guardrail series as a status summary.
pub fn format_guardrail(series: &[DriftPoint]) -> String {
    let mut output = String::new();
    output.push_str("expstats \u{2014} guardrail timeline\n");
    output.push_str(&separator());
    output.push('\n');

    let count = |status: GuardrailStatus| series.iter().filter(|p| p.status == status).count();
    let ok = count(GuardrailStatus::Ok);
    let warn = count(GuardrailStatus::Warn);
    let rollback = count(GuardrailStatus::Rollback);
    let recovered = count(GuardrailStatus::Recovered);

    output.push_str(&format!(
        "  {} steps: {} ok, {} warn, {} rollback, {} recovered\n",
        series.len(),
        ok,
        warn,
        rollback,
        recovered
    ));

    if let Some(first_breach) = series.iter().find(|p| {
        matches!(
            p.status,
            GuardrailStatus::Warn | GuardrailStatus::Rollback
        )
    }) {
        output.push_str(&format!(
            "  {}\n",
            format!(
                "\u{26A0} first breach at t = {} (drift {:.3}, error {:.3})",
                first_breach.time_index, first_breach.drift_metric, first_breach.error_metric
            )
            .yellow()
        ));
    } else {
        output.push_str(&format!(
            "  {}\n",
            "\u{2713} no guardrail breaches".green().bold()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::TestResult;

    fn record(n: usize, p: f64) -> SequentialRecord {
        SequentialRecord {
            checkpoint_size: n,
            result: TestResult {
                t_statistic: 1.0,
                p_value: p,
                mean_difference: 0.1,
                effect_size: 0.2,
            },
        }
    }

    #[test]
    fn sequential_report_flags_first_crossing() {
        let records = vec![record(500, 0.4), record(1000, 0.03), record(1500, 0.01)];
        let report = format_sequential(&records);
        assert!(report.contains("n = 1000"));
    }

    #[test]
    fn srm_report_contains_synthetic_row() {
        let result = SrmResult {
            groups: vec![],
            chi2: 400.0,
            critical_value: 3.841,
            passed: false,
        };
        let report = format_srm(&result);
        assert!(report.contains("chi2_result"));
        assert!(report.contains("400.0000"));
    }

    #[test]
    fn guardrail_report_counts_statuses() {
        let series = vec![
            DriftPoint {
                time_index: 0,
                drift_metric: 0.05,
                error_metric: 1.8,
                status: GuardrailStatus::Ok,
            },
            DriftPoint {
                time_index: 1,
                drift_metric: 0.4,
                error_metric: 2.9,
                status: GuardrailStatus::Warn,
            },
        ];
        let report = format_guardrail(&series);
        assert!(report.contains("1 ok, 1 warn"));
        assert!(report.contains("first breach at t = 1"));
    }
}
