use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::model::EvaluationMetrics;
use crate::util::{ensure_parent_directory, round_to};

use super::pipeline::ScoredCase;

pub const SUMMARY_QUESTION: &str = "=== SUMMARY ===";
const ANSWER_SEPARATOR: &str = "; ";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub question: String,
    pub golden_answer: String,
    pub llm_answer: String,
    pub system_answer: String,
    pub f1_score: Option<f64>,
    pub error_type: String,
    pub relation_type: String,
}

impl ReportRow {
    pub fn from_case(case: &ScoredCase) -> Self {
        Self {
            question: case.question.clone(),
            golden_answer: case.golden_answer.join(ANSWER_SEPARATOR),
            llm_answer: case.llm_answer.clone(),
            system_answer: case.system_answers.join(ANSWER_SEPARATOR),
            f1_score: Some(round_to(case.f1, 4)),
            error_type: case.error_category.as_str().to_string(),
            relation_type: case.relation_tag.as_str().to_string(),
        }
    }

    pub fn summary(metrics: &EvaluationMetrics) -> Self {
        Self {
            question: SUMMARY_QUESTION.to_string(),
            golden_answer: String::new(),
            llm_answer: String::new(),
            system_answer: String::new(),
            f1_score: metrics.avg_f1.map(|value| round_to(value / 100.0, 4)),
            error_type: headline(metrics),
            relation_type: String::new(),
        }
    }
}

pub fn headline(metrics: &EvaluationMetrics) -> String {
    format!(
        "F1={}, Hits@1={}, HDR={}",
        format_percent(metrics.avg_f1),
        format_percent(metrics.hits_at_1_rate),
        format_percent(Some(metrics.hdr))
    )
}

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}%"),
        None => "n/a".to_string(),
    }
}

pub fn write_report<W: Write>(
    mut writer: W,
    cases: &[ScoredCase],
    metrics: &EvaluationMetrics,
) -> Result<()> {
    writer
        .write_all(UTF8_BOM)
        .context("failed to write report byte-order mark")?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    for case in cases {
        csv_writer
            .serialize(ReportRow::from_case(case))
            .context("failed to write report row")?;
    }
    csv_writer
        .serialize(ReportRow::summary(metrics))
        .context("failed to write report summary row")?;
    csv_writer.flush().context("failed to flush report")?;

    Ok(())
}

pub fn write_report_file(
    path: &Path,
    cases: &[ScoredCase],
    metrics: &EvaluationMetrics,
) -> Result<()> {
    ensure_parent_directory(path)?;
    let file = File::create(path)
        .with_context(|| format!("failed to create report: {}", path.display()))?;
    write_report(BufWriter::new(file), cases, metrics)
        .with_context(|| format!("failed to write report: {}", path.display()))
}

pub fn log_metrics(metrics: &EvaluationMetrics) {
    info!(
        cases = metrics.total_cases,
        answer_f1 = %format_percent(metrics.avg_f1),
        hits_at_1 = %format_percent(metrics.hits_at_1_rate),
        hdr = %format_percent(Some(metrics.hdr)),
        hdr_opportunities = metrics.hdr_denominator,
        hdr_corrected = metrics.hdr_numerator,
        "evaluation metrics"
    );

    for entry in &metrics.errors {
        info!(
            error_type = %entry.error_type,
            count = entry.count,
            percent = %format_percent(entry.percent),
            "error breakdown"
        );
    }

    for entry in &metrics.relations {
        info!(
            relation_type = %entry.relation_type,
            samples = entry.count,
            answer_f1 = %format_percent(Some(entry.avg_f1)),
            "relation breakdown"
        );
    }
}
