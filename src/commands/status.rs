use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::model::EvaluationRunManifest;

pub fn run(args: StatusArgs) -> Result<()> {
    let summary_path = &args.summary_path;
    info!(path = %summary_path.display(), "status requested");

    if !summary_path.exists() {
        warn!(path = %summary_path.display(), "evaluation summary missing");
        return Ok(());
    }

    let raw = fs::read(summary_path)
        .with_context(|| format!("failed to read {}", summary_path.display()))?;
    let manifest: EvaluationRunManifest = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", summary_path.display()))?;
    let metrics = &manifest.metrics;

    info!(
        run_id = %manifest.run_id,
        started_at = %manifest.started_at,
        completed_at = %manifest.completed_at,
        backend = %manifest.backend,
        corpus = %manifest.paths.corpus_path,
        corpus_sha256 = %manifest.paths.corpus_sha256,
        report = %manifest.paths.report_path,
        "loaded evaluation summary"
    );
    info!(
        cases = metrics.total_cases,
        answer_f1 = ?metrics.avg_f1,
        hits_at_1 = ?metrics.hits_at_1_rate,
        hdr = metrics.hdr,
        "evaluation metrics"
    );

    for entry in metrics.errors.iter().filter(|entry| entry.count > 0) {
        info!(error_type = %entry.error_type, count = entry.count, "error breakdown");
    }
    for entry in &metrics.relations {
        info!(
            relation_type = %entry.relation_type,
            samples = entry.count,
            answer_f1 = entry.avg_f1,
            "relation breakdown"
        );
    }

    Ok(())
}
