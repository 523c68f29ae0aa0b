use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::cli::EvaluateArgs;
use crate::model::{EvaluationPaths, EvaluationRunManifest};
use crate::util::{now_utc_string, sha256_file, utc_compact_string, write_json_pretty};

use super::backend::build_backend;
use super::corpus::load_corpus;
use super::patterns::QuestionPatterns;
use super::pipeline::evaluate_cases;
use super::report::{log_metrics, write_report_file};

const SUMMARY_MANIFEST_VERSION: u32 = 1;

pub fn run(args: EvaluateArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("eval-{}", utc_compact_string(started_ts));
    let summary_path = args
        .summary_path
        .clone()
        .unwrap_or_else(|| default_summary_path(&args.output));

    info!(
        run_id = %run_id,
        corpus = %args.corpus.display(),
        backend = args.backend.as_str(),
        "starting evaluation"
    );

    let cases = load_corpus(&args.corpus)?;
    let corpus_sha256 = sha256_file(&args.corpus)?;
    let patterns = QuestionPatterns::new()?;
    let mut backend = build_backend(&args)?;

    let (scored, summary) = evaluate_cases(&cases, backend.as_mut(), &patterns)?;
    let metrics = summary.finalize();
    log_metrics(&metrics);

    write_report_file(&args.output, &scored, &metrics)?;
    info!(path = %args.output.display(), "wrote evaluation report");

    let manifest = EvaluationRunManifest {
        manifest_version: SUMMARY_MANIFEST_VERSION,
        run_id,
        started_at,
        completed_at: now_utc_string(),
        backend: args.backend.as_str().to_string(),
        paths: EvaluationPaths {
            corpus_path: args.corpus.display().to_string(),
            corpus_sha256,
            report_path: args.output.display().to_string(),
        },
        metrics,
    };
    write_json_pretty(&summary_path, &manifest)?;
    info!(path = %summary_path.display(), "wrote evaluation summary");

    Ok(())
}

pub fn default_summary_path(report_path: &Path) -> PathBuf {
    report_path.with_extension("summary.json")
}
