use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::model::{SystemResult, TestCase};

use super::aggregate::RunSummary;
use super::backend::QaBackend;
use super::classify::{ClassifierInput, ErrorCategory, classify_error};
use super::hallucination::{HallucinationOutcome, evaluate_hallucination};
use super::patterns::QuestionPatterns;
use super::relation::{RelationTag, relation_tag};
use super::scoring::{answer_f1, hits_at_1, prediction_text};

#[derive(Debug, Clone)]
pub struct ScoredCase {
    pub question: String,
    pub golden_answer: Vec<String>,
    pub llm_answer: String,
    pub system_answers: Vec<String>,
    pub f1: f64,
    pub hit: bool,
    pub hallucination: HallucinationOutcome,
    pub error_category: ErrorCategory,
    pub relation_tag: RelationTag,
}

pub fn score_case(
    case: &TestCase,
    result: SystemResult,
    patterns: &QuestionPatterns,
) -> ScoredCase {
    let system_answers = result.answers().to_vec();

    let pattern_matched = patterns.matches(&case.question);

    let f1 = answer_f1(&prediction_text(&system_answers), &case.golden_answer);
    let hit = hits_at_1(&system_answers, &case.golden_answer);
    let hallucination =
        evaluate_hallucination(&case.llm_answer, &case.golden_answer, &system_answers);
    let error_category = classify_error(&ClassifierInput {
        pattern_matched,
        gold: &case.golden_answer,
        system_answers: &system_answers,
    });

    ScoredCase {
        question: case.question.clone(),
        golden_answer: case.golden_answer.clone(),
        llm_answer: case.llm_answer.clone(),
        system_answers,
        f1,
        hit,
        hallucination,
        error_category,
        relation_tag: relation_tag(&case.question),
    }
}

pub fn evaluate_cases(
    cases: &[TestCase],
    backend: &mut dyn QaBackend,
    patterns: &QuestionPatterns,
) -> Result<(Vec<ScoredCase>, RunSummary)> {
    let mut summary = RunSummary::default();
    let mut scored = Vec::<ScoredCase>::with_capacity(cases.len());

    for (index, case) in cases.iter().enumerate() {
        info!(case = index + 1, question = %case.question, "evaluating case");

        let response = backend
            .query(&case.question)
            .with_context(|| format!("{} backend failed on case {}", backend.name(), index + 1))?;
        debug!(state = response.state, data = ?response.data, "backend returned");

        let system_result = SystemResult::try_from(response)
            .with_context(|| format!("invalid backend response on case {}", index + 1))?;
        let result = score_case(case, system_result, patterns);
        debug!(
            f1 = result.f1,
            hit = result.hit,
            error_type = result.error_category.as_str(),
            relation_type = result.relation_tag.as_str(),
            "case scored"
        );

        summary.fold(&result);
        scored.push(result);
    }

    Ok((scored, summary))
}
