use std::collections::HashSet;

use super::normalize::{normalize_answer, normalize_gold_answer};
use super::scoring::answer_set;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HallucinationOutcome {
    BaselineCorrect,
    Corrected,
    Uncorrected,
}

impl HallucinationOutcome {
    pub fn is_opportunity(self) -> bool {
        !matches!(self, Self::BaselineCorrect)
    }

    pub fn is_corrected(self) -> bool {
        matches!(self, Self::Corrected)
    }
}

pub fn baseline_is_correct(baseline_answer: &str, gold: &[String]) -> bool {
    let baseline_tokens = normalize_answer(baseline_answer);
    let gold_answers = gold
        .iter()
        .map(|answer| normalize_gold_answer(answer))
        .collect::<HashSet<String>>();
    baseline_tokens.is_superset(&gold_answers)
}

pub fn evaluate_hallucination(
    baseline_answer: &str,
    gold: &[String],
    system_answers: &[String],
) -> HallucinationOutcome {
    if baseline_is_correct(baseline_answer, gold) {
        return HallucinationOutcome::BaselineCorrect;
    }

    if answer_set(system_answers).is_superset(&answer_set(gold)) {
        HallucinationOutcome::Corrected
    } else {
        HallucinationOutcome::Uncorrected
    }
}

pub fn correction_rate(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}
