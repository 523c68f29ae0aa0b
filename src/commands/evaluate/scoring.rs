use std::collections::HashSet;

use super::normalize::normalize_answer;

pub fn answer_f1(predicted: &str, gold: &[String]) -> f64 {
    let pred_tokens = normalize_answer(predicted);
    let gold_tokens = normalize_answer(&gold.join(" "));

    if gold_tokens.is_empty() {
        return if pred_tokens.is_empty() { 1.0 } else { 0.0 };
    }
    if pred_tokens.is_empty() {
        return 0.0;
    }

    let common = pred_tokens.intersection(&gold_tokens).count();
    let precision = common as f64 / pred_tokens.len() as f64;
    let recall = common as f64 / gold_tokens.len() as f64;
    if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    }
}

pub fn hits_at_1(system_answers: &[String], gold: &[String]) -> bool {
    if system_answers.is_empty() {
        return false;
    }

    let gold_set = answer_set(gold);
    system_answers
        .iter()
        .any(|answer| gold_set.contains(answer.as_str()))
}

pub fn answer_set(values: &[String]) -> HashSet<&str> {
    values.iter().map(String::as_str).collect()
}

pub fn prediction_text(system_answers: &[String]) -> String {
    system_answers.join(", ")
}
