use std::collections::BTreeMap;

use crate::model::{ErrorBreakdownEntry, EvaluationMetrics, RelationBreakdownEntry};

use super::classify::ErrorCategory;
use super::hallucination::correction_rate;
use super::pipeline::ScoredCase;
use super::relation::RelationTag;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelationBucket {
    pub f1_sum: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub total: usize,
    pub f1_sum: f64,
    pub hits: usize,
    pub hdr_numerator: usize,
    pub hdr_denominator: usize,
    pub errors: BTreeMap<ErrorCategory, usize>,
    pub relations: BTreeMap<RelationTag, RelationBucket>,
}

impl RunSummary {
    pub fn fold(&mut self, case: &ScoredCase) {
        self.total += 1;
        self.f1_sum += case.f1;
        if case.hit {
            self.hits += 1;
        }

        if case.hallucination.is_opportunity() {
            self.hdr_denominator += 1;
            if case.hallucination.is_corrected() {
                self.hdr_numerator += 1;
            }
        }

        *self.errors.entry(case.error_category).or_default() += 1;

        if case.relation_tag.is_tracked() {
            let bucket = self.relations.entry(case.relation_tag).or_default();
            bucket.f1_sum += case.f1;
            bucket.count += 1;
        }
    }

    pub fn error_count(&self, category: ErrorCategory) -> usize {
        self.errors.get(&category).copied().unwrap_or(0)
    }

    pub fn finalize(&self) -> EvaluationMetrics {
        let errors = ErrorCategory::ALL
            .iter()
            .map(|category| {
                let count = self.error_count(*category);
                ErrorBreakdownEntry {
                    error_type: category.as_str().to_string(),
                    count,
                    percent: percentage(count as f64, self.total),
                }
            })
            .collect();

        let relations = RelationTag::TRACKED
            .iter()
            .filter_map(|tag| {
                let bucket = self.relations.get(tag)?;
                Some(RelationBreakdownEntry {
                    relation_type: tag.as_str().to_string(),
                    count: bucket.count,
                    avg_f1: percentage(bucket.f1_sum, bucket.count)?,
                })
            })
            .collect();

        EvaluationMetrics {
            total_cases: self.total,
            avg_f1: percentage(self.f1_sum, self.total),
            hits_at_1_rate: percentage(self.hits as f64, self.total),
            hdr: correction_rate(self.hdr_numerator, self.hdr_denominator),
            hdr_numerator: self.hdr_numerator,
            hdr_denominator: self.hdr_denominator,
            errors,
            relations,
        }
    }
}

fn percentage(numerator: f64, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator / denominator as f64 * 100.0)
    }
}
