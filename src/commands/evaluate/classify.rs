use super::scoring::answer_set;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ErrorCategory {
    PatternMismatch,
    KgMissing,
    Correct,
    WrongRetrieval,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 4] = [
        Self::PatternMismatch,
        Self::KgMissing,
        Self::Correct,
        Self::WrongRetrieval,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PatternMismatch => "pattern_mismatch",
            Self::KgMissing => "kg_missing",
            Self::Correct => "correct",
            Self::WrongRetrieval => "wrong_retrieval",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClassifierInput<'a> {
    pub pattern_matched: bool,
    pub gold: &'a [String],
    pub system_answers: &'a [String],
}

type RulePredicate = for<'a, 'b> fn(&'a ClassifierInput<'b>) -> bool;

const RULES: [(ErrorCategory, RulePredicate); 3] = [
    (ErrorCategory::PatternMismatch, is_unrecognized_question),
    (ErrorCategory::KgMissing, has_no_answers),
    (ErrorCategory::Correct, answers_equal_gold),
];

fn is_unrecognized_question(input: &ClassifierInput<'_>) -> bool {
    !input.pattern_matched
}

fn has_no_answers(input: &ClassifierInput<'_>) -> bool {
    input.system_answers.is_empty()
}

fn answers_equal_gold(input: &ClassifierInput<'_>) -> bool {
    answer_set(input.system_answers) == answer_set(input.gold)
}

pub fn classify_error(input: &ClassifierInput<'_>) -> ErrorCategory {
    RULES
        .iter()
        .find(|(_, predicate)| predicate(input))
        .map_or(ErrorCategory::WrongRetrieval, |(category, _)| *category)
}
