use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub question: String,
    #[serde(default)]
    pub golden_answer: Vec<String>,
    #[serde(default)]
    pub llm_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResponse {
    #[serde(alias = "status")]
    pub state: i64,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemResult {
    Ok(Vec<String>),
    Miss,
}

impl SystemResult {
    pub fn answers(&self) -> &[String] {
        match self {
            Self::Ok(answers) => answers,
            Self::Miss => &[],
        }
    }
}

impl TryFrom<QueryResponse> for SystemResult {
    type Error = anyhow::Error;

    fn try_from(response: QueryResponse) -> Result<Self> {
        if response.state != 0 {
            return Ok(Self::Miss);
        }
        if response.data.is_null() {
            return Ok(Self::Ok(Vec::new()));
        }

        let answers = serde_json::from_value::<Vec<String>>(response.data)
            .context("successful response data is not a list of strings")?;
        Ok(Self::Ok(answers))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayEntry {
    pub question: String,
    #[serde(flatten)]
    pub response: QueryResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationPaths {
    pub corpus_path: String,
    pub corpus_sha256: String,
    pub report_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBreakdownEntry {
    pub error_type: String,
    pub count: usize,
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationBreakdownEntry {
    pub relation_type: String,
    pub count: usize,
    pub avg_f1: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub total_cases: usize,
    pub avg_f1: Option<f64>,
    pub hits_at_1_rate: Option<f64>,
    pub hdr: f64,
    pub hdr_numerator: usize,
    pub hdr_denominator: usize,
    pub errors: Vec<ErrorBreakdownEntry>,
    pub relations: Vec<RelationBreakdownEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub started_at: String,
    pub completed_at: String,
    pub backend: String,
    pub paths: EvaluationPaths,
    pub metrics: EvaluationMetrics,
}
