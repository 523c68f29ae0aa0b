use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::model::TestCase;

use super::backend::strip_utf8_bom;

pub fn load_corpus(path: &Path) -> Result<Vec<TestCase>> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let cases = parse_corpus(&raw).with_context(|| format!("failed to parse {}", path.display()))?;

    if cases.is_empty() {
        warn!(path = %path.display(), "corpus contains no test cases");
    } else {
        info!(path = %path.display(), cases = cases.len(), "loaded corpus");
    }

    Ok(cases)
}

pub fn parse_corpus(raw: &[u8]) -> Result<Vec<TestCase>> {
    let cases = serde_json::from_slice(strip_utf8_bom(raw))?;
    Ok(cases)
}
