use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::cli::{BackendKind, EvaluateArgs};
use crate::model::{QueryResponse, ReplayEntry};

pub trait QaBackend {
    fn name(&self) -> &'static str;

    fn query(&mut self, question: &str) -> Result<QueryResponse>;
}

pub fn build_backend(args: &EvaluateArgs) -> Result<Box<dyn QaBackend>> {
    match args.backend {
        BackendKind::Replay => {
            let Some(path) = args.responses.as_deref() else {
                bail!("--responses is required with --backend replay");
            };
            Ok(Box::new(ReplayBackend::load(path)?))
        }
        BackendKind::Command => {
            let Some(program) = args.command.as_deref() else {
                bail!("--command is required with --backend command");
            };
            Ok(Box::new(CommandBackend::new(program, args.command_args.clone())))
        }
    }
}

#[derive(Debug, Default)]
pub struct ReplayBackend {
    responses: HashMap<String, QueryResponse>,
}

impl ReplayBackend {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let entries: Vec<ReplayEntry> = serde_json::from_slice(strip_utf8_bom(&raw))
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let backend = Self::from_entries(entries);
        info!(
            path = %path.display(),
            responses = backend.responses.len(),
            "loaded replay responses"
        );
        Ok(backend)
    }

    pub fn from_entries(entries: Vec<ReplayEntry>) -> Self {
        let mut responses = HashMap::<String, QueryResponse>::with_capacity(entries.len());
        for entry in entries {
            if responses.contains_key(&entry.question) {
                warn!(question = %entry.question, "duplicate replay response, keeping the later one");
            }
            responses.insert(entry.question, entry.response);
        }
        Self { responses }
    }
}

impl QaBackend for ReplayBackend {
    fn name(&self) -> &'static str {
        BackendKind::Replay.as_str()
    }

    fn query(&mut self, question: &str) -> Result<QueryResponse> {
        match self.responses.get(question) {
            Some(response) => Ok(response.clone()),
            None => bail!("no recorded response for question: {question}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
}

impl CommandBackend {
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
        }
    }
}

impl QaBackend for CommandBackend {
    fn name(&self) -> &'static str {
        BackendKind::Command.as_str()
    }

    fn query(&mut self, question: &str) -> Result<QueryResponse> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(question)
            .output()
            .with_context(|| format!("failed to execute {}", self.program))?;

        if !output.status.success() {
            bail!(
                "{} exited with status {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        serde_json::from_slice(strip_utf8_bom(&output.stdout))
            .with_context(|| format!("failed to parse response from {}", self.program))
    }
}

pub fn strip_utf8_bom(raw: &[u8]) -> &[u8] {
    raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw)
}
