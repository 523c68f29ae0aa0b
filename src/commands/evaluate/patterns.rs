use anyhow::{Context, Result};
use regex::Regex;

const QUESTION_TEMPLATES: [(&str, &str); 5] = [
    ("lyricist_of_song", r"歌曲(.+)的作词人是"),
    ("sung_by_whom", r"(.+)是谁唱的"),
    ("who_sang", r"谁唱的(.+)"),
    ("who_wrote_lyrics", r"谁作词的(.+)"),
    ("album_of_song", r"(.+)是哪个专辑的"),
];

#[derive(Debug)]
pub struct QuestionPatterns {
    templates: Vec<(&'static str, Regex)>,
}

impl QuestionPatterns {
    pub fn new() -> Result<Self> {
        let templates = QUESTION_TEMPLATES
            .iter()
            .map(|(name, pattern)| {
                Regex::new(pattern)
                    .with_context(|| format!("failed to compile question template {name}"))
                    .map(|regex| (*name, regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { templates })
    }

    pub fn matches(&self, question: &str) -> bool {
        self.matched_template(question).is_some()
    }

    pub fn matched_template(&self, question: &str) -> Option<&'static str> {
        self.templates
            .iter()
            .find(|(_, regex)| regex.is_match(question))
            .map(|(name, _)| *name)
    }
}
