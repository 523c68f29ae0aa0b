use std::collections::HashSet;

pub fn normalize_answer(text: &str) -> HashSet<String> {
    if text.is_empty() {
        return HashSet::new();
    }

    let cleaned = text
        .to_lowercase()
        .chars()
        .map(|character| {
            if is_word_char(character) || character.is_whitespace() {
                character
            } else {
                ' '
            }
        })
        .collect::<String>();

    cleaned.split_whitespace().map(ToOwned::to_owned).collect()
}

pub fn normalize_gold_answer(answer: &str) -> String {
    answer.to_lowercase()
}

fn is_word_char(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}
