use std::collections::HashMap;

use serde::Serialize;

use crate::models::mood::MoodEntry;

pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "is", "it", "to", "of", "for", "in", "on", "at", "i", "we", "you",
    "they", "with", "this", "that", "be", "are", "was", "were",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Most frequent words across entry notes.
///
/// Notes are lowercased and anything outside `[a-z0-9]` becomes a separator.
/// Stop words and words of two characters or fewer are dropped. Ordered by
/// count, then alphabetically.
pub fn top_keywords<'e, I>(entries: I, limit: usize) -> Vec<KeywordCount>
where
    I: IntoIterator<Item = &'e MoodEntry>,
{
    let mut freq: HashMap<String, usize> = HashMap::new();

    for note in entries.into_iter().filter_map(|e| e.note.as_deref()) {
        let cleaned: String = note
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        for word in cleaned.split_whitespace() {
            if word.len() > 2 && !STOP_WORDS.contains(&word) {
                *freq.entry(word.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut keywords: Vec<KeywordCount> = freq
        .into_iter()
        .map(|(word, count)| KeywordCount { word, count })
        .collect();
    keywords.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    keywords.truncate(limit);
    keywords
}
