use std::collections::BTreeMap;

use crate::QuestionKey;

/// Answer value that matches every candidate. Also what an unanswered
/// question reads as.
pub const ANY: &str = "any";

/// Answers collected so far in one pass through a mode's questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(BTreeMap<QuestionKey, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: QuestionKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Records an answer, replacing any earlier one for the same key.
    pub fn set(&mut self, key: QuestionKey, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: QuestionKey) -> &str {
        self.0.get(&key).map(String::as_str).unwrap_or(ANY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<V: Into<String>> FromIterator<(QuestionKey, V)> for Answers {
    fn from_iter<T: IntoIterator<Item = (QuestionKey, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
