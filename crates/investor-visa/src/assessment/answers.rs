use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw answer captured for a single question.
///
/// Form front-ends deliver yes/no questions either as native booleans or as the
/// literal strings `"yes"`/`"no"`, so both shapes are kept as-is. Anything that is
/// not a boolean, number, or string lands in [`AnswerValue::Other`] instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl AnswerValue {
    /// Loose truthiness used by the detailed scorer for flag-style questions.
    pub fn is_truthy(&self) -> bool {
        match self {
            AnswerValue::Boolean(value) => *value,
            AnswerValue::Number(value) => *value != 0.0 && !value.is_nan(),
            AnswerValue::Text(value) => !value.is_empty(),
            AnswerValue::Other(serde_json::Value::Null) => false,
            AnswerValue::Other(_) => true,
        }
    }

    /// Numeric reading of the answer; numeric text is accepted.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(value) if value.is_finite() => Some(*value),
            AnswerValue::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// `true` or exactly `"yes"`.
    pub fn is_affirmative(&self) -> bool {
        matches!(self, AnswerValue::Boolean(true)) || self.as_text() == Some("yes")
    }

    /// `false` or exactly `"no"`.
    pub fn is_negative(&self) -> bool {
        matches!(self, AnswerValue::Boolean(false)) || self.as_text() == Some("no")
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AnswerValue::Other(serde_json::Value::Null))
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Boolean(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<u32> for AnswerValue {
    fn from(value: u32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Number(value as f64)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

/// Answers keyed by question id, read through typed accessors that default when absent.
///
/// Every accessor is total: a missing key or an unexpected value shape reads as the
/// caller-provided default (or `false`/`None`), never as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, AnswerValue>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used by fixtures and the CLI demo.
    pub fn with(mut self, id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(id.into(), value.into());
    }

    pub fn remove(&mut self, id: &str) -> Option<AnswerValue> {
        self.0.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn flag(&self, id: &str) -> bool {
        self.get(id).map(AnswerValue::is_truthy).unwrap_or(false)
    }

    pub fn number_or(&self, id: &str, default: f64) -> f64 {
        self.get(id)
            .and_then(AnswerValue::as_number)
            .unwrap_or(default)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(AnswerValue::as_text)
    }

    pub fn text_or<'a>(&'a self, id: &str, default: &'a str) -> &'a str {
        self.text(id).unwrap_or(default)
    }

    pub fn is_yes(&self, id: &str) -> bool {
        self.get(id)
            .map(AnswerValue::is_affirmative)
            .unwrap_or(false)
    }

    pub fn is_no(&self, id: &str) -> bool {
        self.get(id).map(AnswerValue::is_negative).unwrap_or(false)
    }
}

impl From<BTreeMap<String, AnswerValue>> for AnswerMap {
    fn from(value: BTreeMap<String, AnswerValue>) -> Self {
        Self(value)
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerMap
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = AnswerMap::new();
        for (id, value) in iter {
            answers.insert(id, value);
        }
        answers
    }
}
