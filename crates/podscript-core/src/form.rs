//! Form model for the generator page: submitted fields, the bounded commentator list,
//! and validation into the outbound request body.

use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound on commentator name fields.
pub const MAX_COMMENTATORS: usize = 4;
const MIN_COMMENTATORS: usize = 1;

pub const DEFAULT_TITLE: &str = "Sample Podcast Title";
pub const DEFAULT_COMMENTATORS: &[&str] = &["John Doe", "Jane Smith"];
pub const DEFAULT_LENGTH_MINUTES: u32 = 30;

pub const EMPTY_TRANSCRIPT_MESSAGE: &str = "Please enter a transcript before generating the podcast.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{}", EMPTY_TRANSCRIPT_MESSAGE)]
    EmptyTranscript,
    #[error("Length must be a whole number of minutes, got {0:?}.")]
    InvalidLength(String),
}

/// Ordered commentator names, always between one and four entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentatorList {
    names: Vec<String>,
}

impl Default for CommentatorList {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentatorList {
    /// One empty name field.
    pub fn new() -> Self {
        Self {
            names: vec![String::new(); MIN_COMMENTATORS],
        }
    }

    /// Keeps at most four names; an empty input becomes a single empty field.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .take(MAX_COMMENTATORS)
            .map(Into::into)
            .collect();
        let mut list = Self { names };
        list.resize(list.names.len());
        list
    }

    /// The page's initial list.
    pub fn defaults() -> Self {
        Self::from_names(DEFAULT_COMMENTATORS.iter().copied())
    }

    /// Sets the number of fields. `count` is clamped to 1..=4; extra names are dropped,
    /// missing ones are padded with empty strings.
    pub fn resize(&mut self, count: usize) {
        let count = count.clamp(MIN_COMMENTATORS, MAX_COMMENTATORS);
        self.names.resize(count, String::new());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Non-empty, trimmed names joined with ", ".
    pub fn joined(&self) -> String {
        self.names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Raw fields as submitted by the page (urlencoded form or JSON). Every field is optional text;
/// parsing and bounds are applied by `commentators` and `validate`. Numeric fields also accept
/// JSON numbers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodcastForm {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub length: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub commentator_count: String,
    #[serde(default)]
    pub commentator_1: Option<String>,
    #[serde(default)]
    pub commentator_2: Option<String>,
    #[serde(default)]
    pub commentator_3: Option<String>,
    #[serde(default)]
    pub commentator_4: Option<String>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    })
}

/// Body sent to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub title: String,
    pub commentators: String,
    pub length: u32,
    pub description: String,
}

impl PodcastForm {
    /// Commentator list sized by `commentator_count`. Without a usable count, the position of the
    /// last submitted name field decides. Missing fields before it become empty names.
    pub fn commentators(&self) -> CommentatorList {
        let mut submitted: Vec<String> = [
            &self.commentator_1,
            &self.commentator_2,
            &self.commentator_3,
            &self.commentator_4,
        ]
        .into_iter()
        .map(|f| f.clone().unwrap_or_default())
        .collect();
        while submitted.last().is_some_and(|n| n.is_empty()) {
            submitted.pop();
        }
        let fallback = submitted.len();
        let mut list = CommentatorList::from_names(submitted);
        let count = self
            .commentator_count
            .trim()
            .parse::<usize>()
            .unwrap_or(fallback);
        list.resize(count);
        list
    }

    /// Validates the form. An empty or whitespace-only transcript is rejected before anything
    /// else; an empty length falls back to the default.
    pub fn validate(&self) -> Result<GenerationRequest, FormError> {
        if self.transcript.trim().is_empty() {
            return Err(FormError::EmptyTranscript);
        }
        let length = match self.length.trim() {
            "" => DEFAULT_LENGTH_MINUTES,
            raw => raw
                .parse::<u32>()
                .ok()
                .filter(|m| *m > 0)
                .ok_or_else(|| FormError::InvalidLength(raw.to_string()))?,
        };
        Ok(GenerationRequest {
            title: self.title.trim().to_string(),
            commentators: self.commentators().joined(),
            length,
            description: self.transcript.clone(),
        })
    }
}
