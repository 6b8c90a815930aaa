//! Note Entity
//!
//! A sticky note as stored in the board document. The board document is a bare
//! JSON array of notes; array order is the board layout.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Author shown when none was given
pub const DEFAULT_AUTHOR: &str = "익명";

/// Title shown when none was given
pub const UNTITLED: &str = "제목 없음";

/// Note color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoteColor {
    #[default]
    Yellow,
    Blue,
    Green,
    Pink,
    Purple,
    Orange,
}

impl NoteColor {
    pub const ALL: [NoteColor; 6] = [
        NoteColor::Yellow,
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Pink,
        NoteColor::Purple,
        NoteColor::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteColor::Yellow => "yellow",
            NoteColor::Blue => "blue",
            NoteColor::Green => "green",
            NoteColor::Pink => "pink",
            NoteColor::Purple => "purple",
            NoteColor::Orange => "orange",
        }
    }

    /// Unknown names fall back to yellow so foreign boards still render
    pub fn from_name(s: &str) -> Self {
        match s {
            "blue" => NoteColor::Blue,
            "green" => NoteColor::Green,
            "pink" => NoteColor::Pink,
            "purple" => NoteColor::Purple,
            "orange" => NoteColor::Orange,
            _ => NoteColor::Yellow,
        }
    }
}

impl From<String> for NoteColor {
    fn from(value: String) -> Self {
        NoteColor::from_name(&value)
    }
}

impl From<NoteColor> for String {
    fn from(value: NoteColor) -> Self {
        value.as_str().to_string()
    }
}

/// Missing, null or mistyped values decode as the field's default.
/// One malformed note must not make the whole board unreadable.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// A single sticky note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Client-generated id, unique within a board
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient")]
    pub color: NoteColor,
    #[serde(default, deserialize_with = "lenient")]
    pub author: String,
    /// Milliseconds since the Unix epoch
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: i64,
}

impl Note {
    /// Build a note with a fresh id and the current timestamp.
    /// An empty author is replaced by [`DEFAULT_AUTHOR`].
    pub fn new(title: String, content: String, color: NoteColor, author: String) -> Self {
        let author = if author.is_empty() {
            DEFAULT_AUTHOR.to_string()
        } else {
            author
        };
        Self {
            id: new_note_id(),
            title,
            content,
            color,
            author,
            created_at: now_millis(),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            DEFAULT_AUTHOR
        } else {
            &self.author
        }
    }
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `note-<millis>-<8 random hex chars>`
pub fn new_note_id() -> String {
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("note-{}-{}", now_millis(), &random[..8])
}
