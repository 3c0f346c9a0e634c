//! Data model for a parsed TS catalog.
//!
//! A TS file is a flat key-value table: `<context>` blocks group `<message>`
//! entries, each holding one `<source>` (the lookup key within its context)
//! and one `<translation>`. Entries are authored by translators and loaded
//! read-only; nothing here is mutated at runtime by consumers.

use serde::{Deserialize, Serialize};

/// A complete TS document: the `<TS>` root with its contexts in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsDocument {
    /// TS format version from the `version` attribute (e.g., "2.1")
    pub version: String,

    /// Target locale from the `language` attribute (e.g., "ru_RU")
    pub language: String,

    /// Contexts in the order they appear in the file
    pub contexts: Vec<MessageContext>,
}

/// One `<context>` block: the originating component plus its messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContext {
    /// Component/class identifier from `<name>` (e.g., "BackendCommander")
    pub name: String,

    /// Messages in file order
    pub messages: Vec<Message>,
}

/// A single `<source>`/`<translation>` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Canonical (source-language) text, used as the lookup key
    pub source: String,

    /// Localized rendering; placeholders must mirror `source`
    pub translation: String,

    /// Optional translator disambiguation comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// State from the `type` attribute on `<translation>`
    #[serde(default)]
    pub state: TranslationState,
}

/// Translation state carried by the optional `type` attribute.
///
/// `Unfinished` and `Vanished` entries exist in the file but are treated as
/// missing by the lookup layer, which falls back to the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationState {
    #[default]
    Finished,
    Unfinished,
    Vanished,
}

impl TsDocument {
    pub fn new(version: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            language: language.into(),
            contexts: Vec::new(),
        }
    }

    /// Total number of messages across all contexts.
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Find a context by its `<name>`.
    pub fn find_context(&self, name: &str) -> Option<&MessageContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Iterate `(context, message)` pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&MessageContext, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c, m)))
    }
}

impl MessageContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Find a message by its source text.
    pub fn find_message(&self, source: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.source == source)
    }
}

impl Message {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
            comment: None,
            state: TranslationState::Finished,
        }
    }

    /// Whether this entry carries a usable translation.
    pub fn is_translated(&self) -> bool {
        self.state == TranslationState::Finished && !self.translation.is_empty()
    }
}

impl TranslationState {
    /// Parse the `type` attribute value; absent attribute means finished.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "unfinished" => TranslationState::Unfinished,
            "vanished" => TranslationState::Vanished,
            _ => TranslationState::Finished,
        }
    }

    /// Attribute value for serialization; `None` for the default state.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationState::Finished => None,
            TranslationState::Unfinished => Some("unfinished"),
            TranslationState::Vanished => Some("vanished"),
        }
    }
}
