//! The greeting record a visitor writes on the message slide.
//!
//! The same three keys (`name`, `message`, `hope2026`) are used everywhere
//! the record is serialized: `localStorage`, the `/api/messages` body, and
//! the row inserted into the remote collection.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user-authored greeting. Field values are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub name: String,
    pub message: String,
    pub hope2026: String,
}

/// One of the three form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Message,
    Hope,
}

impl Field {
    pub const ALL: [Field; 3] = [Self::Name, Self::Message, Self::Hope];

    /// Form label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nama",
            Self::Message => "Pesan singkat",
            Self::Hope => "Harapan 2026",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields that were blank at submission time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("required fields are empty: {}", list(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn list(fields: &[Field]) -> String {
    fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl MessagePayload {
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>, hope2026: impl Into<String>) -> Self {
        Self { name: name.into(), message: message.into(), hope2026: hope2026.into() }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Message => &self.message,
            Field::Hope => &self.hope2026,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Message => &mut self.message,
            Field::Hope => &mut self.hope2026,
        };
        *slot = value.into();
    }

    /// Every field must be non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect();
        if missing.is_empty() { Ok(()) } else { Err(ValidationError { missing }) }
    }
}
