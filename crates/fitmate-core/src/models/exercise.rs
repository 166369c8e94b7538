//! Exercise model definition.

use serde::{Deserialize, Serialize};

/// A single exercise from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier for the exercise
    pub id: u64,

    /// Display name of the exercise
    pub name: String,

    /// Ordered instruction lines (may be empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
}

impl Exercise {
    /// Build an exercise from its stored newline-separated instructions.
    pub fn from_stored(id: u64, name: String, instructions: Option<&str>) -> Self {
        Self {
            id,
            name,
            instructions: split_instructions(instructions.unwrap_or_default()),
        }
    }

    /// Instructions in their stored, newline-separated form.
    pub fn instructions_text(&self) -> String {
        self.instructions.join("\n")
    }
}

/// Split stored instruction text into trimmed, non-blank lines.
pub(crate) fn split_instructions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
