//! Tutorial Step Records
//!
//! The unit stored in the field value, and the closed set of editable attributes.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One tutorial step as persisted in the host field.
///
/// Earlier versions of the widget wrote the text attributes with a
/// `tutorial_` prefix; those names are still accepted when decoding.
/// Text attributes decode leniently: `null` or missing becomes `""` and any
/// other non-string value keeps its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, alias = "tutorial_step_number", deserialize_with = "lenient_text")]
    pub step_number: String,
    #[serde(
        default,
        alias = "tutorial_step_description",
        deserialize_with = "lenient_text"
    )]
    pub step_description: String,
    #[serde(default, alias = "tutorial_step_command", deserialize_with = "lenient_text")]
    pub step_command: String,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Ids may arrive as strings or numbers; anything else identifies nothing
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(id) if !id.is_empty() => Ok(id),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("unusable record id: {}", other))),
    }
}

impl Record {
    /// A record with the given id and every text attribute empty
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            step_number: String::new(),
            step_description: String::new(),
            step_command: String::new(),
        }
    }

    /// Copy of this record with `field` overwritten
    pub fn with_field(&self, field: StepField, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        field.set(&mut next, text.into());
        next
    }
}

/// Editable text attribute of a [`Record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepField {
    StepNumber,
    StepDescription,
    StepCommand,
}

impl StepField {
    /// Display order of the columns
    pub const ALL: [StepField; 3] = [
        StepField::StepNumber,
        StepField::StepDescription,
        StepField::StepCommand,
    ];

    /// Attribute name on the wire
    pub fn name(self) -> &'static str {
        match self {
            StepField::StepNumber => "step_number",
            StepField::StepDescription => "step_description",
            StepField::StepCommand => "step_command",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StepField::StepNumber => "Step Number",
            StepField::StepDescription => "Step Description",
            StepField::StepCommand => "Step Command",
        }
    }

    pub fn get(self, record: &Record) -> &str {
        match self {
            StepField::StepNumber => &record.step_number,
            StepField::StepDescription => &record.step_description,
            StepField::StepCommand => &record.step_command,
        }
    }

    pub fn set(self, record: &mut Record, text: String) {
        match self {
            StepField::StepNumber => record.step_number = text,
            StepField::StepDescription => record.step_description = text,
            StepField::StepCommand => record.step_command = text,
        }
    }
}

impl fmt::Display for StepField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute name that is not one of [`StepField::ALL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown step field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for StepField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "step_number" | "tutorial_step_number" => Ok(StepField::StepNumber),
            "step_description" | "tutorial_step_description" => Ok(StepField::StepDescription),
            "step_command" | "tutorial_step_command" => Ok(StepField::StepCommand),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
