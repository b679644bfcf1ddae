//! Self-Reflection Record
//!
//! Four free-text narrative fields gathered after the quiz. Every field is
//! independently optional: empty strings are valid and forwarded to the
//! analysis as-is, so there is no required-field enforcement anywhere.

use serde::{Deserialize, Serialize};

/// Addresses one narrative field for single-field updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionField {
    Struggles,
    Testimonies,
    Fears,
    Goals,
}

impl ReflectionField {
    /// All fields, in presentation order
    pub const ALL: [ReflectionField; 4] = [
        ReflectionField::Struggles,
        ReflectionField::Testimonies,
        ReflectionField::Fears,
        ReflectionField::Goals,
    ];

    /// Prompt shown when collecting this field
    pub fn prompt(&self) -> &'static str {
        match self {
            ReflectionField::Struggles => "What struggles have shaped you?",
            ReflectionField::Testimonies => "What achievements are you proud of?",
            ReflectionField::Fears => "What fears hold you back?",
            ReflectionField::Goals => "What goals are you working toward?",
        }
    }
}

/// The user's narrative, finalized on explicit submit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    pub struggles: String,
    pub testimonies: String,
    pub fears: String,
    pub goals: String,
}

impl Reflection {
    /// Replace one field's value, leaving the others untouched
    pub fn set(&mut self, field: ReflectionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ReflectionField::Struggles => self.struggles = value,
            ReflectionField::Testimonies => self.testimonies = value,
            ReflectionField::Fears => self.fears = value,
            ReflectionField::Goals => self.goals = value,
        }
    }

    /// Read one field's current value
    pub fn get(&self, field: ReflectionField) -> &str {
        match field {
            ReflectionField::Struggles => &self.struggles,
            ReflectionField::Testimonies => &self.testimonies,
            ReflectionField::Fears => &self.fears,
            ReflectionField::Goals => &self.goals,
        }
    }
}
