//! Question Bank
//!
//! The fixed, ordered assessment items. The bank is defined once at startup
//! and never mutated; beyond indexed reads and a length query there are no
//! operations and no failure modes.

use serde::{Deserialize, Serialize};

use crate::scores::ScoreCategory;

/// One selectable answer for a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Display label
    pub label: String,
    /// Points contributed to the question's category when chosen (0-10)
    pub score: u32,
}

/// An immutable assessment item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable ordinal, unique within the bank
    pub id: u32,
    /// Prompt text
    pub text: String,
    /// Category the chosen option's score accrues to
    pub category: ScoreCategory,
    /// Ordered answer options
    pub options: Vec<QuestionOption>,
}

impl Question {
    fn new(id: u32, text: &str, category: ScoreCategory, options: &[(&str, u32)]) -> Self {
        Self {
            id,
            text: text.to_string(),
            category,
            options: options
                .iter()
                .map(|(label, score)| QuestionOption {
                    label: label.to_string(),
                    score: *score,
                })
                .collect(),
        }
    }
}

/// The built-in five-question assessment, in presentation order.
pub fn built_in_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "When facing a complex problem, I usually...",
            ScoreCategory::Analytical,
            &[
                ("Break it down into data points and logic.", 10),
                ("Look for an unconventional, creative shortcut.", 5),
                ("Ask others for their perspective first.", 2),
            ],
        ),
        Question::new(
            2,
            "My ideal workspace would be...",
            ScoreCategory::Creative,
            &[
                ("A vibrant studio with tools and colors.", 10),
                ("A quiet, highly organized office.", 2),
                ("A bustling community hub.", 7),
            ],
        ),
        Question::new(
            3,
            "In a team project, I prefer to...",
            ScoreCategory::Leadership,
            &[
                ("Take charge and define the strategy.", 10),
                ("Do the heavy lifting behind the scenes.", 3),
                ("Ensure everyone feels heard and happy.", 6),
            ],
        ),
        Question::new(
            4,
            "If I were to build something from scratch, it would be...",
            ScoreCategory::Practical,
            &[
                ("A physical piece of furniture or machinery.", 10),
                ("A digital algorithm or software.", 7),
                ("A piece of art or a story.", 4),
            ],
        ),
        Question::new(
            5,
            "Helping people solve their personal problems is...",
            ScoreCategory::Social,
            &[
                ("Extremely rewarding for me.", 10),
                ("Fine, but I prefer technical tasks.", 3),
                ("Exhausting; I'd rather work alone.", 0),
            ],
        ),
    ]
}
