//! Pathfinder Core
//!
//! Domain types for the career assessment: score categories and vectors,
//! the built-in question bank, the self-reflection record, and the parsed
//! analysis result. This crate is dependency-light (serde + std) so the
//! transport and controller crates can share it freely.

pub mod analysis;
pub mod question;
pub mod reflection;
pub mod scores;

// Re-export main types
pub use analysis::{CareerAnalysis, CareerMatch, GroundingSource, VideoResource};
pub use question::{built_in_questions, Question, QuestionOption};
pub use reflection::{Reflection, ReflectionField};
pub use scores::{ScoreCategory, ScoreVector};
