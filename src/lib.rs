//! Pathfinder
//!
//! A guided career-assessment client: a fixed psychometric quiz, a
//! free-text self-reflection, one web-grounded AI analysis request, and a
//! structured result. The wizard controller in this crate sequences the
//! domain types from `pathfinder-core` and the service boundary from
//! `pathfinder-llm`; rendering is left to whatever front end drives it.

pub mod config;
pub mod error;
pub mod wizard;

// Re-export main types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use wizard::{AnswerOutcome, AssessmentWizard, WizardPhase, WizardSnapshot};
