//! Assessment Wizard
//!
//! The five-phase controller sequencing the assessment: quiz, reflection,
//! the single analysis request, and the result. Each phase variant carries
//! exactly the data valid in that phase, so states like "results without an
//! analysis" are unrepresentable, and phase transitions move data forward
//! by value rather than sharing it.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use uuid::Uuid;

use pathfinder_core::analysis::CareerAnalysis;
use pathfinder_core::question::{built_in_questions, Question};
use pathfinder_core::reflection::{Reflection, ReflectionField};
use pathfinder_core::scores::ScoreVector;
use pathfinder_llm::{AnalysisError, AnalysisProvider};

use crate::error::{AppError, AppResult};

/// Current phase of the assessment, with its owned data.
///
/// The `Analyzing` variant owns the in-flight request as an explicit task:
/// `reset` aborts it, and a user-facing cancel would be a local addition.
#[derive(Debug)]
pub enum WizardPhase {
    /// Landing state; nothing collected yet
    Start,
    /// Quiz in progress: next unanswered question and the running vector
    Quiz { index: usize, scores: ScoreVector },
    /// Quiz complete; narrative being collected
    Reflection {
        scores: ScoreVector,
        reflection: Reflection,
    },
    /// Exactly one analysis request in flight
    Analyzing {
        scores: ScoreVector,
        task: JoinHandle<Result<CareerAnalysis, AnalysisError>>,
    },
    /// Terminal success: everything the rendering layer needs
    Results {
        scores: ScoreVector,
        analysis: CareerAnalysis,
    },
}

impl WizardPhase {
    /// Get the display label for this phase
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Quiz { .. } => "quiz",
            Self::Reflection { .. } => "reflection",
            Self::Analyzing { .. } => "analyzing",
            Self::Results { .. } => "results",
        }
    }

    /// Get the phase index (0-based) for progress calculation
    pub fn index(&self) -> usize {
        match self {
            Self::Start => 0,
            Self::Quiz { .. } => 1,
            Self::Reflection { .. } => 2,
            Self::Analyzing { .. } => 3,
            Self::Results { .. } => 4,
        }
    }
}

/// What an accepted answer did to the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// More questions remain
    NextQuestion,
    /// That was the last question; the vector is finalized
    QuizComplete,
}

/// Serializable view of the wizard for rendering layers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    /// Phase label
    pub phase: String,
    /// Index of the question being shown, when in the quiz
    pub question_cursor: Option<usize>,
    /// Total questions in the bank
    pub total_questions: usize,
    /// Coarse progress through the phases, 0.0 to 1.0
    pub progress: f32,
    /// Attempt id, present once an assessment has started
    pub attempt_id: Option<String>,
}

/// The wizard controller.
///
/// Single logical thread of control: all methods take `&mut self`, each
/// phase owns its data exclusively, and the only suspension point is
/// `await_analysis`. Out-of-phase calls are rejected without changing
/// phase.
pub struct AssessmentWizard {
    questions: Vec<Question>,
    provider: Arc<dyn AnalysisProvider>,
    phase: WizardPhase,
    attempt_id: Option<String>,
}

impl AssessmentWizard {
    /// Create a wizard over the built-in question bank
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self::with_questions(provider, built_in_questions())
    }

    /// Create a wizard over a custom question bank
    pub fn with_questions(provider: Arc<dyn AnalysisProvider>, questions: Vec<Question>) -> Self {
        Self {
            questions,
            provider,
            phase: WizardPhase::Start,
            attempt_id: None,
        }
    }

    /// Current phase
    pub fn phase(&self) -> &WizardPhase {
        &self.phase
    }

    /// The question bank, in presentation order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Attempt id, assigned when an assessment starts
    pub fn attempt_id(&self) -> Option<&str> {
        self.attempt_id.as_deref()
    }

    /// The question currently awaiting an answer
    pub fn current_question(&self) -> Option<&Question> {
        match &self.phase {
            WizardPhase::Quiz { index, .. } => self.questions.get(*index),
            _ => None,
        }
    }

    /// The score vector, for phases that carry one
    pub fn scores(&self) -> Option<&ScoreVector> {
        match &self.phase {
            WizardPhase::Start => None,
            WizardPhase::Quiz { scores, .. }
            | WizardPhase::Reflection { scores, .. }
            | WizardPhase::Analyzing { scores, .. }
            | WizardPhase::Results { scores, .. } => Some(scores),
        }
    }

    /// The reflection being collected, in the reflection phase
    pub fn reflection(&self) -> Option<&Reflection> {
        match &self.phase {
            WizardPhase::Reflection { reflection, .. } => Some(reflection),
            _ => None,
        }
    }

    /// The analysis, once results are in
    pub fn analysis(&self) -> Option<&CareerAnalysis> {
        match &self.phase {
            WizardPhase::Results { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    /// Begin the assessment: `start -> quiz`, question one, zeroed vector
    pub fn start(&mut self) -> AppResult<()> {
        if !matches!(self.phase, WizardPhase::Start) {
            return Err(AppError::validation("assessment already in progress"));
        }
        if self.questions.is_empty() {
            return Err(AppError::config("question bank is empty"));
        }

        let attempt_id = Uuid::new_v4().to_string();
        tracing::info!(attempt = %attempt_id, "assessment started");
        self.attempt_id = Some(attempt_id);
        self.phase = WizardPhase::Quiz {
            index: 0,
            scores: ScoreVector::default(),
        };
        Ok(())
    }

    /// Answer the current question by option index.
    ///
    /// Applies the score accumulator and either advances to the next
    /// question or finalizes the vector and moves to the reflection phase.
    pub fn answer(&mut self, option_index: usize) -> AppResult<AnswerOutcome> {
        let (index, scores) = match &self.phase {
            WizardPhase::Quiz { index, scores } => (*index, *scores),
            _ => return Err(AppError::validation("no quiz in progress")),
        };

        let question = &self.questions[index];
        let option = question.options.get(option_index).ok_or_else(|| {
            AppError::validation(format!(
                "option {} out of range for question {}",
                option_index, question.id
            ))
        })?;

        let scores = scores.apply(question.category, option.score);

        if index + 1 == self.questions.len() {
            tracing::debug!(total = scores.total(), "quiz complete, vector finalized");
            self.phase = WizardPhase::Reflection {
                scores,
                reflection: Reflection::default(),
            };
            Ok(AnswerOutcome::QuizComplete)
        } else {
            self.phase = WizardPhase::Quiz {
                index: index + 1,
                scores,
            };
            Ok(AnswerOutcome::NextQuestion)
        }
    }

    /// Update one reflection field; empty strings are valid
    pub fn set_reflection(&mut self, field: ReflectionField, value: impl Into<String>) -> AppResult<()> {
        match &mut self.phase {
            WizardPhase::Reflection { reflection, .. } => {
                reflection.set(field, value);
                Ok(())
            }
            _ => Err(AppError::validation("no reflection in progress")),
        }
    }

    /// Backward edge `reflection -> quiz`.
    ///
    /// No partial-quiz state is retained anywhere, so re-entering the quiz
    /// restarts it from the first question with a fresh vector. No request
    /// is issued and no analysis exists on this path.
    pub fn back_to_quiz(&mut self) -> AppResult<()> {
        if !matches!(self.phase, WizardPhase::Reflection { .. }) {
            return Err(AppError::validation("can only return to the quiz from the reflection"));
        }
        self.phase = WizardPhase::Quiz {
            index: 0,
            scores: ScoreVector::default(),
        };
        Ok(())
    }

    /// Submit the reflection: `reflection -> analyzing`.
    ///
    /// Issues exactly one provider request, owned by the new phase as a
    /// spawned task. Submitting consumes the reflection variant, so a
    /// second submission for the same attempt is rejected as out-of-phase
    /// rather than silently deduplicated.
    pub fn submit_reflection(&mut self) -> AppResult<()> {
        match std::mem::replace(&mut self.phase, WizardPhase::Start) {
            WizardPhase::Reflection { scores, reflection } => {
                tracing::info!(
                    attempt = self.attempt_id.as_deref().unwrap_or(""),
                    "reflection submitted, requesting analysis"
                );
                let provider = Arc::clone(&self.provider);
                let task = tokio::spawn(async move {
                    provider.analyze(&scores, &reflection).await
                });
                self.phase = WizardPhase::Analyzing { scores, task };
                Ok(())
            }
            other => {
                self.phase = other;
                Err(AppError::validation("no finalized reflection to submit"))
            }
        }
    }

    /// Wait for the in-flight analysis: `analyzing -> results` on success.
    ///
    /// Any failure (transport, malformed reply, schema violation, dead
    /// task) lands back in `start` with all accumulated state discarded;
    /// the error is returned for a generic notification. No retry.
    pub async fn await_analysis(&mut self) -> AppResult<()> {
        let (scores, task) = match std::mem::replace(&mut self.phase, WizardPhase::Start) {
            WizardPhase::Analyzing { scores, task } => (scores, task),
            other => {
                self.phase = other;
                return Err(AppError::validation("no analysis in flight"));
            }
        };

        // From here the phase is already `Start`: every early return below
        // leaves the wizard fully discarded, which is the failure contract.
        let joined = task
            .await
            .map_err(|e| AppError::internal(format!("analysis task died: {}", e)));

        match joined {
            Ok(Ok(analysis)) => {
                tracing::info!(
                    careers = analysis.top_careers.len(),
                    sources = analysis.search_sources.len(),
                    "analysis complete"
                );
                self.phase = WizardPhase::Results { scores, analysis };
                Ok(())
            }
            Ok(Err(analysis_err)) => {
                tracing::warn!(error = %analysis_err, "analysis failed, returning to start");
                Err(analysis_err.into())
            }
            Err(join_err) => {
                tracing::warn!(error = %join_err, "analysis task failed, returning to start");
                Err(join_err)
            }
        }
    }

    /// Reset to `start` from any phase, discarding all state
    /// unconditionally and aborting an in-flight request if one exists.
    pub fn reset(&mut self) {
        if let WizardPhase::Analyzing { task, .. } = &self.phase {
            task.abort();
        }
        tracing::info!(
            attempt = self.attempt_id.as_deref().unwrap_or(""),
            from = self.phase.label(),
            "assessment reset"
        );
        self.attempt_id = None;
        self.phase = WizardPhase::Start;
    }

    /// Serializable view for a rendering layer
    pub fn snapshot(&self) -> WizardSnapshot {
        let question_cursor = match &self.phase {
            WizardPhase::Quiz { index, .. } => Some(*index),
            _ => None,
        };
        WizardSnapshot {
            phase: self.phase.label().to_string(),
            question_cursor,
            total_questions: self.questions.len(),
            progress: self.phase.index() as f32 / 4.0,
            attempt_id: self.attempt_id.clone(),
        }
    }
}
