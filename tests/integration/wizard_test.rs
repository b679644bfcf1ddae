//! Wizard Flow Integration Tests
//!
//! Drives the controller through complete assessments with a scripted
//! provider and checks the transition contract: the vector finalizes on
//! the last answer, exactly one request per submission, and any failure
//! discards everything.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use pathfinder::error::AppError;
use pathfinder::wizard::{AnswerOutcome, AssessmentWizard, WizardPhase};
use pathfinder_core::analysis::{CareerAnalysis, CareerMatch};
use pathfinder_core::question::{Question, QuestionOption};
use pathfinder_core::reflection::{Reflection, ReflectionField};
use pathfinder_core::scores::{ScoreCategory, ScoreVector};
use pathfinder_llm::{AnalysisError, AnalysisProvider, AnalysisResult};

// ============================================================================
// Helpers
// ============================================================================

enum FakeBehavior {
    Succeed(CareerAnalysis),
    FailTransport,
    Hang,
}

struct FakeProvider {
    behavior: FakeBehavior,
    calls: AtomicUsize,
    last_inputs: Mutex<Option<(ScoreVector, Reflection)>>,
}

impl FakeProvider {
    fn new(behavior: FakeBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_inputs: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn model(&self) -> &str {
        "scripted"
    }

    async fn analyze(
        &self,
        scores: &ScoreVector,
        reflection: &Reflection,
    ) -> AnalysisResult<CareerAnalysis> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_inputs.lock().unwrap() = Some((*scores, reflection.clone()));
        match &self.behavior {
            FakeBehavior::Succeed(analysis) => Ok(analysis.clone()),
            FakeBehavior::FailTransport => Err(AnalysisError::TransportFailure {
                message: "connection reset".to_string(),
                status: None,
            }),
            FakeBehavior::Hang => {
                // Parked until aborted
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("hang task should have been aborted")
            }
        }
    }

    async fn health_check(&self) -> AnalysisResult<()> {
        Ok(())
    }
}

fn sample_analysis() -> CareerAnalysis {
    CareerAnalysis {
        persona: "The Navigator".to_string(),
        summary: "Balanced profile with an analytical edge.".to_string(),
        empathetic_note: "Doubt is a sign you care about doing it right.".to_string(),
        top_careers: vec![CareerMatch {
            title: "Research Analyst".to_string(),
            ..Default::default()
        }],
        motivational_videos: vec![],
        search_sources: vec![],
    }
}

/// Five questions: question 1 scores 10 analytical, the rest score 0.
fn scenario_questions() -> Vec<Question> {
    let categories = [
        ScoreCategory::Analytical,
        ScoreCategory::Creative,
        ScoreCategory::Social,
        ScoreCategory::Leadership,
        ScoreCategory::Practical,
    ];
    categories
        .iter()
        .enumerate()
        .map(|(i, category)| Question {
            id: (i + 1) as u32,
            text: format!("Question {}", i + 1),
            category: *category,
            options: vec![QuestionOption {
                label: "Only option".to_string(),
                score: if i == 0 { 10 } else { 0 },
            }],
        })
        .collect()
}

fn answer_full_quiz(wizard: &mut AssessmentWizard) {
    let count = wizard.questions().len();
    for i in 0..count {
        let outcome = wizard.answer(0).unwrap();
        if i + 1 == count {
            assert_eq!(outcome, AnswerOutcome::QuizComplete);
        } else {
            assert_eq!(outcome, AnswerOutcome::NextQuestion);
        }
    }
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn test_full_assessment_reaches_results() {
    let provider = FakeProvider::new(FakeBehavior::Succeed(sample_analysis()));
    let mut wizard = AssessmentWizard::new(provider.clone() as Arc<dyn AnalysisProvider>);

    wizard.start().unwrap();
    answer_full_quiz(&mut wizard);
    assert!(matches!(wizard.phase(), WizardPhase::Reflection { .. }));

    wizard
        .set_reflection(ReflectionField::Struggles, "changed schools often")
        .unwrap();
    wizard
        .set_reflection(ReflectionField::Goals, "find stable, meaningful work")
        .unwrap();

    wizard.submit_reflection().unwrap();
    assert!(matches!(wizard.phase(), WizardPhase::Analyzing { .. }));

    wizard.await_analysis().await.unwrap();
    assert!(matches!(wizard.phase(), WizardPhase::Results { .. }));
    assert_eq!(wizard.analysis().unwrap().persona, "The Navigator");
    // Results carry the finalized vector for rendering
    assert!(wizard.scores().is_some());
    assert_eq!(wizard.snapshot().progress, 1.0);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_request_carries_finalized_inputs() {
    let provider = FakeProvider::new(FakeBehavior::Succeed(sample_analysis()));
    let mut wizard = AssessmentWizard::with_questions(
        provider.clone() as Arc<dyn AnalysisProvider>,
        scenario_questions(),
    );

    wizard.start().unwrap();
    answer_full_quiz(&mut wizard);
    wizard
        .set_reflection(ReflectionField::Fears, "being stuck")
        .unwrap();
    wizard.submit_reflection().unwrap();
    wizard.await_analysis().await.unwrap();

    let (scores, reflection) = provider.last_inputs.lock().unwrap().clone().unwrap();
    assert_eq!(scores.analytical, 10);
    assert_eq!(scores.total(), 10);
    assert_eq!(reflection.fears, "being stuck");
    assert_eq!(reflection.struggles, "");
}

// ============================================================================
// Scenario: analytical 10, everything else 0
// ============================================================================

#[tokio::test]
async fn test_quiz_finalizes_exactly_after_last_answer() {
    let provider = FakeProvider::new(FakeBehavior::Succeed(sample_analysis()));
    let mut wizard = AssessmentWizard::with_questions(
        provider.clone() as Arc<dyn AnalysisProvider>,
        scenario_questions(),
    );

    wizard.start().unwrap();
    for _ in 0..4 {
        wizard.answer(0).unwrap();
        // Still collecting: the transition must not fire early
        assert!(matches!(wizard.phase(), WizardPhase::Quiz { .. }));
    }

    assert_eq!(wizard.answer(0).unwrap(), AnswerOutcome::QuizComplete);
    match wizard.phase() {
        WizardPhase::Reflection { scores, .. } => {
            assert_eq!(
                *scores,
                ScoreVector {
                    analytical: 10,
                    creative: 0,
                    social: 0,
                    leadership: 0,
                    practical: 0,
                }
            );
        }
        other => panic!("expected reflection phase, got {}", other.label()),
    }
}

// ============================================================================
// Backward edge
// ============================================================================

#[tokio::test]
async fn test_back_to_quiz_issues_no_request() {
    let provider = FakeProvider::new(FakeBehavior::Succeed(sample_analysis()));
    let mut wizard = AssessmentWizard::new(provider.clone() as Arc<dyn AnalysisProvider>);

    wizard.start().unwrap();
    answer_full_quiz(&mut wizard);
    wizard
        .set_reflection(ReflectionField::Testimonies, "won a scholarship")
        .unwrap();

    wizard.back_to_quiz().unwrap();
    assert!(matches!(wizard.phase(), WizardPhase::Quiz { index: 0, .. }));
    assert!(wizard.analysis().is_none());
    assert_eq!(provider.calls(), 0);

    // The quiz restarts cleanly and can complete again
    answer_full_quiz(&mut wizard);
    assert!(matches!(wizard.phase(), WizardPhase::Reflection { .. }));
}

// ============================================================================
// Failure path
// ============================================================================

#[tokio::test]
async fn test_failure_discards_all_state() {
    let provider = FakeProvider::new(FakeBehavior::FailTransport);
    let mut wizard = AssessmentWizard::new(provider.clone() as Arc<dyn AnalysisProvider>);

    wizard.start().unwrap();
    answer_full_quiz(&mut wizard);
    wizard
        .set_reflection(ReflectionField::Goals, "own a studio")
        .unwrap();
    wizard.submit_reflection().unwrap();

    let err = wizard.await_analysis().await.unwrap_err();
    assert!(matches!(err, AppError::Analysis(_)));

    // Back at the start with nothing retrievable: a retry is a full re-run
    assert!(matches!(wizard.phase(), WizardPhase::Start));
    assert!(wizard.scores().is_none());
    assert!(wizard.reflection().is_none());
    assert!(wizard.analysis().is_none());
    assert_eq!(provider.calls(), 1);
}

// ============================================================================
// Single in-flight invariant
// ============================================================================

#[tokio::test]
async fn test_double_submission_is_rejected() {
    let provider = FakeProvider::new(FakeBehavior::Succeed(sample_analysis()));
    let mut wizard = AssessmentWizard::new(provider.clone() as Arc<dyn AnalysisProvider>);

    wizard.start().unwrap();
    answer_full_quiz(&mut wizard);
    wizard.submit_reflection().unwrap();

    // Rapid repeated submit: rejected, no second request, phase unchanged
    assert!(matches!(
        wizard.submit_reflection(),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(wizard.phase(), WizardPhase::Analyzing { .. }));

    wizard.await_analysis().await.unwrap();
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_reset_aborts_in_flight_analysis() {
    let provider = FakeProvider::new(FakeBehavior::Hang);
    let mut wizard = AssessmentWizard::new(provider.clone() as Arc<dyn AnalysisProvider>);

    wizard.start().unwrap();
    answer_full_quiz(&mut wizard);
    wizard.submit_reflection().unwrap();

    // Let the spawned request reach the provider before aborting it
    tokio::task::yield_now().await;
    assert_eq!(provider.calls(), 1);

    wizard.reset();
    assert!(matches!(wizard.phase(), WizardPhase::Start));
    assert!(wizard.attempt_id().is_none());

    // A fresh attempt works after the abort
    wizard.start().unwrap();
    assert!(matches!(wizard.phase(), WizardPhase::Quiz { index: 0, .. }));
}

#[tokio::test]
async fn test_reset_from_results_discards_analysis() {
    let provider = FakeProvider::new(FakeBehavior::Succeed(sample_analysis()));
    let mut wizard = AssessmentWizard::new(provider.clone() as Arc<dyn AnalysisProvider>);

    wizard.start().unwrap();
    answer_full_quiz(&mut wizard);
    wizard.submit_reflection().unwrap();
    wizard.await_analysis().await.unwrap();
    assert!(wizard.analysis().is_some());

    wizard.reset();
    assert!(matches!(wizard.phase(), WizardPhase::Start));
    assert!(wizard.analysis().is_none());
    assert!(wizard.scores().is_none());
}
