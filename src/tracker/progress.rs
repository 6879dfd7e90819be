use std::collections::BTreeMap;

use crate::db::StudyRepository;
use crate::error::StudyError;
use crate::models::{
    Answer, ConceptProgress, ConceptStage, OverallProgress, Plan, Question, QuizAttempt,
    QuizSubmission, StepOutcome, CONCEPT_STAGES,
};
use crate::time::Clock;

use super::grader;

/// Checklist items a learner ticks off before submitting a practice.
pub const PRACTICE_CHECKLIST: [&str; 3] = [
    "핵심 공식/정의 재작성",
    "예시 문제 1개 풀이",
    "오답/오해 포인트 정리",
];
const PRACTICE_MIN_ANSWER_CHARS: usize = 10;

/// `round(done / max(total, 1) * 100)`, clamped to `0..=100`.
pub fn compute_progress_percent(done: u32, total: u32) -> u8 {
    let ratio = f64::from(done) / f64::from(total.max(1));
    (ratio * 100.0).round().min(100.0) as u8
}

/// Focused step after `done` steps: the next one, or the last when finished.
pub fn active_index(done: u32, total: u32) -> u32 {
    done.min(total.saturating_sub(1))
}

fn outcome(done: u32, total: u32) -> StepOutcome {
    StepOutcome {
        done,
        total,
        active_index: active_index(done, total),
        percent: compute_progress_percent(done, total),
    }
}

/// A practice submission for a topic's exercise stage.
#[derive(Debug, Clone, Default)]
pub struct Practice {
    pub checks: [bool; 3],
    pub short_answer: String,
}

impl Practice {
    pub fn is_complete(&self) -> bool {
        self.checks.iter().all(|c| *c)
            && self.short_answer.trim().chars().count() >= PRACTICE_MIN_ANSWER_CHARS
    }
}

/// Progress bookkeeping for plans and their topics.
///
/// Every save merges with what is stored, so recorded progress never goes
/// backwards regardless of the order steps are completed in.
pub struct ProgressTracker<'a, R: ?Sized> {
    repo: &'a R,
    clock: Clock,
}

impl<'a, R: StudyRepository + ?Sized> ProgressTracker<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self::with_clock(repo, Clock::default())
    }

    pub fn with_clock(repo: &'a R, clock: Clock) -> Self {
        Self { repo, clock }
    }

    pub fn load_overall_progress(&self, plan_id: &str) -> Option<OverallProgress> {
        self.repo.load_overall_progress(plan_id)
    }

    /// Store overall progress, keeping the larger of the stored and new `steps_done`.
    pub fn save_overall_progress(&self, plan_id: &str, progress: OverallProgress) -> OverallProgress {
        let stored = self
            .repo
            .load_overall_progress(plan_id)
            .map_or(0, |p| p.steps_done);
        let merged = OverallProgress {
            plan_id: plan_id.to_string(),
            steps_done: progress.steps_done.max(stored),
            ..progress
        };
        self.repo.save_overall_progress(plan_id, &merged);
        merged
    }

    pub fn load_concept_progress(&self, plan_id: &str, topic: &str) -> Option<ConceptProgress> {
        self.repo.load_concept_progress(plan_id, topic)
    }

    /// Store topic progress, keeping the larger of the stored and new `done`.
    pub fn save_concept_progress(
        &self,
        plan_id: &str,
        topic: &str,
        progress: ConceptProgress,
    ) -> ConceptProgress {
        let stored = self
            .repo
            .load_concept_progress(plan_id, topic)
            .map_or(0, |p| p.done);
        let merged = ConceptProgress {
            plan_id: plan_id.to_string(),
            topic: topic.to_string(),
            done: progress.done.max(stored),
            ..progress
        };
        self.repo.save_concept_progress(plan_id, topic, &merged);
        merged
    }

    /// Stored progress for a plan, or zero progress over its step count.
    pub fn overall_for(&self, plan: &Plan) -> OverallProgress {
        self.load_overall_progress(&plan.id)
            .unwrap_or_else(|| OverallProgress::new(&plan.id, 0, plan.steps, 0))
    }

    pub fn concept_for(&self, plan_id: &str, topic: &str) -> ConceptProgress {
        self.load_concept_progress(plan_id, topic)
            .unwrap_or_else(|| ConceptProgress::new(plan_id, topic, 0, 0))
    }

    pub fn plan_percent(&self, plan: &Plan) -> u8 {
        let p = self.overall_for(plan);
        let total = if p.total_steps > 0 { p.total_steps } else { plan.steps };
        compute_progress_percent(p.steps_done, total)
    }

    pub fn concept_percent(&self, plan_id: &str, topic: &str) -> u8 {
        let p = self.concept_for(plan_id, topic);
        compute_progress_percent(p.done, CONCEPT_STAGES)
    }

    /// Mark step `index` (0-based) of a plan as done.
    pub fn complete_plan_step(&self, plan: &Plan, index: usize) -> Result<StepOutcome, StudyError> {
        let total = plan.steps;
        if index >= total as usize {
            return Err(StudyError::step_out_of_range(index, total));
        }
        let saved = self.save_overall_progress(
            &plan.id,
            OverallProgress::new(&plan.id, index as u32 + 1, total, self.clock.now_millis()),
        );
        tracing::debug!(plan_id = %plan.id, step = index, done = saved.steps_done, "plan step completed");
        Ok(outcome(saved.steps_done, total))
    }

    /// Mark one of a topic's three stages as done.
    pub fn complete_concept_stage(&self, plan_id: &str, topic: &str, stage: ConceptStage) -> StepOutcome {
        let saved = self.save_concept_progress(
            plan_id,
            topic,
            ConceptProgress::new(plan_id, topic, stage.index() as u32 + 1, self.clock.now_millis()),
        );
        tracing::debug!(plan_id, topic, stage = stage.as_str(), done = saved.done, "concept stage completed");
        outcome(saved.done, CONCEPT_STAGES)
    }

    /// Complete the exercise stage, provided the practice is finished. Writes nothing otherwise.
    pub fn submit_practice(
        &self,
        plan_id: &str,
        topic: &str,
        practice: &Practice,
    ) -> Result<StepOutcome, StudyError> {
        if !practice.is_complete() {
            return Err(StudyError::practice_incomplete());
        }
        Ok(self.complete_concept_stage(plan_id, topic, ConceptStage::Exercise))
    }

    pub fn load_quiz_submission(&self, plan_id: &str) -> Option<QuizSubmission> {
        self.repo.load_quiz_submission(plan_id)
    }

    pub fn save_quiz_submission(&self, plan_id: &str, submission: &QuizSubmission) {
        self.repo.save_quiz_submission(plan_id, submission);
    }

    /// Record when the learner opened the quiz. Restarting resets the timer.
    pub fn start_quiz(&self, plan_id: &str) -> QuizAttempt {
        let attempt = QuizAttempt {
            started_at: self.clock.now_millis(),
        };
        self.repo.save_quiz_attempt(plan_id, &attempt);
        attempt
    }

    /// Grade and store a submission, replacing any earlier one for the plan.
    pub fn submit_quiz(
        &self,
        plan_id: &str,
        answers: BTreeMap<u32, Answer>,
        questions: &[Question],
    ) -> QuizSubmission {
        let submitted_at = self.clock.now_millis();
        let started_at = self
            .repo
            .load_quiz_attempt(plan_id)
            .map_or(submitted_at, |a| a.started_at);
        let grading = grader::grade(&answers, questions);
        let submission = QuizSubmission {
            plan_id: plan_id.to_string(),
            answers,
            started_at,
            submitted_at,
            elapsed_ms: (submitted_at - started_at).max(0),
            grading,
        };
        self.save_quiz_submission(plan_id, &submission);
        self.repo.clear_quiz_attempt(plan_id);
        tracing::info!(
            plan_id,
            correct = submission.grading.correct_count,
            total = submission.grading.total,
            "quiz submitted"
        );
        submission
    }

    /// Score of the stored submission as a percentage, if any.
    pub fn quiz_percent(&self, plan_id: &str) -> Option<u8> {
        self.load_quiz_submission(plan_id)
            .map(|s| compute_progress_percent(s.grading.correct_count, s.grading.total))
    }

    /// Mean of the per-plan quiz percentages, rounded; zero when nothing was submitted.
    pub fn average_score(&self, plans: &[Plan]) -> u8 {
        let scores: Vec<u32> = plans
            .iter()
            .filter_map(|p| self.quiz_percent(&p.id))
            .map(u32::from)
            .collect();
        if scores.is_empty() {
            return 0;
        }
        let sum: u32 = scores.iter().sum();
        (f64::from(sum) / scores.len() as f64).round() as u8
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }
}
