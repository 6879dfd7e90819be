use crate::models::{ConceptProgress, OverallProgress, Plan, QuizAttempt, QuizSubmission};

use super::keys::StorageKey;
use super::store::KeyValueStore;

/// Typed access to everything the tracker persists.
///
/// Loads are infallible and saves are best-effort, mirroring
/// [`KeyValueStore`]. A network-backed source can implement this directly.
pub trait StudyRepository {
    fn load_plans(&self) -> Vec<Plan>;
    fn save_plans(&self, plans: &[Plan]);

    fn load_overall_progress(&self, plan_id: &str) -> Option<OverallProgress>;
    fn save_overall_progress(&self, plan_id: &str, progress: &OverallProgress);

    fn load_concept_progress(&self, plan_id: &str, topic: &str) -> Option<ConceptProgress>;
    fn save_concept_progress(&self, plan_id: &str, topic: &str, progress: &ConceptProgress);

    fn load_quiz_submission(&self, plan_id: &str) -> Option<QuizSubmission>;
    fn save_quiz_submission(&self, plan_id: &str, submission: &QuizSubmission);

    fn load_quiz_attempt(&self, plan_id: &str) -> Option<QuizAttempt>;
    fn save_quiz_attempt(&self, plan_id: &str, attempt: &QuizAttempt);
    fn clear_quiz_attempt(&self, plan_id: &str);
}

pub struct StoreRepository<S> {
    store: S,
}

impl<S: KeyValueStore> StoreRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> StudyRepository for StoreRepository<S> {
    fn load_plans(&self) -> Vec<Plan> {
        self.store
            .get(&StorageKey::Plans.to_key())
            .unwrap_or_default()
    }

    fn save_plans(&self, plans: &[Plan]) {
        self.store.set(&StorageKey::Plans.to_key(), plans);
    }

    fn load_overall_progress(&self, plan_id: &str) -> Option<OverallProgress> {
        self.store.get(&StorageKey::Progress(plan_id).to_key())
    }

    fn save_overall_progress(&self, plan_id: &str, progress: &OverallProgress) {
        self.store
            .set(&StorageKey::Progress(plan_id).to_key(), progress);
    }

    fn load_concept_progress(&self, plan_id: &str, topic: &str) -> Option<ConceptProgress> {
        self.store
            .get(&StorageKey::ConceptProgress(plan_id, topic).to_key())
    }

    fn save_concept_progress(&self, plan_id: &str, topic: &str, progress: &ConceptProgress) {
        self.store
            .set(&StorageKey::ConceptProgress(plan_id, topic).to_key(), progress);
    }

    fn load_quiz_submission(&self, plan_id: &str) -> Option<QuizSubmission> {
        self.store.get(&StorageKey::Quiz(plan_id).to_key())
    }

    fn save_quiz_submission(&self, plan_id: &str, submission: &QuizSubmission) {
        self.store.set(&StorageKey::Quiz(plan_id).to_key(), submission);
    }

    fn load_quiz_attempt(&self, plan_id: &str) -> Option<QuizAttempt> {
        self.store
            .get::<Option<QuizAttempt>>(&StorageKey::QuizAttempt(plan_id).to_key())
            .flatten()
    }

    fn save_quiz_attempt(&self, plan_id: &str, attempt: &QuizAttempt) {
        self.store
            .set(&StorageKey::QuizAttempt(plan_id).to_key(), &Some(attempt));
    }

    fn clear_quiz_attempt(&self, plan_id: &str) {
        self.store
            .set(&StorageKey::QuizAttempt(plan_id).to_key(), &None::<QuizAttempt>);
    }
}
