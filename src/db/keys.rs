/// Every record kind has exactly one key shape; call sites never build key strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey<'a> {
    Plans,
    Progress(&'a str),
    ConceptProgress(&'a str, &'a str),
    Quiz(&'a str),
    QuizAttempt(&'a str),
}

const PLANS: &str = "studytrack.plans";
const PROGRESS_PREFIX: &str = "studytrack.progress.";
const CONCEPT_PROGRESS_PREFIX: &str = "studytrack.cprogress.";
const QUIZ_PREFIX: &str = "studytrack.quiz.";
const QUIZ_ATTEMPT_PREFIX: &str = "studytrack.quiz-attempt.";

impl StorageKey<'_> {
    pub fn to_key(&self) -> String {
        match self {
            Self::Plans => PLANS.to_string(),
            Self::Progress(plan_id) => format!("{PROGRESS_PREFIX}{plan_id}"),
            // Plan ids are slugs, so the first '.' after the prefix always ends the id.
            Self::ConceptProgress(plan_id, topic) => {
                format!("{CONCEPT_PROGRESS_PREFIX}{plan_id}.{topic}")
            }
            Self::Quiz(plan_id) => format!("{QUIZ_PREFIX}{plan_id}"),
            Self::QuizAttempt(plan_id) => format!("{QUIZ_ATTEMPT_PREFIX}{plan_id}"),
        }
    }
}
