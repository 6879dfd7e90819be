use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StudyError;
use crate::models::{GradingResult, QuizSubmission};
use crate::tracker::compute_progress_percent;

pub fn report_file_name(plan_id: &str) -> String {
    format!("report-{plan_id}.json")
}

/// Write the stored submission (or `{}` when there is none) as `report-<planId>.json`.
pub fn export_report(
    dir: &Path,
    plan_id: &str,
    submission: Option<&QuizSubmission>,
) -> Result<PathBuf, StudyError> {
    let body = match submission {
        Some(s) => serde_json::to_string_pretty(s)
            .map_err(|e| StudyError::io(format!("Failed to encode report: {e}")))?,
        None => "{}".to_string(),
    };
    fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(plan_id));
    fs::write(&path, body)?;
    tracing::info!(path = %path.display(), "report exported");
    Ok(path)
}

/// Grading to report on: the submission's, or an empty result over `question_count`.
pub fn report_grading(submission: Option<&QuizSubmission>, question_count: u32) -> GradingResult {
    submission
        .map(|s| s.grading.clone())
        .unwrap_or_else(|| GradingResult::empty(question_count))
}

pub fn summary_text(title: &str, grading: &GradingResult) -> String {
    let percent = compute_progress_percent(grading.correct_count, grading.total);
    format!(
        "계획: {title}\n점수: {percent}% ({}/{})",
        grading.correct_count, grading.total
    )
}
