use serde::Serialize;

use crate::db::StudyRepository;
use crate::models::Plan;
use crate::time::dday_label;

use super::progress::ProgressTracker;

#[derive(Debug, Clone, Serialize)]
pub struct PlanCard {
    pub id: String,
    pub title: String,
    pub level: &'static str,
    pub status: &'static str,
    pub start: String,
    pub end: String,
    pub dday: String,
    pub steps_done: u32,
    pub total_steps: u32,
    pub percent: u8,
    pub quiz_percent: Option<u8>,
}

/// Overview of every plan, split into active and completed.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub active_count: usize,
    pub completed_count: usize,
    pub average_score: u8,
    pub active: Vec<PlanCard>,
    pub completed: Vec<PlanCard>,
}

pub fn build<R: StudyRepository + ?Sized>(tracker: &ProgressTracker<'_, R>, plans: &[Plan]) -> Dashboard {
    let today = tracker.clock().today();
    let card = |p: &Plan| {
        let progress = tracker.overall_for(p);
        PlanCard {
            id: p.id.clone(),
            title: p.title.clone(),
            level: p.level.as_str(),
            status: p.status.as_str(),
            start: p.start.to_string(),
            end: p.end.to_string(),
            dday: dday_label(p.end, today),
            steps_done: progress.steps_done,
            total_steps: progress.total_steps,
            percent: tracker.plan_percent(p),
            quiz_percent: tracker.quiz_percent(&p.id),
        }
    };
    let (completed, active): (Vec<&Plan>, Vec<&Plan>) = plans.iter().partition(|p| p.is_completed());
    Dashboard {
        active_count: active.len(),
        completed_count: completed.len(),
        average_score: tracker.average_score(plans),
        active: active.into_iter().map(card).collect(),
        completed: completed.into_iter().map(card).collect(),
    }
}
