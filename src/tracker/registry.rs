use chrono::NaiveDate;

use crate::db::StudyRepository;
use crate::models::{Level, OverallProgress, Plan, PlanStatus};

/// Ordered list of plans, persisted as one unit.
pub struct PlanRegistry<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R: StudyRepository + ?Sized> PlanRegistry<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn load_plans(&self) -> Vec<Plan> {
        self.repo.load_plans()
    }

    pub fn save_plans(&self, plans: &[Plan]) {
        self.repo.save_plans(plans);
    }

    pub fn find_plan(&self, id: &str) -> Option<Plan> {
        self.load_plans().into_iter().find(|p| p.id == id)
    }

    /// Replace the plan with the same id in place, or append it.
    pub fn upsert_plan(&self, plan: Plan) {
        let mut plans = self.load_plans();
        match plans.iter().position(|p| p.id == plan.id) {
            Some(idx) => plans[idx] = plan,
            None => plans.push(plan),
        }
        self.save_plans(&plans);
    }

    /// Move a plan between active and completed. Returns the updated plan.
    pub fn set_status(&self, id: &str, status: PlanStatus) -> Option<Plan> {
        let mut plan = self.find_plan(id)?;
        if plan.status != status {
            tracing::info!(plan_id = id, status = status.as_str(), "plan status changed");
            plan.status = status;
            self.upsert_plan(plan.clone());
        }
        Some(plan)
    }

    /// Seed the demo plans when nothing is stored yet. Returns how many were added.
    pub fn seed_demo_plans(&self, now: i64) -> usize {
        if !self.load_plans().is_empty() {
            return 0;
        }
        let plans = demo_plans(now);
        self.save_plans(&plans);
        for (plan_id, steps_done, total_steps) in [("vector", 1, 4), ("prob", 2, 3)] {
            self.repo.save_overall_progress(
                plan_id,
                &OverallProgress::new(plan_id, steps_done, total_steps, now),
            );
        }
        tracing::info!(count = plans.len(), "seeded demo plans");
        plans.len()
    }
}

fn demo_plans(now: i64) -> Vec<Plan> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Plan {
            id: "vector".into(),
            title: "벡터 기초 1주 완성".into(),
            start: date(2025, 10, 22),
            end: date(2025, 10, 29),
            level: Level::Intermediate,
            steps: 4,
            with_quiz: true,
            topics: vec!["벡터".into(), "내적".into(), "외적".into()],
            resources: vec!["https://example.com/vector".into()],
            created_at: now,
            status: PlanStatus::Active,
        },
        Plan {
            id: "prob".into(),
            title: "확률과 통계 2주 완성".into(),
            start: date(2025, 10, 22),
            end: date(2025, 11, 5),
            level: Level::Beginner,
            steps: 3,
            with_quiz: true,
            topics: vec![
                "확률".into(),
                "분산".into(),
                "표준편차".into(),
                "가설검정".into(),
            ],
            resources: vec!["https://example.com/prob".into()],
            created_at: now,
            status: PlanStatus::Active,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, StoreRepository};

    fn plan(id: &str, title: &str) -> Plan {
        Plan {
            id: id.into(),
            title: title.into(),
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
            level: Level::Beginner,
            steps: 3,
            with_quiz: false,
            topics: vec!["a".into()],
            resources: vec![],
            created_at: 0,
            status: PlanStatus::Active,
        }
    }

    #[test]
    fn test_upsert_appends_new_id() {
        let repo = StoreRepository::new(MemoryStore::new());
        let registry = PlanRegistry::new(&repo);
        registry.upsert_plan(plan("a", "A"));
        registry.upsert_plan(plan("b", "B"));
        let ids: Vec<_> = registry.load_plans().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let repo = StoreRepository::new(MemoryStore::new());
        let registry = PlanRegistry::new(&repo);
        registry.save_plans(&[plan("a", "A"), plan("b", "B"), plan("c", "C")]);
        registry.upsert_plan(plan("b", "B2"));
        let plans = registry.load_plans();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0], plan("a", "A"));
        assert_eq!(plans[1].title, "B2");
        assert_eq!(plans[2], plan("c", "C"));
    }

    #[test]
    fn test_set_status() {
        let repo = StoreRepository::new(MemoryStore::new());
        let registry = PlanRegistry::new(&repo);
        registry.upsert_plan(plan("a", "A"));
        let updated = registry.set_status("a", PlanStatus::Completed).unwrap();
        assert!(updated.is_completed());
        assert!(registry.find_plan("a").unwrap().is_completed());
        assert!(registry.set_status("missing", PlanStatus::Completed).is_none());
    }

    #[test]
    fn test_seed_only_when_empty() {
        let repo = StoreRepository::new(MemoryStore::new());
        let registry = PlanRegistry::new(&repo);
        assert_eq!(registry.seed_demo_plans(5), 2);
        assert_eq!(registry.seed_demo_plans(6), 0);
        assert_eq!(registry.load_plans().len(), 2);
        let progress = repo.load_overall_progress("prob").unwrap();
        assert_eq!((progress.steps_done, progress.total_steps), (2, 3));
        assert_eq!(progress.plan_id, "prob");
    }
}
