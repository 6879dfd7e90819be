use crate::models::{ConceptProgress, ConceptStage, OverallProgress, Plan, Question, QuestionKind, QuizSubmission};
use crate::tracker::compute_progress_percent;
use crate::tracker::content::StepInfo;
use crate::tracker::dashboard::{Dashboard, PlanCard};

pub fn print_plan(p: &Plan) {
    println!("Plan: {} ({})", p.title, p.id);
    println!("  Level: {}", p.level.as_str());
    println!("  Period: {} ~ {}", p.start, p.end);
    println!("  Steps: {}{}", p.steps, if p.with_quiz { " (with quiz)" } else { "" });
    println!("  Topics: {}", p.topics.join(", "));
    if !p.resources.is_empty() {
        println!("  Resources: {}", p.resources.join(", "));
    }
    println!("  Status: {}", p.status.as_str());
}

pub fn print_plan_list(plans: &[Plan], active_id: Option<&str>) {
    if plans.is_empty() {
        println!("No plans found.");
        return;
    }
    for p in plans {
        let marker = if Some(p.id.as_str()) == active_id { " *" } else { "" };
        println!("  {} [{}] - {}{}", p.id, p.status.as_str(), p.title, marker);
    }
}

pub fn print_overall(p: &OverallProgress) {
    println!(
        "Progress: {}% ({}/{})",
        compute_progress_percent(p.steps_done, p.total_steps),
        p.steps_done,
        p.total_steps
    );
}

pub fn print_steps(steps: &[StepInfo], active_index: u32) {
    for s in steps {
        let mark = if s.done { "x" } else { " " };
        let focus = if s.index == active_index { " <" } else { "" };
        println!("  [{mark}] {} - {}{focus}", s.title, s.description);
    }
}

pub fn print_stages(topic: &str, p: &ConceptProgress) {
    println!(
        "{topic}: {}% ({}/{})",
        compute_progress_percent(p.done, p.total),
        p.done,
        p.total
    );
    for s in ConceptStage::ALL {
        let mark = if (s.index() as u32) < p.done { "x" } else { " " };
        println!("  [{mark}] {} ({})", s.title(), s.as_str());
    }
}

pub fn print_questions(questions: &[Question]) {
    for (i, q) in questions.iter().enumerate() {
        println!("{}. [{}] {} (id={})", i + 1, q.kind.as_str(), q.question, q.id);
        if let QuestionKind::Multiple { options, .. } = &q.kind {
            for (idx, opt) in options.iter().enumerate() {
                println!("     {idx}) {opt}");
            }
        }
    }
}

/// Score line plus one row per question: mark, type and question text.
pub fn print_submission(s: &QuizSubmission, questions: &[Question]) {
    let g = &s.grading;
    println!(
        "Score: {}% ({}/{})",
        compute_progress_percent(g.correct_count, g.total),
        g.correct_count,
        g.total
    );
    println!("Elapsed: {}s", (s.elapsed_ms as f64 / 1000.0).round());
    for r in &g.per {
        let mark = if r.correct { "O" } else { "X" };
        match questions.iter().find(|q| q.id == r.id) {
            Some(q) => println!("  {mark} #{} [{}] {}", r.id, q.kind.as_str(), q.question),
            None => println!("  {mark} #{}", r.id),
        }
    }
}

fn print_card(c: &PlanCard) {
    println!(
        "  {} - {} [{}] {} ~ {} {} | {}% ({}/{})",
        c.id, c.title, c.level, c.start, c.end, c.dday, c.percent, c.steps_done, c.total_steps
    );
}

pub fn print_dashboard(d: &Dashboard) {
    println!(
        "Active: {}  Completed: {}  Average score: {}%",
        d.active_count, d.completed_count, d.average_score
    );
    println!("\nIn progress:");
    if d.active.is_empty() {
        println!("  No active plans. Create one with `studytrack plan create`.");
    }
    for c in &d.active {
        print_card(c);
    }
    if !d.completed.is_empty() {
        println!("\nCompleted:");
        for c in &d.completed {
            print_card(c);
        }
    }
}
