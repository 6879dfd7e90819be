use std::collections::BTreeMap;
use std::io::{self, Read};
use std::path::Path;

use serde_json::json;

use crate::cli::commands::QuizCommands;
use crate::cli::{finish, Ctx};
use crate::db::StudyRepository;
use crate::error::StudyError;
use crate::models::{Answer, Plan, Question};
use crate::output;
use crate::tracker::{grader, ProgressTracker};

pub fn run(cmd: QuizCommands, ctx: &Ctx) -> i32 {
    let result = match cmd {
        QuizCommands::Show { questions } => run_show(None, questions.as_deref(), ctx),
        QuizCommands::Start => run_start(ctx),
        QuizCommands::Submit { answers, questions } => run_submit(&answers, questions.as_deref(), ctx),
    };
    finish(result, ctx.json)
}

pub fn run_show(plan_id: Option<&str>, questions: Option<&Path>, ctx: &Ctx) -> Result<i32, StudyError> {
    let questions = grader::load_questions(questions)?;
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, plan_id)?;
    let started_at = repo.load_quiz_attempt(&plan.id).map(|a| a.started_at);
    show(&plan, &questions, started_at, ctx.json);
    Ok(0)
}

/// Entering the quiz view starts the timer unless an attempt is already running.
pub fn run_open(plan_id: Option<&str>, ctx: &Ctx) -> Result<i32, StudyError> {
    let questions = grader::default_questions();
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, plan_id)?;
    let attempt = match repo.load_quiz_attempt(&plan.id) {
        Some(attempt) => attempt,
        None => ProgressTracker::new(&repo).start_quiz(&plan.id),
    };
    show(&plan, &questions, Some(attempt.started_at), ctx.json);
    Ok(0)
}

fn show(plan: &Plan, questions: &[Question], started_at: Option<i64>, json_output: bool) {
    if json_output {
        let items: Vec<_> = questions.iter().map(output::json::question_json).collect();
        output::json::print(&output::json::success(json!({
            "view": "quiz",
            "plan_id": plan.id,
            "with_quiz": plan.with_quiz,
            "started_at": started_at,
            "questions": items
        })));
    } else {
        println!("형성평가 · {}", plan.title);
        output::text::print_questions(questions);
    }
}

fn run_start(ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, None)?;
    let attempt = ProgressTracker::new(&repo).start_quiz(&plan.id);

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "plan_id": plan.id,
            "started_at": attempt.started_at
        })));
    } else {
        println!("Quiz started for {}", plan.title);
    }
    Ok(0)
}

fn find_question(questions: &[Question], id: u32) -> Result<&Question, StudyError> {
    questions
        .iter()
        .find(|q| q.id == id)
        .ok_or_else(|| StudyError::validation(format!("Unknown question id: {id}")))
}

/// Parse `<id>=<value>` pairs against the questions they answer. Later pairs win.
pub fn parse_answer_args(
    args: &[String],
    questions: &[Question],
) -> Result<BTreeMap<u32, Answer>, StudyError> {
    let mut answers = BTreeMap::new();
    for arg in args {
        let (id, value) = arg
            .split_once('=')
            .ok_or_else(|| StudyError::validation(format!("Answer must be <id>=<value>: {arg}")))?;
        let id: u32 = id
            .trim()
            .parse()
            .map_err(|_| StudyError::validation(format!("Invalid question id: {id}")))?;
        let question = find_question(questions, id)?;
        answers.insert(id, Answer::for_kind(&question.kind, value));
    }
    Ok(answers)
}

fn read_stdin_answers() -> Result<BTreeMap<u32, Answer>, StudyError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    if input.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(&input).map_err(|e| StudyError::validation(format!("Invalid JSON: {e}")))
}

/// Reject unknown ids and bring JSON answers into the shape their question expects.
fn fit_answers(
    answers: BTreeMap<u32, Answer>,
    questions: &[Question],
) -> Result<BTreeMap<u32, Answer>, StudyError> {
    answers
        .into_iter()
        .map(|(id, answer)| Ok((id, answer.fit_to(&find_question(questions, id)?.kind))))
        .collect()
}

fn run_submit(args: &[String], questions: Option<&Path>, ctx: &Ctx) -> Result<i32, StudyError> {
    let questions = grader::load_questions(questions)?;
    let answers = if args.is_empty() {
        fit_answers(read_stdin_answers()?, &questions)?
    } else {
        parse_answer_args(args, &questions)?
    };

    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, None)?;
    let submission = ProgressTracker::new(&repo).submit_quiz(&plan.id, answers, &questions);

    if ctx.json {
        output::json::print(&output::json::success(output::json::submission_json(&submission)));
    } else {
        output::text::print_submission(&submission, &questions);
    }
    Ok(0)
}
