#[allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().expect("create tempdir");
        Self { dir }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("studytrack").expect("binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("STUDYTRACK_HOME");
        cmd.env_remove("STUDYTRACK_LOG");
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }

    fn submit_stdin(&self, body: &str) -> Value {
        let output = self
            .cmd()
            .args(["quiz", "submit", "--json"])
            .write_stdin(body)
            .output()
            .expect("quiz submit");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn setup_demo(env: &TestEnv) {
    let v = env.run_ok(&["init", "--demo"]);
    assert_eq!(v["data"]["seeded"], 2);
}

fn create_plan(env: &TestEnv, id: &str) -> Value {
    env.run_ok(&[
        "plan", "create", "Linear Algebra", "--id", id, "--start", "2025-10-01", "--end",
        "2025-10-15", "--steps", "3", "--topic", "matrix", "--topic", "rank",
    ])
}

// ─── init ──────────────────────────────────────────────────────────

#[test]
fn test_init() {
    let env = TestEnv::new();
    let v = env.run_ok(&["init"]);
    assert_eq!(v["data"]["seeded"], 0);
    assert!(env.path(".studytrack/studytrack.db").exists());
}

#[test]
fn test_init_idempotent() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_ok(&["init", "--demo"]);
    assert_eq!(v["data"]["seeded"], 0);
    let v = env.run_ok(&["plan", "list"]);
    assert_eq!(v["data"]["plans"].as_array().unwrap().len(), 2);
}

#[test]
fn test_init_required_before_commands() {
    let env = TestEnv::new();
    let v = env.run_err(&["plan", "list"]);
    assert_eq!(v["error"]["code"], "NOT_INITIALIZED");
    let v = env.run_err(&["status"]);
    assert_eq!(v["error"]["code"], "NOT_INITIALIZED");
}

#[test]
fn test_data_dir_flag() {
    let env = TestEnv::new();
    let data = env.path("elsewhere");
    let data = data.to_str().unwrap();
    env.run_ok(&["init", "--data-dir", data]);
    assert!(env.path("elsewhere/studytrack.db").exists());
    assert!(!env.path(".studytrack").exists());
    env.run_ok(&["plan", "list", "--data-dir", data]);
}

#[test]
fn test_home_env() {
    let env = TestEnv::new();
    let home = env.path("home");
    env.cmd()
        .env("STUDYTRACK_HOME", &home)
        .args(["init"])
        .assert()
        .success();
    assert!(home.join("studytrack.db").exists());
}

// ─── plan ──────────────────────────────────────────────────────────

#[test]
fn test_demo_plans_seeded() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_ok(&["plan", "list"]);
    let plans = v["data"]["plans"].as_array().unwrap();
    assert_eq!(plans[0]["id"], "vector");
    assert_eq!(plans[0]["percent"], 25);
    assert_eq!(plans[0]["active"], true);
    assert_eq!(plans[1]["id"], "prob");
    assert_eq!(plans[1]["percent"], 67);
    assert_eq!(plans[1]["topics"][3], "가설검정");
}

#[test]
fn test_plan_crud() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);

    let v = create_plan(&env, "linalg");
    assert_eq!(v["data"]["id"], "linalg");
    assert_eq!(v["data"]["level"], "beginner");
    assert_eq!(v["data"]["with_quiz"], true);
    assert_eq!(v["data"]["active"], true);

    let v = env.run_ok(&["plan", "create", "Calculus", "--id", "calc", "--topic", "limit", "--no-quiz"]);
    assert_eq!(v["data"]["active"], false);
    assert_eq!(v["data"]["with_quiz"], false);

    let v = env.run_ok(&["plan", "show", "linalg"]);
    assert_eq!(v["data"]["plan"]["title"], "Linear Algebra");
    assert_eq!(v["data"]["progress"]["steps_done"], 0);
    assert_eq!(v["data"]["progress"]["total_steps"], 3);
    assert_eq!(v["data"]["topics"][1]["topic"], "rank");

    let v = env.run_ok(&["plan", "activate", "calc"]);
    assert_eq!(v["data"]["activated"]["id"], "calc");
    let v = env.run_ok(&["study", "show"]);
    assert_eq!(v["data"]["plan"]["id"], "calc");

    let v = env.run_ok(&["plan", "complete", "linalg"]);
    assert_eq!(v["data"]["status"], "completed");
    let v = env.run_ok(&["plan", "reopen", "linalg"]);
    assert_eq!(v["data"]["status"], "active");
}

#[test]
fn test_plan_generated_id() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let v = env.run_ok(&["plan", "create", "No id", "--topic", "a"]);
    let id = v["data"]["id"].as_str().unwrap();
    assert_eq!(id.len(), 26);
    assert_eq!(id, id.to_lowercase());
    env.run_ok(&["plan", "show", id]);
}

#[test]
fn test_plan_validation() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let cases: &[&[&str]] = &[
        &["plan", "create", "  ", "--topic", "a"],
        &["plan", "create", "T", "--id", "Bad_Id", "--topic", "a"],
        &["plan", "create", "T", "--id", "ok"],
        &["plan", "create", "T", "--id", "ok", "--topic", "a", "--topic", "a"],
        &["plan", "create", "T", "--id", "ok", "--topic", "a", "--steps", "0"],
        &["plan", "create", "T", "--id", "ok", "--topic", "a", "--start", "2025-13-01"],
        &["plan", "create", "T", "--id", "ok", "--topic", "a", "--start", "2025-10-10", "--end", "2025-10-01"],
        &["plan", "create", "T", "--id", "ok", "--topic", "a", "--resource", "not a url"],
    ];
    for args in cases {
        let v = env.run_err(args);
        assert_eq!(v["error"]["code"], "VALIDATION_ERROR", "args: {args:?}");
    }
    let v = env.run_ok(&["plan", "list"]);
    assert!(v["data"]["plans"].as_array().unwrap().is_empty());
}

#[test]
fn test_plan_id_conflict() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_err(&["plan", "create", "Again", "--id", "prob", "--topic", "a"]);
    assert_eq!(v["error"]["code"], "PLAN_ID_CONFLICT");
}

#[test]
fn test_plan_not_found() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_err(&["plan", "show", "nope"]);
    assert_eq!(v["error"]["code"], "PLAN_NOT_FOUND");
    let v = env.run_err(&["study", "show", "--plan", "nope"]);
    assert_eq!(v["error"]["code"], "PLAN_NOT_FOUND");
}

#[test]
fn test_no_active_plan() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let v = env.run_err(&["study", "show"]);
    assert_eq!(v["error"]["code"], "NO_ACTIVE_PLAN");
}

// ─── study ─────────────────────────────────────────────────────────

#[test]
fn test_study_progress_is_monotonic() {
    let env = TestEnv::new();
    setup_demo(&env);

    let v = env.run_ok(&["study", "complete", "3", "--plan", "vector"]);
    assert_eq!(v["data"]["progress"]["done"], 3);
    assert_eq!(v["data"]["progress"]["percent"], 75);
    assert_eq!(v["data"]["progress"]["active_index"], 3);

    let v = env.run_ok(&["study", "complete", "1", "--plan", "vector"]);
    assert_eq!(v["data"]["progress"]["done"], 3);

    let v = env.run_ok(&["study", "show", "--plan", "vector"]);
    assert_eq!(v["data"]["view"], "study");
    assert_eq!(v["data"]["progress"]["steps_done"], 3);
    assert_eq!(v["data"]["steps"].as_array().unwrap().len(), 4);
    assert_eq!(v["data"]["active_index"], 3);
}

#[test]
fn test_study_complete_all_steps() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_ok(&["study", "complete", "3", "--plan", "prob"]);
    assert_eq!(v["data"]["progress"]["percent"], 100);
    assert_eq!(v["data"]["progress"]["active_index"], 2);
}

#[test]
fn test_study_step_out_of_range() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_err(&["study", "complete", "5", "--plan", "vector"]);
    assert_eq!(v["error"]["code"], "STEP_OUT_OF_RANGE");
    let v = env.run_err(&["study", "complete", "0", "--plan", "vector"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");

    let v = env.run_ok(&["study", "show", "--plan", "vector"]);
    assert_eq!(v["data"]["progress"]["steps_done"], 1);
}

// ─── concept ───────────────────────────────────────────────────────

#[test]
fn test_concept_stages() {
    let env = TestEnv::new();
    setup_demo(&env);

    let v = env.run_ok(&["concept", "show", "확률", "--plan", "prob"]);
    assert_eq!(v["data"]["progress"]["done"], 0);
    assert_eq!(v["data"]["progress"]["total"], 3);
    assert_eq!(v["data"]["stages"][0]["done"], false);

    let v = env.run_ok(&["concept", "complete", "확률", "concept", "--plan", "prob"]);
    assert_eq!(v["data"]["progress"]["done"], 1);
    assert_eq!(v["data"]["progress"]["percent"], 33);
    assert_eq!(v["data"]["next"], "#/concept?id=prob&topic=%ED%99%95%EB%A5%A0");

    let v = env.run_ok(&["concept", "complete", "확률", "quiz", "--plan", "prob"]);
    assert_eq!(v["data"]["progress"]["done"], 3);
    let v = env.run_ok(&["concept", "complete", "확률", "concept", "--plan", "prob"]);
    assert_eq!(v["data"]["progress"]["done"], 3);

    let v = env.run_ok(&["concept", "list", "--plan", "prob"]);
    assert_eq!(v["data"]["topics"][0]["percent"], 100);
    assert_eq!(v["data"]["topics"][1]["percent"], 0);
}

#[test]
fn test_concept_topic_not_found() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_err(&["concept", "complete", "미분", "concept", "--plan", "prob"]);
    assert_eq!(v["error"]["code"], "TOPIC_NOT_FOUND");
}

#[test]
fn test_concept_detail() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_ok(&["concept", "detail", "분산", "--plan", "prob"]);
    assert_eq!(v["data"]["view"], "concept-detail");
    assert!(!v["data"]["content"]["summary"].as_str().unwrap().is_empty());
}

#[test]
fn test_practice_incomplete_records_nothing() {
    let env = TestEnv::new();
    setup_demo(&env);

    let v = env.run_err(&[
        "concept", "practice", "분산", "--check", "1", "--check", "2", "--answer",
        "long enough answer", "--plan", "prob",
    ]);
    assert_eq!(v["error"]["code"], "PRACTICE_INCOMPLETE");

    let v = env.run_err(&[
        "concept", "practice", "분산", "--check", "1", "--check", "2", "--check", "3", "--answer",
        "  short  ", "--plan", "prob",
    ]);
    assert_eq!(v["error"]["code"], "PRACTICE_INCOMPLETE");

    let v = env.run_err(&["concept", "practice", "분산", "--check", "4", "--plan", "prob"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");

    let v = env.run_ok(&["concept", "show", "분산", "--plan", "prob"]);
    assert_eq!(v["data"]["progress"]["done"], 0);
}

#[test]
fn test_practice_complete() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_ok(&[
        "concept", "practice", "분산", "--check", "1", "--check", "2", "--check", "3", "--answer",
        "편차 제곱의 평균입니다", "--plan", "prob",
    ]);
    assert_eq!(v["data"]["completed_stage"], "exercise");
    assert_eq!(v["data"]["progress"]["done"], 2);
}

// ─── quiz ──────────────────────────────────────────────────────────

#[test]
fn test_quiz_show_hides_answers() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_ok(&["quiz", "show", "--plan", "prob"]);
    let questions = v["data"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
    assert!(questions[0].get("correct").is_none());
    assert!(questions[1].get("correctAnswer").is_none());
    assert!(v["data"]["started_at"].is_null());
}

#[test]
fn test_quiz_submit_with_args() {
    let env = TestEnv::new();
    setup_demo(&env);
    env.run_ok(&["plan", "activate", "prob"]);

    let v = env.run_ok(&["quiz", "start"]);
    assert!(v["data"]["started_at"].as_i64().unwrap() > 0);

    let v = env.run_ok(&[
        "quiz", "submit", "--answer", "1=0", "--answer", "2=분산의 단위", "--answer",
        "3=짧음",
    ]);
    assert_eq!(v["data"]["grading"]["correctCount"], 2);
    assert_eq!(v["data"]["grading"]["total"], 3);
    assert_eq!(v["data"]["percent"], 67);
    assert_eq!(v["data"]["grading"]["per"][2]["correct"], false);
    assert!(v["data"]["elapsed_ms"].as_i64().unwrap() >= 0);

    let v = env.run_ok(&["quiz", "show"]);
    assert!(v["data"]["started_at"].is_null());
}

#[test]
fn test_quiz_submit_from_stdin() {
    let env = TestEnv::new();
    setup_demo(&env);
    env.run_ok(&["plan", "activate", "prob"]);

    let body = r#"{"1": 0, "2": "분산의 단위를 맞추기 위해", "3": "표본평균은 표본 크기가 커질수록 표준오차가 줄어들어 더 정확한 추정치가 됩니다"}"#;
    let v = env.submit_stdin(body);
    assert_eq!(v["success"], true, "{v}");
    assert_eq!(v["data"]["grading"]["correctCount"], 3);
    assert_eq!(v["data"]["percent"], 100);
}

#[test]
fn test_quiz_submit_replaces_previous() {
    let env = TestEnv::new();
    setup_demo(&env);
    env.run_ok(&["plan", "activate", "prob"]);
    env.run_ok(&["quiz", "submit", "--answer", "1=0"]);
    let v = env.submit_stdin("");
    assert_eq!(v["success"], true, "{v}");
    assert_eq!(v["data"]["grading"]["correctCount"], 0);

    let v = env.run_ok(&["report", "show"]);
    assert_eq!(v["data"]["grading"]["correctCount"], 0);
}

#[test]
fn test_quiz_submit_rejects_bad_input() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_err(&["quiz", "submit", "--answer", "9=1"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
    let v = env.submit_stdin("not json");
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

#[test]
fn test_quiz_custom_questions() {
    let env = TestEnv::new();
    setup_demo(&env);
    let file = env.path("questions.json");
    fs::write(
        &file,
        r#"[{"id": 1, "question": "2+2?", "type": "multiple", "options": ["3", "4"], "correct": 1}]"#,
    )
    .unwrap();
    let file = file.to_str().unwrap();

    let v = env.run_ok(&["quiz", "submit", "--answer", "1=1", "--questions", file]);
    assert_eq!(v["data"]["grading"]["correctCount"], 1);
    assert_eq!(v["data"]["grading"]["total"], 1);

    fs::write(env.path("empty.json"), "[]").unwrap();
    let v = env.run_err(&["quiz", "show", "--questions", env.path("empty.json").to_str().unwrap()]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

#[test]
fn test_quiz_numeric_short_answer() {
    let env = TestEnv::new();
    setup_demo(&env);
    let file = env.path("numeric.json");
    fs::write(
        &file,
        r#"[
            {"id": 1, "question": "주사위 두 개의 합이 7인 경우의 수의 두 배는?", "type": "short", "correctAnswer": "12 또는 2"},
            {"id": 2, "question": "2+2?", "type": "multiple", "options": ["3", "4"], "correct": 1}
        ]"#,
    )
    .unwrap();
    let file = file.to_str().unwrap();

    let v = env.run_ok(&["quiz", "submit", "--answer", "1=12", "--answer", "2=1", "--questions", file]);
    assert_eq!(v["data"]["answers"]["1"], "12");
    assert_eq!(v["data"]["answers"]["2"], 1);
    assert_eq!(v["data"]["grading"]["correctCount"], 2);

    let output = env
        .cmd()
        .args(["quiz", "submit", "--json", "--questions", file])
        .write_stdin(r#"{"1": 12}"#)
        .output()
        .expect("quiz submit");
    let v: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["data"]["grading"]["per"][0]["correct"], true, "{v}");
}

#[test]
fn test_open_quiz_starts_timer() {
    let env = TestEnv::new();
    setup_demo(&env);

    let v = env.run_ok(&["open", "#/quiz?id=prob"]);
    let started = v["data"]["started_at"].as_i64().expect("timer started");

    // Reopening keeps the running attempt.
    let v = env.run_ok(&["open", "#/quiz?id=prob"]);
    assert_eq!(v["data"]["started_at"].as_i64(), Some(started));

    let v = env.run_ok(&["quiz", "submit", "--answer", "1=0", "--plan", "prob"]);
    assert_eq!(v["data"]["started_at"].as_i64(), Some(started));
    let v = env.run_ok(&["quiz", "show", "--plan", "prob"]);
    assert!(v["data"]["started_at"].is_null());
}

// ─── report ────────────────────────────────────────────────────────

#[test]
fn test_report_without_submission() {
    let env = TestEnv::new();
    setup_demo(&env);

    let v = env.run_ok(&["report", "show"]);
    assert_eq!(v["data"]["grading"]["correctCount"], 0);
    assert_eq!(v["data"]["grading"]["total"], 3);
    assert_eq!(v["data"]["percent"], 0);

    let v = env.run_ok(&["report", "export"]);
    assert_eq!(v["data"]["has_submission"], false);
    let body = fs::read_to_string(env.path("report-vector.json")).unwrap();
    assert_eq!(body, "{}");
}

#[test]
fn test_report_export_and_summary() {
    let env = TestEnv::new();
    setup_demo(&env);
    env.run_ok(&["plan", "activate", "prob"]);
    env.run_ok(&["quiz", "submit", "--answer", "1=0", "--answer", "2=분산"]);

    let v = env.run_ok(&["report", "export", "--out", "out"]);
    assert_eq!(v["data"]["has_submission"], true);
    let body = fs::read_to_string(env.path("out/report-prob.json")).unwrap();
    let report: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(report["planId"], "prob");
    assert_eq!(report["grading"]["correctCount"], 2);

    env.cmd()
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("계획: 확률과 통계 2주 완성"))
        .stdout(predicate::str::contains("점수: 67% (2/3)"));

    env.cmd()
        .args(["report", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O #1 [multiple] 확률의 정의로 옳은 것은?"))
        .stdout(predicate::str::contains("X #3 [descriptive] 표본평균의 추정 성능을 설명하시오."));
}

// ─── open ──────────────────────────────────────────────────────────

#[test]
fn test_open_routes() {
    let env = TestEnv::new();
    setup_demo(&env);

    let v = env.run_ok(&["open", "#/study?id=prob"]);
    assert_eq!(v["data"]["view"], "study");
    assert_eq!(v["data"]["plan"]["id"], "prob");

    let v = env.run_ok(&["open", "/concepts?id=prob"]);
    assert_eq!(v["data"]["view"], "concepts");

    let v = env.run_ok(&["open", "#/concept?id=prob&topic=%ED%99%95%EB%A5%A0"]);
    assert_eq!(v["data"]["view"], "concept");
    assert_eq!(v["data"]["progress"]["topic"], "확률");

    let v = env.run_ok(&["open", "#/concept-detail?id=prob&topic=분산"]);
    assert_eq!(v["data"]["view"], "concept-detail");
    assert_eq!(v["data"]["topic"], "분산");

    let v = env.run_ok(&["open", "#/concept-practice?id=prob"]);
    assert_eq!(v["data"]["view"], "concept-practice");
    assert_eq!(v["data"]["progress"]["topic"], "확률");

    let v = env.run_ok(&["open", "#/quiz?id=prob"]);
    assert_eq!(v["data"]["view"], "quiz");

    let v = env.run_ok(&["open", "#/report?id=vector"]);
    assert_eq!(v["data"]["view"], "report");
    assert_eq!(v["data"]["plan"]["id"], "vector");
}

#[test]
fn test_open_falls_back_to_dashboard() {
    let env = TestEnv::new();
    setup_demo(&env);
    for fragment in ["", "#/", "#/nowhere?id=prob", "#/dashboard"] {
        let v = env.run_ok(&["open", fragment]);
        assert_eq!(v["data"]["view"], "dashboard", "fragment: {fragment}");
    }
}

#[test]
fn test_open_without_id_uses_active_plan() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_ok(&["open", "#/study"]);
    assert_eq!(v["data"]["plan"]["id"], "vector");
    let v = env.run_ok(&["open", "#/study?id="]);
    assert_eq!(v["data"]["plan"]["id"], "vector");
}

#[test]
fn test_open_unknown_topic() {
    let env = TestEnv::new();
    setup_demo(&env);
    let v = env.run_err(&["open", "#/concept?id=prob&topic=nothing"]);
    assert_eq!(v["error"]["code"], "TOPIC_NOT_FOUND");
}

// ─── status ────────────────────────────────────────────────────────

#[test]
fn test_status_dashboard() {
    let env = TestEnv::new();
    setup_demo(&env);
    env.run_ok(&["plan", "complete", "vector"]);
    env.run_ok(&["quiz", "submit", "--answer", "1=0", "--plan", "prob"]);
    env.run_ok(&["quiz", "submit", "--answer", "1=0", "--answer", "2=분산", "--plan", "vector"]);

    let v = env.run_ok(&["status"]);
    let data = &v["data"];
    assert_eq!(data["view"], "dashboard");
    assert_eq!(data["active_count"], 1);
    assert_eq!(data["completed_count"], 1);
    assert_eq!(data["active"][0]["id"], "prob");
    assert_eq!(data["active"][0]["percent"], 67);
    assert_eq!(data["active"][0]["quiz_percent"], 33);
    assert_eq!(data["completed"][0]["quiz_percent"], 67);
    // (33 + 67) / 2
    assert_eq!(data["average_score"], 50);
    assert!(data["active"][0]["dday"].as_str().unwrap().starts_with("D"));
}

#[test]
fn test_status_text() {
    let env = TestEnv::new();
    setup_demo(&env);
    env.cmd()
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("확률과 통계 2주 완성"));
}

#[test]
fn test_error_text_output() {
    let env = TestEnv::new();
    env.cmd()
        .args(["status"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("studytrack init"));
}
