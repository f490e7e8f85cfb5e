use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use gradebook::{
    persistence::{self, PersistError},
    record::GradeRecord,
    shell::Shell,
    store::Store,
};
use uuid::Uuid;

fn temp_grade_file() -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("gradebook-shell-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("file.json");
    (dir, path)
}

fn run_shell(input: &str, store: Store) -> (String, Store) {
    let mut shell = Shell::new(Cursor::new(input.to_string()), Vec::new(), store);
    shell.run().expect("run shell");
    let (output, store) = shell.into_parts();
    (String::from_utf8(output).expect("utf8 output"), store)
}

fn seeded_store(path: &Path, records: Vec<GradeRecord>) -> Store {
    let mut store = Store::open(path).expect("open store");
    for record in records {
        store.push(record);
    }
    store.save().expect("save store");
    store
}

#[test]
fn menu_rejects_out_of_range_selections() {
    let (dir, path) = temp_grade_file();
    let store = Store::open(&path).expect("open store");

    let (output, _) = run_shell("9\nseven\n4\n", store);

    assert_eq!(
        output.matches("Unable to parse input!").count(),
        2,
        "both bad selections should be rejected: {output}"
    );
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn exits_cleanly_when_input_ends() {
    let (dir, path) = temp_grade_file();
    let store = Store::open(&path).expect("open store");

    let (output, _) = run_shell("", store);

    assert!(output.contains("1. Input grades"));
    assert!(output.contains("4. Exit application"));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn uniform_credits_and_costs_apply_to_every_record() {
    let (dir, path) = temp_grade_file();
    let store = Store::open(&path).expect("open store");

    let (output, store) = run_shell(
        "1\n3\n100\n92.5\ncalculus\n85\nhistory\ndone\n4\n",
        store,
    );

    let expected = vec![
        GradeRecord::builder()
            .name("calculus")
            .cost(100.0)
            .percent(92.5)
            .credits(3)
            .build(),
        GradeRecord::builder()
            .name("history")
            .cost(100.0)
            .percent(85.0)
            .credits(3)
            .build(),
    ];
    assert_eq!(store.records(), expected.as_slice());

    // The session saves on exit and shows the updated statistics.
    let persisted = persistence::load(&path).expect("load saved records");
    assert_eq!(persisted, expected);
    assert!(output.contains("Your CGPA = 88.75"), "output: {output}");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn per_record_prompts_capture_cost_then_credits() {
    let (dir, path) = temp_grade_file();
    let store = Store::open(&path).expect("open store");

    let (_, store) = run_shell("1\nn\nn\n88\nhistory\n450.5\n3\ndone\n4\n", store);

    let expected = GradeRecord::builder()
        .name("history")
        .cost(450.5)
        .percent(88.0)
        .credits(3)
        .build();
    assert_eq!(store.records(), std::slice::from_ref(&expected));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn done_is_case_insensitive_and_records_nothing() {
    let (dir, path) = temp_grade_file();
    let store = Store::open(&path).expect("open store");

    let (output, store) = run_shell("1\nn\nn\nDONE\n4\n", store);

    assert!(store.is_empty());
    assert!(persistence::load(&path).expect("load saved records").is_empty());
    assert!(output.contains("No grades exist. Please input your grades."));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn a_malformed_percent_aborts_the_session() {
    let (dir, path) = temp_grade_file();
    let store = Store::open(&path).expect("open store");

    let (output, store) = run_shell("1\n3\n0\nnope\n4\n", store);

    assert!(store.is_empty());
    assert!(output.contains("could not read `nope` as a grade percentage"));
    // Nothing was saved, the session aborted before its save step.
    assert!(matches!(
        persistence::load(&path),
        Err(PersistError::NotFound { .. })
    ));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn clear_keeps_asking_until_it_gets_a_yes_or_no() {
    let (dir, path) = temp_grade_file();
    let store = seeded_store(
        &path,
        vec![GradeRecord::builder().percent(90.0).credits(3).build()],
    );

    let (output, store) = run_shell("3\nmaybe\nY\n4\n", store);

    assert!(store.is_empty());
    assert!(output.contains("Cleared."));
    assert_eq!(
        output
            .matches("Are you sure you want to clear all grades?")
            .count(),
        2,
        "the unrecognised answer should re-ask: {output}"
    );
    assert!(matches!(
        persistence::load(&path),
        Err(PersistError::NotFound { .. })
    ));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn clear_can_be_canceled() {
    let (dir, path) = temp_grade_file();
    let store = seeded_store(
        &path,
        vec![GradeRecord::builder().percent(90.0).credits(3).build()],
    );

    let (output, store) = run_shell("3\nN\n4\n", store);

    assert_eq!(store.len(), 1);
    assert!(output.contains("Canceled."));
    assert_eq!(persistence::load(&path).expect("load records").len(), 1);
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn display_renders_the_table_and_statistics() {
    let (dir, path) = temp_grade_file();
    let store = seeded_store(
        &path,
        vec![
            GradeRecord::builder()
                .name("calculus")
                .cost(1200.0)
                .percent(92.5)
                .credits(3)
                .build(),
        ],
    );

    let (output, _) = run_shell("2\n4\n", store);

    assert!(output.contains("Grades"));
    assert!(output.contains("calculus"));
    assert!(output.contains("Your CGPA = 92.50"));
    assert!(output.contains("Simple 4 GPA = 4"));
    assert!(output.contains("Total credits: 3"));
    assert!(output.contains("Total cost: (1200.00)"));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn display_reports_zero_credits_instead_of_a_garbage_gpa() {
    let (dir, path) = temp_grade_file();
    let store = seeded_store(
        &path,
        vec![GradeRecord::builder().percent(95.0).credits(0).build()],
    );

    let (output, _) = run_shell("2\n4\n", store);

    assert!(output.contains("no credits recorded"));
    assert!(!output.contains("NaN"));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn display_on_an_empty_store_prompts_for_input() {
    let (dir, path) = temp_grade_file();
    let store = Store::open(&path).expect("open store");

    let (output, _) = run_shell("2\n4\n", store);

    assert!(output.contains("No grades exist. Please input your grades."));
    let _ = fs::remove_dir_all(dir);
}
