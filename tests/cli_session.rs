use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizz(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quizz").unwrap();
    cmd.env("QUIZZ_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn fresh_home_is_seeded_with_default_quizzes() {
    let home = TempDir::new().unwrap();

    quizz(&home)
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]: Capital of Italy"))
        .stdout(predicate::str::contains("[4]: Capital of Portugal"))
        .stdout(predicate::str::contains("Rome").not());

    assert!(home.path().join("quizzes.json").exists());
}

#[test]
fn added_quizzes_survive_restarts() {
    let home = TempDir::new().unwrap();

    quizz(&home)
        .write_stdin("add\n  2+2 \n 4\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: 2+2 => 4"));

    quizz(&home)
        .write_stdin("show 5\nshow 99\ntest 5\nFOUR\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[5]: 2+2 => 4"))
        .stdout(predicate::str::contains("No quiz associated with id=99."))
        .stdout(predicate::str::contains("Your answer is incorrect."));
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let home = TempDir::new().unwrap();

    quizz(&home)
        .write_stdin("help\nadd\nhalf")
        .assert()
        .success()
        .stdout(predicate::str::contains(" q|quit - Leave the program."))
        .stdout(predicate::str::contains("Invalid quiz").not());
}

#[test]
fn errors_do_not_end_the_session() {
    let home = TempDir::new().unwrap();

    quizz(&home)
        .write_stdin("show\nshow x\nfly\ndelete 1\ndelete 1\ncredits\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing <id> parameter."))
        .stdout(predicate::str::contains("The <id> parameter is not a number."))
        .stdout(predicate::str::contains("Unknown command: 'fly'"))
        .stdout(predicate::str::contains("Deleted quiz 1."))
        .stdout(predicate::str::contains("Nothing to delete for id=1."))
        .stdout(predicate::str::contains("The quizz developers"));
}

#[test]
fn explicit_data_file_and_no_seeding() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.json"), r#"{ "seed": false }"#).unwrap();
    let data = home.path().join("custom.json");

    quizz(&home)
        .arg("--data-file")
        .arg(&data)
        .write_stdin("list\nplay\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quizzes found."))
        .stdout(predicate::str::contains(
            "Nothing left to ask. Game over. Hits: 0",
        ));

    assert!(!data.exists());
}
