mod common;

use assert_fs::TempDir;
use common::command::{commit_file, get_head_commit_sha, repository_dir, run_minigit_command};
use common::file::{FileSpec, write_file};
use predicates::prelude::*;
use rstest::{fixture, rstest};

const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

#[fixture]
fn hello_repository_dir(repository_dir: TempDir) -> TempDir {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("hello.txt"),
        "hello".to_string(),
    ));

    repository_dir
}

#[rstest]
fn hash_object_prints_the_sha256_of_the_content(hello_repository_dir: TempDir) {
    let dir = hello_repository_dir.path();

    run_minigit_command(dir, &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_SHA256}\n"));

    assert!(!dir.join(".minigit/objects").join(HELLO_SHA256).exists());
}

#[rstest]
fn hash_object_with_write_stores_the_blob(hello_repository_dir: TempDir) {
    let dir = hello_repository_dir.path();

    run_minigit_command(dir, &["hash-object", "-w", "hello.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_SHA256}\n"));

    assert_eq!(
        std::fs::read(dir.join(".minigit/objects").join(HELLO_SHA256)).unwrap(),
        b"hello"
    );
}

#[rstest]
fn cat_file_prints_stored_bytes(hello_repository_dir: TempDir) {
    let dir = hello_repository_dir.path();
    run_minigit_command(dir, &["hash-object", "-w", "hello.txt"])
        .assert()
        .success();

    run_minigit_command(dir, &["cat-file", HELLO_SHA256])
        .assert()
        .success()
        .stdout("hello");

    run_minigit_command(dir, &["cat-file", &HELLO_SHA256[..7]])
        .assert()
        .success()
        .stdout("hello");
}

#[rstest]
fn cat_file_resolves_revisions(hello_repository_dir: TempDir) {
    let dir = hello_repository_dir.path();
    let head = commit_file(dir, "hello.txt", "hello", "Greeting");

    run_minigit_command(dir, &["cat-file", "HEAD"])
        .assert()
        .success()
        .stdout(format!(
            "2023-01-01 12:00:00 +0000|Greeting\n\nhello.txt {HELLO_SHA256}\n"
        ));
    assert_eq!(get_head_commit_sha(dir), head);
}

#[rstest]
#[case("ffffffff", "invalid revision")]
#[case("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff", "object not found")]
fn cat_file_of_a_missing_object_fails(
    hello_repository_dir: TempDir,
    #[case] key: &str,
    #[case] message: &str,
) {
    run_minigit_command(hello_repository_dir.path(), &["cat-file", key])
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}

#[rstest]
fn hash_object_of_a_missing_file_fails(hello_repository_dir: TempDir) {
    run_minigit_command(hello_repository_dir.path(), &["hash-object", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}
