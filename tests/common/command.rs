use crate::common::file::{FileSpec, write_file};
use crate::common::{COMMIT_DATE, METADATA_DIR};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with one commit tracking `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_minigit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    minigit_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_minigit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.envs(vec![("NO_COLOR", "1"), ("MINIGIT_COMMIT_DATE", COMMIT_DATE)]);
    cmd.env_remove("MINIGIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn minigit_commit(dir: &Path, message: &str) -> Command {
    run_minigit_command(dir, &["commit", "-m", message])
}

/// Write `content` to `path`, stage it and commit it
pub fn commit_file(dir: &Path, path: &str, content: &str, message: &str) -> String {
    write_file(FileSpec::new(dir.join(path), content.to_string()));
    run_minigit_command(dir, &["add", path]).assert().success();
    minigit_commit(dir, message).assert().success();

    get_head_commit_sha(dir)
}

/// Get the current HEAD commit id
pub fn get_head_commit_sha(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(METADATA_DIR).join("HEAD"))
        .expect("Failed to read HEAD")
        .trim()
        .to_string()
}

/// Get the commit id a branch points to
pub fn get_branch_commit_sha(dir: &Path, branch: &str) -> String {
    std::fs::read_to_string(dir.join(METADATA_DIR).join("refs").join(branch))
        .expect("Failed to read branch")
        .trim()
        .to_string()
}

/// Get the parent commit id of a given commit from its stored record
pub fn get_parent_commit_id(dir: &Path, commit_id: &str) -> Option<String> {
    let output = run_minigit_command(dir, &["cat-file", commit_id])
        .output()
        .expect("Failed to run cat-file");
    let record = String::from_utf8(output.stdout).expect("commit record is not utf-8");

    record
        .lines()
        .nth(1)
        .filter(|parent| !parent.is_empty())
        .map(str::to_string)
}
