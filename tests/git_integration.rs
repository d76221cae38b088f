//! Integration tests for the git gateway against real repositories.

mod common;

use common::TestRepo;
use noto::git::Git;

#[test]
fn staged_diff_is_none_when_nothing_is_staged() {
    let repo = TestRepo::new();
    repo.write("a.txt", "hello\n");
    repo.stage("a.txt");
    repo.commit("chore: init repo");

    // Unstaged modification only.
    repo.write("a.txt", "hello world\n");

    let git = Git::open(repo.path()).unwrap();
    assert!(git.staged_diff().unwrap().is_none());
}

#[test]
fn staged_diff_reports_cached_changes() {
    let repo = TestRepo::new();
    repo.write("a.txt", "hello\n");
    repo.stage("a.txt");

    let git = Git::open(repo.path()).unwrap();
    let diff = git.staged_diff().unwrap().expect("staged diff present");
    assert!(diff.contains("a.txt"));
    assert!(diff.contains("+hello"));
}

#[test]
fn lock_files_are_excluded_from_the_diff() {
    let repo = TestRepo::new();
    repo.write("Cargo.lock", "locked\n");
    repo.stage("Cargo.lock");

    let git = Git::open(repo.path()).unwrap();
    assert!(git.staged_diff().unwrap().is_none());

    repo.write("src.rs", "fn main() {}\n");
    repo.stage("src.rs");
    let diff = git.staged_diff().unwrap().expect("staged diff present");
    assert!(diff.contains("src.rs"));
    assert!(!diff.contains("Cargo.lock"));
}

#[test]
fn unborn_head_reports_zero_commits_and_no_history() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path()).unwrap();

    assert_eq!(git.commit_count(), Some(0));
    assert!(git.commit_subjects(10).unwrap().is_empty());
}

#[test]
fn commit_records_staged_changes() {
    let repo = TestRepo::new();
    repo.write("a.txt", "hello\n");
    repo.stage("a.txt");

    let git = Git::open(repo.path()).unwrap();
    assert!(git.commit("feat: add a", false).unwrap());
    assert_eq!(git.commit_count(), Some(1));
    assert_eq!(git.commit_subjects(10).unwrap(), vec!["feat: add a"]);

    // Nothing staged now; a non-amend commit must not be recorded.
    assert!(!git.commit("feat: nothing", false).unwrap());
}

#[test]
fn amend_replaces_the_tip_commit() {
    let repo = TestRepo::new();
    repo.write("a.txt", "hello\n");
    repo.stage("a.txt");
    repo.commit("feat: first draft");

    repo.write("a.txt", "hello world\n");
    repo.stage("a.txt");

    let git = Git::open(repo.path()).unwrap();
    assert!(git.commit("feat: add greeting", true).unwrap());
    assert_eq!(git.commit_count(), Some(1));
    assert_eq!(git.commit_subjects(10).unwrap(), vec!["feat: add greeting"]);
}

#[test]
fn merge_commits_are_filtered_from_subjects() {
    let repo = TestRepo::new();
    repo.write("a.txt", "base\n");
    repo.stage("a.txt");
    repo.commit("chore: init repo");

    repo.git(&["checkout", "-b", "feature"]);
    repo.write("b.txt", "feature\n");
    repo.stage("b.txt");
    repo.commit("feat: add feature");

    repo.git(&["checkout", "main"]);
    repo.write("c.txt", "main\n");
    repo.stage("c.txt");
    repo.commit("fix: mainline fix");

    repo.git(&["merge", "--no-ff", "-m", "Merge branch 'feature'", "feature"]);

    let git = Git::open(repo.path()).unwrap();
    let subjects = git.commit_subjects(10).unwrap();
    assert!(subjects.iter().all(|s| !s.starts_with("Merge")));
    assert!(subjects.contains(&"feat: add feature".to_string()));
    assert!(subjects.contains(&"fix: mainline fix".to_string()));
}

#[test]
fn subject_limit_is_respected() {
    let repo = TestRepo::new();
    for i in 0..5 {
        repo.commit(&format!("chore: commit {i}"));
    }

    let git = Git::open(repo.path()).unwrap();
    let subjects = git.commit_subjects(3).unwrap();
    assert_eq!(subjects.len(), 3);
    // Newest first.
    assert_eq!(subjects[0], "chore: commit 4");
}

#[test]
fn branch_listing_and_checkout() {
    let repo = TestRepo::new();
    repo.commit("chore: init repo");

    let git = Git::open(repo.path()).unwrap();
    assert_eq!(git.current_branch().as_deref(), Some("main"));

    assert!(git.checkout_new("feature").unwrap());
    assert_eq!(git.current_branch().as_deref(), Some("feature"));

    let branches = git.branches(false).unwrap();
    assert!(branches.contains(&"main".to_string()));
    assert!(branches.contains(&"feature".to_string()));

    assert!(git.checkout("main").unwrap());
    assert_eq!(git.current_branch().as_deref(), Some("main"));

    // Checking out a missing branch is a soft failure.
    assert!(!git.checkout("does-not-exist").unwrap());
}

#[test]
fn open_fails_outside_a_repository() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(Git::open(dir.path()).is_err());
    assert!(!Git::is_repository(dir.path()));
}

#[test]
fn discovery_walks_up_from_subdirectories() {
    let repo = TestRepo::new();
    repo.write("sub/dir/file.txt", "x\n");

    let nested = repo.path().join("sub/dir");
    assert!(Git::is_repository(&nested));
    let git = Git::open(&nested).unwrap();
    assert_eq!(
        git.root().canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}
