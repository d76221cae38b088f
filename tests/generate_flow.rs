//! End-to-end generation flow: repository, store, cache, and a mock
//! provider wired together.

mod common;

use common::TestRepo;
use noto::core::storage::Store;
use noto::core::types::INIT_COMMIT_MESSAGE;
use noto::generate::{self, CommitOptions};
use noto::git::Git;
use noto::model::catalog::DEFAULT_MODEL;
use noto::model::mock::MockProvider;
use noto::model::ModelError;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> Store {
    Store::at_path(dir.path().join("storage.json"))
}

fn options() -> CommitOptions<'static> {
    CommitOptions {
        commit_type: None,
        context: None,
        guidelines: None,
        use_cache: true,
    }
}

#[tokio::test]
async fn empty_repository_never_reaches_the_provider() {
    let repo = TestRepo::new();
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let git = Git::open(repo.path()).unwrap();
    let provider = MockProvider::unreachable();

    let message = generate::commit_message(&git, &store, &provider, "some diff", &options())
        .await
        .unwrap();
    assert_eq!(message, INIT_COMMIT_MESSAGE);
}

#[tokio::test]
async fn repeated_generation_hits_the_cache() {
    let repo = TestRepo::new();
    repo.commit("chore: init repo");
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let git = Git::open(repo.path()).unwrap();
    let provider = MockProvider::replying("message", "feat: add parser");

    let first = generate::commit_message(&git, &store, &provider, "diff", &options())
        .await
        .unwrap();
    let second = generate::commit_message(&git, &store, &provider, "diff", &options())
        .await
        .unwrap();

    assert_eq!(first, "feat: add parser");
    assert_eq!(second, first);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn cache_bypass_always_calls_the_provider() {
    let repo = TestRepo::new();
    repo.commit("chore: init repo");
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let git = Git::open(repo.path()).unwrap();
    let provider = MockProvider::replying("message", "feat: add parser");

    let opts = CommitOptions {
        use_cache: false,
        ..options()
    };
    generate::commit_message(&git, &store, &provider, "diff", &opts)
        .await
        .unwrap();
    generate::commit_message(&git, &store, &provider, "diff", &opts)
        .await
        .unwrap();
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn changed_inputs_are_distinct_cache_entries() {
    let repo = TestRepo::new();
    repo.commit("chore: init repo");
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let git = Git::open(repo.path()).unwrap();
    let provider = MockProvider::replying("message", "feat: add parser");

    generate::commit_message(&git, &store, &provider, "diff one", &options())
        .await
        .unwrap();
    generate::commit_message(&git, &store, &provider, "diff two", &options())
        .await
        .unwrap();
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn provider_failure_surfaces_with_api_detail() {
    let repo = TestRepo::new();
    repo.commit("chore: init repo");
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let git = Git::open(repo.path()).unwrap();
    let provider = MockProvider::failing(ModelError::Api {
        status: 429,
        message: "quota exceeded".to_string(),
    });

    let err = generate::commit_message(&git, &store, &provider, "diff", &options())
        .await
        .unwrap_err();
    assert_eq!(err.api_detail().unwrap(), "quota exceeded (status 429)");
}

#[tokio::test]
async fn generation_persists_the_resolved_model() {
    let repo = TestRepo::new();
    repo.commit("chore: init repo");
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let git = Git::open(repo.path()).unwrap();
    let provider = MockProvider::replying("message", "feat: add parser");

    generate::commit_message(&git, &store, &provider, "diff", &options())
        .await
        .unwrap();
    assert_eq!(store.get().model.as_deref(), Some(DEFAULT_MODEL));

    let requests = provider.requests();
    assert_eq!(requests[0].model, DEFAULT_MODEL);
}
