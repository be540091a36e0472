use git2::{Repository, Signature};
use tempfile::TempDir;

/// Create a repository with one empty commit tagged with each of `tags`.
pub fn repo_with_tags(tags: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    let sig = Signature::now("Test User", "test@example.com").expect("Could not create signature");
    let tree_id = repo
        .index()
        .expect("Could not get index")
        .write_tree()
        .expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let commit_id = repo
        .commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
        .expect("Could not create commit");
    let commit = repo.find_object(commit_id, None).expect("Could not find commit");

    for tag in tags {
        repo.tag_lightweight(tag, &commit, false)
            .expect("Could not create tag");
    }

    temp_dir
}

/// Tags used across the repository tests.
pub const TAGS: &[&str] = &[
    "0.0.1",
    "v0.0.2",
    "v0.0.2-pre",
    "v0.0.2-pre+win",
    "v0.0.2+win",
    "v0.0.2+win+invalid",
    "foo-0.0.1",
    "foo-0.0.2",
    "foo-0.0.2-pre",
    "foo-0.0.2-pre+win",
    "foo-0.0.2+win",
    "foo-0.0.2+win+invalid",
];
