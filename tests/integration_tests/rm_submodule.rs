use std::fs;

use crate::common::{TestRepo, rm_submodule, stderr};

fn repo_with_submodules() -> TestRepo {
    let repo = TestRepo::new();
    repo.write_file("file.txt", "contents");
    repo.commit_all("initial");
    repo.add_submodule("sub1");
    repo.add_submodule("sub2");
    repo.commit_all("add submodules");
    repo
}

#[test]
fn removes_one_submodule_and_leaves_the_other() {
    let repo = repo_with_submodules();

    let out = rm_submodule(&repo).arg("sub1").output().unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    // working tree gone, the other untouched
    assert!(!repo.root_path().join("sub1").exists());
    assert!(repo.root_path().join("sub2").exists());

    // configuration entry gone
    let gitmodules = fs::read_to_string(repo.root_path().join(".gitmodules")).unwrap();
    assert!(!gitmodules.contains("sub1"), ".gitmodules: {gitmodules}");
    assert!(gitmodules.contains("sub2"), ".gitmodules: {gitmodules}");

    // index entry gone
    let staged = repo.git_stdout(&["ls-files", "--stage"]);
    assert!(!staged.contains("sub1"), "index: {staged}");
    assert!(staged.contains("160000"), "index: {staged}");

    // metadata directory gone, the other's kept
    assert!(!repo.root_path().join(".git/modules/sub1").exists());
    assert!(repo.root_path().join(".git/modules/sub2").exists());

    // only the other submodule left for foreach
    let names = repo.git_stdout(&["submodule", "foreach", "--quiet", "echo $name"]);
    assert_eq!(names, "sub2");

    // removal was committed with path and url
    let subject = repo.git_stdout(&["log", "-1", "--format=%s"]);
    assert!(
        subject.contains("removed submodule [sub1]"),
        "subject: {subject}"
    );
    assert!(subject.contains("url:"), "subject: {subject}");

    // the tree is clean afterwards
    assert_eq!(repo.git_stdout(&["status", "--porcelain"]), "");
}

#[test]
fn no_commit_leaves_the_removal_staged() {
    let repo = repo_with_submodules();

    let out = rm_submodule(&repo)
        .args(["--no-commit", "sub1"])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    assert!(!repo.root_path().join("sub1").exists());
    let subject = repo.git_stdout(&["log", "-1", "--format=%s"]);
    assert_eq!(subject, "add submodules");
    let status = repo.git_stdout(&["status", "--porcelain"]);
    assert!(!status.is_empty(), "status: {status}");
}

#[test]
fn dirty_submodule_aborts_without_mutation() {
    let repo = repo_with_submodules();
    repo.write_file("sub2/uncommitted.txt", "dirty");

    let out = rm_submodule(&repo).arg("sub2").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("**error**"), "stderr: {}", stderr(&out));

    // nothing was touched
    assert!(repo.root_path().join("sub2").exists());
    let gitmodules = fs::read_to_string(repo.root_path().join(".gitmodules")).unwrap();
    assert!(gitmodules.contains("sub2"));
    let staged = repo.git_stdout(&["ls-files", "--stage"]);
    assert!(staged.contains("sub2"), "index: {staged}");
}

#[test]
fn dirty_superproject_aborts() {
    let repo = repo_with_submodules();
    repo.write_file("junk.txt", "junk");

    let out = rm_submodule(&repo).arg("sub1").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(repo.root_path().join("sub1").exists());
}

#[test]
fn missing_path_is_a_fatal_error() {
    let repo = repo_with_submodules();

    let out = rm_submodule(&repo).arg("nope").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains("**error**: no such directory [nope]"),
        "stderr: {}",
        stderr(&out)
    );
}

#[test]
fn tracked_directory_is_not_a_submodule() {
    let repo = repo_with_submodules();
    fs::create_dir(repo.root_path().join("plain")).unwrap();
    repo.write_file("plain/file.txt", "contents");
    repo.commit_all("add plain directory");

    let out = rm_submodule(&repo).arg("plain").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains("no such submodule [plain]"),
        "stderr: {}",
        stderr(&out)
    );
    assert!(repo.root_path().join("plain").exists());
}

#[test]
fn missing_argument_is_a_usage_error() {
    let repo = repo_with_submodules();

    let out = rm_submodule(&repo).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("**error**"), "stderr: {}", stderr(&out));
}

#[test]
fn trailing_slash_resolves_to_the_index_spelling() {
    let repo = repo_with_submodules();

    let out = rm_submodule(&repo).arg("sub1/").output().unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(!repo.root_path().join("sub1").exists());
}
