use crate::common::{TestRepo, check_non_tracking, stderr};

#[test]
fn tracking_branches_are_quiet() {
    let repo = TestRepo::new();
    repo.write_file("file.txt", "contents");
    repo.commit_all("initial");
    repo.add_origin();
    // A merged branch without an upstream is excluded by the unmerged-only
    // listing.
    repo.git(&["branch", "twin"]);

    let out = check_non_tracking(&repo).output().unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stderr(&out).is_empty());
}

#[test]
fn unmerged_branch_without_upstream_is_reported() {
    let repo = TestRepo::new();
    repo.write_file("file.txt", "contents");
    repo.commit_all("initial");
    repo.add_origin();

    repo.git(&["checkout", "-b", "feature"]);
    repo.write_file("feature.txt", "work");
    repo.commit_all("feature work");
    repo.git(&["checkout", "main"]);

    let out = check_non_tracking(&repo).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains(
            "[feature] is not a remote tracking branch and is not fully merged in any tracking branch"
        ),
        "stderr: {}",
        stderr(&out)
    );

    // Giving it an upstream clears the report.
    repo.git(&["push", "-u", "origin", "feature"]);
    let out = check_non_tracking(&repo).output().unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
}

#[test]
fn no_exit_code_keeps_the_message_but_exits_zero() {
    let repo = TestRepo::new();
    repo.write_file("file.txt", "contents");
    repo.commit_all("initial");
    repo.add_origin();

    repo.git(&["checkout", "-b", "scratch"]);
    repo.write_file("scratch.txt", "work");
    repo.commit_all("scratch work");
    repo.git(&["checkout", "main"]);

    let out = check_non_tracking(&repo)
        .arg("--no-exit-code")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(stderr(&out).contains("[scratch]"));
}
