use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn stray_argument_is_a_usage_error() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("create-favicon")
        .current_dir(&dir)
        .arg("other.ico")
        .assert()
        .failure()
        .code(2);

    dir.child("favicon.ico").assert(predicate::path::missing());
}

#[test]
fn unwritable_target_fails_without_confirmation() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("favicon.ico").create_dir_all().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("create-favicon")
        .current_dir(&dir)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("could not create favicon"))
        .stderr(predicate::str::contains("failed to write"));
}
