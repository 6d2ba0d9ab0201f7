//! Tree output tests for dirtree
//!
//! Runs the binary against temporary directories and checks the exact
//! bytes written to stdout.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

fn dirtree() -> Command {
    cargo_bin_cmd!("dirtree")
}

fn header(root: &Path) -> String {
    format!(
        "Directory Tree for: {}\n\n",
        std::path::absolute(root).unwrap().display()
    )
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn prints_example_tree() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("dir1")).unwrap();
    fs::write(temp.path().join("dir1/nested.txt"), "").unwrap();
    fs::write(temp.path().join("file1.txt"), "").unwrap();

    let stdout = stdout_of(dirtree().arg(temp.path()));
    assert_eq!(
        stdout,
        format!(
            "{}├── dir1\n│   └── nested.txt\n└── file1.txt\n",
            header(temp.path())
        )
    );
}

#[test]
fn defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("here.txt"), "").unwrap();

    let stdout = stdout_of(dirtree().current_dir(temp.path()));
    // The child's working directory is reported in canonical form
    let cwd = temp.path().canonicalize().unwrap();
    assert_eq!(stdout, format!("{}└── here.txt\n", header(&cwd)));
}

#[test]
fn relative_root_is_printed_absolute() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub/a"), "").unwrap();

    let stdout = stdout_of(dirtree().arg("sub").current_dir(temp.path()));
    assert_eq!(
        stdout,
        format!(
            "{}└── a\n",
            header(&temp.path().canonicalize().unwrap().join("sub"))
        )
    );
}

#[test]
fn empty_directory_prints_only_header() {
    let temp = TempDir::new().unwrap();

    let stdout = stdout_of(dirtree().arg(temp.path()));
    assert_eq!(stdout, header(temp.path()));
}

#[test]
fn repeated_runs_are_identical() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("x/y/z")).unwrap();
    fs::write(temp.path().join("x/y/z/deep"), "").unwrap();
    fs::write(temp.path().join("x/b"), "").unwrap();
    fs::write(temp.path().join("a"), "").unwrap();

    let first = stdout_of(dirtree().arg(temp.path()));
    let second = stdout_of(dirtree().arg(temp.path()));
    assert_eq!(first, second);
    assert!(first.ends_with("├── a\n└── x\n    ├── b\n    └── y\n        └── z\n            └── deep\n"));
}

#[test]
fn parent_component_in_root_is_normalized() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("top.txt"), "").unwrap();

    let cwd = temp.path().join("sub");
    let stdout = stdout_of(dirtree().arg("..").current_dir(&cwd));
    let expected_root = temp.path().canonicalize().unwrap();
    assert_eq!(
        stdout,
        format!("{}├── sub\n└── top.txt\n", header(&expected_root))
    );
}

#[cfg(unix)]
#[test]
fn symlinked_root_is_followed_and_kept_in_header() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("real")).unwrap();
    fs::write(temp.path().join("real/a"), "").unwrap();
    let link = temp.path().join("link");
    std::os::unix::fs::symlink(temp.path().join("real"), &link).unwrap();

    let stdout = stdout_of(dirtree().arg(&link));
    assert_eq!(stdout, format!("{}└── a\n", header(&link)));
}

#[cfg(unix)]
#[test]
fn non_utf8_root_is_accepted() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path().join(OsStr::from_bytes(b"bad\xffname"));
    if fs::create_dir(&root).is_err() {
        // Filesystem rejects non-UTF-8 names
        return;
    }
    fs::write(root.join("f"), "").unwrap();

    let stdout = stdout_of(dirtree().arg(&root));
    assert_eq!(stdout, format!("{}└── f\n", header(&root)));
    assert!(stdout.contains("bad\u{FFFD}name"));
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_aborts_with_partial_output() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a"), "").unwrap();
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(temp.path().join("z"), "").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permissions are not enforced for privileged users
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let strict = dirtree().arg(temp.path()).output().unwrap();
    let lenient = dirtree()
        .arg("--skip-unreadable")
        .arg(temp.path())
        .output()
        .unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(strict.status.code(), Some(2));
    assert_eq!(
        String::from_utf8(strict.stdout).unwrap(),
        format!("{}├── a\n├── locked\n", header(temp.path()))
    );
    assert!(String::from_utf8(strict.stderr)
        .unwrap()
        .contains("Permission denied"));

    assert!(lenient.status.success());
    assert_eq!(
        String::from_utf8(lenient.stdout).unwrap(),
        format!(
            "{}├── a\n├── locked\n│   └── [unreadable: permission denied]\n└── z\n",
            header(temp.path())
        )
    );
}
