use std::fs;

use skeleton::cli::{Command, CreateArgs};
use skeleton::commands::{get_output_dir, run};
use skeleton::error::Error;
use tempfile::TempDir;

fn create_args(root: &TempDir, force: bool) -> CreateArgs {
    CreateArgs {
        templates_dir: root.path().join("templates"),
        output_dir: root.path().join("output"),
        values: root.path().join("values.yaml"),
        force,
        strict: false,
    }
}

#[test]
fn test_get_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    assert!(get_output_dir(path.join("new_dir"), false).is_ok());
    assert!(matches!(
        get_output_dir(path, false),
        Err(Error::OutputDirectoryExistsError { .. })
    ));
    assert!(get_output_dir(path, true).is_ok());
}

#[test]
fn test_run_create() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("templates/src")).unwrap();
    fs::write(root.path().join("templates/src/main.rs.tpl"), "// {{ name }}\n").unwrap();
    fs::write(root.path().join("values.yaml"), "name: demo\n").unwrap();

    run(Command::Create(create_args(&root, false))).unwrap();

    assert_eq!(
        fs::read_to_string(root.path().join("output/src/main.rs")).unwrap(),
        "// demo\n"
    );
}

#[test]
fn test_failed_run_removes_output() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("templates")).unwrap();
    fs::write(root.path().join("templates/a.txt"), "plain").unwrap();
    fs::write(root.path().join("templates/b.txt.tpl"), "{{ fail('stop') }}").unwrap();
    fs::write(root.path().join("values.yaml"), "{}\n").unwrap();

    let err = run(Command::Create(create_args(&root, false))).unwrap_err();

    assert!(matches!(err, Error::TemplateExecError { .. }));
    assert!(!root.path().join("output").exists());
}

#[test]
fn test_existing_output_is_refused_and_kept() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("templates")).unwrap();
    fs::create_dir_all(root.path().join("output")).unwrap();
    fs::write(root.path().join("output/keep.txt"), "mine").unwrap();
    fs::write(root.path().join("values.yaml"), "{}\n").unwrap();

    let err = run(Command::Create(create_args(&root, false))).unwrap_err();

    assert!(matches!(err, Error::OutputDirectoryExistsError { .. }));
    assert!(root.path().join("output/keep.txt").exists());
}

#[test]
fn test_force_writes_into_existing_output() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("templates")).unwrap();
    fs::create_dir_all(root.path().join("output")).unwrap();
    fs::write(root.path().join("output/keep.txt"), "mine").unwrap();
    fs::write(root.path().join("templates/new.txt"), "new").unwrap();
    fs::write(root.path().join("values.yaml"), "{}\n").unwrap();

    run(Command::Create(create_args(&root, true))).unwrap();

    assert!(root.path().join("output/keep.txt").exists());
    assert_eq!(fs::read_to_string(root.path().join("output/new.txt")).unwrap(), "new");
}
