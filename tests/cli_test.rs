use clap::Parser;
use skeleton::cli::{Args, Command};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("skeleton")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["create", "-v", "values.yaml", "./templates", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(!parsed.verbose);
    let Command::Create(create) = parsed.command;
    assert_eq!(create.templates_dir, PathBuf::from("./templates"));
    assert_eq!(create.output_dir, PathBuf::from("./output"));
    assert_eq!(create.values, PathBuf::from("values.yaml"));
    assert!(!create.force);
    assert!(!create.strict);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--verbose",
        "create",
        "--values",
        "v.yaml",
        "--force",
        "--strict",
        "./templates",
        "./output",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    let Command::Create(create) = parsed.command;
    assert!(create.force);
    assert!(create.strict);
}

#[test]
fn test_verbose_after_subcommand() {
    let args = make_args(&["create", "-v", "v.yaml", "--verbose", "t", "o"]);
    assert!(Args::try_parse_from(args).unwrap().verbose);
}

#[test]
fn test_missing_values() {
    let args = make_args(&["create", "./templates", "./output"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_args() {
    let args = make_args(&["create", "-v", "v.yaml", "./templates"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["create", "-v", "v.yaml", "./templates", "./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_unknown_command() {
    let args = make_args(&["destroy", "./templates"]);
    assert!(Args::try_parse_from(args).is_err());
}
