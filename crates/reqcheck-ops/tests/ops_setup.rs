use std::path::PathBuf;

use reqcheck_core::version_set::SpanDisjointStrategy;
use reqcheck_ops::ops_setup::{collect_requirements, resolve_settings};
use reqcheck_ops::{CheckOptions, OutputFormat};
use reqcheck_util::errors::ReqcheckError;
use tempfile::TempDir;

fn options(requirements: &[&str]) -> CheckOptions {
    CheckOptions {
        requirements: requirements.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_collect_arguments_then_files() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("requirements.txt"),
        "# pinned\nnumpy>1.0\nscipy>1.0\n",
    )
    .unwrap();

    let mut opts = options(&["requests>2.28.0"]);
    opts.files = vec![PathBuf::from("requirements.txt")];

    let reqs = collect_requirements(tmp.path(), &opts).unwrap();
    let rendered: Vec<_> = reqs.iter().map(|r| r.to_string()).collect();
    assert_eq!(rendered, vec!["requests>2.28.0", "numpy>1.0", "scipy>1.0"]);
}

#[test]
fn test_collect_requires_some_input() {
    let tmp = TempDir::new().unwrap();
    let err = collect_requirements(tmp.path(), &CheckOptions::default()).unwrap_err();
    assert!(err.to_string().contains("No requirements given"), "got: {err}");
}

#[test]
fn test_collect_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let mut opts = options(&[]);
    opts.files = vec![PathBuf::from("missing.txt")];
    let err = collect_requirements(tmp.path(), &opts).unwrap_err();
    assert!(err.to_string().contains("missing.txt"), "got: {err}");
}

#[test]
fn test_collect_malformed_argument_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let err = collect_requirements(tmp.path(), &options(&["pypi://spacy:23"])).unwrap_err();
    assert!(matches!(err, ReqcheckError::Parse { .. }));
}

#[test]
fn test_settings_from_project_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("reqcheck.toml"),
        "[check]\nspan-disjoint = \"first-match\"\nwarn-unpinned = false\n",
    )
    .unwrap();

    let settings = resolve_settings(tmp.path(), &options(&[])).unwrap();
    assert_eq!(settings.checker.strategy(), SpanDisjointStrategy::FirstMatch);
    assert!(!settings.warn_unpinned);
}

#[test]
fn test_command_line_overrides_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("custom.toml"),
        "[check]\nspan-disjoint = \"first-match\"\n",
    )
    .unwrap();

    let mut opts = options(&[]);
    opts.config = Some(PathBuf::from("custom.toml"));
    opts.strategy = Some("exhaustive".to_string());
    opts.warn_unpinned = Some(false);

    let settings = resolve_settings(tmp.path(), &opts).unwrap();
    assert_eq!(settings.checker.strategy(), SpanDisjointStrategy::Exhaustive);
    assert!(!settings.warn_unpinned);
}

#[test]
fn test_unknown_strategy_override_is_config_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("reqcheck.toml"), "").unwrap();
    let mut opts = options(&[]);
    opts.strategy = Some("greedy".to_string());
    let err = resolve_settings(tmp.path(), &opts).unwrap_err();
    assert!(matches!(err, ReqcheckError::Config { .. }));
}

#[test]
fn test_output_format_parse() {
    assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::parse("text"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::parse("yaml"), None);
}
