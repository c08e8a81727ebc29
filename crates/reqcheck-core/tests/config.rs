use reqcheck_core::config::{dirs_path, GlobalConfig, PROJECT_CONFIG_FILE};
use reqcheck_core::version_set::SpanDisjointStrategy;
use reqcheck_util::errors::ReqcheckError;
use tempfile::TempDir;

#[test]
fn test_default_config_is_exhaustive_and_warns() {
    let config = GlobalConfig::default();
    assert_eq!(config.check.span_disjoint, SpanDisjointStrategy::Exhaustive);
    assert!(config.check.warn_unpinned);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config: GlobalConfig = toml::from_str("").unwrap();
    assert_eq!(config, GlobalConfig::default());
}

#[test]
fn test_parse_check_table() {
    let toml = r#"
[check]
span-disjoint = "first-match"
warn-unpinned = false
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.check.span_disjoint, SpanDisjointStrategy::FirstMatch);
    assert!(!config.check.warn_unpinned);
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let toml = "[check]\nspan-disjoint = \"sometimes\"\n";
    assert!(toml::from_str::<GlobalConfig>(toml).is_err());
}

#[test]
fn test_load_finds_project_config_in_ancestor() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(PROJECT_CONFIG_FILE),
        "[check]\nspan-disjoint = \"first-match\"\n",
    )
    .unwrap();
    let nested = tmp.path().join("src").join("pkg");
    std::fs::create_dir_all(&nested).unwrap();

    let config = GlobalConfig::load(&nested).unwrap();
    assert_eq!(config.check.span_disjoint, SpanDisjointStrategy::FirstMatch);
}

#[test]
fn test_load_from_invalid_file_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(PROJECT_CONFIG_FILE);
    std::fs::write(&path, "[check\n").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ReqcheckError::Config { .. }));
}

#[test]
fn test_dirs_path_contains_reqcheck() {
    assert!(dirs_path().ends_with(".reqcheck"));
}
