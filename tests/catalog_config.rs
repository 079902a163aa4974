// tests/catalog_config.rs
//
// Catalog source resolution: env var, config/ fallbacks, builtin.

use std::{env, fs};

use focus_spotlight::config::{
    load_catalog_default, load_catalog_from, SpotlightConfig, DEFAULT_DETAIL_BASE,
    ENV_CATALOG_PATH, ENV_DETAIL_BASE,
};

const SMALL_JSON: &str = r#"{"focuses":[{"code":"F1","title":"Family","topics":[
  {"code":"T1","title":"Health & Wellness"},{"code":"T2","title":"Quality Time"}]}]}"#;

#[test]
fn loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("catalog.json");
    fs::write(&p, SMALL_JSON).unwrap();
    let c = load_catalog_from(&p).unwrap();
    assert_eq!(c.len(), 2);
}

#[test]
fn rejects_duplicate_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("catalog.toml");
    fs::write(
        &p,
        r#"
[[focuses]]
code = "F1"
title = "Family"
topics = [{ code = "T1", title = "a" }, { code = "T1", title = "b" }]
"#,
    )
    .unwrap();
    let err = load_catalog_from(&p).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate identifier"), "{err:#}");
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var(ENV_CATALOG_PATH);

    // No files → builtin
    assert_eq!(load_catalog_default().unwrap().len(), 100);

    // config/catalog.json fallback
    fs::create_dir_all(tmp.path().join("config")).unwrap();
    fs::write(tmp.path().join("config/catalog.json"), SMALL_JSON).unwrap();
    assert_eq!(load_catalog_default().unwrap().len(), 2);

    // Env wins; a missing path is an error, not a silent fallback
    env::set_var(ENV_CATALOG_PATH, tmp.path().join("missing.toml"));
    assert!(load_catalog_default().is_err());
    env::remove_var(ENV_CATALOG_PATH);

    env::set_current_dir(&old).unwrap();
}

#[serial_test::serial]
#[test]
fn detail_base_env_override() {
    env::remove_var(ENV_CATALOG_PATH);
    env::set_var(ENV_DETAIL_BASE, "/portal/explorer");
    let cfg = SpotlightConfig::from_env().unwrap();
    assert_eq!(cfg.detail_base, "/portal/explorer");

    env::remove_var(ENV_DETAIL_BASE);
    let cfg = SpotlightConfig::from_env().unwrap();
    assert_eq!(cfg.detail_base, DEFAULT_DETAIL_BASE);
}
