use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

fn temp_settings_file(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("exec_summary_settings_test_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(SETTINGS_FILE_NAME);
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn defaults_match_generation_backend() {
    let settings = Settings::default();
    assert_eq!(settings.api_key_env, "API_KEY");
    assert_eq!(settings.model, "gemini-2.5-flash");
    assert!((settings.temperature - 0.1).abs() < f32::EPSILON);
    assert_eq!(settings.request_timeout_secs, None);
    assert_eq!(settings.locale, Locale::Th);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        "model = \"gemini-2.5-pro\"\nlocale = \"en\"\nrequest_timeout_secs = 45\n",
    );

    let settings = read_settings_file(&path).expect("read settings");
    assert_eq!(settings.model, "gemini-2.5-pro");
    assert_eq!(settings.locale, Locale::En);
    assert_eq!(settings.request_timeout_secs, Some(45));
    assert_eq!(settings.base_url, DEFAULT_BASE_URL);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file_values() {
    let mut settings = Settings {
        model: "from-file".to_string(),
        ..Settings::default()
    };
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("APP__MODEL", "from-env"),
            ("APP__TEMPERATURE", "0.3"),
            ("APP__API_KEY_ENV", "GEMINI_API_KEY"),
            ("APP__LOCALE", "EN"),
        ]),
    );

    assert_eq!(settings.model, "from-env");
    assert!((settings.temperature - 0.3).abs() < f32::EPSILON);
    assert_eq!(settings.api_key_env, "GEMINI_API_KEY");
    assert_eq!(settings.locale, Locale::En);
}

#[test]
fn unparseable_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("APP__TEMPERATURE", "warm"),
            ("APP__REQUEST_TIMEOUT_SECS", "-1"),
            ("APP__LOCALE", "fr"),
            ("APP__MODEL", "   "),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn explicit_missing_file_is_an_error() {
    let missing = env::temp_dir().join("exec_summary_definitely_missing.toml");
    let err = load_settings(Some(&missing)).expect_err("missing file");
    assert!(err.to_string().contains("failed to read settings file"));
}

#[test]
fn invalid_toml_reports_path() {
    let path = temp_settings_file("temperature = \"hot\"");
    let err = read_settings_file(&path).expect_err("bad toml");
    assert!(err.to_string().contains("failed to parse settings file"));
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn dataset_defaults_to_builtin_directory() {
    let dataset = load_dataset(None).expect("builtin dataset");
    assert_eq!(dataset, Dataset::builtin());
}

#[test]
fn dataset_file_replaces_builtin_directory() {
    let path = temp_settings_file("");
    let dataset_path = path.with_file_name("dataset.json");
    fs::write(
        &dataset_path,
        r#"{"categories":[{"label":"Tech","entries":[{"name":"Ada","company":"X"}]}]}"#,
    )
    .expect("write dataset");

    let dataset = load_dataset(Some(&dataset_path)).expect("load dataset");
    assert_eq!(dataset.len(), 1);
    assert!(dataset.contains_person("Tech", "Ada"));

    fs::write(&dataset_path, r#"{"categories":[]}"#).expect("rewrite dataset");
    let err = load_dataset(Some(&dataset_path)).expect_err("empty dataset");
    assert!(err.to_string().contains("invalid dataset file"));
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}
