use chatlog::core::AppConfig;
use chatlog::core::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use chatlog::errors::ChatlogError;

const VARS: [&str; 7] = [
    "OPENAI_API_KEY",
    "OPENAI_ORG_ID",
    "OPENAI_MODEL",
    "OPENAI_BASE_URL",
    "OPENAI_TEMPERATURE",
    "OPENAI_SEED",
    "OPENAI_MAX_TOKENS",
];

fn clear() {
    for var in VARS {
        // SAFETY: this test binary has a single test, so nothing reads the
        // environment concurrently.
        unsafe { std::env::remove_var(var) };
    }
}

fn set(var: &str, value: &str) {
    // SAFETY: see `clear`.
    unsafe { std::env::set_var(var, value) };
}

// Environment variables are process-wide, so every case runs in one test.
#[test]
fn test_config_from_env() {
    clear();
    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, ChatlogError::ConfigError(_)));
    assert!(err.to_string().contains("OPENAI_API_KEY"));

    set("OPENAI_API_KEY", "   ");
    assert!(AppConfig::from_env().is_err());

    set("OPENAI_API_KEY", "sk-test");
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.model_name(), DEFAULT_MODEL);
    assert_eq!(config.openai_base_url.as_str().trim_end_matches('/'), DEFAULT_BASE_URL);
    assert_eq!(config.temperature, 0.0);
    assert_eq!(config.seed, 42);
    assert_eq!(config.max_tokens, 2000);
    assert_eq!(config.openai_org_id, None);

    set("OPENAI_MODEL", "gpt-4o-mini");
    set("OPENAI_ORG_ID", "org-123");
    set("OPENAI_SEED", "7");
    set("OPENAI_TEMPERATURE", "0.5");
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.model_name(), "gpt-4o-mini");
    assert_eq!(config.openai_org_id.as_deref(), Some("org-123"));
    assert_eq!(config.seed, 7);
    assert_eq!(config.temperature, 0.5);

    set("OPENAI_SEED", "forty-two");
    let err = AppConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("OPENAI_SEED"));
    set("OPENAI_SEED", "42");

    set("OPENAI_BASE_URL", "not a url");
    assert!(matches!(
        AppConfig::from_env().unwrap_err(),
        ChatlogError::ConfigError(_)
    ));

    clear();
}
