use super::*;

// =============================================================================
// env helpers: unique var names avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_and_false_variants() {
    for (i, val) in ["1", "true", "YES", " on "].iter().enumerate() {
        let key = format!("__TEST_PORTAL_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
    for (i, val) in ["0", "false", "No", "off"].iter().enumerate() {
        let key = format!("__TEST_PORTAL_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_garbage_and_unset_are_none() {
    let key = "__TEST_PORTAL_EB_GARBAGE__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_PORTAL_EB_SURELY_UNSET__"), None);
}

#[test]
fn env_parse_falls_back_on_bad_input() {
    let key = "__TEST_PORTAL_EP_BAD__";
    unsafe { std::env::set_var(key, "thirty") };
    assert_eq!(env_parse(key, 30_u64), 30);
    unsafe { std::env::set_var(key, " 12 ") };
    assert_eq!(env_parse(key, 30_u64), 12);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn production_detection() {
    assert!(is_production("production"));
    assert!(is_production(" PROD "));
    assert!(!is_production("development"));
    assert!(!is_production(""));
}

// =============================================================================
// ApiConfig: touches shared API_* vars, so everything lives in one test.
// =============================================================================

#[test]
fn api_config_defaults_and_overrides() {
    unsafe {
        std::env::remove_var("API_BASE_URL");
        std::env::remove_var("API_TIMEOUT_SECS");
    }
    let cfg = ApiConfig::from_env();
    assert_eq!(cfg, ApiConfig::default());
    assert_eq!(cfg.base_url, "http://localhost:5000/api");
    assert_eq!(cfg.timeout, Duration::from_secs(30));

    unsafe {
        std::env::set_var("API_BASE_URL", "https://api.example.test/v1/");
        std::env::set_var("API_TIMEOUT_SECS", "5");
    }
    let cfg = ApiConfig::from_env();
    assert_eq!(cfg.base_url, "https://api.example.test/v1");
    assert_eq!(cfg.timeout, Duration::from_secs(5));

    unsafe { std::env::set_var("API_BASE_URL", "   ") };
    assert_eq!(ApiConfig::from_env().base_url, DEFAULT_API_BASE_URL);

    unsafe {
        std::env::remove_var("API_BASE_URL");
        std::env::remove_var("API_TIMEOUT_SECS");
    }
}
