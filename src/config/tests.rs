use super::*;
use serial_test::serial;
use std::env;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_prepflow_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("PREPFLOW_MAX_QUESTIONS");
        env::remove_var("PREPFLOW_NONVERBAL_WEIGHT");
        env::remove_var("PREPFLOW_SEED");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.max_questions, 5);
    assert_eq!(config.nonverbal_weight, 0.4);
    assert!(config.seed.is_none());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_prepflow_env();

    let config = Config::from_env().expect("should parse with defaults");
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_custom_max_questions() {
    clear_prepflow_env();

    with_env_vars(&[("PREPFLOW_MAX_QUESTIONS", "8")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.max_questions, 8);
    });
}

#[test]
#[serial]
fn test_from_env_custom_weight() {
    clear_prepflow_env();

    with_env_vars(&[("PREPFLOW_NONVERBAL_WEIGHT", "0.25")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.nonverbal_weight, 0.25);
    });
}

#[test]
#[serial]
fn test_from_env_seed() {
    clear_prepflow_env();

    with_env_vars(&[("PREPFLOW_SEED", "42")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.seed, Some(42));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_max_questions() {
    clear_prepflow_env();

    with_env_vars(&[("PREPFLOW_MAX_QUESTIONS", "not-a-number")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MaxQuestionsParseError { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_zero_max_questions_rejected() {
    clear_prepflow_env();

    with_env_vars(&[("PREPFLOW_MAX_QUESTIONS", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxQuestions { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_out_of_range_weight_rejected() {
    clear_prepflow_env();

    with_env_vars(&[("PREPFLOW_NONVERBAL_WEIGHT", "1.5")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWeight { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_seed() {
    clear_prepflow_env();

    with_env_vars(&[("PREPFLOW_SEED", "abc")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::SeedParseError { .. }));
    });
}

#[test]
fn test_seeded_rng_is_reproducible() {
    use rand::RngCore;

    let config = Config {
        seed: Some(42),
        ..Default::default()
    };
    let mut a = config.rng();
    let mut b = config.rng();
    assert_eq!(a.next_u64(), b.next_u64());
    assert_eq!(a.next_u64(), b.next_u64());
}

#[test]
fn test_unseeded_rng_draws_from_entropy() {
    use rand::RngCore;

    // No assertion on the values themselves, only that the generator works.
    let mut rng = Config::default().rng();
    rng.next_u64();
}

#[test]
fn test_validate_rejects_negative_weight() {
    let config = Config {
        nonverbal_weight: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeight { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = ConfigError::InvalidMaxQuestions {
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("max questions"));

    let err = ConfigError::InvalidWeight {
        value: "1.5".to_string(),
    };
    assert!(err.to_string().contains("non-verbal weight"));
}
