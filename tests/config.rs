#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;
    use taskflow::commands::load_config;
    use taskflow::libs::config::{Config, ConfigError, BACKEND_URL_VAR, TIMEOUT_VAR};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn env_file(&self, contents: &str) -> PathBuf {
            let path = self.temp_dir.path().join(".env");
            fs::write(&path, contents).unwrap();
            path
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            // File-based tests rely on the process environment not overriding them.
            std::env::remove_var(BACKEND_URL_VAR);
            std::env::remove_var(TIMEOUT_VAR);
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_backend_url_is_required() {
        assert_eq!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::MissingBackendUrl(BACKEND_URL_VAR.to_string()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(BACKEND_URL_VAR, "  ")])),
            Err(ConfigError::MissingBackendUrl(BACKEND_URL_VAR.to_string()))
        );
    }

    #[test]
    fn test_backend_url_is_normalized() {
        let config = Config::from_lookup(lookup(&[(BACKEND_URL_VAR, " http://localhost:8001/ ")])).unwrap();
        assert_eq!(config.api_url, "http://localhost:8001");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_invalid_backend_url() {
        for value in ["localhost:8001", "ftp://files.example.com", "not a url"] {
            assert_eq!(
                Config::from_lookup(lookup(&[(BACKEND_URL_VAR, value)])),
                Err(ConfigError::InvalidBackendUrl(value.to_string())),
                "{}",
                value
            );
        }
    }

    #[test]
    fn test_timeout_must_be_positive_seconds() {
        let config =
            Config::from_lookup(lookup(&[(BACKEND_URL_VAR, "https://tasks.example.com"), (TIMEOUT_VAR, "30")])).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));

        for value in ["0", "-1", "soon"] {
            assert_eq!(
                Config::from_lookup(lookup(&[(BACKEND_URL_VAR, "https://tasks.example.com"), (TIMEOUT_VAR, value)])),
                Err(ConfigError::InvalidTimeout(value.to_string()))
            );
        }
    }

    #[test]
    fn test_api_url_override() {
        let env = lookup(&[(BACKEND_URL_VAR, "http://localhost:8001")]);
        let overridden = Config::resolve(&env, Some("https://tasks.example.com/")).unwrap();
        assert_eq!(overridden.api_url, "https://tasks.example.com");
        assert_eq!(Config::resolve(&env, None).unwrap().api_url, "http://localhost:8001");
        assert_eq!(
            Config::resolve(&env, Some("nope")),
            Err(ConfigError::InvalidBackendUrl("nope".to_string()))
        );
    }

    #[test]
    fn test_api_url_replaces_broken_env_url() {
        let env = lookup(&[(BACKEND_URL_VAR, "not a url")]);
        assert!(Config::resolve(&env, None).is_err());

        let config = Config::resolve(&env, Some("http://localhost:8001")).unwrap();
        assert_eq!(config.api_url, "http://localhost:8001");
    }

    #[test]
    fn test_env_timeout_applies_to_api_url() {
        let env = lookup(&[(TIMEOUT_VAR, "5")]);
        let config = Config::resolve(&env, Some("http://localhost:8001")).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));

        let broken = lookup(&[(TIMEOUT_VAR, "soon")]);
        assert_eq!(
            Config::resolve(&broken, Some("http://localhost:8001")),
            Err(ConfigError::InvalidTimeout("soon".to_string()))
        );
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let message = ConfigError::MissingBackendUrl(BACKEND_URL_VAR.to_string()).to_string();
        assert!(message.contains(BACKEND_URL_VAR));
        assert!(ConfigError::InvalidTimeout("soon".to_string()).to_string().contains("soon"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_from_env_file(ctx: &mut ConfigTestContext) {
        let path = ctx.env_file("TASKFLOW_BACKEND_URL=http://127.0.0.1:9000/\nTASKFLOW_TIMEOUT_SECS=5\n");

        let config = Config::read_from(&path).unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_from_missing_file(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("absent.env");
        assert_eq!(
            Config::read_from(&path),
            Err(ConfigError::MissingBackendUrl(BACKEND_URL_VAR.to_string()))
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_flag_alone_is_enough(ctx: &mut ConfigTestContext) {
        // Run from an empty directory so no .env is picked up.
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(ctx.temp_dir.path()).unwrap();

        let config = load_config(Some("http://localhost:8001".to_string()));
        let missing = load_config(None);

        std::env::set_current_dir(previous).unwrap();
        assert_eq!(config.unwrap().api_url, "http://localhost:8001");
        assert!(missing.is_err());
    }
}
