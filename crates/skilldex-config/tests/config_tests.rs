#[cfg(test)]
mod tests {
    use skilldex_config::ConfigLoader;
    use skilldex_config::schema::*;
    use std::io::Write;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen, "127.0.0.1:3001");
        assert!(config.cors);
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn test_data_config_defaults() {
        let config = DataConfig::default();
        assert_eq!(config.path, std::path::PathBuf::from("data/skills.json"));
    }

    // ── TOML tests ─────────────────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = SkilldexConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: SkilldexConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.server.listen, config.server.listen);
        assert_eq!(restored.data.path, config.data.path);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[server]
listen = "0.0.0.0:8080"
"#;
        let config: SkilldexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:8080");
        // Defaults should fill in
        assert!(config.server.cors);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.data.path, std::path::PathBuf::from("data/skills.json"));
    }

    // ── set_port ───────────────────────────────────────────────

    #[test]
    fn test_set_port_keeps_host() {
        let mut config = ServerConfig {
            listen: "0.0.0.0:3001".into(),
            cors: false,
        };
        config.set_port(9000);
        assert_eq!(config.listen, "0.0.0.0:9000");
    }

    // ── Env overrides ──────────────────────────────────────────

    #[test]
    fn test_port_override_keeps_configured_host() {
        let mut config = SkilldexConfig::default();
        config.server.listen = "0.0.0.0:3001".into();
        let config = ConfigLoader::apply_overrides(config, Some("9000".into()), None, None);
        assert_eq!(config.server.listen, "0.0.0.0:9000");
    }

    #[test]
    fn test_non_numeric_port_override_is_ignored() {
        let config =
            ConfigLoader::apply_overrides(SkilldexConfig::default(), Some("nope".into()), None, None);
        assert_eq!(config.server.listen, "127.0.0.1:3001");
    }

    #[test]
    fn test_listen_override_replaces_full_address() {
        let config = ConfigLoader::apply_overrides(
            SkilldexConfig::default(),
            None,
            Some("10.0.0.5:8080".into()),
            None,
        );
        assert_eq!(config.server.listen, "10.0.0.5:8080");
    }

    #[test]
    fn test_listen_override_wins_over_port() {
        let config = ConfigLoader::apply_overrides(
            SkilldexConfig::default(),
            Some("9000".into()),
            Some("10.0.0.5:8080".into()),
            None,
        );
        assert_eq!(config.server.listen, "10.0.0.5:8080");
    }

    #[test]
    fn test_log_level_override_wins_over_file_value() {
        let mut config = SkilldexConfig::default();
        config.logging.level = "warn".into();
        let config =
            ConfigLoader::apply_overrides(config, None, None, Some("debug".into()));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_resolve_path_explicit_wins() {
        let explicit = std::path::Path::new("/etc/skilldex/skilldex.toml");
        assert_eq!(ConfigLoader::resolve_path(Some(explicit)), explicit);
    }

    // ── Validation ─────────────────────────────────────────────

    #[test]
    fn test_validate_rejects_bad_listen() {
        let mut config = SkilldexConfig::default();
        config.server.listen = "not-an-address".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_warns_on_unknown_level() {
        let mut config = SkilldexConfig::default();
        config.logging.level = "chatty".into();
        let warnings = config.validate().unwrap();
        assert!(!warnings.is_empty());
    }

    #[test]
    fn test_validate_default_config_is_clean() {
        let config = SkilldexConfig::default();
        assert!(config.validate().unwrap().is_empty());
    }

    // ── Loader tests ───────────────────────────────────────────

    #[test]
    fn test_loader_reads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nlisten = \"127.0.0.1:4000\"\n\n[data]\npath = \"fixtures/skills.json\"\n"
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(file.path())).unwrap();
        let config = loader.get();
        assert_eq!(config.server.listen, "127.0.0.1:4000");
        assert_eq!(
            config.data.path,
            std::path::PathBuf::from("fixtures/skills.json")
        );
        assert_eq!(loader.path(), file.path());
    }

    #[test]
    fn test_loader_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("skilldex.toml");
        let loader = ConfigLoader::load(Some(&missing)).unwrap();
        assert_eq!(loader.get().server.listen, "127.0.0.1:3001");
    }

    #[test]
    fn test_loader_bad_toml_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml [[[").unwrap();
        assert!(ConfigLoader::load(Some(file.path())).is_err());
    }
}
