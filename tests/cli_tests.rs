//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    use librhyme::cli::args::DictFormat;
    use librhyme::cli::commands::{execute, load_lexicon, save_lexicon};
    use librhyme::cli::detect::{detect_format, DetectionMethod};
    use librhyme::cli::paths::{file_extension, PersistentConfig};
    use librhyme::cli::Commands;
    use librhyme::engine::RhymeRule;

    const SAMPLE_DICT: &str = include_str!("data/cmudict-sample.dict");

    fn write_sample(temp_dir: &TempDir) -> PathBuf {
        let dict_path = temp_dir.path().join("sample.dict");
        fs::write(&dict_path, SAMPLE_DICT).unwrap();
        dict_path
    }

    #[test]
    fn test_detect_cmudict_format() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = write_sample(&temp_dir);

        let detection = detect_format(&dict_path, None).unwrap();
        assert_eq!(detection.format, DictFormat::Cmudict);
        assert_eq!(detection.method, DetectionMethod::Extension);
    }

    #[test]
    fn test_user_specified_format_override() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = write_sample(&temp_dir);

        let detection = detect_format(&dict_path, Some(DictFormat::Json)).unwrap();
        assert_eq!(detection.format, DictFormat::Json);
        assert_eq!(detection.method, DetectionMethod::UserSpecified);
    }

    #[test]
    fn test_snapshot_detected_and_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let source = load_lexicon(&write_sample(&temp_dir), DictFormat::Cmudict, None).unwrap();

        let snapshot = temp_dir.path().join(format!("sample.{}", file_extension(DictFormat::Bincode)));
        save_lexicon(&source, &snapshot, DictFormat::Bincode).unwrap();

        let detection = detect_format(&snapshot, None).unwrap();
        assert_eq!(detection.format, DictFormat::Bincode);
        let loaded = load_lexicon(&snapshot, detection.format, None).unwrap();
        assert_eq!(loaded.pronunciations().len(), 51);
    }

    #[test]
    fn test_custom_phone_table() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = temp_dir.path().join("tiny.dict");
        let phones_path = temp_dir.path().join("tiny.phones");
        fs::write(&dict_path, "DOG  D AO1 G\nLOG  L AO1 G\n").unwrap();
        fs::write(&phones_path, "AO\tvowel\nD\tstop\nG\tstop\nL\tliquid\n").unwrap();

        let lexicon = load_lexicon(&dict_path, DictFormat::Cmudict, Some(&phones_path)).unwrap();
        assert_eq!(lexicon.pronunciations().len(), 2);
        assert_eq!(lexicon.taxonomy().vowels().len(), 1);
    }

    #[test]
    fn test_settings_command_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let dict_path = write_sample(&temp_dir);

        execute(
            Commands::Settings {
                set_dict: Some(dict_path.clone()),
                set_phones: None,
                set_format: None,
                set_rule: Some(RhymeRule::Assonance),
                set_max_additive_length: Some(3),
                set_tail_span: None,
                set_budget: Some(0),
                reset: false,
            },
            Some(config_path.clone()),
        )
        .unwrap();

        let config = PersistentConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.dict_path, Some(dict_path));
        assert_eq!(config.rule, RhymeRule::Assonance);
        assert_eq!(config.engine.max_additive_length, 3);
        assert_eq!(config.engine.candidate_budget, None);
    }

    #[test]
    fn test_settings_reset() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let config = PersistentConfig {
            rule: RhymeRule::Family,
            ..PersistentConfig::default()
        };
        config.save_to(Some(&config_path)).unwrap();

        execute(
            Commands::Settings {
                set_dict: None,
                set_phones: None,
                set_format: None,
                set_rule: None,
                set_max_additive_length: None,
                set_tail_span: None,
                set_budget: None,
                reset: true,
            },
            Some(config_path.clone()),
        )
        .unwrap();

        let loaded = PersistentConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(loaded, PersistentConfig::default());
    }

    #[test]
    fn test_rhyme_command_unknown_word_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let dict_path = write_sample(&temp_dir);

        let source = librhyme::cli::args::SourceArgs {
            dict: Some(dict_path),
            ..Default::default()
        };
        let err = execute(
            Commands::Rhyme {
                word: "xyzzy".to_string(),
                rule: None,
                all: false,
                syllables: None,
                limit: None,
                source,
            },
            Some(config_path),
        )
        .unwrap_err();
        assert!(err.to_string().contains("XYZZY"));
    }

    #[test]
    fn test_rhyme_command_without_dictionary_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let err = execute(
            Commands::Info {
                source: Default::default(),
            },
            Some(config_path),
        )
        .unwrap_err();
        assert!(err.to_string().contains("No dictionary configured"));
    }
}
