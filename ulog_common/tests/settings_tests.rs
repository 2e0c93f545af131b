#[cfg(test)]
mod tests {
    use ulog_common::logging::settings::LogSettings;
    use ulog_common::logging::settings_error::SettingsError;
    use ulog_common::message::level::Level;
    use ulog_common::message::log_time::LogTime;
    use ulog_common::message::process_info::ProcessInfo;
    use ulog_common::message::source::Source;
    use ulog_common::message::Message;

    fn sample() -> Message {
        Message::from_parts(
            Source::OBJCXX,
            Level::Notice,
            "hello there",
            LogTime::from_parts(1_700_000_000, 5),
            ProcessInfo::new(10, 2),
        )
    }

    #[test]
    fn test_defaults_show_everything() {
        let settings = LogSettings::default();
        for source in Source::ALL {
            assert!(settings.shows_source(source));
        }
        for level in Level::ALL {
            assert!(settings.shows_level(level));
        }
        let msg = sample();
        assert_eq!(settings.render(&msg), msg.get_description());
    }

    #[test]
    fn test_filters() {
        let mut settings = LogSettings::default();
        let msg = sample();

        settings.show_objcxx = false;
        assert!(!settings.shows(&msg));
        settings.show_objcxx = true;
        settings.show_notice = false;
        assert!(!settings.shows(&msg));

        settings.restore_defaults();
        assert_eq!(settings, LogSettings::default());
        assert!(settings.shows(&msg));
    }

    #[test]
    fn test_render_hidden_columns() {
        let mut settings = LogSettings::default();
        let msg = sample();

        settings.show_time = false;
        settings.show_process = false;
        assert_eq!(settings.render(&msg), "[ OBJCXX ]> [ Notice ]> hello there");

        settings.show_source = false;
        settings.show_level = false;
        assert_eq!(settings.render(&msg), "hello there");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = LogSettings::default();
        settings.show_asl = false;
        settings.show_debug = false;
        settings.save(&path).unwrap();

        let loaded = LogSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "show_time": false }"#).unwrap();

        let loaded = LogSettings::load(&path).unwrap();
        assert!(!loaded.show_time);
        assert!(loaded.show_process);
        assert!(loaded.show_debug);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = LogSettings::load(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(SettingsError::Io(_))));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let broken = LogSettings::load(&path);
        assert!(matches!(broken, Err(SettingsError::Serialization(_))));
    }
}
