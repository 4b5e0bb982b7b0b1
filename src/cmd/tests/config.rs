#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;

    use cmd::config::Config;
    use cmd::error::Error;
    use cmd::error::Result;
    use tracing::level_filters::LevelFilter;
    use uuid::Uuid;

    fn write_config(content: &str) -> PathBuf {
        let path = temp_dir().join(format!("{}.toml", Uuid::new_v4()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_file_overrides_defaults() -> Result<()> {
        let path = write_config(
            r#"
[log]
level = "debug"

[data]
csv_path = "fires.csv"

[charts]
enabled = false
top_countries = 5

[sampling]
die_sides = 20
"#,
        );

        let raw = Config::load(Some(path.as_path()));
        fs::remove_file(&path)?;
        let cfg: common::config::Config = raw?.try_into()?;

        assert_eq!(cfg.log.level, LevelFilter::DEBUG);
        assert_eq!(cfg.data.csv_path, PathBuf::from("fires.csv"));
        assert!(!cfg.charts.enabled);
        assert_eq!(cfg.charts.top_countries, 5);
        assert_eq!(cfg.charts.heatmap_countries, 30);
        assert_eq!(cfg.charts.map_columns, 10);
        assert_eq!(cfg.sampling.die_sides, 20);
        assert_eq!(cfg.sampling.die_rolls, 10);
        assert_eq!(cfg.output_path("a.png"), PathBuf::from(".").join("a.png"));

        Ok(())
    }

    #[test]
    fn test_zero_sides_rejected() -> Result<()> {
        let path = write_config("[sampling]\ndie_sides = 0\n");
        let raw = Config::load(Some(path.as_path()));
        fs::remove_file(&path)?;

        let res: Result<common::config::Config> = raw?.try_into();
        assert!(matches!(res, Err(Error::BadRequest(_))));

        Ok(())
    }

    #[test]
    fn test_zero_countries_rejected() -> Result<()> {
        let path = write_config("[charts]\nmap_columns = 0\n");
        let raw = Config::load(Some(path.as_path()));
        fs::remove_file(&path)?;

        let res: Result<common::config::Config> = raw?.try_into();
        assert!(matches!(res, Err(Error::BadRequest(msg)) if msg.contains("map_columns")));

        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let path = temp_dir().join(format!("{}.toml", Uuid::new_v4()));

        assert!(matches!(Config::load(Some(path.as_path())), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_log_level() -> Result<()> {
        let path = write_config("[log]\nlevel = \"verbose\"\n");
        let res = Config::load(Some(path.as_path()));
        fs::remove_file(&path)?;

        assert!(matches!(res, Err(Error::Config(_))));

        Ok(())
    }
}
