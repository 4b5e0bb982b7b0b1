use std::path::Path;
use std::path::PathBuf;

use common::defaults;
use serde::Deserialize;
use service::tracing::LogLevel;

use crate::error::Error;
use crate::error::Result;

pub const ENV_PREFIX: &str = "LESSONS";

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Log {
    pub level: LogLevel,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Data {
    pub csv_path: PathBuf,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Output {
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Charts {
    pub enabled: bool,
    pub font_path: PathBuf,
    pub top_countries: usize,
    pub heatmap_countries: usize,
    pub map_countries: usize,
    pub map_columns: usize,
    pub report_countries: usize,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Sampling {
    pub die_sides: u32,
    pub die_rolls: usize,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub log: Log,
    pub data: Data,
    pub output: Output,
    pub charts: Charts,
    pub sampling: Sampling,
}

impl Config {
    /// Built-in defaults, overridden by the TOML file and then by
    /// `LESSONS__SECTION__KEY` environment variables. Without an explicit
    /// path `lessons.toml` is read when it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = config::Config::builder()
            .set_default("log.level", "info")?
            .set_default("data.csv_path", defaults::CSV_FILE)?
            .set_default("output.dir", defaults::OUTPUT_DIR)?
            .set_default("charts.enabled", true)?
            .set_default("charts.font_path", defaults::FONT_PATH)?
            .set_default("charts.top_countries", defaults::TOP_COUNTRIES as i64)?
            .set_default("charts.heatmap_countries", defaults::HEATMAP_COUNTRIES as i64)?
            .set_default("charts.map_countries", defaults::MAP_COUNTRIES as i64)?
            .set_default("charts.map_columns", defaults::MAP_COLUMNS as i64)?
            .set_default("charts.report_countries", defaults::REPORT_COUNTRIES as i64)?
            .set_default("sampling.die_sides", defaults::DIE_SIDES as i64)?
            .set_default("sampling.die_rolls", defaults::DIE_ROLLS as i64)?;

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder
                .add_source(config::File::from(Path::new(defaults::CONFIG_FILE)).required(false)),
        };

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn positive(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(Error::BadRequest(format!("{name} should be positive")));
    }

    Ok(value)
}

impl TryInto<common::config::Config> for Config {
    type Error = Error;

    fn try_into(self) -> Result<common::config::Config> {
        if self.sampling.die_sides == 0 {
            return Err(Error::BadRequest(
                "sampling.die_sides should be positive".to_string(),
            ));
        }

        Ok(common::config::Config {
            log: common::config::Log {
                level: self.log.level.into(),
            },
            data: common::config::Data {
                csv_path: self.data.csv_path,
            },
            output: common::config::Output {
                dir: self.output.dir,
            },
            charts: common::config::Charts {
                enabled: self.charts.enabled,
                font_path: self.charts.font_path,
                top_countries: positive("charts.top_countries", self.charts.top_countries)?,
                heatmap_countries: positive(
                    "charts.heatmap_countries",
                    self.charts.heatmap_countries,
                )?,
                map_countries: positive("charts.map_countries", self.charts.map_countries)?,
                map_columns: positive("charts.map_columns", self.charts.map_columns)?,
                report_countries: positive(
                    "charts.report_countries",
                    self.charts.report_countries,
                )?,
            },
            sampling: common::config::Sampling {
                die_sides: self.sampling.die_sides,
                die_rolls: self.sampling.die_rolls,
            },
        })
    }
}
