use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use crate::defaults;

#[derive(Debug, Clone)]
pub struct Log {
    pub level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Data {
    pub csv_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Output {
    pub dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Charts {
    pub enabled: bool,
    pub font_path: PathBuf,
    pub top_countries: usize,
    pub heatmap_countries: usize,
    pub map_countries: usize,
    pub map_columns: usize,
    pub report_countries: usize,
}

#[derive(Debug, Clone)]
pub struct Sampling {
    pub die_sides: u32,
    pub die_rolls: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log: Log,
    pub data: Data,
    pub output: Output,
    pub charts: Charts,
    pub sampling: Sampling,
}

impl Config {
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output.dir.join(file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log: Log {
                level: LevelFilter::INFO,
            },
            data: Data {
                csv_path: PathBuf::from(defaults::CSV_FILE),
            },
            output: Output {
                dir: PathBuf::from(defaults::OUTPUT_DIR),
            },
            charts: Charts {
                enabled: true,
                font_path: PathBuf::from(defaults::FONT_PATH),
                top_countries: defaults::TOP_COUNTRIES,
                heatmap_countries: defaults::HEATMAP_COUNTRIES,
                map_countries: defaults::MAP_COUNTRIES,
                map_columns: defaults::MAP_COLUMNS,
                report_countries: defaults::REPORT_COUNTRIES,
            },
            sampling: Sampling {
                die_sides: defaults::DIE_SIDES,
                die_rolls: defaults::DIE_ROLLS,
            },
        }
    }
}
