pub const CSV_FILE: &str = "MCD64A1_burned_area_full_dataset_2002-2023.csv";
pub const OUTPUT_DIR: &str = ".";
pub const CONFIG_FILE: &str = "lessons.toml";
pub const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

pub const TOP_COUNTRIES: usize = 20;
pub const HEATMAP_COUNTRIES: usize = 30;
pub const MAP_COUNTRIES: usize = 50;
pub const MAP_COLUMNS: usize = 10;
pub const REPORT_COUNTRIES: usize = 10;

pub const DIE_SIDES: u32 = 6;
pub const DIE_ROLLS: usize = 10;
