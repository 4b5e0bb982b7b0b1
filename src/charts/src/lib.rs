pub mod bars;
pub mod bubbles;
mod colorbar;
pub mod colormap;
pub mod error;
pub mod fonts;
pub mod heatmap;
pub mod layout;
pub mod lines;
pub mod scatter;

pub use colormap::ColorMap;
pub use error::ChartError;
pub use error::Result;

/// Family every chart draws its text with, see [fonts::register].
pub const FONT: &str = "sans-serif";

pub const TOP_COUNTRIES_FILE: &str = "top_countries_burned_area.png";
pub const LAND_COVER_FILE: &str = "land_cover_distribution.png";
pub const YEARLY_TRENDS_FILE: &str = "yearly_fire_trends.png";
pub const HEATMAP_FILE: &str = "regional_fire_heatmap.png";
pub const WORLD_MAP_FILE: &str = "world_fire_map_simulation.png";
pub const CUBES_SMALL_FILE: &str = "cubes_first_5.png";
pub const CUBES_LARGE_FILE: &str = "cubes_first_5000.png";
