pub mod config;
pub mod defaults;
pub mod types;

pub use types::LandCover;
pub use types::LAND_COVER_COUNT;
