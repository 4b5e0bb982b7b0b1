use enum_iterator::all;
use enum_iterator::Sequence;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

pub const COLUMN_COUNTRY: &str = "country";
pub const COLUMN_YEAR: &str = "year";
pub const COLUMN_TOTAL_BURNED_AREA: &str = "total_burned_area";

pub const LAND_COVER_COUNT: usize = 5;

/// Land cover category a burned area measurement is attributed to. The string
/// form matches the CSV column name.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Sequence,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LandCover {
    Forest,
    Savannas,
    ShrublandsGrasslands,
    Croplands,
    Other,
}

impl LandCover {
    pub fn all() -> impl Iterator<Item = LandCover> {
        all::<LandCover>()
    }

    /// Position of the cover in column order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// CSV column holding this cover.
    pub fn column(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::LandCover;
    use super::LAND_COVER_COUNT;

    #[test]
    fn test_column_names() {
        let columns = LandCover::all().map(|v| v.to_string()).collect::<Vec<_>>();
        assert_eq!(columns, vec![
            "forest",
            "savannas",
            "shrublands_grasslands",
            "croplands",
            "other"
        ]);
        assert_eq!(LandCover::all().count(), LAND_COVER_COUNT);

        for cover in LandCover::all() {
            assert_eq!(cover.column(), cover.to_string());
            assert_eq!(LandCover::from_str(cover.column()).unwrap(), cover);
        }
    }

    #[test]
    fn test_index_follows_column_order() {
        let idx = LandCover::all().map(|v| v.index()).collect::<Vec<_>>();
        assert_eq!(idx, vec![0, 1, 2, 3, 4]);
        assert!(LandCover::from_str("tundra").is_err());
    }
}
