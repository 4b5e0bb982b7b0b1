use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use bytesize::ByteSize;
use common::types::COLUMN_COUNTRY;
use common::types::COLUMN_YEAR;
use common::LandCover;
use serde::Deserialize;
use tracing::debug;
use tracing::info;

use crate::error::QueryError;
use crate::error::Result;
use crate::summary::LandCoverTotals;

#[derive(Debug, Clone, Deserialize)]
struct CSVFireRecord {
    country: String,
    year: i32,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    forest: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    savannas: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    shrublands_grasslands: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    croplands: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    other: Option<f64>,
}

/// One country-year row. Missing measurements are stored as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FireRecord {
    pub country: String,
    pub year: i32,
    pub burned: LandCoverTotals,
}

// "NaN" and "inf" parse as floats, they count as missing like empty cells
fn measurement(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or_default()
}

impl From<CSVFireRecord> for FireRecord {
    fn from(rec: CSVFireRecord) -> Self {
        let burned = LandCoverTotals::new([
            measurement(rec.forest),
            measurement(rec.savannas),
            measurement(rec.shrublands_grasslands),
            measurement(rec.croplands),
            measurement(rec.other),
        ]);

        FireRecord {
            country: rec.country,
            year: rec.year,
            burned,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FireDataset {
    pub records: Vec<FireRecord>,
    pub columns: Vec<String>,
}

impl FireDataset {
    pub fn try_new_from_csv<R: io::Read>(rdr: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let columns = rdr
            .headers()?
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();
        let required = [COLUMN_COUNTRY, COLUMN_YEAR]
            .into_iter()
            .chain(LandCover::all().map(|v| v.column()));
        for col in required {
            if !columns.iter().any(|v| v == col) {
                return Err(QueryError::MissingColumn(col.to_string()));
            }
        }

        let mut records = Vec::with_capacity(1000);
        for res in rdr.deserialize() {
            let rec: CSVFireRecord = res?;
            records.push(FireRecord::from(rec));
        }
        debug!("parsed {} rows, {} columns", records.len(), columns.len());

        Ok(Self { records, columns })
    }

    pub fn try_new_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => QueryError::FileNotFound(path.display().to_string()),
            _ => QueryError::StdIO(err),
        })?;

        let size = file.metadata()?.len();
        info!("loading {:?} ({})", path, ByteSize::b(size));

        Self::try_new_from_csv(io::BufReader::new(file))
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.columns.len())
    }

    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|v| v.year).min()?;
        let max = self.records.iter().map(|v| v.year).max()?;

        Some((min, max))
    }

    pub fn country_count(&self) -> usize {
        self.records
            .iter()
            .map(|v| v.country.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
