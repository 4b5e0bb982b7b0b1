use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::ops::AddAssign;

use common::LandCover;
use common::LAND_COVER_COUNT;
use tracing::debug;

use crate::dataset::FireDataset;

/// Burned area per land cover, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandCoverTotals([f64; LAND_COVER_COUNT]);

impl LandCoverTotals {
    pub fn new(values: [f64; LAND_COVER_COUNT]) -> Self {
        LandCoverTotals(values)
    }

    pub fn get(&self, cover: LandCover) -> f64 {
        self.0[cover.index()]
    }

    pub fn values(&self) -> &[f64; LAND_COVER_COUNT] {
        &self.0
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl AddAssign<&LandCoverTotals> for LandCoverTotals {
    fn add_assign(&mut self, rhs: &LandCoverTotals) {
        for (l, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            *l += r;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryTotals {
    pub country: String,
    pub burned: LandCoverTotals,
    pub total_burned_area: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearTotals {
    pub year: i32,
    pub burned: LandCoverTotals,
    pub total_burned_area: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandCoverShare {
    pub cover: LandCover,
    pub area: f64,
    pub percentage: f64,
}

/// Per-country sums ordered by total burned area, largest first. Equal totals
/// are ordered by country name.
pub fn country_summary(ds: &FireDataset) -> Vec<CountryTotals> {
    let mut groups: HashMap<&str, LandCoverTotals> = HashMap::new();
    for rec in &ds.records {
        *groups.entry(rec.country.as_str()).or_default() += &rec.burned;
    }

    let mut summary = groups
        .into_iter()
        .map(|(country, burned)| CountryTotals {
            country: country.to_string(),
            total_burned_area: burned.total(),
            burned,
        })
        .collect::<Vec<_>>();

    summary.sort_by(|a, b| {
        match b.total_burned_area.total_cmp(&a.total_burned_area) {
            Ordering::Equal => a.country.cmp(&b.country),
            ord => ord,
        }
    });
    debug!("country summary: {} groups", summary.len());

    summary
}

/// Per-year sums in ascending year order.
pub fn yearly_summary(ds: &FireDataset) -> Vec<YearTotals> {
    let mut groups: BTreeMap<i32, LandCoverTotals> = BTreeMap::new();
    for rec in &ds.records {
        *groups.entry(rec.year).or_default() += &rec.burned;
    }

    groups
        .into_iter()
        .map(|(year, burned)| YearTotals {
            year,
            total_burned_area: burned.total(),
            burned,
        })
        .collect()
}

pub fn land_cover_totals(ds: &FireDataset) -> LandCoverTotals {
    let mut totals = LandCoverTotals::default();
    for rec in &ds.records {
        totals += &rec.burned;
    }

    totals
}

/// Covers ordered by area, largest first, with their share of the total in
/// percent.
pub fn land_cover_shares(totals: &LandCoverTotals) -> Vec<LandCoverShare> {
    let total = totals.total();
    let mut shares = LandCover::all()
        .map(|cover| {
            let area = totals.get(cover);
            let percentage = if total > 0. { area / total * 100. } else { 0. };
            LandCoverShare {
                cover,
                area,
                percentage,
            }
        })
        .collect::<Vec<_>>();

    shares.sort_by(|a, b| b.area.total_cmp(&a.area));

    shares
}

pub fn total_burned_area(summary: &[CountryTotals]) -> f64 {
    summary.iter().map(|v| v.total_burned_area).sum()
}

/// First `n` rows of an already ordered summary.
pub fn top_n<T>(rows: &[T], n: usize) -> &[T] {
    &rows[..n.min(rows.len())]
}
