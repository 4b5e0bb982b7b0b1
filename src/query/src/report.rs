use std::fmt;

use crate::dataset::FireDataset;
use crate::summary::land_cover_shares;
use crate::summary::top_n;
use crate::summary::total_burned_area;
use crate::summary::CountryTotals;
use crate::summary::LandCoverTotals;

const BANNER_WIDTH: usize = 50;

/// Rounds to a whole number, halves to even, and groups digits by thousands.
/// `1234567.6` is rendered as `1,234,568`.
pub fn format_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0. && digits != "0" {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

pub fn format_year_range(range: Option<(i32, i32)>) -> String {
    match range {
        Some((from, to)) => format!("{from} - {to}"),
        None => "n/a".to_string(),
    }
}

/// Lines printed right after the dataset is loaded.
pub fn dataset_overview(ds: &FireDataset) -> String {
    let (rows, cols) = ds.shape();
    format!(
        "Dataset loaded successfully!\nShape: ({rows}, {cols})\nYears covered: {}\nCountries: {}",
        format_year_range(ds.year_range()),
        ds.country_count()
    )
}

/// Closing summary of the fire analysis.
pub struct Report<'a> {
    pub country_count: usize,
    pub year_range: Option<(i32, i32)>,
    pub countries: &'a [CountryTotals],
    pub land_cover: &'a LandCoverTotals,
    pub top_countries: usize,
    pub files: &'a [String],
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(f, "{banner}")?;
        writeln!(f, "FIRE DATA ANALYSIS SUMMARY")?;
        writeln!(f, "{banner}")?;
        writeln!(f, "Total countries analyzed: {}", self.country_count)?;
        writeln!(f, "Years covered: {}", format_year_range(self.year_range))?;
        writeln!(
            f,
            "Total global burned area: {} km²",
            format_thousands(total_burned_area(self.countries))
        )?;

        writeln!(f)?;
        writeln!(
            f,
            "Top {} Countries by Total Burned Area:",
            self.top_countries
        )?;
        for (i, row) in top_n(self.countries, self.top_countries).iter().enumerate() {
            writeln!(
                f,
                "{:2}. {}: {} km²",
                i + 1,
                row.country,
                format_thousands(row.total_burned_area)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Burned Area by Land Cover Type:")?;
        for share in land_cover_shares(self.land_cover) {
            writeln!(
                f,
                "  {}: {} km² ({:.1}%)",
                share.cover,
                format_thousands(share.area),
                share.percentage
            )?;
        }

        if !self.files.is_empty() {
            writeln!(f)?;
            writeln!(f, "All visualizations have been saved as PNG files!")?;
            writeln!(f, "Files created:")?;
            for file in self.files {
                writeln!(f, "- {file}")?;
            }
        }

        Ok(())
    }
}
