use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use charts::bars::BarChart;
use charts::bubbles::BubbleGrid;
use charts::fonts;
use charts::heatmap::Heatmap;
use charts::lines::Series;
use charts::lines::LineChart;
use charts::lines::PALETTE;
use charts::ColorMap;
use charts::HEATMAP_FILE;
use charts::LAND_COVER_FILE;
use charts::TOP_COUNTRIES_FILE;
use charts::WORLD_MAP_FILE;
use charts::YEARLY_TRENDS_FILE;
use clap::Parser;
use common::config::Config;
use common::LandCover;
use query::error::QueryError;
use query::report::dataset_overview;
use query::report::format_year_range;
use query::report::Report;
use query::summary::country_summary;
use query::summary::land_cover_shares;
use query::summary::land_cover_totals;
use query::summary::top_n;
use query::summary::yearly_summary;
use query::tables::country_summary_batch;
use query::tables::pretty_table;
use query::tables::yearly_summary_batch;
use query::CountryTotals;
use query::FireDataset;
use query::LandCoverTotals;
use query::YearTotals;
use tracing::error;
use tracing::info;

use crate::error::Error;
use crate::error::Result;

const AREA_LABEL: &str = "Burned Area (km²)";
const TOTAL_AREA_LABEL: &str = "Total Burned Area (km²)";

#[derive(Parser, Clone, Debug, Default)]
pub struct Fires {
    /// Path to the burned area CSV, the configured one when omitted
    #[arg(long)]
    pub csv: Option<PathBuf>,
    /// Directory charts are written to
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,
    /// Print the country and yearly summaries as tables
    #[arg(long)]
    pub tables: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Runs the analysis and reports a failure on `out` instead of returning it.
/// Only errors writing to `out` itself are propagated.
pub fn run<W: Write>(args: &Fires, cfg: &Config, out: &mut W) -> Result<Outcome> {
    let csv_path = args.csv.clone().unwrap_or_else(|| cfg.data.csv_path.clone());

    match analyze(args, cfg, &csv_path, out) {
        Ok(()) => Ok(Outcome::Success),
        Err(Error::Query(QueryError::FileNotFound(path))) => {
            error!("file not found: {path}");
            writeln!(out, "Error: Could not find the file '{path}'")?;
            writeln!(
                out,
                "Please make sure the CSV file exists or pass its location with --csv."
            )?;
            Ok(Outcome::Failure)
        }
        Err(err) => {
            error!("fire analysis failed: {err}");
            writeln!(out, "An error occurred: {err}")?;
            Ok(Outcome::Failure)
        }
    }
}

fn analyze<W: Write>(args: &Fires, cfg: &Config, csv_path: &Path, out: &mut W) -> Result<()> {
    let start = Instant::now();

    writeln!(out, "Loading fire data...")?;
    let ds = FireDataset::try_new_from_path(csv_path)?;
    writeln!(out, "{}", dataset_overview(&ds))?;

    writeln!(out, "\nCreating country summary...")?;
    let countries = country_summary(&ds);
    writeln!(out, "Creating yearly trend analysis...")?;
    let years = yearly_summary(&ds);
    writeln!(out, "Creating land cover analysis...")?;
    let land_cover = land_cover_totals(&ds);

    if args.tables {
        writeln!(
            out,
            "\n{}",
            pretty_table(&[country_summary_batch(top_n(
                &countries,
                cfg.charts.report_countries
            ))?])?
        )?;
        writeln!(out, "{}", pretty_table(&[yearly_summary_batch(&years)?])?)?;
    }

    let files = if cfg.charts.enabled && !args.no_charts {
        let dir = args.out_dir.clone().unwrap_or_else(|| cfg.output.dir.clone());
        render_charts(&ds, &countries, &years, &land_cover, cfg, dir, out)?
    } else {
        info!("chart rendering disabled");
        vec![]
    };

    let report = Report {
        country_count: ds.country_count(),
        year_range: ds.year_range(),
        countries: &countries,
        land_cover: &land_cover,
        top_countries: cfg.charts.report_countries,
        files: &files,
    };
    write!(out, "\n{report}")?;

    info!(
        "fire analysis finished in {}",
        humantime::format_duration(start.elapsed())
    );

    Ok(())
}

fn period(ds: &FireDataset) -> String {
    match ds.year_range() {
        Some((from, to)) => format!("({from}-{to})"),
        None => format!("({})", format_year_range(None)),
    }
}

fn render_charts<W: Write>(
    ds: &FireDataset,
    countries: &[CountryTotals],
    years: &[YearTotals],
    land_cover: &LandCoverTotals,
    cfg: &Config,
    dir: PathBuf,
    out: &mut W,
) -> Result<Vec<String>> {
    fonts::register(&cfg.charts.font_path)?;
    fs::create_dir_all(&dir)?;

    writeln!(out, "\nGenerating visualizations...")?;

    writeln!(out, "1. Top countries by burned area...")?;
    top_countries_chart(countries, cfg.charts.top_countries, &period(ds))
        .render(&dir.join(TOP_COUNTRIES_FILE))?;

    writeln!(out, "2. Regional heatmap...")?;
    regional_heatmap(countries, cfg.charts.heatmap_countries).render(&dir.join(HEATMAP_FILE))?;

    writeln!(out, "3. World fire map simulation...")?;
    world_fire_map(
        countries,
        cfg.charts.map_countries,
        cfg.charts.map_columns,
        &period(ds),
    )
    .render(&dir.join(WORLD_MAP_FILE))?;

    writeln!(out, "4. Land cover distribution...")?;
    land_cover_chart(land_cover).render(&dir.join(LAND_COVER_FILE))?;

    writeln!(out, "5. Yearly fire trends...")?;
    yearly_trends_chart(years).render(&dir.join(YEARLY_TRENDS_FILE))?;

    Ok([
        TOP_COUNTRIES_FILE,
        LAND_COVER_FILE,
        YEARLY_TRENDS_FILE,
        HEATMAP_FILE,
        WORLD_MAP_FILE,
    ]
    .iter()
    .map(|v| v.to_string())
    .collect())
}

pub fn top_countries_chart(countries: &[CountryTotals], n: usize, period: &str) -> BarChart {
    let top = top_n(countries, n);

    BarChart::new(
        format!("Top {n} Countries by Total Burned Area {period}"),
        top.iter().map(|v| v.country.clone()).collect(),
        top.iter().map(|v| v.total_burned_area).collect(),
    )
    .with_axes(TOTAL_AREA_LABEL, "Country")
}

/// Top `n` countries by land cover, one row per country.
pub fn regional_heatmap(countries: &[CountryTotals], n: usize) -> Heatmap {
    let top = top_n(countries, n);

    Heatmap {
        title: format!("Fire Activity Heatmap: Top {n} Countries by Land Cover Type"),
        x_desc: "Land Cover Type".to_string(),
        y_desc: "Country".to_string(),
        row_labels: top.iter().map(|v| v.country.clone()).collect(),
        column_labels: LandCover::all().map(|v| v.to_string()).collect(),
        values: top.iter().map(|v| v.burned.values().to_vec()).collect(),
        cmap: ColorMap::YlOrRd,
        colorbar_label: AREA_LABEL.to_string(),
        size: (1200, 1600),
    }
}

pub fn world_fire_map(
    countries: &[CountryTotals],
    n: usize,
    columns: usize,
    period: &str,
) -> BubbleGrid {
    BubbleGrid {
        title: format!("Global Fire Activity: Country-Level Overview {period}"),
        x_desc: "Grid Position (West ← → East)".to_string(),
        y_desc: "Grid Position (South ← → North)".to_string(),
        items: top_n(countries, n)
            .iter()
            .map(|v| (v.country.clone(), v.total_burned_area))
            .collect(),
        columns,
        cmap: ColorMap::YlOrRd,
        colorbar_label: TOTAL_AREA_LABEL.to_string(),
        size: (1600, 1000),
    }
}

pub fn land_cover_chart(totals: &LandCoverTotals) -> BarChart {
    let shares = land_cover_shares(totals);

    let mut chart = BarChart::new(
        "Burned Area by Land Cover Type",
        shares.iter().map(|v| v.cover.to_string()).collect(),
        shares.iter().map(|v| v.area).collect(),
    )
    .with_axes(AREA_LABEL, "Land Cover Type");
    chart.size = (1000, 700);

    chart
}

pub fn yearly_trends_chart(years: &[YearTotals]) -> LineChart {
    let mut series = LandCover::all()
        .zip(PALETTE.iter())
        .map(|(cover, color)| Series {
            name: cover.to_string(),
            points: years.iter().map(|v| (v.year, v.burned.get(cover))).collect(),
            color: *color,
        })
        .collect::<Vec<_>>();
    series.push(Series {
        name: "total".to_string(),
        points: years.iter().map(|v| (v.year, v.total_burned_area)).collect(),
        color: PALETTE[PALETTE.len() - 1],
    });

    LineChart {
        title: "Yearly Fire Trends by Land Cover Type".to_string(),
        x_desc: "Year".to_string(),
        y_desc: AREA_LABEL.to_string(),
        series,
        size: (1400, 800),
    }
}
