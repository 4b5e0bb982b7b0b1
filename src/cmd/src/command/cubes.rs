use std::fs;
use std::io::Write;

use charts::fonts;
use charts::scatter::cubes_chart;
use charts::ColorMap;
use charts::CUBES_LARGE_FILE;
use charts::CUBES_SMALL_FILE;
use common::config::Config;

use crate::error::Result;

const SMALL_COUNT: u32 = 5;
const LARGE_COUNT: u32 = 5000;

pub fn run<W: Write>(cfg: &Config, out: &mut W) -> Result<()> {
    fonts::register(&cfg.charts.font_path)?;
    fs::create_dir_all(&cfg.output.dir)?;

    let charts = [
        (
            cubes_chart(SMALL_COUNT, ColorMap::Viridis, 7, (900, 600)),
            CUBES_SMALL_FILE,
        ),
        (
            cubes_chart(LARGE_COUNT, ColorMap::Plasma, 1, (1500, 900)),
            CUBES_LARGE_FILE,
        ),
    ];

    for (chart, file) in charts {
        let path = cfg.output_path(file);
        chart.render(&path)?;
        writeln!(out, "{}: {}", chart.title, path.display())?;
    }

    Ok(())
}
