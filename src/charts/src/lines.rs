use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::error::ChartError;
use crate::error::Result;
use crate::layout::axis_max;
use crate::layout::format_tick;
use crate::FONT;

pub const PALETTE: [RGBColor; 6] = [
    RGBColor(44, 160, 44),
    RGBColor(255, 127, 14),
    RGBColor(140, 86, 75),
    RGBColor(188, 189, 34),
    RGBColor(127, 127, 127),
    RGBColor(214, 39, 40),
];

#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub points: Vec<(i32, f64)>,
    pub color: RGBColor,
}

/// One line per series over an integer x axis, with a legend.
#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub series: Vec<Series>,
    pub size: (u32, u32),
}

impl LineChart {
    pub fn x_range(&self) -> Option<(i32, i32)> {
        let xs = self.series.iter().flat_map(|s| s.points.iter().map(|(x, _)| *x));
        let (min, max) = xs.fold((i32::MAX, i32::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));

        (min <= max).then_some((min, max))
    }

    pub fn render(&self, path: &Path) -> Result<()> {
        let (from, to) = self
            .x_range()
            .ok_or_else(|| ChartError::InvalidInput(format!("{}: no points", self.title)))?;
        let y_max = axis_max(self.series.iter().flat_map(|s| s.points.iter().map(|(_, y)| *y)));

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, (FONT, 24).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(from..(to + 1), 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_label_formatter(&|v| v.to_string())
            .y_label_formatter(&|v| format_tick(*v))
            .label_style((FONT, 12).into_font())
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .axis_desc_style((FONT, 16).into_font())
            .draw()?;

        for s in &self.series {
            let color = s.color;
            chart
                .draw_series(LineSeries::new(s.points.iter().copied(), color.stroke_width(2)))?
                .label(s.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font((FONT, 12).into_font())
            .draw()?;

        root.present()?;
        info!("saved {:?}", path);

        Ok(())
    }
}
