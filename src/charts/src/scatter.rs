use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::colorbar::draw_colorbar;
use crate::colormap::ColorMap;
use crate::error::ChartError;
use crate::error::Result;
use crate::layout::axis_max;
use crate::layout::format_tick;
use crate::FONT;

/// Points colored by their y value.
#[derive(Debug, Clone)]
pub struct ScatterChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub points: Vec<(f64, f64)>,
    pub radius: u32,
    pub cmap: ColorMap,
    pub colorbar_label: String,
    pub size: (u32, u32),
}

impl ScatterChart {
    pub fn render(&self, path: &Path) -> Result<()> {
        if self.points.is_empty() {
            return Err(ChartError::InvalidInput(format!("{}: no points", self.title)));
        }

        let (x_min, x_max) = bounds(self.points.iter().map(|(x, _)| *x));
        let (y_min, y_max) = bounds(self.points.iter().map(|(_, y)| *y));
        let x_pad = ((x_max - x_min) * 0.05).max(0.5);

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;
        let (main, legend) = root.split_horizontally(self.size.0.saturating_sub(160));

        let mut chart = ChartBuilder::on(&main)
            .caption(&self.title, (FONT, 22).into_font())
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(
                (x_min - x_pad)..(x_max + x_pad),
                0f64..axis_max(std::iter::once(y_max)),
            )?;

        chart
            .configure_mesh()
            .x_label_formatter(&|v| format_tick(*v))
            .y_label_formatter(&|v| format_tick(*v))
            .label_style((FONT, 12).into_font())
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .axis_desc_style((FONT, 14).into_font())
            .draw()?;

        chart.draw_series(self.points.iter().map(|(x, y)| {
            Circle::new(
                (*x, *y),
                self.radius,
                self.cmap.eval_in(*y, y_min, y_max).filled(),
            )
        }))?;

        draw_colorbar(&legend, self.cmap, y_min, y_max, &self.colorbar_label)?;

        root.present()?;
        info!("saved {:?}", path);

        Ok(())
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Cubic numbers for `1..=n` as a color mapped scatter plot.
pub fn cubes_chart(n: u32, cmap: ColorMap, radius: u32, size: (u32, u32)) -> ScatterChart {
    ScatterChart {
        title: format!("First {n} Cubic Numbers"),
        x_desc: "Number".to_string(),
        y_desc: "Cube".to_string(),
        points: crate::layout::cubes(n),
        radius,
        cmap,
        colorbar_label: "Cubic Value".to_string(),
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::bounds;
    use super::cubes_chart;
    use crate::ColorMap;

    #[test]
    fn test_cubes_chart() {
        let chart = cubes_chart(5, ColorMap::Viridis, 7, (600, 400));

        assert_eq!(chart.title, "First 5 Cubic Numbers");
        assert_eq!(chart.points.len(), 5);
        assert_eq!(bounds(chart.points.iter().map(|(_, y)| *y)), (1., 125.));
    }
}
