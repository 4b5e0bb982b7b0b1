use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;
use tracing::info;

use crate::colorbar::draw_colorbar;
use crate::colormap::ColorMap;
use crate::error::ChartError;
use crate::error::Result;
use crate::layout::grid_positions;
use crate::layout::grid_rows;
use crate::layout::marker_radius;
use crate::layout::marker_size;
use crate::layout::short_label;
use crate::FONT;

const LABEL_CHARS: usize = 3;

/// Labelled values placed on a grid in the given order, each drawn as a
/// circle whose size and color follow its value.
#[derive(Debug, Clone)]
pub struct BubbleGrid {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub items: Vec<(String, f64)>,
    pub columns: usize,
    pub cmap: ColorMap,
    pub colorbar_label: String,
    pub size: (u32, u32),
}

impl BubbleGrid {
    pub fn render(&self, path: &Path) -> Result<()> {
        if self.items.is_empty() || self.columns == 0 {
            return Err(ChartError::InvalidInput(format!(
                "{}: {} items in {} columns",
                self.title,
                self.items.len(),
                self.columns
            )));
        }

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;
        let (main, legend) = root.split_horizontally(self.size.0.saturating_sub(180));

        let rows = grid_rows(self.items.len(), self.columns) as f64;
        let positions = grid_positions(self.items.len(), self.columns);
        let (min, max) = self
            .items
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
                (lo.min(*v), hi.max(*v))
            });

        let mut chart = ChartBuilder::on(&main)
            .caption(&self.title, (FONT, 22).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d(
                -0.5f64..(self.columns as f64 - 0.5),
                0.5f64..(rows + 0.5),
            )?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_label_formatter(&|_| String::new())
            .y_label_formatter(&|_| String::new())
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .axis_desc_style((FONT, 14).into_font())
            .draw()?;

        let (width, height) = chart.plotting_area().dim_in_pixel();
        let cell = (width as f64 / self.columns as f64).min(height as f64 / rows);
        let markers = positions
            .iter()
            .zip(self.items.iter())
            .map(|(pos, (_, v))| (*pos, marker_radius(marker_size(*v), cell), *v))
            .collect::<Vec<_>>();

        chart.draw_series(markers.iter().map(|(pos, radius, v)| {
            Circle::new(*pos, *radius, self.cmap.eval_in(*v, min, max).mix(0.7).filled())
        }))?;
        chart.draw_series(
            markers
                .iter()
                .map(|(pos, radius, _)| Circle::new(*pos, *radius, BLACK.stroke_width(1))),
        )?;

        let label_style =
            TextStyle::from((FONT, 11).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(positions.iter().zip(self.items.iter()).map(|(pos, (label, _))| {
            Text::new(short_label(label, LABEL_CHARS), *pos, label_style.clone())
        }))?;

        draw_colorbar(&legend, self.cmap, min, max, &self.colorbar_label)?;

        root.present()?;
        info!("saved {:?}", path);

        Ok(())
    }
}
