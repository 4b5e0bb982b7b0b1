use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;
use tracing::info;

use crate::colorbar::draw_colorbar;
use crate::colormap::is_dark;
use crate::colormap::ColorMap;
use crate::error::ChartError;
use crate::error::Result;
use crate::layout::slot;
use crate::layout::slot_centers;
use crate::layout::slot_from_top;
use crate::layout::top_slot_start;
use crate::FONT;

/// Values laid out as `rows × columns`, row 0 drawn at the top.
#[derive(Debug, Clone)]
pub struct Heatmap {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
    pub cmap: ColorMap,
    pub colorbar_label: String,
    pub size: (u32, u32),
}

impl Heatmap {
    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() || self.column_labels.is_empty() {
            return Err(ChartError::InvalidInput(format!("{}: no cells", self.title)));
        }
        if self.values.len() != self.row_labels.len() {
            return Err(ChartError::InvalidInput(format!(
                "{}: {} row labels for {} rows",
                self.title,
                self.row_labels.len(),
                self.values.len()
            )));
        }
        if let Some(row) = self.values.iter().find(|v| v.len() != self.column_labels.len()) {
            return Err(ChartError::InvalidInput(format!(
                "{}: row with {} cells, expected {}",
                self.title,
                row.len(),
                self.column_labels.len()
            )));
        }

        Ok(())
    }

    /// `(min, max)` over all cells.
    pub fn value_range(&self) -> (f64, f64) {
        self.values
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            })
    }

    pub fn render(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;
        let (main, legend) = root.split_horizontally(self.size.0.saturating_sub(180));

        let rows = self.values.len();
        let cols = self.column_labels.len();
        let (min, max) = self.value_range();

        let mut chart = ChartBuilder::on(&main)
            .caption(&self.title, (FONT, 24).into_font())
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(180)
            .build_cartesian_2d(
                (0f64..cols as f64).with_key_points(slot_centers(cols)),
                (0f64..rows as f64).with_key_points(slot_centers(rows)),
            )?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(cols)
            .y_labels(rows)
            .x_label_formatter(&|v| {
                slot(*v, cols)
                    .and_then(|c| self.column_labels.get(c))
                    .cloned()
                    .unwrap_or_default()
            })
            .y_label_formatter(&|v| {
                slot_from_top(*v, rows)
                    .and_then(|r| self.row_labels.get(r))
                    .cloned()
                    .unwrap_or_default()
            })
            .label_style((FONT, 12).into_font())
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .axis_desc_style((FONT, 16).into_font())
            .draw()?;

        // (left, bottom, value) of every cell, row 0 on top
        let cells = self
            .values
            .iter()
            .enumerate()
            .flat_map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(move |(col, v)| (col as f64, top_slot_start(row, rows), *v))
            })
            .collect::<Vec<_>>();

        chart.draw_series(cells.iter().map(|(x, y, v)| {
            Rectangle::new(
                [(*x, *y), (*x + 1., *y + 1.)],
                self.cmap.eval_in(*v, min, max).filled(),
            )
        }))?;

        chart.draw_series(cells.iter().map(|(x, y, v)| {
            let color: &'static RGBColor = if is_dark(&self.cmap.eval_in(*v, min, max)) {
                &WHITE
            } else {
                &BLACK
            };
            let style = TextStyle::from((FONT, 11).into_font())
                .color(color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            Text::new(format!("{v:.0}"), (*x + 0.5, *y + 0.5), style)
        }))?;

        draw_colorbar(&legend, self.cmap, min, max, &self.colorbar_label)?;

        root.present()?;
        info!("saved {:?}", path);

        Ok(())
    }
}
