use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;
use tracing::info;

use crate::error::ChartError;
use crate::error::Result;
use crate::layout::axis_max;
use crate::layout::format_tick;
use crate::layout::slot_centers;
use crate::layout::slot_from_top;
use crate::layout::top_slot_start;
use crate::FONT;

pub const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

const LABEL_AREA: u32 = 220;
const BAR_GAP: f64 = 0.15;

/// Horizontal bars, one per label and the first one on top, each annotated
/// with its value.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub size: (u32, u32),
    pub color: RGBColor,
}

impl BarChart {
    pub fn new(title: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        BarChart {
            title: title.into(),
            x_desc: String::new(),
            y_desc: String::new(),
            labels,
            values,
            size: (1500, 900),
            color: BAR_COLOR,
        }
    }

    pub fn with_axes(mut self, x_desc: impl Into<String>, y_desc: impl Into<String>) -> Self {
        self.x_desc = x_desc.into();
        self.y_desc = y_desc.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(ChartError::InvalidInput(format!("{}: no bars", self.title)));
        }
        if self.labels.len() != self.values.len() {
            return Err(ChartError::InvalidInput(format!(
                "{}: {} labels for {} values",
                self.title,
                self.labels.len(),
                self.values.len()
            )));
        }

        Ok(())
    }

    pub fn render(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let n = self.values.len();
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, (FONT, 26).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(LABEL_AREA)
            .build_cartesian_2d(
                0f64..axis_max(self.values.iter().copied()),
                (0f64..n as f64).with_key_points(slot_centers(n)),
            )?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(n)
            .y_label_formatter(&|v| {
                slot_from_top(*v, n)
                    .and_then(|i| self.labels.get(i))
                    .cloned()
                    .unwrap_or_default()
            })
            .x_label_formatter(&|v| format_tick(*v))
            .label_style((FONT, 12).into_font())
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .axis_desc_style((FONT, 16).into_font())
            .draw()?;

        chart.draw_series(self.values.iter().enumerate().map(|(i, v)| {
            let from = top_slot_start(i, n);
            Rectangle::new(
                [(0., from + BAR_GAP), (*v, from + 1. - BAR_GAP)],
                self.color.filled(),
            )
        }))?;

        let value_style =
            TextStyle::from((FONT, 11).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
        chart.draw_series(self.values.iter().enumerate().map(|(i, v)| {
            Text::new(
                format!(" {v:.0}"),
                (*v, top_slot_start(i, n) + 0.5),
                value_style.clone(),
            )
        }))?;

        root.present()?;
        info!("saved {:?}", path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BarChart;

    #[test]
    fn test_validate() {
        let chart = BarChart::new("t", vec!["a".to_string()], vec![1., 2.]);
        assert!(chart.validate().is_err());

        let chart = BarChart::new("t", vec![], vec![]);
        assert!(chart.validate().is_err());

        let chart = BarChart::new("t", vec!["a".to_string()], vec![1.]).with_axes("x", "y");
        assert!(chart.validate().is_ok());
        assert_eq!(chart.x_desc, "x");
    }
}
