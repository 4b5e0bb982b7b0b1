use plotters::coord::Shift;
use plotters::prelude::*;

use crate::colormap::normalize;
use crate::colormap::ColorMap;
use crate::error::Result;
use crate::layout::format_tick;
use crate::FONT;

const STEPS: usize = 100;

/// Vertical gradient legend for a color mapped chart.
pub(crate) fn draw_colorbar(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    cmap: ColorMap,
    min: f64,
    max: f64,
    label: &str,
) -> Result<()> {
    let (lo, hi) = if max > min { (min, max) } else { (min, min + 1.) };

    let mut chart = ChartBuilder::on(area)
        .margin_top(60)
        .margin_bottom(60)
        .margin_right(20)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..1f64, lo..hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc(label)
        .y_label_formatter(&|v| format_tick(*v))
        .label_style((FONT, 12).into_font())
        .axis_desc_style((FONT, 14).into_font())
        .draw()?;

    let step = (hi - lo) / STEPS as f64;
    chart.draw_series((0..STEPS).map(|i| {
        let from = lo + step * i as f64;
        let color = cmap.eval(normalize(from + step / 2., lo, hi));
        Rectangle::new([(0., from), (1., from + step)], color.filled())
    }))?;

    Ok(())
}
