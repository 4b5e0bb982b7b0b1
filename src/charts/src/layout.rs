/// Grid cell of the `i`-th item when `n` items are laid out row by row in
/// `cols` columns. The first item sits top-left: `x` is the column and `y`
/// counts rows upwards, so the top row has `y == rows`.
pub fn grid_positions(n: usize, cols: usize) -> Vec<(f64, f64)> {
    if cols == 0 {
        return vec![];
    }

    let rows = grid_rows(n, cols);
    (0..n)
        .map(|i| ((i % cols) as f64, (rows - i / cols) as f64))
        .collect()
}

pub fn grid_rows(n: usize, cols: usize) -> usize {
    if cols == 0 {
        0
    } else {
        n.div_ceil(cols)
    }
}

pub const MIN_MARKER_SIZE: f64 = 50.;
pub const MAX_MARKER_SIZE: f64 = 1000.;

/// Marker area for a burned area total, one unit per thousand km² kept
/// within `[MIN_MARKER_SIZE, MAX_MARKER_SIZE]`.
pub fn marker_size(total: f64) -> f64 {
    (total / 1000.).clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE)
}

/// Pixel radius for a marker area on a grid with `cell` pixel wide cells.
/// Area grows linearly with `size` and the largest marker almost fills its
/// cell.
pub fn marker_radius(size: f64, cell: f64) -> u32 {
    let scale = (size / MAX_MARKER_SIZE).clamp(0., 1.).sqrt();
    (cell * 0.45 * scale).round().max(1.) as u32
}

/// Centers of `n` unit slots on an axis running over `0..n`.
pub fn slot_centers(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 + 0.5).collect()
}

/// Slot holding `v` on a `0..n` axis.
pub fn slot(v: f64, n: usize) -> Option<usize> {
    (v >= 0. && v < n as f64).then(|| v.floor() as usize)
}

/// Like [slot], counting from the far end so slot 0 is drawn at the top.
pub fn slot_from_top(v: f64, n: usize) -> Option<usize> {
    slot(v, n).map(|i| n - 1 - i)
}

/// Lower edge of the `i`-th slot counted from the top of a `0..n` axis.
pub fn top_slot_start(i: usize, n: usize) -> f64 {
    (n - 1 - i) as f64
}

/// `(x, x³)` for `x` in `1..=n`.
pub fn cubes(n: u32) -> Vec<(f64, f64)> {
    (1..=n)
        .map(|x| {
            let x = x as f64;
            (x, x * x * x)
        })
        .collect()
}

/// Leading `n` characters, not bytes.
pub fn short_label(label: &str, n: usize) -> String {
    label.chars().take(n).collect()
}

/// Axis tick text, switching to scientific notation for large magnitudes.
pub fn format_tick(value: f64) -> String {
    if value.abs() >= 1e6 {
        format!("{value:.1e}")
    } else {
        format!("{value:.0}")
    }
}

/// Upper bound of a value axis with some headroom above the largest value.
pub fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0., f64::max);
    if max > 0. { max * 1.1 } else { 1. }
}
