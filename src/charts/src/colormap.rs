use plotters::style::RGBColor;

const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

const PLASMA: [(u8, u8, u8); 5] = [
    (13, 8, 135),
    (126, 3, 168),
    (204, 71, 120),
    (248, 149, 64),
    (240, 249, 33),
];

const YL_OR_RD: [(u8, u8, u8); 5] = [
    (255, 255, 204),
    (254, 217, 118),
    (253, 141, 60),
    (227, 26, 28),
    (128, 0, 38),
];

/// Sequential color maps, sampled by linear interpolation between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    Viridis,
    Plasma,
    YlOrRd,
}

impl ColorMap {
    fn stops(self) -> &'static [(u8, u8, u8)] {
        match self {
            ColorMap::Viridis => &VIRIDIS,
            ColorMap::Plasma => &PLASMA,
            ColorMap::YlOrRd => &YL_OR_RD,
        }
    }

    /// Color at `t`, clamped to `[0, 1]`.
    pub fn eval(self, t: f64) -> RGBColor {
        let stops = self.stops();
        let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };

        let pos = t * (stops.len() - 1) as f64;
        let idx = (pos.floor() as usize).min(stops.len() - 2);
        let frac = pos - idx as f64;

        let (r0, g0, b0) = stops[idx];
        let (r1, g1, b1) = stops[idx + 1];
        RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
    }

    pub fn eval_in(self, value: f64, min: f64, max: f64) -> RGBColor {
        self.eval(normalize(value, min, max))
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Position of `value` in `[min, max]`; a degenerate range maps to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        ((value - min) / (max - min)).clamp(0., 1.)
    } else {
        0.
    }
}

/// Whether text drawn on top of `color` should be white.
pub fn is_dark(color: &RGBColor) -> bool {
    let RGBColor(r, g, b) = *color;
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b) < 128.
}
