//! Interpolation methods for querying sampled data
//!
//! Positions are fractional 0-based sample indices, as produced by
//! [`SampledGrid::x_to_index`](crate::SampledGrid::x_to_index).

use std::f64::consts::PI;

/// Interpolation methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest neighbor (no interpolation)
    Nearest,
    /// Linear interpolation between adjacent samples
    #[default]
    Linear,
    /// Cubic interpolation using 4 neighboring samples
    Cubic,
    /// Windowed sinc interpolation, depth 70
    Sinc70,
    /// Windowed sinc interpolation, depth 700
    Sinc700,
}

/// Which kind of extremum to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Minimum,
    Maximum,
}

impl Interpolation {
    /// Interpolate a value from a uniformly-sampled array
    ///
    /// # Arguments
    /// * `samples` - The array of samples
    /// * `position` - The fractional position in the array (0.0 = first sample)
    ///
    /// # Returns
    /// The interpolated value, or None if the position is outside `[0, n - 1]`
    pub fn interpolate(self, samples: &[f64], position: f64) -> Option<f64> {
        let n = samples.len();
        if n == 0 || !(0.0..=(n - 1) as f64).contains(&position) {
            return None;
        }
        Some(self.evaluate(samples, position))
    }

    /// Interpolate a value, skipping undefined (NaN) values
    ///
    /// Analysis contours mark missing frames with NaN (e.g. unvoiced pitch
    /// frames); those must not leak into neighbouring estimates.
    pub fn interpolate_with_undefined(self, samples: &[f64], position: f64) -> Option<f64> {
        let n = samples.len();
        if n == 0 || !(0.0..=(n - 1) as f64).contains(&position) {
            return None;
        }

        match self {
            Interpolation::Nearest => {
                let val = samples[nearest_index(n, position)];
                (!val.is_nan()).then_some(val)
            }
            Interpolation::Linear => linear_interpolate_with_undefined(samples, position),
            Interpolation::Cubic => cubic_interpolate_with_undefined(samples, position),
            // Windowed sinc over gaps is meaningless; use the linear estimate
            Interpolation::Sinc70 | Interpolation::Sinc700 => {
                linear_interpolate_with_undefined(samples, position)
            }
        }
    }

    /// Evaluate at a position already known to lie in `[0, n - 1]`
    fn evaluate(self, samples: &[f64], position: f64) -> f64 {
        match self {
            Interpolation::Nearest => samples[nearest_index(samples.len(), position)],
            Interpolation::Linear => linear_interpolate(samples, position),
            Interpolation::Cubic => cubic_interpolate(samples, position),
            Interpolation::Sinc70 => sinc_interpolate(samples, position, 70),
            Interpolation::Sinc700 => sinc_interpolate(samples, position, 700),
        }
    }

    /// Refine a local extremum found at sample `index`
    ///
    /// Returns the fractional position and value of the refined extremum.
    /// End samples and `Nearest` are returned unchanged. `Linear` fits a
    /// parabola through the three samples around `index`; the smoother
    /// methods search the interpolated curve on `[index - 1, index + 1]`.
    ///
    /// # Panics
    /// If `index` is out of range for `samples`.
    pub fn improve_extremum(self, samples: &[f64], index: usize, kind: ExtremumKind) -> (f64, f64) {
        let n = samples.len();
        let y = samples[index];
        if index == 0 || index + 1 >= n {
            return (index as f64, y);
        }

        match self {
            Interpolation::Nearest => (index as f64, y),
            Interpolation::Linear => {
                let (offset, value) = parabolic_peak(samples[index - 1], y, samples[index + 1]);
                (index as f64 + offset, value)
            }
            Interpolation::Cubic | Interpolation::Sinc70 | Interpolation::Sinc700 => {
                let sign = match kind {
                    ExtremumKind::Maximum => 1.0,
                    ExtremumKind::Minimum => -1.0,
                };
                let (position, value) = golden_section_maximum(
                    |p| sign * self.evaluate(samples, p),
                    (index - 1) as f64,
                    (index + 1) as f64,
                );
                if value > sign * y {
                    (position, sign * value)
                } else {
                    (index as f64, y)
                }
            }
        }
    }
}

/// Linear interpolation between two values
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

fn nearest_index(n: usize, position: f64) -> usize {
    (position.round() as usize).min(n - 1)
}

/// Linear interpolation in an array
fn linear_interpolate(samples: &[f64], position: f64) -> f64 {
    let n = samples.len();
    let idx = position.floor() as usize;
    if idx + 1 >= n {
        return samples[n - 1];
    }
    lerp(samples[idx], samples[idx + 1], position - idx as f64)
}

/// Linear interpolation, skipping NaN values
fn linear_interpolate_with_undefined(samples: &[f64], position: f64) -> Option<f64> {
    let n = samples.len();
    let idx = (position.floor() as usize).min(n - 1);
    let frac = position - idx as f64;

    let v0 = samples[idx];
    let v1 = if idx + 1 < n { samples[idx + 1] } else { v0 };

    match (v0.is_nan(), v1.is_nan()) {
        (true, true) => None,
        (true, false) => Some(v1),
        (false, true) => Some(v0),
        (false, false) => Some(lerp(v0, v1, frac)),
    }
}

/// Catmull-Rom segment through y1 (t = 0) and y2 (t = 1)
fn catmull_rom(y0: f64, y1: f64, y2: f64, y3: f64, t: f64) -> f64 {
    let a0 = -0.5 * y0 + 1.5 * y1 - 1.5 * y2 + 0.5 * y3;
    let a1 = y0 - 2.5 * y1 + 2.0 * y2 - 0.5 * y3;
    let a2 = -0.5 * y0 + 0.5 * y2;
    ((a0 * t + a1) * t + a2) * t + y1
}

/// Cubic interpolation
///
/// The first and last intervals lack a full four-point stencil and are
/// interpolated linearly, as the windowed sinc does at depth one.
fn cubic_interpolate(samples: &[f64], position: f64) -> f64 {
    let n = samples.len();
    let idx = position.floor() as usize;
    if idx == 0 || idx + 2 >= n {
        return linear_interpolate(samples, position);
    }

    catmull_rom(
        samples[idx - 1],
        samples[idx],
        samples[idx + 1],
        samples[idx + 2],
        position - idx as f64,
    )
}

/// Cubic interpolation with undefined value handling
fn cubic_interpolate_with_undefined(samples: &[f64], position: f64) -> Option<f64> {
    let n = samples.len() as isize;
    let idx = position.floor() as isize;

    let defined = |i: isize| -> Option<f64> {
        if i < 0 || i >= n {
            return None;
        }
        let val = samples[i as usize];
        (!val.is_nan()).then_some(val)
    };

    if let (Some(y0), Some(y1), Some(y2), Some(y3)) =
        (defined(idx - 1), defined(idx), defined(idx + 1), defined(idx + 2))
    {
        return Some(catmull_rom(y0, y1, y2, y3, position - idx as f64));
    }

    // Not enough defined neighbours for the cubic stencil
    linear_interpolate_with_undefined(samples, position)
}

/// Sinc interpolation with a raised-cosine window, as in Praat's
/// NUM_interpolate_sinc
///
/// The depth is clipped to the samples available on either side; with a
/// depth of one this degenerates to linear interpolation.
fn sinc_interpolate(samples: &[f64], position: f64, max_depth: usize) -> f64 {
    let n = samples.len();
    let midleft = position.floor() as usize;
    if position == midleft as f64 || midleft + 1 >= n {
        return samples[midleft.min(n - 1)];
    }
    let midright = midleft + 1;

    let depth = max_depth.min(midright).min(n - 1 - midleft);
    if depth <= 1 {
        return lerp(samples[midleft], samples[midright], position - midleft as f64);
    }

    let left = midright - depth;
    let right = midleft + depth;

    let window_depth = depth as f64 + 0.5;
    let window_phase_step = PI / window_depth;
    let (sin_step, cos_step) = window_phase_step.sin_cos();

    let mut result = 0.0;

    // Left half, walking outwards from midleft
    let mut phase = PI * (position - midleft as f64);
    let mut half_sin_phase = 0.5 * phase.sin();
    let (mut sin_window, mut cos_window) = (phase / window_depth).sin_cos();
    for ix in (left..=midleft).rev() {
        result += samples[ix] * half_sin_phase / phase * (1.0 + cos_window);
        phase += PI;
        half_sin_phase = -half_sin_phase;
        (sin_window, cos_window) = (
            cos_window * sin_step + sin_window * cos_step,
            cos_window * cos_step - sin_window * sin_step,
        );
    }

    // Right half, walking outwards from midright
    let mut phase = PI * (midright as f64 - position);
    let mut half_sin_phase = 0.5 * phase.sin();
    let (mut sin_window, mut cos_window) = (phase / window_depth).sin_cos();
    for ix in midright..=right {
        result += samples[ix] * half_sin_phase / phase * (1.0 + cos_window);
        phase += PI;
        half_sin_phase = -half_sin_phase;
        (sin_window, cos_window) = (
            cos_window * sin_step + sin_window * cos_step,
            cos_window * cos_step - sin_window * sin_step,
        );
    }

    result
}

/// Maximum of a unimodal function on `[a, b]`
fn golden_section_maximum<F: Fn(f64) -> f64>(f: F, mut a: f64, mut b: f64) -> (f64, f64) {
    const INV_PHI: f64 = 0.618_033_988_749_894_8;
    const TOLERANCE: f64 = 1e-10;

    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);

    while b - a > TOLERANCE {
        if fc > fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d);
        }
    }

    let x = 0.5 * (a + b);
    (x, f(x))
}

/// Parabolic interpolation to find the vertex of a discrete extremum
///
/// Given three consecutive samples where the middle one is a local maximum
/// or minimum, returns the fractional offset from the center sample and the
/// value at the vertex.
///
/// # Returns
/// (offset, peak_value) where offset is in the range [-0.5, 0.5]
pub fn parabolic_peak(y0: f64, y1: f64, y2: f64) -> (f64, f64) {
    // Parabola through (-1, y0), (0, y1), (1, y2)
    let denominator = 2.0 * (y0 + y2 - 2.0 * y1);

    if denominator == 0.0 {
        return (0.0, y1);
    }

    let offset = (y0 - y2) / denominator;
    let peak = y1 - (y0 - y2) * (y0 - y2) / (4.0 * denominator);

    (offset.clamp(-0.5, 0.5), peak)
}
