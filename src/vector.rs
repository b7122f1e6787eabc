//! Vectors: channels of values on a sampled grid
//!
//! A [`Vector`] is what Praat calls a one-row-per-channel matrix over a
//! [`SampledGrid`]: a sound, or any contour with a regular time axis. The grid
//! is fixed at construction; the values may be modified in place.
//!
//! Window queries take an `[xmin, xmax]` range on the axis. A range with
//! `xmin >= xmax` selects the whole domain of the vector.

use tracing::{debug, trace};

use crate::interpolation::{lerp, ExtremumKind, Interpolation};
use crate::sampled::{Sampled, SampledGrid};
use crate::{PraatError, Result};

/// Which channel(s) a query reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelSelection {
    /// The mean of all channels
    #[default]
    Average,
    /// A single channel (0-based)
    Channel(usize),
}

/// Location and value of a minimum or maximum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// The extreme value
    pub value: f64,
    /// Axis position where it occurs
    pub x: f64,
    /// Channel it was found in (0-based)
    pub channel: usize,
}

/// One or more channels of samples on a common grid
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    grid: SampledGrid,
    /// One row per channel, each of length `grid.nx()`
    channels: Vec<Vec<f64>>,
}

impl Sampled for Vector {
    fn grid(&self) -> &SampledGrid {
        &self.grid
    }
}

impl Vector {
    /// Create a vector from a grid and one row of values per channel
    ///
    /// # Errors
    /// Fails if there are no channels or if any channel's length differs from
    /// the grid's sample count.
    pub fn new(grid: SampledGrid, channels: Vec<Vec<f64>>) -> Result<Self> {
        if channels.is_empty() {
            return Err(PraatError::InvalidParameter(
                "a vector needs at least one channel".to_string(),
            ));
        }
        if let Some(bad) = channels.iter().find(|c| c.len() != grid.nx()) {
            return Err(PraatError::LengthMismatch {
                expected: grid.nx(),
                actual: bad.len(),
            });
        }

        debug!(
            num_channels = channels.len(),
            nx = grid.nx(),
            "created vector"
        );
        Ok(Self { grid, channels })
    }

    /// Create a single-channel vector
    pub fn mono(grid: SampledGrid, samples: Vec<f64>) -> Result<Self> {
        Self::new(grid, vec![samples])
    }

    /// Create a single-channel vector with sound timing
    ///
    /// The first sample is centred at `start_time + 0.5 / sample_rate`.
    ///
    /// # Example
    /// ```
    /// use praatfan_sampled::{Sampled, Vector};
    ///
    /// let sound = Vector::from_samples(&[0.0, 0.5, 1.0, 0.5], 4.0, 0.0).unwrap();
    /// assert_eq!(sound.sample_positions().collect::<Vec<_>>(), vec![0.125, 0.375, 0.625, 0.875]);
    /// assert_eq!(sound.xmax(), 1.0);
    /// ```
    pub fn from_samples(samples: &[f64], sample_rate: f64, start_time: f64) -> Result<Self> {
        let grid = SampledGrid::from_sample_rate(sample_rate, start_time, samples.len())?;
        Self::mono(grid, samples.to_vec())
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Values of one channel
    pub fn channel(&self, channel: usize) -> Option<&[f64]> {
        self.channels.get(channel).map(Vec::as_slice)
    }

    /// Values of the first channel
    pub fn values(&self) -> &[f64] {
        &self.channels[0]
    }

    fn checked_channel(&self, channel: usize) -> Result<&[f64]> {
        self.channel(channel).ok_or(PraatError::ChannelOutOfRange {
            channel,
            count: self.channels.len(),
        })
    }

    /// `xmin >= xmax` (or an unordered pair) means "the whole domain"
    fn autowindow(&self, xmin: f64, xmax: f64) -> (f64, f64) {
        if xmin < xmax {
            (xmin, xmax)
        } else {
            (self.grid.xmin(), self.grid.xmax())
        }
    }

    /// Value of sample `index`
    ///
    /// Returns None if the index or the channel is out of range.
    pub fn value_at_sample(&self, index: usize, selection: ChannelSelection) -> Option<f64> {
        if index >= self.grid.nx() {
            return None;
        }
        match selection {
            ChannelSelection::Channel(k) => self.channel(k).map(|c| c[index]),
            ChannelSelection::Average => {
                let sum: f64 = self.channels.iter().map(|c| c[index]).sum();
                Some(sum / self.channels.len() as f64)
            }
        }
    }

    /// Interpolated value at axis position `x`
    ///
    /// Returns None outside `[xmin, xmax]`. Between the outer sample centres
    /// and the domain edges the end samples are held constant.
    pub fn value_at_x(
        &self,
        x: f64,
        selection: ChannelSelection,
        interpolation: Interpolation,
    ) -> Option<f64> {
        let nx = self.grid.nx();
        if nx == 0 || !(self.grid.xmin() <= x && x <= self.grid.xmax()) {
            return None;
        }

        let position = self.grid.x_to_index(x).clamp(0.0, (nx - 1) as f64);
        match selection {
            ChannelSelection::Channel(k) => interpolation.interpolate(self.channel(k)?, position),
            ChannelSelection::Average => {
                let mut sum = 0.0;
                for channel in &self.channels {
                    sum += interpolation.interpolate(channel, position)?;
                }
                Some(sum / self.channels.len() as f64)
            }
        }
    }

    fn extremum_in_channel(
        &self,
        xmin: f64,
        xmax: f64,
        channel: usize,
        interpolation: Interpolation,
        kind: ExtremumKind,
    ) -> Result<Extremum> {
        let samples = self.checked_channel(channel)?;
        let (xmin, xmax) = self.autowindow(xmin, xmax);
        let better = |a: f64, b: f64| match kind {
            ExtremumKind::Minimum => a < b,
            ExtremumKind::Maximum => a > b,
        };

        let window = self.grid.window_samples(xmin, xmax);
        if window.is_empty() {
            // No sample centre inside the window: compare its two edges
            let edge_interpolation = match interpolation {
                Interpolation::Nearest => Interpolation::Nearest,
                _ => Interpolation::Linear,
            };
            let selection = ChannelSelection::Channel(channel);
            let left = self.value_at_x(xmin, selection, edge_interpolation);
            let right = self.value_at_x(xmax, selection, edge_interpolation);
            trace!(xmin, xmax, ?left, ?right, "no samples in window, using edge values");

            let (value, x) = match (left, right) {
                (Some(l), Some(r)) if l == r => (l, 0.5 * (xmin + xmax)),
                (Some(l), Some(r)) => {
                    if better(l, r) {
                        (l, xmin)
                    } else {
                        (r, xmax)
                    }
                }
                (Some(l), None) => (l, xmin),
                (None, Some(r)) => (r, xmax),
                (None, None) => {
                    return Err(PraatError::UndefinedValue {
                        x: xmin,
                        reason: "window lies outside the domain".to_string(),
                    })
                }
            };
            return Ok(Extremum { value, x, channel });
        }

        let first = window.start;
        let last = window.end - 1;
        let (mut value, mut position) = (samples[first], first as f64);
        if better(samples[last], value) {
            value = samples[last];
            position = last as f64;
        }

        // Interior local extrema, refined between their neighbours
        let lo = first.max(1);
        let hi = last.min(samples.len().saturating_sub(2));
        for i in lo..=hi {
            let is_local = match kind {
                ExtremumKind::Minimum => {
                    samples[i] < samples[i - 1] && samples[i] <= samples[i + 1]
                }
                ExtremumKind::Maximum => {
                    samples[i] > samples[i - 1] && samples[i] >= samples[i + 1]
                }
            };
            if !is_local {
                continue;
            }
            let (refined_position, refined_value) =
                interpolation.improve_extremum(samples, i, kind);
            if better(refined_value, value) {
                value = refined_value;
                position = refined_position;
            }
        }

        let x = self.grid.index_to_x(position).max(xmin).min(xmax);
        Ok(Extremum { value, x, channel })
    }

    fn extremum(
        &self,
        xmin: f64,
        xmax: f64,
        interpolation: Interpolation,
        kind: ExtremumKind,
    ) -> Result<Extremum> {
        let mut best = self.extremum_in_channel(xmin, xmax, 0, interpolation, kind)?;
        for channel in 1..self.channels.len() {
            let candidate = self.extremum_in_channel(xmin, xmax, channel, interpolation, kind)?;
            let wins = match kind {
                ExtremumKind::Minimum => candidate.value < best.value,
                ExtremumKind::Maximum => candidate.value > best.value,
            };
            if wins {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// Minimum of one channel within `[xmin, xmax]`
    ///
    /// # Errors
    /// [`PraatError::ChannelOutOfRange`] for a bad channel,
    /// [`PraatError::UndefinedValue`] if the window misses the domain entirely.
    pub fn minimum_in_channel(
        &self,
        xmin: f64,
        xmax: f64,
        channel: usize,
        interpolation: Interpolation,
    ) -> Result<Extremum> {
        self.extremum_in_channel(xmin, xmax, channel, interpolation, ExtremumKind::Minimum)
    }

    /// Maximum of one channel within `[xmin, xmax]`
    pub fn maximum_in_channel(
        &self,
        xmin: f64,
        xmax: f64,
        channel: usize,
        interpolation: Interpolation,
    ) -> Result<Extremum> {
        self.extremum_in_channel(xmin, xmax, channel, interpolation, ExtremumKind::Maximum)
    }

    /// Minimum over all channels; ties go to the lowest channel
    pub fn minimum(&self, xmin: f64, xmax: f64, interpolation: Interpolation) -> Result<Extremum> {
        self.extremum(xmin, xmax, interpolation, ExtremumKind::Minimum)
    }

    /// Maximum over all channels; ties go to the lowest channel
    pub fn maximum(&self, xmin: f64, xmax: f64, interpolation: Interpolation) -> Result<Extremum> {
        self.extremum(xmin, xmax, interpolation, ExtremumKind::Maximum)
    }

    /// Largest absolute value within `[xmin, xmax]`
    pub fn absolute_extremum(
        &self,
        xmin: f64,
        xmax: f64,
        interpolation: Interpolation,
    ) -> Result<f64> {
        let minimum = self.minimum(xmin, xmax, interpolation)?;
        let maximum = self.maximum(xmin, xmax, interpolation)?;
        Ok(minimum.value.abs().max(maximum.value.abs()))
    }

    /// Mean value over `[xmin, xmax]`
    ///
    /// The samples are joined linearly (held constant beyond the outer
    /// centres) and the curve is averaged over the part of the window inside
    /// the domain, so partially covered bins count in proportion. Over the
    /// whole domain this equals the plain sample mean.
    ///
    /// Returns None if the window misses the domain or the channel does not
    /// exist.
    pub fn mean(&self, xmin: f64, xmax: f64, selection: ChannelSelection) -> Option<f64> {
        let (xmin, xmax) = self.autowindow(xmin, xmax);
        match selection {
            ChannelSelection::Channel(k) => self.channel_mean(self.channel(k)?, xmin, xmax),
            ChannelSelection::Average => {
                let mut sum = 0.0;
                for channel in &self.channels {
                    sum += self.channel_mean(channel, xmin, xmax)?;
                }
                Some(sum / self.channels.len() as f64)
            }
        }
    }

    /// Area under the linearly interpolated channel, divided by the width
    /// of the window clipped to the domain
    fn channel_mean(&self, samples: &[f64], xmin: f64, xmax: f64) -> Option<f64> {
        let xmin = xmin.max(self.grid.xmin());
        let xmax = xmax.min(self.grid.xmax());
        if samples.is_empty() || xmin >= xmax {
            return None;
        }

        let from = self.grid.x_to_index(xmin);
        let to = self.grid.x_to_index(xmax);

        // Trapezoids between consecutive knots, in sample-index units
        let mut area = 0.0;
        let (mut position, mut value) = (from, linear_at(samples, from));
        for i in self.grid.window_samples(xmin, xmax) {
            area += 0.5 * (i as f64 - position) * (value + samples[i]);
            (position, value) = (i as f64, samples[i]);
        }
        area += 0.5 * (to - position) * (value + linear_at(samples, to));

        Some(area / (to - from))
    }

    /// Sample standard deviation within `[xmin, xmax]`
    ///
    /// Deviations of the samples whose centres lie in the window are taken
    /// from [`mean`](Self::mean) over the same window. Returns None for
    /// fewer than two samples. For
    /// [`ChannelSelection::Average`] each channel is centred on its own mean
    /// and the pooled sum of squares has `n * ny - ny` degrees of freedom, so
    /// duplicating a channel does not change the result.
    pub fn standard_deviation(
        &self,
        xmin: f64,
        xmax: f64,
        selection: ChannelSelection,
    ) -> Option<f64> {
        let (xmin, xmax) = self.autowindow(xmin, xmax);
        let window = self.grid.window_samples(xmin, xmax);
        let n = window.len();
        if n < 2 {
            return None;
        }

        match selection {
            ChannelSelection::Channel(k) => {
                let samples = self.channel(k)?;
                let mean = self.channel_mean(samples, xmin, xmax)?;
                let sum2 = sum_of_squares_about(&samples[window], mean);
                Some((sum2 / (n - 1) as f64).sqrt())
            }
            ChannelSelection::Average => {
                let ny = self.channels.len();
                let mut sum2 = 0.0;
                for channel in &self.channels {
                    let mean = self.channel_mean(channel, xmin, xmax)?;
                    sum2 += sum_of_squares_about(&channel[window.clone()], mean);
                }
                Some((sum2 / (n * ny - ny) as f64).sqrt())
            }
        }
    }

    /// Add a constant to every sample of every channel
    pub fn add_scalar(&mut self, scalar: f64) {
        for channel in &mut self.channels {
            channel.iter_mut().for_each(|s| *s += scalar);
        }
    }

    /// Remove the mean of each channel from that channel
    pub fn subtract_mean(&mut self) {
        for channel in &mut self.channels {
            if channel.is_empty() {
                continue;
            }
            let mean = mean_of(channel);
            channel.iter_mut().for_each(|s| *s -= mean);
        }
    }

    /// Multiply every sample of every channel by a constant
    pub fn multiply_by_scalar(&mut self, scalar: f64) {
        for channel in &mut self.channels {
            channel.iter_mut().for_each(|s| *s *= scalar);
        }
    }

    /// Scale so that the largest absolute sample becomes `peak`
    ///
    /// An all-zero vector is left untouched.
    pub fn scale(&mut self, peak: f64) {
        let extremum = self
            .channels
            .iter()
            .flatten()
            .fold(0.0_f64, |acc, &s| acc.max(s.abs()));
        if extremum != 0.0 {
            self.multiply_by_scalar(peak / extremum);
        }
    }
}

fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sum_of_squares_about(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|&v| (v - mean) * (v - mean)).sum()
}

/// Linear interpolation at a fractional index, holding the end samples
fn linear_at(samples: &[f64], position: f64) -> f64 {
    let last = samples.len() - 1;
    let position = position.clamp(0.0, last as f64);
    let i = (position.floor() as usize).min(last.saturating_sub(1));
    if i == last {
        return samples[last];
    }
    lerp(samples[i], samples[i + 1], position - i as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_grid(nx: usize) -> SampledGrid {
        SampledGrid::new(0.0, 1.0, nx).unwrap()
    }

    #[test]
    fn test_construction_checks_lengths() {
        let grid = unit_grid(3);

        assert!(Vector::mono(grid, vec![1.0, 2.0, 3.0]).is_ok());
        assert!(matches!(
            Vector::mono(grid, vec![1.0, 2.0]),
            Err(PraatError::LengthMismatch { expected: 3, actual: 2 })
        ));
        assert!(matches!(
            Vector::new(grid, vec![]),
            Err(PraatError::InvalidParameter(_))
        ));
        assert!(Vector::new(grid, vec![vec![0.0; 3], vec![0.0; 4]]).is_err());
    }

    #[test]
    fn test_from_samples_uses_sound_timing() {
        let sound = Vector::from_samples(&[0.0; 4], 4.0, 1.0).unwrap();

        assert_eq!(sound.grid().x1(), 1.125);
        assert_eq!(sound.grid().dx(), 0.25);
        assert_eq!(sound.xmin(), 1.0);
        assert_eq!(sound.xmax(), 2.0);
        assert_eq!(sound.sample_count(), 4);
        assert!(Vector::from_samples(&[0.0], 0.0, 0.0).is_err());
    }

    #[test]
    fn test_value_at_sample() {
        let v = Vector::new(unit_grid(3), vec![vec![1.0, 2.0, 3.0], vec![3.0, 4.0, 5.0]]).unwrap();

        assert_eq!(v.value_at_sample(1, ChannelSelection::Channel(1)), Some(4.0));
        assert_eq!(v.value_at_sample(1, ChannelSelection::Average), Some(3.0));
        assert_eq!(v.value_at_sample(3, ChannelSelection::Average), None);
        assert_eq!(v.value_at_sample(0, ChannelSelection::Channel(2)), None);
    }

    #[test]
    fn test_value_at_x() {
        let v = Vector::new(unit_grid(3), vec![vec![0.0, 2.0, 4.0], vec![2.0, 4.0, 6.0]]).unwrap();

        let avg = v.value_at_x(0.5, ChannelSelection::Average, Interpolation::Linear);
        assert_relative_eq!(avg.unwrap(), 2.0, epsilon = 1e-12);

        // Held constant between the last centre and the domain edge
        let edge = v.value_at_x(2.4, ChannelSelection::Channel(0), Interpolation::Linear);
        assert_eq!(edge, Some(4.0));

        assert_eq!(v.value_at_x(2.6, ChannelSelection::Channel(0), Interpolation::Linear), None);
        assert_eq!(v.value_at_x(-0.6, ChannelSelection::Average, Interpolation::Cubic), None);
        assert_eq!(v.value_at_x(1.0, ChannelSelection::Channel(5), Interpolation::Linear), None);
    }

    #[test]
    fn test_maximum_refines_between_samples() {
        let grid = SampledGrid::new(0.0, 0.1, 21).unwrap();
        let samples: Vec<f64> = grid.sample_positions().map(|x| -(x - 1.03).powi(2)).collect();
        let v = Vector::mono(grid, samples).unwrap();

        let max = v.maximum(0.0, 2.0, Interpolation::Linear).unwrap();
        assert_relative_eq!(max.x, 1.03, epsilon = 1e-9);
        assert_relative_eq!(max.value, 0.0, epsilon = 1e-12);
        assert_eq!(max.channel, 0);

        // The refined position does not depend on the amplitude
        let quiet_samples: Vec<f64> = v.values().iter().map(|y| y * 1e-9).collect();
        let quiet = Vector::mono(grid, quiet_samples).unwrap();
        let quiet_max = quiet.maximum(0.0, 2.0, Interpolation::Linear).unwrap();
        assert_relative_eq!(quiet_max.x, max.x, epsilon = 1e-9);
        let quiet_min = quiet.minimum(0.0, 2.0, Interpolation::Linear).unwrap();
        assert_relative_eq!(quiet_min.value, -(1.03_f64.powi(2)) * 1e-9, max_relative = 1e-9);

        let nearest = v.maximum(0.0, 2.0, Interpolation::Nearest).unwrap();
        assert_relative_eq!(nearest.x, 1.0, epsilon = 1e-12);

        // No interior minimum: the lower window end wins
        let min = v.minimum(0.0, 2.0, Interpolation::Linear).unwrap();
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(min.value, -(1.03_f64.powi(2)), epsilon = 1e-12);
    }

    #[test]
    fn test_extremum_without_samples_in_window() {
        let v = Vector::mono(unit_grid(5), vec![0.0, 10.0, 20.0, 30.0, 40.0]).unwrap();

        let max = v.maximum_in_channel(1.2, 1.8, 0, Interpolation::Linear).unwrap();
        assert_relative_eq!(max.value, 18.0, epsilon = 1e-12);
        assert_eq!(max.x, 1.8);

        let min = v.minimum_in_channel(1.2, 1.8, 0, Interpolation::Sinc70).unwrap();
        assert_relative_eq!(min.value, 12.0, epsilon = 1e-12);
        assert_eq!(min.x, 1.2);

        let flat = Vector::mono(unit_grid(3), vec![1.0; 3]).unwrap();
        let mid = flat.maximum_in_channel(0.2, 0.8, 0, Interpolation::Linear).unwrap();
        assert_eq!(mid.x, 0.5);

        assert!(matches!(
            v.maximum_in_channel(10.0, 11.0, 0, Interpolation::Linear),
            Err(PraatError::UndefinedValue { .. })
        ));
    }

    #[test]
    fn test_extremum_across_channels() {
        let v = Vector::new(
            unit_grid(3),
            vec![vec![0.0, 1.0, 0.0], vec![0.0, 3.0, 0.0], vec![0.0, 3.0, 0.0]],
        )
        .unwrap();

        let max = v.maximum(0.0, 0.0, Interpolation::Linear).unwrap();
        assert_eq!(max.channel, 1);
        assert_relative_eq!(max.value, 3.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, 1.0, epsilon = 1e-12);

        assert!(matches!(
            v.maximum_in_channel(0.0, 0.0, 3, Interpolation::Linear),
            Err(PraatError::ChannelOutOfRange { channel: 3, count: 3 })
        ));
    }

    #[test]
    fn test_absolute_extremum() {
        let v = Vector::mono(unit_grid(3), vec![-5.0, 1.0, 2.0]).unwrap();
        assert_eq!(v.absolute_extremum(0.0, 0.0, Interpolation::Nearest).unwrap(), 5.0);
    }

    #[test]
    fn test_mean() {
        let v = Vector::new(
            unit_grid(5),
            vec![vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![2.0, 4.0, 6.0, 8.0, 10.0]],
        )
        .unwrap();

        // Over the whole domain the mean is the plain sample mean
        assert_relative_eq!(v.mean(0.0, 0.0, ChannelSelection::Channel(0)).unwrap(), 3.0);
        assert_relative_eq!(v.mean(0.0, 0.0, ChannelSelection::Average).unwrap(), 4.5);

        // Partial bins are weighted by the part of them inside the window
        let centred = v.mean(0.5, 2.5, ChannelSelection::Channel(1)).unwrap();
        assert_relative_eq!(centred, 5.0, epsilon = 1e-12);
        let between = v.mean(0.2, 0.8, ChannelSelection::Average).unwrap();
        assert_relative_eq!(between, 2.25, epsilon = 1e-12);

        // Clipped to the domain, where the last sample is held
        let clipped = v.mean(3.5, 10.0, ChannelSelection::Channel(0)).unwrap();
        assert_relative_eq!(clipped, 4.875, epsilon = 1e-12);

        assert_eq!(v.mean(10.0, 11.0, ChannelSelection::Average), None);
        assert_eq!(v.mean(0.0, 0.0, ChannelSelection::Channel(9)), None);

        let uneven = Vector::mono(unit_grid(4), vec![3.0, -1.0, 7.0, 0.5]).unwrap();
        assert_relative_eq!(
            uneven.mean(0.0, 0.0, ChannelSelection::Average).unwrap(),
            mean_of(uneven.values()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_standard_deviation() {
        let v = Vector::new(
            unit_grid(5),
            vec![vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![2.0, 4.0, 6.0, 8.0, 10.0]],
        )
        .unwrap();

        let sd = v.standard_deviation(0.0, 0.0, ChannelSelection::Channel(0)).unwrap();
        assert_relative_eq!(sd, 2.5_f64.sqrt(), epsilon = 1e-12);

        // (10 + 40) / (5 * 2 - 2)
        let pooled = v.standard_deviation(0.0, 0.0, ChannelSelection::Average).unwrap();
        assert_relative_eq!(pooled, 2.5, epsilon = 1e-12);

        // Samples 1..=3 about the interpolated mean of [0.5, 3.5], which is 3
        let inner = v.standard_deviation(0.5, 3.5, ChannelSelection::Channel(0)).unwrap();
        assert_relative_eq!(inner, 1.0, epsilon = 1e-12);

        assert_eq!(v.standard_deviation(0.5, 1.5, ChannelSelection::Average), None);
    }

    #[test]
    fn test_modify() {
        let mut v =
            Vector::new(unit_grid(3), vec![vec![1.0, 2.0, 3.0], vec![-4.0, 0.0, 1.0]]).unwrap();

        v.add_scalar(1.0);
        assert_eq!(v.channel(0).unwrap(), &[2.0, 3.0, 4.0]);

        v.multiply_by_scalar(2.0);
        assert_eq!(v.channel(1).unwrap(), &[-6.0, 2.0, 4.0]);

        v.scale(0.5);
        assert_eq!(v.channel(0).unwrap(), &[0.25, 0.375, 0.5]);
        assert_eq!(v.channel(1).unwrap(), &[-0.375, 0.125, 0.25]);

        v.subtract_mean();
        assert_relative_eq!(mean_of(v.channel(0).unwrap()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(mean_of(v.channel(1).unwrap()), 0.0, epsilon = 1e-12);

        let mut silent = Vector::mono(unit_grid(2), vec![0.0, 0.0]).unwrap();
        silent.scale(1.0);
        assert_eq!(silent.values(), &[0.0, 0.0]);
    }
}
