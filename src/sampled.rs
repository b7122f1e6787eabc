//! Sampled grids: evenly spaced samples over a continuous axis
//!
//! A [`SampledGrid`] is the coordinate model shared by every Praat object that
//! stores values at regular intervals (sounds, pitch and intensity contours,
//! spectra). It is fully described by three numbers:
//!
//! - `x1` - position of the centre of the first sample
//! - `dx` - distance between consecutive sample centres
//! - `nx` - number of samples
//!
//! Each sample owns a cell of width `dx` centred on its position. The cell
//! edges ("boundaries") sit halfway between neighbouring sample centres, and
//! the outermost edges lie half a step outside the first and last sample, so
//! the cells tile the domain `[xmin, xmax]` without gaps or overlaps.
//!
//! ```text
//!   xmin                                         xmax
//!    |-----x-----|-----x-----|-----x-----|-----x-----|
//!          x1       x1+dx     x1+2dx      x1+3dx
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{PraatError, Result};

/// An immutable, evenly spaced sampling grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridParams", into = "GridParams")]
pub struct SampledGrid {
    /// Position of the first sample centre
    x1: f64,
    /// Spacing between sample centres (always > 0)
    dx: f64,
    /// Number of samples
    nx: usize,
}

/// Unvalidated wire form of a grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct GridParams {
    x1: f64,
    dx: f64,
    nx: usize,
}

impl TryFrom<GridParams> for SampledGrid {
    type Error = PraatError;

    fn try_from(params: GridParams) -> Result<Self> {
        SampledGrid::new(params.x1, params.dx, params.nx)
    }
}

impl From<SampledGrid> for GridParams {
    fn from(grid: SampledGrid) -> Self {
        GridParams {
            x1: grid.x1,
            dx: grid.dx,
            nx: grid.nx,
        }
    }
}

/// The closed interval covered by one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Left edge
    pub low: f64,
    /// Right edge
    pub high: f64,
}

impl Bin {
    /// Width of the bin (equals the grid's `dx` up to rounding)
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Midpoint of the bin
    pub fn centre(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Whether `x` lies in the closed interval
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }
}

impl From<Bin> for (f64, f64) {
    fn from(bin: Bin) -> Self {
        (bin.low, bin.high)
    }
}

impl SampledGrid {
    /// Create a grid from its first sample position, step and sample count
    ///
    /// # Errors
    /// Returns [`PraatError::InvalidParameter`] if `x1` is not finite, if
    /// `dx` is not a finite positive number, or if `nx + 1` boundaries would
    /// not be countable in a `usize`.
    ///
    /// # Example
    /// ```
    /// use praatfan_sampled::SampledGrid;
    ///
    /// let grid = SampledGrid::new(10.0, 2.0, 3).unwrap();
    /// let xs: Vec<f64> = grid.sample_positions().collect();
    /// assert_eq!(xs, vec![10.0, 12.0, 14.0]);
    /// ```
    pub fn new(x1: f64, dx: f64, nx: usize) -> Result<Self> {
        if !x1.is_finite() {
            warn!(x1, "rejecting grid with non-finite first sample position");
            return Err(PraatError::InvalidParameter(format!(
                "first sample position must be finite, got {}",
                x1
            )));
        }
        if !(dx.is_finite() && dx > 0.0) {
            warn!(dx, "rejecting grid with invalid sampling period");
            return Err(PraatError::InvalidParameter(format!(
                "sampling period must be finite and positive, got {}",
                dx
            )));
        }
        if nx == usize::MAX {
            warn!(nx, "rejecting grid whose boundaries cannot be counted");
            return Err(PraatError::InvalidParameter(format!(
                "sample count must be below {}",
                usize::MAX
            )));
        }

        debug!(x1, dx, nx, "created sampled grid");
        Ok(Self { x1, dx, nx })
    }

    /// Create a grid of `nx` cells that exactly fill `[xmin, xmax]`
    ///
    /// This is how Praat lays out analysis frames and resampled sounds:
    /// `dx = (xmax - xmin) / nx` and the first sample sits half a step in.
    pub fn from_domain(xmin: f64, xmax: f64, nx: usize) -> Result<Self> {
        if nx == 0 {
            return Err(PraatError::InvalidParameter(
                "a domain must be divided into at least one sample".to_string(),
            ));
        }
        if !(xmin.is_finite() && xmax.is_finite()) || xmax <= xmin {
            return Err(PraatError::InvalidParameter(format!(
                "invalid domain [{}, {}]",
                xmin, xmax
            )));
        }

        let dx = (xmax - xmin) / nx as f64;
        Self::new(xmin + 0.5 * dx, dx, nx)
    }

    /// Create the grid of a sound with `nx` samples starting at `start_time`
    ///
    /// Samples are centred in their sampling periods, so the first sample
    /// lies at `start_time + 0.5 / sample_rate`.
    pub fn from_sample_rate(sample_rate: f64, start_time: f64, nx: usize) -> Result<Self> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(PraatError::InvalidParameter(format!(
                "sample rate must be finite and positive, got {}",
                sample_rate
            )));
        }

        let dx = 1.0 / sample_rate;
        Self::new(start_time + 0.5 * dx, dx, nx)
    }

    /// Position of the first sample centre
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Distance between consecutive sample centres
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Number of samples
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of samples; the canonical length of the grid
    ///
    /// There are `sample_count() + 1` boundaries and `sample_count()` bins.
    pub fn sample_count(&self) -> usize {
        self.nx
    }

    /// Same as [`sample_count`](Self::sample_count)
    pub fn len(&self) -> usize {
        self.nx
    }

    /// True when the grid holds no samples
    pub fn is_empty(&self) -> bool {
        self.nx == 0
    }

    /// Left edge of the domain (the first boundary)
    pub fn xmin(&self) -> f64 {
        self.boundary_position(0)
    }

    /// Right edge of the domain (the last boundary)
    pub fn xmax(&self) -> f64 {
        self.boundary_position(self.nx)
    }

    /// Total extent of the domain, `nx * dx`
    pub fn duration(&self) -> f64 {
        self.nx as f64 * self.dx
    }

    /// Centre of sample `index`: `x1 + dx * index`
    ///
    /// Defined for any index, including ones past the end of the grid.
    pub fn sample_position(&self, index: usize) -> f64 {
        self.x1 + self.dx * index as f64
    }

    /// Boundary `index`: `x1 + dx * (index - 0.5)`
    ///
    /// Boundary `i` is the left edge of sample `i` and the right edge of
    /// sample `i - 1`.
    pub fn boundary_position(&self, index: usize) -> f64 {
        self.x1 + self.dx * (index as f64 - 0.5)
    }

    /// The bin of sample `index`, or None past the end of the grid
    pub fn bin(&self, index: usize) -> Option<Bin> {
        (index < self.nx).then(|| bin_at(self, index))
    }

    /// Centres of all samples in ascending order
    pub fn sample_positions(&self) -> SamplePositions {
        GridIter::new(*self, 0..self.nx, SampledGrid::sample_position)
    }

    /// All `nx + 1` boundaries in ascending order
    ///
    /// An empty grid still has one boundary, at `x1 - dx / 2`.
    pub fn boundary_positions(&self) -> BoundaryPositions {
        GridIter::new(*self, 0..self.nx + 1, SampledGrid::boundary_position)
    }

    /// The `nx` bins, each spanning two consecutive boundaries
    pub fn bins(&self) -> Bins {
        GridIter::new(*self, 0..self.nx, bin_at)
    }

    /// Position of a (possibly fractional) sample index
    pub fn index_to_x(&self, index: f64) -> f64 {
        self.x1 + self.dx * index
    }

    /// Fractional sample index of position `x`
    pub fn x_to_index(&self, x: f64) -> f64 {
        (x - self.x1) / self.dx
    }

    /// Index of the sample centre nearest to `x`
    ///
    /// Halves round upwards. The result may lie outside `0..nx`.
    pub fn x_to_nearest_index(&self, x: f64) -> isize {
        (self.x_to_index(x) + 0.5).floor() as isize
    }

    /// Index of the last sample centre at or before `x` (may be out of range)
    pub fn x_to_low_index(&self, x: f64) -> isize {
        self.x_to_index(x).floor() as isize
    }

    /// Index of the first sample centre at or after `x` (may be out of range)
    pub fn x_to_high_index(&self, x: f64) -> isize {
        self.x_to_index(x).ceil() as isize
    }

    /// Index of the sample whose bin contains `x`
    ///
    /// A boundary shared by two bins belongs to the right-hand one, except
    /// `xmax`, which belongs to the last bin. Returns None outside the domain.
    pub fn bin_containing(&self, x: f64) -> Option<usize> {
        if self.nx == 0 || !(self.xmin() <= x && x <= self.xmax()) {
            return None;
        }

        let last = self.nx - 1;
        let mut index = self.x_to_nearest_index(x).clamp(0, last as isize) as usize;

        // Settle rounding noise against the exact boundary formula
        if index < last && x >= self.boundary_position(index + 1) {
            index += 1;
        } else if index > 0 && x < self.boundary_position(index) {
            index -= 1;
        }
        Some(index)
    }

    /// Samples whose centres lie within `[xmin, xmax]`
    ///
    /// Returns an empty range if no sample centre falls inside the window.
    pub fn window_samples(&self, xmin: f64, xmax: f64) -> Range<usize> {
        if self.nx == 0 || xmin.is_nan() || xmax.is_nan() {
            return 0..0;
        }

        let first = self.x_to_index(xmin).ceil().max(0.0);
        let last = self.x_to_index(xmax).floor().min((self.nx - 1) as f64);
        if first > last {
            return 0..0;
        }
        first as usize..last as usize + 1
    }
}

fn bin_at(grid: &SampledGrid, index: usize) -> Bin {
    Bin {
        low: grid.boundary_position(index),
        high: grid.boundary_position(index + 1),
    }
}

/// Lazily evaluated sequence derived from a grid
///
/// The iterator copies the grid, so it borrows nothing and can be cloned to
/// replay the remaining elements.
#[derive(Clone)]
pub struct GridIter<T> {
    grid: SampledGrid,
    indices: Range<usize>,
    at: fn(&SampledGrid, usize) -> T,
}

/// Iterator over sample centres
pub type SamplePositions = GridIter<f64>;
/// Iterator over cell boundaries
pub type BoundaryPositions = GridIter<f64>;
/// Iterator over bins
pub type Bins = GridIter<Bin>;

impl<T> GridIter<T> {
    fn new(grid: SampledGrid, indices: Range<usize>, at: fn(&SampledGrid, usize) -> T) -> Self {
        Self { grid, indices, at }
    }
}

impl<T> fmt::Debug for GridIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridIter")
            .field("grid", &self.grid)
            .field("indices", &self.indices)
            .finish()
    }
}

impl<T> Iterator for GridIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.indices.next().map(|i| (self.at)(&self.grid, i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.indices.nth(n).map(|i| (self.at)(&self.grid, i))
    }
}

impl<T> DoubleEndedIterator for GridIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.indices.next_back().map(|i| (self.at)(&self.grid, i))
    }
}

impl<T> ExactSizeIterator for GridIter<T> {}

impl<T> FusedIterator for GridIter<T> {}

/// Anything laid out on a [`SampledGrid`]
///
/// Implementors only provide [`grid`](Sampled::grid); the coordinate queries
/// are delegated to it.
pub trait Sampled {
    /// The grid the values live on
    fn grid(&self) -> &SampledGrid;

    /// Number of samples
    fn sample_count(&self) -> usize {
        self.grid().sample_count()
    }

    /// Centres of all samples
    fn sample_positions(&self) -> SamplePositions {
        self.grid().sample_positions()
    }

    /// All cell boundaries
    fn boundary_positions(&self) -> BoundaryPositions {
        self.grid().boundary_positions()
    }

    /// All bins
    fn bins(&self) -> Bins {
        self.grid().bins()
    }

    /// Left edge of the domain
    fn xmin(&self) -> f64 {
        self.grid().xmin()
    }

    /// Right edge of the domain
    fn xmax(&self) -> f64 {
        self.grid().xmax()
    }
}

impl Sampled for SampledGrid {
    fn grid(&self) -> &SampledGrid {
        self
    }
}
