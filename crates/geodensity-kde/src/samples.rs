//! Sample and grid generation
//!
//! Produces the ordered coordinates at which density is evaluated: an evenly
//! spaced 1-D sequence for the profile view, and a row-major 2-D grid for the
//! contour view. The grid ordering is a contract with the contour-extraction
//! collaborator, which reconstructs (row, column) from the flat index.

use geodensity_core::{Error, Result};

/// Number of 1-D samples the reference visualization evaluates
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Evenly spaced 1-D sample coordinates over `[low, high]`, both endpoints
/// included
///
/// Endpoint inclusion matters downstream: the profile renderer needs the
/// density at the exact interval boundaries. `count == 0` yields an empty
/// sequence, `count == 1` yields `[low]`; neither is an error.
pub fn generate_samples(low: f64, high: f64, count: usize) -> Result<Vec<f64>> {
    if !low.is_finite() || !high.is_finite() {
        return Err(Error::non_finite("sample domain"));
    }
    if low > high {
        return Err(Error::InvalidParameter(format!(
            "Sample domain [{low}, {high}] is inverted"
        )));
    }

    match count {
        0 => Ok(Vec::new()),
        1 => Ok(vec![low]),
        _ => {
            let step = (high - low) / (count - 1) as f64;
            let mut samples: Vec<f64> = (0..count).map(|i| low + i as f64 * step).collect();
            // Pin the last sample to the exact endpoint.
            samples[count - 1] = high;
            Ok(samples)
        }
    }
}

/// Rectangular geographic region covered by the 2-D sampling grid
///
/// Column 0 maps toward `x_start`, row 0 toward `y_start`. Either axis may
/// run "backwards" (the reference map puts the southern latitude at
/// `y_start`), so no ordering is imposed, only finiteness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridRect {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
}

impl GridRect {
    pub fn new(x_start: f64, x_end: f64, y_start: f64, y_end: f64) -> Result<Self> {
        if ![x_start, x_end, y_start, y_end].iter().all(|v| v.is_finite()) {
            return Err(Error::non_finite("grid rectangle"));
        }
        Ok(Self {
            x_start,
            x_end,
            y_start,
            y_end,
        })
    }
}

/// Row-major 2-D sample grid over `rect`
///
/// Returns `grid_size²` coordinates; the sample for grid row `i`, column `j`
/// sits at flat index `i * grid_size + j`. Each axis uses the linear map
/// `idx -> start + idx * (end - start) / grid_size` over `idx` in
/// `[0, grid_size)`: the row index drives the vertical axis and the column
/// index the horizontal one.
pub fn generate_grid(rect: &GridRect, grid_size: usize) -> Result<Vec<[f64; 2]>> {
    if grid_size == 0 {
        return Err(Error::invalid_grid_size(grid_size));
    }

    let x_step = (rect.x_end - rect.x_start) / grid_size as f64;
    let y_step = (rect.y_end - rect.y_start) / grid_size as f64;

    let mut samples = Vec::with_capacity(grid_size * grid_size);
    for i in 0..grid_size {
        let y = rect.y_start + i as f64 * y_step;
        for j in 0..grid_size {
            let x = rect.x_start + j as f64 * x_step;
            samples.push([x, y]);
        }
    }
    Ok(samples)
}
