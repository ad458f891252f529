// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score grids: a scoring function sampled over a 2D domain.
//!
//! Storage is row-major with rows along y and columns along x, so
//! `values[row * cols + col]` is the score at `(x[col], y[row])`. Row 0 is the
//! bottom of the rendered panel.

mod sample;

pub use sample::*;

/// Samples per axis in a default run.
pub const DEFAULT_RESOLUTION: usize = 100;

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
///
/// The last value is pinned to `end` exactly so the sampled domain never falls
/// short of the configured range through rounding.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// A dense grid of scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGrid {
    values: Vec<f64>,
    cols: usize,
    rows: usize,
}

impl ScoreGrid {
    /// Wrap precomputed values as a `cols × rows` grid. The grid always holds
    /// exactly `cols * rows` cells: excess values are dropped and missing ones
    /// read as NaN.
    pub fn from_values(mut values: Vec<f64>, cols: usize, rows: usize) -> Self {
        values.resize(cols * rows, f64::NAN);
        ScoreGrid { values, cols, rows }
    }

    /// Evaluate `f(x, y)` over every pair, y-major.
    pub fn evaluate<F>(xs: &[f64], ys: &[f64], f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut values = Vec::with_capacity(xs.len() * ys.len());
        for &y in ys {
            for &x in xs {
                values.push(f(x, y));
            }
        }
        ScoreGrid {
            values,
            cols: xs.len(),
            rows: ys.len(),
        }
    }

    /// `(cols, rows)`, i.e. `(x samples, y samples)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate `(row, col, score)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / self.cols, i % self.cols, v))
    }

    /// Smallest finite score, if any.
    pub fn min(&self) -> Option<f64> {
        self.finite().reduce(f64::min)
    }

    /// Largest finite score, if any.
    pub fn max(&self) -> Option<f64> {
        self.finite().reduce(f64::max)
    }

    fn finite(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().filter(|v| v.is_finite())
    }
}
