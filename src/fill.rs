// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parallel fill engine.
//!
//! Filling a grid is one evaluator call per pixel with no data flowing
//! between pixels, so the only real design question is how to carve up
//! the grid.  Columns are dealt to workers round-robin (column x
//! belongs to worker x mod workers) because escape-time cost clusters
//! in narrow bands near the set's boundary, and interleaving spreads
//! those bands across every worker instead of handing one worker a
//! solid block of them.  Each worker exclusively owns its columns'
//! slices of the shared grid, so the threads run with no locks, no
//! atomics, and no communication until the scope joins them all.

extern crate crossbeam;

use std::time::{Duration, Instant};

use num::Complex;

use color::{Color, ColorScheme};
use escape::escape_stage;
use grid::ColorGrid;
use viewport::Viewport;

/// The fill failed to run to completion.
#[derive(Copy, Clone, Debug, Fail, PartialEq)]
pub enum FillError {
    /// A worker died before finishing its columns.  The grid is only
    /// partially populated and must not be presented.
    #[fail(display = "A fill worker terminated abnormally.")]
    WorkerPanic,
}

/// Everything one worker needs, fixed before its thread starts: the
/// geometry and constant of the render, and exclusive mutable access
/// to the worker's stripe of grid columns.  Ownership of the disjoint
/// column slices is what makes unsynchronized writes safe: no two
/// assignments can ever hold the same column.
pub struct WorkAssignment<'a> {
    worker: usize,
    workers: usize,
    limit: usize,
    viewport: Viewport,
    c: Complex<f64>,
    scheme: ColorScheme,
    columns: Vec<(usize, &'a mut [Color])>,
}

impl<'a> WorkAssignment<'a> {
    /// Fill every cell of every owned column: map the pixel onto the
    /// plane, evaluate it, paint the verdict.
    fn run(self) {
        let WorkAssignment {
            limit,
            viewport,
            c,
            scheme,
            columns,
            ..
        } = self;
        for (x, column) in columns {
            for (y, cell) in column.iter_mut().enumerate() {
                let z = viewport.pixel_to_point(x, y);
                *cell = scheme.color(escape_stage(z, c, limit));
            }
        }
    }
}

/// Renders the Julia set of one complex constant into a color grid.
/// Holds the parameters every pixel evaluation shares; grids are
/// passed into the fill calls, so one renderer can fill many.
pub struct JuliaRenderer {
    viewport: Viewport,
    c: Complex<f64>,
    limit: usize,
    scheme: ColorScheme,
}

impl JuliaRenderer {
    /// Requires the viewport, the complex constant C defining
    /// f(z) = z² + C, the iteration bound (at least 1), and the color
    /// scheme used to paint verdicts.
    pub fn new(
        viewport: Viewport,
        c: Complex<f64>,
        limit: usize,
        scheme: ColorScheme,
    ) -> JuliaRenderer {
        JuliaRenderer {
            viewport,
            c,
            limit,
            scheme,
        }
    }

    /// The single-threaded reference fill: every column in order, on
    /// the calling thread.
    pub fn fill_single(&self, grid: &mut ColorGrid) {
        assert!(
            grid.width() == self.viewport.window_width
                && grid.height() == self.viewport.window_height
        );
        for (x, column) in grid.columns_mut().enumerate() {
            for (y, cell) in column.iter_mut().enumerate() {
                let z = self.viewport.pixel_to_point(x, y);
                *cell = self.scheme.color(escape_stage(z, self.c, self.limit));
            }
        }
    }

    /// Deal the grid's columns to `workers` assignments, round-robin.
    /// Every column lands in exactly one assignment, which is the
    /// invariant the whole concurrency story rests on.
    fn assignments<'a>(&self, grid: &'a mut ColorGrid, workers: usize) -> Vec<WorkAssignment<'a>> {
        let mut assignments: Vec<WorkAssignment> = (0..workers)
            .map(|worker| WorkAssignment {
                worker,
                workers,
                limit: self.limit,
                viewport: self.viewport,
                c: self.c,
                scheme: self.scheme,
                columns: Vec::new(),
            })
            .collect();
        for (x, column) in grid.columns_mut().enumerate() {
            assignments[x % workers].columns.push((x, column));
        }
        assignments
    }

    /// Fill the grid with `workers` threads (at least 1) and return
    /// the wall-clock time of the parallel phase, measured from first
    /// spawn to last join; constructing the assignments is excluded
    /// from the measurement.  The scope's exit is the join barrier, so
    /// when this returns Ok the grid is fully populated.  With more
    /// workers than columns the surplus workers own nothing and
    /// finish immediately, which is harmless.
    pub fn fill(&self, grid: &mut ColorGrid, workers: usize) -> Result<Duration, FillError> {
        assert!(workers >= 1);
        assert!(
            grid.width() == self.viewport.window_width
                && grid.height() == self.viewport.window_height
        );

        let assignments = self.assignments(grid, workers);
        for assignment in &assignments {
            debug!(
                "worker {} of {} owns {} columns",
                assignment.worker,
                assignment.workers,
                assignment.columns.len()
            );
        }

        let started = Instant::now();
        let result = crossbeam::scope(|spawner| {
            for assignment in assignments {
                spawner.spawn(move |_| assignment.run());
            }
        });
        let elapsed = started.elapsed();

        match result {
            Ok(()) => Ok(elapsed),
            Err(_) => Err(FillError::WorkerPanic),
        }
    }
}
