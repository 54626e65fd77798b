#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is defined by a complex constant C: take a point Z on
//! the complex plane and repeatedly apply f(z) = z² + C to it.  Points
//! whose orbit stays near the origin forever belong to the set; points
//! whose orbit flies off to infinity do not, and the iteration at
//! which each one was eliminated makes a natural color gradient around
//! the set's boundary.  Every choice of C draws a different picture,
//! which is most of the fun.
//!
//! The crate splits the way the work splits: a viewport mapping window
//! pixels onto a slice of the complex plane, an escape-time evaluator
//! for a single point, a color scheme for the evaluator's verdict, and
//! a fill engine that stripes the pixel columns across worker threads.
//! The `julia` binary glues those to a command line and writes the
//! finished grid out as a PNG.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod color;
pub mod escape;
pub mod fill;
pub mod grid;
pub mod params;
pub mod viewport;

pub use color::{Color, ColorScheme};
pub use escape::escape_stage;
pub use fill::{FillError, JuliaRenderer, WorkAssignment};
pub use grid::ColorGrid;
pub use params::{ParamError, RenderParams};
pub use viewport::{Viewport, ViewportError};
