//! Ingestion of the command line parameters.
//!
//! The renderer proper never sees a raw string: this module converts
//! the nine positional arguments into a validated `RenderParams`,
//! reporting exactly which argument was malformed.  Each failure class
//! carries its own process exit code, so a scripted caller can tell
//! "too few arguments" apart from "argument 3 was not a number"
//! without parsing stderr.

use std::str::FromStr;

use num::Complex;

use viewport::{Viewport, ViewportError};

/// Names of the nine positional parameters, in command line order.
/// Shared between the clap definition and the error messages so the
/// two can never disagree.
pub const PARAM_NAMES: [&str; 9] = [
    "windowWidth",
    "windowHeight",
    "planeWidth",
    "planeHeight",
    "centerX",
    "centerY",
    "constantReal",
    "constantImag",
    "numberOfThreads",
];

/// A rejected command line.
#[derive(Clone, Debug, Fail, PartialEq)]
pub enum ParamError {
    /// Fewer than nine positional arguments were given.
    #[fail(display = "Insufficient arguments given.")]
    Insufficient,
    /// A parameter that must be strictly positive was zero or below.
    #[fail(display = "{} must be greater than 0.", what)]
    BelowOne {
        /// Which parameter group was out of range.
        what: &'static str,
    },
    /// A parameter did not parse as a number.
    #[fail(display = "Argument {} is not a number. All args must be numbers.", name)]
    NotANumber {
        /// Which parameter failed to parse.
        name: &'static str,
    },
}

impl ParamError {
    /// The process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match *self {
            ParamError::Insufficient => 2,
            ParamError::BelowOne { .. } => 3,
            ParamError::NotANumber { .. } => 4,
        }
    }
}

impl From<ViewportError> for ParamError {
    fn from(err: ViewportError) -> ParamError {
        match err {
            ViewportError::EmptyWindow => ParamError::BelowOne {
                what: "Window dimensions (args 1 and 2)",
            },
            ViewportError::EmptyPlane => ParamError::BelowOne {
                what: "Plane dimensions (args 3 and 4)",
            },
        }
    }
}

fn parse_arg<T: FromStr>(s: &str, name: &'static str) -> Result<T, ParamError> {
    T::from_str(s).map_err(|_| ParamError::NotANumber { name })
}

/// The validated inputs of one render: geometry, constant, and worker
/// count.  A value of this type means every invariant the core
/// assumes has already been checked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderParams {
    /// The viewport: plane slice plus window resolution.
    pub viewport: Viewport,
    /// The complex constant C of f(z) = z² + C.
    pub c: Complex<f64>,
    /// Number of worker threads to fill with.
    pub threads: usize,
}

impl RenderParams {
    /// Parse the nine positional arguments, in command line order.
    /// Accepts any slice: fewer than nine entries is the
    /// insufficient-arguments failure, extras are ignored.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<RenderParams, ParamError> {
        if args.len() < 9 {
            return Err(ParamError::Insufficient);
        }

        let window_width: i64 = parse_arg(args[0].as_ref(), PARAM_NAMES[0])?;
        let window_height: i64 = parse_arg(args[1].as_ref(), PARAM_NAMES[1])?;
        let plane_width: f64 = parse_arg(args[2].as_ref(), PARAM_NAMES[2])?;
        let plane_height: f64 = parse_arg(args[3].as_ref(), PARAM_NAMES[3])?;
        let center_x: f64 = parse_arg(args[4].as_ref(), PARAM_NAMES[4])?;
        let center_y: f64 = parse_arg(args[5].as_ref(), PARAM_NAMES[5])?;
        let constant_real: f64 = parse_arg(args[6].as_ref(), PARAM_NAMES[6])?;
        let constant_imag: f64 = parse_arg(args[7].as_ref(), PARAM_NAMES[7])?;
        let threads: i64 = parse_arg(args[8].as_ref(), PARAM_NAMES[8])?;

        if window_width <= 0 || window_height <= 0 {
            return Err(ParamError::BelowOne {
                what: "Window dimensions (args 1 and 2)",
            });
        }
        if plane_width <= 0.0 || plane_height <= 0.0 {
            return Err(ParamError::BelowOne {
                what: "Plane dimensions (args 3 and 4)",
            });
        }
        if threads <= 0 {
            return Err(ParamError::BelowOne {
                what: "Number of threads (arg 9)",
            });
        }

        let viewport = Viewport::new(
            Complex::new(center_x, center_y),
            plane_width,
            plane_height,
            window_width as usize,
            window_height as usize,
        )?;

        Ok(RenderParams {
            viewport,
            c: Complex::new(constant_real, constant_imag),
            threads: threads as usize,
        })
    }
}
