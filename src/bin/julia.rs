extern crate clap;
extern crate env_logger;
extern crate image;
extern crate juliaset;
#[macro_use]
extern crate log;
extern crate num_cpus;

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind};
use image::png::PNGEncoder;
use image::ColorType;
use std::fs::File;
use std::process;

use juliaset::params::{ParamError, RenderParams, PARAM_NAMES};
use juliaset::{ColorGrid, ColorScheme, JuliaRenderer};

/// The number of iterations applied to each point when testing set
/// membership.
const NUM_ITERATIONS: usize = 100;

const OUTPUT: &str = "output";

fn args() -> Result<ArgMatches<'static>, clap::Error> {
    let mut app = App::new("julia")
        .version("0.1.0")
        .about("Renders a slice of the complex plane, coloring each pixel by membership in the Julia set of z^2 + C")
        // centerX and the constant components are routinely negative.
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("julia.png")
                .help("Output image file"),
        );
    for (index, name) in PARAM_NAMES.iter().enumerate() {
        app = app.arg(Arg::with_name(name).required(true).index((index + 1) as u64));
    }
    app.get_matches_safe()
}

fn write_image(outfile: &str, grid: &ColorGrid) -> Result<(), std::io::Error> {
    let output = File::create(outfile)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(
        &grid.to_rgba(),
        grid.width() as u32,
        grid.height() as u32,
        ColorType::RGBA(8),
    )?;
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = match args() {
        Ok(matches) => matches,
        Err(err) => match err.kind {
            ErrorKind::MissingRequiredArgument => {
                let fail = ParamError::Insufficient;
                eprintln!("{}", fail);
                process::exit(fail.exit_code());
            }
            _ => err.exit(),
        },
    };

    let positionals: Vec<&str> = PARAM_NAMES
        .iter()
        .map(|name| matches.value_of(*name).unwrap_or(""))
        .collect();
    let params = match RenderParams::parse(&positionals) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    };

    info!(
        "rendering {}x{} with {} workers ({} cpus available)",
        params.viewport.window_width,
        params.viewport.window_height,
        params.threads,
        num_cpus::get()
    );

    let renderer = JuliaRenderer::new(
        params.viewport,
        params.c,
        NUM_ITERATIONS,
        ColorScheme::default(),
    );
    let mut grid = ColorGrid::new(params.viewport.window_width, params.viewport.window_height);

    match renderer.fill(&mut grid, params.threads) {
        Ok(elapsed) => {
            println!("Processing time: {}ms", elapsed.as_millis());
        }
        Err(err) => {
            eprintln!("Render failure: {}", err);
            process::exit(1);
        }
    }

    let outfile = matches.value_of(OUTPUT).unwrap_or("julia.png");
    if let Err(err) = write_image(outfile, &grid) {
        eprintln!("Could not write {}: {}", outfile, err);
        process::exit(1);
    }
}
