//! `FieldPlot` CLI — evaluate formulas and sample vector fields.

use std::process;

use clap::Parser;
use kurbo::{Point, Rect};

use fieldplot_core::bindings::Bindings;
use fieldplot_core::eval::evaluate;
use fieldplot_field::field::FieldDef;
use fieldplot_field::sample::{sweep, SampleRegion};

#[derive(Parser)]
#[command(version, about = "FieldPlot \u{2014} formula evaluator and vector-field sampler")]
struct Cli {
    /// Evaluate a single formula and print its value
    #[arg(short = 'e', long = "eval", conflicts_with_all = ["fx", "fy"])]
    eval: Option<String>,

    /// Bind a name for --eval; repeatable: -D x=3 -D y=4
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_define)]
    defines: Vec<(String, f64)>,

    /// Formula for the x component of a field
    #[arg(long, requires = "fy")]
    fx: Option<String>,

    /// Formula for the y component of a field
    #[arg(long, requires = "fx")]
    fy: Option<String>,

    /// Sample the field at a single point
    #[arg(long, value_name = "X,Y", value_parser = parse_point, conflicts_with = "region")]
    at: Option<Point>,

    /// Sample the field over a rectangular region
    #[arg(long, value_name = "X0,Y0,X1,Y1", value_parser = parse_rect)]
    region: Option<Rect>,

    /// Lattice step for --region sampling
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Time scalar bound as `t` in field formulas
    #[arg(short = 't', long = "time", default_value_t = 0.0)]
    time: f64,
}

fn parse_define(s: &str) -> Result<(String, f64), String> {
    let Some((name, value)) = s.split_once('=') else {
        return Err(format!("expected NAME=VALUE, got \"{s}\""));
    };
    let value: f64 = value
        .parse()
        .map_err(|_| format!("\"{value}\" is not a number"))?;
    Ok((name.to_owned(), value))
}

fn parse_scalars<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got \"{s}\""));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("\"{part}\" is not a number"))?;
    }
    Ok(out)
}

fn parse_point(s: &str) -> Result<Point, String> {
    let [x, y] = parse_scalars::<2>(s)?;
    Ok(Point::new(x, y))
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x0, y0, x1, y1] = parse_scalars::<4>(s)?;
    Ok(Rect::new(x0, y0, x1, y1))
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref formula) = cli.eval {
        run_eval(formula, &cli.defines);
        return;
    }

    if let (Some(fx), Some(fy)) = (&cli.fx, &cli.fy) {
        let field = FieldDef::new(fx.clone(), fy.clone());
        match cli.region {
            Some(rect) => run_region(&field, rect, cli.step, cli.time),
            None => run_point(&field, cli.at.unwrap_or(Point::ZERO), cli.time),
        }
        return;
    }

    eprintln!("No formula given; use -e EXPR, or --fx and --fy");
    process::exit(1);
}

/// Evaluate one formula against the `-D` bindings and print the value.
fn run_eval(formula: &str, defines: &[(String, f64)]) {
    let mut bindings = Bindings::new();
    for (name, value) in defines {
        bindings.define(name, *value);
    }

    match evaluate(formula, &bindings) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Sample the field at one point and print the vector components.
fn run_point(field: &FieldDef, at: Point, time: f64) {
    match field.eval_at(at, time) {
        Ok(v) => println!("{} {}", v.x, v.y),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Sweep the field over a region; one `x y dx dy` line per sample.
fn run_region(field: &FieldDef, rect: Rect, step: f64, time: f64) {
    let region = SampleRegion::new(rect, step);
    match sweep(field, &region, time) {
        Ok(result) => {
            for sample in &result.samples {
                println!(
                    "{} {} {} {}",
                    sample.origin.x, sample.origin.y, sample.vector.x, sample.vector.y
                );
            }
            eprintln!("max magnitude: {}", result.max_magnitude);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
