//! Renders a gallery of splines to PNG and SVG.
//!
//! Run with: cargo run --example gallery [output-stem]
//! Set RUST_LOG=debug to see the draw pipeline.

use std::error::Error;

use curvum::canvas::{RasterCanvas, SvgCanvas};
use curvum::{Canvas, Color, Spline, SplineError};
use rand::Rng;

const WIDTH: u32 = 700;
const HEIGHT: u32 = 500;

const BACKGROUND: Color = Color::rgb(68, 68, 68);
const GREY: Color = Color::rgb(200, 200, 200);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let stem = std::env::args().nth(1).unwrap_or_else(|| "gallery".to_string());
    let splines = build_scene(&mut rand::thread_rng())?;

    let mut raster = RasterCanvas::filled(WIDTH, HEIGHT, BACKGROUND);
    draw_scene(&mut raster, &splines)?;
    raster.save(format!("{stem}.png"))?;

    let mut svg = SvgCanvas::new(WIDTH, HEIGHT).with_background(BACKGROUND);
    draw_scene(&mut svg, &splines)?;
    std::fs::write(format!("{stem}.svg"), svg.to_svg())?;

    println!("Wrote {stem}.png and {stem}.svg");
    Ok(())
}

fn draw_scene<C: Canvas>(canvas: &mut C, splines: &[Spline]) -> Result<(), SplineError> {
    draw_graph_axes(canvas);
    for spline in splines {
        spline.draw(canvas)?;
    }
    Ok(())
}

fn draw_graph_axes<C: Canvas>(canvas: &mut C) {
    let white = canvas.allocate_color(255, 255, 255);
    let grey = canvas.allocate_color(GREY.r, GREY.g, GREY.b);
    let bottom = f64::from(HEIGHT - 50);
    let top = f64::from(HEIGHT - 150);

    canvas.draw_line((50.0, bottom).into(), (f64::from(WIDTH - 250), bottom).into(), white, 1);
    canvas.draw_line((50.0, top).into(), (50.0, bottom).into(), white, 1);
    for x in (75..=450).step_by(25) {
        let x = f64::from(x);
        canvas.draw_line((x, top).into(), (x, bottom).into(), grey, 1);
    }
}

fn build_scene<R: Rng>(rng: &mut R) -> Result<Vec<Spline>, Box<dyn Error>> {
    let mut splines = Vec::new();

    // filled shape with a doubled-back edge
    let mut shape = Spline::closed();
    for (x, y) in [(50.0, 50.0), (300.0, 50.0), (150.0, 50.0), (300.0, 300.0), (50.0, 300.0)] {
        shape.add_point(x, y);
    }
    shape.set_background_color("#FFFF00".parse::<Color>()?);
    shape.set_stroke_color("#FF0000".parse::<Color>()?);
    shape.set_stroke_width(3);
    shape.show_control_points("#00FFFF".parse::<Color>()?, 10);
    splines.push(shape);

    // two random line graphs
    let mut coarse = Spline::open();
    for x in (50..=450).step_by(25) {
        coarse.add_point(f64::from(x), f64::from(450 - rng.gen_range(0..=100)));
    }
    coarse.set_stroke_color([255, 0, 0]);
    coarse.set_stroke_width(2);
    splines.push(coarse);

    let mut fine = Spline::open();
    for x in (50..=450).step_by(10) {
        fine.add_point(f64::from(x), f64::from(450 - rng.gen_range(0..=100)));
    }
    fine.set_stroke_color("#00FFFF".parse::<Color>()?);
    fine.set_stroke_width(1);
    fine.show_control_points("#00FFFF".parse::<Color>()?, 10);
    fine.set_spline_alpha(1.0);
    fine.set_spline_tension(1.0);
    splines.push(fine);

    // spirograph
    let petal_color = "#F6AA33".parse::<Color>()?;
    for i in 0..24 {
        let mut petal = Spline::closed();
        for (x, y) in [(375.0, 150.0), (370.0, 70.0), (370.0, 70.0), (380.0, 70.0)] {
            petal.add_point(x, y);
        }
        petal.set_stroke_color(petal_color);
        petal.rotate(375.0, 150.0, f64::from(i * 15));
        splines.push(petal);
    }

    // random squiggle
    let mut squiggle = Spline::closed();
    for _ in 0..50 {
        squiggle.add_point(
            f64::from(rng.gen_range(350..=450)),
            f64::from(rng.gen_range(275..=325)),
        );
    }
    squiggle.set_stroke_color([0, 255, 0]);
    splines.push(squiggle);

    // one open and one closed spline per tension
    let yellow = Color::rgb(255, 255, 0);
    for (i, tension) in [1.0, 0.5, 0.0, -0.5, -1.0].into_iter().enumerate() {
        let y = 20.0 + 100.0 * i as f64;
        for (left, closed) in [(500.0, false), (600.0, true)] {
            let mut spline = Spline::new(closed);
            spline.add_point(left, y + 50.0);
            spline.add_point(left, y);
            spline.add_point(left + 50.0, y);
            spline.add_point(left + 50.0, y + 50.0);
            if i == 4 {
                spline.set_background_color([255, 0, 0]);
            }
            spline.set_stroke_color(yellow);
            if i == 2 {
                spline.show_control_points([0, 255, 255], 5);
            }
            if i == 3 {
                spline.show_interpolation_points([255, 0, 255], 5);
            }
            spline.set_spline_tension(tension);
            splines.push(spline);
        }
    }

    Ok(splines)
}
